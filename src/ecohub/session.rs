use crate::error::{HubError, Result};
use std::fs;
use std::path::{Path, PathBuf};

const SESSION_FILENAME: &str = "session";
const SESSION_SENTINEL: &str = "authorized";

/// Checks a credential pair. Injected into [`AdminSession`] so a real
/// verifier can replace the compiled-in pair without touching any of the
/// editing code paths.
pub trait CredentialVerifier {
    fn verify(&self, identifier: &str, secret: &str) -> bool;
}

/// The single shared admin credential pair, compiled in. A known
/// weakness kept behind the trait seam.
#[derive(Debug, Default)]
pub struct StaticCredentials;

impl StaticCredentials {
    pub const IDENTIFIER: &'static str = "editor@ecohub.local";
    pub const SECRET: &'static str = "1234";
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, identifier: &str, secret: &str) -> bool {
        identifier == Self::IDENTIFIER && secret == Self::SECRET
    }
}

/// Authorization flag gating every mutating operation.
///
/// Login writes a sentinel marker file next to the store; on startup the
/// marker restores authorization without re-checking credentials. Logout
/// clears both the flag and the marker. Removing the store directory
/// ends the session.
pub struct AdminSession<V: CredentialVerifier> {
    verifier: V,
    marker: PathBuf,
    authorized: bool,
}

impl<V: CredentialVerifier> AdminSession<V> {
    /// Opens a session rooted at the store directory, restoring a prior
    /// authorization if the marker is present and intact.
    pub fn open(root: &Path, verifier: V) -> Self {
        let marker = root.join(SESSION_FILENAME);
        let authorized = fs::read_to_string(&marker)
            .map(|s| s.trim() == SESSION_SENTINEL)
            .unwrap_or(false);
        Self {
            verifier,
            marker,
            authorized,
        }
    }

    /// Compares the pair against the verifier. On match sets the flag and
    /// persists the marker; on mismatch reports a generic rejection with
    /// no distinction between bad identifier and bad secret.
    pub fn login(&mut self, identifier: &str, secret: &str) -> Result<bool> {
        if !self.verifier.verify(identifier, secret) {
            return Ok(false);
        }
        if let Some(dir) = self.marker.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(HubError::Io)?;
            }
        }
        fs::write(&self.marker, SESSION_SENTINEL).map_err(HubError::Io)?;
        self.authorized = true;
        Ok(true)
    }

    pub fn logout(&mut self) -> Result<()> {
        if self.marker.exists() {
            fs::remove_file(&self.marker).map_err(HubError::Io)?;
        }
        self.authorized = false;
        Ok(())
    }

    pub fn is_authorized(&self) -> bool {
        self.authorized
    }
}
