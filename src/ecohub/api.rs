//! # API Facade
//!
//! Single entry point for all hub operations, regardless of the UI in
//! front of it. The facade dispatches to the command layer, returns
//! structured `Result<CmdResult>` values, and owns the one rule the UI
//! must not be trusted with: every mutating operation checks the admin
//! session here, so an unauthorized mutation is unreachable rather than
//! merely hidden from the interface.
//!
//! Generic over [`PostStore`] (production `FileStore`, test
//! `InMemoryStore`) and over [`CredentialVerifier`] so authentication
//! can be swapped without touching any call site.

use crate::commands;
use crate::editor::Editor;
use crate::error::{HubError, Result};
use crate::session::{AdminSession, CredentialVerifier};
use crate::store::PostStore;

pub struct HubApi<S: PostStore, V: CredentialVerifier> {
    store: S,
    session: AdminSession<V>,
}

impl<S: PostStore, V: CredentialVerifier> HubApi<S, V> {
    pub fn new(store: S, session: AdminSession<V>) -> Self {
        Self { store, session }
    }

    pub fn list_posts(&mut self, category: &str, query: &str) -> Result<commands::CmdResult> {
        commands::list::run(&mut self.store, category, query)
    }

    pub fn view_post(&mut self, id: i64) -> Result<commands::CmdResult> {
        commands::view::run(&mut self.store, id)
    }

    pub fn publish(&mut self, editor: &Editor) -> Result<commands::CmdResult> {
        self.require_admin()?;
        commands::publish::run(&mut self.store, editor)
    }

    pub fn delete_post(&mut self, id: i64, skip_confirm: bool) -> Result<commands::CmdResult> {
        self.require_admin()?;
        commands::delete::run(&mut self.store, id, skip_confirm)
    }

    pub fn login(&mut self, identifier: &str, secret: &str) -> Result<bool> {
        self.session.login(identifier, secret)
    }

    pub fn logout(&mut self) -> Result<()> {
        self.session.logout()
    }

    pub fn is_authorized(&self) -> bool {
        self.session.is_authorized()
    }

    fn require_admin(&self) -> Result<()> {
        if self.session.is_authorized() {
            Ok(())
        } else {
            Err(HubError::Unauthorized)
        }
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
