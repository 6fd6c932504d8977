use super::{seed_posts, PostStore};
use crate::error::{HubError, Result};
use crate::model::Post;
use std::fs;
use std::path::{Path, PathBuf};

const POSTS_FILENAME: &str = "posts.json";

/// File-backed store: the whole collection lives in a single JSON array.
///
/// Unparseable data fails loud rather than resetting to the seed; the
/// bootstrap only runs when the file does not exist at all.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn posts_file(&self) -> PathBuf {
        self.root.join(POSTS_FILENAME)
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(HubError::Io)?;
        }
        Ok(())
    }
}

impl PostStore for FileStore {
    fn load_all(&mut self) -> Result<Vec<Post>> {
        let file = self.posts_file();
        if !file.exists() {
            let seed = seed_posts();
            self.save_all(&seed)?;
            return Ok(seed);
        }

        let content = fs::read_to_string(&file).map_err(HubError::Io)?;
        let posts: Vec<Post> =
            serde_json::from_str(&content).map_err(HubError::Serialization)?;
        Ok(posts)
    }

    fn save_all(&mut self, posts: &[Post]) -> Result<()> {
        self.ensure_dir(&self.root)?;
        let content = serde_json::to_string_pretty(posts).map_err(HubError::Serialization)?;
        fs::write(self.posts_file(), content).map_err(HubError::Io)?;
        Ok(())
    }
}
