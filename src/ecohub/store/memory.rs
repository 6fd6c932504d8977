use super::{seed_posts, PostStore};
use crate::error::Result;
use crate::model::Post;

/// In-memory store for tests. `None` means nothing was ever persisted,
/// which is the state that triggers the seed bootstrap.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    posts: Option<Vec<Post>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already persisted an empty collection, so the seed
    /// bootstrap never runs. Handy for tests that build their own data.
    pub fn empty() -> Self {
        Self {
            posts: Some(Vec::new()),
        }
    }
}

impl PostStore for InMemoryStore {
    fn load_all(&mut self) -> Result<Vec<Post>> {
        if self.posts.is_none() {
            self.posts = Some(seed_posts());
        }
        Ok(self.posts.clone().unwrap_or_default())
    }

    fn save_all(&mut self, posts: &[Post]) -> Result<()> {
        self.posts = Some(posts.to_vec());
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{DEFAULT_READ_TIME, Post};

    pub fn post(id: i64, title: &str, category: &str) -> Post {
        Post {
            id,
            date: "01 Jan, 2025".into(),
            category: category.into(),
            title: title.into(),
            excerpt: format!("Resumo de {}", title),
            content: format!("Conteúdo de {}", title),
            image_url: String::new(),
            read_time: DEFAULT_READ_TIME.into(),
        }
    }

    pub fn store_with(posts: Vec<Post>) -> InMemoryStore {
        let mut store = InMemoryStore::empty();
        store.save_all(&posts).unwrap();
        store
    }
}
