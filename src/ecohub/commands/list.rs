use crate::commands::CmdResult;
use crate::error::Result;
use crate::filter::filter_posts;
use crate::store::PostStore;

pub fn run<S: PostStore>(store: &mut S, category: &str, query: &str) -> Result<CmdResult> {
    let posts = store.load_all()?;
    let listed = filter_posts(&posts, category, query);
    Ok(CmdResult::default().with_listed_posts(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CATEGORY_ALL;
    use crate::store::memory::fixtures::{post, store_with};
    use crate::store::memory::InMemoryStore;

    #[test]
    fn lists_the_seed_on_a_fresh_store() {
        let mut store = InMemoryStore::new();
        let result = run(&mut store, CATEGORY_ALL, "").unwrap();
        assert_eq!(result.listed_posts.len(), 2);
        assert_eq!(result.listed_posts[0].id, 1);
    }

    #[test]
    fn combines_category_and_query() {
        let mut store = store_with(vec![
            post(1, "Webinar LEED ao vivo", "Eventos"),
            post(2, "Webinar interno", "Inovação"),
            post(3, "Feira de Materiais", "Eventos"),
        ]);

        let result = run(&mut store, "Eventos", "webinar").unwrap();
        assert_eq!(result.listed_posts.len(), 1);
        assert_eq!(result.listed_posts[0].id, 1);
    }
}
