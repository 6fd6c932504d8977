use crate::model::{Post, CATEGORY_ALL};

/// Narrows a collection to the posts matching a category and a free-text
/// query. Binary inclusion only, input order preserved.
///
/// The sentinel category [`CATEGORY_ALL`] disables the category
/// restriction; any other value must equal the post's category exactly
/// (case-sensitive). The query is matched case-insensitively as a
/// substring of the title or the excerpt; an empty query matches every
/// post.
pub fn filter_posts(posts: &[Post], category: &str, query: &str) -> Vec<Post> {
    let query = query.to_lowercase();
    posts
        .iter()
        .filter(|post| {
            let in_category = category == CATEGORY_ALL || post.category == category;
            let matches_query = post.title.to_lowercase().contains(&query)
                || post.excerpt.to_lowercase().contains(&query);
            in_category && matches_query
        })
        .cloned()
        .collect()
}
