use crate::commands::CmdResult;
use crate::error::{HubError, Result};
use crate::store::PostStore;

pub fn run<S: PostStore>(store: &mut S, id: i64) -> Result<CmdResult> {
    let posts = store.load_all()?;
    let post = posts
        .into_iter()
        .find(|p| p.id == id)
        .ok_or(HubError::PostNotFound(id))?;
    Ok(CmdResult::default().with_listed_posts(vec![post]))
}
