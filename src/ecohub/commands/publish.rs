use crate::commands::{CmdMessage, CmdResult};
use crate::editor::Editor;
use crate::error::Result;
use crate::store::PostStore;

/// Commits the editor's draft: validates via `submit`, then hands the
/// finished post to the store's upsert. A validation failure propagates
/// before anything is written.
pub fn run<S: PostStore>(store: &mut S, editor: &Editor) -> Result<CmdResult> {
    let post = editor.submit()?;
    store.upsert(post.clone())?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Post published ({}): {}",
        post.id, post.title
    )));
    Ok(result.with_affected_posts(vec![post]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HubError;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn publishes_a_new_post_at_the_front() {
        let mut store = InMemoryStore::new();
        let mut editor = Editor::new();
        editor.draft.title = "Guia X".into();
        editor.draft.content = "texto".into();

        let result = run(&mut store, &editor).unwrap();
        assert_eq!(result.affected_posts.len(), 1);

        let all = store.load_all().unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].title, "Guia X");
        assert!(!all[0].date.is_empty());
        // fresh id does not collide with the seed
        assert!(all.iter().filter(|p| p.id == all[0].id).count() == 1);
    }

    #[test]
    fn validation_failure_writes_nothing() {
        let mut store = InMemoryStore::new();
        let before = store.load_all().unwrap();

        let editor = Editor::new();
        assert!(matches!(
            run(&mut store, &editor),
            Err(HubError::Validation(_))
        ));
        assert_eq!(store.load_all().unwrap(), before);
    }

    #[test]
    fn republishing_a_revision_replaces_in_place() {
        let mut store = InMemoryStore::new();
        let original = store.load_all().unwrap()[1].clone();

        let mut editor = Editor::revise(&original);
        editor.draft.content = "conteúdo revisado".into();
        run(&mut store, &editor).unwrap();

        let all = store.load_all().unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[1].id, original.id);
        assert_eq!(all[1].content, "conteúdo revisado");
        assert_eq!(all[1].date, original.date);
    }
}
