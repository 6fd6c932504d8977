use crate::commands::{CmdMessage, CmdResult};
use crate::error::{HubError, Result};
use crate::store::PostStore;
use std::io::{self, Write};

/// Permanently removes one post. Destructive, so the user confirms
/// interactively unless `skip_confirm` is set. There is no undo.
pub fn run<S: PostStore>(store: &mut S, id: i64, skip_confirm: bool) -> Result<CmdResult> {
    let posts = store.load_all()?;
    let target = posts.iter().find(|p| p.id == id);

    let Some(target) = target else {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!("No post with id {}.", id)));
        return Ok(result);
    };
    let title = target.title.clone();

    if !skip_confirm {
        println!("This will permanently remove the post:");
        println!("  {} {}", id, title);
        print!("[Y] To delete: ");
        io::stdout().flush().map_err(HubError::Io)?;

        let mut input = String::new();
        io::stdin().read_line(&mut input).map_err(HubError::Io)?;

        if input.trim() != "Y" {
            let mut result = CmdResult::default();
            result.add_message(CmdMessage::info("Operation cancelled."));
            return Ok(result);
        }
    }

    store.remove(id)?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Deleted: {} {}", id, title)));
    Ok(result)
}
