use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use ecohub::api::{CmdMessage, HubApi, MessageLevel};
use ecohub::editor::{edit_in_editor, Editor, EditorBuffer};
use ecohub::error::{HubError, Result};
use ecohub::image::{optimize, ImagePreset};
use ecohub::model::{Post, CATEGORY_ALL};
use ecohub::session::{AdminSession, StaticCredentials};
use ecohub::store::fs::FileStore;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: HubApi<FileStore, StaticCredentials>,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context()?;

    match cli.command {
        Some(Commands::List { category, search }) => handle_list(&mut ctx, category, search),
        Some(Commands::View { id }) => handle_view(&mut ctx, id),
        Some(Commands::Publish {
            title,
            content,
            excerpt,
            category,
            read_time,
            image,
            image_preset,
            preview,
            no_editor,
        }) => handle_publish(
            &mut ctx,
            title,
            content,
            excerpt,
            category,
            read_time,
            image,
            image_preset,
            preview,
            no_editor,
        ),
        Some(Commands::Edit {
            id,
            excerpt,
            category,
            read_time,
            image,
            image_preset,
            no_editor,
        }) => handle_edit(
            &mut ctx,
            id,
            excerpt,
            category,
            read_time,
            image,
            image_preset,
            no_editor,
        ),
        Some(Commands::Delete { id, yes }) => handle_delete(&mut ctx, id, yes),
        Some(Commands::Login { identifier, secret }) => handle_login(&mut ctx, identifier, secret),
        Some(Commands::Logout) => handle_logout(&mut ctx),
        Some(Commands::Status) => handle_status(&ctx),
        None => handle_list(&mut ctx, None, None),
    }
}

fn data_dir() -> Result<PathBuf> {
    if let Ok(home) = std::env::var("ECOHUB_HOME") {
        if !home.is_empty() {
            return Ok(PathBuf::from(home));
        }
    }
    let proj_dirs = ProjectDirs::from("com", "ecohub", "ecohub")
        .ok_or_else(|| HubError::Store("Could not determine data dir".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn init_context() -> Result<AppContext> {
    let root = data_dir()?;
    let store = FileStore::new(root.clone());
    let session = AdminSession::open(&root, StaticCredentials);
    Ok(AppContext {
        api: HubApi::new(store, session),
    })
}

fn handle_list(
    ctx: &mut AppContext,
    category: Option<String>,
    search: Option<String>,
) -> Result<()> {
    let category = category.unwrap_or_else(|| CATEGORY_ALL.to_string());
    let search = search.unwrap_or_default();
    let result = ctx.api.list_posts(&category, &search)?;
    print_posts(&result.listed_posts);
    print_messages(&result.messages);
    Ok(())
}

fn handle_view(ctx: &mut AppContext, id: i64) -> Result<()> {
    let result = ctx.api.view_post(id)?;
    for post in &result.listed_posts {
        print_full_post(post);
    }
    print_messages(&result.messages);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_publish(
    ctx: &mut AppContext,
    title: Option<String>,
    content: Option<String>,
    excerpt: Option<String>,
    category: Option<String>,
    read_time: Option<String>,
    image: Option<PathBuf>,
    image_preset: String,
    preview: bool,
    no_editor: bool,
) -> Result<()> {
    // the editor route only exists for an authorized session; the API
    // gate would catch the commit anyway, but don't open the editor first
    if !ctx.api.is_authorized() {
        return Err(HubError::Unauthorized);
    }

    let (final_title, final_content) = if no_editor {
        (title.unwrap_or_default(), content.unwrap_or_default())
    } else {
        let initial = EditorBuffer::new(title.unwrap_or_default(), content.unwrap_or_default());
        let edited = edit_in_editor(&initial)?;
        (edited.title, edited.content)
    };

    let mut editor = Editor::new();
    editor.draft.title = final_title;
    editor.draft.content = final_content;
    apply_draft_flags(&mut editor, excerpt, category, read_time);
    if let Some(path) = image {
        attach_cover(&mut editor, &path, &image_preset)?;
    }

    if preview {
        editor.toggle_preview();
        println!("{}", editor.preview());
        println!("\n{}", editor.slug_preview().dimmed());
        return Ok(());
    }

    let result = ctx.api.publish(&editor)?;
    print_messages(&result.messages);
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_edit(
    ctx: &mut AppContext,
    id: i64,
    excerpt: Option<String>,
    category: Option<String>,
    read_time: Option<String>,
    image: Option<PathBuf>,
    image_preset: String,
    no_editor: bool,
) -> Result<()> {
    // the edit affordance only exists for an authorized session; the API
    // gate below would catch it anyway, but don't open the editor first
    if !ctx.api.is_authorized() {
        return Err(HubError::Unauthorized);
    }

    let result = ctx.api.view_post(id)?;
    let post = result.listed_posts[0].clone();
    let mut editor = Editor::revise(&post);

    if !no_editor {
        let initial = EditorBuffer::new(post.title.clone(), post.content.clone());
        let edited = edit_in_editor(&initial)?;
        editor.draft.title = edited.title;
        editor.draft.content = edited.content;
    }
    apply_draft_flags(&mut editor, excerpt, category, read_time);
    if let Some(path) = image {
        attach_cover(&mut editor, &path, &image_preset)?;
    }

    let result = ctx.api.publish(&editor)?;
    print_messages(&result.messages);
    Ok(())
}

fn apply_draft_flags(
    editor: &mut Editor,
    excerpt: Option<String>,
    category: Option<String>,
    read_time: Option<String>,
) {
    if let Some(excerpt) = excerpt {
        editor.draft.excerpt = excerpt;
    }
    if let Some(category) = category {
        editor.draft.category = category;
    }
    if let Some(read_time) = read_time {
        editor.draft.read_time = read_time;
    }
}

fn attach_cover(editor: &mut Editor, path: &Path, preset: &str) -> Result<()> {
    let preset = ImagePreset::from_str(preset).map_err(HubError::Api)?;
    let bytes = fs::read(path).map_err(HubError::Io)?;
    editor.draft.image_url = optimize(&bytes, preset)?;
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, id: i64, yes: bool) -> Result<()> {
    let result = ctx.api.delete_post(id, yes)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_login(ctx: &mut AppContext, identifier: String, secret: String) -> Result<()> {
    if ctx.api.login(&identifier, &secret)? {
        println!("{}", "Session authorized.".green());
    } else {
        println!("{}", "Credenciais inválidas.".red());
    }
    Ok(())
}

fn handle_logout(ctx: &mut AppContext) -> Result<()> {
    ctx.api.logout()?;
    println!("Session ended.");
    Ok(())
}

fn handle_status(ctx: &AppContext) -> Result<()> {
    if ctx.api.is_authorized() {
        println!("{}", "Admin session active.".green());
    } else {
        println!("No admin session.");
    }
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

fn print_full_post(post: &Post) {
    println!(
        "{}  {}  {}",
        post.category.to_uppercase().green(),
        post.date.dimmed(),
        post.read_time.dimmed()
    );
    println!("{}", post.title.bold());
    println!("--------------------------------");
    if post.content.is_empty() {
        println!("{}", "Sem conteúdo disponível.".dimmed());
    } else {
        println!("{}", post.content);
    }
    println!();
    println!("{} {}", "cover:".dimmed(), cover_label(post).dimmed());
}

fn cover_label(post: &Post) -> String {
    let url = post.cover_url();
    if url.starts_with("data:") {
        format!("inline image ({} bytes)", url.len())
    } else {
        url.to_string()
    }
}

const LINE_WIDTH: usize = 100;
const DATE_WIDTH: usize = 14;

fn print_posts(posts: &[Post]) {
    if posts.is_empty() {
        println!("No posts found.");
        return;
    }

    for post in posts {
        let id_str = format!("{}. ", post.id);
        let tag = format!("[{}] ", post.category);

        let excerpt_preview: String = post
            .excerpt
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();
        let title_line = if excerpt_preview.is_empty() {
            post.title.clone()
        } else {
            format!("{} {}", post.title, excerpt_preview)
        };

        let fixed_width = id_str.width() + tag.width() + DATE_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let title_display = truncate_to_width(&title_line, available);
        let padding = available.saturating_sub(title_display.width());

        let date_col = format!("{:>width$}", post.date, width = DATE_WIDTH);
        println!(
            "{}{}{}{}{}",
            id_str,
            tag.green(),
            title_display,
            " ".repeat(padding),
            date_col.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
