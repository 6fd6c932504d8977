use crate::error::{HubError, Result};
use crate::model::{display_date, next_post_id, Post, DEFAULT_CATEGORY, DEFAULT_READ_TIME};
use chrono::Utc;
use std::env;
use std::fs;
use std::path::Path;
use std::process::Command;

/// The fields being authored. A draft is either brand new or a revision
/// of an existing post, in which case the original id and date ride along
/// so committing replaces instead of duplicating.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub read_time: String,
    pub image_url: String,
    origin: Option<Origin>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Origin {
    id: i64,
    date: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorPhase {
    Drafting,
    Previewing,
}

/// A linear workflow producing one post.
///
/// Starts blank except for the category and read-time defaults. Field
/// edits keep it in `Drafting`; `toggle_preview` switches to a read-only
/// rendering and back without losing anything. `submit` validates and
/// yields the finished post (the success exit); dropping the editor is
/// the abort exit and touches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Editor {
    pub draft: Draft,
    phase: EditorPhase,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self {
            draft: Draft {
                title: String::new(),
                excerpt: String::new(),
                content: String::new(),
                category: DEFAULT_CATEGORY.into(),
                read_time: DEFAULT_READ_TIME.into(),
                image_url: String::new(),
                origin: None,
            },
            phase: EditorPhase::Drafting,
        }
    }

    /// Seeds the workflow from an existing post, preserving its id and
    /// date so the commit replaces it in place.
    pub fn revise(post: &Post) -> Self {
        Self {
            draft: Draft {
                title: post.title.clone(),
                excerpt: post.excerpt.clone(),
                content: post.content.clone(),
                category: post.category.clone(),
                read_time: post.read_time.clone(),
                image_url: post.image_url.clone(),
                origin: Some(Origin {
                    id: post.id,
                    date: post.date.clone(),
                }),
            },
            phase: EditorPhase::Drafting,
        }
    }

    pub fn phase(&self) -> EditorPhase {
        self.phase
    }

    pub fn toggle_preview(&mut self) {
        self.phase = match self.phase {
            EditorPhase::Drafting => EditorPhase::Previewing,
            EditorPhase::Previewing => EditorPhase::Drafting,
        };
    }

    /// Read-only rendering of the current draft fields.
    pub fn preview(&self) -> String {
        let title = if self.draft.title.is_empty() {
            "Título em branco"
        } else {
            &self.draft.title
        };
        let excerpt = if self.draft.excerpt.is_empty() {
            "Resumo do artigo em branco..."
        } else {
            &self.draft.excerpt
        };
        let content = if self.draft.content.is_empty() {
            "Nenhum conteúdo escrito ainda."
        } else {
            &self.draft.content
        };
        format!("{}\n\n{}\n\n{}", title, excerpt, content)
    }

    /// Where the post will live once published.
    pub fn slug_preview(&self) -> String {
        if self.draft.title.trim().is_empty() {
            return "/artigos/o-slug-aparecera-aqui".into();
        }
        format!("/artigos/{}", slug::slugify(&self.draft.title))
    }

    /// Validates and produces the finished post. A failed validation
    /// leaves the editor in `Drafting` untouched and nothing persisted;
    /// committing the returned post is the caller's job.
    pub fn submit(&self) -> Result<Post> {
        if self.draft.title.trim().is_empty() || self.draft.content.trim().is_empty() {
            return Err(HubError::Validation(
                "title and content are both required to publish".into(),
            ));
        }

        let (id, date) = match &self.draft.origin {
            Some(origin) => (origin.id, origin.date.clone()),
            None => (next_post_id(), display_date(Utc::now())),
        };

        Ok(Post {
            id,
            date,
            category: if self.draft.category.is_empty() {
                DEFAULT_CATEGORY.into()
            } else {
                self.draft.category.clone()
            },
            title: self.draft.title.clone(),
            excerpt: self.draft.excerpt.clone(),
            content: self.draft.content.clone(),
            image_url: self.draft.image_url.clone(),
            read_time: if self.draft.read_time.is_empty() {
                DEFAULT_READ_TIME.into()
            } else {
                self.draft.read_time.clone()
            },
        })
    }
}

/// The title-and-content half of a draft as round-tripped through the
/// user's editor. Buffer format: first line is the title, then a blank
/// line, then the content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorBuffer {
    pub title: String,
    pub content: String,
}

impl EditorBuffer {
    pub fn new(title: String, content: String) -> Self {
        Self { title, content }
    }

    pub fn to_buffer(&self) -> String {
        if self.content.is_empty() {
            format!("{}\n\n", self.title)
        } else {
            format!("{}\n\n{}", self.title, self.content)
        }
    }

    pub fn from_buffer(buffer: &str) -> Self {
        let mut lines = buffer.lines();
        let title = lines.next().unwrap_or_default().trim().to_string();
        let rest: Vec<&str> = lines.collect();
        let content = rest.join("\n").trim().to_string();
        Self { title, content }
    }
}

/// Resolves the editor command: $EDITOR, then $VISUAL, then common
/// fallbacks on the PATH.
pub fn resolve_editor() -> Result<String> {
    for var in ["EDITOR", "VISUAL"] {
        if let Ok(editor) = env::var(var) {
            if !editor.is_empty() {
                return Ok(editor);
            }
        }
    }

    for fallback in &["vim", "vi", "nano"] {
        if Command::new("which")
            .arg(fallback)
            .output()
            .map(|o| o.status.success())
            .unwrap_or(false)
        {
            return Ok((*fallback).to_string());
        }
    }

    Err(HubError::Api(
        "No editor found. Set $EDITOR environment variable.".to_string(),
    ))
}

fn open_in_editor<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let editor = resolve_editor()?;
    let path = file_path.as_ref();

    let status = Command::new(&editor)
        .arg(path)
        .status()
        .map_err(|e| HubError::Api(format!("Failed to launch editor '{}': {}", editor, e)))?;

    if !status.success() {
        return Err(HubError::Api(format!(
            "Editor '{}' exited with non-zero status",
            editor
        )));
    }

    fs::read_to_string(path).map_err(HubError::Io)
}

/// Opens the user's editor on a temp file seeded with `initial` and
/// returns the edited buffer.
pub fn edit_in_editor(initial: &EditorBuffer) -> Result<EditorBuffer> {
    let temp_file = env::temp_dir().join("ecohub_draft.txt");
    fs::write(&temp_file, initial.to_buffer()).map_err(HubError::Io)?;

    let result = open_in_editor(&temp_file);
    let _ = fs::remove_file(&temp_file);

    Ok(EditorBuffer::from_buffer(&result?))
}
