use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "ecohub")]
#[command(about = "Local-first publishing hub for the content site", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List posts, optionally narrowed by category and search text
    #[command(alias = "ls")]
    List {
        /// Category to keep ("Todos" keeps everything)
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive text matched against title and excerpt
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one post in full
    #[command(alias = "v")]
    View {
        /// Post id
        id: i64,
    },

    /// Write and publish a new post (admin)
    #[command(alias = "p")]
    Publish {
        /// Title (optional, opens the editor when omitted)
        #[arg(required = false)]
        title: Option<String>,

        /// Body text
        #[arg(required = false)]
        content: Option<String>,

        /// Short summary for the listing cards
        #[arg(long)]
        excerpt: Option<String>,

        /// Category (Certificações, Inovação, Materiais, Eventos)
        #[arg(long)]
        category: Option<String>,

        /// Read-time label, e.g. "5 min"
        #[arg(long)]
        read_time: Option<String>,

        /// Cover image file to optimize and inline
        #[arg(long)]
        image: Option<std::path::PathBuf>,

        /// Downscaling preset for --image: cover, web or mobile
        #[arg(long, default_value = "web")]
        image_preset: String,

        /// Render the draft preview instead of publishing
        #[arg(long)]
        preview: bool,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// Revise an existing post (admin)
    #[command(alias = "e")]
    Edit {
        /// Post id
        id: i64,

        /// Short summary for the listing cards
        #[arg(long)]
        excerpt: Option<String>,

        /// Category (Certificações, Inovação, Materiais, Eventos)
        #[arg(long)]
        category: Option<String>,

        /// Read-time label, e.g. "5 min"
        #[arg(long)]
        read_time: Option<String>,

        /// Cover image file to optimize and inline
        #[arg(long)]
        image: Option<std::path::PathBuf>,

        /// Downscaling preset for --image: cover, web or mobile
        #[arg(long, default_value = "web")]
        image_preset: String,

        /// Skip opening the editor
        #[arg(long)]
        no_editor: bool,
    },

    /// Permanently delete a post (admin)
    #[command(alias = "rm")]
    Delete {
        /// Post id
        id: i64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// Authenticate the admin session
    Login {
        /// Admin e-mail
        identifier: String,

        /// Admin password
        secret: String,
    },

    /// End the admin session
    Logout,

    /// Show whether the admin session is active
    Status,
}
