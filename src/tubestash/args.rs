use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tubestash")]
#[command(about = "Curate a local library of your externally-synced videos", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Data directory override (also TUBESTASH_DATA_DIR)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ConfirmActionArg {
    KeepAll,
    DeleteAll,
    Individual,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum HypeArg {
    Up,
    Down,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Reconcile the library against a fetched snapshot file (JSON array)
    Sync {
        /// Path to the snapshot, as exported by the fetch tool
        snapshot: PathBuf,
    },

    /// Resolve all unsynced items at once
    Confirm {
        #[arg(value_enum)]
        action: ConfirmActionArg,
    },

    /// List the library
    #[command(alias = "ls")]
    List {
        /// Only items no longer present in the remote source
        #[arg(long)]
        orphans: bool,
    },

    /// Show one item in full
    Show { video_id: String },

    /// Rate an item 1-5
    Rate {
        video_id: String,

        /// The rating (omit together with --clear to remove it)
        rating: Option<u8>,

        /// Clear the rating instead
        #[arg(long, conflicts_with = "rating")]
        clear: bool,
    },

    /// Keep an unsynced item in the library
    Keep { video_id: String },

    /// Delete an item and block it from future syncs
    #[command(alias = "rm")]
    Delete { video_id: String },

    /// Add, edit or remove comments on an item
    Comment {
        #[command(subcommand)]
        action: CommentCommands,
    },

    /// Bump an item's hype counter
    Hype {
        video_id: String,

        #[arg(value_enum)]
        direction: HypeArg,
    },

    /// Search with include/exclude conditions (kind:operand)
    Search {
        /// Conditions every result must satisfy, e.g. rating:>=4
        #[arg(short, long)]
        include: Vec<String>,

        /// Conditions that knock a result out, e.g. has-comment:false
        #[arg(short = 'x', long)]
        exclude: Vec<String>,

        /// Run a saved template instead of ad-hoc conditions
        #[arg(long, conflicts_with_all = ["include", "exclude"])]
        template: Option<String>,
    },

    /// Manage saved search templates
    Template {
        #[command(subcommand)]
        action: TemplateCommands,
    },

    /// List or unblock permanently deleted items
    Retention {
        #[command(subcommand)]
        action: RetentionCommands,
    },

    /// Get or set settings
    Settings {
        /// Setting key (retention-policy)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
pub enum CommentCommands {
    /// Append a comment
    Add { video_id: String, text: String },

    /// Replace the comment at an index
    Edit {
        video_id: String,
        index: usize,
        text: String,
    },

    /// Remove the comment at an index
    #[command(alias = "rm")]
    Delete { video_id: String, index: usize },
}

#[derive(Subcommand, Debug)]
pub enum TemplateCommands {
    /// Save the given conditions under a name
    Save {
        name: String,

        #[arg(short, long)]
        include: Vec<String>,

        #[arg(short = 'x', long)]
        exclude: Vec<String>,
    },

    /// List saved templates
    #[command(alias = "ls")]
    List,

    /// Delete a template by id
    #[command(alias = "rm")]
    Delete { template_id: String },
}

#[derive(Subcommand, Debug)]
pub enum RetentionCommands {
    /// List blocked ids
    #[command(alias = "ls")]
    List,

    /// Unblock an id so the next sync may re-add it
    Restore { video_id: String },
}
