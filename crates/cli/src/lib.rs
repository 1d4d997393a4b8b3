//! Command-line front end for the OpenChat message pipeline.
//!
//! Every command reads its input text from an argument or stdin and writes
//! its result to stdout, so the pipeline can be scripted or used to check
//! stored rows by hand.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

pub use commands::execute;

/// OpenChat message markup tools.
#[derive(Debug, Parser)]
#[command(name = "openchat")]
#[command(about = "OpenChat message markup tools")]
pub struct Cli {
    /// Configuration file (defaults to config/ and OPENCHAT__* variables).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Expand `:shortcode:` tokens.
    Expand {
        /// Input text; `-` or absent reads stdin.
        text: Option<String>,
    },
    /// Emoji lexicon queries.
    Emoji {
        #[command(subcommand)]
        command: EmojiCommand,
    },
    /// Mention tools.
    Mention {
        #[command(subcommand)]
        command: MentionCommand,
    },
    /// Prepare a message and render it.
    Render {
        /// Input text; `-` or absent reads stdin.
        text: Option<String>,
        /// JSON file with the known users.
        #[arg(long)]
        users: Option<PathBuf>,
        /// Treat the input as a stored message row (`{content, mentions}`).
        #[arg(long, default_value_t = false)]
        stored: bool,
        /// Output format.
        #[arg(long, value_enum, default_value_t = RenderFormat::Html)]
        format: RenderFormat,
    },
}

/// Emoji subcommands.
#[derive(Debug, Subcommand)]
pub enum EmojiCommand {
    /// Ranked search for autocomplete.
    Search {
        /// Search query.
        query: String,
        /// Maximum results (defaults to the configured limit).
        #[arg(long)]
        limit: Option<usize>,
    },
    /// List categories.
    Categories,
    /// List the emojis of one category.
    List {
        /// Category name, e.g. `smileys`.
        category: String,
    },
}

/// Mention subcommands.
#[derive(Debug, Subcommand)]
pub enum MentionCommand {
    /// Show the autocomplete context at a caret.
    Context {
        /// Input text; `-` or absent reads stdin.
        text: Option<String>,
        /// Caret byte offset (defaults to the end of the text).
        #[arg(long)]
        caret: Option<usize>,
    },
    /// Rank users for a partial mention.
    Suggest {
        /// Text typed after the `@`.
        fragment: String,
        /// JSON file with the known users.
        #[arg(long)]
        users: PathBuf,
        /// Maximum suggestions (defaults to the configured limit).
        #[arg(long)]
        limit: Option<usize>,
    },
    /// Resolve mentions in a message.
    Resolve {
        /// Input text; `-` or absent reads stdin.
        text: Option<String>,
        /// JSON file with the known users.
        #[arg(long)]
        users: PathBuf,
    },
}

/// Output format of `render`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RenderFormat {
    /// HTML fragment.
    Html,
    /// Plain text.
    Plain,
    /// The stored row plus its segments, as JSON.
    Json,
}
