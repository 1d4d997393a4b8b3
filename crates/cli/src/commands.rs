//! Command handlers.

use std::io::Read;
use std::path::Path;

use anyhow::Context;
use openchat_common::{AppError, AppResult, Config, MarkupConfig};
use openchat_markup::{
    EmojiCategory, EmojiEntry, KnownUser, RenderOptions, StoredMessage,
    detect_mention_context, expand_shortcodes, lexicon, prepare_outgoing, render_segments,
    resolve_mentions, suggest_mentions, to_html, to_plain_text,
};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::{Command, EmojiCommand, MentionCommand, RenderFormat};

/// A user record as read from a users file.
#[derive(Debug, Deserialize, Validate)]
struct UserRecord {
    #[validate(length(min = 1, max = 64))]
    username: String,
    #[validate(length(min = 1))]
    user_id: String,
    #[serde(default)]
    display_name: Option<String>,
}

impl From<UserRecord> for KnownUser {
    fn from(record: UserRecord) -> Self {
        Self::new(record.username, record.user_id, record.display_name)
    }
}

/// Run a command and return what it prints.
pub fn execute(command: &Command, config: &Config, stdin: impl Read) -> AppResult<String> {
    let markup = &config.markup;
    match command {
        Command::Expand { text } => {
            let text = input_text(text.as_deref(), stdin, markup)?;
            let expansion = expand_shortcodes(&text);
            tracing::debug!(changed = expansion.changed, "expand");
            Ok(expansion.text)
        }
        Command::Emoji { command } => emoji(command, markup),
        Command::Mention { command } => mention(command, markup, stdin),
        Command::Render {
            text,
            users,
            stored,
            format,
        } => {
            let options = render_options(markup);
            let message = if *stored {
                stored_message(&read_input(text.as_deref(), stdin)?, markup)?
            } else {
                let input = input_text(text.as_deref(), stdin, markup)?;
                let users = load_users(users.as_deref())?;
                let outgoing = prepare_outgoing(&input, &users, &options);
                StoredMessage {
                    content: outgoing.content,
                    mentions: outgoing.mentions,
                }
            };

            match format {
                RenderFormat::Html => Ok(to_html(&message.content, &message.mentions, &options)),
                RenderFormat::Plain => Ok(to_plain_text(&message.content, &message.mentions)),
                RenderFormat::Json => {
                    let segments = render_segments(&message.content, &message.mentions);
                    Ok(serde_json::to_string_pretty(&json!({
                        "content": message.content,
                        "mentions": message.mentions,
                        "segments": segments,
                    }))?)
                }
            }
        }
    }
}

fn emoji(command: &EmojiCommand, markup: &MarkupConfig) -> AppResult<String> {
    match command {
        EmojiCommand::Search { query, limit } => {
            let limit = limit.unwrap_or(markup.emoji_search_limit);
            Ok(emoji_lines(lexicon::search(query, limit)))
        }
        EmojiCommand::Categories => Ok(lexicon::categories()
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join("\n")),
        EmojiCommand::List { category } => {
            let category = EmojiCategory::from_name(category)
                .ok_or_else(|| AppError::BadRequest(format!("Unknown category: {category}")))?;
            Ok(emoji_lines(lexicon::by_category(category)))
        }
    }
}

fn mention(command: &MentionCommand, markup: &MarkupConfig, stdin: impl Read) -> AppResult<String> {
    match command {
        MentionCommand::Context { text, caret } => {
            let text = input_text(text.as_deref(), stdin, markup)?;
            let caret = caret.unwrap_or(text.len());
            Ok(serde_json::to_string(&detect_mention_context(&text, caret))?)
        }
        MentionCommand::Suggest {
            fragment,
            users,
            limit,
        } => {
            let users = load_users(Some(users.as_path()))?;
            let limit = limit.unwrap_or(markup.suggestion_limit);
            let ranked = suggest_mentions(fragment, &users, limit);
            Ok(ranked
                .iter()
                .map(|u| format!("@{}\t{}", u.username, u.label()))
                .collect::<Vec<_>>()
                .join("\n"))
        }
        MentionCommand::Resolve { text, users } => {
            let text = input_text(text.as_deref(), stdin, markup)?;
            let users = load_users(Some(users.as_path()))?;
            let resolution = resolve_mentions(&text, &users, markup.mention_matching);
            Ok(serde_json::to_string_pretty(&resolution)?)
        }
    }
}

fn emoji_lines(entries: Vec<&EmojiEntry>) -> String {
    entries
        .iter()
        .map(|e| format!("{}\t{}", e.glyph, e.shortcode()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Read the input text from the argument or stdin and enforce the length cap.
fn input_text(arg: Option<&str>, stdin: impl Read, markup: &MarkupConfig) -> AppResult<String> {
    let text = read_input(arg, stdin)?;
    check_length(&text, markup)?;
    Ok(text)
}

/// The positional argument, or stdin when it is absent or `-`.
fn read_input(arg: Option<&str>, mut stdin: impl Read) -> AppResult<String> {
    match arg {
        Some(text) if text != "-" => Ok(text.to_string()),
        _ => {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf)?;
            // Piped input ends with a newline, CRLF on Windows.
            let len = buf.trim_end_matches(['\r', '\n']).len();
            buf.truncate(len);
            Ok(buf)
        }
    }
}

fn check_length(text: &str, markup: &MarkupConfig) -> AppResult<()> {
    let len = text.chars().count();
    if len > markup.max_message_length {
        return Err(AppError::BadRequest(format!(
            "Message is {len} characters long, the limit is {}",
            markup.max_message_length
        )));
    }
    Ok(())
}

/// Parse a stored row. The length cap applies to its content, which must
/// already have its shortcodes expanded.
fn stored_message(row: &str, markup: &MarkupConfig) -> AppResult<StoredMessage> {
    let message: StoredMessage = serde_json::from_str(row)?;
    check_length(&message.content, markup)?;
    if expand_shortcodes(&message.content).changed {
        return Err(AppError::Validation(
            "Stored content still contains emoji shortcodes".to_string(),
        ));
    }
    Ok(message)
}

/// Load and validate a users file. No file means no known users.
fn load_users(path: Option<&Path>) -> AppResult<Vec<KnownUser>> {
    let Some(path) = path else {
        return Ok(Vec::new());
    };
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading users file {}", path.display()))?;
    let records: Vec<UserRecord> = serde_json::from_str(&raw)
        .with_context(|| format!("parsing users file {}", path.display()))?;
    for record in &records {
        record.validate()?;
    }
    tracing::debug!(count = records.len(), path = %path.display(), "loaded users");
    Ok(records.into_iter().map(KnownUser::from).collect())
}

fn render_options(markup: &MarkupConfig) -> RenderOptions {
    RenderOptions {
        mention_matching: markup.mention_matching,
        link_target_blank: markup.link_target_blank,
    }
}
