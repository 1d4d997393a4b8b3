//! Common utilities and shared types for openchat-rs.
//!
//! This crate provides foundational components used across all openchat-rs crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//! - **Logging**: Subscriber setup via [`init_tracing`]
//!
//! # Example
//!
//! ```no_run
//! use openchat_common::{AppResult, Config, init_tracing};
//!
//! fn example() -> AppResult<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config.logging);
//!     println!("Emoji search limit: {}", config.markup.emoji_search_limit);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;

pub use config::{Config, LoggingConfig, MarkupConfig};
pub use error::{AppError, AppResult};
pub use logging::init_tracing;
