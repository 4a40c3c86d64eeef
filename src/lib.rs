//! wiki-excerpt: fetch the lead section of a Wikipedia article, format it
//! through user templates and insert it where the caller asks.
//!
//! The pieces, leaves first:
//! - [`wikipedia`]: extract API client, response parsing, disambiguation
//! - [`format`]: lead section, paragraph template, term emphasis, main template
//! - [`resolve`]: the end-to-end flow
//! - [`host`]: text sink, prompt and notifier collaborators
//! - [`config`]: settings, defaults and persistence

pub mod config;
pub mod error;
pub mod format;
pub mod host;
pub mod network;
pub mod resolve;
pub mod wikipedia;

pub use config::Settings;
pub use error::{ExcerptError, Result};
pub use resolve::{ExcerptService, Outcome};
pub use wikipedia::{Extract, WikipediaApi};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout for API requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 10;

/// Maximum timeout that can be set
pub const MAX_TIMEOUT: u64 = 30;
