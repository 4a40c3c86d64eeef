//! Excerpt orchestration module
//!
//! Runs a lookup end to end: fetch, parse, follow at most one
//! disambiguation page, format and insert.

mod executor;
mod models;

pub use executor::ExcerptService;
pub use models::*;
