//! Wikipedia extract lookup
//!
//! Fetching from the extract endpoint, parsing the query result into an
//! [`Extract`], and resolving disambiguation pages.

mod api;
pub mod disambiguation;
mod response;

pub use api::{ExtractFetcher, WikipediaApi};
pub use disambiguation::{is_ambiguous, next_search_term};
pub use response::*;
