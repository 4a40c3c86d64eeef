//! HTTP networking module
//!
//! Provides the HTTP client used to reach the Wikipedia API.

mod client;

pub use client::{user_agent, HttpClient};
