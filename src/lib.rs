#![warn(missing_docs)]
//! # Async Request
//!
//! A thin asynchronous HTTP request helper. Each operation builds one request
//! against a caller supplied URL, attaches the JSON conventions (a
//! `Content-Type: application/json` header on every request, an optional JSON
//! body, an optional verbatim `Authorization` header) and hands back the
//! transport's response untouched for the caller to interpret.
//!
//! ## Operations
//!
//! - [get]
//! - [post]
//! - [patch]
//! - [destroy]
//!
//! All four take a [types::RequestOptions] and resolve as soon as response
//! headers are available. Body consumption is the caller's responsibility:
//!
//! ```no_run
//! use async_request::{get, types::RequestOptions};
//!
//! # async fn run() -> Result<(), reqwest::Error> {
//! let response = get(RequestOptions::new("http://localhost:4000/api/v1.json")).await?;
//! assert_eq!(200, response.status().as_u16());
//! let data = response.json::<serde_json::Value>().await?;
//! # Ok(())
//! # }
//! ```
//!
//! There are no retries, no timeouts of our own, no caching and no status
//! code classification: a 4xx or 5xx response is returned like any other, and
//! transport failures propagate as the transport's error, unwrapped.

mod http;
mod tests;
pub mod types;

pub use http::{destroy, get, patch, post};

/// Re exports from the crate
pub mod re_exports {
    pub use reqwest::{self, Response};
    pub use serde_json::{self, json, Map, Value};
}
