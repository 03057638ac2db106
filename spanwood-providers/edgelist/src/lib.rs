//! Edge-list provider: loads undirected weighted graphs from plain text.
//!
//! The format is a header line `V E` followed by `E` edge lines `u v weight`.
//! Tokens may be separated by any mix of spaces, commas and tabs.

mod errors;
mod parser;
mod provider;

pub use errors::EdgeListError;
pub use provider::EdgeListProvider;
