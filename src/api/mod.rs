//! HTTP API: routing, request handling and serving

pub mod handler;
pub mod helpers;
pub mod server;
pub mod summarize;

pub use handler::{AppState, router};
pub use server::serve;
pub use summarize::summarize_text;
