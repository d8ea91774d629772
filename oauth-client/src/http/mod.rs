//! HTTP transport shared by the OAuth flow steps.

mod client;
mod transport;

pub use client::HttpClientBuilder;
pub use transport::{Method, Transport};
