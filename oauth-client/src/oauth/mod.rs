//! OAuth 2.0 authorization code flow against Google.

mod client;
mod state;
mod types;

pub use client::OAuthClient;
pub use state::StateHasher;
pub use types::{AuthorizationRequest, TokenResponse, UserProfile};
