//! # oauth-client
//!
//! Authorization code flow client for Google accounts:
//! - Authorization URL generation with an anti-forgery state value
//! - State verification
//! - Authorization code exchange for an access token
//! - User profile retrieval with the access token
//!
//! ## Usage
//!
//! ```rust,ignore
//! use oauth_client::{ClientConfig, OAuthClient};
//!
//! let client = OAuthClient::new(ClientConfig::new(
//!     client_id,
//!     client_secret,
//!     redirect_uri,
//!     state_secret,
//! ))?;
//!
//! let url = client.authorization_url();
//! // ... user comes back with `code` and `state` ...
//! if client.verify_state(&state) {
//!     let tokens = client.exchange_code_for_token(&code).await?;
//!     let profile = client.fetch_user_profile(&tokens).await?;
//! }
//! ```

pub mod config;
pub mod error;
pub mod http;
pub mod oauth;

// Re-export commonly used types
pub use config::{ClientConfig, Endpoints};
pub use error::{Error, ErrorKind};
pub use oauth::{AuthorizationRequest, OAuthClient, TokenResponse, UserProfile};
