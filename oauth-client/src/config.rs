//! Client credentials and provider endpoints.

use secrecy::SecretString;

/// Google authorization endpoint the user is redirected to.
pub const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
/// Google token endpoint for the authorization code exchange.
pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
/// Google user info endpoint.
pub const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

/// Scopes requested on every authorization, in query order.
pub const GOOGLE_SCOPES: [&str; 2] = [
    "https://www.googleapis.com/auth/userinfo.profile",
    "https://www.googleapis.com/auth/userinfo.email",
];

/// Provider endpoint URLs.
///
/// `Endpoints::default()` points at Google. Tests construct their own value to
/// target a mock server.
#[derive(Debug, Clone, PartialEq)]
pub struct Endpoints {
    pub auth_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            auth_url: GOOGLE_AUTH_URL.to_string(),
            token_url: GOOGLE_TOKEN_URL.to_string(),
            userinfo_url: GOOGLE_USERINFO_URL.to_string(),
        }
    }
}

/// Immutable client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    client_id: String,
    client_secret: SecretString,
    redirect_uri: String,
    state_secret: SecretString,
    scopes: Vec<String>,
}

impl ClientConfig {
    /// Create a client configuration with the fixed profile and email scopes.
    ///
    /// # Arguments
    ///
    /// * `client_id` - Google OAuth client ID
    /// * `client_secret` - Google OAuth client secret
    /// * `redirect_uri` - OAuth redirect URI registered with Google
    /// * `state_secret` - Shared secret hashed into the anti-forgery state value
    pub fn new(
        client_id: String,
        client_secret: SecretString,
        redirect_uri: String,
        state_secret: SecretString,
    ) -> Self {
        Self {
            client_id,
            client_secret,
            redirect_uri,
            state_secret,
            scopes: GOOGLE_SCOPES.iter().map(|s| s.to_string()).collect(),
        }
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    pub fn client_secret(&self) -> &SecretString {
        &self.client_secret
    }

    pub fn redirect_uri(&self) -> &str {
        &self.redirect_uri
    }

    pub fn state_secret(&self) -> &SecretString {
        &self.state_secret
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }
}
