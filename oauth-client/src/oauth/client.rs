//! Google authorization code flow client.

use log::*;
use secrecy::ExposeSecret;

use super::state::StateHasher;
use super::types::{AuthorizationRequest, TokenResponse, UserProfile};
use crate::config::{ClientConfig, Endpoints};
use crate::error::{Error, OAuthErrorKind};
use crate::http::{HttpClientBuilder, Method, Transport};

/// OAuth client for a single Google application.
///
/// Holds no mutable state after construction. Each operation makes at most
/// one HTTP request.
pub struct OAuthClient {
    config: ClientConfig,
    endpoints: Endpoints,
    state: StateHasher,
    transport: Transport,
}

impl OAuthClient {
    /// Create a client against the Google endpoints.
    pub fn new(config: ClientConfig) -> Result<Self, Error> {
        Self::with_endpoints(config, Endpoints::default())
    }

    /// Create a client against explicit endpoints.
    pub fn with_endpoints(config: ClientConfig, endpoints: Endpoints) -> Result<Self, Error> {
        let transport = Transport::new(HttpClientBuilder::new().build()?);
        let state = StateHasher::new(config.state_secret().clone());

        Ok(Self {
            config,
            endpoints,
            state,
            transport,
        })
    }

    /// Generate the authorization URL for user consent.
    pub fn authorization_url(&self) -> String {
        self.authorization_request().url
    }

    /// Generate the authorization URL and return it with its state value.
    pub fn authorization_request(&self) -> AuthorizationRequest {
        let state = self.generate_state_token();
        let scopes = self.config.scopes().join(" ");

        let url = format!(
            "{}?\
            client_id={}&\
            response_type=code&\
            redirect_uri={}&\
            state={}&\
            scope={}",
            self.endpoints.auth_url,
            urlencoding::encode(self.config.client_id()),
            urlencoding::encode(self.config.redirect_uri()),
            urlencoding::encode(&state),
            urlencoding::encode(&scopes)
        );

        AuthorizationRequest { url, state }
    }

    /// Generate a fresh anti-forgery state value.
    pub fn generate_state_token(&self) -> String {
        self.state.generate()
    }

    /// Check a state value returned on the redirect.
    pub fn verify_state(&self, candidate: &str) -> bool {
        self.state.verify(candidate)
    }

    /// Exchange an authorization code for an access token.
    pub async fn exchange_code_for_token(&self, code: &str) -> Result<TokenResponse, Error> {
        let form = [
            ("code", code),
            ("client_id", self.config.client_id()),
            ("client_secret", self.config.client_secret().expose_secret().as_str()),
            ("grant_type", "authorization_code"),
            ("redirect_uri", self.config.redirect_uri()),
        ];

        debug!("Exchanging Google OAuth code for tokens");

        let tokens: TokenResponse = self
            .fetch_json(Method::Post, &self.endpoints.token_url, Some(&form[..]), None)
            .await
            .map_err(|e| {
                warn!("Google OAuth code exchange failed: {}", e);
                e.into_oauth(OAuthErrorKind::TokenExchangeFailed)
            })?;

        info!("Successfully exchanged Google OAuth code for tokens");
        Ok(tokens)
    }

    /// Get the user's profile with an access token.
    pub async fn fetch_user_profile(&self, tokens: &TokenResponse) -> Result<UserProfile, Error> {
        let profile: UserProfile = self
            .fetch_json(
                Method::Get,
                &self.endpoints.userinfo_url,
                None,
                Some(tokens.access_token.as_str()),
            )
            .await
            .map_err(|e| {
                warn!("Google user info request failed: {}", e);
                e.into_oauth(OAuthErrorKind::UserInfoFailed)
            })?;

        Ok(profile)
    }

    async fn fetch_json<T: serde::de::DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        form: Option<&[(&str, &str)]>,
        bearer: Option<&str>,
    ) -> Result<T, Error> {
        let body = self.transport.send(method, url, form, bearer).await?;
        serde_json::from_str(&body).map_err(|e| {
            warn!("Failed to parse response from {}: {:?}", url, e);
            Error::from(e)
        })
    }
}
