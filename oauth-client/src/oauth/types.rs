//! Records produced by the authorization code flow.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Authorization URL together with the state value embedded in it.
#[derive(Debug, Clone)]
pub struct AuthorizationRequest {
    /// Authorization URL to redirect the user to.
    pub url: String,
    /// Anti-forgery state parameter sent in `url`.
    pub state: String,
}

/// Token endpoint response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    /// Lifetime of the access token in seconds.
    pub expires_in: i64,
    /// Granted scopes, space delimited.
    #[serde(default)]
    pub scope: String,
    pub token_type: String,
    /// OpenID Connect identity token, passed through undecoded.
    #[serde(default)]
    pub id_token: Option<String>,
}

impl TokenResponse {
    /// Granted scopes as individual values.
    pub fn scopes(&self) -> Vec<&str> {
        self.scope.split_whitespace().collect()
    }

    /// When the access token expires, given when the response was received.
    ///
    /// `None` when `expires_in` is too large to represent as a date.
    pub fn expires_at(&self, issued_at: DateTime<Utc>) -> Option<DateTime<Utc>> {
        Duration::try_seconds(self.expires_in).and_then(|d| issued_at.checked_add_signed(d))
    }
}

/// Basic profile from the user info endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Provider's unique user identifier (`sub`).
    #[serde(rename = "sub")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_token_response_deserialize() {
        let json = r#"{"access_token":"abc","expires_in":3600,"scope":"profile email","token_type":"Bearer","id_token":"xyz"}"#;
        let tokens: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(tokens.access_token, "abc");
        assert_eq!(tokens.expires_in, 3600);
        assert_eq!(tokens.token_type, "Bearer");
        assert_eq!(tokens.id_token, Some("xyz".to_string()));
        assert_eq!(tokens.scopes(), vec!["profile", "email"]);
    }

    #[test]
    fn test_token_response_without_id_token() {
        let json = r#"{"access_token":"abc","expires_in":60,"token_type":"Bearer"}"#;
        let tokens: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(tokens.id_token, None);
        assert!(tokens.scopes().is_empty());
    }

    #[test]
    fn test_expires_at() {
        let tokens = TokenResponse {
            access_token: "abc".to_string(),
            expires_in: 3600,
            scope: String::new(),
            token_type: "Bearer".to_string(),
            id_token: None,
        };
        let issued_at = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(
            tokens.expires_at(issued_at),
            Some(Utc.with_ymd_and_hms(2024, 1, 1, 13, 0, 0).unwrap())
        );
    }

    #[test]
    fn test_expires_at_out_of_range() {
        let json = r#"{"access_token":"a","expires_in":9223372036854775807,"token_type":"Bearer"}"#;
        let tokens: TokenResponse = serde_json::from_str(json).unwrap();
        assert_eq!(tokens.expires_at(Utc::now()), None);

        // Representable duration, but past the last representable date
        let tokens = TokenResponse {
            expires_in: 9_000_000_000_000_000,
            ..tokens
        };
        assert_eq!(tokens.expires_at(Utc::now()), None);
    }

    #[test]
    fn test_user_profile_maps_sub_to_id() {
        let json = r#"{"sub":"1","name":"Alice","email":"a@example.com"}"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, "1");
        assert_eq!(profile.name, "Alice");
        assert_eq!(profile.email, "a@example.com");
    }
}
