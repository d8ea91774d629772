use clap::builder::TypedValueParser as _;
use clap::Parser;
use log::LevelFilter;

/// Default redirect URI used when `GOOGLE_REDIRECT_URI` is not set.
pub const DEFAULT_GOOGLE_REDIRECT_URI: &str = "http://localhost:4000/oauth/google/callback";

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// The OAuth client ID issued by Google for this application.
    #[arg(long, env)]
    google_client_id: Option<String>,

    /// The OAuth client secret issued by Google for this application.
    #[arg(long, env, hide_env_values = true)]
    google_client_secret: Option<String>,

    /// The redirect URI registered with Google. The authorization code and
    /// state are delivered here.
    #[arg(long, env, default_value = DEFAULT_GOOGLE_REDIRECT_URI)]
    google_redirect_uri: String,

    /// Shared secret hashed into the anti-forgery state parameter.
    #[arg(long, env, hide_env_values = true)]
    oauth_state_secret: Option<String>,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

impl Config {
    pub fn google_client_id(&self) -> Option<String> {
        self.google_client_id.clone()
    }

    pub fn google_client_secret(&self) -> Option<String> {
        self.google_client_secret.clone()
    }

    pub fn google_redirect_uri(&self) -> &str {
        &self.google_redirect_uri
    }

    pub fn oauth_state_secret(&self) -> Option<String> {
        self.oauth_state_secret.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    const VARS: [&str; 5] = [
        "GOOGLE_CLIENT_ID",
        "GOOGLE_CLIENT_SECRET",
        "GOOGLE_REDIRECT_URI",
        "OAUTH_STATE_SECRET",
        "LOG_LEVEL_FILTER",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_defaults_without_env() {
        clear_env();
        let config = Config::try_parse_from(["google_oauth_rs"]).unwrap();

        assert_eq!(config.google_client_id(), None);
        assert_eq!(config.google_client_secret(), None);
        assert_eq!(config.oauth_state_secret(), None);
        assert_eq!(config.google_redirect_uri(), DEFAULT_GOOGLE_REDIRECT_URI);
        assert_eq!(config.log_level_filter, LevelFilter::Info);
    }

    #[test]
    #[serial]
    fn test_values_from_env() {
        clear_env();
        env::set_var("GOOGLE_CLIENT_ID", "client_123");
        env::set_var("GOOGLE_CLIENT_SECRET", "secret_123");
        env::set_var("GOOGLE_REDIRECT_URI", "https://app.example.com/callback");
        env::set_var("OAUTH_STATE_SECRET", "state_123");
        env::set_var("LOG_LEVEL_FILTER", "DEBUG");

        let config = Config::try_parse_from(["google_oauth_rs"]).unwrap();

        assert_eq!(config.google_client_id(), Some("client_123".to_string()));
        assert_eq!(config.google_client_secret(), Some("secret_123".to_string()));
        assert_eq!(
            config.google_redirect_uri(),
            "https://app.example.com/callback"
        );
        assert_eq!(config.oauth_state_secret(), Some("state_123".to_string()));
        assert_eq!(config.log_level_filter, LevelFilter::Debug);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_flags_override_env() {
        clear_env();
        env::set_var("GOOGLE_CLIENT_ID", "from_env");

        let config =
            Config::try_parse_from(["google_oauth_rs", "--google-client-id", "from_flag"]).unwrap();

        assert_eq!(config.google_client_id(), Some("from_flag".to_string()));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_rejects_unknown_log_level() {
        clear_env();
        let result = Config::try_parse_from(["google_oauth_rs", "--log-level-filter", "LOUD"]);
        assert!(result.is_err());
    }
}
