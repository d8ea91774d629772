use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use log::{error, info};
use oauth_client::{ClientConfig, OAuthClient};
use secrecy::SecretString;
use service::{config::Config, logging::Logger};

/// Drive the Google authorization code flow from the command line.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a fresh authorization URL to send the user to.
    AuthorizeUrl,
    /// Check a state value returned on the redirect.
    VerifyState {
        #[arg(long)]
        state: String,
    },
    /// Complete the flow: verify state, exchange the code and print the user's profile.
    Callback {
        #[arg(long)]
        code: String,
        #[arg(long)]
        state: String,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    let cli = Cli::parse();

    if let Err(e) = Logger::init_logger(&cli.config) {
        eprintln!("Failed to start logger: {e}");
    }

    let client = match client_config(&cli.config).map(OAuthClient::new) {
        Some(Ok(client)) => client,
        Some(Err(e)) => {
            error!("Failed to build OAuth client: {e}");
            std::process::exit(1);
        }
        None => std::process::exit(1),
    };

    let success = match cli.command {
        Command::AuthorizeUrl => {
            println!("{}", client.authorization_url());
            true
        }
        Command::VerifyState { state } => {
            let valid = client.verify_state(&state);
            println!("{valid}");
            valid
        }
        Command::Callback { code, state } => callback(&client, &code, &state).await,
    };

    if !success {
        std::process::exit(1);
    }
}

fn client_config(config: &Config) -> Option<ClientConfig> {
    let Some(client_id) = config.google_client_id() else {
        error!("GOOGLE_CLIENT_ID is not set");
        return None;
    };
    let Some(client_secret) = config.google_client_secret() else {
        error!("GOOGLE_CLIENT_SECRET is not set");
        return None;
    };
    let Some(state_secret) = config.oauth_state_secret() else {
        error!("OAUTH_STATE_SECRET is not set");
        return None;
    };

    Some(ClientConfig::new(
        client_id,
        SecretString::new(client_secret),
        config.google_redirect_uri().to_string(),
        SecretString::new(state_secret),
    ))
}

async fn callback(client: &OAuthClient, code: &str, state: &str) -> bool {
    if !client.verify_state(state) {
        error!("State parameter did not verify, restart the authorization flow");
        return false;
    }

    let tokens = match client.exchange_code_for_token(code).await {
        Ok(tokens) => tokens,
        Err(e) => {
            error!("Authorization code exchange failed: {e}");
            return false;
        }
    };
    info!(
        "Access token of type {} granted for scopes [{}], expires in {}s",
        tokens.token_type,
        tokens.scopes().join(", "),
        tokens.expires_in
    );

    let profile = match client.fetch_user_profile(&tokens).await {
        Ok(profile) => profile,
        Err(e) => {
            error!("Fetching user profile failed: {e}");
            return false;
        }
    };

    match serde_json::to_string_pretty(&profile) {
        Ok(json) => {
            println!("{json}");
            true
        }
        Err(e) => {
            error!("Failed to serialize user profile: {e}");
            false
        }
    }
}
