use crate::config::ClientConfig;
use crate::domain::Provider;
use crate::utils::error::{NylasError, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "nylas")]
#[command(about = "Command line access to the Nylas v3 API")]
pub struct CliConfig {
    #[arg(long, env = "NYLAS_API_KEY", hide_env_values = true, global = true)]
    pub api_key: Option<String>,

    #[arg(long, env = "NYLAS_API_URI", global = true)]
    pub api_uri: Option<String>,

    #[arg(long, help = "TOML file with api_key / api_uri / timeout_seconds", global = true)]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Request timeout in seconds", global = true)]
    pub timeout: Option<u64>,

    #[arg(long, help = "Enable verbose output", global = true)]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines", global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Print a hosted authentication URL
    AuthUrl(AuthUrlArgs),
    /// Introspect an access token or ID token
    TokenInfo {
        #[arg(long, conflicts_with = "id_token", required_unless_present = "id_token")]
        access_token: Option<String>,
        #[arg(long)]
        id_token: Option<String>,
    },
    /// Detect the provider behind an email address
    DetectProvider {
        #[arg(long)]
        email: String,
        #[arg(long)]
        client_id: Option<String>,
    },
    #[command(subcommand)]
    Grants(GrantsCommand),
    #[command(subcommand)]
    Calendars(CalendarsCommand),
    #[command(subcommand)]
    Events(EventsCommand),
}

#[derive(Debug, Clone, Args)]
pub struct AuthUrlArgs {
    #[arg(long)]
    pub client_id: String,
    #[arg(long)]
    pub redirect_uri: String,
    #[arg(long)]
    pub provider: Option<Provider>,
    #[arg(long, value_delimiter = ',')]
    pub scope: Vec<String>,
    #[arg(long)]
    pub state: Option<String>,
    #[arg(long)]
    pub login_hint: Option<String>,
    #[arg(long, conflicts_with = "admin_consent")]
    pub pkce: bool,
    #[arg(long, help = "Microsoft admin consent; takes the credential ID")]
    pub admin_consent: Option<String>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum GrantsCommand {
    List {
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        provider: Option<String>,
    },
    Get {
        grant_id: String,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum CalendarsCommand {
    List {
        identifier: String,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        page_token: Option<String>,
    },
    Get {
        identifier: String,
        calendar_id: String,
    },
    /// Free slots for the given participants
    Availability {
        identifier: String,
        #[arg(long)]
        start_time: i64,
        #[arg(long)]
        end_time: i64,
        #[arg(long, default_value = "30")]
        duration_minutes: u32,
        #[arg(long = "participant", required = true)]
        participants: Vec<String>,
    },
}

#[derive(Debug, Clone, Subcommand)]
pub enum EventsCommand {
    List {
        identifier: String,
        #[arg(long, default_value = "primary")]
        calendar_id: String,
        #[arg(long)]
        limit: Option<u32>,
        #[arg(long)]
        page_token: Option<String>,
    },
    Get {
        identifier: String,
        event_id: String,
        #[arg(long, default_value = "primary")]
        calendar_id: String,
    },
}

impl CliConfig {
    /// Config file first, then environment / flags on top.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match (&self.config, &self.api_key) {
            (Some(path), _) => ClientConfig::from_file(path)?,
            (None, Some(api_key)) => ClientConfig::new(api_key.clone()),
            (None, None) => ClientConfig::from_env()?,
        };

        if let Some(api_key) = &self.api_key {
            config.api_key = api_key.clone();
        }
        if let Some(api_uri) = &self.api_uri {
            config.api_uri = api_uri.clone();
        }
        if let Some(timeout) = self.timeout {
            config.timeout_seconds = timeout;
        }

        Ok(config)
    }

    /// Config for commands that only build URLs. A missing API key is
    /// tolerated; any other loading error (bad file, bad value) is returned.
    pub fn url_only_config(&self) -> Result<ClientConfig> {
        match self.client_config() {
            Err(NylasError::MissingConfigError { .. }) => {
                let api_uri = self
                    .api_uri
                    .clone()
                    .unwrap_or_else(|| crate::config::DEFAULT_API_URI.to_string());
                Ok(ClientConfig::new("unused").with_api_uri(api_uri))
            }
            other => other,
        }
    }
}
