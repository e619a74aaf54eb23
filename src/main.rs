use anyhow::Context;
use clap::Parser;
use nylas::config::cli::{
    AuthUrlArgs, CalendarsCommand, CliConfig, Command, EventsCommand, GrantsCommand,
};
use nylas::domain::{
    AvailabilityParticipant, FindEventQueryParams, GetAvailabilityRequest,
    ListCalendarsQueryParams, ListEventQueryParams, ListGrantsQueryParams, ProviderDetectParams,
    UrlForAdminConsentConfig, UrlForAuthenticationConfig,
};
use nylas::utils::logger;
use nylas::Client;
use serde::Serialize;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    if let Err(e) = run(cli).await {
        tracing::error!("❌ {:#}", e);
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: CliConfig) -> anyhow::Result<()> {
    let command = cli.command.clone();

    // auth-url 只組 URL，不需要 API key
    if let Command::AuthUrl(args) = &command {
        let config = cli
            .url_only_config()
            .context("Failed to load client configuration")?;
        let client = Client::from_config(config).context("Invalid client configuration")?;
        return print_auth_url(&client, args);
    }

    let config = cli
        .client_config()
        .context("Missing API key: pass --api-key or set NYLAS_API_KEY")?;
    tracing::debug!("CLI config: {:?}", config);
    let client = Client::from_config(config).context("Invalid client configuration")?;

    match command {
        Command::AuthUrl(args) => print_auth_url(&client, &args),
        Command::TokenInfo {
            access_token,
            id_token,
        } => {
            let auth = client.auth();
            let info = match (access_token, id_token) {
                (Some(token), _) => auth.validate_access_token(&token).await?,
                (None, Some(token)) => auth.id_token_info(&token).await?,
                (None, None) => anyhow::bail!("Pass --access-token or --id-token"),
            };
            print_json(&info)
        }
        Command::DetectProvider { email, client_id } => {
            let params = ProviderDetectParams {
                email,
                client_id,
                all_provider_types: None,
            };
            print_json(&client.auth().detect_provider(&params).await?)
        }
        Command::Grants(GrantsCommand::List { limit, provider }) => {
            let query = ListGrantsQueryParams {
                limit,
                provider,
                ..Default::default()
            };
            print_json(&client.grants().list(Some(&query)).await?)
        }
        Command::Grants(GrantsCommand::Get { grant_id }) => {
            print_json(&client.grants().find(&grant_id).await?)
        }
        Command::Calendars(CalendarsCommand::List {
            identifier,
            limit,
            page_token,
        }) => {
            let query = ListCalendarsQueryParams {
                limit,
                page_token,
                ..Default::default()
            };
            let calendars = client.calendars().list(&identifier, Some(&query)).await?;
            if let Some(cursor) = &calendars.next_cursor {
                tracing::info!("📄 more results: --page-token {}", cursor);
            }
            print_json(&calendars)
        }
        Command::Calendars(CalendarsCommand::Get {
            identifier,
            calendar_id,
        }) => print_json(&client.calendars().find(&identifier, &calendar_id).await?),
        Command::Calendars(CalendarsCommand::Availability {
            identifier,
            start_time,
            end_time,
            duration_minutes,
            participants,
        }) => {
            let request = GetAvailabilityRequest {
                start_time,
                end_time,
                participants: participants
                    .into_iter()
                    .map(AvailabilityParticipant::new)
                    .collect(),
                duration_minutes,
                interval_minutes: None,
                round_to_30_minutes: None,
                availability_rules: None,
            };
            print_json(
                &client
                    .calendars()
                    .get_availability(&identifier, &request)
                    .await?,
            )
        }
        Command::Events(EventsCommand::List {
            identifier,
            calendar_id,
            limit,
            page_token,
        }) => {
            let query = ListEventQueryParams {
                limit,
                page_token,
                ..ListEventQueryParams::new(calendar_id)
            };
            let events = client.events().list(&identifier, &query).await?;
            if let Some(cursor) = &events.next_cursor {
                tracing::info!("📄 more results: --page-token {}", cursor);
            }
            print_json(&events)
        }
        Command::Events(EventsCommand::Get {
            identifier,
            event_id,
            calendar_id,
        }) => {
            let query = FindEventQueryParams { calendar_id };
            print_json(&client.events().find(&identifier, &event_id, &query).await?)
        }
    }
}

fn print_auth_url(client: &Client, args: &AuthUrlArgs) -> anyhow::Result<()> {
    let config = UrlForAuthenticationConfig {
        provider: args.provider,
        scope: (!args.scope.is_empty()).then(|| args.scope.clone()),
        state: args.state.clone(),
        login_hint: args.login_hint.clone(),
        ..UrlForAuthenticationConfig::new(args.client_id.clone(), args.redirect_uri.clone())
    };

    if let Some(credential_id) = &args.admin_consent {
        let consent = UrlForAdminConsentConfig {
            auth: config,
            credential_id: credential_id.clone(),
        };
        println!("{}", client.auth().url_for_admin_consent(&consent)?);
    } else if args.pkce {
        let pkce = client.auth().url_for_oauth2_pkce(&config)?;
        eprintln!("🔑 Keep this code_verifier for the token exchange: {}", pkce.secret);
        println!("{}", pkce.url);
    } else {
        println!("{}", client.auth().url_for_oauth2(&config)?);
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("Failed to render response")?
    );
    Ok(())
}
