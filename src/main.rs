use std::process::ExitCode;

use clap::Parser;

use homework_bot::config::{Config, DEFAULT_PRACTICUM_ENDPOINT};
use homework_bot::logging;
use homework_bot::poller::{initial_cursor, CycleOutcome, Poller};
use homework_bot::services::{PracticumClient, TelegramNotifier};

/// Relays Practicum homework review statuses to a Telegram chat
#[derive(Parser)]
#[command(name = "homework-bot")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Run a single poll cycle and exit
    #[arg(long)]
    once: bool,

    /// Unix timestamp to start polling from (defaults to now)
    #[arg(long, env = "HOMEWORK_FROM_DATE")]
    from_date: Option<i64>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Load .env file if present
    dotenvy::dotenv().ok();

    logging::init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Configuration error: {}", e);
            log::error!("Bot cannot run without its tokens, exiting");
            return ExitCode::FAILURE;
        }
    };

    let mut poller = match build_poller(&config, &cli) {
        Ok(poller) => poller,
        Err(e) => {
            log::error!("Failed to create HTTP clients: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if cli.once {
        match poller.run_cycle().await {
            CycleOutcome::Notified(message) => log::info!("Sent: {}", message),
            CycleOutcome::Unchanged => log::info!("Nothing new to send"),
            CycleOutcome::Failed(_) => return ExitCode::FAILURE,
        }
        return ExitCode::SUCCESS;
    }

    tokio::select! {
        _ = poller.run() => {},
        _ = shutdown_signal() => {
            log::info!("Shutdown signal received, stopping bot...");
        }
    }

    ExitCode::SUCCESS
}

fn build_poller(config: &Config, cli: &Cli) -> homework_bot::error::BotResult<Poller> {
    let credentials = &config.credentials;

    let api = PracticumClient::new(
        config.practicum_endpoint.clone(),
        credentials.practicum_token.clone(),
        config.http_timeout,
    )?;
    let notifier = TelegramNotifier::new(
        &config.telegram_api_url,
        &credentials.telegram_token,
        credentials.telegram_chat_id.clone(),
        config.http_timeout,
    )?;

    let cursor = initial_cursor(cli.from_date);
    if config.practicum_endpoint.as_str() != DEFAULT_PRACTICUM_ENDPOINT {
        log::info!("Using homework endpoint {}", config.practicum_endpoint);
    }

    Ok(Poller::new(
        Box::new(api),
        Box::new(notifier),
        cursor,
        config.retry_period,
    ))
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {}
            Err(e) => {
                log::error!("Failed to install Ctrl+C handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                log::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
