/*
[INPUT]:  Environment variables (optionally from .env), OS shutdown signals
[OUTPUT]: Authenticated wallet session broadcasting a fixed chat message
[POS]:    Binary entry point
[UPDATE]: When changing startup flow, exit codes, or shutdown handling
*/

use std::process::ExitCode;

use anyhow::{Context, Result, anyhow};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use quills_chat_adapter::{AuthManager, ChatClient, ClientConfig, EvmWalletSigner, WalletSigner};
use quills_chat_bot::{BotConfig, Broadcaster};

const DEFAULT_LOG_LEVEL: &str = "info";

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine; real environment variables take precedence.
    let _ = dotenvy::dotenv();

    if let Err(err) = init_tracing() {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::from(1)
        }
    }
}

async fn run() -> Result<()> {
    let config = BotConfig::from_env().context("load configuration")?;
    let wallet = EvmWalletSigner::new(config.private_key()).context("load wallet")?;

    info!(
        address = wallet.address(),
        rpc_url = config.rpc_url.as_ref().map(|url| url.as_str()),
        chat_api_url = %config.chat_api_url,
        "authenticating wallet"
    );

    let client = ChatClient::from_url(ClientConfig::default(), config.chat_api_url.clone())
        .context("build chat client")?;
    let credential = AuthManager::new(client.clone())
        .authenticate(&wallet)
        .await
        .context("authenticate wallet")?;
    info!(token = %credential.preview(), "authenticated");

    info!(
        message = %config.message,
        interval_ms = config.interval.as_millis() as u64,
        "starting auto chat"
    );
    let broadcaster = Broadcaster::new(client, credential, config.message, config.interval);

    tokio::select! {
        _ = broadcaster.run() => {}
        _ = shutdown_signal() => {
            info!("shutdown signal received");
        }
    }

    Ok(())
}

fn init_tracing() -> Result<()> {
    let filter = match std::env::var(EnvFilter::DEFAULT_ENV) {
        Ok(directives) if !directives.trim().is_empty() => {
            EnvFilter::try_new(directives).context("invalid RUST_LOG")?
        }
        _ => EnvFilter::new(DEFAULT_LOG_LEVEL),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install SIGINT handler");
            std::future::pending::<()>().await;
        }
        info!("received SIGINT");
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("received SIGTERM");
            }
            Err(err) => {
                warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
