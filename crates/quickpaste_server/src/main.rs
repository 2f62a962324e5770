//! quickpaste API server entrypoint.

use quickpaste_core::{
    config::env_flag_enabled, spawn_sweeper, Config, EntryStore, DEFAULT_MAX_IMAGE_BYTES,
    DEFAULT_PORT, DEFAULT_SWEEP_INTERVAL_SECS,
};
use quickpaste_server::{resolve_bind_address, serve_router, AppState};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct CliFlags {
    help: bool,
}

fn parse_cli_flags(args: &[String]) -> anyhow::Result<CliFlags> {
    let mut flags = CliFlags::default();
    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => flags.help = true,
            value if value.starts_with('-') => {
                anyhow::bail!(
                    "Unknown option: '{}'. Use --help to see supported options.",
                    value
                );
            }
            value => {
                anyhow::bail!(
                    "Unexpected positional argument: '{}'. Use --help to see supported options.",
                    value
                );
            }
        }
    }
    Ok(flags)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "quickpaste=info,quickpaste_core=info,quickpaste_server=info,tower_http=warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let cli_flags = parse_cli_flags(&args)?;

    if cli_flags.help {
        print_help();
        return Ok(());
    }

    let config = Config::from_env();
    let store = Arc::new(EntryStore::from_config(&config));
    let sweeper = spawn_sweeper(&store, config.sweep_interval());

    if config.app_password.is_none() {
        tracing::warn!("APP_PASSWORD is not set - API is open to any caller that can reach it");
    }
    let state = AppState::new(config.clone(), store.clone());

    let allow_public = env_flag_enabled("ALLOW_PUBLIC_ACCESS");
    if allow_public {
        tracing::warn!("Public access enabled - server will accept requests from any origin");
    }

    let bind_override = std::env::var("BIND").ok();
    let bind_addr = resolve_bind_address(&config, bind_override.as_deref(), allow_public);
    if !bind_addr.ip().is_loopback() {
        tracing::warn!(
            "Binding to non-localhost address: {} - ensure proper security measures are in place",
            bind_addr
        );
    }

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    let actual_addr = listener.local_addr().unwrap_or(bind_addr);
    tracing::info!("quickpaste running at http://{}", actual_addr);

    let serve_result = serve_router(listener, state, allow_public, shutdown_signal()).await;

    sweeper.shutdown().await;
    tracing::info!(
        "Shut down with {} paste(s) and {} image(s) discarded",
        store.pastes.len().unwrap_or(0),
        store.images.len().unwrap_or(0)
    );

    serve_result?;

    Ok(())
}

fn print_help() {
    println!("quickpaste server\n");
    println!("Usage: quickpaste [OPTIONS]\n");
    println!("Options:");
    println!("  --help            Show this help message");
    println!("\nEnvironment variables:");
    println!("  PORT              Server port (default: {})", DEFAULT_PORT);
    println!(
        "  MAX_IMAGE_BYTES   Largest accepted image data URL (default: {})",
        DEFAULT_MAX_IMAGE_BYTES
    );
    println!("  MAX_BODY_BYTES    Request body limit, kept above MAX_IMAGE_BYTES");
    println!(
        "  SWEEP_INTERVAL_SECS  Seconds between expiry sweeps (default: {})",
        DEFAULT_SWEEP_INTERVAL_SECS
    );
    println!("  APP_PASSWORD      Require 'Authorization: Bearer <password>' on API calls");
    println!("  ALLOW_PUBLIC_ACCESS  Allow CORS from any origin and non-loopback binds");
    println!(
        "  BIND              Override bind address (e.g. 0.0.0.0:{})",
        DEFAULT_PORT
    );
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install SIGTERM handler: {}", err);
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
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::{parse_cli_flags, CliFlags};

    fn args(values: &[&str]) -> Vec<String> {
        std::iter::once("quickpaste")
            .chain(values.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parse_cli_flags_rejects_unknown_and_positional_arguments() {
        let cases = [
            (args(&["--hlep"]), "Unknown option"),
            (args(&["serve"]), "Unexpected positional argument"),
            (args(&["--help", "--port"]), "Unknown option"),
        ];

        for (argv, expected_fragment) in cases {
            let err = parse_cli_flags(&argv).expect_err("invalid args should be rejected");
            assert!(err.to_string().contains(expected_fragment), "args: {argv:?}");
        }
    }

    #[test]
    fn parse_cli_flags_accepts_help_and_no_arguments() {
        assert_eq!(parse_cli_flags(&args(&[])).expect("empty"), CliFlags::default());
        assert_eq!(
            parse_cli_flags(&args(&["--help"])).expect("help"),
            CliFlags { help: true }
        );
    }
}
