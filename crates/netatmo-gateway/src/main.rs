//! netatmo gateway
//!
//! - Load YAML config once (`--config`, default `config.yml`)
//! - Serve flattened station readings as JSON on every path
//! - Exit non-zero on config or bind failure

mod args;

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use netatmo_core::error::{ExporterError, Result};
use netatmo_gateway::{app_state, config, router};

#[tokio::main]
async fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let args = args::Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(kind = e.kind().as_str(), error = %e, "netatmo-gateway failed");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: args::Args) -> Result<()> {
    let cfg = config::load_from_file(&args.config)?;
    let host = cfg.bind_host().to_string();
    let port = cfg.http_port;

    let state = app_state::AppState::new(cfg);
    let app = router::build_router(state);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .map_err(|e| ExporterError::Internal(format!("bind {host}:{port} failed: {e}")))?;
    let listen = listener
        .local_addr()
        .map_err(|e| ExporterError::Internal(format!("local_addr failed: {e}")))?;

    tracing::info!(%listen, "netatmo-gateway starting");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ExporterError::Internal(format!("server failed: {e}")))?;

    tracing::info!("netatmo-gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "ctrl-c handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "SIGTERM handler unavailable");
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
    tracing::info!("shutdown signal received");
}
