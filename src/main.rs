#![forbid(unsafe_code)]

//! `fabric-mcp` — MCP server binary.
//!
//! Bootstraps configuration, resolves feature flags, composes the tool
//! registry, and serves the selected MCP transport (stdio or HTTP/SSE).

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, ValueEnum};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, EnvFilter};

use fabric_mcp::config::GlobalConfig;
use fabric_mcp::flags::FeatureFlags;
use fabric_mcp::mcp::handler::AppState;
use fabric_mcp::mcp::{catalog, sse, transport};
use fabric_mcp::registry::{Composer, Transport};
use fabric_mcp::services::memory::MemoryPlatform;
use fabric_mcp::services::Platform;
use fabric_mcp::{AppError, Result};

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "fabric-mcp", about = "MCP server for Fabric platform operations", version, long_about = None)]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Transport to serve.
    #[arg(long, value_enum, default_value_t = Transport::Stdio)]
    transport: Transport,

    /// Log output format (text or json).
    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    /// Enable the dataflow query tool set.
    #[arg(long)]
    dataflow_query: bool,

    /// Enable the interactive device-code sign-in tool (stdio only).
    #[arg(long)]
    device_code_auth: bool,
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(args.log_format)?;
    info!("fabric-mcp server bootstrap");

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|err| AppError::Config(format!("failed to build tokio runtime: {err}")))?
        .block_on(run(args))
}

async fn run(args: Cli) -> Result<()> {
    // ── Load configuration ──────────────────────────────
    let config = match &args.config {
        Some(path) => GlobalConfig::load_from_path(path)?,
        None => GlobalConfig::default(),
    };
    let config = Arc::new(config);
    info!("configuration loaded");
    debug!(
        dataflow_query = args.dataflow_query,
        device_code_auth = args.device_code_auth,
        "cli feature switches parsed"
    );

    // ── Resolve feature flags ───────────────────────────
    // Raw process arguments take precedence over the [features] table.
    let flags = FeatureFlags::resolve(std::env::args().skip(1), &config.features);
    info!(active = ?flags.active_names(), "feature flags resolved");

    // ── Compose the tool registry (once) ────────────────
    let mut composer = Composer::new(catalog::base_tools(), catalog::optional_tools());
    let registry = composer.compose_once(&flags, args.transport).map_err(|err| {
        error!(%err, "tool registry composition failed; refusing to start");
        AppError::Compose(err)
    })?;
    info!(
        tools = registry.len(),
        transport = %args.transport,
        "tool registry composed"
    );

    // ── Build shared application state ──────────────────
    let platform: Arc<dyn Platform> = Arc::new(MemoryPlatform::new(config.page_size));
    let state = Arc::new(AppState {
        config,
        flags,
        registry: Arc::new(registry),
        platform,
    });

    // ── Serve the selected transport ────────────────────
    let ct = CancellationToken::new();
    let serve_ct = ct.clone();
    let serve_state = Arc::clone(&state);
    let transport_kind = args.transport;
    let mut serve_handle = tokio::spawn(async move {
        let result = match transport_kind {
            Transport::Stdio => transport::serve_stdio(serve_state, serve_ct).await,
            Transport::Http => sse::serve_sse(serve_state, serve_ct).await,
        };
        if let Err(err) = result {
            error!(%err, "transport failed");
        }
    });

    info!("MCP server ready");

    tokio::select! {
        _ = shutdown_signal() => {
            info!("shutdown signal received");
            ct.cancel();
            let _ = (&mut serve_handle).await;
        }
        _ = &mut serve_handle => {
            info!("transport finished");
            ct.cancel();
        }
    }

    info!("fabric-mcp shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();

    #[cfg(unix)]
    {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = ctrl_c => {}
                    _ = sigterm.recv() => {}
                }
            }
            Err(err) => {
                tracing::warn!(%err, "failed to register SIGTERM handler, using ctrl-c only");
                let _ = ctrl_c.await;
            }
        }
    }

    #[cfg(not(unix))]
    {
        if let Err(err) = ctrl_c.await {
            tracing::error!(%err, "ctrl-c signal handler failed");
        }
    }
}

fn init_tracing(log_format: LogFormat) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // Logs go to stderr; stdout belongs to the stdio MCP transport.
    let subscriber = fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    match log_format {
        LogFormat::Text => subscriber
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
        LogFormat::Json => subscriber
            .json()
            .try_init()
            .map_err(|err| AppError::Config(format!("failed to init tracing: {err}")))?,
    }

    Ok(())
}
