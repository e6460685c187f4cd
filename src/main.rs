// src/main.rs — mmbar entry point

use clap::Parser;

use mmbar::cli::Cli;
use mmbar::core::engine::Engine;
use mmbar::core::profile::NetctlProbe;
use mmbar::infra::config::Config;
use mmbar::infra::logger;
use mmbar::widgets::registry::WidgetRegistry;

#[tokio::main]
async fn main() {
    // Logs go to stderr (respects RUST_LOG)
    logger::init_logging("warn");

    if let Err(e) = run().await {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;

    let registry = WidgetRegistry::with_builtins();
    tracing::debug!("Registered widgets: {}", registry.list().join(", "));

    let engine = Engine::start(config, registry, NetctlProbe::new(), std::io::stdout())?;
    engine.run(shutdown_signal()).await?;
    Ok(())
}

/// Completes on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Cannot listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("Cannot listen for SIGTERM: {}", e);
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
