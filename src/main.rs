//! # postline Main Entry Point

use anyhow::Result;
use postline::{cmd_args::CommandLineArgs, config::LOG_LEVEL_ENV_VAR, AppController};
use tracing_subscriber::{fmt::time::ChronoLocal, EnvFilter};

/// Crates whose logs stay at warn regardless of the requested level
const QUIET_CRATES: &[&str] = &["reqwest", "hyper", "hyper_util", "rustls", "tokio", "h2"];

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    init_tracing_subscriber();

    let cmd_args = CommandLineArgs::parse();
    let mut app = AppController::new(cmd_args)?;
    app.run().await?;

    Ok(())
}

fn init_tracing_subscriber() {
    let mut filter = EnvFilter::try_from_env(LOG_LEVEL_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    for name in QUIET_CRATES {
        if let Ok(directive) = format!("{name}=warn").parse() {
            filter = filter.add_directive(directive);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_timer(ChronoLocal::rfc_3339())
        .init();
}
