#![windows_subsystem = "windows"]
use std::io;

use lingo_core::config::Config;
use lingo_core::error::CoreError;
use lingo_core::protocol;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    dotenvy::dotenv().ok();

    // stdout carries the protocol, so logs go to stderr.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lingo_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(e) = run() {
        tracing::error!(error = %e, "lingo-core failed to start");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CoreError> {
    let cfg = Config::from_env()?;
    let mut session = protocol::open_session(&cfg)?;
    tracing::info!(
        records = session.orchestrator().store().len()?,
        "lingo-core ready"
    );

    let stdin = io::stdin();
    protocol::serve(&mut session, stdin.lock(), io::stdout())?;

    Ok(())
}
