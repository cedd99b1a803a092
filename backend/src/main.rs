//! `anoni` binary: catalog browsing and admin console on top of the
//! local song store.

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use anoni_lib::cli::Cli;

fn main() -> Result<()> {
  // Logs go to stderr so stdout stays clean for `--json`.
  tracing_subscriber::registry()
    .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "anoni=info".into()))
    .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
    .init();

  let cli = Cli::parse();
  anoni_lib::run(cli)
}
