//! Entry point of the bond-issuance workflow.
//!
//! Logging can be controlled with an EnvFilter via the `BOND_ISSUANCE_LOG`
//! environment variable.
use std::io::IsTerminal;

use anyhow::Context;
use bond_issuance_options::parse_args;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    init_tracing().context("tracing initialization")?;

    let options = parse_args(std::env::args_os().skip(1));
    info!(
        sandbox = %options.sandbox_endpoint(),
        parties = ?options.parties(),
        "running bond issuance"
    );

    Ok(())
}

fn init_tracing() -> anyhow::Result<()> {
    let env_filter = EnvFilter::builder()
        .with_env_var("BOND_ISSUANCE_LOG")
        .with_default_directive("bond_issuance=info".parse()?)
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .init();

    Ok(())
}
