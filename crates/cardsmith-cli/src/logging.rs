//! Tracing subscriber initialisation.
//!
//! Only the CLI crate calls [`init_logging`]; `cardsmith-core` and
//! `cardsmith-adapters` only *emit* spans and events.
//!
//! # Verbosity mapping
//!
//! The level comes from [`GlobalArgs::log_level`]; `RUST_LOG` overrides it.

use std::io::IsTerminal as _;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

/// Initialise the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros fire.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(args));

    let use_ansi = !args.no_color && std::io::stderr().is_terminal();

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .with_ansi(use_ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialise tracing: {e}"))?;

    Ok(())
}

/// Same level for every Cardsmith crate, nothing from dependencies.
fn default_filter(args: &GlobalArgs) -> EnvFilter {
    let level = args.log_level();
    EnvFilter::new(format!(
        "cardsmith={level},cardsmith_core={level},cardsmith_adapters={level}"
    ))
}
