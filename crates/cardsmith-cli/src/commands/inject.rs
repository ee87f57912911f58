//! Implementation of the `cardsmith inject` command.

use tracing::{info, instrument};

use cardsmith_core::domain::{CardConfig, inject_stats};

use crate::{
    cli::InjectArgs,
    commands::{ensure_writable, parse_stats, read_input, write_output},
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Rewrite the stats region and overrides of a card source.
#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: InjectArgs, output: OutputManager) -> CliResult<()> {
    if args.in_place && args.file.as_os_str() == "-" {
        return Err(CliError::InvalidInput {
            message: "--in-place needs a file, not stdin".into(),
            source: None,
        });
    }

    let text = read_input(&args.file)?;
    let values = parse_stats(&args.stats)?;
    let card = CardConfig {
        allow_multiple: args.allow_multiple,
        ..CardConfig::default()
    };

    let code = inject_stats(&text, &values, &card);
    info!(
        stats = args.stats.len(),
        changed = code != text,
        "Injected stats"
    );

    let target = if args.in_place {
        Some(args.file)
    } else {
        if let Some(path) = &args.output {
            ensure_writable(path, args.force)?;
        }
        args.output
    };
    match target {
        Some(path) => {
            write_output(&path, &code)?;
            output.success(&format!("Updated {}", path.display()))?;
        }
        None => output.data(&code)?,
    }
    Ok(())
}
