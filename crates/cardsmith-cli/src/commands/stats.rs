//! Implementation of the `cardsmith stats` command.

use cardsmith_core::domain::{ExtractedStat, extract_stats};

use crate::{
    cli::{StatsArgs, StatsFormat},
    commands::read_input,
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: StatsArgs, output: OutputManager) -> CliResult<()> {
    let text = read_input(&args.file)?;
    let stats = extract_stats(&text);

    if args.format == StatsFormat::Json || output.is_json() {
        output.json(&stats)?;
        return Ok(());
    }

    if stats.is_empty() {
        output.info("No stats found")?;
        return Ok(());
    }
    output.header("Stats Preview:")?;
    for line in render_table(&stats) {
        output.data(&line)?;
    }
    Ok(())
}

/// One line per stat: label, multiplier-or-count, kind.
fn render_table(stats: &[ExtractedStat]) -> Vec<String> {
    let width = stats.iter().map(|s| s.label.len()).max().unwrap_or(0);
    stats
        .iter()
        .map(|s| {
            let value = if !s.is_valid() {
                "?".to_string()
            } else if s.is_multiplicative {
                format!("x{}", s.value)
            } else {
                format!("+{}", s.value)
            };
            let kind = if s.is_multiplicative { "mult" } else { "add" };
            format!("  {:<width$}  {:>8}  {}", s.label, value, kind)
        })
        .collect()
}
