//! `cardsmith card` - edit the cards stored in a project.

use std::io::Read;

use serde::Serialize;
use tracing::{info, instrument};

use cardsmith_core::domain::{CardConfig, ExtractedStat};

use crate::{
    cli::CardCommands,
    commands::{open_library, parse_stats},
    config::AppConfig,
    error::{CliResult, IntoCli},
    output::OutputManager,
};

#[derive(Serialize)]
struct CardView<'a> {
    index: usize,
    #[serde(flatten)]
    card: &'a CardConfig,
    stats: Vec<ExtractedStat>,
}

/// Dispatch to the correct card subcommand.
#[instrument(skip_all)]
pub fn execute(cmd: CardCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = open_library(&config)?;

    match cmd {
        CardCommands::Add { project } => {
            let index = service.update(|lib| lib.create_card(&project))?;
            info!(%project, index, "Card added");
            if output.is_json() {
                output.json(&serde_json::json!({ "index": index }))?;
            } else {
                output.success(&format!("Added card {index}"))?;
            }
        }

        CardCommands::Remove { project, index } => {
            let card = service.update(|lib| lib.delete_card(&project, index))?;
            output.success(&format!("Removed card {index} '{}'", card.name))?;
        }

        CardCommands::Set {
            project,
            index,
            field,
            value,
        } => {
            let value = if value == "-" {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .with_cli_context(|| "Failed to read stdin")?;
                text
            } else {
                value
            };
            service.update(|lib| lib.update_card(&project, index, &field, &value))?;
            output.success(&format!("Updated {field} of card {index}"))?;
        }

        CardCommands::Apply {
            project,
            index,
            stats,
        } => {
            let values = parse_stats(&stats)?;
            let preview = service.update(|lib| {
                lib.apply_stats(&project, index, &values)
                    .map(|card| card.stats_preview())
            })?;
            info!(%project, index, stats = stats.len(), "Stats applied");
            if output.is_json() {
                output.json(&preview)?;
            } else {
                output.success(&format!(
                    "Applied {} stat(s) to card {index}",
                    stats.len()
                ))?;
            }
        }

        CardCommands::Show {
            project,
            index,
            code,
        } => {
            let library = service.load()?;
            let card = library.project(&project)?.card(index)?;

            if code {
                output.data(&card.code)?;
            } else if output.is_json() {
                output.json(&CardView {
                    index,
                    card,
                    stats: card.stats_preview(),
                })?;
            } else {
                output.header(&format!("[{index}] {}", card.name))?;
                output.data(&format!("  desc:          {}", card.desc))?;
                output.data(&format!("  rarity:        {}", card.rarity))?;
                output.data(&format!("  theme:         {}", card.theme))?;
                if let Some(color) = &card.custom_color {
                    output.data(&format!("  customColor:   {color}"))?;
                }
                if let Some(image) = &card.image {
                    output.data(&format!("  image:         {image}"))?;
                }
                let allow = card
                    .allow_multiple
                    .map_or_else(|| "unset".to_string(), |b| b.to_string());
                output.data(&format!("  allowMultiple: {allow}"))?;
                for stat in card.stats_preview() {
                    output.data(&format!("  {:<13}  {}", stat.label, stat.value))?;
                }
            }
        }
    }

    Ok(())
}
