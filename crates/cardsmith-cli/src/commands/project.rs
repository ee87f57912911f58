//! `cardsmith project` - create, inspect, delete and reorder projects.

use chrono::{DateTime, Local, TimeZone};
use serde::Serialize;
use tracing::{info, instrument};

use cardsmith_core::domain::Project;

use crate::{
    cli::ProjectCommands,
    commands::{confirm, open_library, resolve_strategy},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ProjectSummary<'a> {
    id: &'a str,
    name: &'a str,
    strategy: &'static str,
    cards: usize,
    last_edited: i64,
}

impl<'a> From<&'a Project> for ProjectSummary<'a> {
    fn from(project: &'a Project) -> Self {
        Self {
            id: &project.id,
            name: &project.name,
            strategy: project.strategy().as_str(),
            cards: project.cards().len(),
            last_edited: project.last_edited,
        }
    }
}

/// Dispatch to the correct project subcommand.
#[instrument(skip_all)]
pub fn execute(cmd: ProjectCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = open_library(&config)?;

    match cmd {
        ProjectCommands::New { name, strategy } => {
            let strategy = resolve_strategy(strategy, &config)?;
            let id = service.update(|lib| Ok(lib.create_project(&name, strategy)?.id.clone()))?;
            info!(%id, %strategy, "Project created");
            if output.is_json() {
                output.json(&serde_json::json!({ "id": id }))?;
            } else {
                output.success(&format!("Created project '{name}' ({strategy})"))?;
                output.data(&id)?;
            }
        }

        ProjectCommands::List => {
            let library = service.load()?;
            let summaries: Vec<ProjectSummary<'_>> =
                library.projects().iter().map(ProjectSummary::from).collect();
            if output.is_json() {
                output.json(&summaries)?;
            } else if summaries.is_empty() {
                output.info("No projects yet. Create one: cardsmith project new <NAME>")?;
            } else {
                output.header("Projects:")?;
                for s in &summaries {
                    output.data(&format!(
                        "  {}  {:<24} {:<8} {:>3} cards  {}",
                        output.dim(s.id),
                        s.name,
                        s.strategy,
                        s.cards,
                        format_timestamp(s.last_edited)
                    ))?;
                }
            }
        }

        ProjectCommands::Show { id } => {
            let library = service.load()?;
            let project = library.project(&id)?;
            if output.is_json() {
                output.json(project)?;
            } else {
                output.header(&project.name)?;
                output.data(&format!("  id:          {}", project.id))?;
                output.data(&format!("  strategy:    {}", project.strategy()))?;
                output.data(&format!(
                    "  last edited: {}",
                    format_timestamp(project.last_edited)
                ))?;
                output.data(&format!("  cards:       {}", project.cards().len()))?;
                for (index, card) in project.cards().iter().enumerate() {
                    output.data(&format!(
                        "    [{index}] {} ({}, {})",
                        card.name, card.rarity, card.theme
                    ))?;
                }
            }
        }

        ProjectCommands::Remove { id, yes } => {
            let name = service.load()?.project(&id)?.name.clone();
            if !yes && !confirm(&format!("Delete project '{name}' and all its cards?"))? {
                return Err(CliError::Cancelled);
            }
            service.update(|lib| lib.delete_project(&id))?;
            info!(%id, "Project deleted");
            output.success(&format!("Deleted project '{name}'"))?;
        }

        ProjectCommands::Reorder { ids } => {
            service.update(|lib| lib.reorder_projects(&ids))?;
            output.success(&format!("Reordered {} projects", ids.len()))?;
        }
    }

    Ok(())
}

/// Render epoch milliseconds in local time; `-` for missing timestamps.
fn format_timestamp(millis: i64) -> String {
    if millis <= 0 {
        return "-".into();
    }
    DateTime::from_timestamp_millis(millis)
        .map(|utc| {
            Local
                .from_utc_datetime(&utc.naive_utc())
                .format("%Y-%m-%d %H:%M")
                .to_string()
        })
        .unwrap_or_else(|| "-".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardsmith_core::domain::Strategy;

    #[test]
    fn timestamp_formatting() {
        assert_eq!(format_timestamp(0), "-");
        assert_eq!(format_timestamp(1_700_000_000_000).len(), "2023-11-14 22:13".len());
    }

    #[test]
    fn summary_counts_cards() {
        let mut project = Project::new("P", Strategy::ModsPlus).unwrap();
        project.add_card();
        let summary = ProjectSummary::from(&project);
        assert_eq!(summary.cards, 1);
        assert_eq!(summary.strategy, "ModsPlus");
    }
}
