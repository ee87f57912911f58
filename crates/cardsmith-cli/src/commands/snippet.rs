//! `cardsmith snippet` - reusable code snippets, grouped per strategy.

use serde::Serialize;
use tracing::{info, instrument};

use cardsmith_core::domain::{DomainError, Snippet, SnippetFolder, Strategy};

use crate::{
    cli::{SnippetCommands, SnippetScope},
    commands::{open_library, read_input, resolve_strategy},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SnippetListing<'a> {
    strategy: Strategy,
    folders: &'a [SnippetFolder],
    snippets: &'a [Snippet],
}

/// Dispatch to the correct snippet subcommand.
#[instrument(skip_all)]
pub fn execute(cmd: SnippetCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = open_library(&config)?;
    let strategy_of = |scope: &SnippetScope| resolve_strategy(scope.strategy, &config);

    match cmd {
        SnippetCommands::Save {
            name,
            file,
            scope,
            folder,
        } => {
            let strategy = strategy_of(&scope)?;
            let code = read_input(&file)?;
            let id = service.update(|lib| {
                Ok(lib
                    .save_snippet(strategy, &name, &code, folder.as_deref())?
                    .id
                    .clone())
            })?;
            info!(%id, %strategy, "Snippet saved");
            output.success(&format!("Saved snippet '{name}'"))?;
            output.data(&id)?;
        }

        SnippetCommands::List { scope } => {
            let strategy = strategy_of(&scope)?;
            let library = service.load()?;
            let listing = SnippetListing {
                strategy,
                folders: library.snippet_folders(strategy),
                snippets: library.snippets(strategy),
            };
            if output.is_json() {
                output.json(&listing)?;
            } else {
                render_tree(&listing, &output)?;
            }
        }

        SnippetCommands::Show { id, scope } => {
            let strategy = strategy_of(&scope)?;
            let library = service.load()?;
            let snippet = library
                .snippets(strategy)
                .iter()
                .find(|s| s.id == id)
                .ok_or(DomainError::SnippetNotFound { id: id.clone() })?;
            output.data(&snippet.code)?;
        }

        SnippetCommands::Remove { id, scope } => {
            let strategy = strategy_of(&scope)?;
            let snippet = service.update(|lib| lib.delete_snippet(strategy, &id))?;
            output.success(&format!("Removed snippet '{}'", snippet.name))?;
        }

        SnippetCommands::Move { id, folder, scope } => {
            let strategy = strategy_of(&scope)?;
            service.update(|lib| lib.move_snippet(strategy, &id, folder.as_deref()))?;
            match folder {
                Some(folder) => output.success(&format!("Moved snippet into folder {folder}"))?,
                None => output.success("Moved snippet to the root")?,
            }
        }

        SnippetCommands::FolderNew { name, scope } => {
            let strategy = strategy_of(&scope)?;
            let id = service.update(|lib| Ok(lib.create_snippet_folder(strategy, &name).id.clone()))?;
            output.success(&format!("Created folder '{name}'"))?;
            output.data(&id)?;
        }

        SnippetCommands::FolderRemove { id, scope } => {
            let strategy = strategy_of(&scope)?;
            let folder = service.update(|lib| lib.delete_snippet_folder(strategy, &id))?;
            output.success(&format!(
                "Removed folder '{}'; its snippets moved to the root",
                folder.name
            ))?;
        }
    }

    Ok(())
}

/// Folders first, each with its snippets, then root-level snippets.
///
/// Snippets pointing at a folder that no longer exists are shown at the root.
fn render_tree(listing: &SnippetListing<'_>, output: &OutputManager) -> CliResult<()> {
    output.header(&format!("{} snippets:", listing.strategy))?;
    if listing.folders.is_empty() && listing.snippets.is_empty() {
        output.info("Nothing saved yet")?;
        return Ok(());
    }

    for folder in listing.folders {
        output.data(&format!("  {}/  {}", folder.name, output.dim(&folder.id)))?;
        for snippet in listing
            .snippets
            .iter()
            .filter(|s| s.folder_id.as_deref() == Some(folder.id.as_str()))
        {
            output.data(&format!("    {}  {}", snippet.name, output.dim(&snippet.id)))?;
        }
    }
    let in_known_folder = |s: &Snippet| {
        s.folder_id
            .as_deref()
            .is_some_and(|id| listing.folders.iter().any(|f| f.id == id))
    };
    for snippet in listing.snippets.iter().filter(|s| !in_known_folder(s)) {
        output.data(&format!("  {}  {}", snippet.name, output.dim(&snippet.id)))?;
    }
    Ok(())
}
