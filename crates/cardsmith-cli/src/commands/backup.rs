//! `cardsmith backup` - export and import the whole library as JSON.

use tracing::{info, instrument};

use crate::{
    cli::BackupCommands,
    commands::{confirm, open_library, read_input, write_output},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct backup subcommand.
#[instrument(skip_all)]
pub fn execute(cmd: BackupCommands, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = open_library(&config)?;

    match cmd {
        BackupCommands::Export { output: path } => {
            let text = service.export()?;
            match path {
                Some(path) => {
                    write_output(&path, &text)?;
                    info!(path = %path.display(), "Library exported");
                    output.success(&format!("Exported library to {}", path.display()))?;
                }
                None => output.data(&text)?,
            }
        }

        BackupCommands::Import { file, yes } => {
            let text = read_input(&file)?;
            if !yes && !confirm("Replace the current library with this backup?")? {
                return Err(CliError::Cancelled);
            }
            let library = service.import(&text)?;
            info!(projects = library.projects().len(), "Library imported");
            output.success(&format!(
                "Imported {} project(s) from {}",
                library.projects().len(),
                file.display()
            ))?;
        }
    }

    Ok(())
}
