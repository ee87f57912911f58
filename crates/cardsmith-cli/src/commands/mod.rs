//! Command handlers, one module per subcommand.
//!
//! Handlers translate arguments into core calls and render the results.
//! Helpers shared by several handlers live here.

pub mod backup;
pub mod card;
pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod inject;
pub mod list;
pub mod project;
pub mod snippet;
pub mod stats;

use std::io::{IsTerminal, Read};
use std::path::Path;

use tracing::debug;

use cardsmith_adapters::FileStore;
use cardsmith_core::{
    application::LibraryService,
    domain::{StatValues, Strategy},
};

use crate::{
    cli::StrategyArg,
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
};

/// Open the library service over the configured data directory.
pub fn open_library(config: &AppConfig) -> CliResult<LibraryService> {
    let dir = config.data_dir();
    debug!(data_dir = %dir.display(), "Opening library store");
    let store = FileStore::open(&dir)?;
    Ok(LibraryService::new(Box::new(store)))
}

/// Strategy from the flag, falling back to `defaults.strategy`.
pub fn resolve_strategy(arg: Option<StrategyArg>, config: &AppConfig) -> CliResult<Strategy> {
    match arg {
        Some(arg) => Ok(arg.into()),
        None => config.default_strategy(),
    }
}

/// Read a file, or stdin when `path` is `-`.
pub fn read_input(path: &Path) -> CliResult<String> {
    if path.as_os_str() == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .with_cli_context(|| "Failed to read stdin")?;
        return Ok(text);
    }
    if !path.exists() {
        return Err(CliError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    std::fs::read_to_string(path).with_cli_context(|| format!("Failed to read '{}'", path.display()))
}

/// Refuse to clobber an existing file unless `force` is set.
pub fn ensure_writable(path: &Path, force: bool) -> CliResult<()> {
    if path.exists() && !force {
        return Err(CliError::OutputExists {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Write `text` to `path`, creating parent directories.
pub fn write_output(path: &Path, text: &str) -> CliResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_cli_context(|| format!("Failed to create '{}'", parent.display()))?;
        }
    }
    std::fs::write(path, text).with_cli_context(|| format!("Failed to write '{}'", path.display()))
}

/// Parse repeated `--stat key=value` flags. Later assignments win.
pub fn parse_stats(assignments: &[String]) -> CliResult<StatValues> {
    let mut values = StatValues::new();
    for assignment in assignments {
        values.set_assignment(assignment)?;
    }
    Ok(values)
}

/// Ask a yes/no question; `false` unless the user agrees.
///
/// Refuses to prompt when stdin is not a terminal.
pub fn confirm(prompt: &str) -> CliResult<bool> {
    if !std::io::stdin().is_terminal() {
        return Err(CliError::InvalidInput {
            message: "confirmation required but stdin is not a terminal; pass --yes".into(),
            source: None,
        });
    }
    prompt_user(prompt)
}

#[cfg(feature = "interactive")]
fn prompt_user(prompt: &str) -> CliResult<bool> {
    dialoguer::Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .map_err(|e| CliError::InvalidInput {
            message: "confirmation prompt failed".into(),
            source: Some(Box::new(e)),
        })
}

#[cfg(not(feature = "interactive"))]
fn prompt_user(prompt: &str) -> CliResult<bool> {
    use std::io::Write;

    print!("{prompt} [y/N] ");
    std::io::stdout()
        .flush()
        .with_cli_context(|| "failed to flush stdout")?;

    let mut input = String::new();
    std::io::stdin()
        .read_line(&mut input)
        .with_cli_context(|| "failed to read confirmation input")?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input == "y" || input == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardsmith_core::domain::DomainError;
    use cardsmith_core::error::CardsmithError;

    #[test]
    fn parse_stats_collects_assignments() {
        let values = parse_stats(&["damage=2".into(), "ammo = 3".into()]).unwrap();
        assert_eq!(values.get("damage"), Some(2.0));
        assert_eq!(values.get("ammo"), Some(3.0));
    }

    #[test]
    fn parse_stats_rejects_unknown_key() {
        let err = parse_stats(&["mana=2".into()]).unwrap_err();
        assert!(matches!(
            err,
            CliError::Core(CardsmithError::Domain(DomainError::UnknownStat { .. }))
        ));
    }

    #[test]
    fn missing_input_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_input(&dir.path().join("absent.cs")).unwrap_err();
        assert!(matches!(err, CliError::FileNotFound { .. }));
    }

    #[test]
    fn write_output_creates_parents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a/b/card.cs");
        write_output(&path, "class A {}").unwrap();
        assert_eq!(read_input(&path).unwrap(), "class A {}");
    }

    #[test]
    fn existing_output_needs_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("card.cs");
        assert!(ensure_writable(&path, false).is_ok());
        write_output(&path, "x").unwrap();
        assert!(matches!(
            ensure_writable(&path, false),
            Err(CliError::OutputExists { .. })
        ));
        assert!(ensure_writable(&path, true).is_ok());
    }

    #[test]
    fn explicit_strategy_beats_config() {
        let config = AppConfig::default();
        assert_eq!(
            resolve_strategy(Some(StrategyArg::Custom), &config).unwrap(),
            Strategy::Custom
        );
        assert_eq!(resolve_strategy(None, &config).unwrap(), Strategy::Vanilla);
    }
}
