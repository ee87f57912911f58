//! Implementation of the `cardsmith generate` command.

use tracing::{debug, instrument};

use cardsmith_core::domain::{CardInfo, ProjectInfo, Strategy, render_template};

use crate::{
    cli::GenerateArgs,
    commands::{ensure_writable, read_input, resolve_strategy, write_output},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Render a card source and print it or write it to `--output`.
#[instrument(skip_all, fields(name = args.name.as_deref().unwrap_or("")))]
pub fn execute(args: GenerateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let custom = args
        .template_file
        .as_deref()
        .map(read_input)
        .transpose()?;

    let strategy = match (args.strategy, &custom) {
        (None, Some(_)) => Strategy::Custom,
        (arg, _) => resolve_strategy(arg, &config)?,
    };
    if custom.is_some() && strategy != Strategy::Custom {
        output.warning(&format!(
            "--template-file is ignored for the {strategy} strategy"
        ))?;
    }

    let mod_name = args.mod_name.as_deref().unwrap_or(&config.defaults.mod_name);
    let card = CardInfo {
        name: args.name.as_deref(),
        desc: args.desc.as_deref(),
        rarity: args.rarity.as_deref(),
        theme: args.theme.as_deref(),
    };
    debug!(%strategy, mod_name, "Rendering card");

    let code = render_template(strategy, custom.as_deref(), ProjectInfo::new(mod_name), card);

    match args.output {
        Some(path) => {
            ensure_writable(&path, args.force)?;
            write_output(&path, &code)?;
            output.success(&format!("Wrote {}", path.display()))?;
        }
        None => output.data(&code)?,
    }
    Ok(())
}
