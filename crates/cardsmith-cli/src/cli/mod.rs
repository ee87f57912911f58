//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use cardsmith_core::domain::Strategy;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "cardsmith",
    bin_name = "cardsmith",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2694} Card source generation, stat injection and stat preview",
    long_about = "Cardsmith generates C# card sources from templates, keeps their \
                  stat block in sync with structured values, and manages a local \
                  library of card projects and snippets.",
    after_help = "EXAMPLES:\n\
        \x20 cardsmith generate --name Fireball --rarity Rare -o Fireball.cs\n\
        \x20 cardsmith inject Fireball.cs --stat damage=2 --stat ammo=3 --in-place\n\
        \x20 cardsmith stats Fireball.cs\n\
        \x20 cardsmith project new \"My Mod\" --strategy mods-plus\n\
        \x20 cardsmith completions bash > /usr/share/bash-completion/completions/cardsmith",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Render a card source from a template.
    #[command(
        visible_alias = "g",
        about = "Generate a card source file",
        after_help = "EXAMPLES:\n\
            \x20 cardsmith generate --name Fireball --mod-name \"My Mod\"\n\
            \x20 cardsmith generate --strategy mods-plus --name Shield -o Shield.cs\n\
            \x20 cardsmith generate --template-file my_template.cs --name Custom"
    )]
    Generate(GenerateArgs),

    /// Rewrite the stats block and overrides of a card source.
    #[command(
        about = "Inject stats into a card source",
        after_help = "EXAMPLES:\n\
            \x20 cardsmith inject Fireball.cs --stat damage=2 --stat reload=0.5\n\
            \x20 cardsmith inject Fireball.cs --stat ammo=3 --allow-multiple false --in-place\n\
            \x20 cat Fireball.cs | cardsmith inject - --stat damage=1.5"
    )]
    Inject(InjectArgs),

    /// Preview the stats a card source assigns.
    #[command(
        about = "Extract a stat preview from a card source",
        after_help = "EXAMPLES:\n\
            \x20 cardsmith stats Fireball.cs\n\
            \x20 cardsmith stats Fireball.cs --format json"
    )]
    Stats(StatsArgs),

    /// List the stat registry.
    #[command(
        visible_alias = "ls",
        about = "List editable stats",
        after_help = "EXAMPLES:\n\
            \x20 cardsmith list\n\
            \x20 cardsmith list --group gun\n\
            \x20 cardsmith list --format csv"
    )]
    List(ListArgs),

    /// Manage library projects.
    #[command(subcommand, about = "Manage card projects")]
    Project(ProjectCommands),

    /// Manage the cards of a project.
    #[command(subcommand, about = "Manage cards inside a project")]
    Card(CardCommands),

    /// Manage reusable code snippets.
    #[command(subcommand, about = "Manage code snippets")]
    Snippet(SnippetCommands),

    /// Export or import the whole library.
    #[command(
        subcommand,
        about = "Back up or restore the library",
        after_help = "EXAMPLES:\n\
            \x20 cardsmith backup export -o library.json\n\
            \x20 cardsmith backup import library.json"
    )]
    Backup(BackupCommands),

    /// Initialise a Cardsmith configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 cardsmith init           # default location\n\
            \x20 cardsmith init --force   # overwrite an existing file\n\
            \x20 cardsmith -c ./cardsmith.toml init"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 cardsmith completions bash > ~/.local/share/bash-completion/completions/cardsmith\n\
            \x20 cardsmith completions zsh  > ~/.zfunc/_cardsmith\n\
            \x20 cardsmith completions fish > ~/.config/fish/completions/cardsmith.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Cardsmith configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 cardsmith config get defaults.strategy\n\
            \x20 cardsmith config list\n\
            \x20 cardsmith config path"
    )]
    Config(ConfigCommands),
}

// ── generate ──────────────────────────────────────────────────────────────────

/// Arguments for `cardsmith generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Template strategy; defaults to `defaults.strategy` from config.
    #[arg(short = 's', long = "strategy", value_enum, help = "Template strategy")]
    pub strategy: Option<StrategyArg>,

    /// Custom template text; implies `--strategy custom`.
    #[arg(
        short = 't',
        long = "template-file",
        value_name = "FILE",
        help = "Custom template file (implies --strategy custom)"
    )]
    pub template_file: Option<PathBuf>,

    /// Mod name substituted for `{{MODNAME}}`.
    #[arg(short = 'm', long = "mod-name", value_name = "NAME", help = "Mod name")]
    pub mod_name: Option<String>,

    #[arg(short = 'n', long = "name", help = "Card class name")]
    pub name: Option<String>,

    #[arg(short = 'd', long = "desc", help = "Card description")]
    pub desc: Option<String>,

    #[arg(short = 'r', long = "rarity", help = "Card rarity (e.g. Common, Rare)")]
    pub rarity: Option<String>,

    #[arg(long = "theme", help = "Card theme color (e.g. DestructiveRed)")]
    pub theme: Option<String>,

    /// Write to a file instead of stdout.
    #[arg(short = 'o', long = "output", value_name = "FILE", help = "Output file")]
    pub output: Option<PathBuf>,

    #[arg(short = 'f', long = "force", help = "Overwrite an existing output file")]
    pub force: bool,
}

// ── inject ────────────────────────────────────────────────────────────────────

/// Arguments for `cardsmith inject`.
#[derive(Debug, Args)]
pub struct InjectArgs {
    /// Card source file, or `-` for stdin.
    #[arg(value_name = "FILE", help = "Card source file ('-' for stdin)")]
    pub file: PathBuf,

    /// Stat assignment; may be repeated.
    #[arg(
        short = 's',
        long = "stat",
        value_name = "KEY=VALUE",
        help = "Stat assignment, e.g. damage=2 (repeatable)"
    )]
    pub stats: Vec<String>,

    /// Set the `GetAllowMultiple` override.
    #[arg(
        long = "allow-multiple",
        value_name = "BOOL",
        value_parser = clap::builder::BoolishValueParser::new(),
        help = "Rewrite or insert GetAllowMultiple"
    )]
    pub allow_multiple: Option<bool>,

    /// Rewrite the input file.
    #[arg(
        short = 'i',
        long = "in-place",
        conflicts_with = "output",
        help = "Rewrite FILE in place"
    )]
    pub in_place: bool,

    #[arg(short = 'o', long = "output", value_name = "FILE", help = "Output file")]
    pub output: Option<PathBuf>,

    #[arg(short = 'f', long = "force", help = "Overwrite an existing output file")]
    pub force: bool,
}

// ── stats ─────────────────────────────────────────────────────────────────────

/// Arguments for `cardsmith stats`.
#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Card source file, or `-` for stdin.
    #[arg(value_name = "FILE", help = "Card source file ('-' for stdin)")]
    pub file: PathBuf,

    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: StatsFormat,
}

/// Output format for the `stats` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatsFormat {
    /// Human-readable table.
    Table,
    /// JSON array.
    Json,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `cardsmith list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Only show one group (gun, character, block).
    #[arg(short = 'g', long = "group", help = "Filter by stat group")]
    pub group: Option<String>,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One key per line.
    List,
    /// JSON array.
    Json,
    /// CSV rows.
    Csv,
}

// ── project ───────────────────────────────────────────────────────────────────

/// Subcommands for `cardsmith project`.
#[derive(Debug, Subcommand)]
pub enum ProjectCommands {
    /// Create an empty project.
    New {
        name: String,
        #[arg(short = 's', long = "strategy", value_enum)]
        strategy: Option<StrategyArg>,
    },
    /// List projects in library order.
    #[command(visible_alias = "ls")]
    List,
    /// Show a project and its cards.
    Show { id: String },
    /// Delete a project.
    #[command(visible_alias = "rm")]
    Remove {
        id: String,
        /// Skip the confirmation prompt.
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },
    /// Reorder projects; pass every id exactly once.
    Reorder {
        #[arg(required = true, num_args = 1..)]
        ids: Vec<String>,
    },
}

// ── card ──────────────────────────────────────────────────────────────────────

/// Subcommands for `cardsmith card`.
#[derive(Debug, Subcommand)]
pub enum CardCommands {
    /// Append a new card with generated code.
    Add { project: String },
    /// Delete a card.
    #[command(visible_alias = "rm")]
    Remove { project: String, index: usize },
    /// Set one card field (name, desc, rarity, theme, customColor, image,
    /// allowMultiple, code).
    Set {
        project: String,
        index: usize,
        field: String,
        /// New value; `-` reads it from stdin.
        value: String,
    },
    /// Run the stat injector over a stored card.
    Apply {
        project: String,
        index: usize,
        #[arg(short = 's', long = "stat", value_name = "KEY=VALUE")]
        stats: Vec<String>,
    },
    /// Show a card's settings and stat preview.
    Show {
        project: String,
        index: usize,
        /// Print only the card source.
        #[arg(long = "code")]
        code: bool,
    },
}

// ── snippet ───────────────────────────────────────────────────────────────────

/// Subcommands for `cardsmith snippet`.
#[derive(Debug, Subcommand)]
pub enum SnippetCommands {
    /// Save a file as a snippet.
    Save {
        name: String,
        #[arg(short = 'f', long = "file", value_name = "FILE")]
        file: PathBuf,
        #[command(flatten)]
        scope: SnippetScope,
        #[arg(long = "folder", value_name = "ID")]
        folder: Option<String>,
    },
    /// List folders and snippets.
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        scope: SnippetScope,
    },
    /// Print a snippet's code.
    Show {
        id: String,
        #[command(flatten)]
        scope: SnippetScope,
    },
    /// Delete a snippet.
    #[command(visible_alias = "rm")]
    Remove {
        id: String,
        #[command(flatten)]
        scope: SnippetScope,
    },
    /// Move a snippet into a folder, or to the root without `--folder`.
    Move {
        id: String,
        #[arg(long = "folder", value_name = "ID")]
        folder: Option<String>,
        #[command(flatten)]
        scope: SnippetScope,
    },
    /// Create a snippet folder.
    FolderNew {
        name: String,
        #[command(flatten)]
        scope: SnippetScope,
    },
    /// Delete a folder; its snippets move to the root.
    FolderRemove {
        id: String,
        #[command(flatten)]
        scope: SnippetScope,
    },
}

/// Which strategy's snippet collection to act on.
#[derive(Debug, Clone, Args)]
pub struct SnippetScope {
    #[arg(short = 's', long = "strategy", value_enum)]
    pub strategy: Option<StrategyArg>,
}

// ── backup ────────────────────────────────────────────────────────────────────

/// Subcommands for `cardsmith backup`.
#[derive(Debug, Subcommand)]
pub enum BackupCommands {
    /// Write the library as JSON.
    Export {
        #[arg(short = 'o', long = "output", value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Replace the library with a backup.
    Import {
        file: PathBuf,
        /// Skip the confirmation prompt.
        #[arg(short = 'y', long = "yes")]
        yes: bool,
    },
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `cardsmith init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `cardsmith completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `cardsmith config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.strategy`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// Template strategies as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    Vanilla,
    #[value(name = "mods-plus", alias = "modsplus", alias = "mods_plus")]
    ModsPlus,
    Custom,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Vanilla => Strategy::Vanilla,
            StrategyArg::ModsPlus => Strategy::ModsPlus,
            StrategyArg::Custom => Strategy::Custom,
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn strategy_aliases() {
        for raw in ["mods-plus", "modsplus", "mods_plus"] {
            let cli = Cli::parse_from(["cardsmith", "generate", "--strategy", raw]);
            let Commands::Generate(args) = cli.command else {
                panic!("expected Generate command");
            };
            assert_eq!(args.strategy, Some(StrategyArg::ModsPlus));
        }
    }

    #[test]
    fn strategy_arg_maps_to_core() {
        assert_eq!(Strategy::from(StrategyArg::Vanilla), Strategy::Vanilla);
        assert_eq!(Strategy::from(StrategyArg::ModsPlus), Strategy::ModsPlus);
        assert_eq!(Strategy::from(StrategyArg::Custom), Strategy::Custom);
    }

    #[test]
    fn parse_inject_command() {
        let cli = Cli::parse_from([
            "cardsmith",
            "inject",
            "card.cs",
            "--stat",
            "damage=2",
            "-s",
            "ammo=3",
            "--allow-multiple",
            "no",
        ]);
        let Commands::Inject(args) = cli.command else {
            panic!("expected Inject command");
        };
        assert_eq!(args.stats, ["damage=2", "ammo=3"]);
        assert_eq!(args.allow_multiple, Some(false));
        assert!(!args.in_place);
    }

    #[test]
    fn in_place_conflicts_with_output() {
        let result =
            Cli::try_parse_from(["cardsmith", "inject", "a.cs", "--in-place", "-o", "b.cs"]);
        assert!(result.is_err());
    }

    #[test]
    fn reorder_requires_ids() {
        assert!(Cli::try_parse_from(["cardsmith", "project", "reorder"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["cardsmith", "--quiet", "--verbose", "list"]);
        assert!(result.is_err());
    }
}
