//! Flags shared by every `cardsmith` subcommand.

use std::path::PathBuf;

use clap::{ArgAction, Args, ValueEnum, builder::FalseyValueParser};

/// Logging, colour, config and output-shape flags.
///
/// Flattened into [`super::Cli`] with `global = true`, so they may appear
/// before or after the subcommand.
#[derive(Debug, Clone, Args)]
#[command(next_help_heading = "Global options")]
pub struct GlobalArgs {
    /// Log more about template, injection and storage decisions.
    ///
    /// Stack for detail: `-v` info, `-vv` debug, `-vvv` trace. `RUST_LOG`
    /// takes over entirely when set.
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print results only: no status lines, errors-only logging.
    #[arg(short = 'q', long = "quiet", global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Never emit ANSI escapes (also set by a non-empty `NO_COLOR`).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        hide_env_values = true
    )]
    pub no_color: bool,

    /// Read settings from FILE instead of the platform config path.
    ///
    /// `cardsmith init` writes its default config here when given.
    #[arg(short = 'c', long = "config", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Shape of stdout: tables for people, JSON for scripts.
    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value_t = OutputFormat::Auto
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Filter level for Cardsmith's own crates.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            return "error";
        }
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Whether error output should include the cause chain.
    pub fn shows_causes(&self) -> bool {
        self.verbose > 0
    }
}

/// How command results are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// `human` on a terminal, `plain` when piped, unless the config says otherwise.
    #[default]
    Auto,
    /// Coloured headers and status marks.
    Human,
    /// Same layout, no colour.
    Plain,
    /// Pretty JSON for listings and previews; status lines move to stderr.
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(verbose: u8, quiet: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color: true,
            config: None,
            output_format: OutputFormat::Auto,
        }
    }

    #[test]
    fn warn_by_default() {
        assert_eq!(args(0, false).log_level(), "warn");
        assert!(!args(0, false).shows_causes());
    }

    #[test]
    fn each_v_raises_the_level() {
        assert_eq!(args(1, false).log_level(), "info");
        assert_eq!(args(2, false).log_level(), "debug");
        assert_eq!(args(3, false).log_level(), "trace");
        assert_eq!(args(9, false).log_level(), "trace");
        assert!(args(1, false).shows_causes());
    }

    #[test]
    fn quiet_wins_over_verbose() {
        assert_eq!(args(0, true).log_level(), "error");
        assert_eq!(args(3, true).log_level(), "error");
    }
}
