use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "monshin", version, about = "Medical intake questionnaire")]
pub struct Cli {
    /// YAML settings file; INTAKE_* environment variables override it
    #[arg(long, global = true, env = "INTAKE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Walk through the questionnaire interactively
    Run(RunArgs),
    /// Check that a questionnaire definition is well formed
    Validate {
        path: PathBuf,
    },
    /// Print every question and where each answer leads
    Show {
        /// Defaults to the built-in questionnaire
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Args)]
pub struct RunArgs {
    /// Questionnaire definition; overrides `questionnaire_path` from settings
    #[arg(long, short)]
    pub questionnaire: Option<PathBuf>,

    /// Enable speech input (`:v`), configured through VOICE_* variables
    #[arg(long)]
    pub voice: bool,

    /// Write the finished transcript as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_run() {
        let cli = Cli::try_parse_from(["monshin", "run", "--voice", "-q", "intake.yaml"]).unwrap();
        match cli.command {
            Command::Run(args) => {
                assert!(args.voice);
                assert_eq!(args.questionnaire, Some(PathBuf::from("intake.yaml")));
                assert!(args.export.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_validate_with_global_config() {
        let cli = Cli::try_parse_from(["monshin", "validate", "intake.yaml", "--config", "settings.yaml"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("settings.yaml")));
        assert!(matches!(cli.command, Command::Validate { .. }));
    }

    #[test]
    fn test_verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
