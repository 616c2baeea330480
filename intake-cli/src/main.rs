use std::path::Path;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use config_engine::IntakeConfig;
use intake_cli::{render, Cli, Command, IntakeRunner, RunArgs, RunOutcome};
use logger_redacted::{init_logging, TranscriptRedactor};
use questionnaire_engine::{NavigationEngine, QuestionGraph, QuestionnaireDefinition};
use tokio::io::BufReader;
use voice_recognition_service::providers::{shared_lines, LineProvider, ScriptedProvider, SpeechProvider};
use voice_recognition_service::{SpeechInputAdapter, VoiceConfig, VoiceProvider};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = IntakeConfig::load(cli.config.as_deref())
        .map_err(error_common::IntakeError::from)
        .wrap_err("failed to load settings")?;
    let logger = config.logger_config();
    init_logging(&logger).map_err(error_common::IntakeError::from)?;

    match cli.command {
        Command::Run(args) => run(&config, args, TranscriptRedactor::new(logger.redaction)).await,
        Command::Validate { path } => validate(&path),
        Command::Show { path } => show(path.as_deref()),
    }
}

fn load_engine(path: Option<&Path>) -> Result<NavigationEngine> {
    let engine = match path {
        Some(path) => {
            let definition = QuestionnaireDefinition::from_path(path)
                .map_err(error_common::IntakeError::from)
                .wrap_err_with(|| format!("failed to read {}", path.display()))?;
            NavigationEngine::from_definition(&definition).map_err(error_common::IntakeError::from)?
        }
        None => NavigationEngine::reference().map_err(error_common::IntakeError::from)?,
    };
    Ok(engine)
}

async fn run(config: &IntakeConfig, args: RunArgs, redactor: TranscriptRedactor) -> Result<()> {
    let questionnaire = args.questionnaire.as_deref().or(config.questionnaire_path.as_deref());
    let engine = load_engine(questionnaire)?;

    let input = shared_lines(BufReader::new(tokio::io::stdin()));
    let mut runner = IntakeRunner::new(engine, input.clone(), std::io::stdout())
        .with_redactor(redactor.clone());

    if args.voice {
        let voice_config = VoiceConfig::from_env().map_err(error_common::IntakeError::from)?;
        let provider: Box<dyn SpeechProvider> = match &voice_config.provider {
            VoiceProvider::Console => Box::new(LineProvider::new(input)),
            VoiceProvider::Scripted { script_path } => Box::new(
                ScriptedProvider::from_path(script_path).map_err(error_common::IntakeError::from)?,
            ),
        };
        runner = runner.with_voice(SpeechInputAdapter::new(voice_config, provider).with_redactor(redactor));
    }

    let outcome = runner.run().await?;

    if let RunOutcome::Completed(session) = &outcome {
        if let Some(path) = args.export.as_deref().or(config.export_path.as_deref()) {
            let summary = serde_json::to_string_pretty(&session.summary())?;
            std::fs::write(path, summary)
                .wrap_err_with(|| format!("failed to write transcript to {}", path.display()))?;
            tracing::info!(session_id = %session.id(), path = %path.display(), "Transcript exported");
        }
    }

    Ok(())
}

fn validate(path: &Path) -> Result<()> {
    let graph = QuestionGraph::from_path(path)
        .map_err(error_common::IntakeError::from)
        .wrap_err_with(|| format!("{} is not a valid questionnaire", path.display()))?;
    println!(
        "{}: {} questions, root Q{}",
        path.display(),
        graph.len(),
        graph.root()
    );
    Ok(())
}

fn show(path: Option<&Path>) -> Result<()> {
    let engine = load_engine(path)?;
    let mut out = std::io::stdout().lock();
    render::graph(&mut out, engine.graph())?;
    Ok(())
}
