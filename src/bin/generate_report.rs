//! One-shot report generation from the command line.
//!
//! Without `--prompt`, runs the built-in structured prompt about artificial
//! intelligence and names the files `relatorio_ia`.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use topic_report::adapters::ai::GeminiProvider;
use topic_report::adapters::document::{default_exporters, LocalArtifactStorage};
use topic_report::application::{GenerateReportCommand, GenerateReportHandler};
use topic_report::config::AppConfig;
use topic_report::domain::report::BaseName;
use topic_report::telemetry::init_tracing;

const DEFAULT_PROMPT: &str = "\
Você é um assistente especializado em tecnologia.
Explique de forma clara e didática o que é Inteligência Artificial.
A resposta deve ser organizada em tópicos numerados, como:

1. Definição simples
2. Principais características
3. Exemplos práticos
4. Benefícios
5. Desafios e limitações
6. Conclusão

Não use negrito, itálico ou qualquer outro tipo de formatação além da numeração.
";

const DEFAULT_PROMPT_BASE_NAME: &str = "relatorio_ia";

#[derive(Parser)]
#[command(name = "generate-report")]
#[command(version, about = "Generate DOCX, XLSX and PDF reports from a Gemini answer")]
struct Cli {
    #[arg(long, short, help = "Prompt to send (defaults to the built-in AI overview prompt)")]
    prompt: Option<String>,

    #[arg(long, short, help = "Base name for the output files")]
    name: Option<String>,

    #[arg(long, short, help = "Output directory (overrides configuration)")]
    output: Option<PathBuf>,

    #[arg(long)]
    verbose: bool,
}

impl Cli {
    /// Builds the command, naming files the way each input mode expects.
    fn command(&self) -> anyhow::Result<GenerateReportCommand> {
        let explicit_name = match (&self.name, &self.prompt) {
            (Some(name), _) => Some(name.as_str()),
            (None, None) => Some(DEFAULT_PROMPT_BASE_NAME),
            (None, Some(_)) => None,
        };

        let prompt = self.prompt.as_deref().unwrap_or(DEFAULT_PROMPT);
        let mut cmd = GenerateReportCommand::new(prompt);
        if let Some(name) = explicit_name {
            let base_name = BaseName::new(name).context("Invalid --name")?;
            cmd = cmd.with_base_name(base_name);
        }
        Ok(cmd)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load().context("Failed to load configuration")?;
    if let Some(output) = &cli.output {
        config.export.output_dir = output.clone();
    }
    config.ai.validate().context("Invalid AI configuration")?;
    config.export.validate().context("Invalid export configuration")?;

    let filter = if cli.verbose {
        "info,topic_report=debug"
    } else {
        "warn"
    };
    init_tracing(filter, false);

    let provider = GeminiProvider::new(config.ai.gemini_config()?)
        .context("Failed to build Gemini client")?;
    let handler = GenerateReportHandler::new(
        Arc::new(provider),
        default_exporters(config.export.pdf_font_path.as_deref()),
        Arc::new(LocalArtifactStorage::new(&config.export.output_dir)),
    )
    .with_unique_names(config.export.unique_names);

    let result = handler.handle(cli.command()?).await?;

    println!("--- Resposta do Gemini (texto original) ---\n{}", result.generated_text);
    println!("\n--- Tópicos extraídos para formatação ---");
    for topic in &result.topics {
        println!("{:?}", topic);
    }

    println!("\n--- Arquivos gerados com sucesso! ---");
    for artifact in &result.artifacts {
        println!("{}", artifact.path.display());
    }

    Ok(())
}
