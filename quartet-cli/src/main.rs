//! `quartet` — interactive menu shell for the four-agent demo.
//!
//! Selects an agent once (menu or `--agent` flag), then feeds each input
//! line to it. The document agent additionally understands
//! `/load <path>` to ingest a PDF.

use std::str::FromStr;
use std::sync::Arc;

use anyhow::{Context, anyhow};
use clap::Parser;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use quartet_agents::{AutomationAgent, ChatAgent, DocumentAgent, VoiceAgent};
use quartet_core::{Agent, AgentInput, AgentKind, AgentOutput, Severity};
use quartet_model::GroqClient;
use quartet_rag::{DocumentPipeline, HostedEmbeddingProvider, PdfTextExtractor, PipelineConfig};
use quartet_voice::ElevenLabsClient;

/// Where synthesized audio lands, since the shell does not play it.
const AUDIO_OUT: &str = "quartet-voice.mp3";

#[derive(Parser, Debug)]
#[command(name = "quartet", about = "Four-agent demo: chat, document, voice, automation")]
struct Args {
    /// Agent to run (chat, document, voice, automation); prompts if omitted.
    #[arg(long)]
    agent: Option<AgentKind>,

    /// Chat model name.
    #[arg(long, default_value = "llama3-8b-8192")]
    model: String,

    /// Embeddings endpoint root (overrides EMBEDDINGS_BASE_URL).
    #[arg(long)]
    embeddings_url: Option<String>,

    /// Embedding model name.
    #[arg(long, default_value = "all-MiniLM-L6-v2")]
    embeddings_model: String,

    /// Embedding dimension.
    #[arg(long, default_value_t = 384)]
    dimension: usize,

    /// Retrieval preview length in characters.
    #[arg(long, default_value_t = 500)]
    preview_chars: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut editor = DefaultEditor::new().context("could not initialize line editor")?;

    let kind = match args.agent {
        Some(kind) => kind,
        None => select_agent(&mut editor)?,
    };
    let agent = build_agent(kind, &args)?;

    println!("Agent: {}. Type a line to send it, 'exit' to quit.", agent.name());
    if kind == AgentKind::Document {
        println!("Use '/load <path>' to ingest a PDF, then ask about it.");
    }

    loop {
        let line = match editor.readline(">> ") {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e).context("could not read input"),
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("exit") {
            break;
        }
        let _ = editor.add_history_entry(line);

        let input = match parse_input(line) {
            Ok(input) => input,
            Err(e) => {
                eprintln!("! {e:#}");
                continue;
            }
        };

        match agent.handle(input).await {
            Ok(output) => render(output)?,
            Err(e) => eprintln!("! {e}"),
        }
    }

    Ok(())
}

/// Show the menu and read a selection. The voice agent is only offered
/// when its API key is configured.
fn select_agent(editor: &mut DefaultEditor) -> anyhow::Result<AgentKind> {
    let voice_enabled = std::env::var("ELEVENLABS_API_KEY").is_ok();

    println!("Select agent:");
    for kind in AgentKind::ALL {
        if kind == AgentKind::Voice && !voice_enabled {
            println!("  {kind} (disabled: ELEVENLABS_API_KEY not set)");
        } else {
            println!("  {kind}");
        }
    }

    loop {
        let line = editor.readline("agent> ")?;
        match AgentKind::from_str(&line) {
            Ok(AgentKind::Voice) if !voice_enabled => {
                println!("Voice agent is disabled. Add ELEVENLABS_API_KEY to enable it.");
            }
            Ok(kind) => return Ok(kind),
            Err(e) => println!("{e}"),
        }
    }
}

/// Construct the handler for the selected kind.
fn build_agent(kind: AgentKind, args: &Args) -> anyhow::Result<Box<dyn Agent>> {
    debug!(%kind, "constructing agent");
    match kind {
        AgentKind::Chat => {
            let model = GroqClient::from_env()
                .context("chat agent needs GROQ_API_KEY")?
                .with_model(&args.model);
            Ok(Box::new(ChatAgent::new(Arc::new(model))))
        }
        AgentKind::Document => {
            let provider = match &args.embeddings_url {
                Some(url) => HostedEmbeddingProvider::new(url)?,
                None => HostedEmbeddingProvider::from_env()
                    .context("document agent needs EMBEDDINGS_BASE_URL or --embeddings-url")?,
            }
            .with_model(&args.embeddings_model)
            .with_dimensions(args.dimension);

            let config = PipelineConfig::builder()
                .dimension(args.dimension)
                .preview_chars(args.preview_chars)
                .build()?;
            let pipeline = DocumentPipeline::builder()
                .config(config)
                .embedding_provider(Arc::new(provider))
                .extractor(Arc::new(PdfTextExtractor::new()))
                .build()?;
            Ok(Box::new(DocumentAgent::new(Arc::new(pipeline))))
        }
        AgentKind::Voice => {
            let synth =
                ElevenLabsClient::from_env().context("voice agent needs ELEVENLABS_API_KEY")?;
            Ok(Box::new(VoiceAgent::new(Arc::new(synth))))
        }
        AgentKind::Automation => Ok(Box::new(AutomationAgent::new())),
    }
}

/// Turn a shell line into agent input. `/load <path>` reads a file.
fn parse_input(line: &str) -> anyhow::Result<AgentInput> {
    if let Some(path) = line.strip_prefix("/load ") {
        let path = path.trim();
        let bytes =
            std::fs::read(path).with_context(|| format!("could not read file '{path}'"))?;
        let name = std::path::Path::new(path)
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .ok_or_else(|| anyhow!("'{path}' has no file name"))?;
        return Ok(AgentInput::File { name, bytes });
    }
    Ok(AgentInput::text(line))
}

/// Print one output with its severity prefix; audio goes to a file.
fn render(output: AgentOutput) -> anyhow::Result<()> {
    let prefix = match output.severity {
        Severity::Info => "·",
        Severity::Success => "✔",
        Severity::Warning => "⚠",
    };
    println!("{prefix} {}", output.text);

    if let Some(bytes) = output.bytes {
        std::fs::write(AUDIO_OUT, &bytes)
            .with_context(|| format!("could not write {AUDIO_OUT}"))?;
        println!("· Audio written to {AUDIO_OUT}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_become_text_input() {
        let input = parse_input("hello there").unwrap();
        assert_eq!(input, AgentInput::text("hello there"));
    }

    #[test]
    fn load_of_a_missing_file_errors() {
        assert!(parse_input("/load /definitely/not/here.pdf").is_err());
    }
}
