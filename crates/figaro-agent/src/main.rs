//! # figaro-agent
//!
//! Figaro orchestrator binary — wires the capability registry, the Gemini
//! gateway, and the turn controller, then serves HTTP or runs a single turn.

#![deny(unsafe_code)]

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use figaro_capabilities::calendar::{BookMeetingCapability, DisplayEventsCapability};
use figaro_capabilities::files::SendFilesToSlackCapability;
use figaro_capabilities::notebook::EditJupyterCapability;
use figaro_capabilities::providers::{
    ReqwestHttpClient, StubCalendarClient, StubFileCourier, StubNotebookEditor,
    StubSpeechSynthesizer, StubStudyPipeline,
};
use figaro_capabilities::registry::CapabilityRegistry;
use figaro_capabilities::search::SearchLinkdCapability;
use figaro_capabilities::speech::SpeakCapability;
use figaro_capabilities::study::{CompleteHomeworkCapability, OrganizeNotesCapability, QuizCapability};
use figaro_capabilities::traits::{
    CalendarClient, FileCourier, HttpClient, NotebookEditor, SpeechSynthesizer, StudyPipeline,
};
use figaro_llm::google::{GoogleGateway, GoogleGatewayConfig};
use figaro_runtime::TurnController;
use figaro_server::{FigaroServer, ServerConfig};
use figaro_settings::FigaroSettings;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// Figaro personal-assistant orchestrator.
#[derive(Parser, Debug)]
#[command(name = "figaro-agent", about = "Figaro personal-assistant orchestrator")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP server.
    Serve {
        /// Host to bind (overrides settings).
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides settings).
        #[arg(long)]
        port: Option<u16>,
    },
    /// Run one turn in-process and print the outcome as JSON.
    Ask {
        /// The utterance to run.
        utterance: String,
    },
}

/// Shared collaborators for capability construction.
///
/// Stub providers back every capability without a configured backend; the
/// alumni search client is live whenever `LINKD_API_KEY` is set.
struct CapabilityDeps {
    calendar: Arc<dyn CalendarClient>,
    speech: Arc<dyn SpeechSynthesizer>,
    study: Arc<dyn StudyPipeline>,
    notebook: Arc<dyn NotebookEditor>,
    courier: Arc<dyn FileCourier>,
    http: Arc<dyn HttpClient>,
    linkd_api_key: String,
    linkd_base_url: String,
    notebook_path: Option<String>,
}

impl CapabilityDeps {
    fn from_settings(settings: &FigaroSettings) -> Self {
        let linkd_api_key = std::env::var("LINKD_API_KEY").unwrap_or_default();
        if linkd_api_key.is_empty() {
            info!("LINKD_API_KEY not set; alumni search will report unavailable");
        }
        if settings.capabilities.notebook_path.is_none() {
            info!("no notebook path configured; edit_jupyter will report unavailable");
        }

        Self {
            calendar: Arc::new(StubCalendarClient),
            speech: Arc::new(StubSpeechSynthesizer),
            study: Arc::new(StubStudyPipeline),
            notebook: Arc::new(StubNotebookEditor),
            courier: Arc::new(StubFileCourier),
            http: Arc::new(ReqwestHttpClient::new()),
            linkd_api_key,
            linkd_base_url: settings.capabilities.linkd.base_url.clone(),
            notebook_path: settings.capabilities.notebook_path.clone(),
        }
    }
}

/// Create the populated capability registry.
///
/// Declaration order is part of the prompt the reasoning service sees; keep
/// it stable.
fn create_capability_registry(deps: &CapabilityDeps) -> Result<CapabilityRegistry> {
    let mut registry = CapabilityRegistry::new();

    // 1: Speech
    registry.register(Arc::new(SpeakCapability::new(deps.speech.clone())))?;

    // 2: Homework
    registry.register(Arc::new(CompleteHomeworkCapability::new(
        deps.study.clone(),
    )))?;

    // 3: Notebook editing
    registry.register(Arc::new(EditJupyterCapability::new(
        deps.notebook.clone(),
        deps.notebook_path.clone(),
    )))?;

    // 4: Alumni search
    registry.register(Arc::new(SearchLinkdCapability::new(
        deps.http.clone(),
        deps.linkd_api_key.clone(),
        deps.linkd_base_url.clone(),
    )))?;

    // 5–6: Notes and quizzing
    registry.register(Arc::new(OrganizeNotesCapability::new(deps.study.clone())))?;
    registry.register(Arc::new(QuizCapability::new(deps.study.clone())))?;

    // 7: File delivery
    registry.register(Arc::new(SendFilesToSlackCapability::new(
        deps.courier.clone(),
    )))?;

    // 8–9: Calendar
    registry.register(Arc::new(DisplayEventsCapability::new(
        deps.calendar.clone(),
    )))?;
    registry.register(Arc::new(BookMeetingCapability::new(deps.calendar.clone())))?;

    debug!(
        capability_count = registry.len(),
        capabilities = ?registry.names(),
        "capability registry created"
    );
    Ok(registry)
}

/// Resolve the Gemini API key from the environment.
fn resolve_gemini_api_key() -> Option<String> {
    ["GEMINI_API_KEY", "GOOGLE_API_KEY"]
        .iter()
        .find_map(|name| std::env::var(name).ok().filter(|v| !v.is_empty()))
}

fn build_controller(settings: &FigaroSettings) -> Result<TurnController> {
    let api_key = resolve_gemini_api_key().unwrap_or_else(|| {
        warn!("GEMINI_API_KEY not set; reasoning calls will fail until a key is provided");
        String::new()
    });

    let gateway = GoogleGateway::new(GoogleGatewayConfig {
        model: settings.gateway.model.clone(),
        api_key,
        base_url: settings.gateway.base_url.clone(),
        timeout_ms: settings.gateway.timeout_ms,
        max_output_tokens: settings.gateway.max_output_tokens,
        temperature: settings.gateway.temperature,
    });

    let deps = CapabilityDeps::from_settings(settings);
    let registry = create_capability_registry(&deps)?;

    Ok(TurnController::new(Arc::new(gateway), Arc::new(registry)))
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

async fn serve(settings: &FigaroSettings, host: Option<String>, port: Option<u16>) -> Result<()> {
    let controller = build_controller(settings)?;

    let mut config = ServerConfig::from(&settings.server);
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    let server = FigaroServer::new(config, Arc::new(controller));

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    drop(tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("shutdown signal received");
            signal_token.cancel();
        }
    }));

    server.serve(shutdown).await.context("server failed")
}

async fn ask(settings: &FigaroSettings, utterance: &str) -> Result<()> {
    let controller = build_controller(settings)?;
    let outcome = controller.run_turn(utterance).await;
    println!("{}", serde_json::to_string_pretty(&outcome)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let settings = figaro_settings::load_settings().unwrap_or_default();
    init_tracing(&settings.logging.level);

    match args.command {
        Command::Serve { host, port } => serve(&settings, host, port).await,
        Command::Ask { utterance } => ask(&settings, &utterance).await,
    }
}
