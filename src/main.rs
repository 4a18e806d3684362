//! gemini-agent CLI binary entry point.

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use gemini_agent::agent::AgentOptions;
use gemini_agent::cli::{AudioArgs, ChatArgs, Cli, Commands};
use gemini_agent::config::GeminiConfig;
use gemini_agent::features::Transcriber;
use gemini_agent::models::GeminiModel;
use gemini_agent::types::{ReasoningEffort, Schema};
use gemini_agent::GeminiClient;

#[tokio::main]
async fn main() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match load_config(&cli) {
        Ok(config) => match cli.command {
            Commands::Chat(args) => handle_chat(&config, args).await,
            Commands::Transcribe(args) => handle_transcribe(&config, args).await,
            Commands::Analyze(args) => handle_analyze(&config, args).await,
        },
        Err(e) => Err(e.into()),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn load_config(cli: &Cli) -> gemini_agent::error::Result<GeminiConfig> {
    match &cli.config {
        Some(path) => GeminiConfig::load_from(path),
        None => GeminiConfig::load(),
    }
}

async fn handle_chat(config: &GeminiConfig, args: ChatArgs) -> Result<(), Box<dyn std::error::Error>> {
    let prompt = match args.prompt {
        Some(p) => p,
        None => {
            eprintln!("Usage: gemini-agent chat \"your prompt here\"");
            std::process::exit(1);
        }
    };

    let model = args
        .model
        .as_deref()
        .map(GeminiModel::parse)
        .unwrap_or_else(|| config.default_model());
    let effort = match args.effort.as_deref() {
        Some(raw) => raw
            .parse::<ReasoningEffort>()
            .map_err(|_| format!("Invalid effort '{raw}'. Use minimal, low, medium or high"))?,
        None => ReasoningEffort::default(),
    };
    let schema: Option<Schema> = match &args.schema {
        Some(path) => Some(serde_json::from_str(&std::fs::read_to_string(path)?)?),
        None => None,
    };

    let client = GeminiClient::from_config(config)?;
    let mut session = client.create_agent(
        AgentOptions::builder()
            .model(model)
            .maybe_system_prompt(args.system)
            .temperature(args.temperature.unwrap_or_default())
            .reasoning_effort(effort)
            .user_prompt(prompt)
            .build(),
    );

    let response = match (&args.file, &schema, args.search) {
        (Some(file), schema, _) => session.invoke_multimodal(file, schema.as_ref()).await?,
        (None, Some(schema), _) => session.invoke_with_structured_output(schema).await?,
        (None, None, true) => session.invoke_with_web_search().await?,
        (None, None, false) => session.invoke().await?,
    };

    println!("{}", response.content);
    eprintln!(
        "[tokens: {} in, {} out, {} total]",
        response.input_tokens, response.output_tokens, response.total_tokens
    );
    Ok(())
}

async fn handle_transcribe(
    config: &GeminiConfig,
    args: AudioArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = transcriber(config, &args)?.transcribe_audio(&args.path).await?;
    println!("{text}");
    Ok(())
}

async fn handle_analyze(
    config: &GeminiConfig,
    args: AudioArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let analysis = transcriber(config, &args)?
        .transcribe_and_analyze(&args.path)
        .await?;
    println!("{}", serde_json::to_string_pretty(&analysis)?);
    Ok(())
}

fn transcriber(
    config: &GeminiConfig,
    args: &AudioArgs,
) -> gemini_agent::error::Result<Transcriber> {
    let transcriber = Transcriber::new(GeminiClient::from_config(config)?);
    Ok(match args.model.as_deref() {
        Some(model) => transcriber.with_model(GeminiModel::parse(model)),
        None => transcriber,
    })
}
