//! CLI entry point for gemini-agent.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Gemini agent CLI
#[derive(Parser, Debug)]
#[command(name = "gemini-agent", version, about = "Chat, transcribe and analyze audio with Gemini")]
pub struct Cli {
    /// Config file (defaults to ~/.gemini-agent/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send one prompt, optionally with a file or a response schema
    Chat(ChatArgs),
    /// Transcribe an audio file to text
    Transcribe(AudioArgs),
    /// Transcribe an audio file and analyze the speaker's sentiment
    Analyze(AudioArgs),
}

/// Arguments for the `chat` subcommand.
#[derive(Parser, Debug)]
pub struct ChatArgs {
    /// Model id (e.g. gemini-2.5-flash); defaults to the configured model
    #[arg(short, long)]
    pub model: Option<String>,

    /// System prompt
    #[arg(short, long)]
    pub system: Option<String>,

    /// Temperature
    #[arg(short, long)]
    pub temperature: Option<f64>,

    /// Reasoning effort (minimal, low, medium, high)
    #[arg(short, long)]
    pub effort: Option<String>,

    /// Ground the answer with Google Search
    #[arg(long, conflicts_with = "schema")]
    pub search: bool,

    /// JSON file holding a response schema
    #[arg(long)]
    pub schema: Option<PathBuf>,

    /// File to attach (image, audio, document)
    #[arg(short, long, conflicts_with = "search")]
    pub file: Option<PathBuf>,

    /// User prompt (positional)
    pub prompt: Option<String>,
}

/// Arguments shared by the audio subcommands.
#[derive(Args, Debug)]
pub struct AudioArgs {
    /// Audio file (wav, mp3, flac, ogg, m4a, aac)
    pub path: PathBuf,

    /// Model id; defaults to gemini-2.5-flash
    #[arg(short, long)]
    pub model: Option<String>,
}

impl Cli {
    /// Parse CLI arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
