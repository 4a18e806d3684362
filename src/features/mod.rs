//! Ready-made features built on agent sessions.

pub mod chatbot;
pub mod feeling;
pub mod prompts;
pub mod transcription;

pub use chatbot::Chatbot;
pub use feeling::{FeelingAnalysis, FeelingDetail};
pub use transcription::Transcriber;
