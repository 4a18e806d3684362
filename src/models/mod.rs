//! Model definitions and the capability table.

pub mod capabilities;
pub mod gemini;

pub use capabilities::supports_reasoning_control;
pub use gemini::GeminiModel;
