//! Core types for gemini-agent.

pub mod generation;
pub mod message;
pub mod response;
pub mod schema;
pub mod usage;

pub use generation::*;
pub use message::*;
pub use response::*;
pub use schema::*;
pub use usage::*;
