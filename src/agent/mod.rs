//! Agent sessions: conversation state and the invoke operations.

pub mod conversation;
pub mod options;
pub mod request;
pub mod session;

pub use conversation::Conversation;
pub use options::AgentOptions;
pub use request::ChatRequest;
pub use session::AgentSession;
