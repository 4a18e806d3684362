//! Request configuration, response normalization, and structured decoding.

pub mod config;
pub mod normalize;
pub mod object;

pub use config::{build_config, RequestOptions};
pub use normalize::normalize;
pub use object::{decode_structured, StructuredResponse};
