//! Model capability table.
//!
//! The single source of truth for which models accept a thinking level.

use super::gemini::GeminiModel;

/// Model ids that reject a `thinkingConfig.thinkingLevel` field.
const NO_REASONING_CONTROL: &[&str] = &[
    "gemini-2.5-flash",
    "gemini-2.5-flash-lite",
    "gemini-2.5-pro",
    "gemini-2.0-flash",
];

/// Whether `model` accepts a reasoning-effort control.
///
/// Every id outside the fixed set, including custom and future ids, is
/// assumed to support it.
pub fn supports_reasoning_control(model: &GeminiModel) -> bool {
    !NO_REASONING_CONTROL.contains(&model.as_str())
}
