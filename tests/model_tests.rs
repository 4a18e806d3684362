//! Tests for model ids and the reasoning-control capability table.

use gemini_agent::models::{supports_reasoning_control, GeminiModel};
use gemini_agent::types::{ReasoningEffort, Role};

#[test]
fn fixed_models_have_no_reasoning_control() {
    for id in [
        "gemini-2.5-flash",
        "gemini-2.5-flash-lite",
        "gemini-2.5-pro",
        "gemini-2.0-flash",
    ] {
        assert!(!supports_reasoning_control(&GeminiModel::parse(id)), "{id}");
    }
}

#[test]
fn every_other_id_has_reasoning_control() {
    for id in [
        "gemini-3-pro-preview",
        "gemini-3-flash-preview",
        "gemini-2.5-flash-preview-09-2025",
        "some-future-model",
    ] {
        assert!(supports_reasoning_control(&GeminiModel::parse(id)), "{id}");
    }
}

#[test]
fn parse_and_display_round_trip_known_ids() {
    let model = GeminiModel::parse("gemini-2.5-pro");
    assert_eq!(model, GeminiModel::Gemini25Pro);
    assert_eq!(model.to_string(), "gemini-2.5-pro");

    let custom = GeminiModel::parse(" tuned/my-model ");
    assert_eq!(custom, GeminiModel::Custom("tuned/my-model".to_string()));
    assert_eq!(custom.as_str(), "tuned/my-model");
}

#[test]
fn model_serializes_as_plain_id() {
    let json = serde_json::to_string(&GeminiModel::Gemini3FlashPreview).unwrap();
    assert_eq!(json, "\"gemini-3-flash-preview\"");
    let back: GeminiModel = serde_json::from_str("\"gemini-2.0-flash\"").unwrap();
    assert_eq!(back, GeminiModel::Gemini20Flash);
}

#[test]
fn effort_parses_case_insensitively_and_serializes_uppercase() {
    assert_eq!("HIGH".parse::<ReasoningEffort>().unwrap(), ReasoningEffort::High);
    assert_eq!("minimal".parse::<ReasoningEffort>().unwrap(), ReasoningEffort::Minimal);
    assert!("extreme".parse::<ReasoningEffort>().is_err());
    assert_eq!(serde_json::to_string(&ReasoningEffort::Medium).unwrap(), "\"MEDIUM\"");
    assert_eq!(ReasoningEffort::default(), ReasoningEffort::Low);
}

#[test]
fn role_normalization_maps_only_assistant_to_model() {
    assert_eq!(Role::normalize("assistant"), Role::Model);
    for label in ["user", "system", "model", "", "ASSISTANT", " assistant"] {
        assert_eq!(Role::normalize(label), Role::User, "{label:?}");
    }
}
