//! Transcription-plus-sentiment output and its response schema.

use serde::{Deserialize, Serialize};

use crate::types::Schema;

/// A transcription with the speaker's dominant sentiment.
///
/// Field names on the wire match the response schema exactly, including the
/// `feelingAnalysys` spelling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeelingAnalysis {
    #[serde(rename = "transcriptedText")]
    pub transcribed_text: String,
    #[serde(rename = "feelingAnalysys")]
    pub feeling: FeelingDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeelingDetail {
    pub dominant_feeling: String,
    pub confidence_level: String,
    pub justification: String,
}

impl FeelingAnalysis {
    /// Response schema matching this type. Every field is required.
    pub fn schema() -> Schema {
        Schema::object()
            .property("transcriptedText", Schema::string())
            .property(
                "feelingAnalysys",
                Schema::object()
                    .property("dominantFeeling", Schema::string())
                    .property("confidenceLevel", Schema::string())
                    .property("justification", Schema::string())
                    .required(["dominantFeeling", "confidenceLevel", "justification"]),
            )
            .required(["transcriptedText", "feelingAnalysys"])
    }
}
