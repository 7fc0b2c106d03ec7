//! Instrument recommendations produced by the recommendation flow.

use crate::graph::NodeKind;
use serde::{Deserialize, Serialize};

/// A single instrument recommendation, produced per request and never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstrumentRecommendation {
    /// Stable identifier for the instrument (e.g. "djembe").
    pub instrument_id: String,
    /// Display name.
    pub instrument_name: String,
    /// Musical culture the instrument comes from.
    pub culture: String,
    /// Genres the instrument suits, comma-joined.
    pub genre: String,
    /// Element kind the instrument maps onto.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Why this instrument fits the composition.
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_wire_shape() {
        let json = r#"{
            "instrument_id": "guzheng",
            "instrument_name": "Guzheng",
            "culture": "Chinese",
            "genre": "Traditional, Ambient, C-Pop",
            "type": "melody",
            "reason": "Pentatonic melodies add an East-meets-West texture."
        }"#;
        let rec: InstrumentRecommendation = serde_json::from_str(json).unwrap();
        assert_eq!(rec.instrument_id, "guzheng");
        assert_eq!(rec.kind, NodeKind::Melody);

        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["type"], "melody");
    }
}
