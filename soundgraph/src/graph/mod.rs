//! Composition graph wire model.
//!
//! A graph arrives wholesale with each request and lives only for that
//! request: nodes are musical elements or structural markers, edges are
//! directed, tagged relations between them. Node ids are expected to be
//! unique within one submitted graph; this is not enforced here, and edges
//! referencing unknown ids are skipped during prompt construction.

mod prompt;
mod stats;

pub use prompt::{DEFAULT_MUSIC_PROMPT, music_prompt};
pub use stats::GraphStats;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A 2-D canvas position, used only for client-side layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
}

/// The kind of a graph node.
///
/// Anything the client sends that is not a recognized tag is folded into
/// [`NodeKind::Mood`] and contributes to the mood description of the piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A song structural unit (intro, verse, chorus, ...).
    Section,
    /// Drum or percussion element.
    Drum,
    /// Bassline element.
    Bassline,
    /// Melodic element.
    Melody,
    /// Chord or harmony element.
    Chord,
    /// Synthesizer element.
    Synth,
    /// Vocal element.
    Vocal,
    /// Effects element.
    Fx,
    /// A genre marker.
    Genre,
    /// Catch-all for unrecognized tags, treated as a mood descriptor.
    #[serde(other)]
    Mood,
}

impl NodeKind {
    /// Whether this kind is a playable instrument element.
    #[must_use]
    pub const fn is_instrument(self) -> bool {
        matches!(
            self,
            Self::Drum
                | Self::Bassline
                | Self::Melody
                | Self::Chord
                | Self::Synth
                | Self::Vocal
                | Self::Fx
        )
    }

    /// The wire tag for this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Section => "section",
            Self::Drum => "drum",
            Self::Bassline => "bassline",
            Self::Melody => "melody",
            Self::Chord => "chord",
            Self::Synth => "synth",
            Self::Vocal => "vocal",
            Self::Fx => "fx",
            Self::Genre => "genre",
            Self::Mood => "mood",
        }
    }
}

/// A directed relation tag carried by an edge.
///
/// Legacy tags emitted by older clients are accepted as aliases; tags this
/// crate does not know become [`Relation::Other`] instead of failing the
/// whole request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Relation {
    /// Ordered flow between sections (intro into verse into chorus).
    #[serde(alias = "next", alias = "after")]
    Sequence,
    /// A section contains an instrument or element.
    #[serde(alias = "has", alias = "plays-in")]
    Contains,
    /// Harmonic relationship between elements.
    #[serde(alias = "blends-with")]
    HarmonicBlend,
    /// A rhythm element supporting another element.
    #[serde(alias = "supports")]
    Support,
    /// A genre or mood shaping another element.
    #[serde(alias = "influences", alias = "has-mood")]
    Influence,
    /// Any tag not recognized above.
    #[serde(other)]
    Other,
}

/// A musical element or structural marker in a composition graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Identifier, unique within one submitted graph.
    pub id: String,
    /// Node kind tag.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Display label.
    pub label: String,
    /// Musical key, when known (e.g. "C", "Am").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Tempo in beats per minute, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bpm: Option<u32>,
    /// Free-text description of the element.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    /// Canvas position, for client-side layout only.
    #[serde(default)]
    pub position: Position,
}

impl Node {
    /// The node's free-text detail if set, otherwise its display label.
    #[must_use]
    pub fn description(&self) -> &str {
        match self.details.as_deref() {
            Some(details) if !details.is_empty() => details,
            _ => &self.label,
        }
    }
}

/// A directed, tagged relation between two nodes.
///
/// Direction is meaningful: source to target encodes flow or containment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    /// Identifier.
    pub id: String,
    /// Source node id.
    pub source: String,
    /// Target node id.
    pub target: String,
    /// Relation tag; absent on untyped edges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<Relation>,
}

/// An ephemeral composition graph, supplied wholesale per request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// Nodes, in client order.
    #[serde(default)]
    pub nodes: Vec<Node>,
    /// Edges, in client order.
    #[serde(default)]
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Create a graph from parts.
    #[must_use]
    pub const fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Whether the graph has no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Build an id-to-node lookup table.
    #[must_use]
    pub fn node_map(&self) -> HashMap<&str, &Node> {
        self.nodes
            .iter()
            .map(|node| (node.id.as_str(), node))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(id: &str, kind: NodeKind, label: &str) -> Node {
        Node {
            id: id.to_string(),
            kind,
            label: label.to_string(),
            key: None,
            bpm: None,
            details: None,
            position: Position::default(),
        }
    }

    #[test]
    fn test_node_kind_tags() {
        assert_eq!(NodeKind::Section.as_str(), "section");
        assert_eq!(NodeKind::Mood.as_str(), "mood");
        assert!(NodeKind::Drum.is_instrument());
        assert!(NodeKind::Fx.is_instrument());
        assert!(!NodeKind::Section.is_instrument());
        assert!(!NodeKind::Genre.is_instrument());
    }

    #[test]
    fn test_unknown_node_kind_becomes_mood() {
        let json = r#"{"id":"n1","type":"dreamy","label":"Dreamy"}"#;
        let parsed: Node = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.kind, NodeKind::Mood);
    }

    #[test]
    fn test_relation_aliases() {
        let cases = [
            ("\"sequence\"", Relation::Sequence),
            ("\"next\"", Relation::Sequence),
            ("\"contains\"", Relation::Contains),
            ("\"has\"", Relation::Contains),
            ("\"harmonic-blend\"", Relation::HarmonicBlend),
            ("\"blends-with\"", Relation::HarmonicBlend),
            ("\"support\"", Relation::Support),
            ("\"supports\"", Relation::Support),
            ("\"influence\"", Relation::Influence),
            ("\"influences\"", Relation::Influence),
            ("\"something-else\"", Relation::Other),
        ];
        for (json, expected) in cases {
            let parsed: Relation = serde_json::from_str(json).unwrap();
            assert_eq!(parsed, expected, "tag {json}");
        }
    }

    #[test]
    fn test_node_description_fallback() {
        let mut n = node("d1", NodeKind::Drum, "Drums");
        assert_eq!(n.description(), "Drums");

        n.details = Some(String::new());
        assert_eq!(n.description(), "Drums");

        n.details = Some("punchy 808 kit".to_string());
        assert_eq!(n.description(), "punchy 808 kit");
    }

    #[test]
    fn test_graph_node_map() {
        let graph = Graph::new(
            vec![
                node("a", NodeKind::Section, "Intro"),
                node("b", NodeKind::Drum, "Drums"),
            ],
            vec![],
        );
        let map = graph.node_map();
        assert_eq!(map.len(), 2);
        assert_eq!(map["a"].label, "Intro");
        assert!(!graph.is_empty());
        assert!(Graph::default().is_empty());
    }

    #[test]
    fn test_graph_deserializes_with_missing_optionals() {
        let json = r#"{
            "nodes": [{"id": "n1", "type": "synth", "label": "Pad"}],
            "edges": [{"id": "e1", "source": "n1", "target": "n2"}]
        }"#;
        let graph: Graph = serde_json::from_str(json).unwrap();
        assert_eq!(graph.nodes.len(), 1);
        assert_eq!(graph.edges[0].relation, None);
        assert_eq!(graph.nodes[0].position, Position::default());
    }
}
