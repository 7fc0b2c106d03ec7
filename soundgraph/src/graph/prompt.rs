//! Graph-to-prompt transformation for music generation.
//!
//! A single deterministic pass over the submitted graph producing a
//! descriptive prompt for the music service. Edges referencing unknown
//! node ids are skipped rather than rejected.

use super::{Graph, Node, NodeKind, Relation};
use std::collections::{HashMap, HashSet};

/// Prompt used when the submitted graph has no nodes.
pub const DEFAULT_MUSIC_PROMPT: &str = "Create ambient background music";

const CLOSING_SENTENCE: &str = "High-quality production with clear separation between elements.";

/// Describe a composition graph as a music generation prompt.
///
/// Sections connected by sequence edges are narrated in order, each with
/// the elements it contains; without any section sequence, instruments are
/// listed flat. Genre, mood, and average-tempo fragments are appended when
/// the graph carries them.
#[must_use]
pub fn music_prompt(graph: &Graph) -> String {
    if graph.nodes.is_empty() {
        return DEFAULT_MUSIC_PROMPT.to_string();
    }

    let nodes = graph.node_map();

    let sections: Vec<&Node> = graph
        .nodes
        .iter()
        .filter(|node| node.kind == NodeKind::Section)
        .collect();
    let instruments: Vec<&Node> = graph
        .nodes
        .iter()
        .filter(|node| node.kind.is_instrument())
        .collect();
    let genres: Vec<&str> = graph
        .nodes
        .iter()
        .filter(|node| node.kind == NodeKind::Genre)
        .map(|node| node.label.as_str())
        .collect();
    let moods: Vec<&str> = graph
        .nodes
        .iter()
        .filter(|node| node.kind == NodeKind::Mood)
        .map(|node| node.label.as_str())
        .collect();

    // Section-to-section sequence pairs and the elements each section
    // contains, skipping edges with a dangling endpoint.
    let mut sequence: Vec<(&str, &str)> = Vec::new();
    let mut contents: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in &graph.edges {
        let (Some(source), Some(target)) = (
            nodes.get(edge.source.as_str()),
            nodes.get(edge.target.as_str()),
        ) else {
            continue;
        };
        match edge.relation {
            Some(Relation::Sequence)
                if source.kind == NodeKind::Section && target.kind == NodeKind::Section =>
            {
                sequence.push((source.id.as_str(), target.id.as_str()));
            }
            Some(Relation::Contains) if source.kind == NodeKind::Section => {
                contents
                    .entry(source.id.as_str())
                    .or_default()
                    .push(target.description());
            }
            _ => {}
        }
    }

    let mut parts: Vec<String> = Vec::new();

    if !genres.is_empty() {
        parts.push(format!("{} style", genres.join(", ")));
    }

    if sequence.is_empty() {
        if !instruments.is_empty() {
            let described: Vec<String> = instruments.iter().map(|n| describe_instrument(n)).collect();
            parts.push(format!("featuring {}", described.join(", ")));
        }
    } else {
        parts.push("Track structure:".to_string());
        for section in ordered_sections(&sections, &sequence) {
            match contents.get(section.id.as_str()) {
                Some(items) if !items.is_empty() => {
                    parts.push(format!("{} with {}", section.description(), items.join(", ")));
                }
                _ => parts.push(section.description().to_string()),
            }
        }
    }

    if !moods.is_empty() {
        parts.push(format!("with {} mood", moods.join(", ")));
    }

    let tempos: Vec<u64> = graph.nodes.iter().filter_map(|n| n.bpm.map(u64::from)).collect();
    if !tempos.is_empty() {
        let average = tempos.iter().sum::<u64>() / tempos.len() as u64;
        parts.push(format!("tempo around {average} BPM"));
    }

    let mut prompt = parts.join(". ");
    prompt.push_str(". ");
    prompt.push_str(CLOSING_SENTENCE);
    prompt
}

/// Reconstruct a linear section ordering from sequence edges.
///
/// Starts at a section with no incoming sequence edge; when none exists
/// (a cycle), falls back to the first section in node order so the chain
/// walk still terminates with a non-empty ordering. Only the first
/// discoverable chain is rendered; sections outside it are dropped.
fn ordered_sections<'a>(sections: &[&'a Node], sequence: &[(&str, &str)]) -> Vec<&'a Node> {
    let has_incoming: HashSet<&str> = sequence.iter().map(|&(_, target)| target).collect();

    let start = sections
        .iter()
        .find(|section| !has_incoming.contains(section.id.as_str()))
        .or_else(|| sections.first());
    let Some(&start) = start else {
        return Vec::new();
    };

    let mut order: Vec<&Node> = vec![start];
    let mut visited: HashSet<&str> = HashSet::from([start.id.as_str()]);

    while order.len() < sections.len() {
        let Some(&last) = order.last() else {
            break;
        };
        let current = last.id.as_str();
        let next = sequence.iter().find_map(|&(source, target)| {
            (source == current && !visited.contains(target)).then_some(target)
        });
        match next.and_then(|id| sections.iter().find(|section| section.id == id)) {
            Some(&section) => {
                visited.insert(section.id.as_str());
                order.push(section);
            }
            None => break,
        }
    }

    order
}

/// Detail-or-label for an instrument, annotated with key and tempo.
fn describe_instrument(node: &Node) -> String {
    let mut description = node.description().to_string();
    if let Some(key) = node.key.as_deref().filter(|key| !key.is_empty()) {
        description.push_str(&format!(" in {key}"));
    }
    if let Some(bpm) = node.bpm {
        description.push_str(&format!(" at {bpm} BPM"));
    }
    description
}
