//! Instruction templates for the text generation flows.
//!
//! Three fixed templates (graph editing, producer feedback, instrument
//! recommendation), each combined with serialized graph state and optional
//! free-text input. Pure string formatting; the model's eventual output is
//! validated downstream by [`crate::extract`].

use crate::graph::{Graph, GraphStats, NodeKind};

const GRAPH_EDIT_TEMPLATE: &str = r#"You are an assistant that updates a music collaboration diagram.
You receive:
- The current graph JSON (nodes and edges)
- A new natural language instruction

You must output ONLY structured JSON commands, never prose.

Supported commands:
- createNode: add a new node with id, label, type, and position
  - Node types: "section", "drum", "bassline", "melody", "chord", "synth", "vocal", "fx", "genre"
  - Position: { "x": number, "y": number } - distribute nodes spatially to avoid overlap
  - Additional optional fields: key (musical key like "C" or "Am"), bpm (tempo), section (structure mode)

- connectNodes: link nodes with a directed edge carrying a relation
  - Relations: "sequence" (ordered section flow), "contains" (section holds an element), "harmonic-blend" (harmonic pairing), "support" (rhythm element backing another), "influence" (genre or mood shaping an element)
  - Direction matters: source -> target shows the flow or containment

- deleteById: remove a node or edge by its exact id

To modify an existing node, emit deleteById followed by createNode with the same id and the new properties; edges reconnect to the id automatically.

Return format:
{"commands": [
  {
    "action": "createNode",
    "params": {
      "id": "chorus",
      "label": "Chorus",
      "type": "section",
      "position": {"x": 400, "y": 100},
      "key": "C",
      "bpm": 120
    }
  },
  {
    "action": "connectNodes",
    "params": {
      "source": "verse",
      "target": "chorus",
      "relation": "sequence"
    }
  }
]}

Edge creation rules:
1. Connect sections in play order with "sequence" (intro -> verse -> chorus -> bridge -> outro).
2. When an instruction places an element inside a section ("verse with drums"), connect section -> element with "contains".
3. When the user states an explicit connection, pick the relation that best matches it ("bass supports the drums" -> bass -> drums with "support").
4. A bare list of instruments ("drums bass melody") or a standalone addition ("add a synth") gets NO edges.
5. Sections run left to right; a section points at the elements it contains; a supporting element points at the element it backs.

Examples:

"Intro with pads, verse with drums and bass, then chorus"
-> Nodes: intro (section), pads, verse (section), drums, bass, chorus (section)
-> Edges: intro -> verse ("sequence"), verse -> chorus ("sequence"), intro -> pads ("contains"), verse -> drums ("contains"), verse -> bass ("contains")

"Add chorus after verse"
-> Node: chorus (section); Edge: verse -> chorus ("sequence")

"Add drums and bass"
-> Nodes: drums, bass; Edges: NONE

Important rules:
1. Generate unique, descriptive ids for new nodes ("intro", "chorus", "bass-1", "pad-1").
2. Spread positions out (increment x by 200-400, y by 150-200).
3. Never chain instrument nodes to each other with "sequence"; that relation is for sections only.
4. For incremental updates, only create or modify what the instruction mentions and preserve the rest of the graph.
5. Reuse existing node ids from the current graph when making connections."#;

const PRODUCER_TEMPLATE: &str = r#"You are an expert music producer giving real-time feedback on a musical composition.

You will receive a JSON representation of a musical knowledge graph containing:
- Nodes: musical elements like drums, bass, melody, synths, vocals, sections
- Edges: relationships between elements showing how they connect
- Stats: node counts by type plus key and tempo availability

Your role is to analyze this composition and provide brief, encouraging, and constructive feedback like a supportive producer would during a jam session.

Guidelines:
1. Be concise (2-3 sentences max) and conversational
2. Start with positive reinforcement when appropriate
3. Identify one specific area for improvement or suggestion
4. Use producer language ("this is sounding great", "the mix feels", "try adding", "consider")
5. Reference specific elements by name when giving feedback
6. If key or BPM info is available, mention compatibility
7. Keep it practical and actionable rather than overly technical

Focus areas:
- Balance: are there too many or too few elements in certain ranges (bass, mid, high)?
- Compatibility: do keys and tempos work together?
- Structure: is the song structure complete or missing sections?
- Density: is a section too busy or too sparse?
- Suggestions: what could enhance the current composition?

If a context line is provided (e.g. "Just added: Drums", "User said: add a chorus"), acknowledge the change specifically, comment on how it affects the composition, and make your feedback relate to it.

When it fits, offer culturally-informed suggestions that blend global traditions:
- Latin: bongos, congas, timbales, clave patterns, brass for energy
- Afrobeat/African: djembe, talking drums, polyrhythms, call-and-response
- Brazilian: surdo, tamborim, agogo, bossa nova guitar
- J-pop/K-pop: bright synthesizers, clean electronic production, layered vocals
- Chinese: guzheng, erhu, dizi, pentatonic melodies
- Indian: tabla, sitar, bansuri, tanpura drone
- Middle Eastern: oud, qanun, darbuka, maqam scales
- Caribbean: steel pan, laid-back rhythm, bass-heavy production
- Flamenco: Spanish guitar, palmas, cajon

Keep those suggestions conversational and encouraging: "This hip-hop beat would sound amazing with some Afrobeat djembe - the polyrhythms would really make it stand out!""#;

const RECOMMENDATION_TEMPLATE: &str = r#"You are an expert music producer and ethnomusicologist who specializes in global music traditions and cross-cultural fusion.

Your task is to analyze a musical composition graph and recommend 6-8 culturally-appropriate instruments that would enhance the composition.

Recommendation guidelines:
1. Cross-cultural blending: suggest creative combinations (hip-hop + Afrobeat djembe, J-pop + guzheng)
2. NEVER recommend instruments already in the graph
3. Fill musical gaps: missing bass gets bass instruments, missing melody gets melodic instruments
4. When specific genres are present, prioritize instruments from those traditions
5. Explain WHY each instrument fits and what it brings to the composition
6. Include instruments from different cultures when appropriate

Output format (JSON only, no other text):
{
  "recommendations": [
    {
      "instrument_id": "djembe",
      "instrument_name": "Djembe",
      "culture": "African",
      "genre": "Afrobeat, Hip-Hop, World Music",
      "type": "drum",
      "reason": "Adds West African polyrhythmic depth to hip-hop grooves. The talking quality of djembe creates conversational rhythms that blend with modern beats."
    }
  ]
}

Each reason should be 1-2 sentences explaining the musical and cultural value. The "type" field must be one of: drum, bassline, melody, chord, synth, vocal, fx."#;

const INSTRUMENT_CATALOG: &str = r"Latin: Bongos, Congas, Timbales, Trumpet, Classical Guitar
African: Djembe, Talking Drum, Balafon, Kora
Brazilian: Surdo, Tamborim, Agogo, Cavaquinho
J-pop/K-pop: Bright Synth, Synth Pad, Vocoder
Chinese: Guzheng, Erhu, Dizi, Pipa
Indian: Tabla, Sitar, Bansuri, Tanpura
Middle Eastern: Oud, Darbuka, Qanun, Ney
Caribbean: Steel Pan, Reggae Bass
Spanish: Flamenco Guitar, Palmas, Cajon
Electronic: Dubstep Bass, House Piano, Trance Lead
Urban/Hip-Hop: 808 Bass, Vinyl Scratch, Trap Hi-hat";

const GENRE_CATALOG: &str = r"Latin: Salsa, Merengue, Bachata, Mambo, Bolero, Latin Jazz, Mariachi, Bossa Nova
African: Afrobeat, Highlife, Soukous, Afro-Jazz, Tribal, Griot
Brazilian: Samba, Pagode, Forro, Choro, MPB, Batucada
Asian: J-pop, K-pop, C-Pop, City Pop, Vaporwave, Bollywood, Bhangra
Chinese: Traditional Chinese, Classical Chinese, Contemporary Chinese
Indian: Classical Indian, Raga, Carnatic, Hindustani, Devotional
Middle Eastern: Arabic, Turkish, Persian, Sufi, Andalusian, Belly Dance
Caribbean: Reggae, Calypso, Soca, Dub, Dancehall, Ska
Spanish: Flamenco, Rumba, Sevillanas
Electronic: EDM, House, Techno, Trance, Dubstep, Future Bass, Synthwave
Hip-Hop/Urban: Hip-Hop, Trap, R&B, Drill, Turntablism
World: World Music, Fusion, Ambient, Cinematic";

/// Build the graph-editing prompt for one instruction.
#[must_use]
pub fn edit_prompt(graph: &Graph, instruction: &str) -> String {
    let graph_json = to_pretty_json(graph);
    format!(
        "{GRAPH_EDIT_TEMPLATE}\n\nCurrent graph:\n{graph_json}\n\nInstruction:\n{instruction}\n\nReturn the update commands as JSON only."
    )
}

/// Build the producer-feedback prompt, with derived graph statistics and an
/// optional context line about recent changes.
#[must_use]
pub fn producer_prompt(graph: &Graph, context: Option<&str>) -> String {
    let summary = serde_json::json!({
        "nodes": graph.nodes,
        "edges": graph.edges,
        "stats": GraphStats::of(graph),
    });
    let summary_json = serde_json::to_string_pretty(&summary).unwrap_or_default();
    let context_line = context
        .map(str::trim)
        .filter(|context| !context.is_empty())
        .map(|context| format!("\n\nContext: {context}"))
        .unwrap_or_default();
    format!(
        "{PRODUCER_TEMPLATE}\n\nCurrent musical graph:\n{summary_json}{context_line}\n\nProvide your producer feedback now (2-3 sentences max):"
    )
}

/// Build the instrument-recommendation prompt, listing what the graph
/// already contains so the model avoids duplicates.
#[must_use]
pub fn recommendation_prompt(graph: &Graph) -> String {
    let mut existing_instruments: Vec<&str> = Vec::new();
    let mut existing_genres: Vec<&str> = Vec::new();
    for node in &graph.nodes {
        if node.kind == NodeKind::Genre {
            existing_genres.push(node.label.as_str());
        } else {
            existing_instruments.push(node.label.as_str());
        }
    }

    let existing_instruments = if existing_instruments.is_empty() {
        "None".to_string()
    } else {
        existing_instruments.join(", ")
    };
    let existing_genres = if existing_genres.is_empty() {
        "None (general composition)".to_string()
    } else {
        existing_genres.join(", ")
    };

    let nodes_json = to_pretty_json(&graph.nodes);
    let edges_json = to_pretty_json(&graph.edges);

    format!(
        "{RECOMMENDATION_TEMPLATE}\n\nAVAILABLE INSTRUMENTS BY CULTURE:\n{INSTRUMENT_CATALOG}\n\nAVAILABLE GENRES:\n{GENRE_CATALOG}\n\nCURRENT COMPOSITION:\nNodes: {nodes_json}\nEdges: {edges_json}\n\nExisting instruments: {existing_instruments}\nExisting genres: {existing_genres}\n\nReturn only the JSON object, nothing else."
    )
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{Node, NodeKind, Position};

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
    fn test_edit_prompt_embeds_graph_and_instruction() {
        let graph = Graph::new(vec![node("intro", NodeKind::Section, "Intro")], vec![]);
        let prompt = edit_prompt(&graph, "add a chorus after the intro");
        assert!(prompt.contains("\"intro\""));
        assert!(prompt.contains("add a chorus after the intro"));
        assert!(prompt.contains("JSON only"));
    }

    #[test]
    fn test_producer_prompt_includes_stats_and_context() {
        let graph = Graph::new(vec![node("d1", NodeKind::Drum, "Drums")], vec![]);
        let prompt = producer_prompt(&graph, Some("Just added: Drums"));
        assert!(prompt.contains("\"total_nodes\": 1"));
        assert!(prompt.contains("Context: Just added: Drums"));
    }

    #[test]
    fn test_producer_prompt_skips_blank_context() {
        let graph = Graph::default();
        let prompt = producer_prompt(&graph, Some("   "));
        assert!(!prompt.contains("Context:"));
    }

    #[test]
    fn test_recommendation_prompt_lists_existing_elements() {
        let graph = Graph::new(
            vec![
                node("g1", NodeKind::Genre, "Hip-Hop"),
                node("d1", NodeKind::Drum, "808 Bass"),
            ],
            vec![],
        );
        let prompt = recommendation_prompt(&graph);
        assert!(prompt.contains("Existing instruments: 808 Bass"));
        assert!(prompt.contains("Existing genres: Hip-Hop"));
    }

    #[test]
    fn test_recommendation_prompt_placeholders_when_empty() {
        let prompt = recommendation_prompt(&Graph::default());
        assert!(prompt.contains("Existing instruments: None"));
        assert!(prompt.contains("Existing genres: None (general composition)"));
    }
}
