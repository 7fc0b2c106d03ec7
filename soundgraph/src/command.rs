//! Graph mutation commands emitted by the editing flow.
//!
//! The model returns an ordered list of commands which the client applies
//! to its own copy of the graph; nothing is mutated server-side.

use crate::graph::{NodeKind, Position, Relation};
use serde::{Deserialize, Serialize};

/// An instruction to mutate a client-held composition graph.
///
/// Serialized as `{"action": "...", "params": {...}}` with one fixed
/// parameter record per action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "params", rename_all = "camelCase")]
pub enum GraphCommand {
    /// Add a new node.
    CreateNode(CreateNodeParams),
    /// Link two nodes with a directed edge.
    ConnectNodes(ConnectNodesParams),
    /// Remove a node or edge by id.
    DeleteById(DeleteByIdParams),
}

/// Parameters for [`GraphCommand::CreateNode`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateNodeParams {
    /// Identifier for the new node.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Node kind tag.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Canvas position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
    /// Musical key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    /// Tempo in beats per minute.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bpm: Option<u32>,
    /// Section the node belongs to, in structure mode.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
}

/// Parameters for [`GraphCommand::ConnectNodes`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectNodesParams {
    /// Source node id.
    pub source: String,
    /// Target node id.
    pub target: String,
    /// Relation tag for the new edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub relation: Option<Relation>,
    /// Display label for the new edge.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Parameters for [`GraphCommand::DeleteById`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteByIdParams {
    /// Exact id of the node or edge to remove.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_wire_shape() {
        let json = r#"{
            "action": "createNode",
            "params": {
                "id": "chorus",
                "label": "Chorus",
                "type": "section",
                "position": {"x": 400.0, "y": 100.0},
                "bpm": 128
            }
        }"#;
        let command: GraphCommand = serde_json::from_str(json).unwrap();
        match &command {
            GraphCommand::CreateNode(params) => {
                assert_eq!(params.id, "chorus");
                assert_eq!(params.kind, NodeKind::Section);
                assert_eq!(params.bpm, Some(128));
            }
            other => panic!("unexpected command: {other:?}"),
        }

        let round_tripped = serde_json::to_value(&command).unwrap();
        assert_eq!(round_tripped["action"], "createNode");
        assert_eq!(round_tripped["params"]["type"], "section");
    }

    #[test]
    fn test_connect_and_delete_commands() {
        let json = r#"[
            {"action": "connectNodes", "params": {"source": "verse", "target": "chorus", "relation": "sequence"}},
            {"action": "deleteById", "params": {"id": "pad-1"}}
        ]"#;
        let commands: Vec<GraphCommand> = serde_json::from_str(json).unwrap();
        assert_eq!(commands.len(), 2);
        assert!(matches!(
            &commands[0],
            GraphCommand::ConnectNodes(params) if params.relation == Some(Relation::Sequence)
        ));
        assert!(matches!(
            &commands[1],
            GraphCommand::DeleteById(params) if params.id == "pad-1"
        ));
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        let json = r#"{"action": "renameNode", "params": {"id": "x"}}"#;
        assert!(serde_json::from_str::<GraphCommand>(json).is_err());
    }
}
