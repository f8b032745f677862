//! Workflow data model: nodes, edges, and the graph snapshot the engine
//! consumes.
//!
//! The wire shape matches the editor's serialized form:
//!
//! ```json
//! {
//!   "nodes": [{"id": "t1", "type": "task", "data": {"title": "Review"}}],
//!   "edges": [{"id": "e1", "source": "s1", "target": "t1"}]
//! }
//! ```
//!
//! Deserialization is deliberately tolerant: a node's `data` record may be
//! absent entirely, every per-kind field is optional, and unrecognised
//! kind tags are preserved as [`NodePayload::Other`] rather than rejected.
//! Structural problems (dangling edge endpoints, missing required fields)
//! are the validator's job, not the parser's.
//!
//! The engine never mutates a [`Workflow`]; every invocation produces
//! fresh result values.

use rustc_hash::FxHashMap;
use serde::de::Error as _;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::types::NodeKind;

/// A single step in a workflow graph.
///
/// Serializes as `{id, type, data}` where `type` is the kind tag and
/// `data` is the kind-specific record.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Identifier, unique within a graph.
    pub id: String,
    /// Kind tag plus the kind-specific data record.
    pub payload: NodePayload,
}

/// Kind-specific data carried by a [`Node`].
///
/// One variant per kind keeps all per-kind logic (field validation,
/// description rendering) an exhaustive match the compiler checks when a
/// kind is added.
#[derive(Clone, Debug, PartialEq)]
pub enum NodePayload {
    Start(StartData),
    Task(TaskData),
    Approval(ApprovalData),
    Automated(AutomatedData),
    End(EndData),
    /// A kind this build does not know; the raw record is kept verbatim
    /// so re-serialization is lossless.
    Other {
        kind: String,
        data: serde_json::Value,
    },
}

/// Data record for a `start` node.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StartData {
    pub label: String,
    pub title: String,
    pub metadata: FxHashMap<String, String>,
}

/// Data record for a `task` node.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskData {
    pub label: String,
    pub title: String,
    pub description: String,
    pub assignee: String,
    pub due_date: String,
    pub custom_fields: FxHashMap<String, String>,
}

/// Data record for an `approval` node.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApprovalData {
    pub label: String,
    pub title: String,
    pub approver_role: String,
    pub auto_approve_threshold: f64,
}

/// Data record for an `automated` node.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AutomatedData {
    pub label: String,
    pub title: String,
    pub action_id: String,
    pub action_params: FxHashMap<String, String>,
}

/// Data record for an `end` node.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EndData {
    pub label: String,
    pub end_message: String,
    pub show_summary: bool,
}

/// A directed connection between two nodes.
///
/// Handles are only meaningful for nodes with multiple output ports;
/// none of the current kinds have any, so they are usually absent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    pub source: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
}

/// An immutable snapshot of a workflow graph: ordered nodes plus ordered
/// edges. Edge order matters — it is the tie-break for traversal when a
/// node has multiple outgoing edges.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

impl NodePayload {
    /// The kind discriminator for this payload.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        match self {
            NodePayload::Start(_) => NodeKind::Start,
            NodePayload::Task(_) => NodeKind::Task,
            NodePayload::Approval(_) => NodeKind::Approval,
            NodePayload::Automated(_) => NodeKind::Automated,
            NodePayload::End(_) => NodeKind::End,
            NodePayload::Other { kind, .. } => NodeKind::Other(kind.clone()),
        }
    }

    fn label(&self) -> Option<&str> {
        match self {
            NodePayload::Start(d) => non_blank(&d.label),
            NodePayload::Task(d) => non_blank(&d.label),
            NodePayload::Approval(d) => non_blank(&d.label),
            NodePayload::Automated(d) => non_blank(&d.label),
            NodePayload::End(d) => non_blank(&d.label),
            NodePayload::Other { data, .. } => {
                data.get("label").and_then(|v| v.as_str()).and_then(non_blank)
            }
        }
    }

    /// The configured title, if present and non-blank.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        match self {
            NodePayload::Start(d) => non_blank(&d.title),
            NodePayload::Task(d) => non_blank(&d.title),
            NodePayload::Approval(d) => non_blank(&d.title),
            NodePayload::Automated(d) => non_blank(&d.title),
            NodePayload::End(_) => None,
            NodePayload::Other { data, .. } => {
                data.get("title").and_then(|v| v.as_str()).and_then(non_blank)
            }
        }
    }
}

impl Node {
    pub fn new(id: impl Into<String>, payload: NodePayload) -> Self {
        Self {
            id: id.into(),
            payload,
        }
    }

    /// The kind discriminator for this node.
    #[must_use]
    pub fn kind(&self) -> NodeKind {
        self.payload.kind()
    }

    /// Human-facing name used in error messages: the label, else the
    /// title, else the node id.
    #[must_use]
    pub fn display_label(&self) -> &str {
        self.payload
            .label()
            .or_else(|| self.payload.title())
            .unwrap_or(&self.id)
    }

    // Convenience constructors, mainly for tests and examples.

    pub fn start(id: impl Into<String>) -> Self {
        Self::new(id, NodePayload::Start(StartData::default()))
    }

    pub fn task(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(
            id,
            NodePayload::Task(TaskData {
                title: title.into(),
                ..TaskData::default()
            }),
        )
    }

    pub fn approval(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self::new(
            id,
            NodePayload::Approval(ApprovalData {
                title: title.into(),
                ..ApprovalData::default()
            }),
        )
    }

    pub fn automated(
        id: impl Into<String>,
        title: impl Into<String>,
        action_id: impl Into<String>,
    ) -> Self {
        Self::new(
            id,
            NodePayload::Automated(AutomatedData {
                title: title.into(),
                action_id: action_id.into(),
                ..AutomatedData::default()
            }),
        )
    }

    pub fn end(id: impl Into<String>) -> Self {
        Self::new(id, NodePayload::End(EndData::default()))
    }
}

impl Edge {
    pub fn new(
        id: impl Into<String>,
        source: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            source: source.into(),
            target: target.into(),
            source_handle: None,
            target_handle: None,
        }
    }
}

impl Workflow {
    pub fn new(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Nodes whose kind is `start`, in input order.
    pub fn start_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.kind().is_start())
    }

    /// Nodes whose kind is `end`, in input order.
    pub fn end_nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter().filter(|n| n.kind().is_end())
    }
}

/// Trims `s` and returns it only if something is left.
pub(crate) fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Node", 3)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("type", self.payload.kind().as_tag())?;
        match &self.payload {
            NodePayload::Start(d) => state.serialize_field("data", d)?,
            NodePayload::Task(d) => state.serialize_field("data", d)?,
            NodePayload::Approval(d) => state.serialize_field("data", d)?,
            NodePayload::Automated(d) => state.serialize_field("data", d)?,
            NodePayload::End(d) => state.serialize_field("data", d)?,
            NodePayload::Other { data, .. } => state.serialize_field("data", data)?,
        }
        state.end()
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct RawNode {
            id: String,
            #[serde(rename = "type")]
            kind: String,
            #[serde(default)]
            data: serde_json::Value,
        }

        let raw = RawNode::deserialize(deserializer)?;
        // Absent `data` behaves like an empty record.
        let data = match raw.data {
            serde_json::Value::Null => serde_json::Value::Object(Default::default()),
            other => other,
        };
        let payload = match NodeKind::from(raw.kind.as_str()) {
            NodeKind::Start => {
                NodePayload::Start(serde_json::from_value(data).map_err(D::Error::custom)?)
            }
            NodeKind::Task => {
                NodePayload::Task(serde_json::from_value(data).map_err(D::Error::custom)?)
            }
            NodeKind::Approval => {
                NodePayload::Approval(serde_json::from_value(data).map_err(D::Error::custom)?)
            }
            NodeKind::Automated => {
                NodePayload::Automated(serde_json::from_value(data).map_err(D::Error::custom)?)
            }
            NodeKind::End => {
                NodePayload::End(serde_json::from_value(data).map_err(D::Error::custom)?)
            }
            NodeKind::Other(kind) => NodePayload::Other { kind, data },
        };
        Ok(Node {
            id: raw.id,
            payload,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn node_without_data_deserializes() {
        let node: Node = serde_json::from_value(json!({"id": "s1", "type": "start"})).unwrap();
        assert_eq!(node.id, "s1");
        assert_eq!(node.payload, NodePayload::Start(StartData::default()));
    }

    #[test]
    fn task_fields_map_from_camel_case() {
        let node: Node = serde_json::from_value(json!({
            "id": "t1",
            "type": "task",
            "data": {"title": "Review", "assignee": "ana", "dueDate": "2026-09-01"}
        }))
        .unwrap();
        match node.payload {
            NodePayload::Task(d) => {
                assert_eq!(d.title, "Review");
                assert_eq!(d.assignee, "ana");
                assert_eq!(d.due_date, "2026-09-01");
            }
            other => panic!("expected task payload, got {other:?}"),
        }
    }

    #[test]
    fn unknown_kind_round_trips_losslessly() {
        let raw = json!({"id": "x1", "type": "review", "data": {"reviewer": "bo"}});
        let node: Node = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(node.kind(), crate::types::NodeKind::Other("review".into()));
        assert_eq!(serde_json::to_value(&node).unwrap(), raw);
    }

    #[test]
    fn edge_handles_are_optional() {
        let edge: Edge =
            serde_json::from_value(json!({"id": "e1", "source": "a", "target": "b"})).unwrap();
        assert_eq!(edge.source_handle, None);
        let back = serde_json::to_value(&edge).unwrap();
        assert_eq!(back, json!({"id": "e1", "source": "a", "target": "b"}));
    }

    #[test]
    fn workflow_requires_both_collections() {
        let missing_edges = json!({"nodes": []});
        assert!(serde_json::from_value::<Workflow>(missing_edges).is_err());
    }

    #[test]
    fn display_label_falls_back_to_title_then_id() {
        let mut node = Node::task("t1", "Review contract");
        assert_eq!(node.display_label(), "Review contract");
        if let NodePayload::Task(d) = &mut node.payload {
            d.label = "Legal review".into();
        }
        assert_eq!(node.display_label(), "Legal review");
        assert_eq!(Node::task("t2", "  ").display_label(), "t2");
    }
}
