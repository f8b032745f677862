//! Core types for the flowtrace workflow engine.
//!
//! This module defines the discriminator used to classify nodes in a
//! workflow graph. The payload carried by each kind lives in
//! [`crate::workflow`]; validation and rendering logic match exhaustively
//! over [`NodeKind`] so adding a kind surfaces every site that needs
//! updating.
//!
//! # Examples
//!
//! ```rust
//! use flowtrace::types::NodeKind;
//!
//! let kind = NodeKind::from("approval");
//! assert_eq!(kind, NodeKind::Approval);
//! assert_eq!(kind.as_tag(), "approval");
//!
//! // Unrecognised tags are preserved, not rejected.
//! let other = NodeKind::from("review");
//! assert_eq!(other, NodeKind::Other("review".to_string()));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies the kind of a node within a workflow graph.
///
/// The five named variants form the closed set the editor can place.
/// [`Other`](Self::Other) preserves unrecognised tags so a graph produced
/// by a newer editor still validates and simulates instead of failing to
/// parse.
///
/// The serialized form is the lowercase wire tag (`"start"`, `"task"`,
/// ...); unknown tags round-trip through `Other` unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeKind {
    /// Entry point of a workflow. Exactly one is required and it must
    /// have no incoming edges.
    Start,
    /// Manual work item with a title and optional assignee.
    Task,
    /// Human sign-off step with a title and optional approver role.
    Approval,
    /// Automated action referencing an entry in the automation catalog.
    Automated,
    /// Terminal node. At least one is required and none may have
    /// outgoing edges.
    End,
    /// Forward-compatible catch-all for tags this build does not know.
    Other(String),
}

impl NodeKind {
    /// The wire tag for this kind (`"start"`, `"task"`, ...).
    ///
    /// For [`Other`](Self::Other) this is the raw tag as received.
    #[must_use]
    pub fn as_tag(&self) -> &str {
        match self {
            NodeKind::Start => "start",
            NodeKind::Task => "task",
            NodeKind::Approval => "approval",
            NodeKind::Automated => "automated",
            NodeKind::End => "end",
            NodeKind::Other(tag) => tag,
        }
    }

    /// Returns `true` if this is a [`Start`](Self::Start) node.
    #[must_use]
    pub fn is_start(&self) -> bool {
        matches!(self, Self::Start)
    }

    /// Returns `true` if this is an [`End`](Self::End) node.
    #[must_use]
    pub fn is_end(&self) -> bool {
        matches!(self, Self::End)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl From<&str> for NodeKind {
    fn from(s: &str) -> Self {
        match s {
            "start" => NodeKind::Start,
            "task" => NodeKind::Task,
            "approval" => NodeKind::Approval,
            "automated" => NodeKind::Automated,
            "end" => NodeKind::End,
            other => NodeKind::Other(other.to_string()),
        }
    }
}

impl From<String> for NodeKind {
    fn from(s: String) -> Self {
        NodeKind::from(s.as_str())
    }
}

impl From<NodeKind> for String {
    fn from(kind: NodeKind) -> Self {
        kind.as_tag().to_string()
    }
}
