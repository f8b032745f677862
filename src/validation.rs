//! Structural validation for workflow graphs.
//!
//! [`validate`] applies a fixed sequence of rules and aggregates every
//! violation it finds, so a caller can fix all problems in one pass
//! instead of resubmitting once per error. Nothing here panics or
//! returns `Err`: malformed-but-well-typed input (dangling edge
//! endpoints, empty collections) is reported through the result value.
//!
//! Rule order:
//!
//! 1. empty graph (short-circuits)
//! 2. exactly one start node
//! 3. at least one end node
//! 4. start node has no incoming edges
//! 5. end nodes have no outgoing edges
//! 6. no isolated nodes (graphs with more than one node)
//! 7. every node reachable from start (when exactly one start exists)
//! 8. per-kind required fields
//!
//! [`has_cycle`] is a separate, opt-in predicate: cyclic graphs are not
//! rejected by [`validate`].
//!
//! # Examples
//!
//! ```rust
//! use flowtrace::validation::validate;
//! use flowtrace::workflow::{Edge, Node, Workflow};
//!
//! let wf = Workflow::new(
//!     vec![Node::start("s1"), Node::task("t1", "Review"), Node::end("e1")],
//!     vec![Edge::new("a", "s1", "t1"), Edge::new("b", "t1", "e1")],
//! );
//! let report = validate(&wf);
//! assert!(report.is_valid);
//! assert!(report.errors.is_empty());
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::GraphIndex;
use crate::workflow::{non_blank, NodePayload, Workflow};

/// One violated validation rule.
///
/// The `Display` form of each variant is the exact user-facing error
/// message; the editing surface shows these verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("Workflow is empty. Add at least one node.")]
    EmptyWorkflow,

    #[error("Workflow must have a Start node.")]
    MissingStart,

    #[error("Workflow can only have one Start node.")]
    MultipleStartNodes,

    #[error("Workflow must have an End node.")]
    MissingEnd,

    #[error("Start node cannot have incoming connections.")]
    StartHasIncoming,

    #[error("End node \"{id}\" cannot have outgoing connections.")]
    EndHasOutgoing { id: String },

    #[error("Isolated node \"{label}\" detected. Connect it to the workflow.")]
    IsolatedNode { label: String },

    #[error("Node \"{label}\" is not reachable from the Start node.")]
    Unreachable { label: String },

    #[error("Task node \"{id}\" requires a title.")]
    TaskMissingTitle { id: String },

    #[error("Approval node \"{id}\" requires a title.")]
    ApprovalMissingTitle { id: String },

    #[error("Automated step \"{id}\" requires an action to be selected.")]
    AutomatedMissingAction { id: String },
}

/// Verdict of [`validate`]: valid iff `errors` is empty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Renders issues into the report's ordered message list.
    #[must_use]
    pub fn from_issues(issues: Vec<ValidationIssue>) -> Self {
        Self {
            is_valid: issues.is_empty(),
            errors: issues.iter().map(ToString::to_string).collect(),
        }
    }
}

/// Checks the structural legality of `workflow`.
///
/// Every applicable rule runs; the report carries all violations in rule
/// order. Errors are never deduplicated or truncated.
#[must_use]
pub fn validate(workflow: &Workflow) -> ValidationReport {
    ValidationReport::from_issues(collect_issues(workflow))
}

fn collect_issues(workflow: &Workflow) -> Vec<ValidationIssue> {
    if workflow.nodes.is_empty() {
        return vec![ValidationIssue::EmptyWorkflow];
    }

    let mut issues = Vec::new();
    let index = GraphIndex::new(workflow);

    let start_nodes: Vec<_> = workflow.start_nodes().collect();
    let end_nodes: Vec<_> = workflow.end_nodes().collect();

    match start_nodes.len() {
        0 => issues.push(ValidationIssue::MissingStart),
        1 => {}
        _ => issues.push(ValidationIssue::MultipleStartNodes),
    }
    if end_nodes.is_empty() {
        issues.push(ValidationIssue::MissingEnd);
    }

    if let [start] = start_nodes.as_slice() {
        let has_incoming = workflow.edges.iter().any(|e| e.target == start.id);
        if has_incoming {
            issues.push(ValidationIssue::StartHasIncoming);
        }
    }

    for end in &end_nodes {
        if index.outgoing_edges(&end.id).next().is_some() {
            issues.push(ValidationIssue::EndHasOutgoing {
                id: end.id.clone(),
            });
        }
    }

    if workflow.nodes.len() > 1 {
        let connected = index.connected_ids();
        for node in &workflow.nodes {
            if !connected.contains(node.id.as_str()) {
                issues.push(ValidationIssue::IsolatedNode {
                    label: node.display_label().to_string(),
                });
            }
        }
    }

    if start_nodes.len() == 1 && workflow.nodes.len() > 1 {
        let reachable = index.reachable_from(&start_nodes[0].id);
        for node in &workflow.nodes {
            if !node.kind().is_start() && !reachable.contains(node.id.as_str()) {
                issues.push(ValidationIssue::Unreachable {
                    label: node.display_label().to_string(),
                });
            }
        }
    }

    for node in &workflow.nodes {
        match &node.payload {
            NodePayload::Task(data) => {
                if non_blank(&data.title).is_none() {
                    issues.push(ValidationIssue::TaskMissingTitle {
                        id: node.id.clone(),
                    });
                }
            }
            NodePayload::Approval(data) => {
                if non_blank(&data.title).is_none() {
                    issues.push(ValidationIssue::ApprovalMissingTitle {
                        id: node.id.clone(),
                    });
                }
            }
            NodePayload::Automated(data) => {
                if non_blank(&data.action_id).is_none() {
                    issues.push(ValidationIssue::AutomatedMissingAction {
                        id: node.id.clone(),
                    });
                }
            }
            NodePayload::Start(_) | NodePayload::End(_) | NodePayload::Other { .. } => {}
        }
    }

    issues
}

/// Detects whether the graph contains any directed cycle.
///
/// Depth-first search with a recursion stack over every component.
/// Deliberately not part of [`validate`]: the editor currently accepts
/// cyclic graphs, so this stays a separately callable check.
#[must_use]
pub fn has_cycle(workflow: &Workflow) -> bool {
    let index = GraphIndex::new(workflow);
    let mut visited = FxHashSet::default();
    let mut stack = FxHashSet::default();

    for node in &workflow.nodes {
        if !visited.contains(node.id.as_str()) && dfs(&index, &node.id, &mut visited, &mut stack) {
            return true;
        }
    }
    false
}

fn dfs<'a>(
    index: &GraphIndex<'a>,
    id: &'a str,
    visited: &mut FxHashSet<&'a str>,
    stack: &mut FxHashSet<&'a str>,
) -> bool {
    visited.insert(id);
    stack.insert(id);

    for edge in index.outgoing_edges(id) {
        let target = edge.target.as_str();
        if !visited.contains(target) {
            if dfs(index, target, visited, stack) {
                return true;
            }
        } else if stack.contains(target) {
            return true;
        }
    }

    stack.remove(id);
    false
}
