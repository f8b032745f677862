//! Breadth-first path generation and the simulate orchestration.
//!
//! [`generate_path`] walks the graph level by level from the start node
//! and renders one description line per visited node. [`simulate`] is the
//! orchestrator: it validates first, then traverses, then prefixes each
//! line with a synthetic `[HH:MM:SS]` timestamp. The Nth visited step is
//! stamped `base + N seconds`, so steps always carry strictly increasing,
//! distinct times no matter how fast the traversal runs.
//!
//! Rendering wording is part of the external contract; see
//! [`describe`] for the canonical table.
//!
//! # Examples
//!
//! ```rust
//! use flowtrace::simulation::simulate;
//! use flowtrace::workflow::{Edge, Node, Workflow};
//!
//! let wf = Workflow::new(
//!     vec![Node::start("s1"), Node::task("t1", "Review"), Node::end("e1")],
//!     vec![Edge::new("a", "s1", "t1"), Edge::new("b", "t1", "e1")],
//! );
//! let report = simulate(&wf);
//! assert!(report.success);
//! assert_eq!(report.steps.len(), 3);
//! assert!(report.steps[1].contains("TASK: Review"));
//! ```

use std::collections::VecDeque;

use chrono::{DateTime, Duration, Utc};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::graph::GraphIndex;
use crate::validation::validate;
use crate::workflow::{Node, NodePayload, Workflow};

/// Marker returned as the single path element when the graph has no
/// start node. `generate_path` never fails; this is its soft error.
pub const NO_START_MARKER: &str = "No start node found";

/// Outcome of [`simulate`]: either a timestamped step trace or the
/// validation errors that prevented traversal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub success: bool,
    pub steps: Vec<String>,
    pub errors: Vec<String>,
}

impl SimulationReport {
    /// Failure report carrying a single error, used by the HTTP boundary
    /// for bodies that are not a well-formed graph at all.
    #[must_use]
    pub fn rejected(error: impl Into<String>) -> Self {
        Self {
            success: false,
            steps: Vec::new(),
            errors: vec![error.into()],
        }
    }
}

/// Renders the execution order of `workflow` as description lines,
/// without timestamps.
///
/// Classic breadth-first traversal: a queue seeded with the start node's
/// id and a visited set keyed by id, so each node is rendered at most
/// once even when several edges lead to it. When a node has multiple
/// outgoing edges, targets are visited in input edge order
/// (first-declared, first-visited). Dangling edge targets are skipped
/// silently.
#[must_use]
pub fn generate_path(workflow: &Workflow) -> Vec<String> {
    let Some(start) = workflow.start_nodes().next() else {
        return vec![NO_START_MARKER.to_string()];
    };

    let index = GraphIndex::new(workflow);
    let mut steps = Vec::new();
    let mut visited = FxHashSet::default();
    let mut queue = VecDeque::from([start.id.as_str()]);

    while let Some(current) = queue.pop_front() {
        if !visited.insert(current) {
            continue;
        }
        let Some(node) = index.node(current) else {
            continue;
        };
        steps.push(describe(node));
        for edge in index.outgoing_edges(current) {
            if !visited.contains(edge.target.as_str()) {
                queue.push_back(edge.target.as_str());
            }
        }
    }

    steps
}

/// Renders the canonical one-line description for a node.
///
/// The tag vocabulary is shared with the HTTP boundary:
///
/// - start → `START: <title or "Workflow begins">`
/// - task → `TASK: <title or id>`, plus ` (Assigned to: X)` when assigned
/// - approval → `APPROVAL: <title or id>`, plus ` (Approver: X)`
/// - automated → `AUTOMATED: <title or id>`, plus ` (Action: X)`
/// - end → `END: <end message or "Workflow Complete">`
/// - unknown kind → `<raw kind>: <title or "Unknown">`
#[must_use]
pub fn describe(node: &Node) -> String {
    match &node.payload {
        NodePayload::Start(_) => {
            format!("START: {}", node.payload.title().unwrap_or("Workflow begins"))
        }
        NodePayload::Task(data) => {
            let mut line = format!("TASK: {}", node.payload.title().unwrap_or(&node.id));
            if let Some(assignee) = crate::workflow::non_blank(&data.assignee) {
                line.push_str(&format!(" (Assigned to: {assignee})"));
            }
            line
        }
        NodePayload::Approval(data) => {
            let mut line = format!("APPROVAL: {}", node.payload.title().unwrap_or(&node.id));
            if let Some(role) = crate::workflow::non_blank(&data.approver_role) {
                line.push_str(&format!(" (Approver: {role})"));
            }
            line
        }
        NodePayload::Automated(data) => {
            let mut line = format!("AUTOMATED: {}", node.payload.title().unwrap_or(&node.id));
            if let Some(action) = crate::workflow::non_blank(&data.action_id) {
                line.push_str(&format!(" (Action: {action})"));
            }
            line
        }
        NodePayload::End(data) => {
            format!(
                "END: {}",
                crate::workflow::non_blank(&data.end_message).unwrap_or("Workflow Complete")
            )
        }
        NodePayload::Other { kind, .. } => {
            format!("{kind}: {}", node.payload.title().unwrap_or("Unknown"))
        }
    }
}

/// Validates `workflow` and, if it is legal, renders its timestamped
/// execution trace.
///
/// On validation failure the traversal never runs and `steps` is empty.
/// The timestamp base is sampled once, at invocation start.
#[must_use]
pub fn simulate(workflow: &Workflow) -> SimulationReport {
    simulate_at(workflow, Utc::now())
}

/// [`simulate`] with an explicit timestamp base, for deterministic
/// output in tests.
#[must_use]
pub fn simulate_at(workflow: &Workflow, base: DateTime<Utc>) -> SimulationReport {
    let report = validate(workflow);
    if !report.is_valid {
        return SimulationReport {
            success: false,
            steps: Vec::new(),
            errors: report.errors,
        };
    }

    let steps = generate_path(workflow)
        .into_iter()
        .enumerate()
        .map(|(i, step)| {
            let stamp = base + Duration::seconds(i as i64);
            format!("[{}] {step}", stamp.format("%H:%M:%S"))
        })
        .collect();

    SimulationReport {
        success: true,
        steps,
        errors: Vec::new(),
    }
}
