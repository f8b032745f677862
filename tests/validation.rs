mod common;

use common::*;
use flowtrace::validation::{has_cycle, validate};
use flowtrace::workflow::{ApprovalData, Edge, Node, NodePayload, StartData, TaskData, Workflow};

#[test]
fn empty_workflow_short_circuits_with_single_error() {
    let report = validate(&Workflow::default());
    assert!(!report.is_valid);
    assert_eq!(report.errors, ["Workflow is empty. Add at least one node."]);
}

#[test]
fn linear_workflow_is_valid() {
    let report = validate(&linear_workflow());
    assert!(report.is_valid);
    assert!(report.errors.is_empty());
}

#[test]
fn diamond_workflow_is_valid() {
    let report = validate(&diamond_workflow());
    assert!(report.is_valid, "unexpected errors: {:?}", report.errors);
}

#[test]
fn missing_start_node_is_reported() {
    let wf = Workflow::new(
        vec![Node::task("t1", "Review"), Node::end("e1")],
        vec![Edge::new("a", "t1", "e1")],
    );
    let report = validate(&wf);
    assert!(report
        .errors
        .contains(&"Workflow must have a Start node.".to_string()));
}

#[test]
fn two_start_nodes_fire_only_the_duplicate_error() {
    let wf = Workflow::new(
        vec![Node::start("s1"), Node::start("s2"), Node::end("e1")],
        vec![
            Edge::new("a", "s1", "e1"),
            Edge::new("b", "s2", "e1"),
        ],
    );
    let report = validate(&wf);
    assert!(report
        .errors
        .contains(&"Workflow can only have one Start node.".to_string()));
    assert!(!report
        .errors
        .contains(&"Workflow must have a Start node.".to_string()));
}

#[test]
fn missing_end_node_is_reported() {
    let wf = Workflow::new(
        vec![Node::start("s1"), Node::task("t1", "Review")],
        vec![Edge::new("a", "s1", "t1")],
    );
    let report = validate(&wf);
    assert!(!report.is_valid);
    assert!(report
        .errors
        .contains(&"Workflow must have an End node.".to_string()));
}

#[test]
fn missing_start_and_end_accumulate_both_errors() {
    let wf = Workflow::new(
        vec![Node::task("t1", "Review"), Node::task("t2", "Approve")],
        vec![Edge::new("a", "t1", "t2")],
    );
    let report = validate(&wf);
    assert!(report
        .errors
        .contains(&"Workflow must have a Start node.".to_string()));
    assert!(report
        .errors
        .contains(&"Workflow must have an End node.".to_string()));
}

#[test]
fn start_with_incoming_edge_is_reported() {
    let mut wf = linear_workflow();
    wf.edges.push(Edge::new("loop", "t1", "s1"));
    let report = validate(&wf);
    assert!(report
        .errors
        .contains(&"Start node cannot have incoming connections.".to_string()));
}

#[test]
fn end_with_outgoing_edge_is_reported_per_offender() {
    let mut wf = linear_workflow();
    wf.nodes.push(Node::end("e2"));
    wf.edges.push(Edge::new("x", "e1", "e2"));
    let report = validate(&wf);
    assert!(report
        .errors
        .contains(&"End node \"e1\" cannot have outgoing connections.".to_string()));
    assert!(!report
        .errors
        .iter()
        .any(|e| e.contains("\"e2\" cannot have outgoing")));
}

#[test]
fn unconnected_start_and_end_are_both_isolated() {
    // Scenario: two nodes, zero edges.
    let wf = Workflow::new(vec![Node::start("s1"), Node::end("e1")], vec![]);
    let report = validate(&wf);
    assert!(!report.is_valid);
    assert!(report
        .errors
        .contains(&"Isolated node \"s1\" detected. Connect it to the workflow.".to_string()));
    assert!(report
        .errors
        .contains(&"Isolated node \"e1\" detected. Connect it to the workflow.".to_string()));
}

#[test]
fn isolated_error_prefers_display_label_over_id() {
    let mut wf = linear_workflow();
    wf.nodes.push(Node::new(
        "t9",
        NodePayload::Task(TaskData {
            label: "Orphan step".into(),
            title: "Orphan".into(),
            ..TaskData::default()
        }),
    ));
    let report = validate(&wf);
    assert!(report
        .errors
        .contains(&"Isolated node \"Orphan step\" detected. Connect it to the workflow.".to_string()));
}

#[test]
fn single_node_workflow_skips_isolation_check() {
    let wf = Workflow::new(vec![Node::start("s1")], vec![]);
    let report = validate(&wf);
    assert!(!report.errors.iter().any(|e| e.contains("Isolated")));
    // Still invalid: no end node.
    assert!(!report.is_valid);
}

#[test]
fn unreachable_island_is_reported() {
    let mut wf = linear_workflow();
    // t2 -> e2 is connected by an edge, so not isolated, but nothing
    // links it to the start component.
    wf.nodes.push(Node::task("t2", "Side quest"));
    wf.nodes.push(Node::end("e2"));
    wf.edges.push(Edge::new("island", "t2", "e2"));
    let report = validate(&wf);
    assert!(report
        .errors
        .contains(&"Node \"Side quest\" is not reachable from the Start node.".to_string()));
    assert!(report
        .errors
        .contains(&"Node \"e2\" is not reachable from the Start node.".to_string()));
}

#[test]
fn reachability_skipped_without_unique_start() {
    let wf = Workflow::new(
        vec![Node::task("t1", "Review"), Node::end("e1")],
        vec![Edge::new("a", "t1", "e1")],
    );
    let report = validate(&wf);
    assert!(!report.errors.iter().any(|e| e.contains("reachable")));
}

#[test]
fn task_without_title_is_reported() {
    // Scenario: valid chain except the task has no title.
    let mut wf = linear_workflow();
    wf.nodes[1] = Node::task("t1", "");
    let report = validate(&wf);
    assert!(!report.is_valid);
    assert_eq!(report.errors, ["Task node \"t1\" requires a title."]);
}

#[test]
fn blank_title_counts_as_missing() {
    let mut wf = linear_workflow();
    wf.nodes[1] = Node::new(
        "t1",
        NodePayload::Approval(ApprovalData {
            title: "   ".into(),
            ..ApprovalData::default()
        }),
    );
    let report = validate(&wf);
    assert!(report
        .errors
        .contains(&"Approval node \"t1\" requires a title.".to_string()));
}

#[test]
fn automated_without_action_is_reported() {
    let mut wf = linear_workflow();
    wf.nodes[1] = Node::automated("t1", "Notify", "");
    let report = validate(&wf);
    assert!(report
        .errors
        .contains(&"Automated step \"t1\" requires an action to be selected.".to_string()));
}

#[test]
fn start_title_is_not_required() {
    let mut wf = linear_workflow();
    wf.nodes[0] = Node::new("s1", NodePayload::Start(StartData::default()));
    assert!(validate(&wf).is_valid);
}

#[test]
fn dangling_edge_endpoints_never_panic() {
    let wf = Workflow::new(
        vec![Node::start("s1"), Node::end("e1")],
        vec![
            Edge::new("a", "s1", "ghost"),
            Edge::new("b", "ghost", "e1"),
        ],
    );
    let report = validate(&wf);
    assert!(report.is_valid, "unexpected errors: {:?}", report.errors);
}

#[test]
fn validate_is_idempotent() {
    let wf = diamond_workflow();
    assert_eq!(validate(&wf), validate(&wf));
}

#[test]
fn cycle_detection_finds_back_edge() {
    let mut wf = linear_workflow();
    wf.nodes.insert(2, Node::task("t2", "Rework"));
    wf.edges.push(Edge::new("fwd", "t1", "t2"));
    wf.edges.push(Edge::new("back", "t2", "t1"));
    assert!(has_cycle(&wf));
}

#[test]
fn acyclic_graphs_have_no_cycle() {
    assert!(!has_cycle(&linear_workflow()));
    // Diamond fan-in is not a cycle.
    assert!(!has_cycle(&diamond_workflow()));
}

#[test]
fn validate_accepts_cyclic_graphs() {
    // Cycle-freedom is an opt-in check, not a validity rule.
    let mut wf = linear_workflow();
    wf.nodes.insert(2, Node::task("t2", "Rework"));
    wf.edges.push(Edge::new("fwd", "t1", "t2"));
    wf.edges.push(Edge::new("back", "t2", "t1"));
    let report = validate(&wf);
    assert!(report.is_valid, "unexpected errors: {:?}", report.errors);
    assert!(has_cycle(&wf));
}
