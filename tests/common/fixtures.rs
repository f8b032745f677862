//! Shared workflow fixtures for integration tests.

use flowtrace::workflow::{Edge, Node, Workflow};

/// Start -> task -> end, fully wired. The simplest valid workflow.
pub fn linear_workflow() -> Workflow {
    Workflow::new(
        vec![
            Node::start("s1"),
            Node::task("t1", "Review"),
            Node::end("e1"),
        ],
        vec![Edge::new("a", "s1", "t1"), Edge::new("b", "t1", "e1")],
    )
}

/// Start fans out to two tasks that both join into the end node.
/// Branch edges are declared a-first, so traversal must visit `ta`
/// before `tb`.
pub fn diamond_workflow() -> Workflow {
    Workflow::new(
        vec![
            Node::start("s1"),
            Node::task("ta", "Branch A"),
            Node::task("tb", "Branch B"),
            Node::end("e1"),
        ],
        vec![
            Edge::new("e-a", "s1", "ta"),
            Edge::new("e-b", "s1", "tb"),
            Edge::new("a-end", "ta", "e1"),
            Edge::new("b-end", "tb", "e1"),
        ],
    )
}
