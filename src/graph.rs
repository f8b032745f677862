//! Per-call graph indexing shared by the validator and the traversal.
//!
//! A [`GraphIndex`] is built once per invocation and replaces repeated
//! linear scans with an id → node lookup and a source → outgoing-edge
//! adjacency table, keeping both validation and breadth-first traversal
//! at O(nodes + edges). Outgoing edges keep their input order, which is
//! the tie-break rule when a node fans out to several targets.
//!
//! Edge endpoints are allowed to reference ids absent from the node list;
//! [`GraphIndex::node`] simply returns `None` for them.

use std::collections::VecDeque;

use rustc_hash::{FxHashMap, FxHashSet};

use crate::workflow::{Edge, Node, Workflow};

/// Borrowed index over a [`Workflow`] snapshot.
pub struct GraphIndex<'a> {
    workflow: &'a Workflow,
    by_id: FxHashMap<&'a str, usize>,
    outgoing: FxHashMap<&'a str, Vec<usize>>,
}

impl<'a> GraphIndex<'a> {
    /// Builds the id and adjacency tables for `workflow`.
    ///
    /// Duplicate node ids keep the first occurrence, matching how the
    /// traversal resolves lookups.
    #[must_use]
    pub fn new(workflow: &'a Workflow) -> Self {
        let mut by_id = FxHashMap::default();
        by_id.reserve(workflow.nodes.len());
        for (idx, node) in workflow.nodes.iter().enumerate() {
            by_id.entry(node.id.as_str()).or_insert(idx);
        }

        let mut outgoing: FxHashMap<&str, Vec<usize>> = FxHashMap::default();
        for (idx, edge) in workflow.edges.iter().enumerate() {
            outgoing.entry(edge.source.as_str()).or_default().push(idx);
        }

        Self {
            workflow,
            by_id,
            outgoing,
        }
    }

    /// Looks up a node by id. `None` for dangling edge endpoints.
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&'a Node> {
        self.by_id.get(id).map(|&idx| &self.workflow.nodes[idx])
    }

    /// Outgoing edges of `id`, in input edge order.
    pub fn outgoing_edges(&self, id: &str) -> impl Iterator<Item = &'a Edge> + '_ {
        self.outgoing
            .get(id)
            .into_iter()
            .flatten()
            .map(|&idx| &self.workflow.edges[idx])
    }

    /// Ids touched by at least one edge, as source or target.
    #[must_use]
    pub fn connected_ids(&self) -> FxHashSet<&'a str> {
        let mut connected = FxHashSet::default();
        for edge in &self.workflow.edges {
            connected.insert(edge.source.as_str());
            connected.insert(edge.target.as_str());
        }
        connected
    }

    /// Ids reachable from `start_id` by following edges forward.
    ///
    /// Breadth-first with a visited set; `start_id` itself is not
    /// included unless an edge loops back to it.
    #[must_use]
    pub fn reachable_from(&self, start_id: &'a str) -> FxHashSet<&'a str> {
        let mut reachable = FxHashSet::default();
        let mut queue = VecDeque::from([start_id]);

        while let Some(current) = queue.pop_front() {
            for edge in self.outgoing_edges(current) {
                let target = edge.target.as_str();
                if reachable.insert(target) {
                    queue.push_back(target);
                }
            }
        }

        reachable
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::{Edge, Node, Workflow};

    fn chain() -> Workflow {
        Workflow::new(
            vec![
                Node::start("s1"),
                Node::task("t1", "first"),
                Node::end("e1"),
            ],
            vec![Edge::new("a", "s1", "t1"), Edge::new("b", "t1", "e1")],
        )
    }

    #[test]
    fn lookup_and_adjacency() {
        let wf = chain();
        let index = GraphIndex::new(&wf);
        assert_eq!(index.node("t1").map(|n| n.id.as_str()), Some("t1"));
        assert!(index.node("ghost").is_none());
        let targets: Vec<_> = index
            .outgoing_edges("s1")
            .map(|e| e.target.as_str())
            .collect();
        assert_eq!(targets, ["t1"]);
    }

    #[test]
    fn fan_out_preserves_edge_input_order() {
        let wf = Workflow::new(
            vec![Node::start("s1"), Node::end("a"), Node::end("b")],
            vec![Edge::new("e2", "s1", "b"), Edge::new("e1", "s1", "a")],
        );
        let index = GraphIndex::new(&wf);
        let targets: Vec<_> = index
            .outgoing_edges("s1")
            .map(|e| e.target.as_str())
            .collect();
        assert_eq!(targets, ["b", "a"]);
    }

    #[test]
    fn reachability_follows_forward_edges_only() {
        let mut wf = chain();
        wf.nodes.push(Node::task("stray", "unlinked"));
        wf.edges.push(Edge::new("back", "stray", "s1"));
        let index = GraphIndex::new(&wf);
        let reachable = index.reachable_from("s1");
        assert!(reachable.contains("t1"));
        assert!(reachable.contains("e1"));
        assert!(!reachable.contains("stray"));
    }

    #[test]
    fn dangling_endpoints_do_not_panic() {
        let wf = Workflow::new(vec![Node::start("s1")], vec![Edge::new("e", "s1", "ghost")]);
        let index = GraphIndex::new(&wf);
        let reachable = index.reachable_from("s1");
        assert!(reachable.contains("ghost"));
        assert!(index.node("ghost").is_none());
    }
}
