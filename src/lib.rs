//! # Flowtrace: Workflow Validation & Simulation Engine
//!
//! Flowtrace turns a user-composed graph of typed steps (start, task,
//! approval, automated, end) into either a list of validation errors or
//! an ordered, timestamped execution trace.
//!
//! ## Core Concepts
//!
//! - **Workflow**: an immutable snapshot of nodes plus edges
//! - **Validator**: structural rules producing an aggregated error list
//! - **PathGenerator**: deterministic breadth-first traversal from the
//!   start node, one rendered description per visited node
//! - **Simulate**: validate, traverse, and stamp each step with a
//!   synthetic strictly-increasing timestamp
//!
//! The engine is pure and stateless: every call takes a graph snapshot,
//! returns a fresh result value, never mutates its input, and never
//! panics on malformed-but-well-typed graphs. Any number of calls can
//! run concurrently because nothing is shared between them.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowtrace::simulation::simulate;
//! use flowtrace::validation::validate;
//! use flowtrace::workflow::{Edge, Node, Workflow};
//!
//! let workflow = Workflow::new(
//!     vec![
//!         Node::start("s1"),
//!         Node::task("t1", "Review contract"),
//!         Node::end("e1"),
//!     ],
//!     vec![Edge::new("a", "s1", "t1"), Edge::new("b", "t1", "e1")],
//! );
//!
//! let verdict = validate(&workflow);
//! assert!(verdict.is_valid);
//!
//! let report = simulate(&workflow);
//! assert!(report.success);
//! assert!(report.steps[0].contains("START"));
//! ```
//!
//! ## Wire Shape
//!
//! Graphs arrive as JSON, whether in-process or via the HTTP boundary in
//! [`service`]:
//!
//! ```rust
//! use flowtrace::workflow::Workflow;
//!
//! let workflow: Workflow = serde_json::from_str(
//!     r#"{
//!         "nodes": [
//!             {"id": "s1", "type": "start"},
//!             {"id": "e1", "type": "end", "data": {"endMessage": "Done"}}
//!         ],
//!         "edges": [{"id": "x", "source": "s1", "target": "e1"}]
//!     }"#,
//! )
//! .unwrap();
//! assert_eq!(workflow.nodes.len(), 2);
//! ```
//!
//! ## Module Guide
//!
//! - [`workflow`] - Node, edge, and graph snapshot types with serde
//! - [`types`] - The node kind discriminator
//! - [`graph`] - Per-call id/adjacency indexing and reachability
//! - [`validation`] - Structural rules and the opt-in cycle check
//! - [`simulation`] - Path generation, rendering, and orchestration
//! - [`automations`] - Catalog of automated-action descriptors
//! - [`service`] - axum router exposing the engine over HTTP
//! - [`telemetry`] - Tracing setup for the server binary

pub mod automations;
pub mod graph;
pub mod service;
pub mod simulation;
pub mod telemetry;
pub mod types;
pub mod validation;
pub mod workflow;
