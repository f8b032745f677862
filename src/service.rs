//! HTTP boundary for the engine.
//!
//! Exposes the same contract as the in-process API over two routes:
//!
//! - `POST /simulate` — body is the workflow wire shape, response is a
//!   [`SimulationReport`]. Validation failures still answer `200` with
//!   `success: false`; only bodies that are not a well-formed graph at
//!   all get `400`.
//! - `GET /automations` — the static [`automations`](crate::automations)
//!   catalog.
//!
//! The engine itself is pure and bounded, so no timeout is enforced
//! here; callers that need one wrap the request on their side.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};

use crate::automations::{self, AutomationAction};
use crate::simulation::{simulate, SimulationReport};
use crate::workflow::Workflow;

/// Message returned for request bodies that are not a well-formed graph
/// (unparseable JSON, or missing the nodes/edges collections).
pub const INVALID_WORKFLOW_SHAPE: &str = "Invalid workflow structure: missing nodes or edges";

/// Builds the engine's router. Stateless; callers mount or serve it
/// directly.
#[must_use]
pub fn router() -> Router {
    Router::new()
        .route("/simulate", post(simulate_handler))
        .route("/automations", get(automations_handler))
}

async fn simulate_handler(
    payload: Result<Json<Workflow>, JsonRejection>,
) -> (StatusCode, Json<SimulationReport>) {
    match payload {
        Ok(Json(workflow)) => {
            let report = simulate(&workflow);
            tracing::info!(
                nodes = workflow.nodes.len(),
                edges = workflow.edges.len(),
                success = report.success,
                steps = report.steps.len(),
                errors = report.errors.len(),
                "simulated workflow"
            );
            (StatusCode::OK, Json(report))
        }
        Err(rejection) => {
            tracing::debug!(%rejection, "rejected malformed simulate request");
            (
                StatusCode::BAD_REQUEST,
                Json(SimulationReport::rejected(INVALID_WORKFLOW_SHAPE)),
            )
        }
    }
}

async fn automations_handler() -> Json<Vec<AutomationAction>> {
    Json(automations::catalog())
}
