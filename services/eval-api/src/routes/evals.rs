use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::task;
use tracing::{error, info, warn};

use multimodal_eval_reports::collect_from_dir;

use crate::models::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/api/multimodal-eval", get(list_evals))
}

/// List every parseable evaluation report, newest filename first.
///
/// Unusable files are logged at warning level and left out of the
/// response. A missing report directory is the only client-visible
/// failure and maps to 404.
async fn list_evals(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    let dir = state.reports_dir.clone();
    let scanned = task::spawn_blocking(move || collect_from_dir(dir)).await;

    match scanned {
        Ok(Ok(outcome)) => {
            for skip in &outcome.skipped {
                warn!(
                    file = %skip.file,
                    reason = %skip.reason,
                    "Skipping unusable report file"
                );
            }
            info!(
                results = outcome.summaries.len(),
                skipped = outcome.skipped.len(),
                "Collected evaluation reports"
            );
            (StatusCode::OK, Json(json!({ "results": outcome.summaries })))
        }
        Ok(Err(err)) => {
            warn!(path = %err.path, error = %err.source, "Report directory not found");
            (
                StatusCode::NOT_FOUND,
                Json(json!({
                    "error": format!("Multimodal evaluation directory not found: {}", err.path)
                })),
            )
        }
        Err(join_err) => {
            error!(error = %join_err, "Report scan task failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Report scan failed unexpectedly" })),
            )
        }
    }
}
