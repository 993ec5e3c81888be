use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::model::{ApiParams, RecordResponse};
use crate::state::AppState;

const SEARCH_ACTION: &str = "search";

/// Query endpoint dispatching on the `action` parameter.
///
/// `search` is the only supported action. A missing `q` searches for the
/// empty term. A query string that does not parse, such as one repeating a
/// parameter, is a bad request.
pub async fn api_handler(
    State(state): State<AppState>,
    params: std::result::Result<Query<ApiParams>, QueryRejection>,
) -> Result<Json<Vec<RecordResponse>>> {
    let Query(params) = params.map_err(|rejection| {
        debug!(error = %rejection, "malformed api query");
        AppError::BadRequest
    })?;
    match params.action.as_deref() {
        Some(SEARCH_ACTION) => {
            let term = params.q.unwrap_or_default();
            let records = state.query().search(&term);
            Ok(Json(records.into_iter().map(RecordResponse::from).collect()))
        }
        other => {
            debug!(action = ?other, "unsupported api action");
            Err(AppError::BadRequest)
        }
    }
}
