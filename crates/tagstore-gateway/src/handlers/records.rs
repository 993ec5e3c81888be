use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::error::Result;
use crate::model::{CreateRecordRequest, RecordResponse, StatsResponse};
use crate::state::AppState;

pub async fn create_record_handler(
    State(state): State<AppState>,
    Json(request): Json<CreateRecordRequest>,
) -> Result<(StatusCode, Json<RecordResponse>)> {
    let record = request.into_record();
    let response = RecordResponse::from(record.clone());

    state.query().add(record)?;
    info!(id = response.id, "record added");

    Ok((StatusCode::CREATED, Json(response)))
}

pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let query = state.query();
    Json(StatsResponse {
        records: query.len(),
        cache: query.stats(),
    })
}
