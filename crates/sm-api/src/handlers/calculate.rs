use axum::{Json, extract::State};
use tracing::info;

use sm_common::api::CalculateResponse;
use sm_common::matching::calculate_from_provider;

use crate::SharedState;
use crate::error::ApiError;

/// Rank every employee for every project from a fresh snapshot of both tables.
pub async fn calculate_matches(
    State(state): State<SharedState>,
) -> Result<Json<CalculateResponse>, ApiError> {
    let results = calculate_from_provider(state.provider.as_ref()).await?;

    info!(projects = results.len(), "calculate_matches_served");

    Ok(Json(CalculateResponse::ok(results)))
}
