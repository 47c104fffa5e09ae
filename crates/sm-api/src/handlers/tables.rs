use axum::{Json, extract::State};
use serde_json::Value;

use sm_common::provider::Table;

use crate::SharedState;
use crate::error::ApiError;

pub async fn list_employees(State(state): State<SharedState>) -> Result<Json<Vec<Value>>, ApiError> {
    Ok(Json(state.provider.fetch_all(Table::Employees).await?))
}

pub async fn list_projects(State(state): State<SharedState>) -> Result<Json<Vec<Value>>, ApiError> {
    Ok(Json(state.provider.fetch_all(Table::Projects).await?))
}
