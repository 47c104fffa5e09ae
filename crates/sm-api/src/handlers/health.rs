use axum::{Json, extract::State};
use serde_json::json;
use tokio::time::{Duration, timeout};

use crate::SharedState;
use crate::error::ApiError;

const READINESS_TIMEOUT: Duration = Duration::from_secs(1);

pub async fn livez() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn readyz(State(state): State<SharedState>) -> Result<Json<serde_json::Value>, ApiError> {
    if !state.readiness.load(std::sync::atomic::Ordering::SeqCst) {
        return Err(ApiError::ServiceUnavailable("shutting_down".into()));
    }

    timeout(READINESS_TIMEOUT, state.provider.ping())
        .await
        .map_err(|_| ApiError::ServiceUnavailable("data_provider_timeout".into()))
        .and_then(|result| {
            result.map_err(|err| {
                ApiError::ServiceUnavailable(format!("data provider check failed: {err}"))
            })
        })?;

    Ok(Json(json!({
        "status": "ok",
        "data_provider": "ok",
        "application": env!("CARGO_PKG_NAME"),
    })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use sm_common::provider::InMemoryProvider;

    #[tokio::test]
    async fn readyz_rejects_when_readiness_disabled() {
        let state = crate::test_state(InMemoryProvider::default());
        state
            .readiness
            .store(false, std::sync::atomic::Ordering::SeqCst);

        match readyz(State(state)).await {
            Err(ApiError::ServiceUnavailable(code)) => assert!(code.contains("shutting_down")),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn readyz_reports_provider_failure() {
        let state = crate::test_state(InMemoryProvider::failing("connection refused"));

        match readyz(State(state)).await {
            Err(ApiError::ServiceUnavailable(reason)) => {
                assert!(reason.contains("connection refused"))
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn readyz_ok_when_provider_reachable() {
        let state = crate::test_state(InMemoryProvider::default());

        let Json(body) = readyz(State(state)).await.unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["application"], "sm-api");
    }
}
