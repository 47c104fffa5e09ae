use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::{borrow::Cow, future::Future};
use thiserror::Error;
use tracing::error;

use sm_common::matching::{CalculationError, RankingError, ScoringError};
use sm_common::provider::DataFetchError;

tokio::task_local! {
    static REQUEST_ID: String;
}

fn sanitize_message(message: &str) -> String {
    const MAX_LEN: usize = 240;

    let mut cleaned = message
        .replace(['\n', '\r'], " ")
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>();

    cleaned = cleaned
        .split_whitespace()
        .map(|token| {
            if token.contains("://") {
                "[redacted-url]".to_string()
            } else if token.starts_with('/') || token.contains('\\') {
                "[redacted-path]".to_string()
            } else {
                token.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    if cleaned.len() > MAX_LEN {
        let mut cut = MAX_LEN;
        while !cleaned.is_char_boundary(cut) {
            cut -= 1;
        }
        cleaned.truncate(cut);
        cleaned.push('…');
    }

    if cleaned.trim().is_empty() {
        "unexpected error".to_string()
    } else {
        cleaned
    }
}

pub async fn with_request_id<Fut, T>(request_id: Option<String>, fut: Fut) -> T
where
    Fut: Future<Output = T>,
{
    if let Some(request_id) = request_id {
        REQUEST_ID.scope(request_id, fut).await
    } else {
        fut.await
    }
}

pub fn current_request_id() -> Option<String> {
    REQUEST_ID.try_with(|value| value.clone()).ok()
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("data fetch error: {0}")]
    DataFetch(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("no employees available")]
    NoEmployeesAvailable,
    #[error("no projects available")]
    NoProjectsAvailable,
    #[error("division by zero: {0}")]
    DivisionByZero(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("service unavailable: {0}")]
    ServiceUnavailable(String),
    #[error("internal server error: {0}")]
    Internal(String),
}

#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: &'static str,
    request_id: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let code = self.code();
        let request_id = current_request_id();

        error!(
            code,
            status = %status,
            request_id = request_id.as_deref().unwrap_or(""),
            error = %self,
            "api_error"
        );

        let body = Json(ErrorResponse {
            success: false,
            error: self.public_message().into_owned(),
            code,
            request_id,
        });

        (status, body).into_response()
    }
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::DataFetch(_) => "data_fetch_error",
            ApiError::InvalidInput(_) => "invalid_input",
            ApiError::NoEmployeesAvailable => "no_employees_available",
            ApiError::NoProjectsAvailable => "no_projects_available",
            ApiError::DivisionByZero(_) => "division_by_zero",
            ApiError::BadRequest(_) => "bad_request",
            ApiError::ServiceUnavailable(_) => "service_unavailable",
            ApiError::Internal(_) => "internal_error",
        }
    }

    fn public_message(&self) -> Cow<'static, str> {
        match self {
            ApiError::DataFetch(_) => Cow::Borrowed("failed to fetch data"),
            ApiError::InvalidInput(msg) => Cow::Owned(sanitize_message(msg)),
            ApiError::NoEmployeesAvailable => Cow::Borrowed("no employees available to match"),
            ApiError::NoProjectsAvailable => Cow::Borrowed("no projects available to match"),
            ApiError::DivisionByZero(msg) => Cow::Owned(sanitize_message(msg)),
            ApiError::BadRequest(msg) => Cow::Owned(sanitize_message(msg)),
            ApiError::ServiceUnavailable(_) => Cow::Borrowed("service unavailable"),
            ApiError::Internal(_) => Cow::Borrowed("internal server error"),
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::DataFetch(_)
            | ApiError::InvalidInput(_)
            | ApiError::NoEmployeesAvailable
            | ApiError::NoProjectsAvailable
            | ApiError::DivisionByZero(_)
            | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<DataFetchError> for ApiError {
    fn from(value: DataFetchError) -> Self {
        ApiError::DataFetch(value.to_string())
    }
}

impl From<CalculationError> for ApiError {
    fn from(value: CalculationError) -> Self {
        match value {
            CalculationError::DataFetch(err) => err.into(),
            CalculationError::InvalidInput(err) => ApiError::InvalidInput(err.to_string()),
            CalculationError::Ranking(RankingError::NoEmployeesAvailable) => {
                ApiError::NoEmployeesAvailable
            }
            CalculationError::Ranking(RankingError::NoProjectsAvailable) => {
                ApiError::NoProjectsAvailable
            }
            CalculationError::Ranking(RankingError::Scoring(
                err @ ScoringError::DivisionByZero { .. },
            )) => ApiError::DivisionByZero(err.to_string()),
        }
    }
}
