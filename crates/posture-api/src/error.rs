//! HTTP error responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use posture_analysis::AnalysisResult;

/// Message carried by the result body of a 500 response
pub const ANALYSIS_FAILED_MESSAGE: &str = "Analysis failed";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Malformed request; never reaches the analyzer
    #[error("{0}")]
    BadRequest(String),

    /// Failure outside the analyzer's own error handling
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::warn!("Bad request: {}", msg);
        Self::BadRequest(msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        tracing::error!("Internal error: {}", msg);
        Self::Internal(msg)
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

/// Analysis-shaped body so clients can always read the posture fields
#[derive(Serialize)]
struct FailureBody<'a> {
    error: &'a str,
    #[serde(flatten)]
    result: AnalysisResult,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::BadRequest(msg) => (status, Json(ErrorBody { error: msg })).into_response(),
            Self::Internal(msg) => {
                let mut result = AnalysisResult::no_subject();
                result.message = ANALYSIS_FAILED_MESSAGE.to_string();
                (status, Json(FailureBody { error: msg, result })).into_response()
            }
        }
    }
}
