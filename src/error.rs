use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// Why a field was refused at intake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} should not be empty")]
    EmptyField { field: String },
    #[error("{field} must be an Ethereum address")]
    InvalidFormat { field: String },
}

impl ValidationError {
    pub fn empty(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    pub fn invalid_format(field: impl Into<String>) -> Self {
        ValidationError::InvalidFormat { field: field.into() }
    }

    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field } | ValidationError::InvalidFormat { field } => {
                field
            }
        }
    }

    /// Name of the violated rule, as reported to API clients.
    pub fn rule(&self) -> &'static str {
        match self {
            ValidationError::EmptyField { .. } => "isNotEmpty",
            ValidationError::InvalidFormat { .. } => "isEthereumAddress",
        }
    }
}

/// Errors surfaced at the request boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rule: Option<&'static str>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "bad_request",
                    message: msg,
                    field: None,
                    rule: None,
                },
            ),
            ApiError::Validation(err) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "validation_error",
                    message: err.to_string(),
                    field: Some(err.field().to_string()),
                    rule: Some(err.rule()),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

impl From<QueryRejection> for ApiError {
    fn from(err: QueryRejection) -> Self {
        ApiError::BadRequest(err.body_text())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
