use crate::core::ApiGatewayProxyResponse;
use crate::domain::{FieldViolation, StoreError};
use serde::Serialize;
use thiserror::Error;

/// Why a handler could not produce its success response.
///
/// Everything except `Backend` is caused by the caller and is reported back
/// verbatim. Backend detail stays in the logs; the client only sees a
/// generic 500.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Missing 'id' parameter in path")]
    MissingPathId,

    #[error("Empty request body")]
    EmptyBody,

    #[error("Failed to parse product from request body: {0}")]
    MalformedBody(String),

    #[error("Product ID in path {path_id} does not match product ID in body {body_id}")]
    IdMismatch { path_id: String, body_id: String },

    #[error("Invalid product: {} field(s) failed validation", .0.len())]
    InvalidProduct(Vec<FieldViolation>),

    #[error("No product with id: {id}")]
    NotFound { id: String },

    #[error(transparent)]
    Backend(#[from] StoreError),
}

#[derive(Serialize)]
struct ValidationBody<'a> {
    message: &'static str,
    errors: &'a [FieldViolation],
}

impl ApiError {
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::MissingPathId
            | ApiError::EmptyBody
            | ApiError::MalformedBody(_)
            | ApiError::IdMismatch { .. }
            | ApiError::InvalidProduct(_) => 400,
            ApiError::NotFound { .. } => 404,
            ApiError::Backend(_) => 500,
        }
    }

    /// Message safe to return to the caller.
    pub fn client_message(&self) -> String {
        match self {
            ApiError::MalformedBody(_) => "Failed to parse product from request body".to_string(),
            ApiError::InvalidProduct(_) => "Invalid product".to_string(),
            ApiError::NotFound { .. } => "Product not found".to_string(),
            ApiError::Backend(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }

    /// Logs the full error and builds the client-facing response.
    pub fn into_response(self) -> ApiGatewayProxyResponse {
        match &self {
            ApiError::MissingPathId | ApiError::NotFound { .. } => tracing::warn!("{}", self),
            ApiError::Backend(source) => tracing::error!(error = %source, "Unexpected storage failure"),
            _ => tracing::error!("{}", self),
        }

        let status = self.status_code();
        match &self {
            ApiError::InvalidProduct(violations) => ApiGatewayProxyResponse::json(
                status,
                &ValidationBody {
                    message: "Invalid product",
                    errors: violations,
                },
            ),
            _ => ApiGatewayProxyResponse::message(status, &self.client_message()),
        }
    }
}
