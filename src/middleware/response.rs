use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use serde_json::json;

/// JSON response with an explicit status code. The body is the serialized
/// value itself, with no envelope.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub status_code: Option<StatusCode>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful API response with default 200 status
    pub fn success(data: T) -> Self {
        Self {
            data,
            status_code: None,
        }
    }

    /// Create an API response with custom status code
    pub fn with_status(data: T, status_code: StatusCode) -> Self {
        Self {
            data,
            status_code: Some(status_code),
        }
    }

    /// Create a 201 Created response
    pub fn created(data: T) -> Self {
        Self::with_status(data, StatusCode::CREATED)
    }
}

impl ApiResponse<serde_json::Value> {
    /// `{"message": ...}` body used by delete endpoints
    pub fn message(message: impl Into<String>) -> Self {
        Self::success(json!({ "message": message.into() }))
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = self.status_code.unwrap_or(StatusCode::OK);

        match serde_json::to_value(&self.data) {
            Ok(value) => (status, Json(value)).into_response(),
            Err(e) => {
                tracing::error!("Failed to serialize response data: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": true,
                        "message": "Failed to serialize response data",
                        "code": "INTERNAL_SERVER_ERROR"
                    })),
                )
                    .into_response()
            }
        }
    }
}

/// Plain-text response, used where clients expect a bare confirmation string
pub struct TextResponse {
    pub status_code: StatusCode,
    pub body: &'static str,
}

impl TextResponse {
    pub fn ok(body: &'static str) -> Self {
        Self {
            status_code: StatusCode::OK,
            body,
        }
    }

    pub fn created(body: &'static str) -> Self {
        Self {
            status_code: StatusCode::CREATED,
            body,
        }
    }
}

impl IntoResponse for TextResponse {
    fn into_response(self) -> Response {
        (self.status_code, self.body).into_response()
    }
}

// Convenience type aliases
pub type ApiResult<T> = Result<ApiResponse<T>, crate::error::ApiError>;
