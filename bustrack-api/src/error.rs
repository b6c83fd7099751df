use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use bustrack_catalog::InventoryError;
use bustrack_core::CoreError;
use bustrack_order::OrderError;
use bustrack_shared::Notification;
use bustrack_store::TicketRepoError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    /// Shown to the user as an error toast; the submission is aborted.
    ValidationError(String),
    NotFoundError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, toast) = match self {
            AppError::ValidationError(msg) => {
                let toast = Notification::error(msg.clone());
                (StatusCode::BAD_REQUEST, msg, Some(toast))
            },
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg, None),
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string(), None)
            },
        };

        let body = match toast {
            Some(notification) => json!({
                "error": error_message,
                "notification": notification,
            }),
            None => json!({
                "error": error_message,
            }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

impl From<InventoryError> for AppError {
    fn from(err: InventoryError) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

impl From<TicketRepoError> for AppError {
    fn from(err: TicketRepoError) -> Self {
        AppError::InternalServerError(err.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::ValidationError(rejection.body_text())
    }
}
