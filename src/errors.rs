use crate::models::Notification;
use axum::http::StatusCode;
use axum::Json;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
    pub notification: Option<Notification>,
}

impl AppError {
    /// Not-found failures carry the notification the sink should show.
    pub fn not_found(notification: Notification) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: notification.message.clone(),
            notification: Some(notification),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
            notification: None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self.notification {
            Some(notification) => (self.status, Json(notification)).into_response(),
            None => (self.status, self.message).into_response(),
        }
    }
}
