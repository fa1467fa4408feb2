//! Axum rendering of [`AppError`]

use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

use super::app_error::AppError;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, Json(self.body())).into_response()
    }
}
