use api::auth::SessionError;
use api::{ApiError, UserInfo};
use axum::http::header::InvalidHeaderValue;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dioxus::prelude::*;
use thiserror::Error;
use ui::views::ErrorView;

use crate::routes::page;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("invalid header value: {0}")]
    Header(#[from] InvalidHeaderValue),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Api(ApiError::Validation(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Api(ApiError::MissingFields) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
            "Something went wrong on our side. Please try again later.".to_string()
        } else {
            self.to_string()
        };

        (status, page(rsx! { ErrorView { user: None::<UserInfo>, message } })).into_response()
    }
}
