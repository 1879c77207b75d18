//! Request handlers, one module per area of the site.

pub mod auth;
pub mod contact;
pub mod matching;
pub mod pages;
pub mod profile;

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use dioxus::prelude::Element;

/// Render a page component to an HTML response body.
pub(crate) fn page(element: Element) -> Html<String> {
    Html(ui::render_page(element))
}

/// A form page re-rendered with validation errors.
pub(crate) fn invalid(element: Element) -> Response {
    (StatusCode::UNPROCESSABLE_ENTITY, page(element)).into_response()
}
