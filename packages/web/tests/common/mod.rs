#![allow(dead_code)]

use std::sync::Arc;

use api::db::MemoryUserStore;
use api::Settings;
use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE};
use axum::http::{Request, Response};
use axum::Router;
use tower::ServiceExt;
use web::{build_router, AppState};

pub fn settings() -> Settings {
    let mut settings = Settings::default();
    settings.auth.secret = "integration-test-secret".into();
    settings.matching.delay_ms = 0;
    settings.server.assets_dir = concat!(env!("CARGO_MANIFEST_DIR"), "/assets").into();
    settings
}

pub fn app() -> Router {
    build_router(AppState::new(settings(), Arc::new(MemoryUserStore::new())))
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::get(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

pub fn post_form(uri: &str, body: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::post(uri).header(CONTENT_TYPE, "application/x-www-form-urlencoded");
    if let Some(cookie) = cookie {
        builder = builder.header(COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::post(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn location(response: &Response<Body>) -> Option<&str> {
    response.headers().get(LOCATION).and_then(|v| v.to_str().ok())
}

/// Full `Set-Cookie` header for the session cookie, if the response sets one.
pub fn session_set_cookie(response: &Response<Body>) -> Option<String> {
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .find(|v| v.starts_with("session="))
        .map(str::to_string)
}

/// `session=<value>` ready to send back in a `Cookie` header.
pub fn session_cookie(response: &Response<Body>) -> Option<String> {
    session_set_cookie(response)
        .and_then(|header| header.split(';').next().map(str::to_string))
}

pub const SIGN_UP: &str = "firstName=Ada&lastName=Lovelace&email=Ada%40Example.com\
    &password=secret1&confirmPassword=secret1&accountType=brand";

/// Register the default account and return its session cookie.
pub async fn signed_up(app: &Router) -> String {
    let response = send(app, post_form("/auth/signup", SIGN_UP, None)).await;
    assert_eq!(response.status(), 303);
    session_cookie(&response).unwrap()
}
