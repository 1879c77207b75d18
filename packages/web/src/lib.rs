//! HTTP server for AuraMatch.
//!
//! Pages are rendered server-side from the `ui` crate; forms post back to the handlers in
//! [`routes`]. The only JSON endpoint is `POST /api/influencers/match`.

use std::sync::Arc;

use api::auth::SessionKeys;
use api::db::UserStore;
use api::Settings;
use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

pub mod error;
pub mod middleware;
pub mod routes;

pub use error::AppError;
pub use middleware::{CurrentUser, MaybeUser};

/// Shared handler state. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub sessions: SessionKeys,
    pub users: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(settings: Settings, users: Arc<dyn UserStore>) -> Self {
        Self {
            sessions: SessionKeys::from_settings(&settings.auth),
            settings: Arc::new(settings),
            users,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    use routes::{auth, contact, matching, pages, profile};

    let assets = ServeDir::new(&state.settings.server.assets_dir);

    Router::new()
        .route("/", get(pages::home))
        .route("/philosophy", get(pages::philosophy))
        .route("/synergy", get(pages::synergy))
        .route("/mission", get(pages::mission))
        .route("/contact", get(contact::show).post(contact::submit))
        .route("/auth/signin", get(auth::sign_in_page).post(auth::sign_in))
        .route("/auth/signup", get(auth::sign_up_page).post(auth::sign_up))
        .route("/auth/signout", post(auth::sign_out))
        .route(
            "/auth/forgot-password",
            get(auth::forgot_password_page).post(auth::forgot_password),
        )
        .route("/profile", get(profile::show).post(profile::update))
        .route("/profile/create", get(profile::create))
        .route("/match", get(matching::form).post(matching::submit))
        .route("/results", get(matching::results))
        .route("/api/influencers/match", post(matching::api_match))
        .nest_service("/assets", assets)
        .fallback(pages::not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            middleware::session_guard,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
