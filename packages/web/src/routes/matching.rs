//! The match questionnaire, its results page and the JSON match endpoint.

use std::time::Duration;

use api::matching::{find_matches, MatchRequest};
use api::InfluencerProfile;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::{Form, Json};
use dioxus::prelude::*;
use serde::Serialize;
use ui::views::{MatchFormView, ResultsView};

use super::{invalid, page};
use crate::{AppState, CurrentUser};

#[derive(Debug, Serialize)]
pub struct MatchResponse {
    pub matches: Vec<InfluencerProfile>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

fn json_error(status: StatusCode, error: impl Into<String>) -> Response {
    (status, Json(ErrorResponse { error: error.into() })).into_response()
}

/// Wait out the configured processing delay, then score the request.
async fn run_match(state: &AppState, request: &MatchRequest) -> Vec<InfluencerProfile> {
    let delay = state.settings.matching.delay_ms;
    if delay > 0 {
        tokio::time::sleep(Duration::from_millis(delay)).await;
    }
    let mut rng = rand::thread_rng();
    find_matches(state.settings.matching.strategy, request, &mut rng)
}

pub async fn form(CurrentUser(session): CurrentUser) -> Html<String> {
    page(rsx! {
        MatchFormView {
            user: Some(session.to_info()),
            request: MatchRequest::default(),
            error: None::<String>,
        }
    })
}

/// Form post from `/match`. `brandValues` arrives once per ticked checkbox.
pub async fn submit(
    State(state): State<AppState>,
    CurrentUser(session): CurrentUser,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Response {
    let request = MatchRequest::from_form_pairs(pairs);
    if let Err(err) = request.validate() {
        return invalid(rsx! {
            MatchFormView {
                user: Some(session.to_info()),
                request,
                error: Some(err.to_string()),
            }
        });
    }

    let matches = run_match(&state, &request).await;
    tracing::debug!(count = matches.len(), "match results rendered");

    page(rsx! {
        ResultsView { user: Some(session.to_info()), request, matches }
    })
    .into_response()
}

/// Results only exist as the answer to a submitted form.
pub async fn results() -> Redirect {
    Redirect::to("/match")
}

/// `POST /api/influencers/match`
pub async fn api_match(State(state): State<AppState>, body: Bytes) -> Response {
    let request: MatchRequest = match serde_json::from_slice(&body) {
        Ok(request) => request,
        Err(err) => {
            tracing::error!(error = %err, "failed to parse match request");
            return json_error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to process request");
        }
    };

    if let Err(err) = request.validate() {
        return json_error(StatusCode::BAD_REQUEST, err.to_string());
    }

    let matches = run_match(&state, &request).await;
    Json(MatchResponse { matches }).into_response()
}
