use api::auth::{ProfileForm, SIGN_IN_PATH};
use api::{FieldErrors, UserInfo};
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use chrono::Utc;
use dioxus::prelude::*;
use ui::views::ProfileView;
use uuid::Uuid;

use super::{invalid, page};
use crate::middleware::{set_cookie, set_session_cookie};
use crate::{AppError, AppState, CurrentUser};

const PROFILE_UPDATED: &str = "Profile updated successfully!";

fn render(user: UserInfo, creating: bool) -> Html<String> {
    page(rsx! {
        ProfileView { user, creating, errors: FieldErrors::new(), success: None::<String> }
    })
}

pub async fn show(CurrentUser(session): CurrentUser) -> Html<String> {
    render(session.to_info(), false)
}

/// Landing page right after sign-in or sign-up.
pub async fn create(CurrentUser(session): CurrentUser) -> Html<String> {
    render(session.to_info(), true)
}

/// Update the display names. The email address is fixed.
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(session): CurrentUser,
    Form(form): Form<ProfileForm>,
) -> Result<Response, AppError> {
    let (first_name, last_name) = match form.validate() {
        Ok(names) => names,
        Err(errors) => {
            let user = session.to_info();
            return Ok(invalid(rsx! {
                ProfileView { user, creating: false, errors, success: None::<String> }
            }));
        }
    };

    let updated = match Uuid::parse_str(&session.user_id) {
        Ok(id) => state.users.update_names(id, &first_name, &last_name).await?,
        Err(_) => None,
    };

    // The session outlived its account, e.g. an in-memory store after a restart.
    let Some(user) = updated else {
        tracing::warn!(user_id = %session.user_id, "profile update for unknown user");
        let mut response = Redirect::to(SIGN_IN_PATH).into_response();
        set_cookie(&mut response, &state.sessions.removal_cookie())?;
        return Ok(response);
    };

    tracing::info!(user_id = %user.id, "profile updated");
    let payload = state.sessions.issue(&user, Utc::now());
    let info = user.to_info();
    let mut response = page(rsx! {
        ProfileView {
            user: info,
            creating: false,
            errors: FieldErrors::new(),
            success: Some(PROFILE_UPDATED.to_string()),
        }
    })
    .into_response();
    set_session_cookie(&mut response, &state.sessions, &payload)?;
    Ok(response)
}
