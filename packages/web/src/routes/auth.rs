//! Sign-up, sign-in, sign-out and password reset.

use api::auth::{
    hash_password, verify_password, ForgotPasswordForm, SignInForm, SignUpForm, AFTER_AUTH_PATH,
    SIGN_IN_PATH,
};
use api::models::NewUser;
use api::{ApiError, FieldErrors};
use axum::extract::State;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use chrono::Utc;
use dioxus::prelude::*;
use ui::views::{ForgotPasswordView, SignInView, SignUpView};

use super::{invalid, page};
use crate::middleware::{set_cookie, set_session_cookie};
use crate::{AppError, AppState};

const RESET_SENT: &str = "Password reset email sent successfully";

pub async fn sign_in_page() -> Html<String> {
    page(rsx! { SignInView { email: "", errors: FieldErrors::new() } })
}

pub async fn sign_in(
    State(state): State<AppState>,
    Form(form): Form<SignInForm>,
) -> Result<Response, AppError> {
    let (email, password) = match form.validate() {
        Ok(credentials) => credentials,
        Err(errors) => return Ok(invalid(rsx! { SignInView { email: form.email, errors } })),
    };

    let user = match state.users.find_by_email(&email).await? {
        Some(user) if verify_password(&password, &user.password_hash)? => user,
        _ => {
            tracing::info!(%email, "sign-in rejected");
            let errors = ApiError::InvalidCredentials.field_errors().unwrap_or_default();
            return Ok(invalid(rsx! { SignInView { email: form.email, errors } }));
        }
    };

    tracing::info!(user_id = %user.id, "signed in");
    let payload = state.sessions.issue(&user, Utc::now());
    let mut response = Redirect::to(AFTER_AUTH_PATH).into_response();
    set_session_cookie(&mut response, &state.sessions, &payload)?;
    Ok(response)
}

pub async fn sign_up_page() -> Html<String> {
    page(rsx! { SignUpView { form: SignUpForm::default(), errors: FieldErrors::new() } })
}

pub async fn sign_up(
    State(state): State<AppState>,
    Form(form): Form<SignUpForm>,
) -> Result<Response, AppError> {
    let valid = match form.validate() {
        Ok(valid) => valid,
        Err(errors) => return Ok(invalid(rsx! { SignUpView { form, errors } })),
    };

    let new_user = NewUser {
        email: valid.email,
        password_hash: hash_password(&valid.password)?,
        first_name: Some(valid.first_name),
        last_name: Some(valid.last_name),
        account_type: Some(valid.account_type),
    };

    let user = match state.users.insert(new_user).await {
        Ok(user) => user,
        Err(err) => match err.field_errors() {
            Some(errors) => return Ok(invalid(rsx! { SignUpView { form, errors } })),
            None => return Err(err.into()),
        },
    };

    tracing::info!(user_id = %user.id, account_type = ?user.account_type, "account created");
    let payload = state.sessions.issue(&user, Utc::now());
    let mut response = Redirect::to(AFTER_AUTH_PATH).into_response();
    set_session_cookie(&mut response, &state.sessions, &payload)?;
    Ok(response)
}

pub async fn sign_out(State(state): State<AppState>) -> Result<Response, AppError> {
    let mut response = Redirect::to(SIGN_IN_PATH).into_response();
    set_cookie(&mut response, &state.sessions.removal_cookie())?;
    Ok(response)
}

pub async fn forgot_password_page() -> Html<String> {
    page(rsx! {
        ForgotPasswordView { email: "", errors: FieldErrors::new(), success: None::<String> }
    })
}

/// Acknowledges the request. No mail is sent.
pub async fn forgot_password(Form(form): Form<ForgotPasswordForm>) -> Response {
    match form.validate() {
        Ok(email) => {
            tracing::info!(%email, "password reset requested");
            page(rsx! {
                ForgotPasswordView {
                    email,
                    errors: FieldErrors::new(),
                    success: Some(RESET_SENT.to_string()),
                }
            })
            .into_response()
        }
        Err(errors) => invalid(rsx! {
            ForgotPasswordView { email: form.email, errors, success: None::<String> }
        }),
    }
}
