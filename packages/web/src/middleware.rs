//! Session guard and the extractors that read what it leaves behind.

use std::convert::Infallible;

use api::auth::{
    decide, read_session_cookie, Cookie, GuardDecision, SessionKeys, SessionPayload,
    SESSION_COOKIE, SIGN_IN_PATH,
};
use api::UserInfo;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::SET_COOKIE;
use axum::http::request::Parts;
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use chrono::Utc;

use crate::{AppError, AppState};

/// Runs in front of every route.
///
/// Reads and verifies the `session` cookie, redirects according to the route table, stores
/// the verified [`SessionPayload`] in the request extensions and re-signs the cookie on the
/// way out unless the handler already set one.
pub async fn session_guard(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_owned();
    let now = Utc::now();

    let session = read_session_cookie(request.headers()).and_then(|raw| {
        match state.sessions.decode(&raw, now) {
            Ok(payload) => Some(payload),
            Err(err) => {
                tracing::warn!(%path, error = %err, "rejected session cookie");
                None
            }
        }
    });

    let refresh = match decide(&path, session.is_some()) {
        GuardDecision::Redirect(to) => {
            tracing::debug!(%path, %to, "guard redirect");
            return Redirect::to(to).into_response();
        }
        GuardDecision::Continue { refresh } => refresh,
    };

    if let Some(payload) = &session {
        request.extensions_mut().insert(payload.clone());
    }

    let mut response = next.run(request).await;

    if let (true, Some(payload)) = (refresh, session) {
        if !sets_session_cookie(&response) {
            let refreshed = state.sessions.refresh(&payload, now);
            if let Err(err) = set_session_cookie(&mut response, &state.sessions, &refreshed) {
                tracing::error!(error = %err, "failed to refresh session cookie");
            }
        }
    }

    response
}

fn sets_session_cookie(response: &Response) -> bool {
    let prefix = format!("{SESSION_COOKIE}=");
    response
        .headers()
        .get_all(SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .any(|value| value.starts_with(&prefix))
}

/// Append `cookie` as a `Set-Cookie` header.
pub fn set_cookie(response: &mut Response, cookie: &Cookie<'_>) -> Result<(), AppError> {
    let value = HeaderValue::from_str(&cookie.to_string())?;
    response.headers_mut().append(SET_COOKIE, value);
    Ok(())
}

/// Sign `payload` and attach it as the session cookie.
pub fn set_session_cookie(
    response: &mut Response,
    keys: &SessionKeys,
    payload: &SessionPayload,
) -> Result<(), AppError> {
    let cookie = keys.cookie(payload)?;
    set_cookie(response, &cookie)
}

/// The signed-in user. Rejects with a redirect to the sign-in page.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub SessionPayload);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = Redirect;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<SessionPayload>()
            .cloned()
            .map(CurrentUser)
            .ok_or_else(|| Redirect::to(SIGN_IN_PATH))
    }
}

/// The signed-in user, if any.
#[derive(Debug, Clone, Default)]
pub struct MaybeUser(pub Option<SessionPayload>);

impl MaybeUser {
    pub fn info(&self) -> Option<UserInfo> {
        self.0.as_ref().map(SessionPayload::to_info)
    }
}

impl<S> FromRequestParts<S> for MaybeUser
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(MaybeUser(parts.extensions.get::<SessionPayload>().cloned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sets_session_cookie() {
        let mut response = Response::new(axum::body::Body::empty());
        assert!(!sets_session_cookie(&response));

        response
            .headers_mut()
            .append(SET_COOKIE, HeaderValue::from_static("theme=dark; Path=/"));
        assert!(!sets_session_cookie(&response));

        response
            .headers_mut()
            .append(SET_COOKIE, HeaderValue::from_static("session=abc; Path=/"));
        assert!(sets_session_cookie(&response));
    }

    #[test]
    fn test_set_session_cookie_appends_header() {
        let keys = SessionKeys::new("test-secret", 7, false);
        let payload = SessionPayload {
            user_id: "1".into(),
            email: "ada@example.com".into(),
            first_name: None,
            last_name: None,
            account_type: None,
            expires_at: Utc::now() + chrono::Duration::days(1),
        };
        let mut response = Response::new(axum::body::Body::empty());
        set_session_cookie(&mut response, &keys, &payload).unwrap();

        let header = response.headers().get(SET_COOKIE).unwrap().to_str().unwrap();
        assert!(header.starts_with("session="));
        assert!(header.contains("HttpOnly"));
        assert!(header.contains("SameSite=Lax"));
    }
}
