//! # Signed session cookies
//!
//! The session lives entirely in the `session` cookie: a [`SessionPayload`] serialised to
//! JSON, hex encoded, then signed with HMAC-SHA256 through the `cookie` crate's signed jar.
//! There is no server-side store, so sign-out simply clears the cookie.
//!
//! The signing key is derived from the configured secret with SHA-512, which yields the
//! 64 bytes [`Key`] requires regardless of the secret's length.
//!
//! Every accepted request gets a re-signed cookie with a fresh expiry (see
//! [`SessionKeys::refresh`]), so an active user stays signed in indefinitely and an idle
//! one is dropped after `session_days`.

use chrono::{DateTime, Duration, Utc};
use cookie::{Cookie, CookieJar, Key, SameSite};
use http::header::COOKIE;
use http::HeaderMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};
use thiserror::Error;

use crate::config::{Auth, MAX_SESSION_DAYS};
use crate::models::{AccountType, User, UserInfo};

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "session";

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("signature mismatch")]
    Tampered,
    #[error("malformed payload: {0}")]
    Malformed(String),
    #[error("session expired")]
    Expired,
    #[error("could not encode session: {0}")]
    Encode(String),
}

/// Claims carried by the session cookie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPayload {
    pub user_id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<AccountType>,
    pub expires_at: DateTime<Utc>,
}

impl SessionPayload {
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.user_id.clone(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            account_type: self.account_type,
        }
    }
}

/// Signing key plus cookie policy.
#[derive(Clone)]
pub struct SessionKeys {
    key: Key,
    ttl: Duration,
    secure: bool,
}

impl SessionKeys {
    /// `session_days` is clamped to `1..=MAX_SESSION_DAYS`.
    pub fn new(secret: &str, session_days: i64, secure: bool) -> Self {
        let digest = Sha512::digest(secret.as_bytes());
        Self {
            key: Key::from(digest.as_slice()),
            ttl: Duration::days(session_days.clamp(1, MAX_SESSION_DAYS)),
            secure,
        }
    }

    pub fn from_settings(auth: &Auth) -> Self {
        Self::new(&auth.secret, auth.session_days, auth.secure_cookies)
    }

    /// Claims for a freshly authenticated user.
    pub fn issue(&self, user: &User, now: DateTime<Utc>) -> SessionPayload {
        SessionPayload {
            user_id: user.id.to_string(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            account_type: user.account_type,
            expires_at: now + self.ttl,
        }
    }

    /// Same claims, new expiry.
    pub fn refresh(&self, payload: &SessionPayload, now: DateTime<Utc>) -> SessionPayload {
        SessionPayload {
            expires_at: now + self.ttl,
            ..payload.clone()
        }
    }

    /// Signed cookie value for `payload`.
    pub fn encode(&self, payload: &SessionPayload) -> Result<String, SessionError> {
        let json = serde_json::to_vec(payload).map_err(|e| SessionError::Encode(e.to_string()))?;

        let mut jar = CookieJar::new();
        jar.signed_mut(&self.key)
            .add(Cookie::new(SESSION_COOKIE, hex::encode(json)));
        jar.get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(|| SessionError::Encode("signed jar dropped the cookie".into()))
    }

    /// Verify and unpack a cookie value. Rejects bad signatures and expired claims.
    pub fn decode(&self, raw: &str, now: DateTime<Utc>) -> Result<SessionPayload, SessionError> {
        let mut jar = CookieJar::new();
        jar.add_original(Cookie::new(SESSION_COOKIE, raw.to_string()));
        let verified = jar
            .signed(&self.key)
            .get(SESSION_COOKIE)
            .ok_or(SessionError::Tampered)?;

        let json = hex::decode(verified.value()).map_err(|e| SessionError::Malformed(e.to_string()))?;
        let payload: SessionPayload =
            serde_json::from_slice(&json).map_err(|e| SessionError::Malformed(e.to_string()))?;

        if payload.expires_at <= now {
            return Err(SessionError::Expired);
        }
        Ok(payload)
    }

    /// `Set-Cookie`-ready cookie carrying `payload`, expiring with it.
    pub fn cookie(&self, payload: &SessionPayload) -> Result<Cookie<'static>, SessionError> {
        let value = self.encode(payload)?;
        let expires = time::OffsetDateTime::from_unix_timestamp(payload.expires_at.timestamp())
            .map_err(|e| SessionError::Encode(e.to_string()))?;

        Ok(Cookie::build((SESSION_COOKIE, value))
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .path("/")
            .expires(expires)
            .build())
    }

    /// Cookie that clears the session in the browser.
    pub fn removal_cookie(&self) -> Cookie<'static> {
        let mut cookie = Cookie::build((SESSION_COOKIE, ""))
            .http_only(true)
            .secure(self.secure)
            .same_site(SameSite::Lax)
            .path("/")
            .build();
        cookie.make_removal();
        cookie
    }
}

/// Raw value of the `session` cookie from the request's `Cookie` headers.
pub fn read_session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| Cookie::split_parse(value))
        .filter_map(Result::ok)
        .find(|cookie| cookie.name() == SESSION_COOKIE)
        .map(|cookie| cookie.value().to_string())
}
