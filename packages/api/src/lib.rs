//! # API crate: domain logic for AuraMatch
//!
//! Everything the web server needs that is not HTTP plumbing lives here, so it can be
//! unit tested without spinning up a router.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Password hashing, signed session cookies, form validation, route guard table |
//! | [`config`] | Layered [`Settings`] (defaults, `config.toml`, `AURAMATCH_*` environment) |
//! | [`contact`] | Contact form validation |
//! | [`db`] | [`UserStore`](db::UserStore) trait with in-memory and PostgreSQL backends |
//! | [`error`] | [`ApiError`], the crate-wide error type |
//! | [`matching`] | Influencer catalog scoring and the random candidate generator |
//! | [`models`] | `User`, `UserInfo`, `InfluencerProfile` |
//! | [`validation`] | Field-keyed error lists shared by every form |

pub mod auth;
pub mod config;
pub mod contact;
pub mod db;
pub mod error;
pub mod matching;
pub mod models;
pub mod validation;

pub use config::Settings;
pub use error::ApiError;
pub use models::{AccountType, InfluencerProfile, User, UserInfo};
pub use validation::FieldErrors;
