//! Data models for the application.

mod influencer;
mod user;

pub use influencer::{catalog, InfluencerProfile};
pub use user::{AccountType, NewUser, User, UserInfo};
