use axum::http::StatusCode;
use axum::response::Html;
use dioxus::prelude::*;
use ui::views::{HomeView, MissionView, NotFoundView, PhilosophyView, SynergyView};

use super::page;
use crate::MaybeUser;

pub async fn home(user: MaybeUser) -> Html<String> {
    page(rsx! { HomeView { user: user.info() } })
}

pub async fn philosophy(user: MaybeUser) -> Html<String> {
    page(rsx! { PhilosophyView { user: user.info() } })
}

pub async fn synergy(user: MaybeUser) -> Html<String> {
    page(rsx! { SynergyView { user: user.info() } })
}

pub async fn mission(user: MaybeUser) -> Html<String> {
    page(rsx! { MissionView { user: user.info() } })
}

pub async fn not_found(user: MaybeUser) -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        page(rsx! { NotFoundView { user: user.info() } }),
    )
}
