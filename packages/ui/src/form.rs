//! Small pieces shared by the form pages.

use api::FieldErrors;
use dioxus::prelude::*;

/// Validation messages for one field, if any.
#[component]
pub fn FieldMessages(errors: FieldErrors, #[props(into)] field: String) -> Element {
    let messages = errors.get(&field).to_vec();
    rsx! {
        for message in messages {
            p { class: "field-error", "{message}" }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// Banner shown above a form after submission.
#[component]
pub fn Alert(kind: AlertKind, #[props(into)] message: String) -> Element {
    let class = match kind {
        AlertKind::Success => "alert alert-success",
        AlertKind::Error => "alert alert-error",
    };
    rsx! {
        div { class, "{message}" }
    }
}
