use api::contact::ContactForm;
use api::FieldErrors;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;
use dioxus::prelude::*;
use ui::views::ContactView;

use super::{invalid, page};
use crate::MaybeUser;

const THANK_YOU: &str = "Thank you for your message! We will get back to you soon.";

pub async fn show(user: MaybeUser) -> Html<String> {
    page(rsx! {
        ContactView {
            user: user.info(),
            form: ContactForm::default(),
            errors: FieldErrors::new(),
            success: None::<String>,
        }
    })
}

/// Submissions are only logged.
pub async fn submit(user: MaybeUser, Form(form): Form<ContactForm>) -> Response {
    if let Err(errors) = form.validate() {
        return invalid(rsx! {
            ContactView { user: user.info(), form, errors, success: None::<String> }
        });
    }

    tracing::info!(
        name = %form.name,
        email = %form.email,
        subject = %form.subject,
        audience = form.audience(),
        "contact form submitted"
    );

    let form = form.cleared();
    page(rsx! {
        ContactView {
            user: user.info(),
            form,
            errors: FieldErrors::new(),
            success: Some(THANK_YOU.to_string()),
        }
    })
    .into_response()
}
