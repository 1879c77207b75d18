use api::contact::ContactForm;
use api::{FieldErrors, UserInfo};
use dioxus::prelude::*;

use crate::{Alert, AlertKind, FieldMessages, Layout};

/// Contact page. `form` carries the values to re-fill after a failed submit.
#[component]
pub fn ContactView(
    user: Option<UserInfo>,
    form: ContactForm,
    errors: FieldErrors,
    success: Option<String>,
) -> Element {
    rsx! {
        Layout { page_title: "Contact Us", user,
            section { class: "form-page",
                h1 { "Contact Us" }
                p { class: "lead",
                    "Ready to discover the perfect aura alignment for your brand or showcase your unique influencer energy? Get in touch."
                }
                {success.map(|message| rsx! {
                    Alert { kind: AlertKind::Success, message }
                })}
                form { class: "form", method: "post", action: "/contact",
                    label { r#for: "name", "Name" }
                    input { id: "name", name: "name", r#type: "text", value: "{form.name}" }
                    FieldMessages { errors: errors.clone(), field: "name" }

                    label { r#for: "email", "Email" }
                    input { id: "email", name: "email", r#type: "email", value: "{form.email}" }
                    FieldMessages { errors: errors.clone(), field: "email" }

                    label { r#for: "subject", "Subject" }
                    input { id: "subject", name: "subject", r#type: "text", value: "{form.subject}" }

                    label { r#for: "message", "Message" }
                    textarea { id: "message", name: "message", rows: "6", "{form.message}" }
                    FieldMessages { errors: errors.clone(), field: "message" }

                    fieldset { class: "checkboxes",
                        legend { "I am" }
                        label {
                            input {
                                name: "isInfluencer",
                                r#type: "checkbox",
                                checked: form.is_influencer.is_some(),
                            }
                            " an influencer"
                        }
                        label {
                            input {
                                name: "isBrand",
                                r#type: "checkbox",
                                checked: form.is_brand.is_some(),
                            }
                            " a brand"
                        }
                    }

                    button { class: "button", r#type: "submit", "Send message" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_page;

    #[test]
    fn test_contact_shows_field_errors_and_values() {
        let form = ContactForm {
            name: "Ada".into(),
            email: "not-an-email".into(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        let html = render_page(rsx! {
            ContactView { user: None::<UserInfo>, form, errors, success: None::<String> }
        });
        assert!(html.contains("value=\"Ada\""));
        assert!(html.contains("Invalid email address"));
        assert!(html.contains("Message is required"));
        assert!(!html.contains("Name is required"));
        assert!(!html.contains("alert-success"));
    }

    #[test]
    fn test_contact_success_banner() {
        let html = render_page(rsx! {
            ContactView {
                user: None::<UserInfo>,
                form: ContactForm::default(),
                errors: FieldErrors::new(),
                success: Some("Thank you for your message! We will get back to you soon.".to_string()),
            }
        });
        assert!(html.contains("alert-success"));
        assert!(html.contains("Thank you for your message!"));
    }
}
