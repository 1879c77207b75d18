use api::auth::SignUpForm;
use api::{AccountType, FieldErrors, UserInfo};
use dioxus::prelude::*;

use crate::{FieldMessages, Layout};

const ACCOUNT_TYPES: [AccountType; 2] = [AccountType::Brand, AccountType::Influencer];

/// Sign-up page. Passwords are never echoed back into the form.
#[component]
pub fn SignUpView(form: SignUpForm, errors: FieldErrors) -> Element {
    rsx! {
        Layout { page_title: "Sign Up", user: None::<UserInfo>,
            section { class: "auth-card",
                h1 { "Create your account" }
                form { class: "form", method: "post", action: "/auth/signup",
                    div { class: "row",
                        div {
                            label { r#for: "firstName", "First name" }
                            input { id: "firstName", name: "firstName", r#type: "text", value: "{form.first_name}" }
                            FieldMessages { errors: errors.clone(), field: "firstName" }
                        }
                        div {
                            label { r#for: "lastName", "Last name" }
                            input { id: "lastName", name: "lastName", r#type: "text", value: "{form.last_name}" }
                            FieldMessages { errors: errors.clone(), field: "lastName" }
                        }
                    }

                    label { r#for: "email", "Email" }
                    input { id: "email", name: "email", r#type: "email", value: "{form.email}" }
                    FieldMessages { errors: errors.clone(), field: "email" }

                    label { r#for: "password", "Password" }
                    input { id: "password", name: "password", r#type: "password" }
                    FieldMessages { errors: errors.clone(), field: "password" }

                    label { r#for: "confirmPassword", "Confirm password" }
                    input { id: "confirmPassword", name: "confirmPassword", r#type: "password" }
                    FieldMessages { errors: errors.clone(), field: "confirmPassword" }

                    fieldset { class: "radios",
                        legend { "I am a" }
                        for (value, caption) in ACCOUNT_TYPES.iter().map(|kind| (kind.as_str(), kind.label())) {
                            label { key: "{value}",
                                input {
                                    name: "accountType",
                                    r#type: "radio",
                                    value,
                                    checked: form.account_type == value,
                                }
                                " {caption}"
                            }
                        }
                    }
                    FieldMessages { errors: errors.clone(), field: "accountType" }

                    button { class: "button", r#type: "submit", "Create account" }
                }
                p { class: "muted",
                    "Already have an account? "
                    a { href: "/auth/signin", "Sign in" }
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
    fn test_sign_up_renders_validation_errors() {
        let form = SignUpForm {
            email: "ada@example.com".into(),
            password: "abc".into(),
            confirm_password: "abc".into(),
            ..Default::default()
        };
        let errors = form.validate().unwrap_err();
        let html = render_page(rsx! { SignUpView { form, errors } });
        assert!(html.contains("First name is required"));
        assert!(html.contains("Last name is required"));
        assert!(html.contains("Password must be at least 6 characters"));
        assert!(html.contains("Account type must be brand or influencer"));
        assert!(html.contains("value=\"ada@example.com\""));
        assert!(!html.contains("value=\"abc\""));
    }

    #[test]
    fn test_sign_up_offers_both_account_types() {
        let html = render_page(rsx! {
            SignUpView { form: SignUpForm::default(), errors: FieldErrors::new() }
        });
        assert!(html.contains("value=\"brand\""));
        assert!(html.contains("value=\"influencer\""));
    }
}
