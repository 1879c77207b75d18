use api::{FieldErrors, UserInfo};
use dioxus::prelude::*;

use crate::{Alert, AlertKind, FieldMessages, Layout};

#[component]
pub fn ForgotPasswordView(
    #[props(into)] email: String,
    errors: FieldErrors,
    success: Option<String>,
) -> Element {
    rsx! {
        Layout { page_title: "Forgot Password", user: None::<UserInfo>,
            section { class: "auth-card",
                h1 { "Reset your password" }
                p { class: "muted", "Enter your email and we'll send you a link to reset your password." }
                {success.map(|message| rsx! {
                    Alert { kind: AlertKind::Success, message }
                })}
                form { class: "form", method: "post", action: "/auth/forgot-password",
                    label { r#for: "email", "Email" }
                    input { id: "email", name: "email", r#type: "email", value: "{email}" }
                    FieldMessages { errors: errors.clone(), field: "email" }
                    button { class: "button", r#type: "submit", "Send reset link" }
                }
                p { class: "muted",
                    a { href: "/auth/signin", "Back to sign in" }
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
    fn test_forgot_password_states() {
        let html = render_page(rsx! {
            ForgotPasswordView {
                email: "",
                errors: FieldErrors::single("email", "Email is required"),
                success: None::<String>,
            }
        });
        assert!(html.contains("Email is required"));

        let html = render_page(rsx! {
            ForgotPasswordView {
                email: "ada@example.com",
                errors: FieldErrors::new(),
                success: Some("Password reset email sent successfully".to_string()),
            }
        });
        assert!(html.contains("Password reset email sent successfully"));
        assert!(!html.contains("field-error"));
    }
}
