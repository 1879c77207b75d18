use api::{FieldErrors, UserInfo};
use dioxus::prelude::*;

use crate::{FieldMessages, Layout};

#[component]
pub fn SignInView(#[props(into)] email: String, errors: FieldErrors) -> Element {
    rsx! {
        Layout { page_title: "Sign In", user: None::<UserInfo>,
            section { class: "auth-card",
                h1 { "Welcome back" }
                p { class: "muted", "Sign in to find influencers that match your brand's energy." }
                form { class: "form", method: "post", action: "/auth/signin",
                    label { r#for: "email", "Email" }
                    input { id: "email", name: "email", r#type: "email", value: "{email}" }
                    FieldMessages { errors: errors.clone(), field: "email" }

                    label { r#for: "password", "Password" }
                    input { id: "password", name: "password", r#type: "password" }
                    FieldMessages { errors: errors.clone(), field: "password" }

                    a { class: "small", href: "/auth/forgot-password", "Forgot your password?" }
                    button { class: "button", r#type: "submit", "Sign in" }
                }
                p { class: "muted",
                    "Don't have an account? "
                    a { href: "/auth/signup", "Sign up" }
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
    fn test_sign_in_keeps_email_and_shows_error() {
        let errors = FieldErrors::single("email", "Invalid email or password");
        let html = render_page(rsx! {
            SignInView { email: "ada@example.com", errors }
        });
        assert!(html.contains("action=\"/auth/signin\""));
        assert!(html.contains("value=\"ada@example.com\""));
        assert!(html.contains("Invalid email or password"));
    }
}
