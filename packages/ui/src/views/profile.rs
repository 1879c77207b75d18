use api::{FieldErrors, UserInfo};
use dioxus::prelude::*;

use crate::{Alert, AlertKind, FieldMessages, Layout};

/// Profile page. `creating` is set on the post-sign-in landing at `/profile/create`.
#[component]
pub fn ProfileView(
    user: UserInfo,
    creating: bool,
    errors: FieldErrors,
    success: Option<String>,
) -> Element {
    let heading = if creating {
        "Complete your profile"
    } else {
        "Your profile"
    };
    let first_name = user.first_name.clone().unwrap_or_default();
    let last_name = user.last_name.clone().unwrap_or_default();
    let account_type = user
        .account_type
        .map(|kind| kind.label())
        .unwrap_or("Not set");
    let email = user.email.clone();

    rsx! {
        Layout { page_title: "Profile", user: Some(user),
            section { class: "form-page",
                h1 { "{heading}" }
                {success.map(|message| rsx! {
                    Alert { kind: AlertKind::Success, message }
                })}
                dl { class: "profile-summary",
                    dt { "Email" }
                    dd { "{email}" }
                    dt { "Account type" }
                    dd { "{account_type}" }
                }
                form { class: "form", method: "post", action: "/profile",
                    label { r#for: "firstName", "First name" }
                    input { id: "firstName", name: "firstName", r#type: "text", value: "{first_name}" }
                    FieldMessages { errors: errors.clone(), field: "firstName" }

                    label { r#for: "lastName", "Last name" }
                    input { id: "lastName", name: "lastName", r#type: "text", value: "{last_name}" }
                    FieldMessages { errors: errors.clone(), field: "lastName" }

                    label { r#for: "email", "Email" }
                    input { id: "email", r#type: "email", value: "{email}", disabled: true }
                    p { class: "muted small", "Email cannot be changed." }

                    button { class: "button", r#type: "submit", "Save profile" }
                }
                a { class: "button button-secondary", href: "/match", "Find your matches" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render_page, test_support};

    #[test]
    fn test_profile_shows_session_user() {
        let html = render_page(rsx! {
            ProfileView {
                user: test_support::user(),
                creating: true,
                errors: FieldErrors::new(),
                success: None::<String>,
            }
        });
        assert!(html.contains("Complete your profile"));
        assert!(html.contains("sophia@example.com"));
        assert!(html.contains("value=\"Sophia\""));
        assert!(html.contains("Influencer"));
    }

    #[test]
    fn test_profile_update_feedback() {
        let mut user = test_support::user();
        user.account_type = None;
        let html = render_page(rsx! {
            ProfileView {
                user,
                creating: false,
                errors: FieldErrors::single("lastName", "Last name is required"),
                success: Some("Profile updated successfully!".to_string()),
            }
        });
        assert!(html.contains("Your profile"));
        assert!(html.contains("Not set"));
        assert!(html.contains("Last name is required"));
        assert!(html.contains("Profile updated successfully!"));
    }
}
