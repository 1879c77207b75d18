use api::UserInfo;
use dioxus::prelude::*;

const LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/philosophy", "Philosophy"),
    ("/synergy", "Synergy"),
    ("/mission", "Mission"),
    ("/contact", "Contact"),
];

/// Top navigation. Signed-in users get the match and profile links and a sign-out button.
#[component]
pub fn Navbar(user: Option<UserInfo>) -> Element {
    rsx! {
        nav { class: "navbar",
            a { class: "brand", href: "/", "AuraMatch" }
            div { class: "nav-links",
                for (href, label) in LINKS.iter() {
                    a { key: "{href}", href: "{href}", "{label}" }
                }
            }
            div { class: "nav-auth",
                {match user {
                    Some(user) => {
                        let name = user.display_name();
                        rsx! {
                            a { href: "/match", "Find matches" }
                            a { href: "/profile", "{name}" }
                            form { method: "post", action: "/auth/signout",
                                button { class: "link-button", r#type: "submit", "Sign out" }
                            }
                        }
                    }
                    None => rsx! {
                        a { href: "/auth/signin", "Sign in" }
                        a { class: "button", href: "/auth/signup", "Sign up" }
                    },
                }}
            }
        }
    }
}
