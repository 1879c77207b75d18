use api::UserInfo;
use dioxus::prelude::*;

use crate::Layout;

const STEPS: &[(&str, &str)] = &[
    (
        "Define your energy",
        "Share your brand's story, values, and desired emotional impact to create your unique energy signature.",
    ),
    (
        "Discover resonance",
        "We compare your values against influencer auras to find the creators whose energy amplifies yours.",
    ),
    (
        "Review your matches",
        "See vibe scores and audience alignment for your top three matches before reaching out.",
    ),
    (
        "Build the partnership",
        "Build authentic partnerships that amplify both your brand's energy and the influencer's unique aura.",
    ),
];

/// Landing page.
#[component]
pub fn HomeView(user: Option<UserInfo>) -> Element {
    let (cta_href, cta_label) = if user.is_some() {
        ("/match", "Find your matches")
    } else {
        ("/auth/signup", "Get started")
    };

    rsx! {
        Layout { page_title: "Influencer Aura Tracking", user,
            section { class: "hero",
                h1 { "Find influencers whose aura matches your brand's energy" }
                p { class: "lead",
                    "AuraMatch pairs brands with creators through authentic alignment of values and energy, not follower counts alone."
                }
                div { class: "hero-actions",
                    a { class: "button", href: cta_href, "{cta_label}" }
                    a { class: "button button-secondary", href: "/philosophy", "Our philosophy" }
                }
            }
            section { class: "steps",
                h2 { "How it works" }
                ol { class: "step-list",
                    for (title, body) in STEPS.iter() {
                        li { key: "{title}",
                            h3 { "{title}" }
                            p { "{body}" }
                        }
                    }
                }
            }
            section { class: "quote",
                blockquote {
                    "The relationship between an influencer's aura and a brand's energy is like quantum entanglement. When properly aligned, they create an instantaneous resonance that transcends traditional marketing boundaries."
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{render_page, test_support};

    #[test]
    fn test_home_signed_out_links_to_sign_up() {
        let html = render_page(rsx! { HomeView { user: None::<UserInfo> } });
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("How it works"));
        assert!(html.contains("href=\"/auth/signup\""));
        assert!(html.contains("Sign in"));
    }

    #[test]
    fn test_home_signed_in_links_to_match() {
        let html = render_page(rsx! { HomeView { user: Some(test_support::user()) } });
        assert!(html.contains("Find your matches"));
        assert!(html.contains("Sophia Rodriguez"));
        assert!(html.contains("Sign out"));
    }
}
