//! The three static "about" pages.

use api::UserInfo;
use dioxus::prelude::*;

use crate::Layout;

#[component]
pub fn PhilosophyView(user: Option<UserInfo>) -> Element {
    rsx! {
        Layout { page_title: "Our Philosophy", user,
            article { class: "prose",
                h1 { "Our Philosophy" }
                p {
                    "At AuraMatch, we believe that every influencer possesses a unique energetic signature: an aura that transcends mere content creation. This aura encompasses their authentic essence, emotional resonance, and the intangible qualities that make audiences feel genuinely connected."
                }
                p {
                    "Brands, similarly, emit their own energy patterns through their values, mission, and the emotional experiences they create. The magic happens when these energies align."
                }
                blockquote {
                    "The relationship between an influencer's aura and a brand's energy is like quantum entanglement. When properly aligned, they create an instantaneous resonance that transcends traditional marketing boundaries, touching audiences on a deeper, more authentic level."
                }
                p {
                    "Our platform doesn't just match influencers with brands. It creates harmony that amplifies the authentic essence of both, resulting in partnerships that feel natural and drive meaningful engagement."
                }
            }
        }
    }
}

const PILLARS: &[(&str, &str)] = &[
    (
        "Influencer aura",
        "The authentic essence a creator projects through content, personality, and values.",
    ),
    (
        "Brand energy",
        "The emotional frequency a brand wants to evoke in its audience.",
    ),
    (
        "Resonance",
        "Find the perfect match based on authentic alignment of values and energy.",
    ),
];

#[component]
pub fn SynergyView(user: Option<UserInfo>) -> Element {
    rsx! {
        Layout { page_title: "Aura Synergy", user,
            article { class: "prose",
                h1 { "Aura Analytics: The Science of Influence" }
                p {
                    "When an influencer's aura resonates with a brand's energy, the result is content that feels natural and drives meaningful engagement because it is built on genuine alignment."
                }
            }
            section { class: "cards",
                for (title, body) in PILLARS.iter() {
                    div { key: "{title}", class: "card",
                        h3 { "{title}" }
                        p { "{body}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn MissionView(user: Option<UserInfo>) -> Element {
    rsx! {
        Layout { page_title: "Our Mission", user,
            article { class: "prose",
                h1 { "Our Mission" }
                p {
                    "AuraMatch seeks to transform how brands and influencers connect by decoding the invisible patterns that drive authentic influence and creating deeper, more meaningful partnerships."
                }
                blockquote {
                    "Our platform thrives on the belief that partnerships must be meaningful and authentic. AuraMatch is not merely about bridging gaps between brands and creators; it is about creating harmony where aura and brand energy amplify each other."
                }
                a { class: "button", href: "/contact", "Get in touch" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_page;

    #[test]
    fn test_about_pages_render_titles() {
        let html = render_page(rsx! { PhilosophyView { user: None::<UserInfo> } });
        assert!(html.contains("<h1>Our Philosophy</h1>"));
        assert!(html.contains("Our Philosophy · AuraMatch"));

        let html = render_page(rsx! { SynergyView { user: None::<UserInfo> } });
        assert!(html.contains("authentic alignment of values and energy"));

        let html = render_page(rsx! { MissionView { user: None::<UserInfo> } });
        assert!(html.contains("<h1>Our Mission</h1>"));
        assert!(html.contains("href=\"/contact\""));
    }
}
