use api::matching::{MatchRequest, AVAILABLE_VALUES, MAX_BRAND_VALUES};
use api::UserInfo;
use dioxus::prelude::*;

use crate::{Alert, AlertKind, Layout};

/// Brand questionnaire that posts to `/match`.
#[component]
pub fn MatchFormView(
    user: Option<UserInfo>,
    request: MatchRequest,
    error: Option<String>,
) -> Element {
    let values: Vec<(&'static str, bool)> = AVAILABLE_VALUES
        .iter()
        .map(|value| (*value, request.brand_values.iter().any(|chosen| chosen == value)))
        .collect();

    rsx! {
        Layout { page_title: "Find Your Matches", user,
            section { class: "form-page",
                h1 { "Find your perfect influencer match" }
                p { class: "lead",
                    "Tell us about your brand and we'll find creators whose aura resonates with your energy."
                }
                {error.map(|message| rsx! {
                    Alert { kind: AlertKind::Error, message }
                })}
                form { class: "form", method: "post", action: "/match",
                    label { r#for: "brand", "Brand description" }
                    textarea { id: "brand", name: "brand", rows: "3", "{request.brand}" }

                    label { r#for: "influencer", "Ideal influencer" }
                    textarea { id: "influencer", name: "influencer", rows: "3", "{request.influencer}" }

                    fieldset { class: "checkboxes values",
                        legend { "Brand values (choose up to {MAX_BRAND_VALUES})" }
                        for (value, checked) in values {
                            label { key: "{value}",
                                input { name: "brandValues", r#type: "checkbox", value, checked }
                                " {value}"
                            }
                        }
                    }

                    label { r#for: "missionStatement", "Mission statement" }
                    textarea { id: "missionStatement", name: "missionStatement", rows: "3", "{request.mission_statement}" }

                    label { r#for: "targetEmotion", "Target emotion" }
                    input { id: "targetEmotion", name: "targetEmotion", r#type: "text", value: "{request.target_emotion}" }

                    button { class: "button", r#type: "submit", "Find matches" }
                }
            }
        }
    }
}
