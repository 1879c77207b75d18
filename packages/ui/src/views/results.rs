use api::matching::MatchRequest;
use api::{InfluencerProfile, UserInfo};
use dioxus::prelude::*;

use crate::Layout;

#[component]
fn MatchCard(rank: usize, profile: InfluencerProfile) -> Element {
    rsx! {
        article { class: "card match-card",
            header {
                span { class: "rank", "#{rank}" }
                h3 { "{profile.name}" }
                p { class: "muted", "{profile.platform} · {profile.niche}" }
            }
            div { class: "scores",
                div { class: "score",
                    span { class: "score-value", "{profile.vibe_score}%" }
                    span { class: "score-label", "Vibe score" }
                }
                div { class: "score",
                    span { class: "score-value", "{profile.audience_alignment}%" }
                    span { class: "score-label", "Audience alignment" }
                }
            }
            p { "{profile.details}" }
            ul { class: "stats",
                li { "Followers: {profile.followers}" }
                li { "Engagement: {profile.engagement}" }
                li { "Style: {profile.content_style}" }
            }
            ul { class: "tags",
                for value in profile.values.iter() {
                    li { key: "{value}", class: "tag", "{value}" }
                }
            }
        }
    }
}

/// Top matches for a submitted [`MatchRequest`].
#[component]
pub fn ResultsView(
    user: Option<UserInfo>,
    request: MatchRequest,
    matches: Vec<InfluencerProfile>,
) -> Element {
    rsx! {
        Layout { page_title: "Your Matches", user,
            section { class: "results",
                h1 { "Your top matches" }
                p { class: "lead", "For: {request.brand}" }
                if matches.is_empty() {
                    p { class: "muted", "No influencers matched this brand." }
                }
                div { class: "cards",
                    for (index, profile) in matches.into_iter().enumerate() {
                        MatchCard { key: "{index}", rank: index + 1, profile }
                    }
                }
                a { class: "button button-secondary", href: "/match", "Start a new search" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_page;
    use api::models::catalog;

    #[test]
    fn test_results_render_in_order() {
        let matches: Vec<_> = catalog().into_iter().take(3).collect();
        let request = MatchRequest {
            brand: "Eco apparel".into(),
            influencer: "Fashion creator".into(),
            ..Default::default()
        };
        let html = render_page(rsx! {
            ResultsView { user: None::<UserInfo>, request, matches }
        });
        let emma = html.find("Emma Thompson").unwrap();
        let michael = html.find("Michael Chen").unwrap();
        let sophia = html.find("Sophia Rodriguez").unwrap();
        assert!(emma < michael && michael < sophia);
        assert!(html.contains("92%"));
        assert!(html.contains("For: Eco apparel"));
        assert!(!html.contains("Jackson Wright"));
    }

    #[test]
    fn test_results_empty() {
        let html = render_page(rsx! {
            ResultsView { user: None::<UserInfo>, request: MatchRequest::default(), matches: Vec::new() }
        });
        assert!(html.contains("No influencers matched this brand."));
    }
}
