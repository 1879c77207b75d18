//! Influencer profiles and the built-in catalog.

use serde::{Deserialize, Serialize};

/// One candidate as returned by the match endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerProfile {
    pub name: String,
    pub platform: String,
    /// Display string, e.g. `"1.2M"`.
    pub followers: String,
    /// Display string, e.g. `"4.8%"`.
    pub engagement: String,
    pub niche: String,
    pub details: String,
    pub values: Vec<String>,
    pub vibe_score: u32,
    pub audience_alignment: u32,
    pub content_style: String,
}

#[allow(clippy::too_many_arguments)]
fn profile(
    name: &str,
    platform: &str,
    followers: &str,
    engagement: &str,
    niche: &str,
    details: &str,
    values: &[&str],
    vibe_score: u32,
    audience_alignment: u32,
    content_style: &str,
) -> InfluencerProfile {
    InfluencerProfile {
        name: name.into(),
        platform: platform.into(),
        followers: followers.into(),
        engagement: engagement.into(),
        niche: niche.into(),
        details: details.into(),
        values: values.iter().map(|v| v.to_string()).collect(),
        vibe_score,
        audience_alignment,
        content_style: content_style.into(),
    }
}

/// The fixed list of fictional influencers scored by the catalog strategy.
pub fn catalog() -> Vec<InfluencerProfile> {
    vec![
        profile(
            "Emma Thompson",
            "YouTube",
            "1.2M",
            "4.8%",
            "Sustainable Fashion",
            "Creates authentic content focused on sustainable fashion and lifestyle. Emma's content reflects a deep commitment to environmental causes, aligning perfectly with brands that prioritize sustainability and ethical practices.",
            &["Sustainability", "Authenticity", "Community"],
            92,
            88,
            "Educational & Inspirational",
        ),
        profile(
            "Michael Chen",
            "Instagram",
            "850K",
            "5.2%",
            "Tech & Lifestyle",
            "Michael's analytical approach to tech reviews connects with audiences seeking honesty and depth. His vibe balances innovation with accessibility, making complex topics approachable.",
            &["Innovation", "Authenticity", "Education"],
            87,
            79,
            "Analytical & Instructive",
        ),
        profile(
            "Sophia Rodriguez",
            "TikTok",
            "2.4M",
            "7.1%",
            "Beauty & Wellness",
            "Sophia creates content that celebrates self-expression and holistic wellness. Her vibrant energy and inclusive approach resonate with younger audiences seeking authenticity in beauty content.",
            &["Inclusivity", "Wellness", "Empowerment"],
            94,
            91,
            "Energetic & Transformational",
        ),
        profile(
            "Jackson Wright",
            "Instagram",
            "1.5M",
            "4.3%",
            "Adventure & Travel",
            "Jackson's content captures breathtaking landscapes and adrenaline-filled adventures. His authentic storytelling inspires viewers to explore the outdoors and respect nature.",
            &["Adventure", "Sustainability", "Authenticity"],
            89,
            82,
            "Visual & Narrative",
        ),
        profile(
            "Aisha Patel",
            "YouTube",
            "970K",
            "6.2%",
            "Educational Content",
            "Aisha breaks down complex topics in science and technology with clarity and enthusiasm. Her content is both informative and entertaining, appealing to curious minds.",
            &["Education", "Innovation", "Inclusivity"],
            91,
            85,
            "Informative & Engaging",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 5);
        assert!(catalog.iter().all(|p| p.values.len() == 3));
        assert_eq!(catalog[2].name, "Sophia Rodriguez");
        assert_eq!(catalog[2].vibe_score, 94);
    }

    #[test]
    fn test_profile_serializes_camel_case() {
        let json = serde_json::to_value(&catalog()[0]).unwrap();
        assert_eq!(json["vibeScore"], 92);
        assert_eq!(json["audienceAlignment"], 88);
        assert_eq!(json["contentStyle"], "Educational & Inspirational");
    }
}
