//! Random candidate generator: invents influencers from token lists instead of reading
//! the catalog. Baselines are drawn so that the usual scoring still applies.

use rand::seq::SliceRandom;
use rand::Rng;

use super::AVAILABLE_VALUES;
use crate::models::InfluencerProfile;

/// How many candidates one call produces before ranking.
pub const GENERATED_CANDIDATES: usize = 8;

const FIRST_NAMES: &[&str] = &[
    "Maya", "Leo", "Priya", "Noah", "Zara", "Ethan", "Lina", "Omar", "Chloe", "Kai",
];
const LAST_NAMES: &[&str] = &[
    "Rivera", "Nakamura", "Okafor", "Bennett", "Haddad", "Larsen", "Moreau", "Singh",
];
const PLATFORMS: &[&str] = &["YouTube", "Instagram", "TikTok", "Twitch", "Pinterest"];
const NICHES: &[&str] = &[
    "Sustainable Fashion",
    "Tech & Lifestyle",
    "Beauty & Wellness",
    "Adventure & Travel",
    "Educational Content",
    "Fitness & Nutrition",
    "Home & Design",
    "Food & Culture",
];
const CONTENT_STYLES: &[&str] = &[
    "Educational & Inspirational",
    "Analytical & Instructive",
    "Energetic & Transformational",
    "Visual & Narrative",
    "Informative & Engaging",
    "Playful & Candid",
];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, tokens: &[&'a str]) -> &'a str {
    tokens[rng.gen_range(0..tokens.len())]
}

fn format_followers(count: u32) -> String {
    if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else {
        format!("{}K", count / 1_000)
    }
}

fn candidate<R: Rng + ?Sized>(rng: &mut R) -> InfluencerProfile {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES);
    let platform = pick(rng, PLATFORMS);
    let niche = pick(rng, NICHES);
    let style = pick(rng, CONTENT_STYLES);
    let values = AVAILABLE_VALUES
        .choose_multiple(rng, 3)
        .map(|v| v.to_string())
        .collect();

    InfluencerProfile {
        name: format!("{first} {last}"),
        platform: platform.to_string(),
        followers: format_followers(rng.gen_range(50_000..3_000_000)),
        engagement: format!("{:.1}%", rng.gen_range(2.0..9.0)),
        niche: niche.to_string(),
        details: format!(
            "{first} shares {} content on {platform} with a {} voice that keeps audiences coming back.",
            niche.to_lowercase(),
            style.to_lowercase(),
        ),
        values,
        vibe_score: rng.gen_range(75..=95),
        audience_alignment: rng.gen_range(70..=95),
        content_style: style.to_string(),
    }
}

/// `count` freshly invented candidates.
pub fn generate_candidates<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<InfluencerProfile> {
    (0..count).map(|_| candidate(rng)).collect()
}
