//! # Brand / influencer matching
//!
//! Scoring is deliberately simple arithmetic over a handful of candidates:
//!
//! 1. value overlap: share of the brand's chosen values the candidate also holds
//!    (`50` when the brand chose none);
//! 2. vibe score: `0.7 * baseline + 0.3 * overlap`, plus a flat bonus when the
//!    candidate's niche is mentioned in the brand or influencer description,
//!    rounded and clamped to `70..=100`;
//! 3. audience alignment: `0.8 * baseline` plus uniform jitter in `[0, 10)`, rounded and
//!    clamped to `65..=100`;
//! 4. stable sort by vibe score, descending, keep the top three.
//!
//! Candidates come either from the fixed [`catalog`] or from [`generator`], which makes
//! them up from random tokens. Nothing is kept between calls.

pub mod generator;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::{catalog, InfluencerProfile};

/// Values a brand can pick on the match form.
pub const AVAILABLE_VALUES: [&str; 12] = [
    "Authenticity",
    "Innovation",
    "Sustainability",
    "Inclusivity",
    "Wellness",
    "Creativity",
    "Community",
    "Empowerment",
    "Education",
    "Adventure",
    "Minimalism",
    "Luxury",
];

pub const MAX_BRAND_VALUES: usize = 5;
pub const TOP_MATCHES: usize = 3;

const VIBE_MIN: i64 = 70;
const VIBE_MAX: i64 = 100;
const AUDIENCE_MIN: i64 = 65;
const AUDIENCE_MAX: i64 = 100;
const BASELINE_VIBE_WEIGHT: f64 = 0.7;
const VALUE_WEIGHT: f64 = 0.3;
const AUDIENCE_WEIGHT: f64 = 0.8;
const CONTENT_BONUS: f64 = 10.0;
const NEUTRAL_VALUE_SCORE: f64 = 50.0;
const MAX_JITTER: f64 = 10.0;

/// Where candidates come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrategy {
    #[default]
    Catalog,
    Generated,
}

/// Brand description and selection criteria.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MatchRequest {
    pub brand: String,
    pub influencer: String,
    pub brand_values: Vec<String>,
    pub mission_statement: String,
    pub target_emotion: String,
}

impl MatchRequest {
    /// `brand` and `influencer` are the only required fields. Whitespace counts as present.
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.brand.is_empty() || self.influencer.is_empty() {
            return Err(ApiError::MissingFields);
        }
        Ok(())
    }

    /// Build a request from url-encoded form pairs, where `brandValues` may repeat.
    ///
    /// Duplicate values are dropped and at most [`MAX_BRAND_VALUES`] are kept.
    pub fn from_form_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut request = MatchRequest::default();
        for (key, value) in pairs {
            match key.as_str() {
                "brand" => request.brand = value,
                "influencer" => request.influencer = value,
                "missionStatement" => request.mission_statement = value,
                "targetEmotion" => request.target_emotion = value,
                "brandValues" => {
                    if request.brand_values.len() < MAX_BRAND_VALUES
                        && !value.is_empty()
                        && !request.brand_values.contains(&value)
                    {
                        request.brand_values.push(value);
                    }
                }
                _ => {}
            }
        }
        request
    }
}

/// Percentage of `brand_values` that `values` shares.
pub fn value_score(values: &[String], brand_values: &[String]) -> f64 {
    if brand_values.is_empty() {
        return NEUTRAL_VALUE_SCORE;
    }
    let shared = values.iter().filter(|v| brand_values.contains(v)).count();
    shared as f64 / brand_values.len() as f64 * 100.0
}

fn mentions_niche(profile: &InfluencerProfile, request: &MatchRequest) -> bool {
    let niche = profile.niche.to_lowercase();
    request.influencer.to_lowercase().contains(&niche) || request.brand.to_lowercase().contains(&niche)
}

fn clamp_round(score: f64, min: i64, max: i64) -> u32 {
    (score.round() as i64).clamp(min, max) as u32
}

/// Rescore one candidate for `request`. `jitter` is added to the audience score.
pub fn score_profile(
    profile: &InfluencerProfile,
    request: &MatchRequest,
    jitter: f64,
) -> InfluencerProfile {
    let values = value_score(&profile.values, &request.brand_values);
    let bonus = if mentions_niche(profile, request) {
        CONTENT_BONUS
    } else {
        0.0
    };

    let vibe = profile.vibe_score as f64 * BASELINE_VIBE_WEIGHT + values * VALUE_WEIGHT + bonus;
    let audience = profile.audience_alignment as f64 * AUDIENCE_WEIGHT + jitter;

    InfluencerProfile {
        vibe_score: clamp_round(vibe, VIBE_MIN, VIBE_MAX),
        audience_alignment: clamp_round(audience, AUDIENCE_MIN, AUDIENCE_MAX),
        ..profile.clone()
    }
}

/// Score every candidate, sort by vibe score (ties keep input order), keep the top three.
pub fn rank<R: Rng + ?Sized>(
    candidates: Vec<InfluencerProfile>,
    request: &MatchRequest,
    rng: &mut R,
) -> Vec<InfluencerProfile> {
    let mut scored: Vec<_> = candidates
        .iter()
        .map(|profile| score_profile(profile, request, rng.gen_range(0.0..MAX_JITTER)))
        .collect();
    scored.sort_by(|a, b| b.vibe_score.cmp(&a.vibe_score));
    scored.truncate(TOP_MATCHES);
    scored
}

/// Run `strategy` for `request`.
pub fn find_matches<R: Rng + ?Sized>(
    strategy: MatchStrategy,
    request: &MatchRequest,
    rng: &mut R,
) -> Vec<InfluencerProfile> {
    let candidates = match strategy {
        MatchStrategy::Catalog => catalog(),
        MatchStrategy::Generated => {
            generator::generate_candidates(rng, generator::GENERATED_CANDIDATES)
        }
    };
    rank(candidates, request, rng)
}
