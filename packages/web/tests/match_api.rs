mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::Value;

const ENDPOINT: &str = "/api/influencers/match";

#[tokio::test]
async fn test_malformed_json_is_500() {
    let response = send(&app(), post_json(ENDPOINT, "{not json")).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = serde_json::from_str(&text(response).await).unwrap();
    assert_eq!(body["error"], "Failed to process request");
}

#[tokio::test]
async fn test_missing_fields_is_400() {
    let app = app();
    for body in [r#"{}"#, r#"{"brand":"Eco label"}"#, r#"{"influencer":"creator"}"#] {
        let response = send(&app, post_json(ENDPOINT, body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body}");
        let body: Value = serde_json::from_str(&text(response).await).unwrap();
        assert_eq!(body["error"], "Missing required fields");
    }
}

#[tokio::test]
async fn test_matches_are_sorted_top_three() {
    let body = r#"{
        "brand": "Eco apparel",
        "influencer": "sustainable fashion creator",
        "brandValues": ["Sustainability", "Authenticity", "Community"],
        "missionStatement": "Clothes that last",
        "targetEmotion": "Hope"
    }"#;
    let response = send(&app(), post_json(ENDPOINT, body)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: Value = serde_json::from_str(&text(response).await).unwrap();
    let matches = body["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 3);

    let vibes: Vec<u64> = matches.iter().map(|m| m["vibeScore"].as_u64().unwrap()).collect();
    assert!(vibes.windows(2).all(|pair| pair[0] >= pair[1]));
    assert_eq!(matches[0]["name"], "Emma Thompson");
    assert_eq!(vibes[0], 100);

    for m in matches {
        let audience = m["audienceAlignment"].as_u64().unwrap();
        assert!((65..=100).contains(&audience));
        assert!(m["contentStyle"].is_string());
    }
}

#[tokio::test]
async fn test_api_is_not_guarded() {
    let body = r#"{"brand":"b","influencer":"i"}"#;
    let response = send(&app(), post_json(ENDPOINT, body)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(session_set_cookie(&response).is_none());
}

#[tokio::test]
async fn test_match_form_renders_results() {
    let app = app();
    let cookie = signed_up(&app).await;

    let response = send(&app, get("/match", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(text(response).await.contains("name=\"brandValues\""));

    let body = "brand=Eco+apparel&influencer=sustainable+fashion&brandValues=Sustainability\
        &brandValues=Authenticity&missionStatement=&targetEmotion=";
    let response = send(&app, post_form("/match", body, Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let html = text(response).await;
    assert!(html.contains("Your top matches"));
    assert_eq!(html.matches("match-card").count(), 3);
    assert!(html.contains("Emma Thompson"));
}

#[tokio::test]
async fn test_match_form_requires_brand_and_influencer() {
    let app = app();
    let cookie = signed_up(&app).await;

    let response = send(&app, post_form("/match", "brand=&influencer=", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(text(response).await.contains("Missing required fields"));
}

#[tokio::test]
async fn test_results_redirects_to_form() {
    let app = app();
    let cookie = signed_up(&app).await;

    let response = send(&app, get("/results", Some(&cookie))).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&response), Some("/match"));
}

#[tokio::test]
async fn test_blank_brand_counts_as_present() {
    let response = send(&app(), post_json(ENDPOINT, r#"{"brand":" ","influencer":"x"}"#)).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = serde_json::from_str(&text(response).await).unwrap();
    assert_eq!(body["matches"].as_array().unwrap().len(), 3);
}
