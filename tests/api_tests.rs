// HTTP API tests driven through the router with tower's oneshot

#[path = "integration/mocks/mod.rs"]
mod mocks;

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use kasha_site::{
    assistant::{AssistantService, CHAT_GREETING, NOT_CONFIGURED_MESSAGE},
    catalog::Catalog,
    config::{AiConfig, Config, EstimatorConfig},
    content::SiteContent,
    estimator::{CostEstimator, RangeFactors},
    handlers::AppState,
    providers::build_provider,
    server::{build_app_state, create_router},
};
use mocks::{setup_gemini_mock, IMAGE_MODEL, TEST_API_KEY, TEXT_MODEL};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    let config = Config::default();
    let state = build_app_state(&config).unwrap();
    create_router(state, None, &config).unwrap()
}

fn app_with_ai(base_url: String) -> Router {
    let config = Config::default();
    let ai = AiConfig {
        api_key: Some(TEST_API_KEY.to_string()),
        base_url,
        text_model: TEXT_MODEL.to_string(),
        image_model: IMAGE_MODEL.to_string(),
        ..AiConfig::default()
    };
    let state = AppState::new(
        CostEstimator::new(Arc::new(Catalog::builtin().unwrap()), RangeFactors::default()),
        EstimatorConfig::default(),
        SiteContent::builtin().unwrap(),
        AssistantService::new(build_provider(&ai), ai.system_instruction.clone()),
    );
    create_router(state, None, &config).unwrap()
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

async fn post_json(app: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_health_and_ready() {
    let (status, body) = get(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = get(app(), "/ready").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["eventTypes"], 6);
    assert_eq!(body["aiEnabled"], false);
}

#[tokio::test]
async fn test_catalog_endpoint() {
    let (status, body) = get(app(), "/api/catalog").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["defaultEventTypeId"], "weddings");
    assert_eq!(body["eventTypes"].as_array().unwrap().len(), 6);
    assert_eq!(body["addonGroups"].as_array().unwrap().len(), 16);
    assert_eq!(body["guestRange"]["min"], 10);
    assert_eq!(body["guestRange"]["max"], 2000);
    assert_eq!(body["guestRange"]["step"], 10);
    assert_eq!(body["guestRange"]["default"], 100);
    assert_eq!(body["rangeFactors"]["low"], 0.9);
}

#[tokio::test]
async fn test_event_type_endpoint() {
    let (status, body) = get(app(), "/api/catalog/event-types/sports-events").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["eventType"]["baseCost"], 400_000);
    let groups: Vec<&str> = body["addonGroups"]
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["groupId"].as_str().unwrap())
        .collect();
    assert_eq!(
        groups,
        vec!["production_technical_sports", "guest_management_sports"]
    );

    let (status, body) = get(app(), "/api/catalog/event-types/yachts").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["type"], "not_found");
}

#[tokio::test]
async fn test_estimate_endpoint() {
    let (status, body) = post_json(
        app(),
        "/api/estimate",
        json!({
            "eventTypeId": "weddings",
            "guestCount": 100,
            "selectedAddonIds": ["floral_design_luxury", "curated_gifting_wedding", "keynote_speaker"]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["guestCost"], 750_000);
    assert_eq!(body["addonsCost"], 300_000);
    assert_eq!(body["subtotal"], 1_550_000);
    assert_eq!(body["lineItems"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_estimate_does_not_clamp_guests() {
    let (status, body) = post_json(
        app(),
        "/api/estimate",
        json!({"eventTypeId": "weddings", "guestCount": 5000}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["guestCost"], 37_500_000);
}

#[tokio::test]
async fn test_estimate_unknown_event_type_is_zero() {
    let (status, body) = post_json(
        app(),
        "/api/estimate",
        json!({"eventTypeId": "moon-landing", "guestCount": 100}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["subtotal"], 0);
    assert_eq!(body["eventTypeName"], "");
}

#[tokio::test]
async fn test_estimate_rejects_negative_guests() {
    let (status, _) = post_json(
        app(),
        "/api/estimate",
        json!({"eventTypeId": "weddings", "guestCount": -1}),
    )
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn test_estimate_summary_is_text_attachment() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/estimate/summary")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(
                    json!({"eventTypeId": "weddings", "guestCount": 100}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"KaSha_Event_Estimate.txt\""
    );
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let text = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(text.contains("Estimated Cost: ₹11,25,000 - ₹13,75,000"));
    assert!(text.contains("Subtotal"));
    assert!(text.contains("This is a preliminary estimate."));
}

#[tokio::test]
async fn test_content_endpoints() {
    let (status, body) = get(app(), "/api/content/brand").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["email"], "info@kasha.co.in");

    let (_, body) = get(app(), "/api/content/services").await;
    assert_eq!(body.as_array().unwrap().len(), 7);

    let (status, body) = get(app(), "/api/content/services/weddings").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Weddings");

    let (status, _) = get(app(), "/api/content/services/yachts").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = get(app(), "/api/content/portfolio?category=weddings").await;
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 3);
    assert!(items.iter().all(|i| i["category"] == "weddings"));

    let (_, body) = get(app(), "/api/content/team").await;
    assert_eq!(body.as_array().unwrap().len(), 6);

    let (_, body) = get(app(), "/api/content/careers").await;
    assert_eq!(body[2]["employmentType"], "Internship");

    let (_, body) = get(app(), "/api/content/testimonials").await;
    assert_eq!(body.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_blog_endpoints() {
    let (_, body) = get(app(), "/api/content/blog?tag=planning").await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    let slug = "top-5-destination-wedding-locations-2024";
    let (status, body) = get(app(), &format!("/api/content/blog/{}", slug)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["author"], "Rajat Tyagi");

    let (status, _) = get(app(), "/api/content/blog/missing").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_ai_without_key() {
    let (status, body) = post_json(app(), "/api/ai/ideas", json!({"eventType": "Gala"})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], NOT_CONFIGURED_MESSAGE);

    let (status, body) = post_json(app(), "/api/ai/image", json!({"prompt": "a stage"})).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"]["type"], "provider_disabled");

    let (status, body) = post_json(app(), "/api/ai/ideas", json!({"eventType": "  "})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["message"], "Please enter an event type.");
}

#[tokio::test]
async fn test_ai_greeting_and_examples() {
    let (_, body) = get(app(), "/api/ai/chat/greeting").await;
    assert_eq!(body["text"], CHAT_GREETING);

    let (_, body) = get(app(), "/api/ai/image/examples").await;
    assert_eq!(body["prompts"].as_array().unwrap().len(), 4);

    let (_, body) = get(app(), "/api/ai/image/examples?count=2").await;
    assert_eq!(body["prompts"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_ai_routes_with_mocked_gemini() {
    let server = setup_gemini_mock("1. Maharaja Nights", "cG5n").await;
    let base_url = format!("{}/v1beta", server.uri());

    let (status, body) = post_json(
        app_with_ai(base_url.clone()),
        "/api/ai/ideas",
        json!({"eventType": "Wedding"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "1. Maharaja Nights");

    let (status, body) = post_json(
        app_with_ai(base_url.clone()),
        "/api/ai/chat",
        json!({"history": [
            {"role": "model", "text": CHAT_GREETING},
            {"role": "user", "text": "What do you offer?"}
        ]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["text"], "1. Maharaja Nights");

    let (status, body) = post_json(
        app_with_ai(base_url),
        "/api/ai/image",
        json!({"prompt": "A gold stage in Goa"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["mimeType"], "image/png");
    assert_eq!(body["dataUrl"], "data:image/png;base64,cG5n");
    assert_eq!(body["fileName"], "A_gold_stage_in_Goa_kasha_ai.png");
}
