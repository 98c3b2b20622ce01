//! HTTP Endpoint Tests
//!
//! Drives the full router in-process with `oneshot` and checks status
//! codes, body shapes, and that rejected writes leave no trace.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use heroesdb::model::{NewHero, NewPower};
use heroesdb::rest_api::{rest_routes, ApiState};
use heroesdb::store::{seed_sample_data, EntityStore};
use serde_json::{json, Value};
use tower::ServiceExt;

// =============================================================================
// Test Utilities
// =============================================================================

const LONG_DESCRIPTION: &str = "gives the wielder super-human strengths";

fn seeded_store() -> Arc<EntityStore> {
    let store = EntityStore::in_memory();
    store
        .create_hero(NewHero::new("Kamala Khan", "Ms. Marvel"))
        .unwrap();
    store
        .create_hero(NewHero::new("Doreen Green", "Squirrel Girl"))
        .unwrap();
    store
        .create_power(NewPower::new("super strength", LONG_DESCRIPTION))
        .unwrap();
    Arc::new(store)
}

fn app(store: &Arc<EntityStore>) -> Router {
    rest_routes(ApiState::new(Arc::clone(store)))
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(value.to_string())
        }
        None => Body::empty(),
    };

    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };
    (status, value)
}

async fn send_raw(app: Router, method: Method, uri: &str, body: &'static str) -> StatusCode {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    app.oneshot(request).await.unwrap().status()
}

// =============================================================================
// Index
// =============================================================================

#[tokio::test]
async fn test_index_returns_html_banner() {
    let store = seeded_store();
    let (status, body) = send(app(&store), Method::GET, "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, Value::String("<h1>Heroes API</h1>".to_string()));
}

#[tokio::test]
async fn test_unknown_route_is_json_404() {
    let store = seeded_store();
    let (status, body) = send(app(&store), Method::GET, "/villains", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Route not found"}));
}

#[tokio::test]
async fn test_unsupported_method_is_json_405() {
    let store = seeded_store();
    let (status, body) = send(app(&store), Method::DELETE, "/heroes/1", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({"error": "Method not allowed"}));
    assert!(store.get_hero(1).unwrap().is_some());

    let (status, body) = send(app(&store), Method::GET, "/hero_powers", None).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(body, json!({"error": "Method not allowed"}));
}

// =============================================================================
// Heroes
// =============================================================================

#[tokio::test]
async fn test_hero_list_excludes_hero_powers() {
    let store = seeded_store();
    let (status, body) = send(app(&store), Method::GET, "/heroes", None).await;
    assert_eq!(status, StatusCode::OK);

    let heroes = body.as_array().unwrap();
    assert_eq!(heroes.len(), 2);
    for hero in heroes {
        let obj = hero.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(obj.contains_key("id"));
        assert!(obj.contains_key("name"));
        assert!(obj.contains_key("super_name"));
    }
}

#[tokio::test]
async fn test_hero_detail_includes_hero_powers() {
    let store = seeded_store();
    let (status, _) = send(
        app(&store),
        Method::POST,
        "/hero_powers",
        Some(json!({"strength": "Average", "hero_id": 1, "power_id": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = send(app(&store), Method::GET, "/heroes/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["super_name"], "Ms. Marvel");
    assert_eq!(
        body["hero_powers"],
        json!([{"id": 1, "strength": "Average", "hero_id": 1, "power_id": 1}])
    );

    let (_, body) = send(app(&store), Method::GET, "/heroes/2", None).await;
    assert_eq!(body["hero_powers"], json!([]));
}

#[tokio::test]
async fn test_missing_hero_is_404() {
    let store = seeded_store();
    let (status, body) = send(app(&store), Method::GET, "/heroes/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Hero not found"}));
}

#[tokio::test]
async fn test_non_numeric_hero_id_is_400() {
    let store = seeded_store();
    let (status, body) = send(app(&store), Method::GET, "/heroes/abc", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"].is_array());
}

#[tokio::test]
async fn test_undecodable_id_is_json_400() {
    let store = seeded_store();
    for uri in ["/heroes/%FF", "/powers/%FF"] {
        let (status, body) = send(app(&store), Method::GET, uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["errors"].as_array().map(Vec::len), Some(1), "{uri}: {body}");
    }

    let (status, body) = send(
        app(&store),
        Method::PATCH,
        "/powers/%FF",
        Some(json!({"description": LONG_DESCRIPTION})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["errors"].is_array());
}

// =============================================================================
// Powers
// =============================================================================

#[tokio::test]
async fn test_power_list_and_detail() {
    let store = seeded_store();
    let (status, body) = send(app(&store), Method::GET, "/powers", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([{"id": 1, "name": "super strength", "description": LONG_DESCRIPTION}])
    );

    let (status, body) = send(app(&store), Method::GET, "/powers/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "super strength");
    assert!(body.get("hero_powers").is_none());
}

#[tokio::test]
async fn test_missing_power_is_404() {
    let store = seeded_store();
    let (status, body) = send(app(&store), Method::GET, "/powers/42", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Power not found"}));
}

#[tokio::test]
async fn test_patch_short_description_is_rejected_and_unchanged() {
    let store = seeded_store();
    let (status, body) = send(
        app(&store),
        Method::PATCH,
        "/powers/1",
        Some(json!({"description": "short"})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"errors": ["Validation error: Description must be at least 20 characters long"]})
    );
    assert_eq!(
        store.get_power(1).unwrap().unwrap().description,
        LONG_DESCRIPTION
    );
}

#[tokio::test]
async fn test_patch_accepts_exactly_twenty_characters() {
    let store = seeded_store();
    let description = "a".repeat(20);
    let (status, body) = send(
        app(&store),
        Method::PATCH,
        "/powers/1",
        Some(json!({"description": description})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 1, "name": "super strength", "description": description})
    );
    assert_eq!(store.get_power(1).unwrap().unwrap().description, description);
}

#[tokio::test]
async fn test_patch_nineteen_characters_is_rejected() {
    let store = seeded_store();
    let (status, _) = send(
        app(&store),
        Method::PATCH,
        "/powers/1",
        Some(json!({"description": "a".repeat(19)})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_patch_missing_power_wins_over_bad_body() {
    let store = seeded_store();
    let (status, body) = send(
        app(&store),
        Method::PATCH,
        "/powers/999",
        Some(json!({"description": "short"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Power not found"}));
}

#[tokio::test]
async fn test_patch_malformed_body_is_400() {
    let store = seeded_store();
    let status = send_raw(app(&store), Method::PATCH, "/powers/1", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let status = send_raw(app(&store), Method::PATCH, "/powers/1", "").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        store.get_power(1).unwrap().unwrap().description,
        LONG_DESCRIPTION
    );
}

// =============================================================================
// Hero Powers
// =============================================================================

#[tokio::test]
async fn test_create_hero_power() {
    let store = seeded_store();
    let (status, body) = send(
        app(&store),
        Method::POST,
        "/hero_powers",
        Some(json!({"strength": "Weak", "hero_id": 1, "power_id": 1})),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 1);
    assert_eq!(body["strength"], "Weak");
    assert_eq!(body["hero_id"], 1);
    assert_eq!(body["power_id"], 1);
    assert_eq!(
        body["hero"],
        json!({"id": 1, "name": "Kamala Khan", "super_name": "Ms. Marvel"})
    );
    assert_eq!(body["power"]["description"], LONG_DESCRIPTION);
    assert_eq!(store.list_hero_powers().unwrap().len(), 1);
}

#[tokio::test]
async fn test_invalid_strength_is_400_and_not_persisted() {
    let store = seeded_store();
    for strength in [json!("Mighty"), json!("strong"), json!(""), json!(3), Value::Null] {
        let (status, body) = send(
            app(&store),
            Method::POST,
            "/hero_powers",
            Some(json!({"strength": strength, "hero_id": 1, "power_id": 1})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"errors": ["Invalid strength value"]}));
    }
    assert!(store.list_hero_powers().unwrap().is_empty());
}

#[tokio::test]
async fn test_strength_checked_before_references() {
    let store = seeded_store();
    let (status, body) = send(
        app(&store),
        Method::POST,
        "/hero_powers",
        Some(json!({"strength": "Mighty", "hero_id": 999, "power_id": 999})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"errors": ["Invalid strength value"]}));
}

#[tokio::test]
async fn test_missing_reference_is_404() {
    let store = seeded_store();
    for payload in [
        json!({"strength": "Strong", "hero_id": 999, "power_id": 1}),
        json!({"strength": "Strong", "hero_id": 1, "power_id": 999}),
        json!({"strength": "Strong", "hero_id": 1}),
        json!({"strength": "Strong", "hero_id": "1", "power_id": 1}),
    ] {
        let (status, body) = send(app(&store), Method::POST, "/hero_powers", Some(payload)).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"errors": ["Hero or Power not found"]}));
    }
    assert!(store.list_hero_powers().unwrap().is_empty());
}

#[tokio::test]
async fn test_malformed_hero_power_body_is_400() {
    let store = seeded_store();
    let status = send_raw(app(&store), Method::POST, "/hero_powers", "[]").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_seeded_store_serves_every_hero() {
    let store = Arc::new(EntityStore::in_memory());
    seed_sample_data(&store).unwrap();

    let (_, heroes) = send(app(&store), Method::GET, "/heroes", None).await;
    for hero in heroes.as_array().unwrap() {
        let uri = format!("/heroes/{}", hero["id"]);
        let (status, detail) = send(app(&store), Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(detail["hero_powers"].as_array().unwrap().len(), 1);
    }
}
