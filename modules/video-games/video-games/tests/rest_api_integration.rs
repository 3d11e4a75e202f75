//! Integration tests for the video games REST API over an in-memory database.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::http::{StatusCode, header};

mod support;
use support::{TestContext, body_json, body_text, expect_status, game_json};

#[tokio::test]
async fn test_list_games_empty() {
    let ctx = TestContext::new().await;

    let response = ctx.get("/api/v1/games").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn test_create_game_returns_location() {
    let ctx = TestContext::new().await;
    let body = serde_json::json!({
        "title": "Minecraft",
        "genre": "Open-world",
        "developer": "Mojang Studios",
        "price": 26.99
    });

    let response = ctx.post_json("/api/v1/games", &body).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let location = response
        .headers()
        .get(header::LOCATION)
        .expect("Location header")
        .to_str()
        .unwrap()
        .to_owned();
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert!(id > 0);
    assert_eq!(location, format!("/api/v1/games/{id}"));
    assert_eq!(created["title"], "Minecraft");
    assert_eq!(created["genre"], "Open-world");
    assert_eq!(created["developer"], "Mojang Studios");
    assert_eq!(created["price"], 26.99);
}

#[tokio::test]
async fn test_created_game_is_listed_and_fetchable() {
    let ctx = TestContext::new().await;
    let created = body_json(
        ctx.post_json("/api/v1/games", &game_json("Halo", 20.0))
            .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let fetched = ctx.get(&format!("/api/v1/games/{id}")).await;
    assert_eq!(fetched.status(), StatusCode::OK);
    assert_eq!(body_json(fetched).await, created);

    let listed = body_json(ctx.get("/api/v1/games").await).await;
    assert_eq!(listed, serde_json::json!([created]));
}

#[tokio::test]
async fn test_list_is_in_id_order() {
    let ctx = TestContext::new().await;
    for title in ["Halo", "Portal", "Tetris"] {
        let response = ctx.post_json("/api/v1/games", &game_json(title, 10.0)).await;
        expect_status(response, StatusCode::CREATED).await;
    }

    let listed = body_json(ctx.get("/api/v1/games").await).await;
    let titles: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|g| g["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Halo", "Portal", "Tetris"]);
}

#[tokio::test]
async fn test_duplicate_title_conflicts() {
    let ctx = TestContext::new().await;

    let first = ctx.post_json("/api/v1/games", &game_json("Halo", 20.0)).await;
    expect_status(first, StatusCode::CREATED).await;

    let second = ctx.post_json("/api/v1/games", &game_json("Halo", 25.0)).await;
    let body = expect_status(second, StatusCode::CONFLICT).await;
    assert_eq!(body, "A video game with the title of Halo already exists.");

    let listed = body_json(ctx.get("/api/v1/games").await).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_price_below_minimum_is_rejected() {
    let ctx = TestContext::new().await;

    let response = ctx.post_json("/api/v1/games", &game_json("Halo", 3.0)).await;

    let body = expect_status(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body, "Video game price must be less than \u{a3}5.00 (GBP)., ");
}

#[tokio::test]
async fn test_huge_price_is_a_validation_failure() {
    let ctx = TestContext::new().await;

    let response = ctx.post_json("/api/v1/games", &game_json("Halo", 1e30)).await;

    let body = expect_status(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body, "Video game price must be less than \u{a3}30.00 (GBP)., ");
}

#[tokio::test]
async fn test_price_with_three_decimals_is_rejected_not_rounded() {
    let ctx = TestContext::new().await;

    let response = ctx.post_json("/api/v1/games", &game_json("Halo", 10.555)).await;

    let body = expect_status(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(
        body,
        "Video game price must have no more than 2 decimal places., "
    );
    let listed = body_json(ctx.get("/api/v1/games").await).await;
    assert_eq!(listed, serde_json::json!([]));
}

#[tokio::test]
async fn test_two_decimal_price_is_returned_unchanged() {
    let ctx = TestContext::new().await;

    let created = ctx.post_json("/api/v1/games", &game_json("Halo", 10.55)).await;
    let created = body_json(created).await;
    let fetched = body_json(
        ctx.get(&format!("/api/v1/games/{}", created["id"]))
            .await,
    )
    .await;

    assert_eq!(created["price"], 10.55);
    assert_eq!(fetched["price"], 10.55);
}

#[tokio::test]
async fn test_blank_title_is_rejected() {
    let ctx = TestContext::new().await;

    let response = ctx.post_json("/api/v1/games", &game_json("   ", 10.0)).await;

    let body = expect_status(response, StatusCode::BAD_REQUEST).await;
    assert!(body.contains("Video game title must not be left blank."));
    let listed = body_json(ctx.get("/api/v1/games").await).await;
    assert_eq!(listed, serde_json::json!([]));
}

#[tokio::test]
async fn test_missing_fields_report_every_violation() {
    let ctx = TestContext::new().await;

    let response = ctx.post_json("/api/v1/games", &serde_json::json!({})).await;

    let body = expect_status(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(
        body,
        "Video game title must not be left blank., \
         Video game genre must not be left blank., \
         Video game developer must not be left blank., \
         Video game price must not be left blank., "
    );
}

#[tokio::test]
async fn test_get_unknown_game_is_not_found() {
    let ctx = TestContext::new().await;

    let response = ctx.get("/api/v1/games/999").await;

    let body = expect_status(response, StatusCode::NOT_FOUND).await;
    assert_eq!(body, "A video game with an ID of 999 does not exist.");
}

#[tokio::test]
async fn test_update_forces_path_id() {
    let ctx = TestContext::new().await;
    let created = body_json(
        ctx.post_json("/api/v1/games", &game_json("Halo", 20.0))
            .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let mut body = game_json("Halo 2", 29.5);
    body["id"] = serde_json::json!(id + 100);
    let response = ctx.put_json(&format!("/api/v1/games/{id}"), &body).await;

    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["id"].as_i64().unwrap(), id);
    assert_eq!(updated["title"], "Halo 2");
    assert_eq!(updated["price"], 29.5);

    let listed = body_json(ctx.get("/api/v1/games").await).await;
    assert_eq!(listed, serde_json::json!([updated]));
}

#[tokio::test]
async fn test_update_unknown_game_leaves_store_unchanged() {
    let ctx = TestContext::new().await;

    let response = ctx
        .put_json("/api/v1/games/42", &game_json("Halo", 20.0))
        .await;

    let body = expect_status(response, StatusCode::NOT_FOUND).await;
    assert_eq!(body, "A video game with an ID of 42 does not exist.");
    let listed = body_json(ctx.get("/api/v1/games").await).await;
    assert_eq!(listed, serde_json::json!([]));
}

#[tokio::test]
async fn test_update_validates_body() {
    let ctx = TestContext::new().await;
    let created = body_json(
        ctx.post_json("/api/v1/games", &game_json("Halo", 20.0))
            .await,
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let response = ctx
        .put_json(&format!("/api/v1/games/{id}"), &game_json("Halo", 31.0))
        .await;

    let body = expect_status(response, StatusCode::BAD_REQUEST).await;
    assert_eq!(body, "Video game price must be less than \u{a3}30.00 (GBP)., ");
}

#[tokio::test]
async fn test_delete_twice() {
    let ctx = TestContext::new().await;
    let created = body_json(
        ctx.post_json("/api/v1/games", &game_json("Halo", 20.0))
            .await,
    )
    .await;
    let uri = format!("/api/v1/games/{}", created["id"]);

    let first = ctx.delete(&uri).await;
    assert_eq!(first.status(), StatusCode::OK);
    assert_eq!(body_text(first).await, "");

    let second = ctx.delete(&uri).await;
    assert_eq!(second.status(), StatusCode::NOT_FOUND);

    let fetched = ctx.get(&uri).await;
    assert_eq!(fetched.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_json_is_rejected_by_extractor() {
    let ctx = TestContext::new().await;
    let request = axum::http::Request::post("/api/v1/games")
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();

    let response = ctx.send(request).await;

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let ctx = TestContext::new().await;

    let response = ctx.get("/api/v1/openapi.json").await;

    assert_eq!(response.status(), StatusCode::OK);
    let doc = body_json(response).await;
    assert!(doc["paths"]["/api/v1/games"]["get"].is_object());
    assert!(doc["paths"]["/api/v1/games"]["post"].is_object());
    assert!(doc["paths"]["/api/v1/games/{id}"]["put"].is_object());
    assert!(doc["components"]["schemas"]["VideoGameDto"].is_object());
}
