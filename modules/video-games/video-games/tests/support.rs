#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Test support utilities for `video_games` integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tower::ServiceExt;

use video_games::{NewVideoGame, VideoGamesModule};

/// Create a fresh in-memory `SQLite` database with migrations applied.
///
/// # Panics
/// Panics if the database connection or migrations fail.
pub async fn inmem_db() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:")
        .await
        .expect("Failed to connect to in-memory database");

    video_games::infra::storage::migrations::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    db
}

/// A migrated database plus the module and router built on top of it.
pub struct TestContext {
    pub db: DatabaseConnection,
    pub module: VideoGamesModule,
    pub router: Router,
}

impl TestContext {
    pub async fn new() -> Self {
        let db = inmem_db().await;
        let module = VideoGamesModule::new(db.clone());
        let router = module.register_rest(Router::new());
        Self { db, module, router }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.send(Request::get(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn delete(&self, uri: &str) -> Response {
        self.send(Request::delete(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn post_json(&self, uri: &str, body: &serde_json::Value) -> Response {
        self.send(json_request("POST", uri, body)).await
    }

    pub async fn put_json(&self, uri: &str, body: &serde_json::Value) -> Response {
        self.send(json_request("PUT", uri, body)).await
    }
}

fn json_request(method: &str, uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_vec(body).unwrap()))
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}

pub async fn expect_status(response: Response, status: StatusCode) -> String {
    let actual = response.status();
    let body = body_text(response).await;
    assert_eq!(actual, status, "unexpected status, body: {body}");
    body
}

#[must_use]
pub fn minecraft() -> NewVideoGame {
    NewVideoGame {
        title: "Minecraft".to_owned(),
        genre: "Open-world".to_owned(),
        developer: "Mojang Studios".to_owned(),
        price: Decimal::new(2699, 2),
    }
}

#[must_use]
pub fn game_json(title: &str, price: f64) -> serde_json::Value {
    serde_json::json!({
        "title": title,
        "genre": "Shooter",
        "developer": "Bungie Inc",
        "price": price,
    })
}
