use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Json, Router};
use utoipa::OpenApi;

use crate::api::rest::handlers;
use crate::api::rest::openapi::VideoGamesApiDoc;
use crate::domain::service::Service;

pub const BASE_PATH: &str = "/api/v1/games";
pub const OPENAPI_PATH: &str = "/api/v1/openapi.json";

#[must_use]
pub fn register_routes(mut router: Router, service: Arc<Service>) -> Router {
    router = router
        .route(
            BASE_PATH,
            get(handlers::list_games).post(handlers::create_game),
        )
        .route(
            &format!("{BASE_PATH}/{{id}}"),
            get(handlers::get_game)
                .put(handlers::update_game)
                .delete(handlers::delete_game),
        )
        .layer(Extension(service));

    // Built once, served as static JSON
    let doc = Arc::new(VideoGamesApiDoc::openapi());
    router = router.route(
        OPENAPI_PATH,
        get(move || {
            let doc = Arc::clone(&doc);
            async move { Json(doc.as_ref().clone()) }
        }),
    );

    router
}
