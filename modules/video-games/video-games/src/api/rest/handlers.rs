use std::sync::Arc;

use axum::extract::{Extension, OriginalUri, Path};
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::info;
use video_games_sdk::NewVideoGame;

use crate::domain::service::Service;

use super::dto::{VideoGameDto, VideoGameReq};
use super::error::ApiResult;

/// 201 Created + JSON with a `Location` of `<request path>/<id>`.
fn created_json<T: serde::Serialize>(value: T, uri: &Uri, new_id: &str) -> Response {
    let location = [uri.path().trim_end_matches('/'), new_id].join("/");
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(value),
    )
        .into_response()
}

#[utoipa::path(
    get,
    path = "/api/v1/games",
    tag = "Video Games",
    summary = "List all video games",
    responses(
        (status = 200, description = "JSON list of video games, empty when none exist", body = [VideoGameDto]),
    )
)]
pub async fn list_games(
    Extension(svc): Extension<Arc<Service>>,
) -> ApiResult<Json<Vec<VideoGameDto>>> {
    info!("Listing video games");

    let games = svc.list_games().await?;
    Ok(Json(games.into_iter().map(VideoGameDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/games/{id}",
    tag = "Video Games",
    summary = "Get a video game by id",
    params(("id" = i32, Path, description = "Video game id")),
    responses(
        (status = 200, description = "The video game", body = VideoGameDto),
        (status = 404, description = "No video game with this id", body = String, content_type = "text/plain"),
    )
)]
pub async fn get_game(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i32>,
) -> ApiResult<Json<VideoGameDto>> {
    info!(game_id = id, "Getting video game");

    let game = svc.get_game(id).await?;
    Ok(Json(game.into()))
}

#[utoipa::path(
    post,
    path = "/api/v1/games",
    tag = "Video Games",
    summary = "Create a video game",
    request_body = VideoGameReq,
    responses(
        (status = 201, description = "Video game created", body = VideoGameDto,
            headers(("Location" = String, description = "Path of the new video game relative to the server root, e.g. /api/v1/games/7"))),
        (status = 400, description = "Comma-separated validation messages", body = String, content_type = "text/plain"),
        (status = 409, description = "Title already taken", body = String, content_type = "text/plain"),
    )
)]
pub async fn create_game(
    OriginalUri(uri): OriginalUri,
    Extension(svc): Extension<Arc<Service>>,
    Json(req): Json<VideoGameReq>,
) -> ApiResult<Response> {
    info!(
        title = req.title.as_deref().unwrap_or_default(),
        "Creating new video game"
    );

    let new_game = NewVideoGame::try_from(req)?;
    let game = svc.create_game(new_game).await?;
    let id_str = game.id.to_string();
    Ok(created_json(VideoGameDto::from(game), &uri, &id_str))
}

#[utoipa::path(
    put,
    path = "/api/v1/games/{id}",
    tag = "Video Games",
    summary = "Replace an existing video game",
    params(("id" = i32, Path, description = "Video game id; overrides any id in the body")),
    request_body = VideoGameReq,
    responses(
        (status = 200, description = "Video game updated", body = VideoGameDto),
        (status = 400, description = "Comma-separated validation messages", body = String, content_type = "text/plain"),
        (status = 404, description = "No video game with this id", body = String, content_type = "text/plain"),
    )
)]
pub async fn update_game(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i32>,
    Json(req): Json<VideoGameReq>,
) -> ApiResult<Json<VideoGameDto>> {
    info!(game_id = id, body_id = ?req.id, "Updating video game");

    let replacement = NewVideoGame::try_from(req)?;
    let game = svc.update_game(id, replacement).await?;
    Ok(Json(game.into()))
}

#[utoipa::path(
    delete,
    path = "/api/v1/games/{id}",
    tag = "Video Games",
    summary = "Delete a video game",
    params(("id" = i32, Path, description = "Video game id")),
    responses(
        (status = 200, description = "Video game deleted, empty body"),
        (status = 404, description = "No video game with this id", body = String, content_type = "text/plain"),
    )
)]
pub async fn delete_game(
    Extension(svc): Extension<Arc<Service>>,
    Path(id): Path<i32>,
) -> ApiResult<StatusCode> {
    info!(game_id = id, "Deleting video game");

    svc.delete_game(id).await?;
    Ok(StatusCode::OK)
}
