use utoipa::OpenApi;

use super::{dto, handlers};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Video Game Shop API",
        description = "CRUD operations over the video game catalog"
    ),
    paths(
        handlers::list_games,
        handlers::get_game,
        handlers::create_game,
        handlers::update_game,
        handlers::delete_game,
    ),
    components(schemas(dto::VideoGameDto, dto::VideoGameReq)),
    tags((name = "Video Games", description = "Video game catalog"))
)]
pub struct VideoGamesApiDoc;
