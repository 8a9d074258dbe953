use actix_web::http::header;
use actix_web::web::{self, Data};
use actix_web::HttpResponse;

use crate::controller::api::GamesApi;
use crate::error::AppError;
use crate::model::GameId;
use crate::mvu::game::{Deps, GameModel, Msg};
use crate::mvu::runtime::run_game;

/// # Errors
///
/// Will return `Err` if the game or the recommended game can't be fetched
pub async fn game_detail(
    path: web::Path<String>,
    api: Data<dyn GamesApi>,
) -> Result<HttpResponse, AppError> {
    let mut model = GameModel::new(GameId::new(path.into_inner()));
    run_game(&mut model, Msg::PageLoad, Deps { api: api.get_ref() }).await?;

    if model.redirect_home {
        tracing::info!(game_id = %model.id, "no such game, redirecting home");
        return Ok(redirect_home());
    }

    let markup = model
        .markup
        .ok_or_else(|| AppError::Other("game page finished without markup".into()))?;
    Ok(HttpResponse::Ok()
        .insert_header((header::CACHE_CONTROL, "no-store"))
        .content_type("text/html")
        .body(markup.into_string()))
}

fn redirect_home() -> HttpResponse {
    HttpResponse::TemporaryRedirect()
        .insert_header((header::LOCATION, "/"))
        .finish()
}
