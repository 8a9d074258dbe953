use actix_web::http::header;
use actix_web::web::Data;
use actix_web::HttpResponse;

use crate::controller::api::{FetchPolicy, GamesApi, HOME_REVALIDATE_SECS};
use crate::error::AppError;
use crate::view::home::render_home_page;

/// # Errors
///
/// Will return `Err` if either the daily game or the games list can't be fetched
pub async fn home(api: Data<dyn GamesApi>) -> Result<HttpResponse, AppError> {
    let policy = FetchPolicy::Revalidate(HOME_REVALIDATE_SECS);

    let daily_game = api
        .daily_game(policy)
        .await?
        .ok_or_else(|| AppError::Other("games api returned no daily game".into()))?;
    let games = api.games(policy).await?;
    tracing::debug!(daily_game = %daily_game.id, games = games.len(), "rendering home page");

    let markup = render_home_page(&daily_game, &games);
    Ok(HttpResponse::Ok()
        .insert_header((
            header::CACHE_CONTROL,
            format!("public, s-maxage={HOME_REVALIDATE_SECS}"),
        ))
        .content_type("text/html")
        .body(markup.into_string()))
}
