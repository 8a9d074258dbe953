use serde_json::Value;

use crate::controller::api::{ApiQuery, FetchPolicy, GamesApi, METADATA_REVALIDATE_SECS};
use crate::model::{GameId, PageMetadata, decode_game};

/// Head metadata for a game page, fetched on its own and never fatal: anything
/// that goes wrong degrades to the site-wide fallback title.
///
/// A record without a text description also degrades, so no page ships a bare
/// "..." as its description.
pub async fn derive_game_metadata(api: &dyn GamesApi, id: &GameId) -> PageMetadata {
    let query = ApiQuery::Game(id.clone());
    let value = match api
        .fetch_json(&query, FetchPolicy::Revalidate(METADATA_REVALIDATE_SECS))
        .await
    {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(game_id = %id, error = %e, "metadata fetch failed, using fallback");
            return PageMetadata::fallback();
        }
    };
    let has_description = value.get("description").is_some_and(Value::is_string);

    match decode_game(value) {
        Ok(Some(game)) if has_description => PageMetadata::for_game(&game),
        Ok(Some(_)) => {
            tracing::warn!(game_id = %id, "record has no description, using fallback");
            PageMetadata::fallback()
        }
        Ok(None) => {
            tracing::warn!(game_id = %id, "no record for metadata, using fallback");
            PageMetadata::fallback()
        }
        Err(e) => {
            tracing::warn!(game_id = %id, error = %e, "metadata record unreadable, using fallback");
            PageMetadata::fallback()
        }
    }
}
