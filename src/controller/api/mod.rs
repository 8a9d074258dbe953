pub mod client;

pub use client::HttpGamesApi;

use async_trait::async_trait;
use serde_json::Value;
use std::fmt;

use crate::error::AppError;
use crate::model::{Game, GameId, decode_game, decode_games};

pub const DEFAULT_API_BASE_URL: &str = "https://sujeitoprogramador.com/next-api/";
/// Window for the daily game and the games list on the home page.
pub const HOME_REVALIDATE_SECS: u32 = 320;
/// Window for the record fetched to build a game page's metadata.
pub const METADATA_REVALIDATE_SECS: u32 = 60;

/// Which endpoint of the games api to hit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ApiQuery {
    Games,
    GameDay,
    Game(GameId),
}

impl ApiQuery {
    /// The id goes in as-is; the api is trusted to cope with whatever the path held.
    #[must_use]
    pub fn query_string(&self) -> String {
        match self {
            Self::Games => "api=games".to_string(),
            Self::GameDay => "api=game_day".to_string(),
            Self::Game(id) => format!("api=game&id={id}"),
        }
    }
}

/// Caching hint attached to a single fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Reuse whatever is cached for the url, however old.
    Default,
    /// Always go to the network and leave the cache alone.
    NoStore,
    /// Reuse a cached response younger than this many seconds.
    Revalidate(u32),
}

impl FetchPolicy {
    #[must_use]
    pub fn uses_cache(self) -> bool {
        !matches!(self, Self::NoStore)
    }
}

impl fmt::Display for FetchPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("default"),
            Self::NoStore => f.write_str("no-store"),
            Self::Revalidate(secs) => write!(f, "revalidate={secs}s"),
        }
    }
}

#[async_trait]
pub trait GamesApi: Send + Sync {
    async fn fetch_json(&self, query: &ApiQuery, policy: FetchPolicy) -> Result<Value, AppError>;

    async fn daily_game(&self, policy: FetchPolicy) -> Result<Option<Game>, AppError> {
        decode_game(self.fetch_json(&ApiQuery::GameDay, policy).await?)
    }

    async fn games(&self, policy: FetchPolicy) -> Result<Vec<Game>, AppError> {
        decode_games(self.fetch_json(&ApiQuery::Games, policy).await?)
    }

    async fn game(&self, id: &GameId, policy: FetchPolicy) -> Result<Option<Game>, AppError> {
        decode_game(self.fetch_json(&ApiQuery::Game(id.clone()), policy).await?)
    }
}
