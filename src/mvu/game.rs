use maud::Markup;

use crate::controller::api::{FetchPolicy, GamesApi};
use crate::controller::metadata::derive_game_metadata;
use crate::error::AppError;
use crate::model::{Game, GameId, PageMetadata};
use crate::view::game::render_game_page;

#[derive(Debug, Clone)]
pub struct GameModel {
    pub id: GameId,
    pub game: Option<Game>,
    pub recommended: Option<Game>,
    pub metadata: Option<PageMetadata>,
    pub markup: Option<Markup>,
    pub redirect_home: bool,
    pub error: Option<AppError>,
}

impl GameModel {
    #[must_use]
    pub fn new(id: GameId) -> Self {
        Self {
            id,
            game: None,
            recommended: None,
            metadata: None,
            markup: None,
            redirect_home: false,
            error: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Msg {
    PageLoad,
    GameLoaded(Option<Game>),
    RecommendedLoaded(Game),
    MetadataLoaded(PageMetadata),
    Rendered(Markup),
    Failed(AppError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    LoadGame,
    LoadRecommended,
    LoadMetadata,
    RenderTemplate,
}

/// Each step hands out at most one effect, so fetches run strictly one after another.
pub fn update(model: &mut GameModel, msg: Msg) -> Vec<Effect> {
    match msg {
        Msg::PageLoad => vec![Effect::LoadGame],
        Msg::GameLoaded(Some(game)) => {
            model.game = Some(game);
            vec![Effect::LoadRecommended]
        }
        Msg::GameLoaded(None) => {
            model.redirect_home = true;
            vec![]
        }
        Msg::RecommendedLoaded(game) => {
            model.recommended = Some(game);
            vec![Effect::LoadMetadata]
        }
        Msg::MetadataLoaded(metadata) => {
            model.metadata = Some(metadata);
            if model.game.is_some() && model.recommended.is_some() {
                vec![Effect::RenderTemplate]
            } else {
                vec![]
            }
        }
        Msg::Rendered(markup) => {
            model.markup = Some(markup);
            vec![]
        }
        Msg::Failed(e) => {
            model.error = Some(e);
            vec![]
        }
    }
}

#[derive(Clone, Copy)]
pub struct Deps<'a> {
    pub api: &'a dyn GamesApi,
}

pub async fn run_effect(effect: Effect, model: &GameModel, deps: Deps<'_>) -> Msg {
    match effect {
        Effect::LoadGame => match deps.api.game(&model.id, FetchPolicy::NoStore).await {
            Ok(game) => Msg::GameLoaded(game),
            Err(e) => Msg::Failed(e),
        },
        // The daily game stands in for a real recommendation; nothing ties it to `model.id`.
        Effect::LoadRecommended => match deps.api.daily_game(FetchPolicy::Default).await {
            Ok(Some(game)) => {
                tracing::debug!(game_id = %model.id, recommended = %game.id, "recommending daily game");
                Msg::RecommendedLoaded(game)
            }
            Ok(None) => Msg::Failed(AppError::Other(
                "games api returned no game to recommend".into(),
            )),
            Err(e) => Msg::Failed(e),
        },
        Effect::LoadMetadata => Msg::MetadataLoaded(derive_game_metadata(deps.api, &model.id).await),
        Effect::RenderTemplate => {
            if let (Some(game), Some(recommended), Some(metadata)) = (
                model.game.as_ref(),
                model.recommended.as_ref(),
                model.metadata.as_ref(),
            ) {
                Msg::Rendered(render_game_page(metadata, game, recommended))
            } else {
                Msg::Failed(AppError::Other("render requested before data loaded".into()))
            }
        }
    }
}
