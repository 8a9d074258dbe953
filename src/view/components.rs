use maud::{Markup, html};

use crate::model::{Game, GameId};

#[must_use]
pub fn game_href(id: &GameId) -> String {
    format!("/game/{id}")
}

#[must_use]
pub fn label(name: &str) -> Markup {
    html! {
        span class="label" { (name) }
    }
}

#[must_use]
pub fn game_card(game: &Game) -> Markup {
    html! {
        a class="game-card" href=(game_href(&game.id)) {
            div class="game-card-image" {
                img src=(game.image_url) alt=(game.title) loading="lazy";
            }
            div class="game-card-footer" {
                p class="game-card-title" { (game.title) }
                span class="arrow" aria-hidden="true" { "→" }
            }
        }
    }
}

/// Purely decorative for now, there is no search behind it.
#[must_use]
pub fn search_input() -> Markup {
    html! {
        div class="search" {
            input class="search-input" type="text" placeholder="Procurando algum jogo?" aria-label="Procurar jogo";
        }
    }
}
