use maud::{Markup, html};

use crate::model::{Game, PageMetadata};
use crate::view::components::{game_card, game_href, search_input};
use crate::view::layout::{container, page};

#[must_use]
pub fn render_home_page(daily_game: &Game, games: &[Game]) -> Markup {
    let body = html! {
        main class="home" {
            (container(html! {
                h1 class="home-title" { "Separamos um jogo exclusivamente para você!" }
                a class="daily-game" href=(game_href(&daily_game.id)) {
                    section class="hero" {
                        div class="hero-caption" {
                            p class="hero-title" { (daily_game.title) }
                            span class="arrow" aria-hidden="true" { "→" }
                        }
                        img class="hero-image" src=(daily_game.image_url) alt=(daily_game.title);
                    }
                }

                (search_input())

                h2 class="section-title" { "Jogos para conhecer" }
                section class="game-grid" {
                    @for game in games {
                        (game_card(game))
                    }
                }
            }))
        }
    };
    page(&PageMetadata::fallback(), body)
}
