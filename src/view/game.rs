use maud::{Markup, html};

use crate::model::{Game, PageMetadata};
use crate::view::components::{game_card, label};
use crate::view::layout::{container, page};

#[must_use]
pub fn render_game_page(metadata: &PageMetadata, game: &Game, recommended: &Game) -> Markup {
    let body = html! {
        main class="game" {
            div class="game-banner" {
                img class="game-banner-image" src=(game.image_url) alt=(game.title);
            }
            (container(html! {
                h1 class="game-title" { (game.title) }
                p class="game-description" { (game.description) }

                h2 class="section-title" { "Plataformas" }
                div class="tags" id="platforms" {
                    @for platform in &game.platforms {
                        (label(platform))
                    }
                }

                h2 class="section-title" { "Categorias" }
                div class="tags" id="categories" {
                    @for category in &game.categories {
                        (label(category))
                    }
                }

                p class="release" {
                    strong { "Data de lancamento: " }
                    (game.release)
                }

                h2 class="section-title" { "Jogo recomendado:" }
                section id="recommended" {
                    (game_card(recommended))
                }
            }))
        }
    };
    page(metadata, body)
}
