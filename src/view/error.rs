use actix_web::http::StatusCode;
use maud::{Markup, html};

use crate::model::PageMetadata;
use crate::view::layout::{container, page};

#[must_use]
pub fn render_error_page(status: StatusCode) -> Markup {
    let body = html! {
        main class="error" {
            (container(html! {
                h1 { "Algo deu errado" }
                p { "Não foi possível carregar esta página agora. Tente novamente em instantes." }
                p class="status" { (status.as_u16()) }
                a href="/" { "Voltar para o início" }
            }))
        }
    };
    page(&PageMetadata::fallback(), body)
}

#[must_use]
pub fn render_not_found_page() -> Markup {
    let body = html! {
        main class="error" {
            (container(html! {
                h1 { "Página não encontrada" }
                a href="/" { "Voltar para o início" }
            }))
        }
    };
    page(&PageMetadata::titled("Página não encontrada"), body)
}
