use maud::{DOCTYPE, Markup, html};

use crate::model::PageMetadata;
use crate::{SITE_NAME, STYLESHEET_PATH};

/// Full html document around `body`, with the head built from `metadata`.
#[must_use]
pub fn page(metadata: &PageMetadata, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="pt-BR" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (metadata.title) }
                @if let Some(description) = &metadata.description {
                    meta name="description" content=(description);
                }
                @if let Some(og) = &metadata.open_graph {
                    meta property="og:title" content=(og.title);
                    @for image in &og.images {
                        meta property="og:image" content=(image);
                    }
                }
                @if let Some(robots) = &metadata.robots {
                    meta name="robots" content=(robots.content());
                    meta name="googlebot" content=(robots.google_bot.content());
                }
                link rel="stylesheet" type="text/css" href=(STYLESHEET_PATH);
            }
            body {
                (site_header())
                (body)
            }
        }
    }
}

/// Keeps page content at a consistent width and padding.
#[must_use]
pub fn container(content: Markup) -> Markup {
    html! {
        div class="container" { (content) }
    }
}

fn site_header() -> Markup {
    html! {
        header class="site-header" {
            (container(html! {
                a class="brand" href="/" { (SITE_NAME) }
            }))
        }
    }
}
