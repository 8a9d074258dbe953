pub mod api;
pub mod cache;
pub mod game;
pub mod home;
pub mod metadata;

use actix_web::{HttpResponse, web};

use crate::view::error::render_not_found_page;

/// Page routes shared by the server and the integration tests.
pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home::home))
        .route("/game/{id}", web::get().to(game::game_detail))
        .route("/health", web::get().to(HttpResponse::Ok));
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound()
        .content_type("text/html")
        .body(render_not_found_page().into_string())
}
