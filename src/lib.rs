pub mod args;
pub mod controller;
pub mod error;
pub mod model;
pub mod mvu {
    pub mod game;
    pub mod runtime;
}
pub mod view;

pub const SITE_NAME: &str = "DailyGames";
pub const STYLESHEET_PATH: &str = "/static/styles.css";
