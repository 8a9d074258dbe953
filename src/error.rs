use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::view::error::render_error_page;

#[derive(Error, Debug, Clone)]
pub enum AppError {
    #[error("network error: {0}")]
    Network(String),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Parse(err.to_string())
    }
}

/// Every page failure ends up here: the details go to the log, the visitor
/// only ever sees the generic error page.
impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        tracing::error!(error = %self, "request failed");
        let status = self.status_code();
        HttpResponse::build(status)
            .content_type("text/html")
            .body(render_error_page(status).into_string())
    }
}
