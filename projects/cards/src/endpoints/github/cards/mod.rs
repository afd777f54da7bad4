pub mod languages;
pub mod stats;
pub mod streak;

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Response, StatusCode},
    response::IntoResponse,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::error;

use crate::cards::{collect_from_github, Card, CollectCardError};
use crate::config::Config;
use crate::render::Theme;

#[derive(Debug, Default, Deserialize)]
pub struct CardQuery {
    #[serde(default)]
    pub theme: Theme,
}

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("CollectCard: {source}")]
    CollectCard {
        #[from]
        source: CollectCardError,
    },

    #[error("JoinCollection: {source}")]
    JoinCollection {
        #[from]
        source: tokio::task::JoinError,
    },

    #[error("BuildResponse: {source}")]
    BuildResponse {
        #[from]
        source: axum::http::Error,
    },
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> axum::response::Response {
        error!("{self}");
        match self {
            HandlerError::CollectCard { source: CollectCardError::CollectStats { source } } => {
                (StatusCode::BAD_GATEWAY, format!("Request to GitHub failed: {source}")).into_response()
            }
            HandlerError::CollectCard { source } => (StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response(),
            HandlerError::JoinCollection { source } => (StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response(),
            HandlerError::BuildResponse { source } => (StatusCode::INTERNAL_SERVER_ERROR, source.to_string()).into_response(),
        }
    }
}

/// Collection blocks on HTTP, so it runs on the blocking pool.
pub async fn render_card(config: Arc<Config>, card: Card, theme: Theme) -> Result<Response<Body>, HandlerError> {
    let values = tokio::task::spawn_blocking(move || collect_from_github(&config, card)).await??;

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/svg+xml")
        .header(header::CACHE_CONTROL, "public, max-age=3600")
        .body(Body::from(card.render(theme, &values)))?;

    Ok(response)
}
