use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Extension, Query},
    http::Response,
};

use crate::cards::Card;
use crate::config::Config;
use crate::endpoints::github::cards::{render_card, CardQuery, HandlerError};

/// Axum handler: GET /github/cards/languages
pub async fn handler(
    Extension(config): Extension<Arc<Config>>,
    Query(query): Query<CardQuery>,
) -> Result<Response<Body>, HandlerError> {
    render_card(config, Card::Languages, query.theme).await
}
