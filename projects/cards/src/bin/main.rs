use std::sync::Arc;

use axum::{routing::get, serve, Extension, Router};
use projects_cards::config::{Config, ConfigError};
use projects_cards::endpoints::github::cards::{
	languages::index::handler as github_cards_languages_handler,
	stats::index::handler as github_cards_stats_handler,
	streak::index::handler as github_cards_streak_handler,
};
use thiserror::Error;
use tracing::info;
use utils_trace::tracing_init;

#[derive(Debug, Error)]
pub enum MainError {
	#[error("TracingInit: {source}")]
	TracingInit {
		#[source]
		source: utils_trace::TracingInitError,
	},
	#[error("LoadConfig: {source}")]
	LoadConfig {
		#[source]
		source: ConfigError,
	},
	#[error("TcpListenerBind: {source}")]
	TcpListenerBind {
		#[source]
		source: std::io::Error,
	},
	#[error("Serve: {source}")]
	Serve {
		#[source]
		source: std::io::Error,
	}
}

#[tokio::main]
async fn main() -> Result<(), MainError> {
	tracing_init("info")
		.map_err(|source| MainError::TracingInit { source })?;

	let config = Config::from_env()
		.map_err(|source| MainError::LoadConfig { source })?;
	let addr = config.bind_addr;

	let app = Router::new()
		.route("/github/cards/stats", get(github_cards_stats_handler))
		.route("/github/cards/streak", get(github_cards_streak_handler))
		.route("/github/cards/languages", get(github_cards_languages_handler))
		.layer(Extension(Arc::new(config)));

	let listener = tokio::net::TcpListener::bind(addr)
		.await
		.map_err(|source| MainError::TcpListenerBind { source })?;

	info!("Server running on addr: {}", addr);

	serve(listener, app)
		.await
		.map_err(|source| MainError::Serve { source })?;

	Ok(())
}
