//! GitHub profile cards
//!
//! - Rank, streak and language derivations in `stats/`
//! - GitHub queries behind each card in `collect`
//! - SVG templates and card assembly in `render` and `cards/`
//! - HTTP endpoints serving the cards in `endpoints/`
//! - Requires GH_TOKEN and GH_USERNAME env vars (see `config`)

pub mod cards;
pub mod collect;
pub mod config;
pub mod endpoints;
pub mod render;
pub mod stats;
