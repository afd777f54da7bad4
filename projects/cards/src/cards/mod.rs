//! Card data collection and SVG output.

pub mod languages;
pub mod stats;
pub mod streak;

use std::path::{Path, PathBuf};

use interfaces_github_graphql::index::{ExecuteQueryError, GitHubGraphQLClient, QueryExecutor};
use thiserror::Error;
use tracing::info;

use crate::collect::{CollectStatsError, GitHubStats};
use crate::config::{Config, LanguageOptions};
use crate::render::{render_template, TemplateValues, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Card {
    Stats,
    Streak,
    Languages,
}

impl Card {
    pub const ALL: [Card; 3] = [Card::Stats, Card::Streak, Card::Languages];

    pub fn file_stem(self) -> &'static str {
        match self {
            Card::Stats => "github_stats_card",
            Card::Streak => "github_streak_card",
            Card::Languages => "github_languages_card",
        }
    }

    pub fn file_name(self, theme: Theme) -> String {
        format!("{}_{}.svg", self.file_stem(), theme.as_str())
    }

    pub fn template(self, theme: Theme) -> &'static str {
        match (self, theme) {
            (Card::Stats, Theme::Dark) => include_str!("../../templates/github_stats_card_dark.svg"),
            (Card::Stats, Theme::Light) => include_str!("../../templates/github_stats_card_light.svg"),
            (Card::Streak, Theme::Dark) => include_str!("../../templates/github_streak_card_dark.svg"),
            (Card::Streak, Theme::Light) => include_str!("../../templates/github_streak_card_light.svg"),
            (Card::Languages, Theme::Dark) => include_str!("../../templates/github_languages_card_dark.svg"),
            (Card::Languages, Theme::Light) => include_str!("../../templates/github_languages_card_light.svg"),
        }
    }

    pub fn render(self, theme: Theme, values: &TemplateValues) -> String {
        render_template(self.template(theme), values)
    }
}

/// Gathers everything one card needs from GitHub.
pub fn collect_values<E: QueryExecutor + ?Sized>(
    card: Card,
    stats: &GitHubStats<'_, E>,
    options: &LanguageOptions,
) -> Result<TemplateValues, CollectStatsError> {
    let values = match card {
        Card::Stats => stats::StatsCardData::collect(stats)?.values(),
        Card::Streak => streak::values(&stats.streak_stats()?),
        Card::Languages => languages::LanguagesCardData::collect(stats, options)?.values(),
    };
    info!(card = card.file_stem(), user = stats.username(), "collected card data");
    Ok(values)
}

#[derive(Debug, Error)]
pub enum CollectCardError {
    #[error("BuildClient: {source}")]
    BuildClient {
        source: ExecuteQueryError,
    },

    #[error("CollectStats: {source}")]
    CollectStats {
        #[from]
        source: CollectStatsError,
    },
}

/// Blocking: builds a GraphQL client for `config` and collects one card.
pub fn collect_from_github(config: &Config, card: Card) -> Result<TemplateValues, CollectCardError> {
    let client = GitHubGraphQLClient::new(&config.token, &config.api_url)
        .map_err(|source| CollectCardError::BuildClient { source })?;
    let stats = GitHubStats::new(&client, &config.username);

    Ok(collect_values(card, &stats, &config.languages)?)
}

#[derive(Debug, Error)]
pub enum WriteCardsError {
    #[error("CreateOutputDir: {}: {source}", path.display())]
    CreateOutputDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("WriteCard: {}: {source}", path.display())]
    WriteCard {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Renders `card` in every theme into `output_dir`, returning the written paths.
pub fn write_themes(output_dir: &Path, card: Card, values: &TemplateValues) -> Result<Vec<PathBuf>, WriteCardsError> {
    std::fs::create_dir_all(output_dir).map_err(|source| WriteCardsError::CreateOutputDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(Theme::ALL.len());
    for theme in Theme::ALL {
        let path = output_dir.join(card.file_name(theme));
        std::fs::write(&path, card.render(theme, values))
            .map_err(|source| WriteCardsError::WriteCard { path: path.clone(), source })?;
        written.push(path);
    }
    Ok(written)
}
