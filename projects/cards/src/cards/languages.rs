use std::f64::consts::TAU;

use interfaces_github_graphql::index::QueryExecutor;

use crate::collect::{CollectStatsError, GitHubStats};
use crate::config::LanguageOptions;
use crate::render::{escape_xml, TemplateValues};
use crate::stats::languages::round2;
use crate::stats::LanguageShare;

const PALETTE: [&str; 6] = [
    "#2EA043", // github green
    "#1F6FEB", // indigo
    "#A371F7", // purple
    "#3FB950", // mint green
    "#F778BA", // pink
    "#54AEFF", // sky blue
];

const ROW_SPACING: usize = 26;
const DONUT_CENTER: f64 = 116.6667;
const DONUT_RADIUS: f64 = 56.6667;

#[derive(Debug, Clone, PartialEq)]
pub struct LanguagesCardData {
    pub display_name: String,
    pub languages: Vec<LanguageShare>,
}

impl LanguagesCardData {
    pub fn collect<E: QueryExecutor + ?Sized>(
        stats: &GitHubStats<'_, E>,
        options: &LanguageOptions,
    ) -> Result<Self, CollectStatsError> {
        Ok(Self {
            display_name: stats.display_name()?,
            languages: stats.top_languages(&options.exclude, options.top_n)?,
        })
    }

    pub fn values(&self) -> TemplateValues {
        let shown = normalize_percentages(&self.languages);

        TemplateValues::from([
            ("DISPLAY_NAME", escape_xml(&self.display_name)),
            ("LANG_ITEMS", lang_items(&shown)),
            ("LANG_DONUTS", lang_donuts(&shown)),
        ])
    }
}

/// Rescales so the displayed languages alone add up to 100%.
pub fn normalize_percentages(languages: &[LanguageShare]) -> Vec<LanguageShare> {
    let total: u64 = languages.iter().map(|lang| lang.bytes).sum();
    if total == 0 {
        return languages.to_vec();
    }

    languages
        .iter()
        .map(|lang| LanguageShare {
            percentage: round2(lang.bytes as f64 / total as f64 * 100.0),
            ..lang.clone()
        })
        .collect()
}

fn color(idx: usize) -> &'static str {
    PALETTE[idx % PALETTE.len()]
}

fn lang_items(languages: &[LanguageShare]) -> String {
    let mut rows = Vec::with_capacity(languages.len());
    for (idx, lang) in languages.iter().enumerate() {
        rows.push(format!(
            r#"<g transform="translate(0, {dy})">
    <g class="stagger" style="animation-delay: {delay}ms">
      <circle cx="5" cy="6" r="5" fill="{color}" />
      <text data-testid="lang-name" x="15" y="10" class='lang-name'>
        {name} ({pct:.2}%)
      </text>
    </g>
  </g>"#,
            dy = idx * ROW_SPACING,
            delay = 450 + idx * 120,
            color = color(idx),
            name = escape_xml(&lang.language),
            pct = lang.percentage,
        ));
    }
    rows.join("\n")
}

fn lang_donuts(languages: &[LanguageShare]) -> String {
    let circumference = TAU * DONUT_RADIUS;
    let mut offset_pct = 0.0;
    let mut segments = Vec::with_capacity(languages.len());

    for (idx, lang) in languages.iter().enumerate() {
        let dash = circumference * lang.percentage / 100.0;
        // Segments start at twelve o'clock and follow each other clockwise.
        let angle = 360.0 * offset_pct / 100.0 - 90.0;

        segments.push(format!(
            r#"<g class="stagger" style="animation-delay: {delay}ms">
        <circle
          data-testid="lang-donut"
          size="{pct:.2}"
          cx="{cx}"
          cy="{cy}"
          r="{r}"
          stroke="{color}"
          fill="none"
          stroke-width="12"
          stroke-dasharray="{dash:.3} {circumference:.3}"
          stroke-dashoffset="0"
          transform="rotate({angle:.3} {cx} {cy})">
        </circle>
      </g>"#,
            delay = 600 + idx * 100,
            pct = lang.percentage,
            cx = DONUT_CENTER,
            cy = DONUT_CENTER,
            r = DONUT_RADIUS,
            color = color(idx),
        ));
        offset_pct += lang.percentage;
    }

    segments.join("\n")
}
