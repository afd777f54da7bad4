use std::f64::consts::TAU;

use interfaces_github_graphql::index::QueryExecutor;

use crate::collect::{CollectStatsError, GitHubStats};
use crate::render::{escape_xml, TemplateValues};
use crate::stats::{score, Rank, RankInputs};

const RANK_RING_RADIUS: f64 = 40.0;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatsCardData {
    pub display_name: String,
    pub total_stars: u64,
    pub commits_last_year: u64,
    pub commits_all_time: u64,
    pub total_prs: u64,
    pub total_issues: u64,
    pub total_reviews: u64,
    pub followers: u64,
    pub repos_contributed_last_year: u64,
}

impl StatsCardData {
    pub fn collect<E: QueryExecutor + ?Sized>(stats: &GitHubStats<'_, E>) -> Result<Self, CollectStatsError> {
        Ok(Self {
            display_name: stats.display_name()?,
            total_stars: stats.total_stars()?,
            commits_last_year: stats.commits_last_year()?,
            commits_all_time: stats.commits_all_time()?,
            total_prs: stats.total_pull_requests()?,
            total_issues: stats.total_issues()?,
            total_reviews: stats.total_reviews()?,
            followers: stats.followers()?,
            repos_contributed_last_year: stats.repos_contributed_last_year()?,
        })
    }

    /// Ranked on all-time commits.
    pub fn rank(&self) -> Rank {
        score(&RankInputs {
            all_commits: true,
            commits: self.commits_all_time,
            prs: self.total_prs,
            issues: self.total_issues,
            reviews: self.total_reviews,
            stars: self.total_stars,
            followers: self.followers,
        })
    }

    pub fn values(&self) -> TemplateValues {
        let rank = self.rank();
        // Ring offset grows with the percentile, so a full ring means top rank.
        let dashoffset = TAU * RANK_RING_RADIUS * (rank.percentile / 100.0);

        TemplateValues::from([
            ("DISPLAY_NAME", escape_xml(&self.display_name)),
            ("RANK", rank.level.to_string()),
            ("RANK_DASHOFFSET", format!("{dashoffset:.3}")),
            ("TOTAL_STARS", self.total_stars.to_string()),
            ("COMMITS_LAST_YEAR", self.commits_last_year.to_string()),
            ("TOTAL_PRS", self.total_prs.to_string()),
            ("TOTAL_ISSUES", self.total_issues.to_string()),
            ("REPOS_CONTRIBUTED_LAST_YEAR", self.repos_contributed_last_year.to_string()),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_profile_has_full_offset() {
        let values = StatsCardData {
            display_name: "Mona".to_owned(),
            ..StatsCardData::default()
        }
        .values();

        assert_eq!(values["RANK"], "C");
        assert_eq!(values["RANK_DASHOFFSET"], "251.327");
        assert_eq!(values["TOTAL_STARS"], "0");
    }

    #[test]
    fn values_carry_every_counter() {
        let data = StatsCardData {
            display_name: "A & B".to_owned(),
            total_stars: 120,
            commits_last_year: 640,
            commits_all_time: 3_100,
            total_prs: 85,
            total_issues: 40,
            total_reviews: 12,
            followers: 33,
            repos_contributed_last_year: 9,
        };
        let values = data.values();

        assert_eq!(values["DISPLAY_NAME"], "A &amp; B");
        assert_eq!(values["COMMITS_LAST_YEAR"], "640");
        assert_eq!(values["TOTAL_PRS"], "85");
        assert_eq!(values["TOTAL_ISSUES"], "40");
        assert_eq!(values["REPOS_CONTRIBUTED_LAST_YEAR"], "9");
        assert_eq!(values["RANK"], data.rank().level);
        assert!(data.rank().percentile < 25.0);
    }
}
