use std::collections::HashSet;

use chrono::{DateTime, Datelike, Duration, TimeZone, Utc};
use interfaces_github_graphql::index::{datetime_variable, ExecuteQueryError, QueryExecutor, QueryResponse, Variables};
use interfaces_github_graphql::models::{
    ContributionsCollection, ContributionsUser, FollowersUser, ProfileUser, RepositoriesUser,
    RepositoryLanguagesNode, SearchData, StargazerCountNode, UserData,
};
use interfaces_github_graphql::pagination::paginate;
use interfaces_github_graphql::queries::{
    CONTRIBUTIONS_TOTAL_QUERY, CONTRIBUTION_CALENDAR_QUERY, CONTRIBUTION_YEARS_QUERY,
    FOLLOWERS_COUNT_QUERY, REPOS_CONTRIBUTED_QUERY, SEARCH_ISSUE_COUNT_QUERY, TOTAL_STARS_QUERY,
    USER_LANGUAGES_QUERY, USER_PROFILE_QUERY,
};
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info};

use crate::stats::{
    aggregate, analyze, normalize_days, ContributionDay, LanguageShare, RepoLanguages, StreakResult,
};

#[derive(Debug, Error)]
pub enum CollectStatsError {
    #[error("ExecuteQuery: {source}")]
    ExecuteQuery {
        #[from]
        source: ExecuteQueryError,
    },

    #[error("DeserializePayload: {source}")]
    DeserializePayload {
        #[from]
        source: serde_json::Error,
    },

    #[error("UserNotFound: {login}")]
    UserNotFound {
        login: String,
    },

    #[error("Missing field in GraphQL response: {field}")]
    FieldMissing {
        field: &'static str,
    },

    #[error("InvalidContributionYear: {year}")]
    InvalidContributionYear {
        year: i32,
    },
}

/// Runs the GitHub queries behind the cards for one login.
pub struct GitHubStats<'a, E: QueryExecutor + ?Sized> {
    executor: &'a E,
    username: String,
    now: DateTime<Utc>,
}

impl<'a, E: QueryExecutor + ?Sized> GitHubStats<'a, E> {
    pub fn new(executor: &'a E, username: &str) -> Self {
        Self {
            executor,
            username: username.to_owned(),
            now: Utc::now(),
        }
    }

    /// Pins the clock used for "last year" windows and the current-year cap.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    fn user_variables(&self) -> Variables {
        let mut variables = Variables::new();
        variables.insert("username".to_owned(), Value::String(self.username.clone()));
        variables
    }

    fn window_variables(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Variables {
        let mut variables = self.user_variables();
        variables.insert("from".to_owned(), datetime_variable(from));
        variables.insert("to".to_owned(), datetime_variable(to));
        variables
    }

    fn user_of<T: DeserializeOwned>(&self, response: &QueryResponse) -> Result<T, CollectStatsError> {
        let data: UserData<T> = response.decode()?;
        data.user.ok_or_else(|| CollectStatsError::UserNotFound {
            login: self.username.clone(),
        })
    }

    fn query_user<T: DeserializeOwned>(&self, query: &str, variables: &Variables) -> Result<T, CollectStatsError> {
        let response = self.executor.execute(query, variables)?;
        self.user_of(&response)
    }

    fn contributions(&self, query: &str, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<ContributionsCollection, CollectStatsError> {
        let user: ContributionsUser = self.query_user(query, &self.window_variables(from, to))?;
        Ok(user.contributions_collection)
    }

    fn search_count(&self, search: String) -> Result<u64, CollectStatsError> {
        let mut variables = Variables::new();
        variables.insert("query".to_owned(), Value::String(search));

        let response = self.executor.execute(SEARCH_ISSUE_COUNT_QUERY, &variables)?;
        let data: SearchData = response.decode()?;
        Ok(data.search.issue_count)
    }

    pub fn total_stars(&self) -> Result<u64, CollectStatsError> {
        let mut total_stars = 0;

        for page in paginate(self.executor, TOTAL_STARS_QUERY, self.user_variables()) {
            let user: RepositoriesUser<StargazerCountNode> = self.user_of(&page?)?;
            total_stars += user
                .repositories
                .nodes
                .iter()
                .map(|repo| repo.stargazer_count)
                .sum::<u64>();
        }

        debug!(total_stars, "counted stars");
        Ok(total_stars)
    }

    pub fn commits_last_year(&self) -> Result<u64, CollectStatsError> {
        let from = self.now - Duration::days(365);
        self.calendar_total(from, self.now)
    }

    fn calendar_total(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<u64, CollectStatsError> {
        self.contributions(CONTRIBUTIONS_TOTAL_QUERY, from, to)?
            .contribution_calendar
            .map(|calendar| calendar.total_contributions)
            .ok_or(CollectStatsError::FieldMissing {
                field: "contributionCalendar",
            })
    }

    pub fn contribution_years(&self) -> Result<Vec<i32>, CollectStatsError> {
        let user: ContributionsUser = self.query_user(CONTRIBUTION_YEARS_QUERY, &self.user_variables())?;
        Ok(user.contributions_collection.contribution_years)
    }

    /// Sum of every contribution year's calendar total.
    pub fn commits_all_time(&self) -> Result<u64, CollectStatsError> {
        let mut total = 0;
        for year in self.contribution_years()? {
            let (from, to) = year_window(year, None)?;
            total += self.calendar_total(from, to)?;
        }
        Ok(total)
    }

    pub fn total_pull_requests(&self) -> Result<u64, CollectStatsError> {
        self.search_count(format!("author:{} is:pr", self.username))
    }

    pub fn total_issues(&self) -> Result<u64, CollectStatsError> {
        self.search_count(format!("author:{} is:issue", self.username))
    }

    pub fn total_reviews(&self) -> Result<u64, CollectStatsError> {
        self.search_count(format!("reviewed-by:{} is:pr", self.username))
    }

    pub fn followers(&self) -> Result<u64, CollectStatsError> {
        let user: FollowersUser = self.query_user(FOLLOWERS_COUNT_QUERY, &self.user_variables())?;
        Ok(user.followers.total_count)
    }

    pub fn repos_contributed_last_year(&self) -> Result<u64, CollectStatsError> {
        let from = self.now - Duration::days(365);
        self.contributions(REPOS_CONTRIBUTED_QUERY, from, self.now)?
            .total_repositories_with_contributed_commits
            .ok_or(CollectStatsError::FieldMissing {
                field: "totalRepositoriesWithContributedCommits",
            })
    }

    /// Profile name, else login, else the configured username.
    pub fn display_name(&self) -> Result<String, CollectStatsError> {
        let response = self.executor.execute(USER_PROFILE_QUERY, &self.user_variables())?;
        let data: UserData<ProfileUser> = response.decode()?;

        let name = data
            .user
            .and_then(|user| user.name.filter(|name| !name.is_empty()).or(user.login))
            .unwrap_or_else(|| self.username.clone());
        Ok(name)
    }

    pub fn repository_languages(&self) -> Result<Vec<RepoLanguages>, CollectStatsError> {
        let mut repos = Vec::new();

        for page in paginate(self.executor, USER_LANGUAGES_QUERY, self.user_variables()) {
            let user: RepositoriesUser<RepositoryLanguagesNode> = self.user_of(&page?)?;
            repos.extend(user.repositories.nodes.into_iter().map(|repo| RepoLanguages {
                repo: repo.name_with_owner,
                languages: repo
                    .languages
                    .edges
                    .into_iter()
                    .map(|edge| (edge.node.name, edge.size))
                    .collect(),
            }));
        }

        debug!(repositories = repos.len(), "fetched repository languages");
        Ok(repos)
    }

    pub fn top_languages(&self, exclude: &HashSet<String>, top_n: usize) -> Result<Vec<LanguageShare>, CollectStatsError> {
        Ok(aggregate(&self.repository_languages()?, exclude, top_n))
    }

    fn calendar_days(&self, from: DateTime<Utc>, to: DateTime<Utc>) -> Result<Vec<ContributionDay>, CollectStatsError> {
        let calendar = self
            .contributions(CONTRIBUTION_CALENDAR_QUERY, from, to)?
            .contribution_calendar
            .ok_or(CollectStatsError::FieldMissing {
                field: "contributionCalendar",
            })?;

        Ok(calendar
            .weeks
            .into_iter()
            .flat_map(|week| week.contribution_days)
            .map(|day| ContributionDay::new(day.date, day.contribution_count))
            .collect())
    }

    /// Full daily history, one calendar fetch per contribution year, sorted and deduplicated.
    pub fn contribution_days(&self) -> Result<Vec<ContributionDay>, CollectStatsError> {
        let years = self.contribution_years()?;
        let latest = years.iter().copied().max();

        let mut days = Vec::new();
        for year in years {
            let cap = (Some(year) == latest).then_some(self.now);
            let (from, to) = year_window(year, cap)?;
            days.extend(self.calendar_days(from, to)?);
        }

        Ok(normalize_days(days))
    }

    pub fn streak_stats(&self) -> Result<StreakResult, CollectStatsError> {
        let days = self.contribution_days()?;
        let result = analyze(&days);
        info!(
            days = days.len(),
            current = result.current_streak,
            longest = result.longest_streak,
            "analyzed contribution streaks"
        );
        Ok(result)
    }
}

/// Jan 1 00:00:00 to Dec 31 23:59:59 UTC, with the end optionally capped.
fn year_window(year: i32, cap: Option<DateTime<Utc>>) -> Result<(DateTime<Utc>, DateTime<Utc>), CollectStatsError> {
    let from = Utc
        .with_ymd_and_hms(year, 1, 1, 0, 0, 0)
        .single()
        .ok_or(CollectStatsError::InvalidContributionYear { year })?;
    let end = Utc
        .with_ymd_and_hms(year, 12, 31, 23, 59, 59)
        .single()
        .ok_or(CollectStatsError::InvalidContributionYear { year })?;

    let to = match cap {
        Some(cap) if cap.year() == year && cap < end => cap,
        _ => end,
    };
    Ok((from, to))
}
