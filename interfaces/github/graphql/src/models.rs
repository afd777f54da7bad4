use chrono::NaiveDate;
use serde::Deserialize;

/// `data.user` wrapper; GitHub answers `user: null` for unknown logins.
#[derive(Debug, Deserialize)]
pub struct UserData<T> {
    pub user: Option<T>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

/// Node view of a connection. Page info is read by the paginator, not here.
#[derive(Debug, Deserialize)]
pub struct Connection<N> {
    #[serde(default = "Vec::new")]
    pub nodes: Vec<N>,
}

#[derive(Debug, Deserialize)]
pub struct RepositoriesUser<N> {
    pub repositories: Connection<N>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StargazerCountNode {
    pub stargazer_count: u64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryLanguagesNode {
    pub name_with_owner: String,
    pub languages: LanguageConnection,
}

#[derive(Debug, Deserialize)]
pub struct LanguageConnection {
    #[serde(default)]
    pub edges: Vec<LanguageEdge>,
}

#[derive(Debug, Deserialize)]
pub struct LanguageEdge {
    pub size: u64,
    pub node: LanguageNode,
}

#[derive(Debug, Deserialize)]
pub struct LanguageNode {
    pub name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TotalCount {
    pub total_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct FollowersUser {
    pub followers: TotalCount,
}

#[derive(Debug, Deserialize)]
pub struct ProfileUser {
    pub name: Option<String>,
    pub login: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsUser {
    pub contributions_collection: ContributionsCollection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollection {
    #[serde(default)]
    pub contribution_years: Vec<i32>,
    pub contribution_calendar: Option<ContributionCalendar>,
    pub total_repositories_with_contributed_commits: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendar {
    pub total_contributions: u64,
    #[serde(default)]
    pub weeks: Vec<ContributionWeek>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeek {
    pub contribution_days: Vec<ContributionDayNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDayNode {
    pub date: NaiveDate,
    pub contribution_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct SearchData {
    pub search: SearchCount,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCount {
    pub issue_count: u64,
}
