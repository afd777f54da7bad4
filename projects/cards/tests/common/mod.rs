#![allow(dead_code)]

use std::cell::RefCell;

use interfaces_github_graphql::index::{ExecuteQueryError, QueryExecutor, QueryResponse, Variables};
use interfaces_github_graphql::queries::{
    CONTRIBUTIONS_TOTAL_QUERY, CONTRIBUTION_CALENDAR_QUERY, CONTRIBUTION_YEARS_QUERY,
    FOLLOWERS_COUNT_QUERY, REPOS_CONTRIBUTED_QUERY, SEARCH_ISSUE_COUNT_QUERY, TOTAL_STARS_QUERY,
    USER_LANGUAGES_QUERY, USER_PROFILE_QUERY,
};
use serde_json::{json, Value};

type Route = Box<dyn Fn(&str, &Variables) -> Result<QueryResponse, ExecuteQueryError>>;

/// In-memory GitHub: answers each query through `route` and records every call.
pub struct FakeGitHub {
    route: Route,
    pub calls: RefCell<Vec<(&'static str, Variables)>>,
}

impl FakeGitHub {
    pub fn new(route: impl Fn(&str, &Variables) -> Result<QueryResponse, ExecuteQueryError> + 'static) -> Self {
        Self {
            route: Box::new(route),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls_named(&self, name: &str) -> Vec<Variables> {
        self.calls
            .borrow()
            .iter()
            .filter(|(query, _)| *query == name)
            .map(|(_, vars)| vars.clone())
            .collect()
    }
}

pub fn query_name(query: &str) -> &'static str {
    match query {
        q if q == TOTAL_STARS_QUERY => "stars",
        q if q == USER_LANGUAGES_QUERY => "languages",
        q if q == FOLLOWERS_COUNT_QUERY => "followers",
        q if q == CONTRIBUTION_YEARS_QUERY => "years",
        q if q == CONTRIBUTIONS_TOTAL_QUERY => "total",
        q if q == REPOS_CONTRIBUTED_QUERY => "repos_contributed",
        q if q == SEARCH_ISSUE_COUNT_QUERY => "search",
        q if q == USER_PROFILE_QUERY => "profile",
        q if q == CONTRIBUTION_CALENDAR_QUERY => "calendar",
        _ => "unknown",
    }
}

impl QueryExecutor for FakeGitHub {
    fn execute(&self, query: &str, variables: &Variables) -> Result<QueryResponse, ExecuteQueryError> {
        self.calls.borrow_mut().push((query_name(query), variables.clone()));
        (self.route)(query_name(query), variables)
    }
}

pub fn ok(data: Value) -> Result<QueryResponse, ExecuteQueryError> {
    Ok(QueryResponse::new(data))
}

pub fn var<'a>(variables: &'a Variables, name: &str) -> &'a str {
    variables.get(name).and_then(Value::as_str).unwrap_or_default()
}

pub fn repositories_page(nodes: Value, end_cursor: Option<&str>) -> Result<QueryResponse, ExecuteQueryError> {
    ok(json!({
        "user": {
            "repositories": {
                "nodes": nodes,
                "pageInfo": {"hasNextPage": end_cursor.is_some(), "endCursor": end_cursor}
            }
        }
    }))
}

pub fn calendar(days: &[(&str, u64)]) -> Result<QueryResponse, ExecuteQueryError> {
    let total: u64 = days.iter().map(|(_, count)| count).sum();
    let days: Vec<Value> = days
        .iter()
        .map(|(date, count)| json!({"date": date, "contributionCount": count}))
        .collect();

    ok(json!({
        "user": {
            "contributionsCollection": {
                "contributionCalendar": {
                    "totalContributions": total,
                    "weeks": [{"contributionDays": days}]
                }
            }
        }
    }))
}

pub fn years(years: &[i32]) -> Result<QueryResponse, ExecuteQueryError> {
    ok(json!({"user": {"contributionsCollection": {"contributionYears": years}}}))
}
