//! Every paginated query binds `$cursor` and exposes `user.repositories.pageInfo`.

pub const TOTAL_STARS_QUERY: &str = r#"
    query getTotalStars($username: String!, $cursor: String) {
        user(login: $username) {
            repositories(first: 100, after: $cursor, ownerAffiliations: OWNER) {
                nodes {
                    stargazerCount
                }
                pageInfo {
                    hasNextPage
                    endCursor
                }
            }
        }
    }
"#;

pub const USER_LANGUAGES_QUERY: &str = r#"
    query getUserLanguages($username: String!, $cursor: String) {
        user(login: $username) {
            repositories(first: 100, after: $cursor, ownerAffiliations: OWNER, isFork: false) {
                nodes {
                    nameWithOwner
                    languages(first: 10, orderBy: {field: SIZE, direction: DESC}) {
                        edges {
                            size
                            node {
                                name
                            }
                        }
                    }
                }
                pageInfo {
                    hasNextPage
                    endCursor
                }
            }
        }
    }
"#;

pub const FOLLOWERS_COUNT_QUERY: &str = r#"
    query getFollowersCount($username: String!) {
        user(login: $username) {
            followers {
                totalCount
            }
        }
    }
"#;

pub const CONTRIBUTION_YEARS_QUERY: &str = r#"
    query getContributionYears($username: String!) {
        user(login: $username) {
            contributionsCollection {
                contributionYears
            }
        }
    }
"#;

pub const CONTRIBUTIONS_TOTAL_QUERY: &str = r#"
    query getContributionsTotal($username: String!, $from: DateTime!, $to: DateTime!) {
        user(login: $username) {
            contributionsCollection(from: $from, to: $to) {
                contributionCalendar {
                    totalContributions
                }
            }
        }
    }
"#;

pub const REPOS_CONTRIBUTED_QUERY: &str = r#"
    query getReposContributed($username: String!, $from: DateTime!, $to: DateTime!) {
        user(login: $username) {
            contributionsCollection(from: $from, to: $to) {
                totalRepositoriesWithContributedCommits
            }
        }
    }
"#;

/// Counts issues, PRs or reviewed PRs depending on the search string.
pub const SEARCH_ISSUE_COUNT_QUERY: &str = r#"
    query getSearchIssueCount($query: String!) {
        search(type: ISSUE, query: $query) {
            issueCount
        }
    }
"#;

pub const USER_PROFILE_QUERY: &str = r#"
    query getUserProfile($username: String!) {
        user(login: $username) {
            name
            login
        }
    }
"#;

pub const CONTRIBUTION_CALENDAR_QUERY: &str = r#"
    query getContributionCalendar($username: String!, $from: DateTime!, $to: DateTime!) {
        user(login: $username) {
            contributionsCollection(from: $from, to: $to) {
                contributionCalendar {
                    totalContributions
                    weeks {
                        contributionDays {
                            date
                            contributionCount
                        }
                    }
                }
            }
        }
    }
"#;
