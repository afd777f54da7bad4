mod common;

use std::collections::HashSet;

use chrono::{TimeZone, Utc};
use common::{calendar, ok, years, FakeGitHub};
use projects_cards::cards::{collect_values, write_themes, Card};
use projects_cards::collect::GitHubStats;
use projects_cards::config::LanguageOptions;
use projects_cards::render::Theme;
use serde_json::json;
use tempfile::tempdir;

fn options() -> LanguageOptions {
    LanguageOptions {
        exclude: HashSet::new(),
        top_n: 6,
    }
}

#[test]
fn every_template_placeholder_is_filled() {
    let github = FakeGitHub::new(|name, _| match name {
        "profile" => ok(json!({"user": {"name": "Mona", "login": "octocat"}})),
        "stars" => ok(json!({"user": {"repositories": {
            "nodes": [{"stargazerCount": 12}],
            "pageInfo": {"hasNextPage": false, "endCursor": null}
        }}})),
        "total" => ok(json!({"user": {"contributionsCollection": {"contributionCalendar": {"totalContributions": 300}}}})),
        "years" => years(&[2024]),
        "search" => ok(json!({"search": {"issueCount": 3}})),
        "followers" => ok(json!({"user": {"followers": {"totalCount": 8}}})),
        "repos_contributed" => ok(json!({"user": {"contributionsCollection": {"totalRepositoriesWithContributedCommits": 4}}})),
        "calendar" => calendar(&[("2024-05-01", 2), ("2024-05-02", 5)]),
        "languages" => ok(json!({"user": {"repositories": {
            "nodes": [{"nameWithOwner": "octocat/r", "languages": {"edges": [{"size": 10, "node": {"name": "Rust"}}]}}],
            "pageInfo": {"hasNextPage": false, "endCursor": null}
        }}})),
        other => panic!("unexpected query {other}"),
    });
    let stats = GitHubStats::new(&github, "octocat").at(Utc.with_ymd_and_hms(2024, 5, 2, 20, 0, 0).unwrap());

    for card in Card::ALL {
        let values = collect_values(card, &stats, &options()).unwrap();
        for theme in Theme::ALL {
            let svg = card.render(theme, &values);
            assert!(!svg.contains("{{"), "{} {} left a placeholder", card.file_stem(), theme.as_str());
            assert!(svg.starts_with("<svg"));
        }
    }
}

#[test]
fn streak_card_shows_current_run() {
    let github = FakeGitHub::new(|name, _| match name {
        "years" => years(&[2024]),
        "calendar" => calendar(&[("2024-05-01", 2), ("2024-05-02", 5)]),
        other => panic!("unexpected query {other}"),
    });
    let stats = GitHubStats::new(&github, "octocat").at(Utc.with_ymd_and_hms(2024, 5, 2, 20, 0, 0).unwrap());

    let svg = Card::Streak.render(Theme::Light, &collect_values(Card::Streak, &stats, &options()).unwrap());

    assert!(svg.contains(">May 1 - May 2, 2024<"));
    assert!(svg.contains(">7<"));
}

#[test]
fn writes_dark_and_light_files() {
    let dir = tempdir().unwrap();
    let output_dir = dir.path().join("cards");
    let values = [("DISPLAY_NAME", "Mona".to_owned())].into_iter().collect();

    let written = write_themes(&output_dir, Card::Languages, &values).unwrap();

    assert_eq!(
        written,
        vec![
            output_dir.join("github_languages_card_dark.svg"),
            output_dir.join("github_languages_card_light.svg"),
        ]
    );
    let dark = std::fs::read_to_string(&written[0]).unwrap();
    assert!(dark.contains("Mona's Most Used Languages"));
    assert!(dark.contains("#0d1117"));
    let light = std::fs::read_to_string(&written[1]).unwrap();
    assert!(light.contains("#fffefe"));
}
