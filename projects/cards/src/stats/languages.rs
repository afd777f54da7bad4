use std::collections::{HashMap, HashSet};

/// Language byte counts reported for one repository, in the order GitHub listed them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepoLanguages {
    pub repo: String,
    pub languages: Vec<(String, u64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageShare {
    pub language: String,
    pub bytes: u64,
    pub percentage: f64,
}

/// Sums bytes per language, sorts by size (first-seen order on ties), keeps `top_n`.
/// Percentages are relative to every non-excluded language, not only the kept ones.
pub fn aggregate(repos: &[RepoLanguages], exclude: &HashSet<String>, top_n: usize) -> Vec<LanguageShare> {
    let mut totals: Vec<(&str, u64)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for (name, bytes) in repos.iter().flat_map(|repo| &repo.languages) {
        if exclude.contains(name) {
            continue;
        }
        match positions.get(name.as_str()) {
            Some(&position) => totals[position].1 += bytes,
            None => {
                positions.insert(name.as_str(), totals.len());
                totals.push((name.as_str(), *bytes));
            }
        }
    }

    let total_bytes: u64 = totals.iter().map(|(_, bytes)| bytes).sum();
    if total_bytes == 0 {
        return Vec::new();
    }

    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals.truncate(top_n);

    totals
        .into_iter()
        .map(|(language, bytes)| LanguageShare {
            language: language.to_owned(),
            bytes,
            percentage: round2(bytes as f64 / total_bytes as f64 * 100.0),
        })
        .collect()
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn repo(name: &str, languages: &[(&str, u64)]) -> RepoLanguages {
        RepoLanguages {
            repo: name.to_owned(),
            languages: languages.iter().map(|(lang, bytes)| (lang.to_string(), *bytes)).collect(),
        }
    }

    fn share(language: &str, bytes: u64, percentage: f64) -> LanguageShare {
        LanguageShare {
            language: language.to_owned(),
            bytes,
            percentage,
        }
    }

    #[test]
    fn sums_across_repositories() {
        let repos = [repo("r1", &[("Go", 300), ("Python", 100)]), repo("r2", &[("Go", 200)])];

        assert_eq!(
            aggregate(&repos, &HashSet::new(), 2),
            vec![share("Go", 500, 83.33), share("Python", 100, 16.67)]
        );
    }

    #[test]
    fn excluded_languages_do_not_count_toward_total() {
        let repos = [repo("r1", &[("HTML", 900), ("Rust", 75), ("TeX", 500), ("Shell", 25)])];
        let exclude: HashSet<String> = ["HTML", "TeX"].into_iter().map(String::from).collect();

        assert_eq!(
            aggregate(&repos, &exclude, 6),
            vec![share("Rust", 75, 75.0), share("Shell", 25, 25.0)]
        );
    }

    #[test]
    fn exclusion_is_case_sensitive() {
        let repos = [repo("r1", &[("html", 10)])];
        let exclude: HashSet<String> = ["HTML".to_owned()].into();

        assert_eq!(aggregate(&repos, &exclude, 6), vec![share("html", 10, 100.0)]);
    }

    #[test]
    fn truncation_keeps_first_seen_on_ties() {
        let repos = [
            repo("r1", &[("C", 10), ("Zig", 50)]),
            repo("r2", &[("Ada", 50), ("Lua", 10), ("Rust", 80)]),
        ];

        let top = aggregate(&repos, &HashSet::new(), 3);
        let names: Vec<&str> = top.iter().map(|lang| lang.language.as_str()).collect();

        assert_eq!(names, vec!["Rust", "Zig", "Ada"]);
        assert_eq!(top[0].percentage, 40.0);
    }

    #[test]
    fn nothing_to_count_is_empty() {
        assert!(aggregate(&[], &HashSet::new(), 6).is_empty());

        let repos = [repo("r1", &[("HTML", 10)]), repo("r2", &[("Go", 0)])];
        let exclude: HashSet<String> = ["HTML".to_owned()].into();
        assert!(aggregate(&repos, &exclude, 6).is_empty());
    }
}
