//! Pure derivations over fetched data. Nothing here performs I/O.

pub mod languages;
pub mod rank;
pub mod streak;

pub use languages::{aggregate, LanguageShare, RepoLanguages};
pub use rank::{score, Rank, RankInputs};
pub use streak::{analyze, normalize_days, ContributionDay, DateRange, StreakResult};
