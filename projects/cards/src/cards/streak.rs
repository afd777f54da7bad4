use crate::render::{format_range, format_thousands, TemplateValues};
use crate::stats::StreakResult;

pub fn values(streak: &StreakResult) -> TemplateValues {
    TemplateValues::from([
        ("TOTAL_CONTRIBUTIONS", format_thousands(streak.total_contributions)),
        ("TOTAL_CONTRIB_RANGE", format_range(streak.total_range)),
        ("CURRENT_STREAK", streak.current_streak.to_string()),
        ("CURRENT_STREAK_RANGE", format_range(streak.current_range)),
        ("LONGEST_STREAK", streak.longest_streak.to_string()),
        ("LONGEST_STREAK_RANGE", format_range(streak.longest_range)),
    ])
}
