use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u64,
}

impl ContributionDay {
    pub fn new(date: NaiveDate, count: u64) -> Self {
        Self { date, count }
    }
}

/// Closed interval of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn single(date: NaiveDate) -> Self {
        Self { start: date, end: date }
    }
}

/// `None` ranges mean "no data".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreakResult {
    pub current_streak: u32,
    pub current_range: Option<DateRange>,
    pub longest_streak: u32,
    pub longest_range: Option<DateRange>,
    pub total_contributions: u64,
    pub total_range: Option<DateRange>,
}

/// Sorts by date and drops repeated dates, keeping the first one seen.
/// Year windows fetched separately may overlap at their boundaries.
pub fn normalize_days(mut days: Vec<ContributionDay>) -> Vec<ContributionDay> {
    days.sort_by_key(|day| day.date);
    days.dedup_by_key(|day| day.date);
    days
}

/// Expects `days` sorted ascending with unique dates (see [`normalize_days`]).
/// A missing date counts as a break, same as a zero-count day.
pub fn analyze(days: &[ContributionDay]) -> StreakResult {
    let (Some(first), Some(last)) = (days.first(), days.last()) else {
        return StreakResult::default();
    };

    let (longest_streak, longest_range) = longest_streak(days);
    let (current_streak, current_range) = current_streak(days);

    StreakResult {
        current_streak,
        current_range,
        longest_streak,
        longest_range,
        total_contributions: days.iter().map(|day| day.count).sum(),
        total_range: Some(DateRange {
            start: first.date,
            end: last.date,
        }),
    }
}

fn is_next_day(previous: NaiveDate, date: NaiveDate) -> bool {
    previous.succ_opt() == Some(date)
}

fn longest_streak(days: &[ContributionDay]) -> (u32, Option<DateRange>) {
    let mut longest = 0u32;
    let mut longest_range = None;
    let mut run = 0u32;
    let mut run_start = None;
    let mut previous: Option<&ContributionDay> = None;

    for day in days {
        if day.count > 0 {
            let extends = previous.is_some_and(|prev| prev.count > 0 && is_next_day(prev.date, day.date));
            if extends {
                run += 1;
            } else {
                run = 1;
                run_start = Some(day.date);
            }

            if run > longest {
                longest = run;
                longest_range = run_start.map(|start| DateRange { start, end: day.date });
            }
        } else {
            run = 0;
            run_start = None;
        }
        previous = Some(day);
    }

    (longest, longest_range)
}

fn current_streak(days: &[ContributionDay]) -> (u32, Option<DateRange>) {
    let Some(last) = days.last().filter(|day| day.count > 0) else {
        return (0, None);
    };

    let mut streak = 1u32;
    let mut start = last.date;

    for day in days.iter().rev().skip(1) {
        if day.count == 0 || !is_next_day(day.date, start) {
            break;
        }
        streak += 1;
        start = day.date;
    }

    (streak, Some(DateRange { start, end: last.date }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn day(y: i32, m: u32, d: u32, count: u64) -> ContributionDay {
        ContributionDay::new(date(y, m, d), count)
    }

    fn consecutive(start: NaiveDate, counts: &[u64]) -> Vec<ContributionDay> {
        start
            .iter_days()
            .zip(counts)
            .map(|(date, count)| ContributionDay::new(date, *count))
            .collect()
    }

    #[test]
    fn empty_series_has_no_data() {
        assert_eq!(analyze(&[]), StreakResult::default());
    }

    #[test]
    fn single_positive_day() {
        let result = analyze(&[day(2024, 3, 9, 4)]);
        let range = Some(DateRange::single(date(2024, 3, 9)));

        assert_eq!(result.current_streak, 1);
        assert_eq!(result.current_range, range);
        assert_eq!(result.longest_streak, 1);
        assert_eq!(result.longest_range, range);
        assert_eq!(result.total_contributions, 4);
        assert_eq!(result.total_range, range);
    }

    #[test]
    fn single_zero_day() {
        let result = analyze(&[day(2024, 3, 9, 0)]);

        assert_eq!(result.current_streak, 0);
        assert_eq!(result.current_range, None);
        assert_eq!(result.longest_streak, 0);
        assert_eq!(result.longest_range, None);
        assert_eq!(result.total_range, Some(DateRange::single(date(2024, 3, 9))));
    }

    #[test]
    fn zero_day_breaks_the_run() {
        let days = consecutive(date(2024, 1, 1), &[1, 1, 0, 1]);
        let result = analyze(&days);

        assert_eq!(result.longest_streak, 2);
        assert_eq!(
            result.longest_range,
            Some(DateRange {
                start: date(2024, 1, 1),
                end: date(2024, 1, 2),
            })
        );
        assert_eq!(result.current_streak, 1);
        assert_eq!(result.current_range, Some(DateRange::single(date(2024, 1, 4))));
        assert_eq!(result.total_contributions, 3);
    }

    #[test]
    fn unbroken_run_is_both_current_and_longest() {
        let days = consecutive(date(2024, 1, 1), &[1, 1, 1, 1, 1]);
        let result = analyze(&days);
        let range = Some(DateRange {
            start: date(2024, 1, 1),
            end: date(2024, 1, 5),
        });

        assert_eq!(result.current_streak, 5);
        assert_eq!(result.longest_streak, 5);
        assert_eq!(result.current_range, range);
        assert_eq!(result.longest_range, range);
    }

    #[test]
    fn missing_date_is_a_break() {
        let days = vec![
            day(2024, 1, 1, 1),
            day(2024, 1, 2, 1),
            day(2024, 1, 3, 1),
            day(2024, 1, 5, 1),
            day(2024, 1, 6, 1),
        ];
        let result = analyze(&days);

        assert_eq!(result.longest_streak, 3);
        assert_eq!(result.current_streak, 2);
        assert_eq!(
            result.current_range,
            Some(DateRange {
                start: date(2024, 1, 5),
                end: date(2024, 1, 6),
            })
        );
    }

    #[test]
    fn zero_on_last_day_ends_current_streak() {
        let days = consecutive(date(2024, 1, 1), &[3, 3, 3, 0]);
        let result = analyze(&days);

        assert_eq!(result.current_streak, 0);
        assert_eq!(result.current_range, None);
        assert_eq!(result.longest_streak, 3);
    }

    #[test]
    fn earliest_of_equal_runs_is_kept() {
        let days = consecutive(date(2024, 1, 1), &[1, 1, 0, 2, 2, 0]);
        let result = analyze(&days);

        assert_eq!(result.longest_streak, 2);
        assert_eq!(result.longest_range.map(|range| range.start), Some(date(2024, 1, 1)));
    }

    #[test]
    fn runs_cross_year_and_leap_boundaries() {
        let days = consecutive(date(2023, 12, 30), &[1, 1, 1, 1]);
        let result = analyze(&days);
        assert_eq!(result.longest_streak, 4);
        assert_eq!(result.current_streak, 4);

        let days = consecutive(date(2024, 2, 28), &[1, 1, 1]);
        assert_eq!(days[2].date, date(2024, 3, 1));
        assert_eq!(analyze(&days).current_streak, 3);
    }

    #[test]
    fn normalize_sorts_and_dedups_overlapping_windows() {
        let days = normalize_days(vec![
            day(2024, 1, 1, 2),
            day(2023, 12, 31, 1),
            day(2024, 1, 1, 2),
            day(2023, 12, 30, 0),
        ]);

        assert_eq!(
            days,
            vec![day(2023, 12, 30, 0), day(2023, 12, 31, 1), day(2024, 1, 1, 2)]
        );
    }
}
