//! Streak calculations over completed tasks.
//!
//! A streak-day is a local calendar day with at least one completion; a run
//! is a maximal sequence of consecutive streak-days. Streak-days derive
//! from the same effective completion date the time series uses, so the
//! two views never disagree about which days were active.

use chrono::{Duration, NaiveDate};
use serde::Serialize;
use std::collections::BTreeSet;

use crate::core::datetime::{range_label, weekday_index, WEEKDAY_NAMES};
use crate::model::Task;

/// Hard cap on the backward walk, guarding against pathological data.
const WALK_CAP: usize = 365;

/// The distinct local calendar days with at least one completion.
#[must_use]
pub fn completion_days(tasks: &[Task]) -> BTreeSet<NaiveDate> {
    tasks.iter().filter_map(Task::completion_day).collect()
}

/// Consecutive streak-days ending at `today`, with one grace day: when
/// today has no completion yet but yesterday does, counting starts from
/// yesterday, so a streak doesn't read as broken before the day is over.
///
/// Returns 0 when neither today nor yesterday is a streak-day. The walk
/// stops after a 365-day cap.
#[must_use]
pub fn current_streak(tasks: &[Task], today: NaiveDate) -> usize {
    walk_back(&completion_days(tasks), today)
}

fn walk_back(days: &BTreeSet<NaiveDate>, today: NaiveDate) -> usize {
    let yesterday = today - Duration::days(1);
    let start = if days.contains(&today) {
        today
    } else if days.contains(&yesterday) {
        yesterday
    } else {
        return 0;
    };

    let mut streak = 0;
    let mut check = start;
    while days.contains(&check) && streak < WALK_CAP {
        streak += 1;
        check -= Duration::days(1);
    }
    streak
}

/// Length of the longest run of consecutive streak-days.
///
/// 0 with no completions; 1 when completions exist but no two days are
/// consecutive.
#[must_use]
pub fn longest_streak(tasks: &[Task]) -> usize {
    runs(&completion_days(tasks))
        .iter()
        .map(|run| run_length(*run))
        .max()
        .unwrap_or(0)
}

/// Maximal consecutive-day runs, oldest first, as (start, end) inclusive.
fn runs(days: &BTreeSet<NaiveDate>) -> Vec<(NaiveDate, NaiveDate)> {
    let mut result = Vec::new();
    let mut iter = days.iter().copied();
    let Some(first) = iter.next() else {
        return result;
    };

    let mut start = first;
    let mut prev = first;
    for day in iter {
        if (day - prev).num_days() == 1 {
            prev = day;
            continue;
        }
        result.push((start, prev));
        start = day;
        prev = day;
    }
    result.push((start, prev));
    result
}

fn run_length((start, end): (NaiveDate, NaiveDate)) -> usize {
    ((end - start).num_days() + 1) as usize
}

/// Summary of streak history across all completions.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreakSummary {
    /// Distinct calendar days with at least one completion.
    pub active_days: usize,
    /// Number of maximal consecutive-day runs.
    pub total_streak_runs: usize,
    /// Mean run length; 0.0 when there are no runs.
    pub average_streak_run_length: f64,
    /// Formatted start/end of the best run, e.g. `Sep 15 - Oct 02`.
    /// The earliest run wins when two runs share the best length.
    pub longest_streak_date_range: Option<String>,
    /// Weekday with the most completions, Sunday through Saturday.
    /// Ties go to the earliest weekday counting from Sunday.
    pub most_productive_weekday: Option<&'static str>,
}

impl StreakSummary {
    #[must_use]
    pub fn calculate(tasks: &[Task]) -> Self {
        let days = completion_days(tasks);
        let runs = runs(&days);

        let average = if runs.is_empty() {
            0.0
        } else {
            let total: usize = runs.iter().map(|run| run_length(*run)).sum();
            total as f64 / runs.len() as f64
        };

        let mut best: Option<(NaiveDate, NaiveDate)> = None;
        for run in &runs {
            if best.is_none_or(|b| run_length(*run) > run_length(b)) {
                best = Some(*run);
            }
        }

        let mut by_weekday = [0usize; 7];
        for day in tasks.iter().filter_map(Task::completion_day) {
            by_weekday[weekday_index(day)] += 1;
        }
        let most_productive_weekday = if by_weekday.iter().all(|&count| count == 0) {
            None
        } else {
            let mut best_idx = 0;
            for (idx, &count) in by_weekday.iter().enumerate() {
                if count > by_weekday[best_idx] {
                    best_idx = idx;
                }
            }
            Some(WEEKDAY_NAMES[best_idx])
        };

        Self {
            active_days: days.len(),
            total_streak_runs: runs.len(),
            average_streak_run_length: average,
            longest_streak_date_range: best.map(|(start, end)| range_label(start, end)),
            most_productive_weekday,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::datetime::local_midnight;
    use crate::model::Priority;
    use chrono::{DateTime, Utc};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Local noon on a date, so day-bucketing is timezone-stable in tests.
    fn noon(day: NaiveDate) -> Option<DateTime<Utc>> {
        local_midnight(day).map(|ts| ts + Duration::hours(12))
    }

    fn completed_on(day: NaiveDate) -> Task {
        Task {
            id: day.to_string(),
            title: "done".to_string(),
            description: String::new(),
            is_completed: true,
            created_at: noon(day),
            completed_at: noon(day),
            due_date: None,
            priority: Priority::Medium,
            category_id: "work".to_string(),
        }
    }

    fn completed_on_all(days: &[NaiveDate]) -> Vec<Task> {
        days.iter().copied().map(completed_on).collect()
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(current_streak(&[], date(2024, 1, 5)), 0);
        assert_eq!(longest_streak(&[]), 0);

        let summary = StreakSummary::calculate(&[]);
        assert_eq!(summary.active_days, 0);
        assert_eq!(summary.total_streak_runs, 0);
        assert!(summary.average_streak_run_length.abs() < f64::EPSILON);
        assert!(summary.longest_streak_date_range.is_none());
        assert!(summary.most_productive_weekday.is_none());
    }

    #[test]
    fn test_gap_before_today_resets_current_streak() {
        // completions on Jan 1-3 and Jan 5; the Jan 4 gap breaks continuity
        let tasks = completed_on_all(&[
            date(2024, 1, 1),
            date(2024, 1, 2),
            date(2024, 1, 3),
            date(2024, 1, 5),
        ]);
        assert_eq!(current_streak(&tasks, date(2024, 1, 5)), 1);
        assert_eq!(longest_streak(&tasks), 3);
    }

    #[test]
    fn test_grace_day_counts_from_yesterday() {
        let tasks = completed_on_all(&[date(2024, 1, 2), date(2024, 1, 3), date(2024, 1, 4)]);
        // nothing completed today (Jan 5) yet; streak still reads 3
        assert_eq!(current_streak(&tasks, date(2024, 1, 5)), 3);
        // two days later the streak is gone
        assert_eq!(current_streak(&tasks, date(2024, 1, 6)), 0);
    }

    #[test]
    fn test_current_streak_monotone_as_completions_recede() {
        let tasks = completed_on_all(&[date(2024, 1, 3), date(2024, 1, 4)]);
        let today = current_streak(&tasks, date(2024, 1, 4));
        let tomorrow = current_streak(&tasks, date(2024, 1, 5));
        let later = current_streak(&tasks, date(2024, 1, 6));
        assert!(today >= tomorrow);
        assert!(tomorrow >= later);
    }

    #[test]
    fn test_longest_streak_no_consecutive_days() {
        let tasks = completed_on_all(&[date(2024, 1, 1), date(2024, 1, 3), date(2024, 1, 10)]);
        assert_eq!(longest_streak(&tasks), 1);
    }

    #[test]
    fn test_longest_at_least_current() {
        let tasks = completed_on_all(&[
            date(2024, 1, 1),
            date(2024, 1, 2),
            date(2024, 1, 7),
            date(2024, 1, 8),
            date(2024, 1, 9),
        ]);
        for today in [date(2024, 1, 2), date(2024, 1, 9), date(2024, 1, 20)] {
            assert!(longest_streak(&tasks) >= current_streak(&tasks, today));
        }
    }

    #[test]
    fn test_walk_cap_bounds_the_scan() {
        let start = date(2022, 1, 1);
        let days: Vec<NaiveDate> = (0..400).map(|i| start + Duration::days(i)).collect();
        let tasks = completed_on_all(&days);
        let last = start + Duration::days(399);
        assert_eq!(current_streak(&tasks, last), 365);
    }

    #[test]
    fn test_multiple_completions_one_day_is_one_streak_day() {
        let tasks = completed_on_all(&[date(2024, 1, 5), date(2024, 1, 5), date(2024, 1, 5)]);
        assert_eq!(current_streak(&tasks, date(2024, 1, 5)), 1);
        assert_eq!(StreakSummary::calculate(&tasks).active_days, 1);
    }

    #[test]
    fn test_summary_runs_and_average() {
        // runs: Jan 1-3 (len 3), Jan 5 (len 1) -> average 2.0
        let tasks = completed_on_all(&[
            date(2024, 1, 1),
            date(2024, 1, 2),
            date(2024, 1, 3),
            date(2024, 1, 5),
        ]);
        let summary = StreakSummary::calculate(&tasks);
        assert_eq!(summary.active_days, 4);
        assert_eq!(summary.total_streak_runs, 2);
        assert!((summary.average_streak_run_length - 2.0).abs() < f64::EPSILON);
        assert_eq!(
            summary.longest_streak_date_range.as_deref(),
            Some("Jan 01 - Jan 03")
        );
    }

    #[test]
    fn test_summary_earliest_best_run_wins_tie() {
        // two runs of length 2
        let tasks = completed_on_all(&[
            date(2024, 1, 1),
            date(2024, 1, 2),
            date(2024, 1, 10),
            date(2024, 1, 11),
        ]);
        let summary = StreakSummary::calculate(&tasks);
        assert_eq!(
            summary.longest_streak_date_range.as_deref(),
            Some("Jan 01 - Jan 02")
        );
    }

    #[test]
    fn test_most_productive_weekday() {
        // 2024-01-07 was a Sunday; two completions on Monday Jan 8
        let tasks = completed_on_all(&[date(2024, 1, 7), date(2024, 1, 8), date(2024, 1, 8)]);
        let summary = StreakSummary::calculate(&tasks);
        assert_eq!(summary.most_productive_weekday, Some("Monday"));
    }

    #[test]
    fn test_most_productive_weekday_tie_goes_to_earliest() {
        // one completion each on Sunday Jan 7 and Wednesday Jan 10
        let tasks = completed_on_all(&[date(2024, 1, 10), date(2024, 1, 7)]);
        let summary = StreakSummary::calculate(&tasks);
        assert_eq!(summary.most_productive_weekday, Some("Sunday"));
    }
}
