//! Aggregate metrics over tasks and links.
//!
//! Every function here is pure: inputs are never mutated, nothing is read
//! from the environment, and date-dependent calculations take the reference
//! moment explicitly. A record with a missing or malformed timestamp stays
//! in the simple tallies and is skipped by date arithmetic.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::datetime::{day_label, whole_days_between};
use crate::model::{registry, Link, Priority, Task, TaskState};

/// Default window for the activity time series.
pub const DEFAULT_WINDOW_DAYS: usize = 14;

/// Task counts partitioned by completion status.
///
/// Every task lands in exactly one bucket, so the three counts always sum
/// to the collection size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusBreakdown {
    pub completed: usize,
    pub overdue: usize,
    pub pending: usize,
}

impl StatusBreakdown {
    /// Partition tasks by their state as of `now`.
    #[must_use]
    pub fn calculate(tasks: &[Task], now: DateTime<Utc>) -> Self {
        let mut breakdown = Self {
            completed: 0,
            overdue: 0,
            pending: 0,
        };
        for task in tasks {
            match task.state(now) {
                TaskState::Completed => breakdown.completed += 1,
                TaskState::Overdue => breakdown.overdue += 1,
                TaskState::Pending => breakdown.pending += 1,
            }
        }
        breakdown
    }

    #[must_use]
    pub const fn total(&self) -> usize {
        self.completed + self.overdue + self.pending
    }
}

/// Per-category completion percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCompletion {
    pub category_id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub percent_complete: u32,
}

/// Completion percentage for each fixed category that has at least one
/// task, in fixed category order.
///
/// Categories with no tasks are OMITTED, not zero-filled; the opposite of
/// [`links_by_category`]. Both policies are intentional and documented on
/// their functions. Tasks with dangling category ids are not tallied here.
#[must_use]
pub fn completion_by_category(tasks: &[Task]) -> Vec<CategoryCompletion> {
    registry::CATEGORIES
        .iter()
        .filter_map(|cat| {
            let mut total = 0usize;
            let mut completed = 0usize;
            for task in tasks.iter().filter(|t| t.category_id == cat.id) {
                total += 1;
                if task.is_completed {
                    completed += 1;
                }
            }
            if total == 0 {
                return None;
            }
            let percent = ((completed as f64 / total as f64) * 100.0).round() as u32;
            Some(CategoryCompletion {
                category_id: cat.id,
                name: cat.name,
                color: cat.color,
                percent_complete: percent,
            })
        })
        .collect()
}

/// Task count for one priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriorityCount {
    pub priority: Priority,
    pub name: &'static str,
    pub color: &'static str,
    pub count: usize,
}

/// Task counts per priority: always exactly 3 entries in low, medium, high
/// order, zero-filled. The counts sum to the collection size.
#[must_use]
pub fn count_by_priority(tasks: &[Task]) -> Vec<PriorityCount> {
    Priority::ALL
        .iter()
        .map(|&priority| PriorityCount {
            priority,
            name: priority.label(),
            color: priority.color(),
            count: tasks.iter().filter(|t| t.priority == priority).count(),
        })
        .collect()
}

/// Link count for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkCategoryCount {
    pub category_id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
    pub count: usize,
}

/// Link counts per category: always exactly 7 entries in fixed category
/// order, ZERO-FILLED; the opposite of [`completion_by_category`]'s
/// omit-if-empty rule. Links with dangling category ids are not counted.
#[must_use]
pub fn links_by_category(links: &[Link]) -> Vec<LinkCategoryCount> {
    registry::CATEGORIES
        .iter()
        .map(|cat| LinkCategoryCount {
            category_id: cat.id,
            name: cat.name,
            color: cat.color,
            count: links.iter().filter(|l| l.category_id == cat.id).count(),
        })
        .collect()
}

/// Daily activity over a trailing window: tasks completed and links
/// created per local calendar day, oldest day first, inclusive of `today`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeries {
    /// One label per day, e.g. `Oct 5`.
    pub labels: Vec<String>,
    pub tasks_completed: Vec<usize>,
    pub links_created: Vec<usize>,
}

impl TimeSeries {
    /// Bucket activity into the trailing `window_days` ending at `today`.
    ///
    /// Task buckets use the effective completion date (`completed_at`,
    /// falling back to `created_at`) of completed tasks. This function
    /// never fabricates data; the synthetic empty-state overlay lives in
    /// the demo module and is applied only by callers that opt in.
    #[must_use]
    pub fn calculate(tasks: &[Task], links: &[Link], window_days: usize, today: NaiveDate) -> Self {
        let window = window_days.max(1);
        let start = today - Duration::days(window as i64 - 1);

        let labels = (0..window)
            .map(|i| day_label(start + Duration::days(i as i64)))
            .collect();

        let mut tasks_completed = vec![0usize; window];
        for task in tasks {
            if let Some(slot) = task.completion_day().and_then(|d| slot_index(d, start, window)) {
                tasks_completed[slot] += 1;
            }
        }

        let mut links_created = vec![0usize; window];
        for link in links {
            if let Some(slot) = link.creation_day().and_then(|d| slot_index(d, start, window)) {
                links_created[slot] += 1;
            }
        }

        Self {
            labels,
            tasks_completed,
            links_created,
        }
    }

    /// Number of days in the window.
    #[must_use]
    pub fn window(&self) -> usize {
        self.labels.len()
    }
}

fn slot_index(day: NaiveDate, start: NaiveDate, window: usize) -> Option<usize> {
    let offset = (day - start).num_days();
    if offset >= 0 && offset < window as i64 {
        Some(offset as usize)
    } else {
        None
    }
}

/// How long completed tasks took, overall and per category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionTime {
    /// Mean days to complete, rounded to one decimal.
    pub average_days: f64,
    pub quickest_category_id: String,
    pub slowest_category_id: String,
}

impl CompletionTime {
    /// Average completion time over tasks that are completed and carry both
    /// `created_at` and `completed_at`. Each task contributes
    /// `max(1, whole days between the two)`, so same-day completions count
    /// as one day instead of zero.
    ///
    /// Per-category means decide the quickest and slowest categories over
    /// the raw stored ids (a dangling id competes under its own name).
    /// Ties go to the lexicographically smallest id. Returns the fixed
    /// placeholder when no completed task has usable timestamps.
    #[must_use]
    pub fn calculate(tasks: &[Task]) -> Self {
        let samples: Vec<(&str, i64)> = tasks
            .iter()
            .filter(|t| t.is_completed)
            .filter_map(|t| {
                let created = t.created_at?;
                let completed = t.completed_at?;
                Some((
                    t.category_id.as_str(),
                    whole_days_between(created, completed).max(1),
                ))
            })
            .collect();

        if samples.is_empty() {
            return Self::placeholder();
        }

        let total: i64 = samples.iter().map(|(_, days)| days).sum();
        let average = total as f64 / samples.len() as f64;

        let mut by_category: BTreeMap<&str, (i64, usize)> = BTreeMap::new();
        for &(category, days) in &samples {
            let entry = by_category.entry(category).or_insert((0, 0));
            entry.0 += days;
            entry.1 += 1;
        }

        let mut quickest: Option<(&str, f64)> = None;
        let mut slowest: Option<(&str, f64)> = None;
        for (&category, &(sum, count)) in &by_category {
            let mean = sum as f64 / count as f64;
            if quickest.is_none_or(|(_, best)| mean < best) {
                quickest = Some((category, mean));
            }
            if slowest.is_none_or(|(_, worst)| mean > worst) {
                slowest = Some((category, mean));
            }
        }

        Self {
            average_days: (average * 10.0).round() / 10.0,
            quickest_category_id: quickest.map_or_else(String::new, |(c, _)| c.to_string()),
            slowest_category_id: slowest.map_or_else(String::new, |(c, _)| c.to_string()),
        }
    }

    /// The documented placeholder for collections with no usable data.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            average_days: 3.2,
            quickest_category_id: "work".to_string(),
            slowest_category_id: "personal".to_string(),
        }
    }
}

/// Everything the dashboard shows, computed in one pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview {
    pub task_count: usize,
    pub link_count: usize,
    pub breakdown: StatusBreakdown,
    pub by_category: Vec<CategoryCompletion>,
    pub by_priority: Vec<PriorityCount>,
    pub link_categories: Vec<LinkCategoryCount>,
    pub series: TimeSeries,
    pub completion_time: CompletionTime,
    pub current_streak: usize,
    pub longest_streak: usize,
    pub streaks: super::streaks::StreakSummary,
    /// Days since the most recent completion; `None` when nothing has
    /// ever been completed.
    pub days_since_last_completion: Option<i64>,
}

impl Overview {
    /// Compute all aggregates as of `now`.
    #[must_use]
    pub fn calculate(tasks: &[Task], links: &[Link], window_days: usize, now: DateTime<Utc>) -> Self {
        let today = crate::core::datetime::local_day(now);
        let days = super::streaks::completion_days(tasks);
        let days_since_last_completion =
            days.iter().next_back().map(|last| (today - *last).num_days());

        Self {
            task_count: tasks.len(),
            link_count: links.len(),
            breakdown: StatusBreakdown::calculate(tasks, now),
            by_category: completion_by_category(tasks),
            by_priority: count_by_priority(tasks),
            link_categories: links_by_category(links),
            series: TimeSeries::calculate(tasks, links, window_days, today),
            completion_time: CompletionTime::calculate(tasks),
            current_streak: super::streaks::current_streak(tasks, today),
            longest_streak: super::streaks::longest_streak(tasks),
            streaks: super::streaks::StreakSummary::calculate(tasks),
            days_since_last_completion,
        }
    }
}
