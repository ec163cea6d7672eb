//! Demo and placeholder data generation.
//!
//! Everything synthetic lives here, outside the aggregation functions:
//! the aggregator itself is deterministic, and callers that want
//! placeholder visuals for empty collections opt in explicitly.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::model::{Link, Priority, Task};

/// Overlay pattern for an all-zero task series, as (offset from the window
/// end, count) pairs.
const TASK_PATTERN: [(usize, usize); 5] = [(1, 2), (2, 1), (4, 3), (6, 2), (9, 1)];

/// Overlay pattern for an all-zero link series.
const LINK_PATTERN: [(usize, usize); 5] = [(1, 1), (3, 2), (5, 1), (8, 2), (10, 1)];

/// Fill missing `completed_at` stamps on completed tasks with a
/// pseudo-random instant between `created_at` and `now`.
///
/// Older records were completed without a timestamp; this makes them
/// usable for completion-time charts at the cost of accuracy. Tasks
/// without a `created_at` are left untouched.
pub fn synthesize_completed_at<R: Rng>(tasks: &mut [Task], now: DateTime<Utc>, rng: &mut R) {
    for task in tasks.iter_mut() {
        if !task.is_completed || task.completed_at.is_some() {
            continue;
        }
        let Some(created) = task.created_at else {
            continue;
        };
        let span = (now - created).num_seconds().max(0);
        let offset = rng.gen_range(0..=span);
        task.completed_at = Some(created + Duration::seconds(offset));
    }
}

/// Overlay the fixed demo pattern onto an all-zero task series.
///
/// Returns whether the overlay was applied; a series with any real signal
/// is left untouched. Pattern slots that fall outside a short window are
/// skipped.
pub fn fallback_task_series(series: &mut [usize]) -> bool {
    overlay(series, &TASK_PATTERN)
}

/// Overlay the fixed demo pattern onto an all-zero link series.
pub fn fallback_link_series(series: &mut [usize]) -> bool {
    overlay(series, &LINK_PATTERN)
}

fn overlay(series: &mut [usize], pattern: &[(usize, usize)]) -> bool {
    if series.is_empty() || series.iter().any(|&v| v != 0) {
        return false;
    }
    for &(back, count) in pattern {
        if let Some(idx) = series.len().checked_sub(back) {
            series[idx] = count;
        }
    }
    true
}

/// First-run sample tasks.
#[must_use]
pub fn sample_tasks(now: DateTime<Utc>) -> Vec<Task> {
    vec![
        Task {
            id: "1".to_string(),
            title: "Complete project proposal".to_string(),
            description: "Finish the draft and send for review".to_string(),
            is_completed: false,
            created_at: Some(now),
            completed_at: None,
            due_date: Some(now + Duration::days(3)),
            priority: Priority::High,
            category_id: "work".to_string(),
        },
        Task {
            id: "2".to_string(),
            title: "Research investment options".to_string(),
            description: "Look into ETFs and index funds".to_string(),
            is_completed: true,
            created_at: Some(now),
            completed_at: None,
            due_date: Some(now + Duration::days(7)),
            priority: Priority::Medium,
            category_id: "finance".to_string(),
        },
    ]
}

/// First-run sample links.
#[must_use]
pub fn sample_links(now: DateTime<Utc>) -> Vec<Link> {
    vec![
        Link {
            id: "1".to_string(),
            url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
            title: "Productivity Tips Video".to_string(),
            description: "Great video on improving daily productivity".to_string(),
            created_at: Some(now),
            category_id: "self-help".to_string(),
            tags: vec!["productivity".to_string(), "habits".to_string()],
        },
        Link {
            id: "2".to_string(),
            url: "https://www.investopedia.com/terms/i/indexfund.asp".to_string(),
            title: "Index Funds Explained".to_string(),
            description: "Comprehensive guide to index fund investing".to_string(),
            created_at: Some(now),
            category_id: "finance".to_string(),
            tags: vec!["investing".to_string(), "beginners".to_string()],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::datetime::parse_timestamp;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_synthesize_fills_only_missing_stamps() {
        let now = parse_timestamp("2023-10-10T12:00:00Z").unwrap();
        let mut tasks = sample_tasks(parse_timestamp("2023-10-01T10:00:00Z").unwrap());
        let mut rng = StdRng::seed_from_u64(7);

        synthesize_completed_at(&mut tasks, now, &mut rng);

        // open task untouched
        assert!(tasks[0].completed_at.is_none());

        // completed task stamped within [created_at, now]
        let stamped = tasks[1].completed_at.unwrap();
        assert!(stamped >= tasks[1].created_at.unwrap());
        assert!(stamped <= now);
    }

    #[test]
    fn test_synthesize_keeps_existing_stamp() {
        let created = parse_timestamp("2023-10-01T10:00:00Z").unwrap();
        let now = parse_timestamp("2023-10-10T12:00:00Z").unwrap();
        let mut tasks = sample_tasks(created);
        tasks[1].completed_at = parse_timestamp("2023-10-02T09:00:00Z");

        let mut rng = StdRng::seed_from_u64(7);
        synthesize_completed_at(&mut tasks, now, &mut rng);
        assert_eq!(tasks[1].completed_at, parse_timestamp("2023-10-02T09:00:00Z"));
    }

    #[test]
    fn test_fallback_applies_only_to_all_zero() {
        let mut series = vec![0usize; 14];
        assert!(fallback_task_series(&mut series));
        assert_eq!(series[13], 2);
        assert_eq!(series[12], 1);
        assert_eq!(series[10], 3);
        assert_eq!(series[8], 2);
        assert_eq!(series[5], 1);
        assert_eq!(series.iter().sum::<usize>(), 9);

        let mut real = vec![0usize; 14];
        real[3] = 1;
        assert!(!fallback_task_series(&mut real));
        assert_eq!(real.iter().sum::<usize>(), 1);
    }

    #[test]
    fn test_fallback_link_pattern() {
        let mut series = vec![0usize; 14];
        assert!(fallback_link_series(&mut series));
        assert_eq!(series[13], 1);
        assert_eq!(series[11], 2);
        assert_eq!(series[9], 1);
        assert_eq!(series[6], 2);
        assert_eq!(series[4], 1);
    }

    #[test]
    fn test_fallback_tolerates_short_windows() {
        let mut series = vec![0usize; 5];
        assert!(fallback_task_series(&mut series));
        // only the offsets that fit are applied
        assert_eq!(series, vec![0, 3, 0, 1, 2]);

        let mut empty: Vec<usize> = Vec::new();
        assert!(!fallback_task_series(&mut empty));
    }

    #[test]
    fn test_sample_data_shape() {
        let now = parse_timestamp("2023-10-01T10:00:00Z").unwrap();
        let tasks = sample_tasks(now);
        let links = sample_links(now);
        assert_eq!(tasks.len(), 2);
        assert_eq!(links.len(), 2);
        assert!(tasks[1].is_completed);
        assert_eq!(links[0].tags, vec!["productivity", "habits"]);
    }
}
