//! Insights generation from statistics.
//!
//! Turns the aggregate numbers into short, actionable observations for
//! the dashboard.

use serde::Serialize;

use super::aggregate::Overview;
use crate::model::registry;

/// Insight importance level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum InsightLevel {
    /// Needs attention.
    High,
    /// Worth noting.
    Medium,
    /// Informational.
    Low,
}

/// A short observation about the current data.
#[derive(Debug, Clone, Serialize)]
pub struct Insight {
    pub message: String,
    pub level: InsightLevel,
    pub category: String,
    pub suggestion: Option<String>,
}

impl Insight {
    fn new(message: &str, level: InsightLevel, category: &str) -> Self {
        Self {
            message: message.to_string(),
            level,
            category: category.to_string(),
            suggestion: None,
        }
    }

    fn with_suggestion(mut self, suggestion: &str) -> Self {
        self.suggestion = Some(suggestion.to_string());
        self
    }
}

/// Generate insights from computed aggregates, most important first.
#[must_use]
pub fn generate_insights(overview: &Overview) -> Vec<Insight> {
    let mut insights = Vec::new();

    insights.extend(deadline_insights(overview));
    insights.extend(streak_insights(overview));
    insights.extend(pace_insights(overview));
    insights.extend(workload_insights(overview));

    insights.sort_by_key(|insight| match insight.level {
        InsightLevel::High => 0,
        InsightLevel::Medium => 1,
        InsightLevel::Low => 2,
    });

    insights
}

fn deadline_insights(overview: &Overview) -> Vec<Insight> {
    let mut insights = Vec::new();
    let overdue = overview.breakdown.overdue;

    if overdue > 5 {
        insights.push(
            Insight::new(
                &format!("You have {overdue} overdue tasks - this needs attention"),
                InsightLevel::High,
                "Deadlines",
            )
            .with_suggestion("Complete, reschedule, or delete overdue items"),
        );
    } else if overdue > 0 {
        insights.push(
            Insight::new(
                &format!("You have {overdue} overdue task(s)"),
                InsightLevel::Medium,
                "Deadlines",
            )
            .with_suggestion("Use 'ltask task list --status overdue' to see them"),
        );
    }

    insights
}

fn streak_insights(overview: &Overview) -> Vec<Insight> {
    let mut insights = Vec::new();

    if overview.current_streak >= 7 {
        insights.push(Insight::new(
            &format!(
                "Amazing! {} day completion streak - keep it going!",
                overview.current_streak
            ),
            InsightLevel::Low,
            "Streak",
        ));
    } else if overview.current_streak >= 3 {
        insights.push(Insight::new(
            &format!(
                "{} day streak - you're building momentum!",
                overview.current_streak
            ),
            InsightLevel::Low,
            "Streak",
        ));
    } else if overview.days_since_last_completion.is_some_and(|days| days > 3) {
        insights.push(
            Insight::new(
                &format!(
                    "No completions in {} days",
                    overview.days_since_last_completion.unwrap_or(0)
                ),
                InsightLevel::Medium,
                "Streak",
            )
            .with_suggestion("Even one small task completion can rebuild momentum"),
        );
    }

    if overview.longest_streak > 0 && overview.current_streak > 0 {
        let to_beat = overview.longest_streak.saturating_sub(overview.current_streak);
        if to_beat > 0 && to_beat <= 3 {
            insights.push(Insight::new(
                &format!(
                    "You're {} days away from matching your best streak of {} days!",
                    to_beat, overview.longest_streak
                ),
                InsightLevel::Low,
                "Streak",
            ));
        }
    }

    if let Some(weekday) = overview.streaks.most_productive_weekday {
        insights.push(Insight::new(
            &format!("{weekday} is your most productive day of the week"),
            InsightLevel::Low,
            "Streak",
        ));
    }

    insights
}

fn pace_insights(overview: &Overview) -> Vec<Insight> {
    let mut insights = Vec::new();

    // Completion-time numbers are placeholders until something real
    // has been completed with timestamps.
    if overview.breakdown.completed == 0 {
        return insights;
    }

    let quickest = registry::category_by_id(&overview.completion_time.quickest_category_id);
    let slowest = registry::category_by_id(&overview.completion_time.slowest_category_id);

    insights.push(Insight::new(
        &format!(
            "Tasks take {:.1} days to complete on average",
            overview.completion_time.average_days
        ),
        InsightLevel::Low,
        "Pace",
    ));

    if quickest.id != slowest.id {
        insights.push(Insight::new(
            &format!(
                "{} tasks finish fastest; {} tasks linger longest",
                quickest.name, slowest.name
            ),
            InsightLevel::Low,
            "Pace",
        ));
    }

    insights
}

fn workload_insights(overview: &Overview) -> Vec<Insight> {
    let mut insights = Vec::new();

    if overview.breakdown.pending > 50 {
        insights.push(
            Insight::new(
                &format!(
                    "You have {} pending tasks - consider consolidating",
                    overview.breakdown.pending
                ),
                InsightLevel::Medium,
                "Workload",
            )
            .with_suggestion("Large task lists are overwhelming. Review and prune regularly."),
        );
    }

    if overview.task_count == 0 {
        insights.push(
            Insight::new("No tasks yet", InsightLevel::Low, "Workload")
                .with_suggestion("Add your first task with 'ltask task add'"),
        );
    }

    if overview.link_count == 0 {
        insights.push(
            Insight::new("No saved links yet", InsightLevel::Low, "Workload")
                .with_suggestion("Save a link with 'ltask link add'"),
        );
    }

    insights
}
