//! Statistics and streak analytics.
//!
//! Pure aggregation over task and link collections:
//! - Completion status, category, and priority breakdowns
//! - Daily activity time series
//! - Completion-time averages
//! - Streak tracking and streak history
//! - Derived insights and terminal charts
//!
//! Synthetic placeholder data (random completion stamps, empty-state
//! chart patterns) lives in [`demo`] and is only ever applied by callers
//! that opt in.

pub mod aggregate;
pub mod demo;
pub mod insights;
pub mod streaks;
pub mod visualization;

pub use aggregate::{
    completion_by_category, count_by_priority, links_by_category, CategoryCompletion,
    CompletionTime, LinkCategoryCount, Overview, PriorityCount, StatusBreakdown, TimeSeries,
    DEFAULT_WINDOW_DAYS,
};
pub use insights::{generate_insights, Insight, InsightLevel};
pub use streaks::{completion_days, current_streak, longest_streak, StreakSummary};
pub use visualization::{
    render_bar_chart, render_heatmap, render_progress_bar, render_sparkline, render_summary_box,
};
