//! Statistics command implementation.
//!
//! Renders the aggregator's outputs as dashboards, charts, and streak
//! reports.

use chrono::Utc;
use colored::Colorize;
use std::collections::BTreeMap;

use crate::cli::args::{OutputFormat, StatsCommands};
use crate::config::Config;
use crate::core::datetime::local_day;
use crate::error::LinkTaskerError;
use crate::features::stats::{
    completion_by_category, count_by_priority, demo, generate_insights, links_by_category,
    render_bar_chart, render_heatmap, render_progress_bar, render_sparkline, render_summary_box,
    CompletionTime, InsightLevel, Overview, StatusBreakdown, StreakSummary, TimeSeries,
};
use crate::model::{registry, Task};
use crate::output::to_json;
use crate::storage::JsonStore;

/// Execute stats subcommands.
pub fn stats(
    store: &JsonStore,
    config: &Config,
    cmd: Option<StatsCommands>,
    format: OutputFormat,
) -> Result<String, LinkTaskerError> {
    let tasks = store.load_tasks()?;
    let links = store.load_links()?;
    let now = Utc::now();
    let today = local_day(now);

    match cmd {
        None | Some(StatsCommands::Dashboard) => {
            let overview = Overview::calculate(&tasks, &links, config.stats.timeline_days, now);
            render_dashboard(&overview, format)
        },
        Some(StatsCommands::Status) => {
            let breakdown = StatusBreakdown::calculate(&tasks, now);
            render_status(&breakdown, format)
        },
        Some(StatsCommands::Categories) => {
            let completion = completion_by_category(&tasks);
            match format {
                OutputFormat::Json => to_json(&completion),
                OutputFormat::Pretty => {
                    if completion.is_empty() {
                        return Ok("No categorized tasks yet.".to_string());
                    }
                    let mut output = Vec::new();
                    output.push("Completion by category".bold().to_string());
                    output.push("─".repeat(50));
                    for entry in &completion {
                        output.push(format!(
                            "{:12} {}",
                            entry.name,
                            render_progress_bar(entry.percent_complete as usize, 100, 20)
                        ));
                    }
                    Ok(output.join("\n"))
                },
            }
        },
        Some(StatsCommands::Priorities) => {
            let counts = count_by_priority(&tasks);
            match format {
                OutputFormat::Json => to_json(&counts),
                OutputFormat::Pretty => {
                    let data: Vec<(String, usize)> = counts
                        .iter()
                        .map(|c| (c.name.to_string(), c.count))
                        .collect();
                    let mut output = Vec::new();
                    output.push("Tasks by priority".bold().to_string());
                    output.push("─".repeat(40));
                    output.push(render_bar_chart(&data, 6, 25));
                    Ok(output.join("\n"))
                },
            }
        },
        Some(StatsCommands::Links) => {
            let counts = links_by_category(&links);
            match format {
                OutputFormat::Json => to_json(&counts),
                OutputFormat::Pretty => {
                    let data: Vec<(String, usize)> = counts
                        .iter()
                        .map(|c| (c.name.to_string(), c.count))
                        .collect();
                    let mut output = Vec::new();
                    output.push("Links by category".bold().to_string());
                    output.push("─".repeat(40));
                    output.push(render_bar_chart(&data, 13, 25));
                    Ok(output.join("\n"))
                },
            }
        },
        Some(StatsCommands::Timeline { days, demo: demo_flag }) => {
            let window = days.unwrap_or(config.stats.timeline_days);
            let mut series = TimeSeries::calculate(&tasks, &links, window, today);

            let mut overlaid = false;
            if demo_flag || config.stats.demo_fallback {
                overlaid |= demo::fallback_task_series(&mut series.tasks_completed);
                overlaid |= demo::fallback_link_series(&mut series.links_created);
            }

            render_timeline(&series, overlaid, format)
        },
        Some(StatsCommands::CompletionTime) => {
            let pace = CompletionTime::calculate(&tasks);
            render_completion_time(&pace, format)
        },
        Some(StatsCommands::Streak) => render_streak(&tasks, today, format),
    }
}

/// Render the full dashboard.
fn render_dashboard(overview: &Overview, format: OutputFormat) -> Result<String, LinkTaskerError> {
    match format {
        OutputFormat::Json => to_json(overview),
        OutputFormat::Pretty => {
            let mut output = Vec::new();

            output.push("╔════════════════════════════════════════════════════════════╗".to_string());
            output.push("║                  LINKTASKER DASHBOARD                      ║".to_string());
            output.push("╚════════════════════════════════════════════════════════════╝".to_string());
            output.push(String::new());

            output.push("📋 TASKS".bold().to_string());
            output.push("─".repeat(50));
            output.push(format!(
                "  Completed: {}  Overdue: {}  Pending: {}",
                overview.breakdown.completed.to_string().green(),
                if overview.breakdown.overdue > 0 {
                    overview.breakdown.overdue.to_string().red().to_string()
                } else {
                    "0".green().to_string()
                },
                overview.breakdown.pending.to_string().yellow()
            ));
            output.push(format!(
                "  Total tasks: {}  Saved links: {}",
                overview.task_count, overview.link_count
            ));
            output.push(String::new());

            output.push("🔥 STREAK".bold().to_string());
            output.push("─".repeat(50));
            let streak_display = if overview.current_streak > 0 {
                format!("{} days", overview.current_streak).green().to_string()
            } else {
                "0 days".dimmed().to_string()
            };
            output.push(format!(
                "  Current: {}  Longest: {} days  Active days: {}",
                streak_display, overview.longest_streak, overview.streaks.active_days
            ));
            if let Some(days) = overview.days_since_last_completion {
                if days > 0 {
                    output.push(format!("  Days since last completion: {days}"));
                }
            }
            output.push(String::new());

            output.push("📈 ACTIVITY".bold().to_string());
            output.push("─".repeat(50));
            output.push(format!(
                "  Tasks completed: {}",
                render_sparkline(&overview.series.tasks_completed)
            ));
            output.push(format!(
                "  Links saved:     {}",
                render_sparkline(&overview.series.links_created)
            ));
            output.push(format!(
                "  (last {} days, oldest first)",
                overview.series.window()
            ));
            output.push(String::new());

            if !overview.by_category.is_empty() {
                output.push("📁 CATEGORIES".bold().to_string());
                output.push("─".repeat(50));
                for entry in &overview.by_category {
                    output.push(format!(
                        "  {:12} {}",
                        entry.name,
                        render_progress_bar(entry.percent_complete as usize, 100, 16)
                    ));
                }
                output.push(String::new());
            }

            let insights = generate_insights(overview);
            let top_insights: Vec<_> = insights.into_iter().take(3).collect();
            if !top_insights.is_empty() {
                output.push("💡 INSIGHTS".bold().to_string());
                output.push("─".repeat(50));
                for insight in top_insights {
                    let icon = match insight.level {
                        InsightLevel::High => "!".red().to_string(),
                        InsightLevel::Medium => "*".yellow().to_string(),
                        InsightLevel::Low => "-".blue().to_string(),
                    };
                    output.push(format!("  {} {}", icon, insight.message));
                }
            }

            Ok(output.join("\n"))
        },
    }
}

/// Render the status breakdown.
fn render_status(
    breakdown: &StatusBreakdown,
    format: OutputFormat,
) -> Result<String, LinkTaskerError> {
    match format {
        OutputFormat::Json => to_json(breakdown),
        OutputFormat::Pretty => {
            let items = [
                ("Completed", breakdown.completed.to_string()),
                ("Overdue", breakdown.overdue.to_string()),
                ("Pending", breakdown.pending.to_string()),
                ("Total", breakdown.total().to_string()),
            ];
            let mut output = vec![render_summary_box("Task Status", &items)];
            if breakdown.total() > 0 {
                output.push(format!(
                    "Done: {}",
                    render_progress_bar(breakdown.completed, breakdown.total(), 30)
                ));
            }
            Ok(output.join("\n"))
        },
    }
}

/// Render the activity timeline.
fn render_timeline(
    series: &TimeSeries,
    overlaid: bool,
    format: OutputFormat,
) -> Result<String, LinkTaskerError> {
    match format {
        OutputFormat::Json => to_json(series),
        OutputFormat::Pretty => {
            let mut output = Vec::new();
            output.push(
                format!("Activity (last {} days)", series.window())
                    .bold()
                    .to_string(),
            );
            output.push("═".repeat(50));
            if overlaid {
                output.push("(showing sample data - nothing recorded yet)".dimmed().to_string());
            }
            output.push(String::new());

            output.push(format!(
                "Tasks completed: {}",
                render_sparkline(&series.tasks_completed)
            ));
            output.push(format!(
                "Links saved:     {}",
                render_sparkline(&series.links_created)
            ));
            output.push(String::new());

            let first = series.labels.first().cloned().unwrap_or_default();
            let last = series.labels.last().cloned().unwrap_or_default();
            let task_total: usize = series.tasks_completed.iter().sum();
            let link_total: usize = series.links_created.iter().sum();
            output.push(format!("{first} .. {last}"));
            output.push(format!(
                "Total: {task_total} tasks completed, {link_total} links saved"
            ));

            Ok(output.join("\n"))
        },
    }
}

/// Render completion pace.
fn render_completion_time(
    pace: &CompletionTime,
    format: OutputFormat,
) -> Result<String, LinkTaskerError> {
    match format {
        OutputFormat::Json => to_json(pace),
        OutputFormat::Pretty => {
            let quickest = registry::category_by_id(&pace.quickest_category_id);
            let slowest = registry::category_by_id(&pace.slowest_category_id);
            let items = [
                ("Average", format!("{:.1} days", pace.average_days)),
                ("Quickest category", quickest.name.to_string()),
                ("Slowest category", slowest.name.to_string()),
            ];
            Ok(render_summary_box("Completion Time", &items))
        },
    }
}

/// Render streak details and the activity heatmap.
fn render_streak(
    tasks: &[Task],
    today: chrono::NaiveDate,
    format: OutputFormat,
) -> Result<String, LinkTaskerError> {
    let current = crate::features::stats::current_streak(tasks, today);
    let longest = crate::features::stats::longest_streak(tasks);
    let summary = StreakSummary::calculate(tasks);

    match format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "currentStreak": current,
                "longestStreak": longest,
                "summary": serde_json::to_value(&summary)?,
            });
            to_json(&report)
        },
        OutputFormat::Pretty => {
            let mut output = Vec::new();

            let mut items = vec![
                ("Current streak", format!("{current} days")),
                ("Longest streak", format!("{longest} days")),
                ("Active days", summary.active_days.to_string()),
                ("Streak runs", summary.total_streak_runs.to_string()),
                (
                    "Average run",
                    format!("{:.1} days", summary.average_streak_run_length),
                ),
            ];
            if let Some(range) = &summary.longest_streak_date_range {
                items.push(("Best run", range.clone()));
            }
            if let Some(weekday) = summary.most_productive_weekday {
                items.push(("Best weekday", weekday.to_string()));
            }
            output.push(render_summary_box("Streaks", &items));
            output.push(String::new());

            let mut day_counts: BTreeMap<chrono::NaiveDate, usize> = BTreeMap::new();
            for day in tasks.iter().filter_map(Task::completion_day) {
                *day_counts.entry(day).or_default() += 1;
            }
            output.push("Activity heatmap (last 12 weeks)".bold().to_string());
            output.push(render_heatmap(&day_counts, 12, today));

            Ok(output.join("\n"))
        },
    }
}
