use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};

use crate::core::datetime::local_day;
use crate::model::{registry, Link, Task, TaskState};

/// Color a string with a `#rrggbb` hex value, falling back to plain text
/// for anything the registry shouldn't contain anyway.
fn colorize_hex(text: &str, hex: &str) -> ColoredString {
    match registry::hex_to_rgb(hex) {
        Some((r, g, b)) => text.truecolor(r, g, b),
        None => text.normal(),
    }
}

/// Format a list of tasks as pretty output
pub fn format_tasks_pretty(tasks: &[&Task], title: &str, now: DateTime<Utc>) -> String {
    if tasks.is_empty() {
        return format!("{} (0 items)\n  No items", title);
    }

    let mut output = format!("{} ({} items)\n", title, tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        let state = task.state(now);
        let status_icon = match state {
            TaskState::Completed => "[x]".green(),
            TaskState::Overdue => "[ ]".red(),
            TaskState::Pending => "[ ]".white(),
        };

        let mut line = format!("{} {}", status_icon, task.title.bold());

        let category = task.category();
        line.push_str(&format!("  {}", colorize_hex(category.name, category.color)));

        line.push_str(&format!(
            "  {}",
            colorize_hex(task.priority.label(), task.priority.color())
        ));

        if let Some(due) = task.due_date {
            let due_str = local_day(due).to_string();
            let due_colored = if state == TaskState::Overdue {
                due_str.red().to_string()
            } else {
                due_str.yellow().to_string()
            };
            line.push_str(&format!("  due {due_colored}"));
        }

        line.push_str(&format!("  {}", task.id.dimmed()));

        output.push_str(&line);
        output.push('\n');
    }

    output
}

/// Format a list of links as pretty output
pub fn format_links_pretty(links: &[&Link], title: &str) -> String {
    if links.is_empty() {
        return format!("{} (0 items)\n  No items", title);
    }

    let mut output = format!("{} ({} items)\n", title, links.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for link in links {
        let category = link.category();
        let mut line = format!(
            "{}  {}",
            link.title.bold(),
            colorize_hex(category.name, category.color)
        );

        if !link.tags.is_empty() {
            let tags_str = link
                .tags
                .iter()
                .map(|t| format!("#{}", t))
                .collect::<Vec<_>>()
                .join(" ");
            line.push_str(&format!("  {}", tags_str.cyan()));
        }

        line.push_str(&format!("  {}", link.id.dimmed()));
        output.push_str(&line);
        output.push('\n');
        output.push_str(&format!("    {}\n", link.url.blue().underline()));

        if !link.description.is_empty() {
            output.push_str(&format!("    {}\n", link.description.dimmed()));
        }
    }

    output
}
