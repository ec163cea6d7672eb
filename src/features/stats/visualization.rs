//! Terminal visualization for statistics.
//!
//! ASCII charts for the stats command: bar charts, sparklines, a weekly
//! activity heatmap, and summary boxes.

use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;

/// Characters for sparkline rendering.
const BAR_CHARS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];
const FULL_BLOCK: char = '█';

/// Render a horizontal bar chart from (label, value) pairs.
pub fn render_bar_chart(data: &[(String, usize)], max_label_width: usize, bar_width: usize) -> String {
    if data.is_empty() {
        return String::new();
    }

    let max_value = data.iter().map(|(_, v)| *v).max().unwrap_or(1).max(1);
    let mut lines = Vec::new();

    for (label, value) in data {
        let truncated_label = if label.len() > max_label_width {
            format!("{}...", &label[..max_label_width.saturating_sub(3)])
        } else {
            format!("{label:max_label_width$}")
        };

        let bar_length = (*value as f64 / max_value as f64 * bar_width as f64) as usize;
        let bar = FULL_BLOCK.to_string().repeat(bar_length);
        let padding = " ".repeat(bar_width - bar_length);

        lines.push(format!("{truncated_label} |{bar}{padding} {value}"));
    }

    lines.join("\n")
}

/// Render a compact single-line sparkline.
pub fn render_sparkline(values: &[usize]) -> String {
    if values.is_empty() {
        return String::new();
    }

    let max_value = values.iter().max().copied().unwrap_or(1).max(1);

    values
        .iter()
        .map(|&v| {
            if v == 0 {
                BAR_CHARS[0]
            } else {
                let normalized = (v as f64 / max_value as f64 * 7.0) as usize;
                BAR_CHARS[normalized.min(7)]
            }
        })
        .collect()
}

/// Render a percentage-style progress bar.
pub fn render_progress_bar(current: usize, total: usize, width: usize) -> String {
    let total = total.max(1);
    let progress = (current as f64 / total as f64).min(1.0);
    let filled = (progress * width as f64) as usize;
    let empty = width - filled;

    let bar = format!(
        "[{}{}]",
        FULL_BLOCK.to_string().repeat(filled),
        "░".repeat(empty)
    );

    format!("{} {:.0}%", bar, progress * 100.0)
}

/// Render a weekly activity heatmap from per-day completion counts.
///
/// Shows `weeks` columns ending with the week containing `today`; one row
/// per weekday, Monday first. Days after `today` render blank.
pub fn render_heatmap(day_counts: &BTreeMap<NaiveDate, usize>, weeks: usize, today: NaiveDate) -> String {
    let weeks = weeks.max(1);
    let max_count = day_counts.values().max().copied().unwrap_or(1).max(1);

    // Monday of the current week anchors the newest column
    let days_from_monday = i64::from(today.weekday().num_days_from_monday());
    let this_monday = today - Duration::days(days_from_monday);

    let day_labels = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
    let mut lines = Vec::new();

    let mut header = "    ".to_string();
    for w in 0..weeks {
        header.push_str(&format!("W{:<2}", weeks - w));
    }
    lines.push(header);

    for (day_idx, label) in day_labels.iter().enumerate() {
        let mut row = format!("{label} ");
        for w in 0..weeks {
            let monday = this_monday - Duration::days(((weeks - 1 - w) * 7) as i64);
            let date = monday + Duration::days(day_idx as i64);
            if date > today {
                row.push_str("   ");
                continue;
            }
            let count = day_counts.get(&date).copied().unwrap_or(0);
            let cell = if count == 0 {
                '·'
            } else {
                let level = (count as f64 / max_count as f64 * 4.0) as usize;
                match level {
                    0 | 1 => '░',
                    2 => '▒',
                    3 => '▓',
                    _ => '█',
                }
            };
            row.push_str(&format!(" {cell} "));
        }
        lines.push(row);
    }

    lines.push(String::new());
    lines.push("Legend: · = 0  ░ = low  ▒ = medium  ▓ = high  █ = peak".to_string());

    lines.join("\n")
}

/// Render a bordered summary box of (label, value) pairs.
pub fn render_summary_box(title: &str, items: &[(&str, String)]) -> String {
    let max_label_len = items.iter().map(|(l, _)| l.len()).max().unwrap_or(0);
    let max_value_len = items.iter().map(|(_, v)| v.len()).max().unwrap_or(0);
    let content_width = max_label_len + max_value_len + 3;
    let box_width = content_width.max(title.len()) + 4;

    let mut lines = Vec::new();

    lines.push(format!("┌{}┐", "─".repeat(box_width)));

    let title_padding = (box_width - title.len()) / 2;
    lines.push(format!(
        "│{}{}{}│",
        " ".repeat(title_padding),
        title,
        " ".repeat(box_width - title_padding - title.len())
    ));

    lines.push(format!("├{}┤", "─".repeat(box_width)));

    for (label, value) in items {
        let item_str = format!("{label:>max_label_len$} : {value}");
        let padding = box_width - item_str.len();
        lines.push(format!("│ {}{} │", item_str, " ".repeat(padding - 2)));
    }

    lines.push(format!("└{}┘", "─".repeat(box_width)));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_sparkline() {
        let values = [0, 2, 5, 3, 8, 4, 1];
        let sparkline = render_sparkline(&values);
        assert_eq!(sparkline.chars().count(), 7);
        assert_eq!(sparkline.chars().next(), Some(' '));
    }

    #[test]
    fn test_render_sparkline_empty() {
        assert!(render_sparkline(&[]).is_empty());
    }

    #[test]
    fn test_render_bar_chart() {
        let data = vec![
            ("Low".to_string(), 5),
            ("Medium".to_string(), 10),
            ("High".to_string(), 3),
        ];
        let chart = render_bar_chart(&data, 6, 10);
        assert!(chart.contains("Low"));
        assert!(chart.contains("Medium"));
        assert!(chart.contains("10"));
    }

    #[test]
    fn test_render_progress_bar() {
        assert!(render_progress_bar(50, 100, 20).contains("50%"));
        assert!(render_progress_bar(100, 100, 20).contains("100%"));
        assert!(render_progress_bar(0, 100, 20).contains("0%"));
        // zero total does not divide by zero
        assert!(render_progress_bar(0, 0, 20).contains("0%"));
    }

    #[test]
    fn test_render_heatmap_shape() {
        let mut counts = BTreeMap::new();
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        counts.insert(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(), 2);
        counts.insert(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(), 5);

        let heatmap = render_heatmap(&counts, 4, today);
        let lines: Vec<&str> = heatmap.lines().collect();
        // header + 7 weekday rows + blank + legend
        assert_eq!(lines.len(), 10);
        assert!(lines[1].starts_with("Mon"));
        assert!(lines[7].starts_with("Sun"));
        assert!(heatmap.contains("Legend"));
    }

    #[test]
    fn test_render_heatmap_empty_counts() {
        let counts = BTreeMap::new();
        let today = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        let heatmap = render_heatmap(&counts, 2, today);
        assert!(heatmap.contains('·'));
        let grid_rows: Vec<&str> = heatmap.lines().skip(1).take(7).collect();
        assert!(grid_rows.iter().all(|row| !row.contains('█')));
    }

    #[test]
    fn test_render_summary_box() {
        let items = [
            ("Tasks", "42".to_string()),
            ("Completed", "35".to_string()),
        ];
        let box_str = render_summary_box("Summary", &items);
        assert!(box_str.contains("Summary"));
        assert!(box_str.contains("42"));
        assert!(box_str.contains("35"));
    }
}
