//! List filtering for tasks and links.
//!
//! Mirrors the filter surface of the organizer UI: narrow by category,
//! by task state, by priority, and by free-text search across titles,
//! descriptions, URLs, and tags.

use chrono::{DateTime, Utc};

use crate::core::traits::Filterable;
use crate::model::{Link, Priority, Task, TaskState};

/// Criteria for narrowing a task or link listing. Empty criteria match
/// everything.
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    category: Option<String>,
    state: Option<TaskState>,
    priority: Option<Priority>,
    text: Option<String>,
}

impl ItemFilter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_category(mut self, category: Option<String>) -> Self {
        self.category = category;
        self
    }

    #[must_use]
    pub fn with_state(mut self, state: Option<TaskState>) -> Self {
        self.state = state;
        self
    }

    #[must_use]
    pub fn with_priority(mut self, priority: Option<Priority>) -> Self {
        self.priority = priority;
        self
    }

    #[must_use]
    pub fn with_text(mut self, text: Option<String>) -> Self {
        self.text = text;
        self
    }

    /// Whether a task passes every criterion.
    #[must_use]
    pub fn matches_task(&self, task: &Task, now: DateTime<Utc>) -> bool {
        if self.state.is_some_and(|state| task.state(now) != state) {
            return false;
        }
        if self.priority.is_some_and(|p| task.priority != p) {
            return false;
        }
        self.matches_fields(task, &["title", "description", "category"])
    }

    /// Whether a link passes every criterion. Task-only criteria
    /// (state, priority) are ignored.
    #[must_use]
    pub fn matches_link(&self, link: &Link) -> bool {
        self.matches_fields(link, &["title", "description", "url", "tags"])
    }

    fn matches_fields(&self, item: &impl Filterable, search_fields: &[&str]) -> bool {
        if let Some(category) = &self.category {
            let matched = item
                .field_value("category")
                .is_some_and(|v| v.equals_str(category));
            if !matched {
                return false;
            }
        }

        if let Some(text) = &self.text {
            let matched = search_fields.iter().any(|field| {
                item.field_value(field)
                    .is_some_and(|v| v.contains_str(text))
            });
            if !matched {
                return false;
            }
        }

        true
    }
}

/// Filter a task collection, preserving input order.
#[must_use]
pub fn filter_tasks<'a>(
    tasks: &'a [Task],
    filter: &ItemFilter,
    now: DateTime<Utc>,
) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| filter.matches_task(task, now))
        .collect()
}

/// Filter a link collection, preserving input order.
#[must_use]
pub fn filter_links<'a>(links: &'a [Link], filter: &ItemFilter) -> Vec<&'a Link> {
    links
        .iter()
        .filter(|link| filter.matches_link(link))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::datetime::parse_timestamp;

    fn task(title: &str, category: &str, priority: Priority, completed: bool) -> Task {
        Task {
            id: title.to_string(),
            title: title.to_string(),
            description: String::new(),
            is_completed: completed,
            created_at: parse_timestamp("2023-10-01T10:00:00Z"),
            completed_at: None,
            due_date: parse_timestamp("2023-10-20T23:59:59Z"),
            priority,
            category_id: category.to_string(),
        }
    }

    fn link(title: &str, category: &str, tags: &[&str]) -> Link {
        Link {
            id: title.to_string(),
            url: format!("https://example.com/{title}"),
            title: title.to_string(),
            description: String::new(),
            created_at: parse_timestamp("2023-10-01T10:00:00Z"),
            category_id: category.to_string(),
            tags: tags.iter().map(ToString::to_string).collect(),
        }
    }

    fn now() -> DateTime<Utc> {
        parse_timestamp("2023-10-10T12:00:00Z").unwrap()
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let tasks = vec![
            task("a", "work", Priority::High, false),
            task("b", "finance", Priority::Low, true),
        ];
        assert_eq!(filter_tasks(&tasks, &ItemFilter::new(), now()).len(), 2);
    }

    #[test]
    fn test_filter_by_category() {
        let tasks = vec![
            task("a", "work", Priority::High, false),
            task("b", "finance", Priority::Low, true),
        ];
        let filter = ItemFilter::new().with_category(Some("work".to_string()));
        let matched = filter_tasks(&tasks, &filter, now());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "a");
    }

    #[test]
    fn test_filter_by_state() {
        let tasks = vec![
            task("open", "work", Priority::High, false),
            task("done", "work", Priority::High, true),
        ];
        let filter = ItemFilter::new().with_state(Some(TaskState::Completed));
        let matched = filter_tasks(&tasks, &filter, now());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "done");
    }

    #[test]
    fn test_filter_by_priority_and_text() {
        let tasks = vec![
            task("Write report", "work", Priority::High, false),
            task("Write notes", "work", Priority::Low, false),
        ];
        let filter = ItemFilter::new()
            .with_priority(Some(Priority::High))
            .with_text(Some("report".to_string()));
        let matched = filter_tasks(&tasks, &filter, now());
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].title, "Write report");
    }

    #[test]
    fn test_link_filter_searches_tags_and_url() {
        let links = vec![
            link("Index Funds", "finance", &["investing", "beginners"]),
            link("Trail Guide", "trips", &[]),
        ];
        let by_tag = ItemFilter::new().with_text(Some("investing".to_string()));
        assert_eq!(filter_links(&links, &by_tag).len(), 1);

        let by_url = ItemFilter::new().with_text(Some("example.com/trail".to_string()));
        assert_eq!(filter_links(&links, &by_url).len(), 1);
    }

    #[test]
    fn test_link_filter_ignores_task_criteria() {
        let links = vec![link("Index Funds", "finance", &[])];
        let filter = ItemFilter::new().with_priority(Some(Priority::High));
        assert_eq!(filter_links(&links, &filter).len(), 1);
    }
}
