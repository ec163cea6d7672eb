//! JSON-file-backed collection store.
//!
//! Tasks and links are persisted as whole collections in `tasks.json` and
//! `links.json` under the app directory. A missing file reads as an empty
//! collection; records with malformed timestamps load with those fields
//! empty rather than failing the whole file.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::Paths;
use crate::error::LinkTaskerError;
use crate::model::{Link, Priority, Task};

/// Basic URL shape check applied when saving links.
static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?://)?([\da-z.-]+)\.([a-z.]{2,6})([/\w .\-?=&%#]*)*/?$")
        .unwrap_or_else(|e| panic!("Invalid url regex: {e}"))
});

/// Editable fields of a task, used for both create and edit.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Priority,
    pub category_id: String,
}

impl TaskDraft {
    /// Form-style validation: title and due date are required.
    pub fn validate(&self) -> Result<(), LinkTaskerError> {
        if self.title.trim().is_empty() {
            return Err(LinkTaskerError::Validation("title is required".to_string()));
        }
        if self.due_date.is_none() {
            return Err(LinkTaskerError::Validation(
                "due date is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Editable fields of a link, used for both create and edit.
#[derive(Debug, Clone)]
pub struct LinkDraft {
    pub url: String,
    pub title: String,
    pub description: String,
    pub category_id: String,
    pub tags: Vec<String>,
}

impl LinkDraft {
    /// Form-style validation: url and title are required, and the url
    /// must look like one.
    pub fn validate(&self) -> Result<(), LinkTaskerError> {
        if self.url.trim().is_empty() {
            return Err(LinkTaskerError::Validation("url is required".to_string()));
        }
        if self.title.trim().is_empty() {
            return Err(LinkTaskerError::Validation("title is required".to_string()));
        }
        if !URL_RE.is_match(&self.url) {
            return Err(LinkTaskerError::Validation(
                "please enter a valid URL".to_string(),
            ));
        }
        Ok(())
    }
}

/// Split comma-separated tag input into clean tags.
#[must_use]
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Whole-collection JSON store.
pub struct JsonStore {
    tasks_path: PathBuf,
    links_path: PathBuf,
}

impl JsonStore {
    /// Open the store at the default app directory, creating it if needed.
    pub fn open() -> Result<Self, LinkTaskerError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        Ok(Self {
            tasks_path: paths.tasks_file,
            links_path: paths.links_file,
        })
    }

    /// Open the store under a specific root directory.
    #[must_use]
    pub fn open_at(root: &Path) -> Self {
        Self {
            tasks_path: root.join("tasks.json"),
            links_path: root.join("links.json"),
        }
    }

    /// Load the whole task collection. Missing file reads as empty.
    pub fn load_tasks(&self) -> Result<Vec<Task>, LinkTaskerError> {
        load_collection(&self.tasks_path)
    }

    /// Replace the whole task collection.
    pub fn save_tasks(&self, tasks: &[Task]) -> Result<(), LinkTaskerError> {
        save_collection(&self.tasks_path, tasks)
    }

    /// Load the whole link collection. Missing file reads as empty.
    pub fn load_links(&self) -> Result<Vec<Link>, LinkTaskerError> {
        load_collection(&self.links_path)
    }

    /// Replace the whole link collection.
    pub fn save_links(&self, links: &[Link]) -> Result<(), LinkTaskerError> {
        save_collection(&self.links_path, links)
    }

    /// Create a task from a draft and persist it.
    pub fn add_task(&self, draft: TaskDraft, now: DateTime<Utc>) -> Result<Task, LinkTaskerError> {
        draft.validate()?;
        let mut tasks = self.load_tasks()?;
        let task = Task {
            id: generate_id(tasks.iter().map(|t| t.id.as_str()), now),
            title: draft.title,
            description: draft.description,
            is_completed: false,
            created_at: Some(now),
            completed_at: None,
            due_date: draft.due_date,
            priority: draft.priority,
            category_id: draft.category_id,
        };
        tasks.push(task.clone());
        self.save_tasks(&tasks)?;
        Ok(task)
    }

    /// Overwrite a task's editable fields, keeping id, creation stamp, and
    /// completion state.
    pub fn update_task(&self, id: &str, draft: TaskDraft) -> Result<Task, LinkTaskerError> {
        draft.validate()?;
        let mut tasks = self.load_tasks()?;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| LinkTaskerError::NotFound(format!("task {id}")))?;
        task.title = draft.title;
        task.description = draft.description;
        task.due_date = draft.due_date;
        task.priority = draft.priority;
        task.category_id = draft.category_id;
        let updated = task.clone();
        self.save_tasks(&tasks)?;
        Ok(updated)
    }

    /// Flip a task's completion state, stamping or clearing `completed_at`.
    pub fn toggle_task(&self, id: &str, now: DateTime<Utc>) -> Result<Task, LinkTaskerError> {
        let mut tasks = self.load_tasks()?;
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| LinkTaskerError::NotFound(format!("task {id}")))?;
        task.is_completed = !task.is_completed;
        task.completed_at = task.is_completed.then_some(now);
        let updated = task.clone();
        self.save_tasks(&tasks)?;
        Ok(updated)
    }

    /// Remove a task by id.
    pub fn delete_task(&self, id: &str) -> Result<(), LinkTaskerError> {
        let mut tasks = self.load_tasks()?;
        let before = tasks.len();
        tasks.retain(|t| t.id != id);
        if tasks.len() == before {
            return Err(LinkTaskerError::NotFound(format!("task {id}")));
        }
        self.save_tasks(&tasks)
    }

    /// Create a link from a draft and persist it.
    pub fn add_link(&self, draft: LinkDraft, now: DateTime<Utc>) -> Result<Link, LinkTaskerError> {
        draft.validate()?;
        let mut links = self.load_links()?;
        let link = Link {
            id: generate_id(links.iter().map(|l| l.id.as_str()), now),
            url: draft.url,
            title: draft.title,
            description: draft.description,
            created_at: Some(now),
            category_id: draft.category_id,
            tags: draft.tags,
        };
        links.push(link.clone());
        self.save_links(&links)?;
        Ok(link)
    }

    /// Overwrite a link's editable fields, keeping id and creation stamp.
    pub fn update_link(&self, id: &str, draft: LinkDraft) -> Result<Link, LinkTaskerError> {
        draft.validate()?;
        let mut links = self.load_links()?;
        let link = links
            .iter_mut()
            .find(|l| l.id == id)
            .ok_or_else(|| LinkTaskerError::NotFound(format!("link {id}")))?;
        link.url = draft.url;
        link.title = draft.title;
        link.description = draft.description;
        link.category_id = draft.category_id;
        link.tags = draft.tags;
        let updated = link.clone();
        self.save_links(&links)?;
        Ok(updated)
    }

    /// Remove a link by id.
    pub fn delete_link(&self, id: &str) -> Result<(), LinkTaskerError> {
        let mut links = self.load_links()?;
        let before = links.len();
        links.retain(|l| l.id != id);
        if links.len() == before {
            return Err(LinkTaskerError::NotFound(format!("link {id}")));
        }
        self.save_links(&links)
    }
}

fn load_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, LinkTaskerError> {
    if !path.exists() {
        return Ok(Vec::new());
    }
    let contents = std::fs::read_to_string(path).map_err(|e| {
        LinkTaskerError::Storage(format!("failed to read {}: {e}", path.display()))
    })?;
    serde_json::from_str(&contents).map_err(|e| {
        LinkTaskerError::Storage(format!("failed to parse {}: {e}", path.display()))
    })
}

fn save_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<(), LinkTaskerError> {
    let json = serde_json::to_string_pretty(items)?;
    std::fs::write(path, json).map_err(|e| {
        LinkTaskerError::Storage(format!("failed to write {}: {e}", path.display()))
    })
}

/// Timestamp-derived client id, bumped past any collision.
fn generate_id<'a>(existing: impl Iterator<Item = &'a str>, now: DateTime<Utc>) -> String {
    let taken: Vec<&str> = existing.collect();
    let mut candidate = now.timestamp_millis();
    while taken.contains(&candidate.to_string().as_str()) {
        candidate += 1;
    }
    candidate.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::datetime::parse_timestamp;
    use tempfile::TempDir;

    fn draft(title: &str) -> TaskDraft {
        TaskDraft {
            title: title.to_string(),
            description: String::new(),
            due_date: parse_timestamp("2030-01-01T00:00:00Z"),
            priority: Priority::Medium,
            category_id: "work".to_string(),
        }
    }

    fn link_draft(url: &str) -> LinkDraft {
        LinkDraft {
            url: url.to_string(),
            title: "A link".to_string(),
            description: String::new(),
            category_id: "tutorial".to_string(),
            tags: Vec::new(),
        }
    }

    fn now() -> DateTime<Utc> {
        parse_timestamp("2023-10-10T12:00:00Z").unwrap()
    }

    #[test]
    fn test_missing_files_read_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open_at(dir.path());
        assert!(store.load_tasks().unwrap().is_empty());
        assert!(store.load_links().unwrap().is_empty());
    }

    #[test]
    fn test_add_and_reload_task() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open_at(dir.path());

        let task = store.add_task(draft("Write report"), now()).unwrap();
        assert_eq!(task.id, now().timestamp_millis().to_string());

        let tasks = store.load_tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Write report");
        assert!(!tasks[0].is_completed);
        assert_eq!(tasks[0].created_at, Some(now()));
    }

    #[test]
    fn test_ids_are_unique_within_one_millisecond() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open_at(dir.path());

        let a = store.add_task(draft("first"), now()).unwrap();
        let b = store.add_task(draft("second"), now()).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_toggle_stamps_and_clears_completed_at() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open_at(dir.path());
        let task = store.add_task(draft("Toggle me"), now()).unwrap();

        let done = store.toggle_task(&task.id, now()).unwrap();
        assert!(done.is_completed);
        assert_eq!(done.completed_at, Some(now()));

        let undone = store.toggle_task(&task.id, now()).unwrap();
        assert!(!undone.is_completed);
        assert!(undone.completed_at.is_none());
    }

    #[test]
    fn test_update_task_keeps_completion_state() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open_at(dir.path());
        let task = store.add_task(draft("Original"), now()).unwrap();
        store.toggle_task(&task.id, now()).unwrap();

        let mut edits = draft("Renamed");
        edits.priority = Priority::High;
        let updated = store.update_task(&task.id, edits).unwrap();

        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.priority, Priority::High);
        assert!(updated.is_completed);
        assert_eq!(updated.created_at, Some(now()));
    }

    #[test]
    fn test_delete_task_not_found() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open_at(dir.path());
        let err = store.delete_task("nope").unwrap_err();
        assert!(matches!(err, LinkTaskerError::NotFound(_)));
    }

    #[test]
    fn test_task_validation() {
        let mut no_title = draft("  ");
        assert!(no_title.validate().is_err());
        no_title.title = "ok".to_string();
        no_title.due_date = None;
        assert!(no_title.validate().is_err());
    }

    #[test]
    fn test_link_validation() {
        assert!(link_draft("https://example.com/path").validate().is_ok());
        assert!(link_draft("example.com").validate().is_ok());
        assert!(link_draft("").validate().is_err());
        assert!(link_draft("not a url").validate().is_err());

        let mut untitled = link_draft("https://example.com");
        untitled.title = String::new();
        assert!(untitled.validate().is_err());
    }

    #[test]
    fn test_add_and_delete_link() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open_at(dir.path());

        let mut new_link = link_draft("https://example.com/guide");
        new_link.tags = parse_tags("rust, cli");
        let link = store.add_link(new_link, now()).unwrap();
        assert_eq!(link.tags, vec!["rust", "cli"]);

        store.delete_link(&link.id).unwrap();
        assert!(store.load_links().unwrap().is_empty());
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags("a, b ,c,,  "), vec!["a", "b", "c"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_malformed_timestamps_survive_load() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::open_at(dir.path());

        let raw = r#"[{
            "id": "1",
            "title": "Old record",
            "isCompleted": true,
            "createdAt": "garbage",
            "dueDate": "also garbage",
            "priority": "high",
            "categoryId": "work"
        }]"#;
        std::fs::write(dir.path().join("tasks.json"), raw).unwrap();

        let tasks = store.load_tasks().unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(tasks[0].created_at.is_none());
        assert!(tasks[0].due_date.is_none());
        assert!(tasks[0].is_completed);
    }
}
