use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::core::datetime::local_day;
use crate::core::{FieldValue, Filterable, Schedulable};
use crate::model::registry::{self, CategoryDef};

/// A task record.
///
/// Timestamps are lenient on load: a malformed value becomes `None` and the
/// record stays in the collection. Simple tallies still count such a record;
/// date-based calculations skip it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
    #[serde(default, with = "crate::core::datetime::lenient")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::core::datetime::lenient")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, with = "crate::core::datetime::lenient")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category_id: String,
}

/// A saved link record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    pub id: String,
    pub url: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, with = "crate::core::datetime::lenient")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub category_id: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Task priority. Unknown stored values fall back to `Medium`, matching the
/// registry's lookup fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_id(&raw))
    }
}

impl Priority {
    /// All priorities, in display order.
    pub const ALL: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Look up a priority by id, falling back to `Medium` for unknown ids.
    #[must_use]
    pub fn from_id(id: &str) -> Self {
        match id {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Medium,
        }
    }

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Hex color used for swatches and charts.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Low => "#10b981",
            Self::Medium => "#f59e0b",
            Self::High => "#ef4444",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// Where a task sits right now: done, past due, or still open.
///
/// Every task is in exactly one state. A task without a parseable due date
/// cannot be overdue, so it counts as pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskState {
    Completed,
    Overdue,
    Pending,
}

impl TaskState {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Overdue => "overdue",
            Self::Pending => "pending",
        }
    }
}

impl std::fmt::Display for TaskState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Task {
    /// The state of this task as of `now`.
    #[must_use]
    pub fn state(&self, now: DateTime<Utc>) -> TaskState {
        if self.is_completed {
            TaskState::Completed
        } else if self.due_date.is_some_and(|due| now > due) {
            TaskState::Overdue
        } else {
            TaskState::Pending
        }
    }

    /// The instant this task counts as completed for analytics.
    ///
    /// Falls back to the creation timestamp when `completed_at` is absent
    /// (older records never had it stamped). `None` for incomplete tasks
    /// and for completed tasks with no usable timestamp at all.
    #[must_use]
    pub fn effective_completion(&self) -> Option<DateTime<Utc>> {
        if !self.is_completed {
            return None;
        }
        self.completed_at.or(self.created_at)
    }

    /// The local calendar day this task counts as completed on.
    #[must_use]
    pub fn completion_day(&self) -> Option<NaiveDate> {
        self.effective_completion().map(local_day)
    }

    /// The category this task belongs to, with fallback for dangling ids.
    #[must_use]
    pub fn category(&self) -> &'static CategoryDef {
        registry::category_by_id(&self.category_id)
    }
}

impl Link {
    /// The local calendar day this link was created on.
    #[must_use]
    pub fn creation_day(&self) -> Option<NaiveDate> {
        self.created_at.map(local_day)
    }

    /// The category this link belongs to, with fallback for dangling ids.
    #[must_use]
    pub fn category(&self) -> &'static CategoryDef {
        registry::category_by_id(&self.category_id)
    }
}

impl Filterable for Task {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field.to_lowercase().as_str() {
            "id" => Some(FieldValue::String(self.id.clone())),
            "title" => Some(FieldValue::String(self.title.clone())),
            "description" => Some(FieldValue::String(self.description.clone())),
            "completed" => Some(FieldValue::Bool(self.is_completed)),
            "priority" => Some(FieldValue::String(self.priority.id().to_string())),
            "category" => Some(FieldValue::String(self.category_id.clone())),
            "due" | "duedate" => Some(FieldValue::OptionalDate(self.due_date.map(local_day))),
            "created" | "createdat" => {
                Some(FieldValue::OptionalDate(self.created_at.map(local_day)))
            },
            _ => None,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}

impl Schedulable for Task {
    fn due_day(&self) -> Option<NaiveDate> {
        self.due_date.map(local_day)
    }
}

impl Filterable for Link {
    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field.to_lowercase().as_str() {
            "id" => Some(FieldValue::String(self.id.clone())),
            "url" => Some(FieldValue::String(self.url.clone())),
            "title" => Some(FieldValue::String(self.title.clone())),
            "description" => Some(FieldValue::String(self.description.clone())),
            "category" => Some(FieldValue::String(self.category_id.clone())),
            "tags" => Some(FieldValue::StringList(self.tags.clone())),
            "created" | "createdat" => {
                Some(FieldValue::OptionalDate(self.created_at.map(local_day)))
            },
            _ => None,
        }
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn title(&self) -> &str {
        &self.title
    }
}
