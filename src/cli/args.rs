use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::model::{Priority, TaskState};

#[derive(Parser)]
#[command(name = "ltask")]
#[command(about = "A personal task and link organizer with streak analytics")]
#[command(long_about = "ltask - organize tasks and links, track your streaks

Tasks and links live in plain JSON files under ~/.linktasker/, organized
by a fixed set of categories. The stats commands turn them into
completion breakdowns, activity timelines, and streak history.

QUICK START:
  ltask task add \"Write report\" --due tomorrow
  ltask task list --status pending
  ltask link add https://example.com/guide --title \"A guide\"
  ltask stats

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  ltask <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to the configured format.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage tasks
    ///
    /// Create, list, complete, edit, and delete tasks. Each task has a
    /// title, optional description, due date, priority, and category.
    ///
    /// # Examples
    ///
    ///   ltask task add "Write report" --due friday --priority high
    ///   ltask task list --category work
    ///   ltask task done 1696164000000
    #[command(alias = "t")]
    Task(TaskArgs),

    /// Manage saved links
    ///
    /// Save, list, edit, and delete links. Each link has a URL, title,
    /// optional description, category, and tags.
    ///
    /// # Examples
    ///
    ///   ltask link add https://example.com/guide --title "A guide"
    ///   ltask link list --search investing
    #[command(alias = "l")]
    Link(LinkArgs),

    /// Show statistics and streaks
    ///
    /// Analytics over your tasks and links: completion status, category
    /// and priority breakdowns, a daily activity timeline, completion
    /// pace, and streak history.
    ///
    /// # Examples
    ///
    ///   ltask stats                 Full dashboard
    ///   ltask stats streak          Streak details and heatmap
    ///   ltask stats timeline --days 30
    #[command(alias = "st")]
    Stats(StatsArgs),

    /// Demo data helpers
    ///
    /// Seeds the store with the sample records used by first-run demos.
    Demo(DemoArgs),

    /// Generate shell completions
    ///
    /// Prints a completion script for the given shell to stdout.
    ///
    /// # Examples
    ///
    ///   ltask completions zsh > ~/.zfunc/_ltask
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Task priority for CLI arguments.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Low => Self::Low,
            PriorityArg::Medium => Self::Medium,
            PriorityArg::High => Self::High,
        }
    }
}

/// Task status for CLI arguments.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusArg {
    Completed,
    Overdue,
    Pending,
}

impl From<StatusArg> for TaskState {
    fn from(arg: StatusArg) -> Self {
        match arg {
            StatusArg::Completed => Self::Completed,
            StatusArg::Overdue => Self::Overdue,
            StatusArg::Pending => Self::Pending,
        }
    }
}

#[derive(Args)]
pub struct TaskArgs {
    #[command(subcommand)]
    pub command: TaskCommands,
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// Add a new task
    ///
    /// The due date accepts natural language: today, tomorrow, friday,
    /// next monday, in 3 days, or an ISO date like 2026-12-15.
    #[command(alias = "a")]
    Add(TaskAddArgs),

    /// List tasks
    #[command(alias = "ls")]
    List(TaskListArgs),

    /// Toggle a task's completion
    ///
    /// Marks an open task as completed (stamping the completion time) or
    /// reopens a completed one.
    #[command(alias = "d")]
    Done {
        /// Task id
        id: String,
    },

    /// Edit a task's fields
    Edit(TaskEditArgs),

    /// Delete a task
    Rm {
        /// Task id
        id: String,
    },
}

#[derive(Args)]
pub struct TaskAddArgs {
    /// Task title
    pub title: String,

    /// Longer description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Due date (natural language or ISO)
    #[arg(long)]
    pub due: String,

    /// Priority
    #[arg(short, long, value_enum, default_value = "medium")]
    pub priority: PriorityArg,

    /// Category id (self-help, finance, tutorial, videos, trips, work, personal)
    #[arg(short, long, default_value = "work")]
    pub category: String,
}

#[derive(Args)]
pub struct TaskListArgs {
    /// Only tasks in this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only tasks in this status
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,

    /// Only tasks with this priority
    #[arg(short, long, value_enum)]
    pub priority: Option<PriorityArg>,

    /// Free-text search across title, description, and category
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct TaskEditArgs {
    /// Task id
    pub id: String,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New description
    #[arg(short, long)]
    pub description: Option<String>,

    /// New due date (natural language or ISO)
    #[arg(long)]
    pub due: Option<String>,

    /// New priority
    #[arg(short, long, value_enum)]
    pub priority: Option<PriorityArg>,

    /// New category id
    #[arg(short, long)]
    pub category: Option<String>,
}

#[derive(Args)]
pub struct LinkArgs {
    #[command(subcommand)]
    pub command: LinkCommands,
}

#[derive(Subcommand)]
pub enum LinkCommands {
    /// Save a new link
    #[command(alias = "a")]
    Add(LinkAddArgs),

    /// List saved links
    #[command(alias = "ls")]
    List(LinkListArgs),

    /// Edit a link's fields
    Edit(LinkEditArgs),

    /// Delete a link
    Rm {
        /// Link id
        id: String,
    },
}

#[derive(Args)]
pub struct LinkAddArgs {
    /// The URL to save
    pub url: String,

    /// Link title
    #[arg(short, long)]
    pub title: String,

    /// Longer description
    #[arg(short, long, default_value = "")]
    pub description: String,

    /// Category id
    #[arg(short, long, default_value = "self-help")]
    pub category: String,

    /// Comma-separated tags
    #[arg(long, default_value = "")]
    pub tags: String,
}

#[derive(Args)]
pub struct LinkListArgs {
    /// Only links in this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Free-text search across title, description, url, and tags
    #[arg(short, long)]
    pub search: Option<String>,
}

#[derive(Args)]
pub struct LinkEditArgs {
    /// Link id
    pub id: String,

    /// New URL
    #[arg(short, long)]
    pub url: Option<String>,

    /// New title
    #[arg(short, long)]
    pub title: Option<String>,

    /// New description
    #[arg(short, long)]
    pub description: Option<String>,

    /// New category id
    #[arg(short, long)]
    pub category: Option<String>,

    /// New comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
}

#[derive(Args)]
pub struct StatsArgs {
    #[command(subcommand)]
    pub command: Option<StatsCommands>,
}

#[derive(Subcommand)]
pub enum StatsCommands {
    /// Full dashboard: status, streaks, timeline, and insights
    Dashboard,

    /// Completed / overdue / pending breakdown
    Status,

    /// Completion percentage per category
    ///
    /// Only categories that have tasks appear; empty categories are
    /// omitted.
    Categories,

    /// Task counts per priority
    Priorities,

    /// Link counts per category
    ///
    /// Always shows all seven categories, zero-filled.
    Links,

    /// Daily activity timeline
    Timeline {
        /// Number of trailing days to show
        #[arg(long)]
        days: Option<usize>,

        /// Overlay sample data when the window is empty
        #[arg(long)]
        demo: bool,
    },

    /// Average time from creation to completion
    CompletionTime,

    /// Streak details and activity heatmap
    Streak,
}

#[derive(Args)]
pub struct DemoArgs {
    #[command(subcommand)]
    pub command: DemoCommands,
}

#[derive(Subcommand)]
pub enum DemoCommands {
    /// Write the sample tasks and links into the store
    Seed {
        /// Overwrite existing data
        #[arg(long)]
        force: bool,
    },
}
