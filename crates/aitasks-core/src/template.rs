//! Embedded default documents.
//!
//! Each constant is a complete markdown body, used whenever no override file is
//! present at the conventional location.

use crate::paths;
use serde::Serialize;

/// Guidelines for writing a Product Requirements Document.
pub const PRD_TEMPLATE: &str = include_str!("../templates/create-prd.md");

/// Guidelines for turning a PRD into a task list.
pub const GENERATE_TASKS_TEMPLATE: &str = include_str!("../templates/generate-tasks.md");

/// Guidelines for working through and maintaining a task list.
pub const PROCESS_TASK_LIST_TEMPLATE: &str = include_str!("../templates/process-task-list.md");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    Prd,
    TaskGeneration,
    TaskListManagement,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 3] = [
        TemplateKind::Prd,
        TemplateKind::TaskGeneration,
        TemplateKind::TaskListManagement,
    ];

    pub fn default_content(self) -> &'static str {
        match self {
            TemplateKind::Prd => PRD_TEMPLATE,
            TemplateKind::TaskGeneration => GENERATE_TASKS_TEMPLATE,
            TemplateKind::TaskListManagement => PROCESS_TASK_LIST_TEMPLATE,
        }
    }

    /// File name looked up in the override directory.
    pub fn source_file(self) -> &'static str {
        match self {
            TemplateKind::Prd => paths::CREATE_PRD_FILE,
            TemplateKind::TaskGeneration => paths::GENERATE_TASKS_FILE,
            TemplateKind::TaskListManagement => paths::PROCESS_TASK_LIST_FILE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TemplateKind::Prd => "PRD Template",
            TemplateKind::TaskGeneration => "Task List Template",
            TemplateKind::TaskListManagement => "Task Management Guide",
        }
    }
}
