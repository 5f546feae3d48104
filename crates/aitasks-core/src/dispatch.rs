//! Command table and the single dispatch entry point.
//!
//! The table is an ordinary value built by the caller; nothing is registered
//! globally. Each command maps to an ordered list of targets, and every target
//! goes through [`copy_or_default`] independently so one failed write never
//! stops the others.

use crate::error::{Result, ScaffoldError};
use crate::paths;
use crate::prompt::{self, Prompt};
use crate::scaffold::{copy_or_default, ContentSource, Overrides};
use crate::template::TemplateKind;
use serde::Serialize;
use std::path::{Path, PathBuf};

pub const PRD_QUESTION: &str = "Enter the path to your PRD file:";

// ---------------------------------------------------------------------------
// Command table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileName {
    Fixed(&'static str),
    /// `tasks-<basename of the PRD>`; needs a PRD path.
    TasksForPrd,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TargetSpec {
    pub template: TemplateKind,
    pub file_name: FileName,
}

impl TargetSpec {
    pub const fn fixed(template: TemplateKind, name: &'static str) -> Self {
        Self {
            template,
            file_name: FileName::Fixed(name),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub name: &'static str,
    pub targets: Vec<TargetSpec>,
    /// Print the "all generated" summary when every target succeeds.
    pub summary: bool,
}

#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    commands: Vec<CommandSpec>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a command, replacing any existing entry with the same name.
    pub fn with(mut self, spec: CommandSpec) -> Self {
        self.commands.retain(|c| c.name != spec.name);
        self.commands.push(spec);
        self
    }

    /// The five commands the `aitasks` binary exposes.
    pub fn standard() -> Self {
        use TemplateKind::*;
        Self::new()
            .with(CommandSpec {
                name: "create-prd",
                targets: vec![TargetSpec::fixed(Prd, paths::CREATE_PRD_FILE)],
                summary: false,
            })
            .with(CommandSpec {
                name: "generate-tasks",
                targets: vec![TargetSpec {
                    template: TaskGeneration,
                    file_name: FileName::TasksForPrd,
                }],
                summary: false,
            })
            .with(CommandSpec {
                name: "process-task-list",
                targets: vec![TargetSpec::fixed(
                    TaskListManagement,
                    paths::TASK_LIST_MANAGEMENT_FILE,
                )],
                summary: false,
            })
            .with(CommandSpec {
                name: "create-tasks",
                targets: vec![TargetSpec::fixed(TaskGeneration, paths::GENERATE_TASKS_FILE)],
                summary: false,
            })
            .with(CommandSpec {
                name: "generate-all",
                targets: vec![
                    TargetSpec::fixed(Prd, paths::CREATE_PRD_FILE),
                    TargetSpec::fixed(TaskGeneration, paths::GENERATE_TASKS_FILE),
                    TargetSpec::fixed(TaskListManagement, paths::PROCESS_TASKS_LIST_FILE),
                ],
                summary: true,
            })
    }

    pub fn get(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.commands.iter().map(|c| c.name)
    }
}

// ---------------------------------------------------------------------------
// Invocation / context
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub command: String,
    pub output: PathBuf,
    pub prd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(command: impl Into<String>, output: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            output: output.into(),
            prd: None,
        }
    }

    pub fn with_prd(mut self, prd: Option<PathBuf>) -> Self {
        self.prd = prd;
        self
    }
}

/// Capabilities a command needs from its environment.
pub struct Context<'a> {
    pub overrides: &'a dyn Overrides,
    pub overrides_dir: PathBuf,
    pub prompt: &'a mut dyn Prompt,
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum FileStatus {
    Generated {
        source: ContentSource,
        #[serde(skip_serializing_if = "Option::is_none")]
        created_dir: Option<PathBuf>,
    },
    Failed {
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    pub template: TemplateKind,
    pub target: PathBuf,
    #[serde(flatten)]
    pub status: FileStatus,
}

impl FileReport {
    pub fn is_generated(&self) -> bool {
        matches!(self.status, FileStatus::Generated { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub command: String,
    #[serde(skip)]
    pub summary: bool,
    pub files: Vec<FileReport>,
}

impl Report {
    pub fn succeeded(&self) -> bool {
        !self.files.is_empty() && self.files.iter().all(FileReport::is_generated)
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run one command from `table`.
///
/// `Err` is returned only when the command cannot start (unknown name, no
/// usable PRD); in that case nothing has been written. Per-file failures are
/// recorded in the returned [`Report`].
pub fn dispatch(table: &CommandTable, inv: &Invocation, ctx: &mut Context<'_>) -> Result<Report> {
    let spec = table
        .get(&inv.command)
        .ok_or_else(|| ScaffoldError::UnknownCommand(inv.command.clone()))?;

    let mut planned = Vec::with_capacity(spec.targets.len());
    for target in &spec.targets {
        let name = match target.file_name {
            FileName::Fixed(name) => name.to_string(),
            FileName::TasksForPrd => {
                let prd = resolve_prd(inv.prd.as_deref(), &mut *ctx.prompt)?;
                paths::tasks_file_name(&prd)?
            }
        };
        planned.push((target.template, inv.output.join(name)));
    }

    let files = planned
        .into_iter()
        .map(|(template, target)| {
            let source = paths::override_path(&ctx.overrides_dir, template);
            let status = match copy_or_default(
                ctx.overrides,
                &source,
                &target,
                Some(template.default_content()),
            ) {
                Ok(written) => FileStatus::Generated {
                    source: written.source,
                    created_dir: written.created_dir,
                },
                Err(e) => {
                    tracing::debug!(target = %target.display(), error = %e, "generation failed");
                    FileStatus::Failed {
                        error: e.to_string(),
                    }
                }
            };
            FileReport {
                template,
                target,
                status,
            }
        })
        .collect();

    Ok(Report {
        command: spec.name.to_string(),
        summary: spec.summary,
        files,
    })
}

fn resolve_prd(given: Option<&Path>, prompt: &mut dyn Prompt) -> Result<PathBuf> {
    let prd = match given {
        Some(p) if p.as_os_str().is_empty() => return Err(ScaffoldError::MissingPrd),
        Some(p) => p.to_path_buf(),
        None => prompt::ask_existing_file(prompt, PRD_QUESTION)?,
    };
    if !prd.is_file() {
        return Err(ScaffoldError::PrdNotFound(prd));
    }
    Ok(prd)
}
