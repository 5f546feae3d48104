use aitasks_core::dispatch::Invocation;
use aitasks_core::paths;
use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output directory
    #[arg(short, long, value_name = "DIR", default_value = paths::DEFAULT_OUTPUT_DIR)]
    pub output: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the PRD template (create-prd.md)
    CreatePrd {
        #[command(flatten)]
        out: OutputArgs,
    },

    /// Generate a task list template for a PRD (tasks-<prd file name>)
    GenerateTasks {
        #[command(flatten)]
        out: OutputArgs,

        /// Path to the PRD file (prompted for when omitted)
        #[arg(short, long, value_name = "FILE")]
        prd: Option<PathBuf>,
    },

    /// Generate the task list management guide (task-list-management.md)
    ProcessTaskList {
        #[command(flatten)]
        out: OutputArgs,
    },

    /// Generate the task generation template (generate-tasks.md)
    CreateTasks {
        #[command(flatten)]
        out: OutputArgs,
    },

    /// Generate all template files (create-prd.md, generate-tasks.md, and process-tasks-list.md)
    GenerateAll {
        #[command(flatten)]
        out: OutputArgs,
    },
}

impl Commands {
    /// Name of the matching entry in the command table.
    pub fn name(&self) -> &'static str {
        match self {
            Commands::CreatePrd { .. } => "create-prd",
            Commands::GenerateTasks { .. } => "generate-tasks",
            Commands::ProcessTaskList { .. } => "process-task-list",
            Commands::CreateTasks { .. } => "create-tasks",
            Commands::GenerateAll { .. } => "generate-all",
        }
    }

    pub fn into_invocation(self) -> Invocation {
        let name = self.name();
        match self {
            Commands::GenerateTasks { out, prd } => Invocation::new(name, out.output).with_prd(prd),
            Commands::CreatePrd { out }
            | Commands::ProcessTaskList { out }
            | Commands::CreateTasks { out }
            | Commands::GenerateAll { out } => Invocation::new(name, out.output),
        }
    }
}
