use crate::error::{Result, ScaffoldError};
use crate::template::TemplateKind;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

/// Output directory used when `--output` is not given.
pub const DEFAULT_OUTPUT_DIR: &str = "./docs";

/// Override directory name, resolved next to the executable.
pub const OVERRIDES_DIR: &str = "docs";

pub const CREATE_PRD_FILE: &str = "create-prd.md";
pub const GENERATE_TASKS_FILE: &str = "generate-tasks.md";
pub const PROCESS_TASK_LIST_FILE: &str = "process-task-list.md";
pub const TASK_LIST_MANAGEMENT_FILE: &str = "task-list-management.md";
pub const PROCESS_TASKS_LIST_FILE: &str = "process-tasks-list.md";

const TASKS_PREFIX: &str = "tasks-";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// Default override directory: `docs/` beside the running executable.
///
/// Falls back to `./docs` relative to the working directory when the
/// executable path cannot be determined.
pub fn default_overrides_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|p| p.join(OVERRIDES_DIR)))
        .unwrap_or_else(|| PathBuf::from(OVERRIDES_DIR))
}

/// Conventional override location for a template kind.
pub fn override_path(overrides_dir: &Path, kind: TemplateKind) -> PathBuf {
    overrides_dir.join(kind.source_file())
}

/// Target file name for a task list generated from `prd`: `tasks-<basename>`.
///
/// A `prd-` prefix on the basename is kept as is, so `prd-login.md` becomes
/// `tasks-prd-login.md`.
pub fn tasks_file_name(prd: &Path) -> Result<String> {
    let name = prd
        .file_name()
        .ok_or_else(|| ScaffoldError::InvalidFileName(prd.to_path_buf()))?;
    Ok(format!("{TASKS_PREFIX}{}", name.to_string_lossy()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tasks_file_name_keeps_prd_prefix() {
        let name = tasks_file_name(Path::new("foo/prd-login.md")).unwrap();
        assert_eq!(name, "tasks-prd-login.md");
    }

    #[test]
    fn tasks_file_name_plain_basename() {
        let name = tasks_file_name(Path::new("foo/spec.md")).unwrap();
        assert_eq!(name, "tasks-spec.md");
    }

    #[test]
    fn tasks_file_name_rejects_root() {
        assert!(matches!(
            tasks_file_name(Path::new("/")),
            Err(ScaffoldError::InvalidFileName(_))
        ));
    }

    #[test]
    fn override_path_uses_source_file_name() {
        let p = override_path(Path::new("/opt/aitasks/docs"), TemplateKind::TaskListManagement);
        assert_eq!(p, Path::new("/opt/aitasks/docs/process-task-list.md"));
    }
}
