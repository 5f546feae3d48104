use aitasks_core::dispatch::{FileStatus, Report};
use aitasks_core::template::TemplateKind;
use serde::Serialize;

pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Print one line per file: directory creation, success, or the error on stderr.
pub fn print_report(report: &Report) {
    for file in &report.files {
        match &file.status {
            FileStatus::Generated { created_dir, .. } => {
                if let Some(dir) = created_dir {
                    println!("Created directory: {}", dir.display());
                }
                println!("Generated: {}", file.target.display());
            }
            FileStatus::Failed { error } => {
                eprintln!("Error generating {}: {error}", file.target.display());
            }
        }
    }

    if report.summary && report.succeeded() {
        print_summary(report);
    }
}

fn print_summary(report: &Report) {
    println!("\nAll template files generated successfully!");
    println!("\nGenerated files:");
    for file in &report.files {
        println!("- {}: {}", file.template.label(), file.target.display());
    }

    let name_of = |kind: TemplateKind| {
        report
            .files
            .iter()
            .find(|f| f.template == kind)
            .and_then(|f| f.target.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| kind.source_file().to_string())
    };
    println!("\nNext steps:");
    println!(
        "1. Follow the guidelines in the {} file to create your PRD",
        name_of(TemplateKind::Prd)
    );
    println!(
        "2. Use the {} file to create a task list based on your PRD",
        name_of(TemplateKind::TaskGeneration)
    );
    println!(
        "3. Follow the {} guide when implementing your tasks",
        name_of(TemplateKind::TaskListManagement)
    );
}

/// JSON form of a report, with the overall outcome added.
pub fn report_json(report: &Report) -> anyhow::Result<serde_json::Value> {
    let mut value = serde_json::to_value(report)?;
    value["succeeded"] = report.succeeded().into();
    Ok(value)
}

