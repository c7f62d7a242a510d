use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::debug;

mod error;
mod ids;
mod logging;
mod pbxproj;
mod plan;
mod types;

#[cfg(test)]
mod mocks;
#[cfg(test)]
mod tests;

use crate::ids::RandomIds;
use crate::plan::InsertionPlan;
use crate::types::EditReport;

/// Registers new source files in an Xcode project.pbxproj.
///
/// Without arguments, adds the offline mode files to
/// PetSafety.xcodeproj/project.pbxproj.
#[derive(Parser, Debug)]
#[command(name = "pbxadd", version, about)]
struct Cli {
    /// Manifest to edit, overrides the plan's path
    #[arg(long)]
    project: Option<PathBuf>,

    /// JSON plan replacing the built-in file list
    #[arg(long)]
    plan: Option<PathBuf>,

    /// Edit in memory and report, but don't write the manifest
    #[arg(long)]
    dry_run: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init()?;

    let mut plan = match &cli.plan {
        Some(path) => InsertionPlan::load(path)
            .with_context(|| format!("Failed to load plan {}", path.display()))?,
        None => InsertionPlan::default(),
    };
    if let Some(project) = cli.project {
        plan.project = project;
    }

    run(&plan, cli.dry_run)
}

/// Returns `Ok` even when groups or the main group are missing; those are
/// reported on stdout. Only I/O on the manifest is an error.
fn run(plan: &InsertionPlan, dry_run: bool) -> anyhow::Result<()> {
    let mut content = pbxproj::read_manifest(&plan.project)
        .with_context(|| format!("Failed to read {}", plan.project.display()))?;

    let lookups = pbxproj::find_groups(&content, &plan.required_groups());
    println!("Found group UUIDs:");
    for (name, id) in &lookups {
        println!("  {}: {}", name, id.as_deref().unwrap_or("None"));
    }
    println!();

    let groups = match pbxproj::resolve_groups(lookups) {
        Ok(groups) => groups,
        Err(e) => {
            println!("\u{001b}[91mERROR: {}\u{001b}[0m", e);
            return Ok(());
        }
    };
    let files = plan.insertions(&groups)?;

    println!("Adding files to Xcode project...");
    match pbxproj::add_files(
        &mut content,
        &files,
        &mut RandomIds,
        plan.root_group.as_deref(),
    ) {
        Ok(report) => {
            debug!(
                file_references = ?report.file_references,
                build_files = ?report.build_files,
                build_phase_entries = ?report.build_phase_entries,
                "edit finished"
            );
            if !dry_run {
                pbxproj::write_manifest(&plan.project, &content)
                    .with_context(|| format!("Failed to write {}", plan.project.display()))?;
            }
            for line in summary_lines(plan, &report, dry_run) {
                println!("{}", line);
            }
        }
        Err(e) => {
            println!("\u{001b}[91mERROR: {}\u{001b}[0m", e);
            println!("\n\u{001b}[91m❌ Failed to add files to project\u{001b}[0m");
        }
    }

    Ok(())
}

/// Closing status lines after a successful edit. A dry run lists the ids it
/// would have used instead of claiming the files were added.
fn summary_lines(plan: &InsertionPlan, report: &EditReport, dry_run: bool) -> Vec<String> {
    let mut lines = Vec::new();

    let missing = report.missing_groups();
    if !missing.is_empty() {
        lines.push(format!(
            "\u{001b}[93m⚠️  {} file(s) were not added to any group\u{001b}[0m",
            missing.len()
        ));
    }

    if dry_run {
        for file in &report.files {
            lines.push(format!(
                "\u{001b}[90m  {}: fileRef {}, buildFile {}\u{001b}[0m",
                file.name, file.file_ref_id, file.build_file_id
            ));
        }
        lines.push(format!(
            "\n\u{001b}[90m(dry run) {} left unchanged, {} file(s) would be added\u{001b}[0m",
            plan.project.display(),
            report.files.len()
        ));
        return lines;
    }

    lines.push("\n\u{001b}[92m✅ Successfully added all files to Xcode project!\u{001b}[0m".to_string());
    for note in &plan.notes {
        lines.push(format!("\nNOTE: {}", note));
    }
    lines
}
