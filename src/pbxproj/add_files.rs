use crate::error::{PbxError, Result};
use crate::ids::IdGenerator;
use crate::pbxproj::entries;
use crate::pbxproj::splice::{append_to_list, insert_after_anchor};
use crate::types::{EditReport, FileInsertion, FileOutcome, GroupOutcome};
use regex::Regex;
use std::sync::LazyLock;
use tracing::{debug, warn};

const FILE_REFERENCE_SECTION: &str = "/* Begin PBXFileReference section */";
const BUILD_FILE_SECTION: &str = "/* Begin PBXBuildFile section */";

// The `files` list of the object commented `Sources` that is a sources build phase.
static SOURCES_PHASE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?s)/\* Sources \*/ = \{[^}]*?isa = PBXSourcesBuildPhase;[^}]*?files = \((?P<body>.*?)\s*\);",
    )
    .expect("sources phase regex is valid")
});

fn group_children_pattern(group_id: &str) -> Option<Regex> {
    let pattern = format!(
        r"(?s){} /\* [^\n]*? \*/ = \{{[^}}]*?isa = PBXGroup;[^}}]*?children = \((?P<body>.*?)\s*\);",
        regex::escape(group_id)
    );
    Regex::new(&pattern).ok()
}

/// True if a `PBXGroup` commented with `name` and holding a children list exists.
pub fn has_root_group(content: &str, name: &str) -> bool {
    let pattern = format!(
        r"(?s)[A-F0-9]{{24}} /\* {} \*/ = \{{[^}}]*?isa = PBXGroup;[^}}]*?children = \(",
        regex::escape(name)
    );
    Regex::new(&pattern)
        .map(|re| re.is_match(content))
        .unwrap_or(false)
}

/// Registers `files` in the manifest text.
///
/// Each file gets a fresh file reference id and build file id. The child
/// entry goes into its group right away; a missing group is reported and the
/// next file is processed. Afterwards all file references, build files and
/// Sources build phase entries are inserted in one go each. A missing
/// section only skips that section.
///
/// Fails without touching `content` only when `root_group` is given and not
/// present. Nothing is deduplicated, running twice adds everything twice.
pub fn add_files(
    content: &mut String,
    files: &[FileInsertion],
    ids: &mut dyn IdGenerator,
    root_group: Option<&str>,
) -> Result<EditReport> {
    if let Some(root) = root_group {
        if !has_root_group(content, root) {
            warn!(group = root, "main group not found, leaving manifest untouched");
            return Err(PbxError::MainGroupNotFound(root.to_string()));
        }
    }

    let mut report = EditReport::default();
    let mut file_references = Vec::with_capacity(files.len());
    let mut build_files = Vec::with_capacity(files.len());
    let mut phase_entries = Vec::with_capacity(files.len());

    for file in files {
        let file_ref_id = ids.next_id();
        let build_file_id = ids.next_id();
        debug!(
            name = %file.name,
            path = %file.path,
            file_ref = %file_ref_id,
            build_file = %build_file_id,
            "generated ids"
        );

        file_references.push(entries::file_reference(&file_ref_id, &file.name));
        build_files.push(entries::build_file(&build_file_id, &file_ref_id, &file.name));
        phase_entries.push(entries::build_phase_entry(&build_file_id, &file.name));

        let child = [entries::group_child(&file_ref_id, &file.name)];
        let added = group_children_pattern(&file.group_id)
            .map(|re| append_to_list(content, &re, &child))
            .unwrap_or(false);

        let group = if added {
            println!("\u{001b}[92m✓ Added {} to group\u{001b}[0m", file.name);
            GroupOutcome::Added
        } else {
            warn!(group = %file.group_id, name = %file.name, "group not found");
            println!(
                "\u{001b}[91m✗ Could not find group {} for {}\u{001b}[0m",
                file.group_id, file.name
            );
            GroupOutcome::GroupMissing
        };

        report.files.push(FileOutcome {
            name: file.name.clone(),
            file_ref_id,
            build_file_id,
            group,
        });
    }

    if insert_after_anchor(content, FILE_REFERENCE_SECTION, &file_references) {
        println!(
            "\u{001b}[92m✓ Added {} file references\u{001b}[0m",
            file_references.len()
        );
        report.file_references = Some(file_references.len());
    } else {
        warn!(anchor = FILE_REFERENCE_SECTION, "section not found");
    }

    if insert_after_anchor(content, BUILD_FILE_SECTION, &build_files) {
        println!(
            "\u{001b}[92m✓ Added {} build file entries\u{001b}[0m",
            build_files.len()
        );
        report.build_files = Some(build_files.len());
    } else {
        warn!(anchor = BUILD_FILE_SECTION, "section not found");
    }

    if append_to_list(content, &SOURCES_PHASE, &phase_entries) {
        println!(
            "\u{001b}[92m✓ Added {} files to Sources build phase\u{001b}[0m",
            phase_entries.len()
        );
        report.build_phase_entries = Some(phase_entries.len());
    } else {
        println!("\u{001b}[91m✗ Could not find Sources build phase\u{001b}[0m");
    }

    Ok(report)
}
