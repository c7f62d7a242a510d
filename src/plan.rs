//! What a run inserts: the manifest to edit, the groups that must exist and
//! the files to register.

use crate::error::{PbxError, Result};
use crate::types::{FileInsertion, GroupRef};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_PROJECT: &str = "PetSafety.xcodeproj/project.pbxproj";

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct PlannedFile {
    pub name: String,
    pub path: String,
    pub group: String, // group name, resolved to an id before editing
}

#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct InsertionPlan {
    #[serde(default = "default_project")]
    pub project: PathBuf,
    #[serde(default)]
    pub root_group: Option<String>,
    /// Groups that must all be found, even ones no file goes into.
    #[serde(default)]
    pub groups: Vec<String>,
    pub files: Vec<PlannedFile>,
    /// Printed after a successful run.
    #[serde(default)]
    pub notes: Vec<String>,
}

fn default_project() -> PathBuf {
    PathBuf::from(DEFAULT_PROJECT)
}

fn planned(name: &str, path: &str, group: &str) -> PlannedFile {
    PlannedFile {
        name: name.to_string(),
        path: path.to_string(),
        group: group.to_string(),
    }
}

impl Default for InsertionPlan {
    // The offline mode files.
    fn default() -> Self {
        Self {
            project: default_project(),
            root_group: Some("PetSafety".to_string()),
            groups: ["Services", "Views", "Components", "Models"]
                .iter()
                .map(|g| g.to_string())
                .collect(),
            files: vec![
                planned(
                    "NetworkMonitor.swift",
                    "Services/NetworkMonitor.swift",
                    "Services",
                ),
                planned(
                    "OfflineDataManager.swift",
                    "Services/OfflineDataManager.swift",
                    "Services",
                ),
                planned("SyncService.swift", "Services/SyncService.swift", "Services"),
                planned(
                    "OfflineIndicator.swift",
                    "Views/Components/OfflineIndicator.swift",
                    "Components",
                ),
            ],
            notes: vec![
                "The Core Data model (PetSafety.xcdatamodeld) needs to be added manually\n      \
                 or you can open Xcode and use File > Add Files to add it."
                    .to_string(),
            ],
        }
    }
}

impl InsertionPlan {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Declared groups followed by any group only named by a file, without repeats.
    pub fn required_groups(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        let declared = self.groups.iter();
        let from_files = self.files.iter().map(|f| &f.group);
        for name in declared.chain(from_files) {
            if !names.contains(name) {
                names.push(name.clone());
            }
        }
        names
    }

    /// Pairs every planned file with the id of its group.
    pub fn insertions(&self, groups: &[GroupRef]) -> Result<Vec<FileInsertion>> {
        let mut missing = Vec::new();
        let mut insertions = Vec::with_capacity(self.files.len());

        for file in &self.files {
            match groups.iter().find(|g| g.name == file.group) {
                Some(group) => insertions.push(FileInsertion::new(&file.name, &file.path, &group.id)),
                None => {
                    if !missing.contains(&file.group) {
                        missing.push(file.group.clone());
                    }
                }
            }
        }

        if !missing.is_empty() {
            return Err(PbxError::GroupsNotFound(missing));
        }
        Ok(insertions)
    }
}
