#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupRef {
    pub name: String,
    pub id: String, // 24 hex chars
}

/// One file to register: the name shown in Xcode, its path relative to the
/// project, and the id of the group it is listed under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileInsertion {
    pub name: String,
    pub path: String,
    pub group_id: String,
}

impl FileInsertion {
    pub fn new(name: &str, path: &str, group_id: &str) -> Self {
        Self {
            name: name.to_string(),
            path: path.to_string(),
            group_id: group_id.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupOutcome {
    Added,
    GroupMissing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileOutcome {
    pub name: String,
    pub file_ref_id: String,
    pub build_file_id: String,
    pub group: GroupOutcome,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditReport {
    pub files: Vec<FileOutcome>,
    // None when the section anchor was missing and the step was skipped
    pub file_references: Option<usize>,
    pub build_files: Option<usize>,
    pub build_phase_entries: Option<usize>,
}

impl EditReport {
    pub fn missing_groups(&self) -> Vec<&FileOutcome> {
        self.files
            .iter()
            .filter(|f| f.group == GroupOutcome::GroupMissing)
            .collect()
    }
}
