use crate::error::PbxError;
use crate::plan::{DEFAULT_PROJECT, InsertionPlan, PlannedFile};
use crate::types::{FileInsertion, GroupRef};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[cfg(test)]
mod tests {
    use super::*;

    fn group(name: &str, id: &str) -> GroupRef {
        GroupRef {
            name: name.to_string(),
            id: id.to_string(),
        }
    }

    #[test]
    fn test_default_plan() {
        let plan = InsertionPlan::default();

        assert_eq!(plan.project, PathBuf::from(DEFAULT_PROJECT));
        assert_eq!(plan.root_group.as_deref(), Some("PetSafety"));
        assert_eq!(plan.files.len(), 4);
        assert_eq!(
            plan.required_groups(),
            vec!["Services", "Views", "Components", "Models"]
        );
        assert_eq!(plan.files[3].name, "OfflineIndicator.swift");
        assert_eq!(plan.files[3].path, "Views/Components/OfflineIndicator.swift");
        assert_eq!(plan.files[3].group, "Components");
        assert!(plan.notes[0].contains("PetSafety.xcdatamodeld"));
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let plan = InsertionPlan::from_json(
            r#"{"files": [{"name": "Foo.swift", "path": "Services/Foo.swift", "group": "Services"}]}"#,
        )
        .unwrap();

        assert_eq!(plan.project, PathBuf::from(DEFAULT_PROJECT));
        assert_eq!(plan.root_group, None);
        assert!(plan.groups.is_empty());
        assert!(plan.notes.is_empty());
        assert_eq!(
            plan.files,
            vec![PlannedFile {
                name: "Foo.swift".to_string(),
                path: "Services/Foo.swift".to_string(),
                group: "Services".to_string(),
            }]
        );
        assert_eq!(plan.required_groups(), vec!["Services"]);
    }

    #[test]
    fn test_from_json_rejects_missing_files() {
        let result = InsertionPlan::from_json(r#"{"project": "App.xcodeproj/project.pbxproj"}"#);
        assert!(matches!(result, Err(PbxError::Plan(_))));
    }

    #[test]
    fn test_required_groups_appends_file_groups_once() {
        let plan = InsertionPlan::from_json(
            r#"{
                "groups": ["Views", "Services"],
                "files": [
                    {"name": "A.swift", "path": "Widgets/A.swift", "group": "Widgets"},
                    {"name": "B.swift", "path": "Services/B.swift", "group": "Services"},
                    {"name": "C.swift", "path": "Widgets/C.swift", "group": "Widgets"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(plan.required_groups(), vec!["Views", "Services", "Widgets"]);
    }

    #[test]
    fn test_insertions_use_group_ids() {
        let plan = InsertionPlan::default();
        let groups = vec![
            group("Services", "1A00000000000000000000A2"),
            group("Components", "1A00000000000000000000A4"),
        ];

        let insertions = plan.insertions(&groups).unwrap();

        assert_eq!(insertions.len(), 4);
        assert_eq!(
            insertions[0],
            FileInsertion::new(
                "NetworkMonitor.swift",
                "Services/NetworkMonitor.swift",
                "1A00000000000000000000A2"
            )
        );
        assert_eq!(insertions[3].group_id, "1A00000000000000000000A4");
    }

    #[test]
    fn test_insertions_report_unresolved_groups() {
        let plan = InsertionPlan::default();
        let groups = vec![group("Services", "1A00000000000000000000A2")];

        match plan.insertions(&groups) {
            Err(PbxError::GroupsNotFound(missing)) => assert_eq!(missing, vec!["Components"]),
            other => panic!("expected missing groups, got {:?}", other),
        }
    }

    #[test]
    fn test_load_plan_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plan.json");
        fs::write(
            &path,
            r#"{"project": "App.xcodeproj/project.pbxproj", "root_group": "App", "files": []}"#,
        )
        .unwrap();

        let plan = InsertionPlan::load(&path).unwrap();
        assert_eq!(plan.project, PathBuf::from("App.xcodeproj/project.pbxproj"));
        assert_eq!(plan.root_group.as_deref(), Some("App"));

        let missing = InsertionPlan::load(&temp_dir.path().join("nope.json"));
        assert!(matches!(missing, Err(PbxError::Io(_))));
    }
}
