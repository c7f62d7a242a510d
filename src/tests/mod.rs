mod plan_tests;

/// A trimmed down PetSafety project with Services, Views, Components and
/// Models groups and a single app target.
pub const FIXTURE: &str = include_str!("fixtures/PetSafety.pbxproj");
