use crate::error::{PbxError, Result};
use crate::types::GroupRef;
use regex::Regex;

// First `<24 hex> /* <name> */` in the text. That is usually the group's
// entry in its parent's children list, which carries the same id.
pub fn find_group_id(content: &str, group_name: &str) -> Option<String> {
    let pattern = format!(r"([A-F0-9]{{24}}) /\* {} \*/", regex::escape(group_name));
    let re = Regex::new(&pattern).ok()?;

    re.captures(content).map(|caps| caps[1].to_string())
}

/// Looks up every name, keeping misses as `None` so callers can report them.
pub fn find_groups<S: AsRef<str>>(content: &str, names: &[S]) -> Vec<(String, Option<String>)> {
    names
        .iter()
        .map(|name| {
            let name = name.as_ref();
            (name.to_string(), find_group_id(content, name))
        })
        .collect()
}

/// Turns lookups into group refs, failing with every missing name at once.
pub fn resolve_groups(lookups: Vec<(String, Option<String>)>) -> Result<Vec<GroupRef>> {
    let missing: Vec<String> = lookups
        .iter()
        .filter(|(_, id)| id.is_none())
        .map(|(name, _)| name.clone())
        .collect();

    if !missing.is_empty() {
        return Err(PbxError::GroupsNotFound(missing));
    }

    Ok(lookups
        .into_iter()
        .filter_map(|(name, id)| id.map(|id| GroupRef { name, id }))
        .collect())
}
