use regex::Regex;

/// Appends `lines` (one per line, already indented) to the end of the list
/// captured as `body` by `list_re`. Returns false if the list isn't there.
///
/// # Arguments
///
/// * `content` - The manifest text, edited in place.
/// * `list_re` - Pattern whose `body` group ends where the new lines go.
/// * `lines` - The entries to append.
///
pub fn append_to_list(content: &mut String, list_re: &Regex, lines: &[String]) -> bool {
    let end = match list_re.captures(content.as_str()).and_then(|caps| caps.name("body")) {
        Some(body) => body.end(),
        None => return false,
    };

    content.insert_str(end, &prefixed_block(lines));
    true
}

/// Inserts `lines` right after the first occurrence of `anchor`, keeping
/// their order.
pub fn insert_after_anchor(content: &mut String, anchor: &str, lines: &[String]) -> bool {
    let Some(pos) = content.find(anchor) else {
        return false;
    };

    content.insert_str(pos + anchor.len(), &prefixed_block(lines));
    true
}

fn prefixed_block(lines: &[String]) -> String {
    lines.iter().map(|line| format!("\n{}", line)).collect()
}
