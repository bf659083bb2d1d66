use std::sync::LazyLock;

use regex::Regex;

static NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s*").expect("valid regex"));

/// Extract subtask lines from a model completion.
///
/// Splits on newlines, trims each line, discards blank lines, and strips a
/// leading "<number>. " prefix from what remains. Assumes the model followed
/// the numbered-list instruction; output that doesn't match simply yields
/// fewer (or zero) entries.
pub fn numbered_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| NUMBER_PREFIX.replace(line, "").trim().to_string())
        .collect()
}
