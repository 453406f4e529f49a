//! Common error/warning message mining.

use regex::Regex;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Characters of a captured message kept as the dedup key.
pub const SNIPPET_LEN: usize = 50;

/// Bracketed ERROR/WARNING tag, optional whitespace, then the message
/// token up to the next whitespace or end of line (group 2).
pub static SNIPPET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(ERROR|WARNING)\]\s*(.+?)(?:\s|$)").unwrap());

/// One entry of a pattern ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatternCount {
    pub pattern: String,
    pub count: usize,
}

/// Snippet captured from a single line, already truncated to `max_chars`.
///
/// Returns `None` when the line lacks a bracketed `[ERROR]`/`[WARNING]` tag.
pub fn extract_snippet(line: &str, max_chars: usize) -> Option<String> {
    let caps = SNIPPET_RE.captures(line)?;
    let message = caps.get(2)?.as_str();
    Some(message.chars().take(max_chars).collect())
}

/// Rank snippets from tagged ERROR/WARNING lines, most frequent first.
///
/// Ties keep first-seen order.
pub fn find_common_patterns<S: AsRef<str>>(lines: &[S], top_n: usize) -> Vec<PatternCount> {
    find_common_patterns_with(lines, top_n, SNIPPET_LEN)
}

/// [`find_common_patterns`] with an explicit snippet length.
pub fn find_common_patterns_with<S: AsRef<str>>(
    lines: &[S],
    top_n: usize,
    snippet_len: usize,
) -> Vec<PatternCount> {
    let mut ranking: Vec<PatternCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for line in lines {
        let line = line.as_ref();
        if !(line.contains("ERROR") || line.contains("WARNING")) {
            continue;
        }
        let Some(snippet) = extract_snippet(line, snippet_len) else {
            continue;
        };
        match index.get(&snippet) {
            Some(&i) => ranking[i].count += 1,
            None => {
                index.insert(snippet.clone(), ranking.len());
                ranking.push(PatternCount {
                    pattern: snippet,
                    count: 1,
                });
            }
        }
    }

    // Stable sort keeps insertion order among equal counts.
    ranking.sort_by(|a, b| b.count.cmp(&a.count));
    ranking.truncate(top_n);
    ranking
}
