//! Rare-line detection: lines far longer than the input's mean length.

/// Maximum number of rare lines reported.
pub const RARE_LIMIT: usize = 10;

/// Lines whose untrimmed length exceeds twice the mean untrimmed length.
///
/// Lengths count characters including any line terminator. Returns trimmed
/// text in input order, at most [`RARE_LIMIT`] entries. `threshold` is part
/// of the call signature but does not affect the result.
pub fn find_rare_lines<S: AsRef<str>>(lines: &[S], threshold: f64) -> Vec<String> {
    find_rare_lines_with(lines, threshold, RARE_LIMIT)
}

/// [`find_rare_lines`] with an explicit result cap.
pub fn find_rare_lines_with<S: AsRef<str>>(
    lines: &[S],
    _threshold: f64,
    limit: usize,
) -> Vec<String> {
    if lines.is_empty() {
        return Vec::new();
    }

    let lengths: Vec<usize> = lines.iter().map(|l| l.as_ref().chars().count()).collect();
    let mean = lengths.iter().sum::<usize>() as f64 / lengths.len() as f64;

    lines
        .iter()
        .zip(&lengths)
        .filter(|&(_, &len)| len as f64 > mean * 2.0)
        .take(limit)
        .map(|(line, _)| line.as_ref().trim().to_string())
        .collect()
}
