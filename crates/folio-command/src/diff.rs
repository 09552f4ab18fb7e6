//! Page diffs for reviewing edits

use folio_core::Result;
use folio_library::SectionNode;

/// Line diff of two pages rendered as pretty JSON
pub fn compute_page_diff(before: &[SectionNode], after: &[SectionNode]) -> Result<String> {
    let before = serde_json::to_string_pretty(before)?;
    let after = serde_json::to_string_pretty(after)?;
    Ok(diff_lines(&before, &after))
}

/// Unified-style line diff: `"  "` for kept lines, `"- "` and `"+ "` for
/// removed and added ones. Uses a longest-common-subsequence table, so
/// pages are expected to stay small.
pub fn diff_lines(before: &str, after: &str) -> String {
    let a: Vec<&str> = before.lines().collect();
    let b: Vec<&str> = after.lines().collect();

    // lcs[i][j] = common subsequence length of a[i..] and b[j..]
    let mut lcs = vec![vec![0usize; b.len() + 1]; a.len() + 1];
    for i in (0..a.len()).rev() {
        for j in (0..b.len()).rev() {
            lcs[i][j] = if a[i] == b[j] {
                lcs[i + 1][j + 1] + 1
            } else {
                lcs[i + 1][j].max(lcs[i][j + 1])
            };
        }
    }

    let mut output = String::new();
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i] == b[j] {
            push_line(&mut output, ' ', a[i]);
            i += 1;
            j += 1;
        } else if lcs[i + 1][j] >= lcs[i][j + 1] {
            push_line(&mut output, '-', a[i]);
            i += 1;
        } else {
            push_line(&mut output, '+', b[j]);
            j += 1;
        }
    }
    for line in &a[i..] {
        push_line(&mut output, '-', line);
    }
    for line in &b[j..] {
        push_line(&mut output, '+', line);
    }

    output
}

fn push_line(output: &mut String, marker: char, line: &str) {
    output.push(marker);
    output.push(' ');
    output.push_str(line);
    output.push('\n');
}
