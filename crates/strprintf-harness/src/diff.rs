//! Expected/actual diff rendering for failed cases.

/// Render a two-line diff with a caret marker under the first divergence.
///
/// Output bytes are shown escaped so padding spaces and control characters
/// are visible in terminal logs.
pub fn render_diff(expected: &str, actual: &str) -> String {
    let expected_vis = visible(expected);
    let actual_vis = visible(actual);
    let caret_pos = expected_vis
        .chars()
        .zip(actual_vis.chars())
        .take_while(|(a, b)| a == b)
        .count();
    let mut out = String::new();
    out.push_str(&format!("expected: `{expected_vis}`\n"));
    out.push_str(&format!("actual:   `{actual_vis}`\n"));
    out.push_str(&format!("          {}^", " ".repeat(caret_pos + 1)));
    out
}

fn visible(s: &str) -> String {
    s.chars()
        .flat_map(|c| match c {
            '\n' => "\\n".chars().collect::<Vec<_>>(),
            '\r' => "\\r".chars().collect(),
            '\t' => "\\t".chars().collect(),
            '\0' => "\\0".chars().collect(),
            c => vec![c],
        })
        .collect()
}
