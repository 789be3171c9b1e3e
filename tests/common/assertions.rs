//! Assertion helpers for report output.

use pretty_assertions::assert_eq;

/// One parsed `#rrggbb (Count: N)` line
#[derive(Debug, Clone, PartialEq)]
pub struct ColorLine {
    pub hex: String,
    pub count: u64,
}

/// Text report split into its parts
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedReport {
    pub header: String,
    pub colors: Vec<ColorLine>,
    pub left: String,
    pub right: String,
}

/// Parse the text format, panicking with the full output on any deviation
pub fn parse_text_report(output: &str) -> ParsedReport {
    let lines: Vec<&str> = output.lines().collect();
    let blank = lines
        .iter()
        .position(|l| l.is_empty())
        .unwrap_or_else(|| panic!("No blank separator line in output:\n{output}"));

    let header = lines[0].to_string();
    let colors = lines[1..blank]
        .iter()
        .map(|line| {
            let (hex, rest) = line
                .split_once(" (Count: ")
                .unwrap_or_else(|| panic!("Malformed color line {line:?}"));
            let count = rest
                .strip_suffix(')')
                .and_then(|n| n.parse().ok())
                .unwrap_or_else(|| panic!("Malformed count in {line:?}"));
            ColorLine {
                hex: hex.to_string(),
                count,
            }
        })
        .collect();

    assert_eq!(
        lines.get(blank + 1).copied(),
        Some("Gradient Check:"),
        "Output:\n{output}"
    );
    let left = lines[blank + 2]
        .strip_prefix("Left: ")
        .unwrap_or_else(|| panic!("Missing Left line in output:\n{output}"));
    let right = lines[blank + 3]
        .strip_prefix("Right: ")
        .unwrap_or_else(|| panic!("Missing Right line in output:\n{output}"));
    assert_eq!(lines.len(), blank + 4, "Trailing lines in output:\n{output}");

    ParsedReport {
        header,
        colors,
        left: left.to_string(),
        right: right.to_string(),
    }
}

/// Assert the output is exactly one `Error:` line and nothing else
pub fn assert_error_output(output: &str) {
    assert!(
        output.starts_with("Error: "),
        "Expected an Error line, got:\n{output}"
    );
    assert_eq!(output.lines().count(), 1, "Expected one line, got:\n{output}");
    assert!(!output.contains("(Count:"), "Color lines leaked:\n{output}");
}

/// Assert a hex string is `#` plus six lowercase hex digits
pub fn assert_hex_format(hex: &str) {
    assert_eq!(hex.len(), 7, "Bad hex {hex:?}");
    assert!(hex.starts_with('#'), "Bad hex {hex:?}");
    assert!(
        hex[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)),
        "Bad hex {hex:?}"
    );
}

/// Assert at most `limit` colors, sorted non-increasing by count
pub fn assert_ranked(report: &ParsedReport, limit: usize) {
    assert!(
        report.colors.len() <= limit,
        "{} colors listed, limit {limit}",
        report.colors.len()
    );
    assert!(
        report
            .colors
            .windows(2)
            .all(|pair| pair[0].count >= pair[1].count),
        "Counts not sorted: {:?}",
        report.colors
    );
}
