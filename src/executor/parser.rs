//! Parser for the harness line protocol.
//!
//! Each harness prints one block per test case: a header line
//! (`Test Case N:` or `TEST_CASE_N:`), key-value lines for the recorded
//! output, execution time and verdict, and a terminator (the next header, a
//! `---` separator, or end of output). Both dialects share this parser; only
//! the marker vocabulary and the time-unit suffix differ.
//!
//! The protocol is deliberately lenient. A missing block or missing line
//! degrades to a defined default instead of failing the request; that is
//! observable, relied-upon behavior. Emitting a tagged key-value record per
//! case would make this sturdier, but would change the harness output format.

use crate::routes::CaseResult;

/// Sentinel for a case whose output could not be recovered.
pub const NO_OUTPUT: &str = "No output";

/// Marker vocabulary for one harness dialect.
#[derive(Debug, Clone, Copy)]
pub struct MarkerSet {
    /// Prefix of a block header; the 1-based case number and a colon follow.
    pub header_prefix: &'static str,
    pub output_key: &'static str,
    pub time_key: &'static str,
    /// Unit suffix trailing the time value, empty when the dialect has none.
    pub time_suffix: &'static str,
    pub passed_key: &'static str,
    pub separator: &'static str,
}

pub const JUNIT_MARKERS: MarkerSet = MarkerSet {
    header_prefix: "Test Case ",
    output_key: "Output:",
    time_key: "Execution Time:",
    time_suffix: "ms",
    passed_key: "Passed:",
    separator: "---",
};

pub const PLAIN_MARKERS: MarkerSet = MarkerSet {
    header_prefix: "TEST_CASE_",
    output_key: "OUTPUT:",
    time_key: "EXECUTION_TIME:",
    time_suffix: "",
    passed_key: "PASSED:",
    separator: "---",
};

/// Reconstructs one result per submitted test case, in order. The returned
/// vector always has exactly `case_count` entries.
pub fn parse_output(raw: &str, case_count: usize, markers: &MarkerSet) -> Vec<CaseResult> {
    let lines: Vec<&str> = raw.lines().collect();

    (1..=case_count)
        .map(|case_number| parse_case(&lines, case_number, markers))
        .collect()
}

fn parse_case(lines: &[&str], case_number: usize, markers: &MarkerSet) -> CaseResult {
    let mut result = CaseResult {
        passed: false,
        output: String::new(),
        execution_time: 0,
    };

    let header = format!("{}{}:", markers.header_prefix, case_number);
    let Some(start) = lines.iter().position(|line| line.contains(&header)) else {
        result.output = NO_OUTPUT.to_string();
        return result;
    };

    for line in &lines[start + 1..] {
        if line.contains(markers.header_prefix) || line.contains(markers.separator) {
            break;
        }
        if let Some(value) = value_after(line, markers.output_key) {
            result.output = value.to_string();
        }
        if let Some(value) = value_after(line, markers.time_key) {
            let digits = value.strip_suffix(markers.time_suffix).unwrap_or(value);
            result.execution_time = digits.trim().parse().unwrap_or(0);
        }
        if let Some(value) = value_after(line, markers.passed_key) {
            result.passed = value.contains("true");
        }
    }

    if result.output.is_empty() {
        result.output = NO_OUTPUT.to_string();
    }

    result
}

/// Returns the trimmed text after `key`, if the line contains it.
fn value_after<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    line.find(key).map(|idx| line[idx + key.len()..].trim())
}
