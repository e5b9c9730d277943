//! Record extraction
//!
//! Splits normalized input into `{ ... }` spans. A span starts at a `{` and
//! ends at the first `}` after it, so a nested block closes the span early;
//! the decoder copes with the unclosed remainder.

/// Find every brace-delimited record in `normalized`, in input order.
///
/// Each returned slice includes its braces. Text between records is ignored,
/// and a `{` that is never closed ends the scan.
pub fn extract_records(normalized: &str) -> Vec<&str> {
    let mut records = Vec::new();
    let mut pos = 0;

    while let Some(open) = normalized[pos..].find('{') {
        let start = pos + open;
        let Some(close) = normalized[start..].find('}') else {
            break;
        };
        let end = start + close + 1;
        records.push(&normalized[start..end]);
        pos = end;
    }

    records
}
