//! Heading-scoped section replacement.
//!
//! [`replace_section`] locates an ATX heading by its text, determines the
//! span of the section it opens (up to the next heading of equal or higher
//! rank, or end of document), and splices replacement content over that
//! span. Headings inside fenced code blocks are ignored when scanning.

use crate::chunk::normalize_newlines;
use crate::error::{MdspliceError, Result};
use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(#{1,6})\s+(.+?)\s*$").expect("heading pattern is valid")
});

/// Replaces the section identified by `heading` with `replacement`.
///
/// Heading matching is case-insensitive and whitespace-collapsed, against
/// the heading text with its `#` markers stripped. If the replacement does
/// not start with a heading of its own, the original heading line is kept
/// on top of it. The returned document is trimmed and ends with exactly one
/// newline.
///
/// Fails with `SectionNotFound` when no heading matches and with
/// `InvalidArgument` when `heading` or the trimmed `replacement` is empty.
/// Pure function: no partial state on failure.
pub fn replace_section(markdown: &str, heading: &str, replacement: &str) -> Result<String> {
    let target = normalize_heading_text(heading);
    if target.is_empty() {
        return Err(MdspliceError::InvalidArgument(
            "section heading is required".to_string(),
        ));
    }

    let md = normalize_newlines(markdown);
    let lines: Vec<&str> = md.split('\n').collect();

    let mut in_fence = false;
    let mut found = None;
    let mut level = 0;
    let mut original_heading = "";

    for (i, line) in lines.iter().enumerate() {
        if line.trim().starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        let Some(caps) = HEADING_RE.captures(line) else {
            continue;
        };
        if normalize_heading_text(&caps[2]) == target {
            found = Some(i);
            level = caps[1].len();
            original_heading = line.trim_end_matches(' ');
            break;
        }
    }

    let Some(start) = found else {
        return Err(MdspliceError::SectionNotFound(heading.to_string()));
    };

    // The section runs until the next heading at the same or a shallower
    // rank; nested subsections belong to the replaced span.
    let mut end = lines.len();
    in_fence = false;
    for (i, line) in lines.iter().enumerate().skip(start + 1) {
        if line.trim().starts_with("```") {
            in_fence = !in_fence;
            continue;
        }
        if in_fence {
            continue;
        }
        if let Some(caps) = HEADING_RE.captures(line) {
            if caps[1].len() <= level {
                end = i;
                break;
            }
        }
    }

    let repl = normalize_newlines(replacement);
    let repl = repl.trim();
    if repl.is_empty() {
        return Err(MdspliceError::InvalidArgument(
            "replacement content is required".to_string(),
        ));
    }

    // Keep the original heading line unless the caller supplied their own.
    let first_line = repl.split('\n').next().unwrap_or("");
    let repl = if HEADING_RE.is_match(first_line.trim()) {
        repl.to_string()
    } else {
        format!("{}\n\n{}", original_heading, repl)
    };

    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + repl.lines().count());
    out.extend_from_slice(&lines[..start]);
    out.extend(repl.split('\n'));
    out.extend_from_slice(&lines[end..]);

    Ok(format!("{}\n", out.join("\n").trim()))
}

fn normalize_heading_text(s: &str) -> String {
    s.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
