use crate::errors::{AppError, Result};
use crate::extract::catalog::is_heading_boundary;

/// Extracts the contiguous block of lines belonging to the requested
/// template's section.
///
/// The section starts at the first line containing `requested_template`,
/// case-insensitively, and ends just before the next line that begins
/// with a recognized catalog heading (or at the end of the text). A match
/// inside a content line also starts a section; the scan cannot tell a
/// genuine heading from a coincidental occurrence, and callers rely on
/// that looseness.
pub fn extract_block(text: &str, requested_template: &str) -> Result<String> {
    let lines: Vec<&str> = text.lines().collect();
    let needle = requested_template.to_lowercase();

    let start = lines
        .iter()
        .position(|line| line.trim().to_lowercase().contains(&needle))
        .ok_or_else(|| AppError::TemplateNotFound(requested_template.to_string()))?;

    let end = lines[start + 1..]
        .iter()
        .position(|line| is_heading_boundary(line))
        .map(|offset| start + 1 + offset)
        .unwrap_or(lines.len());

    Ok(lines[start..end].join("\n").trim().to_string())
}
