use anyhow::{Context, Result};
use std::io;
use std::path::PathBuf;

use super::{CODE_BEGIN_MARK, CODE_END_MARK};

/// Returns the user-owned code between the marker lines of a generated file.
///
/// The blank line written on each side of the code is not part of the result.
/// `None` if either marker is missing or out of order.
pub fn extract_code<'a>(content: &'a str, line_comment: &str) -> Option<&'a str> {
    let begin = format!("{line_comment} {CODE_BEGIN_MARK}");
    let end = format!("{line_comment} {CODE_END_MARK}");

    let start = content.find(&begin)? + begin.len();
    let rest = &content[start..];
    let rest = rest.strip_prefix('\n').unwrap_or(rest);
    let region = &rest[..rest.find(&end)?];

    let region = region.strip_prefix('\n').unwrap_or(region);
    let region = region.strip_suffix('\n').unwrap_or(region);
    Some(region.strip_suffix('\n').unwrap_or(region))
}

/// Reads the marked code out of the first of `paths` that has it.
///
/// Files that don't exist are skipped; any other read error is returned.
pub fn read_code(paths: &[PathBuf], line_comment: &str) -> Result<Option<String>> {
    for path in paths {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => continue,
            Err(err) => {
                return Err(err).with_context(|| format!("Failed to read {}", path.display()));
            }
        };
        if let Some(code) = extract_code(&content, line_comment) {
            return Ok(Some(code.to_string()));
        }
    }
    Ok(None)
}
