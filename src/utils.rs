use crate::error::{MergeError, Result};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Splits `content` into lines that keep their terminator, so that
/// concatenating them yields `content` again.
pub fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content.split_inclusive('\n')
}

pub fn strip_line_ending(line: &str) -> &str {
    line.trim_end_matches('\n').trim_end_matches('\r')
}

pub fn read_file(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| MergeError::io(path, e))
}

/// The version string is the last line of the version file, right-trimmed.
pub fn read_version_string(read: &mut impl Read, path: &Path) -> Result<String> {
    let mut version = None;
    for line in BufReader::new(read).lines() {
        let line = line.map_err(|e| MergeError::io(path, e))?;
        version = Some(line.trim_end().to_owned());
    }

    match version {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(MergeError::EmptyVersionFile {
            path: path.to_owned(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_lines_is_lossless() {
        let content = "# Title\r\n\n* a\nlast";
        let lines: Vec<_> = split_lines(content).collect();
        assert_eq!(lines, vec!["# Title\r\n", "\n", "* a\n", "last"]);
        assert_eq!(lines.concat(), content);
    }

    #[test]
    fn strip_line_ending_handles_crlf() {
        assert_eq!(strip_line_ending("## Head\r\n"), "## Head");
        assert_eq!(strip_line_ending("## Head"), "## Head");
    }

    #[test]
    fn version_is_last_line() {
        let mut input = "0.9.0\n1.4.2  \n".as_bytes();
        let v = read_version_string(&mut input, Path::new("version.txt")).unwrap();
        assert_eq!(v, "1.4.2");
    }

    #[test]
    fn empty_version_file_is_rejected() {
        let mut input = "".as_bytes();
        let err = read_version_string(&mut input, Path::new("version.txt")).unwrap_err();
        assert!(matches!(err, MergeError::EmptyVersionFile { .. }));
    }
}
