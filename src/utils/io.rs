//! File I/O primitives with consistent error handling.

use crate::error::{Error, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a whole UTF-8 file.
///
/// A missing file maps to `file.not_found`; every other failure (permissions,
/// invalid UTF-8, a directory in place of a file) maps to `file.not_readable`.
pub fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        let display = path.display().to_string();
        if e.kind() == ErrorKind::NotFound {
            Error::file_not_found(display, e.to_string())
        } else {
            Error::file_not_readable(display, e.to_string())
        }
    })
}

/// Overwrite a file in place with `content`.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    fs::write(path, content)
        .map_err(|e| Error::file_not_writable(path.display().to_string(), e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    #[test]
    fn read_file_succeeds_for_existing_file() {
        let mut temp = NamedTempFile::new().unwrap();
        writeln!(temp, "test content").unwrap();

        let content = read_file(temp.path()).unwrap();
        assert_eq!(content, "test content\n");
    }

    #[test]
    fn read_file_returns_not_found_for_missing_file() {
        let err = read_file(Path::new("/nonexistent/path.tsx")).unwrap_err();
        assert_eq!(err.code.as_str(), "file.not_found");
        assert_eq!(err.details["path"], "/nonexistent/path.tsx");
    }

    #[test]
    fn read_file_rejects_invalid_utf8() {
        let mut temp = NamedTempFile::new().unwrap();
        temp.write_all(&[0xff, 0xfe, 0x00]).unwrap();

        let err = read_file(temp.path()).unwrap_err();
        assert_eq!(err.code.as_str(), "file.not_readable");
    }

    #[test]
    fn read_file_rejects_directory() {
        let dir = TempDir::new().unwrap();
        let err = read_file(dir.path()).unwrap_err();
        assert_eq!(err.code.as_str(), "file.not_readable");
    }

    #[test]
    fn write_file_overwrites_content() {
        let temp = NamedTempFile::new().unwrap();
        fs::write(temp.path(), "old content").unwrap();

        write_file(temp.path(), "new content").unwrap();

        let content = fs::read_to_string(temp.path()).unwrap();
        assert_eq!(content, "new content");
    }

    #[test]
    fn write_file_returns_error_for_invalid_path() {
        let err = write_file(Path::new("/nonexistent/dir/file.tsx"), "content").unwrap_err();
        assert_eq!(err.code.as_str(), "file.not_writable");
    }
}
