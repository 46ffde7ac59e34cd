//! File I/O utilities with atomic writes
//!
//! Ledger and credential files are plain text, one entry per line. Writes go
//! to a temporary sibling first and are renamed over the target, so a failed
//! write never leaves a truncated file behind.

use std::fs::{self, File};
use std::io::{BufWriter, ErrorKind, Write};
use std::path::Path;
use std::string::FromUtf8Error;

use crate::error::TrackerError;

/// One line of a text file, or the undecodable line if it isn't valid UTF-8
pub type TextLine = Result<String, FromUtf8Error>;

/// Read all lines of a text file, returning an empty list if it doesn't exist
///
/// Lines are decoded one at a time, so a single bad line does not fail the
/// whole read. `\n` and `\r\n` endings are both accepted.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<TextLine>, TrackerError> {
    let path = path.as_ref();

    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(TrackerError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            )))
        }
    };

    if bytes.is_empty() {
        return Ok(Vec::new());
    }
    let body = bytes.strip_suffix(b"\n").unwrap_or(&bytes[..]);

    Ok(body
        .split(|&b| b == b'\n')
        .map(|line| String::from_utf8(line.strip_suffix(b"\r").unwrap_or(line).to_vec()))
        .collect())
}

/// Write lines to a file atomically (write to temp, then rename)
///
/// Each line is terminated with `\n`.
pub fn write_lines_atomic<P, I, S>(path: P, lines: I) -> Result<(), TrackerError>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Temp file must live in the same directory for the rename to be atomic
    let mut temp_name = path.as_os_str().to_owned();
    temp_name.push(".tmp");
    let temp_path = Path::new(&temp_name);

    let file = File::create(temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line.as_ref())
            .map_err(|e| TrackerError::Storage(format!("Failed to write data: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(temp_path, path).map_err(|e| {
        let _ = fs::remove_file(temp_path);
        TrackerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_nonexistent_returns_empty() {
        let temp_dir = TempDir::new().unwrap();
        let lines = read_lines(temp_dir.path().join("missing.txt")).unwrap();
        assert!(lines.is_empty());
    }

    fn read_text(path: &Path) -> Vec<String> {
        read_lines(path)
            .unwrap()
            .into_iter()
            .map(|line| line.unwrap())
            .collect()
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");

        write_lines_atomic(&path, ["first", "second, with comma"]).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "first\nsecond, with comma\n"
        );
        assert_eq!(read_text(&path), vec!["first", "second, with comma"]);
    }

    #[test]
    fn test_rewrite_replaces_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");

        write_lines_atomic(&path, ["a", "b", "c"]).unwrap();
        write_lines_atomic(&path, ["d"]).unwrap();

        assert_eq!(read_text(&path), vec!["d"]);
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("users.txt");

        write_lines_atomic(&path, ["alice,abc"]).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("users.txt.tmp").exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("data.csv");

        write_lines_atomic(&path, Vec::<String>::new()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_read_directory_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = read_lines(temp_dir.path()).unwrap_err();
        assert!(matches!(err, TrackerError::Storage(_)));
    }

    #[test]
    fn test_invalid_utf8_line_does_not_fail_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");
        fs::write(&path, b"first\r\nCaf\xe9\nlast").unwrap();

        let lines = read_lines(&path).unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].as_deref(), Ok("first"));
        assert_eq!(lines[1].as_ref().unwrap_err().as_bytes(), b"Caf\xe9");
        assert_eq!(lines[2].as_deref(), Ok("last"));
    }

    #[test]
    fn test_empty_file_has_no_lines() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("data.csv");
        fs::write(&path, "").unwrap();
        assert!(read_lines(&path).unwrap().is_empty());

        fs::write(&path, "\n").unwrap();
        assert_eq!(read_text(&path), vec![""]);
    }
}
