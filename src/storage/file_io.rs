//! File I/O utilities for line-oriented record files
//!
//! Full rewrites go through a temp file and a rename so a failed write never
//! leaves a half-written record file behind.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::TrackerError;

/// Read every line of a file, failing if the file doesn't exist
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>, TrackerError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(TrackerError::record_file_not_found(path.display().to_string()));
    }

    let file = File::open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    BufReader::new(file)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| TrackerError::Storage(format!("Failed to read {}: {}", path.display(), e)))
}

/// Replace the contents of a file atomically (write to temp, then rename)
pub fn write_lines_atomic<P: AsRef<Path>>(path: P, lines: &[String]) -> Result<(), TrackerError> {
    let path = path.as_ref();

    ensure_parent(path)?;

    // Temp file must live in the same directory for the rename to be atomic
    let temp_path = path.with_extension("tmp");

    let file = File::create(&temp_path)
        .map_err(|e| TrackerError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line)
            .map_err(|e| TrackerError::Storage(format!("Failed to write data: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush data: {}", e)))?;

    writer
        .get_ref()
        .sync_all()
        .map_err(|e| TrackerError::Storage(format!("Failed to sync data: {}", e)))?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        TrackerError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

/// Append a single line, creating the file if needed
pub fn append_line<P: AsRef<Path>>(path: P, line: &str) -> Result<(), TrackerError> {
    let path = path.as_ref();

    ensure_parent(path)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| TrackerError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    writeln!(file, "{}", line)
        .map_err(|e| TrackerError::Storage(format!("Failed to append to {}: {}", path.display(), e)))?;

    file.flush()
        .map_err(|e| TrackerError::Storage(format!("Failed to flush {}: {}", path.display(), e)))
}

fn ensure_parent(path: &Path) -> Result<(), TrackerError> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent).map_err(|e| {
            TrackerError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        }),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_read_nonexistent_is_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.csv");

        let err = read_lines(&path).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.csv");

        let data = lines(&["Budget, 500", "coffee, 3.5, Food"]);
        write_lines_atomic(&path, &data).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "Budget, 500\ncoffee, 3.5, Food\n");
        assert_eq!(read_lines(&path).unwrap(), data);
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.csv");

        write_lines_atomic(&path, &lines(&["Budget, 1"])).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join("records.tmp").exists());
    }

    #[test]
    fn test_write_replaces_previous_contents() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("records.csv");

        write_lines_atomic(&path, &lines(&["Budget, 1", "a, 1, Food"])).unwrap();
        write_lines_atomic(&path, &lines(&["Budget, 2"])).unwrap();

        assert_eq!(read_lines(&path).unwrap(), lines(&["Budget, 2"]));
    }

    #[test]
    fn test_append_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("records.csv");

        append_line(&path, "Budget, 10").unwrap();
        append_line(&path, "tea, 2, Food").unwrap();

        assert_eq!(read_lines(&path).unwrap(), lines(&["Budget, 10", "tea, 2, Food"]));
    }
}
