//! File I/O utilities for CSV snapshots with atomic writes
//!
//! Provides safe file operations that won't corrupt data on failure. A
//! snapshot is the complete collection: reads parse every row, writes
//! replace the whole file.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::FindashError;

/// Read all rows of a CSV snapshot into typed records
///
/// The first line must be the header row; fields are matched by column name.
/// An unreadable or malformed file is a fatal storage error.
pub fn read_rows<T, P>(path: P) -> Result<Vec<T>, FindashError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let file = File::open(path)
        .map_err(|e| FindashError::Storage(format!("Failed to open {}: {}", path.display(), e)))?;

    let mut reader = csv::Reader::from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for result in reader.deserialize() {
        let row = result.map_err(|e| {
            FindashError::Storage(format!("Failed to parse {}: {}", path.display(), e))
        })?;
        rows.push(row);
    }

    Ok(rows)
}

/// Write a complete CSV snapshot atomically (write to temp, then rename)
///
/// The header row is written explicitly so that an empty collection still
/// produces a valid snapshot with the fixed column schema. This ensures that
/// the file is either completely written or not modified at all.
pub fn write_rows_atomic<T, P>(path: P, columns: &[&str], rows: &[T]) -> Result<(), FindashError>
where
    T: Serialize,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            FindashError::Storage(format!(
                "Failed to create directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Create temp file in same directory (important for atomic rename)
    let temp_path = path.with_extension("csv.tmp");

    let file = File::create(&temp_path)
        .map_err(|e| FindashError::Storage(format!("Failed to create temp file: {}", e)))?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(BufWriter::new(file));

    writer
        .write_record(columns)
        .map_err(|e| FindashError::Storage(format!("Failed to write header: {}", e)))?;

    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| FindashError::Storage(format!("Failed to serialize row: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| FindashError::Storage(format!("Failed to flush data: {}", e)))?;

    let buf_writer = writer
        .into_inner()
        .map_err(|e| FindashError::Storage(format!("Failed to finish writing: {}", e)))?;
    let file = buf_writer
        .into_inner()
        .map_err(|e| FindashError::Storage(format!("Failed to finish writing: {}", e)))?;

    // Sync to disk before rename
    file.sync_all()
        .map_err(|e| FindashError::Storage(format!("Failed to sync data: {}", e)))?;

    // Atomic rename
    fs::rename(&temp_path, path).map_err(|e| {
        // Try to clean up temp file if rename fails
        let _ = fs::remove_file(&temp_path);
        FindashError::Storage(format!("Failed to rename temp file: {}", e))
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    const TEST_COLUMNS: [&str; 2] = ["name", "value"];

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestRow {
        name: String,
        value: i32,
    }

    #[test]
    fn test_read_nonexistent_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nonexistent.csv");

        assert!(read_rows::<TestRow, _>(&path).is_err());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");

        let rows = vec![
            TestRow {
                name: "a".to_string(),
                value: 1,
            },
            TestRow {
                name: "b".to_string(),
                value: 2,
            },
        ];

        write_rows_atomic(&path, &TEST_COLUMNS, &rows).unwrap();
        assert!(path.exists());

        let loaded: Vec<TestRow> = read_rows(&path).unwrap();
        assert_eq!(rows, loaded);
    }

    #[test]
    fn test_empty_snapshot_keeps_header() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.csv");

        write_rows_atomic::<TestRow, _>(&path, &TEST_COLUMNS, &[]).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.trim(), "name,value");

        let loaded: Vec<TestRow> = read_rows(&path).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_atomic_write_no_temp_file_left() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("test.csv");
        let temp_path = temp_dir.path().join("test.csv.tmp");

        let rows = vec![TestRow {
            name: "a".to_string(),
            value: 1,
        }];

        write_rows_atomic(&path, &TEST_COLUMNS, &rows).unwrap();

        assert!(path.exists());
        assert!(!temp_path.exists());
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("test.csv");

        write_rows_atomic::<TestRow, _>(&path, &TEST_COLUMNS, &[]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.csv");

        fs::write(&path, "name,value\nonly-one-field\n").unwrap();

        assert!(read_rows::<TestRow, _>(&path).is_err());
    }
}
