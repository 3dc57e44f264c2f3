//! File system utilities for size calculations and output statistics.

use anyhow::{Context, Result};
use std::{fs, path::Path};

/// Kilobytes constant (1024 bytes)
pub const KB: u64 = 1024;

/// Converts bytes to kilobytes.
#[inline]
pub fn bytes_to_kb(bytes: u64) -> f64 {
    bytes as f64 / KB as f64
}

/// Gets the size of a file in bytes.
///
/// Returns 0 if the file doesn't exist or its metadata can't be read.
pub fn file_size(path: impl AsRef<Path>) -> u64 {
    match fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(e) => {
            eprintln!("Failed to get file metadata. {e}");
            0
        }
    }
}

/// Extracts the file name from a path, or an empty string if there is none.
///
/// # Examples
///
/// ```
/// use cutil::fs::file_name;
///
/// assert_eq!(file_name("/path/to/icon-16x16.png"), "icon-16x16.png");
/// assert_eq!(file_name("/path/to/directory/"), "directory");
/// ```
pub fn file_name(path: impl AsRef<Path>) -> String {
    path.as_ref()
        .file_name()
        .unwrap_or_default()
        .to_string_lossy()
        .to_string()
}

/// Count and total size of the files sharing one extension in a directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStats {
    pub count: usize,
    pub total_bytes: u64,
}

impl FileStats {
    pub fn total_kb(&self) -> f64 {
        bytes_to_kb(self.total_bytes)
    }

    pub fn average_kb(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.total_kb() / self.count as f64
        }
    }
}

/// Collects statistics for the regular files directly inside `dir` whose
/// extension matches `ext` (case-insensitive). Subdirectories are not entered.
///
/// # Examples
///
/// ```no_run
/// use cutil::fs::dir_file_stats;
///
/// let stats = dir_file_stats("icons", "png").unwrap();
/// println!("{} files, {:.1} KB", stats.count, stats.total_kb());
/// ```
pub fn dir_file_stats(dir: impl AsRef<Path>, ext: &str) -> Result<FileStats> {
    let dir = dir.as_ref();
    let mut stats = FileStats::default();

    let entries =
        fs::read_dir(dir).with_context(|| format!("read dir {} failed", dir.display()))?;

    for entry in entries.flatten() {
        let path = entry.path();
        let matches = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(ext));

        if !matches {
            continue;
        }

        if let Ok(metadata) = entry.metadata() {
            if metadata.is_file() {
                stats.count += 1;
                stats.total_bytes += metadata.len();
            }
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_bytes_conversion() {
        assert_eq!(bytes_to_kb(1024), 1.0);
        assert_eq!(bytes_to_kb(512), 0.5);
    }

    #[test]
    fn test_file_size() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("test.txt");

        fs::write(&file_path, "Hello, World!").unwrap();
        assert_eq!(file_size(&file_path), 13);

        let non_existent = temp_dir.path().join("nonexistent.txt");
        assert_eq!(file_size(&non_existent), 0);
    }

    #[test]
    fn test_file_name() {
        assert_eq!(file_name("/path/to/file.txt"), "file.txt");
        assert_eq!(file_name("file.txt"), "file.txt");
        assert_eq!(file_name("/path/to/directory/"), "directory");
        assert_eq!(file_name(""), "");
    }

    #[test]
    fn test_dir_file_stats() -> Result<()> {
        let temp_dir = tempdir()?;
        let subdir = temp_dir.path().join("nested.png");
        fs::create_dir(&subdir)?;

        fs::write(temp_dir.path().join("a.png"), [0u8; 100])?;
        fs::write(temp_dir.path().join("b.PNG"), [0u8; 300])?;
        fs::write(temp_dir.path().join("c.ico"), [0u8; 50])?;
        fs::write(subdir.join("d.png"), [0u8; 70])?;

        let stats = dir_file_stats(temp_dir.path(), "png")?;
        assert_eq!(stats.count, 2);
        assert_eq!(stats.total_bytes, 400);
        assert_eq!(stats.total_kb(), 400.0 / 1024.0);
        assert_eq!(stats.average_kb(), 200.0 / 1024.0);
        Ok(())
    }

    #[test]
    fn test_empty_stats() -> Result<()> {
        let temp_dir = tempdir()?;
        let stats = dir_file_stats(temp_dir.path(), "png")?;
        assert_eq!(stats, FileStats::default());
        assert_eq!(stats.average_kb(), 0.0);

        assert!(dir_file_stats(temp_dir.path().join("missing"), "png").is_err());
        Ok(())
    }
}
