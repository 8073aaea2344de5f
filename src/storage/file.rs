//! File-backed storage adapter
//!
//! Each key is stored as `{key}.json` inside the data directory. Uses file
//! locking for concurrent access safety; writes go through a temp file and
//! an atomic rename. Multi-process access is last-writer-wins with no merge.

use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::adapter::StorageAdapter;

/// Storage adapter writing each key to a JSON file in a data directory
pub struct FileAdapter {
    dir: PathBuf,
}

impl FileAdapter {
    /// Creates an adapter rooted at the given data directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Returns the data directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl StorageAdapter for FileAdapter {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }

        let mut file = File::open(&path)
            .with_context(|| format!("Failed to open store file: {}", path.display()))?;

        // Shared lock for reading
        file.lock_shared()
            .with_context(|| format!("Failed to acquire read lock: {}", path.display()))?;

        let mut payload = String::new();
        file.read_to_string(&mut payload)
            .with_context(|| format!("Failed to read store file: {}", path.display()))?;

        // Lock is released when file is dropped
        Ok(Some(payload))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create data directory: {}", self.dir.display()))?;

        let path = self.key_path(key);
        let temp_path = path.with_extension("json.tmp");

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            file.lock_exclusive()
                .with_context(|| format!("Failed to acquire write lock: {}", temp_path.display()))?;

            let mut writer = BufWriter::new(&file);
            writer
                .write_all(value.as_bytes())
                .with_context(|| format!("Failed to write store file: {}", path.display()))?;
            writer
                .flush()
                .with_context(|| format!("Failed to flush store file: {}", path.display()))?;
        }

        // Atomic rename
        fs::rename(&temp_path, &path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                path.display()
            )
        })?;

        Ok(())
    }
}
