use crate::ports::outbound::LockfileReader;
use crate::shared::error::GathererError;
use crate::shared::security::{validate_file_size, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::Path;

/// File name of the Yarn lockfile inside a project directory
pub const LOCKFILE_NAME: &str = "yarn.lock";

/// FileSystemReader adapter for reading the lockfile from the file system
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Reads a file after checking it is a regular file within the size limit
    fn checked_read_file(&self, path: &Path) -> Result<String> {
        let metadata = fs::metadata(path)
            .map_err(|e| anyhow::anyhow!("Failed to read metadata: {}", e))?;

        if !metadata.is_file() {
            anyhow::bail!("{} is not a regular file", path.display());
        }

        validate_file_size(metadata.len(), path, MAX_FILE_SIZE)?;

        fs::read_to_string(path).map_err(|e| anyhow::anyhow!("Failed to read file: {}", e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl LockfileReader for FileSystemReader {
    fn read_lockfile(&self, project_path: &Path) -> Result<String> {
        let lockfile_path = project_path.join(LOCKFILE_NAME);

        if !lockfile_path.is_file() {
            return Err(GathererError::LockfileNotFound {
                path: lockfile_path,
            }
            .into());
        }

        self.checked_read_file(&lockfile_path).map_err(|e| {
            GathererError::LockfileReadError {
                path: lockfile_path,
                details: e.to_string(),
            }
            .into()
        })
    }
}
