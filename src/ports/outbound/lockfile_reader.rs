use crate::shared::Result;
use std::path::Path;

/// LockfileReader port for reading lockfile contents
///
/// This port abstracts the file system operations needed to read
/// the yarn.lock file from a project directory.
pub trait LockfileReader {
    /// Reads the yarn.lock file from the specified project directory
    ///
    /// # Returns
    /// The raw content of the yarn.lock file as a string
    ///
    /// # Errors
    /// Returns an error if:
    /// - The yarn.lock file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    fn read_lockfile(&self, project_path: &Path) -> Result<String>;
}
