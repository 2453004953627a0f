use crate::ports::outbound::OutputPresenter;
use crate::shared::error::GathererError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Default report file name, relative to the current working directory
pub const DEFAULT_OUTPUT_FILE: &str = "LICENSEALL.md";

/// FileSystemWriter adapter for writing the report to a file
///
/// The file is truncated before anything is written, so repeated runs
/// never accumulate output.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn validate_parent_directory(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.exists() && parent != Path::new("") {
                return Err(GathererError::FileWriteError {
                    path: self.output_path.clone(),
                    details: format!("Parent directory does not exist: {}", parent.display()),
                }
                .into());
            }
        }
        Ok(())
    }

    /// Rejects an existing output path that is a symbolic link
    fn validate_output_security(&self) -> Result<()> {
        if self.output_path.symlink_metadata().is_ok() {
            validate_not_symlink(&self.output_path, "write").map_err(|e| {
                GathererError::SecurityError {
                    path: self.output_path.clone(),
                    reason: e.to_string(),
                    hint: "Remove the link or choose another --output path".to_string(),
                }
            })?;
        }
        Ok(())
    }

    fn write_err(&self, e: std::io::Error) -> anyhow::Error {
        GathererError::FileWriteError {
            path: self.output_path.clone(),
            details: e.to_string(),
        }
        .into()
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        self.validate_parent_directory()?;
        self.validate_output_security()?;

        let file = File::create(&self.output_path).map_err(|e| self.write_err(e))?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(content.as_bytes())
            .map_err(|e| self.write_err(e))?;
        writer.flush().map_err(|e| self.write_err(e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("LICENSEALL.md");

        let writer = FileSystemWriter::new(output_path.clone());
        writer.present("Package: a\n").unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "Package: a\n");
    }

    #[test]
    fn test_file_writer_truncates_previous_output() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("LICENSEALL.md");
        fs::write(&output_path, "a much longer stale report from an earlier run").unwrap();

        let writer = FileSystemWriter::new(output_path.clone());
        writer.present("fresh").unwrap();

        assert_eq!(fs::read_to_string(&output_path).unwrap(), "fresh");
    }

    #[test]
    fn test_file_writer_empty_content_creates_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("LICENSEALL.md");

        FileSystemWriter::new(output_path.clone()).present("").unwrap();

        assert!(output_path.is_file());
        assert_eq!(fs::read_to_string(&output_path).unwrap(), "");
    }

    #[test]
    fn test_file_writer_parent_directory_not_found() {
        let output_path = PathBuf::from("/nonexistent/directory/LICENSEALL.md");

        let writer = FileSystemWriter::new(output_path);
        let result = writer.present("test content");

        assert!(result.is_err());
        let err_string = format!("{}", result.unwrap_err());
        assert!(err_string.contains("Parent directory does not exist"));
    }

    #[cfg(unix)]
    #[test]
    fn test_file_writer_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.md");
        let link = temp_dir.path().join("LICENSEALL.md");
        fs::write(&target, "keep me").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = FileSystemWriter::new(link).present("overwrite");

        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Security violation"));
        assert_eq!(fs::read_to_string(&target).unwrap(), "keep me");
    }
}
