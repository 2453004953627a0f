use crate::license_report::domain::{LockfileBlock, PackageRecord};
use thiserror::Error;

const VERSION_PREFIX: &str = "version ";

/// Reasons a lockfile block cannot be turned into a PackageRecord
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryParseError {
    #[error("block {index} is empty")]
    EmptyBlock { index: usize },

    #[error("block {index} has no version line after specifier '{specifier}'")]
    MissingVersionLine { index: usize, specifier: String },
}

/// EntryParser - extracts (name, version) from a yarn v1 lockfile entry
///
/// An entry looks like:
///
/// ```text
/// "@scope/pkg@^1.2.3", "@scope/pkg@^1.3.0":
///   version "1.3.0"
///   resolved "https://registry.yarnpkg.com/..."
/// ```
///
/// Only the specifier line and the line right after it are read.
pub struct EntryParser;

impl EntryParser {
    pub fn parse(block: &LockfileBlock<'_>) -> Result<PackageRecord, EntryParseError> {
        let mut lines = block.text().split('\n').skip_while(|line| line.is_empty());

        let specifier = lines
            .next()
            .ok_or(EntryParseError::EmptyBlock {
                index: block.index(),
            })?;

        let version_line = lines
            .next()
            .ok_or_else(|| EntryParseError::MissingVersionLine {
                index: block.index(),
                specifier: specifier.to_string(),
            })?;

        Ok(PackageRecord::new(
            Self::extract_name(specifier),
            Self::extract_version(version_line),
        ))
    }

    /// Name from the first specifier on the line: `@scope/name` for scoped
    /// packages, everything before the first `@` otherwise.
    pub fn extract_name(specifier_line: &str) -> String {
        let cleaned = specifier_line.replace('"', "");

        match cleaned.strip_prefix('@') {
            Some(rest) => {
                let scoped = rest.split('@').next().unwrap_or_default();
                format!("@{}", scoped)
            }
            None => cleaned.split('@').next().unwrap_or_default().to_string(),
        }
    }

    pub fn extract_version(version_line: &str) -> String {
        let trimmed = version_line.trim();
        trimmed
            .strip_prefix(VERSION_PREFIX)
            .unwrap_or(trimmed)
            .replace('"', "")
    }
}
