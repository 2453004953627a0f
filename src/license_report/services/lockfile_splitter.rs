use crate::license_report::domain::LockfileBlock;
use std::borrow::Cow;

/// Separator between entries in a yarn v1 lockfile
const BLOCK_SEPARATOR: &str = "\n\n";

/// LockfileSplitter - partitions yarn.lock text into per-entry blocks
///
/// Block 0 is always the preamble (the `# yarn lockfile v1` comment header).
/// Callers drop it unconditionally, even when the file has no such header,
/// so a header-less lockfile loses its first entry.
pub struct LockfileSplitter;

impl LockfileSplitter {
    /// Rewrites CRLF line endings to LF so the blank-line separator matches
    /// lockfiles checked out on Windows. Borrows when there is nothing to do.
    pub fn normalize(content: &str) -> Cow<'_, str> {
        if content.contains("\r\n") {
            Cow::Owned(content.replace("\r\n", "\n"))
        } else {
            Cow::Borrowed(content)
        }
    }

    /// Splits the lockfile on blank lines, keeping every segment (preamble
    /// included) in file order.
    pub fn split(content: &str) -> Vec<LockfileBlock<'_>> {
        content
            .split(BLOCK_SEPARATOR)
            .enumerate()
            .map(|(index, text)| LockfileBlock::new(index, text))
            .collect()
    }

    /// Splits and drops the preamble block.
    pub fn entries(content: &str) -> Vec<LockfileBlock<'_>> {
        Self::split(content).into_iter().skip(1).collect()
    }
}
