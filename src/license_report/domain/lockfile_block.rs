/// One blank-line separated segment of a yarn.lock file
///
/// Borrowed from the lockfile text; produced by the splitter and
/// consumed right away by the entry parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockfileBlock<'a> {
    index: usize,
    text: &'a str,
}

impl<'a> LockfileBlock<'a> {
    pub fn new(index: usize, text: &'a str) -> Self {
        Self { index, text }
    }

    /// Position of the block in the lockfile. Block 0 is the preamble.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    /// True when the block holds nothing but whitespace, e.g. the tail
    /// left behind by a trailing blank line.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}
