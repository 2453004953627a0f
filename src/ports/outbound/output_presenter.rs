use crate::shared::Result;

/// OutputPresenter port for presenting the final report
///
/// This port abstracts the output destination where the formatted
/// report content is written.
pub trait OutputPresenter {
    /// Presents the formatted report, replacing any previous output
    ///
    /// # Errors
    /// Returns an error if:
    /// - Writing to the output destination fails
    /// - File permissions prevent writing
    /// - The destination is refused for security reasons
    fn present(&self, content: &str) -> Result<()>;
}
