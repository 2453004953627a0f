/// Crate-wide Result with anyhow::Error as the error type.
/// Typed failures are `GathererError` values carried inside the anyhow::Error.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
