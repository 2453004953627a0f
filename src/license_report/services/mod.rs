mod entry_parser;
mod lockfile_splitter;
mod package_filter;

pub use entry_parser::{EntryParseError, EntryParser};
pub use lockfile_splitter::LockfileSplitter;
pub use package_filter::PackageFilter;
