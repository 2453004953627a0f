/// Filesystem adapters for file I/O operations
mod file_reader;
mod file_writer;
mod node_modules_license_repository;

pub use file_reader::{FileSystemReader, LOCKFILE_NAME};
pub use file_writer::{FileSystemWriter, DEFAULT_OUTPUT_FILE};
pub use node_modules_license_repository::{
    NodeModulesLicenseRepository, LICENSE_FILE_NAME, NODE_MODULES_DIR,
};
