pub mod license_text;
pub mod lockfile_block;
pub mod package_record;

pub use license_text::LicenseText;
pub use lockfile_block::LockfileBlock;
pub use package_record::PackageRecord;
