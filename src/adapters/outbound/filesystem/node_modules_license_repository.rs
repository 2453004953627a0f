use crate::license_report::domain::LicenseText;
use crate::ports::outbound::LicenseRepository;
use crate::shared::security::{validate_relative_package_path, MAX_FILE_SIZE};
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Installed-packages directory inside a project
pub const NODE_MODULES_DIR: &str = "node_modules";

/// The only file name looked up for license text
pub const LICENSE_FILE_NAME: &str = "LICENSE";

/// NodeModulesLicenseRepository adapter reading `<node_modules>/<name>/LICENSE`
///
/// Scoped names are joined as-is, so `@scope/pkg` resolves to
/// `<node_modules>/@scope/pkg/LICENSE`.
pub struct NodeModulesLicenseRepository {
    node_modules_dir: PathBuf,
}

impl NodeModulesLicenseRepository {
    pub fn new(node_modules_dir: PathBuf) -> Self {
        Self { node_modules_dir }
    }

    /// Repository for the `node_modules` directory of `project_path`
    pub fn for_project(project_path: &Path) -> Self {
        Self::new(project_path.join(NODE_MODULES_DIR))
    }

    pub fn license_path(&self, package_name: &str) -> PathBuf {
        self.node_modules_dir
            .join(package_name)
            .join(LICENSE_FILE_NAME)
    }

    fn read_if_present(path: &Path) -> Option<String> {
        let metadata = fs::metadata(path).ok()?;
        if !metadata.is_file() || metadata.len() > MAX_FILE_SIZE {
            return None;
        }
        fs::read_to_string(path).ok()
    }
}

impl LicenseRepository for NodeModulesLicenseRepository {
    fn load_license_text(&self, package_name: &str) -> Result<Option<LicenseText>> {
        validate_relative_package_path(package_name)?;

        let path = self.license_path(package_name);
        Ok(Self::read_if_present(&path).and_then(LicenseText::new))
    }
}
