use license_gatherer::prelude::*;
use std::collections::HashMap;

/// Mock LicenseRepository keyed by package name
#[derive(Default)]
pub struct MockLicenseRepository {
    pub licenses: HashMap<String, String>,
    pub should_fail: bool,
}

impl MockLicenseRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_license(mut self, package: &str, text: &str) -> Self {
        self.licenses.insert(package.to_string(), text.to_string());
        self
    }

    #[allow(dead_code)]
    pub fn with_failure() -> Self {
        Self {
            licenses: HashMap::new(),
            should_fail: true,
        }
    }
}

impl LicenseRepository for MockLicenseRepository {
    fn load_license_text(&self, package_name: &str) -> Result<Option<LicenseText>> {
        if self.should_fail {
            anyhow::bail!("Mock license repository failure");
        }
        Ok(self
            .licenses
            .get(package_name)
            .cloned()
            .and_then(LicenseText::new))
    }
}
