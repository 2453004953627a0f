/// PackageRecord value object - the (name, version) pair parsed from one
/// lockfile entry
///
/// Records are not deduplicated: the same package pinned by two entries
/// yields two records. No character validation happens here, a malformed
/// entry simply produces an odd-looking record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageRecord {
    name: String,
    version: String,
}

impl PackageRecord {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// True for `@scope/name` packages
    pub fn is_scoped(&self) -> bool {
        self.name.starts_with('@')
    }
}

impl std::fmt::Display for PackageRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.name, self.version)
    }
}
