use std::path::PathBuf;

/// ReportRequest - Internal request DTO for the license report use case
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Path to the project directory containing yarn.lock
    pub project_path: PathBuf,
    /// Patterns for excluding packages from the report
    pub exclude_patterns: Vec<String>,
}

impl ReportRequest {
    pub fn new(project_path: PathBuf, exclude_patterns: Vec<String>) -> Self {
        Self {
            project_path,
            exclude_patterns,
        }
    }
}
