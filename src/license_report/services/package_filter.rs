use crate::license_report::domain::PackageRecord;
use crate::shared::Result;
use std::cell::Cell;

/// Maximum number of exclude patterns to prevent DoS attacks
const MAX_EXCLUDE_PATTERNS: usize = 64;

/// Maximum length of a single exclude pattern to prevent DoS attacks
const MAX_PATTERN_LENGTH: usize = 255;

/// PackageFilter - Filters package records based on exclusion patterns
///
/// Supports wildcard patterns using '*' to match zero or more characters,
/// so `@types/*` drops every type-definition package.
/// Patterns are case-sensitive and validated against a character whitelist.
#[derive(Debug)]
pub struct PackageFilter {
    patterns: Vec<ExcludePattern>,
}

impl PackageFilter {
    /// Creates a new PackageFilter from raw pattern strings
    ///
    /// # Errors
    /// - Too many patterns (> MAX_EXCLUDE_PATTERNS)
    /// - Invalid pattern format (length, characters)
    pub fn new(patterns: Vec<String>) -> Result<Self> {
        if patterns.len() > MAX_EXCLUDE_PATTERNS {
            anyhow::bail!(
                "Too many exclusion patterns: {} (maximum: {})",
                patterns.len(),
                MAX_EXCLUDE_PATTERNS
            );
        }

        let patterns = patterns
            .into_iter()
            .map(ExcludePattern::new)
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { patterns })
    }

    /// Returns only the records whose name matches no exclusion pattern,
    /// preserving their order.
    pub fn filter_packages(&self, packages: Vec<PackageRecord>) -> Vec<PackageRecord> {
        packages
            .into_iter()
            .filter(|pkg| !self.matches(pkg.name()))
            .collect()
    }

    fn matches(&self, package_name: &str) -> bool {
        // Every pattern is evaluated so unmatched-pattern tracking stays accurate
        self.patterns
            .iter()
            .fold(false, |hit, p| p.matches(package_name) || hit)
    }

    /// Patterns that have not matched any package so far.
    ///
    /// Call after filtering.
    pub fn get_unmatched_patterns(&self) -> Vec<String> {
        self.patterns
            .iter()
            .filter(|p| !p.matched.get())
            .map(|p| p.original.clone())
            .collect()
    }
}

#[derive(Debug)]
struct ExcludePattern {
    original: String,
    matcher: PatternMatcher,
    matched: Cell<bool>,
}

impl ExcludePattern {
    fn new(pattern: String) -> Result<Self> {
        validate_pattern(&pattern)?;

        let matcher = compile_pattern(&pattern);

        Ok(Self {
            original: pattern,
            matcher,
            matched: Cell::new(false),
        })
    }

    fn matches(&self, package_name: &str) -> bool {
        let is_match = self.matcher.matches(package_name);
        if is_match {
            self.matched.set(true);
        }
        is_match
    }
}

#[derive(Debug)]
enum PatternMatcher {
    /// "package-name"
    Exact(String),
    /// "*-suffix"
    EndsWith(String),
    /// "prefix-*" or "@scope/*"
    StartsWith(String),
    /// "*middle*"
    Contains(String),
    /// "pre*fix*suf", anchored at both ends unless the pattern starts/ends with '*'
    Segments {
        parts: Vec<String>,
        anchored_start: bool,
        anchored_end: bool,
    },
}

impl PatternMatcher {
    fn matches(&self, package_name: &str) -> bool {
        match self {
            PatternMatcher::Exact(s) => package_name == s,
            PatternMatcher::EndsWith(suffix) => package_name.ends_with(suffix),
            PatternMatcher::StartsWith(prefix) => package_name.starts_with(prefix),
            PatternMatcher::Contains(middle) => package_name.contains(middle),
            PatternMatcher::Segments {
                parts,
                anchored_start,
                anchored_end,
            } => match_segments(package_name, parts, *anchored_start, *anchored_end),
        }
    }
}

fn match_segments(name: &str, parts: &[String], anchored_start: bool, anchored_end: bool) -> bool {
    let mut rest = name;

    for (i, part) in parts.iter().enumerate() {
        let is_first = i == 0;
        let is_last = i == parts.len() - 1;

        if is_first && anchored_start {
            match rest.strip_prefix(part.as_str()) {
                Some(r) => rest = r,
                None => return false,
            }
        } else if is_last && anchored_end {
            return rest.len() >= part.len() && rest.ends_with(part.as_str());
        } else {
            match rest.find(part.as_str()) {
                Some(pos) => rest = &rest[pos + part.len()..],
                None => return false,
            }
        }
    }

    !anchored_end || rest.is_empty() || parts.is_empty()
}

fn validate_pattern(pattern: &str) -> Result<()> {
    if pattern.is_empty() {
        anyhow::bail!("Exclusion pattern cannot be empty");
    }

    if pattern.len() > MAX_PATTERN_LENGTH {
        anyhow::bail!(
            "Exclusion pattern is too long: '{}' ({} chars). Maximum: {} chars",
            pattern,
            pattern.len(),
            MAX_PATTERN_LENGTH
        );
    }

    for ch in pattern.chars() {
        if !is_valid_pattern_char(ch) {
            anyhow::bail!(
                "Exclusion pattern contains invalid character '{}' in pattern '{}'. \
                 Only alphanumeric, hyphens, underscores, dots, '@', '/', brackets, and asterisks (*) are allowed.",
                ch,
                pattern
            );
        }
    }

    if pattern.chars().all(|c| c == '*') {
        anyhow::bail!(
            "Exclusion pattern cannot contain only wildcards: '{}'",
            pattern
        );
    }

    Ok(())
}

fn is_valid_pattern_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, '-' | '_' | '.' | '@' | '/' | '[' | ']' | '*')
}

fn compile_pattern(pattern: &str) -> PatternMatcher {
    let wildcard_count = pattern.matches('*').count();
    let starts = pattern.starts_with('*');
    let ends = pattern.ends_with('*');

    match wildcard_count {
        0 => PatternMatcher::Exact(pattern.to_string()),
        1 if starts => PatternMatcher::EndsWith(pattern[1..].to_string()),
        1 if ends => PatternMatcher::StartsWith(pattern[..pattern.len() - 1].to_string()),
        2 if starts && ends => PatternMatcher::Contains(pattern[1..pattern.len() - 1].to_string()),
        _ => PatternMatcher::Segments {
            parts: pattern
                .split('*')
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .collect(),
            anchored_start: !starts,
            anchored_end: !ends,
        },
    }
}
