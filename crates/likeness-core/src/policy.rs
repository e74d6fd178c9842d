//! Comparison policy and its compiled form
//!
//! A [`ComparisonPolicy`] is the caller-facing configuration: plain path
//! strings so that tests can author it inline or load it from JSON. Each
//! comparison compiles it once into a [`CompiledPolicy`] holding parsed
//! [`PropertyPath`]s.

use crate::errors::Result;
use crate::log_op_error;
use crate::path::PropertyPath;
use likeness_core_types::schema::OP_COMPILE_POLICY;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// Which discovered properties participate in a comparison.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComparisonMode {
    /// Compare everything except `ignore_paths`
    #[default]
    Inclusive,
    /// Compare only properties overlapping `include_paths`
    Exclusive,
}

/// Immutable comparison configuration.
///
/// # Example
/// ```
/// use likeness_core::policy::ComparisonPolicy;
///
/// let policy = ComparisonPolicy::new()
///     .recursive()
///     .ignoring(["Audit.CreatedAt", "Lines[].Id"]);
/// assert!(policy.recurse_sub_properties);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComparisonPolicy {
    /// Unpack properties without a direct strategy into their own properties
    #[serde(default)]
    pub recurse_sub_properties: bool,
    #[serde(default)]
    pub mode: ComparisonMode,
    /// Used only in INCLUSIVE mode
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ignore_paths: BTreeSet<String>,
    /// Used only in EXCLUSIVE mode; matched as a path prefix
    #[serde(default, deserialize_with = "null_as_empty")]
    pub include_paths: BTreeSet<String>,
    /// Compared by identity, overriding every other rule
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reference_only_paths: BTreeSet<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<BTreeSet<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<BTreeSet<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl ComparisonPolicy {
    /// INCLUSIVE, non-recursive, nothing ignored
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable recursion into properties without a direct strategy
    pub fn recursive(mut self) -> Self {
        self.recurse_sub_properties = true;
        self
    }

    /// Add paths to ignore (INCLUSIVE mode)
    pub fn ignoring<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Switch to EXCLUSIVE mode and add paths to compare
    pub fn including<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.mode = ComparisonMode::Exclusive;
        self.include_paths.extend(paths.into_iter().map(Into::into));
        self
    }

    /// Add paths compared by identity
    pub fn by_reference<I, S>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reference_only_paths
            .extend(paths.into_iter().map(Into::into));
        self
    }

    /// Check that every path string parses.
    ///
    /// # Errors
    ///
    /// Returns the first path error found, checking ignore, include and
    /// reference-only paths in that order.
    pub fn validate(&self) -> Result<()> {
        for path in self
            .ignore_paths
            .iter()
            .chain(&self.include_paths)
            .chain(&self.reference_only_paths)
        {
            PropertyPath::parse(path)?;
        }
        Ok(())
    }

    /// Parse every path once. Malformed entries are logged and skipped so
    /// that a bad entry never turns into a comparison failure.
    pub fn compile(&self) -> CompiledPolicy {
        CompiledPolicy {
            recurse_sub_properties: self.recurse_sub_properties,
            mode: self.mode,
            ignore: compile_paths(&self.ignore_paths),
            include: compile_paths(&self.include_paths),
            reference_only: compile_paths(&self.reference_only_paths),
        }
    }
}

fn compile_paths(paths: &BTreeSet<String>) -> Vec<PropertyPath> {
    paths
        .iter()
        .filter_map(|text| match PropertyPath::parse(text) {
            Ok(path) => Some(path),
            Err(err) => {
                log_op_error!(OP_COMPILE_POLICY, err, duration_ms = 0);
                None
            }
        })
        .collect()
}

/// Policy with parsed paths, built once per comparison call.
#[derive(Debug, Clone, Default)]
pub struct CompiledPolicy {
    pub recurse_sub_properties: bool,
    pub mode: ComparisonMode,
    ignore: Vec<PropertyPath>,
    include: Vec<PropertyPath>,
    reference_only: Vec<PropertyPath>,
}

impl CompiledPolicy {
    /// Whether the property at `path` is left out of the comparison
    pub fn is_ignored(&self, path: &PropertyPath) -> bool {
        match self.mode {
            ComparisonMode::Inclusive => self.ignore.iter().any(|p| path.matches(p)),
            ComparisonMode::Exclusive => !self.include.iter().any(|p| path.overlaps(p)),
        }
    }

    /// Whether the value at `path` must be compared by identity
    pub fn is_reference_only(&self, path: &PropertyPath) -> bool {
        self.reference_only.iter().any(|p| path.matches(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path(text: &str) -> PropertyPath {
        PropertyPath::parse(text).unwrap()
    }

    #[test]
    fn test_default_policy() {
        let policy = ComparisonPolicy::default();
        assert!(!policy.recurse_sub_properties);
        assert_eq!(policy.mode, ComparisonMode::Inclusive);
        assert!(policy.ignore_paths.is_empty());
    }

    #[test]
    fn test_inclusive_ignores_exact_normalized_paths() {
        let compiled = ComparisonPolicy::new()
            .ignoring(["Lines[].Sku"])
            .compile();
        let concrete = PropertyPath::root().child("Lines").index(4).child("Sku");
        assert!(compiled.is_ignored(&concrete));
        assert!(!compiled.is_ignored(&path("Lines")));
    }

    #[test]
    fn test_exclusive_includes_ancestors_and_descendants() {
        let compiled = ComparisonPolicy::new()
            .including(["Parent.Child"])
            .compile();
        assert!(!compiled.is_ignored(&path("Parent")));
        assert!(!compiled.is_ignored(&path("Parent.Child")));
        assert!(!compiled.is_ignored(&path("Parent.Child.Name")));
        assert!(compiled.is_ignored(&path("Parent.Sibling")));
        assert!(compiled.is_ignored(&path("Other")));
    }

    #[test]
    fn test_ignore_paths_unused_in_exclusive_mode() {
        let compiled = ComparisonPolicy::new()
            .ignoring(["Id"])
            .including(["Id"])
            .compile();
        assert!(!compiled.is_ignored(&path("Id")));
    }

    #[test]
    fn test_malformed_paths_are_skipped_on_compile() {
        let policy = ComparisonPolicy::new().ignoring(["A..B", "Name"]);
        assert!(policy.validate().is_err());
        let compiled = policy.compile();
        assert!(compiled.is_ignored(&path("Name")));
    }

    #[test]
    fn test_null_lists_deserialize_as_empty() {
        let policy: ComparisonPolicy = serde_json::from_str(
            r#"{"recurse_sub_properties": true, "mode": "exclusive", "include_paths": null, "ignore_paths": null}"#,
        )
        .unwrap();
        assert!(policy.recurse_sub_properties);
        assert_eq!(policy.mode, ComparisonMode::Exclusive);
        assert!(policy.include_paths.is_empty());
        assert!(policy.ignore_paths.is_empty());
        assert!(policy.reference_only_paths.is_empty());
    }
}
