//! Batch tag resolution over a documentation source tree.
//!
//! The in-build directive resolves one page at a time; this module is
//! the maintenance view: walk a docs tree, resolve every page, and
//! report which platforms each page ends up tagged with.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use crate::error::{NeuronTagError, Result};
use crate::platform::Platform;
use crate::ruleset::{RuleSet, TagResolution, TagResolver};

/// Directories skipped by default when scanning
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &[".git", "_build"];

/// Source extensions treated as documentation pages by default
pub const DEFAULT_EXTENSIONS: &[&str] = &["rst", "md"];

/// Filters applied while walking the tree.
#[derive(Debug, Clone)]
pub struct ScanOptions {
    /// Directory names to skip
    pub excluded_dirs: Vec<String>,
    /// Directory names to scan even when excluded
    pub included_dirs: Vec<String>,
    /// Source extensions treated as documentation pages
    pub extensions: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            excluded_dirs: DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect(),
            included_dirs: Vec::new(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl ScanOptions {
    fn skips_dir(&self, name: &str) -> bool {
        self.excluded_dirs.iter().any(|d| d == name)
            && !self.included_dirs.iter().any(|d| d == name)
    }

    fn takes_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e == ext)
    }
}

/// One scanned documentation page.
#[derive(Debug, Clone, Serialize)]
pub struct DocEntry {
    /// Source path relative to the scan root
    pub source: PathBuf,
    #[serde(flatten)]
    pub resolution: TagResolution,
}

/// Aggregate result of scanning a docs tree.
#[derive(Debug, Clone, Serialize)]
pub struct TreeReport {
    pub root: PathBuf,
    pub entries: Vec<DocEntry>,
}

impl TreeReport {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of pages tagged with each platform.
    pub fn platform_counts(&self) -> BTreeMap<Platform, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            for platform in &entry.resolution.platforms {
                *counts.entry(*platform).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Pages with no applicable platform.
    pub fn untagged(&self) -> Vec<&DocEntry> {
        self.entries
            .iter()
            .filter(|e| !e.resolution.is_tagged())
            .collect()
    }
}

/// Scan `root` and resolve every documentation source beneath it.
///
/// Entries come back in path order so repeated scans of the same tree
/// produce identical reports.
pub fn scan_tree(root: &Path, rules: &RuleSet, options: &ScanOptions) -> Result<TreeReport> {
    if !root.exists() {
        return Err(NeuronTagError::ScanRootNotFound {
            path: root.to_path_buf(),
        });
    }

    let resolver = TagResolver::new(rules);
    let mut entries = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            let name = entry.file_name().to_string_lossy();
            !options.skips_dir(&name)
        });

    for entry in walker {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let matched = path
            .extension()
            .map(|ext| options.takes_extension(&ext.to_string_lossy()))
            .unwrap_or(false);
        if !matched {
            continue;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        let docname = docname_for(relative);

        entries.push(DocEntry {
            source: relative.to_path_buf(),
            resolution: resolver.resolve(&docname),
        });
    }

    Ok(TreeReport {
        root: root.to_path_buf(),
        entries,
    })
}

/// Derive the slash-separated, extension-free docname for a source path.
fn docname_for(relative: &Path) -> String {
    let stripped = relative.with_extension("");
    let segments: Vec<String> = stripped
        .components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect();
    segments.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_doc(root: &Path, rel: &str) {
        let path = root.join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, "content\n").unwrap();
    }

    #[test]
    fn scan_resolves_every_page() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "index.rst");
        write_doc(tmp.path(), "general/setup/install.rst");
        write_doc(tmp.path(), "general/arch/neuron-hardware/trn1-arch.rst");

        let report = scan_tree(tmp.path(), RuleSet::builtin(), &ScanOptions::default()).unwrap();
        assert_eq!(report.len(), 3);

        let trn1 = report
            .entries
            .iter()
            .find(|e| e.resolution.docname == "general/arch/neuron-hardware/trn1-arch")
            .unwrap();
        assert_eq!(
            trn1.resolution.platforms.iter().collect::<Vec<_>>(),
            vec![&Platform::Trn1]
        );

        let counts = report.platform_counts();
        assert_eq!(counts.get(&Platform::Inf1), Some(&1));
        assert_eq!(counts.get(&Platform::Trn1), Some(&2));
    }

    #[test]
    fn scan_reports_untagged_pages() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "index.rst");
        write_doc(tmp.path(), "general/intro.rst");

        let report = scan_tree(tmp.path(), RuleSet::builtin(), &ScanOptions::default()).unwrap();
        let untagged = report.untagged();
        assert_eq!(untagged.len(), 1);
        assert_eq!(untagged[0].resolution.docname, "index");
    }

    #[test]
    fn scan_skips_excluded_dirs_and_foreign_extensions() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "general/intro.rst");
        write_doc(tmp.path(), "_build/general/intro.rst");
        write_doc(tmp.path(), "general/diagram.png");

        let report = scan_tree(tmp.path(), RuleSet::builtin(), &ScanOptions::default()).unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(report.entries[0].resolution.docname, "general/intro");
    }

    #[test]
    fn include_overrides_exclude() {
        let tmp = TempDir::new().unwrap();
        write_doc(tmp.path(), "_build/general/intro.rst");

        let options = ScanOptions {
            included_dirs: vec!["_build".to_string()],
            ..Default::default()
        };
        let report = scan_tree(tmp.path(), RuleSet::builtin(), &options).unwrap();
        assert_eq!(report.len(), 1);
    }

    #[test]
    fn missing_root_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("no-such-dir");
        let result = scan_tree(&missing, RuleSet::builtin(), &ScanOptions::default());
        assert!(matches!(
            result,
            Err(NeuronTagError::ScanRootNotFound { .. })
        ));
    }

    #[test]
    fn docname_has_no_extension() {
        assert_eq!(
            docname_for(Path::new("general/setup/install.rst")),
            "general/setup/install"
        );
        assert_eq!(docname_for(Path::new("index.md")), "index");
    }
}
