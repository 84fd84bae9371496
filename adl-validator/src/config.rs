//! Configuration for batch validation of ADL files on disk.
//!
//! The core engine (`validate`) takes no configuration: every heuristic is
//! fixed. Only the filesystem source has knobs, and they all bound how much
//! input is discovered and read.

use std::path::PathBuf;

/// File extensions validated by default.
pub const DEFAULT_EXTENSIONS: &[&str] = &["adl", "md", "txt", "json", "yaml", "yml"];

/// Filesystem-specific source options.
///
/// NOTE: `paths` is required and must be non-empty. Default scan roots are a
/// CLI concern, not baked into the library.
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct FsSourceConfig {
    /// Paths to scan (files or directories). Required, must be non-empty.
    pub paths: Vec<PathBuf>,
    /// Exclude patterns (glob format), matched against the full path and the file name.
    pub exclude: Vec<String>,
    /// Extensions (without the dot, case-insensitive) picked up when walking directories.
    /// Files named explicitly in `paths` are validated whatever their extension.
    pub extensions: Vec<String>,
    /// Maximum file size in bytes (default: 10 MB).
    pub max_file_size: u64,
    /// Whether to follow symbolic links.
    ///
    /// **Defaults to `false`**: following symlinks allows escaping the scan
    /// root. Only enable if you trust every symlink under the given paths.
    pub follow_links: bool,
    /// Maximum directory traversal depth (default: 64).
    pub max_depth: usize,
    /// Maximum total number of files to validate (default: `100_000`).
    pub max_files: usize,
    /// Maximum total bytes to read across all files (default: 512 MB).
    pub max_total_bytes: u64,
}

impl Default for FsSourceConfig {
    fn default() -> Self {
        Self {
            paths: Vec::new(),
            exclude: Vec::new(),
            extensions: DEFAULT_EXTENSIONS.iter().map(|&ext| ext.to_owned()).collect(),
            max_file_size: 10_485_760,
            follow_links: false,
            max_depth: 64,
            max_files: 100_000,
            max_total_bytes: 536_870_912,
        }
    }
}

impl FsSourceConfig {
    /// Default configuration scanning `paths`.
    #[must_use]
    pub fn for_paths(paths: Vec<PathBuf>) -> Self {
        Self {
            paths,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = FsSourceConfig::default();
        assert!(cfg.paths.is_empty());
        assert!(!cfg.follow_links);
        assert_eq!(cfg.max_file_size, 10 * 1024 * 1024);
        assert!(cfg.extensions.iter().any(|ext| ext == "adl"));
    }

    #[test]
    fn test_for_paths_keeps_defaults() {
        let cfg = FsSourceConfig::for_paths(vec![PathBuf::from("agents")]);
        assert_eq!(cfg.paths, vec![PathBuf::from("agents")]);
        assert_eq!(cfg.max_depth, 64);
    }
}
