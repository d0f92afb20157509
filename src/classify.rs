//! Path classification: ignore rules and source detection.
//!
//! Classification is pure data for the linter to consume — a path is either
//! excluded from scanning entirely (`ignored`) or it is scanned, optionally
//! with the source-only rule tier enabled (`is_source`). Ignore predicates
//! are evaluated in order with first match winning; since every match means
//! "skip", order affects diagnostic cost only, not the outcome.

use crate::error::ConfigError;
use glob::Pattern;
use std::fmt;
use std::path::Path;

/// Extensions that enable the source-only rule tier.
pub const SOURCE_EXTENSIONS: &[&str] = &["c", "cpp", "h", "hpp", "inl", "m", "mm", "frag", "vert"];

/// Vendored third-party code and version-control metadata.
const IGNORED_DIRS: &[&str] = &["extlibs", ".git"];

/// Binary resource files that would only produce noise.
const IGNORED_EXTENSIONS: &[&str] = &[
    "ogg", "wav", "flac", "ttf", "png", "jpg", "icns", "rtf", "plist", "xib",
];

/// IDE template bundles (the marker appears anywhere in the path).
const IGNORED_SUBSTRINGS: &[&str] = &[".xctemplate"];

/// Plain-text documentation, matched case-sensitively by exact file name.
const IGNORED_FILENAMES: &[&str] = &["license.txt", "changelog.txt", "readme.txt"];

/// Outcome of classifying one path. `ignored` always wins: an ignored path
/// is never `is_source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification {
    pub ignored: bool,
    pub is_source: bool,
}

/// A single path-matching predicate from the ignore list.
pub enum IgnorePattern {
    /// Any path component equals the name.
    Directory(String),
    /// File extension equals (without the dot).
    Extension(String),
    /// Exact, case-sensitive file name.
    FileName(String),
    /// Raw substring of the path.
    Substring(String),
    /// User-configured glob against the relative path.
    Glob(Pattern),
}

impl IgnorePattern {
    fn matches(&self, path: &Path) -> bool {
        match self {
            Self::Directory(name) => path.components().any(|c| c.as_os_str() == name.as_str()),
            Self::Extension(ext) => path.extension().is_some_and(|e| e == ext.as_str()),
            Self::FileName(name) => path.file_name().is_some_and(|n| n == name.as_str()),
            Self::Substring(text) => path.to_string_lossy().contains(text.as_str()),
            Self::Glob(pattern) => pattern.matches_path(path),
        }
    }
}

impl fmt::Display for IgnorePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Directory(name) => write!(f, "directory {name}"),
            Self::Extension(ext) => write!(f, "extension .{ext}"),
            Self::FileName(name) => write!(f, "file name {name}"),
            Self::Substring(text) => write!(f, "path containing {text}"),
            Self::Glob(pattern) => write!(f, "glob {}", pattern.as_str()),
        }
    }
}

/// Process-wide immutable classification tables, built once at startup and
/// shared read-only across every file check.
pub struct Classifier {
    ignores: Vec<IgnorePattern>,
    source_exts: Vec<String>,
}

impl Classifier {
    /// Built-in tables plus user ignore globs; a config-supplied extension
    /// set replaces the default one.
    pub fn new(
        extra_ignore: &[String],
        source_exts: Option<&[String]>,
    ) -> Result<Self, ConfigError> {
        let mut ignores = Vec::new();
        for name in IGNORED_DIRS {
            ignores.push(IgnorePattern::Directory((*name).to_string()));
        }
        for ext in IGNORED_EXTENSIONS {
            ignores.push(IgnorePattern::Extension((*ext).to_string()));
        }
        for text in IGNORED_SUBSTRINGS {
            ignores.push(IgnorePattern::Substring((*text).to_string()));
        }
        for name in IGNORED_FILENAMES {
            ignores.push(IgnorePattern::FileName((*name).to_string()));
        }
        for raw in extra_ignore {
            let pattern = Pattern::new(raw).map_err(|e| ConfigError::IgnoreGlob {
                pattern: raw.clone(),
                source: e,
            })?;
            ignores.push(IgnorePattern::Glob(pattern));
        }
        let source_exts = match source_exts {
            Some(exts) => exts.to_vec(),
            None => SOURCE_EXTENSIONS.iter().map(|s| (*s).to_string()).collect(),
        };
        Ok(Self {
            ignores,
            source_exts,
        })
    }

    /// Classify a path relative to the scan root. Ignore rules short-circuit
    /// before the extension check.
    pub fn classify(&self, path: &Path) -> Classification {
        if self.ignores.iter().any(|p| p.matches(path)) {
            return Classification {
                ignored: true,
                is_source: false,
            };
        }
        let is_source = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.source_exts.iter().any(|s| s == ext));
        Classification {
            ignored: false,
            is_source,
        }
    }

    pub fn ignore_patterns(&self) -> &[IgnorePattern] {
        &self.ignores
    }

    pub fn source_extensions(&self) -> &[String] {
        &self.source_exts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn classifier() -> Classifier {
        Classifier::new(&[], None).unwrap()
    }

    fn classify(c: &Classifier, path: &str) -> Classification {
        c.classify(&PathBuf::from(path))
    }

    #[test]
    fn test_extlibs_is_ignored_anywhere() {
        let c = classifier();
        assert!(classify(&c, "extlibs/zlib/inflate.c").ignored);
        assert!(classify(&c, "src/extlibs/zlib/inflate.c").ignored);
        assert!(!classify(&c, "src/extras/inflate.c").ignored);
    }

    #[test]
    fn test_git_metadata_is_ignored() {
        let c = classifier();
        assert!(classify(&c, ".git/config").ignored);
        assert!(classify(&c, "sub/.git/HEAD").ignored);
    }

    #[test]
    fn test_binary_resources_are_ignored() {
        let c = classifier();
        assert!(classify(&c, "assets/icon.png").ignored);
        assert!(classify(&c, "sounds/theme.ogg").ignored);
        assert!(!classify(&c, "assets/icon.svg").ignored);
    }

    #[test]
    fn test_xctemplate_marker_anywhere() {
        let c = classifier();
        assert!(classify(&c, "templates/App.xctemplate/main.cpp").ignored);
    }

    #[test]
    fn test_doc_filenames_exact_and_case_sensitive() {
        let c = classifier();
        assert!(classify(&c, "license.txt").ignored);
        assert!(classify(&c, "docs/changelog.txt").ignored);
        assert!(!classify(&c, "README.txt").ignored);
        assert!(!classify(&c, "license.txt.bak").ignored);
    }

    #[test]
    fn test_ignored_takes_precedence_over_source() {
        let c = classifier();
        let cls = classify(&c, "extlibs/foo.cpp");
        assert!(cls.ignored);
        assert!(!cls.is_source);
    }

    #[test]
    fn test_source_extension_set() {
        let c = classifier();
        assert!(classify(&c, "src/window.cpp").is_source);
        assert!(classify(&c, "include/window.hpp").is_source);
        assert!(classify(&c, "shaders/blur.frag").is_source);
        assert!(!classify(&c, "notes.txt").is_source);
    }

    #[test]
    fn test_no_extension_is_never_source() {
        let c = classifier();
        assert!(!classify(&c, "Makefile").is_source);
        assert!(!classify(&c, "bin/tool").is_source);
    }

    #[test]
    fn test_config_globs_extend_ignores() {
        let c = Classifier::new(&["target/**".to_string(), "*.generated.cpp".to_string()], None)
            .unwrap();
        assert!(classify(&c, "target/debug/build.rs").ignored);
        assert!(classify(&c, "gl_loader.generated.cpp").ignored);
        assert!(!classify(&c, "src/main.cpp").ignored);
    }

    #[test]
    fn test_bad_glob_is_an_error() {
        let err = Classifier::new(&["[".to_string()], None);
        assert!(matches!(err, Err(ConfigError::IgnoreGlob { .. })));
    }

    #[test]
    fn test_config_extension_set_replaces_default() {
        let c = Classifier::new(&[], Some(&["rs".to_string()])).unwrap();
        assert!(classify(&c, "src/main.rs").is_source);
        assert!(!classify(&c, "src/main.cpp").is_source);
    }
}
