//! File linter and recursive scan driver.
//!
//! `lint_file` is a stateless pipeline for one file: classification decides
//! which rule tiers apply, each selected rule runs against the raw bytes, and
//! every match becomes a `Violation` with its line number computed from the
//! match offset. `run_check` walks the tree and folds per-file results into a
//! single `CheckResult`.

use crate::classify::{Classification, Classifier};
use crate::lines::line_number;
use crate::models::{CheckResult, FileNote, NoteKind, Summary, Violation};
use crate::rules::{PatternRule, RuleSet};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lint one file's contents. Empty contents yield no violations; an ignored
/// classification yields none either (the driver normally filters those out
/// before reading).
pub fn lint_file(
    file: &str,
    contents: &[u8],
    rules: &RuleSet,
    class: Classification,
) -> Vec<Violation> {
    if class.ignored || contents.is_empty() {
        return Vec::new();
    }
    let mut violations = Vec::new();
    for rule in &rules.common {
        collect_matches(rule, file, contents, &mut violations);
    }
    if class.is_source {
        for rule in &rules.source_only {
            collect_matches(rule, file, contents, &mut violations);
        }
    }
    violations
}

fn collect_matches(rule: &PatternRule, file: &str, contents: &[u8], out: &mut Vec<Violation>) {
    for offset in rule.apply(contents) {
        out.push(Violation {
            file: file.to_string(),
            line: line_number(contents, offset),
            label: rule.label().to_string(),
        });
    }
}

struct FileReport {
    file: String,
    violations: Vec<Violation>,
    note: Option<NoteKind>,
    skipped: bool,
}

/// Scan every regular file under `root` and aggregate the results.
///
/// Files are linted in parallel; rule set and classifier are shared
/// read-only. The scan always completes: an unreadable file is noted and
/// contributes zero violations, and the total is a plain sum of per-file
/// counts, so completion order cannot change it.
pub fn run_check(root: &Path, rules: &RuleSet, classifier: &Classifier) -> CheckResult {
    let files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .collect();

    let mut reports: Vec<FileReport> = files
        .par_iter()
        .map(|path| check_one(root, path, rules, classifier))
        .collect();
    // Deterministic output regardless of walk or completion order
    reports.sort_by(|a, b| a.file.cmp(&b.file));

    let mut result = CheckResult {
        violations: Vec::new(),
        notes: Vec::new(),
        summary: Summary::default(),
    };
    for report in reports {
        if report.skipped {
            result.summary.skipped += 1;
            continue;
        }
        result.summary.files += 1;
        match report.note {
            Some(kind) => {
                match kind {
                    NoteKind::Unreadable => result.summary.unreadable += 1,
                    NoteKind::Empty => result.summary.empty += 1,
                }
                result.notes.push(FileNote {
                    file: report.file,
                    kind,
                });
            }
            None => {
                result.summary.errors += report.violations.len();
                result.violations.extend(report.violations);
            }
        }
    }
    result
}

fn check_one(root: &Path, path: &Path, rules: &RuleSet, classifier: &Classifier) -> FileReport {
    let rel = pathdiff::diff_paths(path, root).unwrap_or_else(|| path.to_path_buf());
    let file = rel.to_string_lossy().to_string();
    let class = classifier.classify(&rel);
    if class.ignored {
        return FileReport {
            file,
            violations: Vec::new(),
            note: None,
            skipped: true,
        };
    }
    match fs::read(path) {
        Err(_) => FileReport {
            file,
            violations: Vec::new(),
            note: Some(NoteKind::Unreadable),
            skipped: false,
        },
        Ok(contents) if contents.is_empty() => FileReport {
            file,
            violations: Vec::new(),
            note: Some(NoteKind::Empty),
            skipped: false,
        },
        Ok(contents) => {
            let violations = lint_file(&file, &contents, rules, class);
            FileReport {
                file,
                violations,
                note: None,
                skipped: false,
            }
        }
    }
}
