//! Shared data models for check output.

use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
/// A single reported match: file, 1-based line, rule label.
pub struct Violation {
    pub file: String,
    pub line: usize,
    pub label: String,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
/// Why a scanned file produced no violations worth counting.
pub enum NoteKind {
    Unreadable,
    Empty,
}

#[derive(Serialize, Debug, Clone)]
/// Per-file diagnostic emitted for operator awareness; contributes zero to
/// the error count.
pub struct FileNote {
    pub file: String,
    pub kind: NoteKind,
}

#[derive(Serialize, Debug, Clone, Copy, Default)]
/// Aggregated scan summary used by printers and the exit code.
pub struct Summary {
    pub errors: usize,
    pub files: usize,
    pub skipped: usize,
    pub unreadable: usize,
    pub empty: usize,
}

#[derive(Serialize, Debug)]
/// Check results container: violations and notes are both sorted by file.
pub struct CheckResult {
    pub violations: Vec<Violation>,
    pub notes: Vec<FileNote>,
    pub summary: Summary,
}
