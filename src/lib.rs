//! stylecheck core library.
//!
//! This crate exposes programmatic APIs for scanning a source tree and
//! reporting style violations found by pattern rules over raw file bytes.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Discovery and effective configuration resolution.
//! - `classify`: Ignore rules and source/non-source detection.
//! - `rules`: Pattern rules, built-in tables, and tier construction.
//! - `lines`: Byte offset to 1-based line number conversion.
//! - `lint`: Per-file linting and the recursive scan driver.
//! - `models`: Data models for check output.
//! - `output`: Human/JSON printers for check and rules.
//! - `error`: Fatal configuration errors.
//! - `utils`: Supporting helpers.
pub mod classify;
pub mod cli;
pub mod config;
pub mod error;
pub mod lines;
pub mod lint;
pub mod models;
pub mod output;
pub mod rules;
pub mod utils;
