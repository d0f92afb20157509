//! Pattern rules and the two-tier rule set.
//!
//! A rule is a regular expression matched against a file's raw bytes plus a
//! human-readable label. Rules are deliberately textual, not syntactic: they
//! flag style patterns across C-family dialects without a tokenizer, at the
//! cost of the occasional false positive inside a string literal. Rules live
//! in two tiers — `common` runs on every scanned file, `source_only` runs
//! only on files classified as source code.

use crate::config::RuleCfg;
use crate::error::ConfigError;
use regex::bytes::{Regex, RegexBuilder};

/// Built-in rules applied to every scanned file.
const COMMON_RULES: &[(&str, &str, Option<usize>)] = &[
    (r"[ \t]\n", "Trailing whitespace", None),
    (r"\t", "Tab(s)", None),
];

/// Built-in rules applied only to source/header files.
///
/// Keyword rules anchor on `^` or a non-word byte so a keyword at the very
/// start of a file is still caught. The designated group pins the report to
/// the offending token rather than the byte in front of it.
const SOURCE_RULES: &[(&str, &str, Option<usize>)] = &[
    (
        r"(?:^|\n)[ \t]*(/\*.*\*/)\n",
        "C-style comment",
        Some(1),
    ),
    (
        r"(?:^|[^_0-9A-Za-z])(if|while|switch|do)\(",
        "Missing space before parenthesis",
        Some(1),
    ),
    (
        r"(?:^|[^_0-9A-Za-z])(if|while|switch|do) \(.*\)\{",
        "Missing space before opening bracket",
        Some(1),
    ),
    (
        r"(?:^|[^_0-9A-Za-z])(if|while|switch|do) \( ",
        "Extraneous space after parenthesis",
        Some(1),
    ),
    (
        r"[_0-9A-Za-z](=| =|= )[_0-9A-Za-z]",
        "Missing space around assignment",
        Some(1),
    ),
    (r",[^ \n]", "Missing space after comma", None),
    (
        r"(?:^|[^_0-9A-Za-z])(const [_0-9A-Za-z]+ [&*])",
        "Extraneous space before reference/pointer specifier",
        Some(1),
    ),
    (
        r"(?:^|[^_0-9A-Za-z])(operator[^_ 0-9A-Za-z]+\()",
        "Missing space after operator keyword",
        Some(1),
    ),
    (
        r"== true|true ==|== false|false ==|== NULL|!= NULL|NULL ==|NULL !=",
        "Unnecessary comparison",
        None,
    ),
];

/// A compiled pattern with its report label.
///
/// Immutable once built; shared read-only across all file checks. `group`
/// names the capture group whose start pins the reported position; without
/// one the whole-match start is used.
pub struct PatternRule {
    label: String,
    pattern: String,
    group: Option<usize>,
    regex: Regex,
}

impl PatternRule {
    /// Compile a rule, validating the designated capture group.
    pub fn new(pattern: &str, label: &str, group: Option<usize>) -> Result<Self, ConfigError> {
        // Unicode mode off: rules see raw bytes, so negated classes match
        // arbitrary non-UTF-8 bytes and offsets stay byte offsets.
        let regex = RegexBuilder::new(pattern)
            .unicode(false)
            .build()
            .map_err(|e| ConfigError::Pattern {
                label: label.to_string(),
                source: Box::new(e),
            })?;
        if let Some(g) = group {
            if g == 0 || g >= regex.captures_len() {
                return Err(ConfigError::Group {
                    label: label.to_string(),
                    group: g,
                });
            }
        }
        Ok(Self {
            label: label.to_string(),
            pattern: pattern.to_string(),
            group,
            regex,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Byte offsets of non-overlapping matches, left to right.
    ///
    /// Each offset is the start of the designated capture group when it
    /// participated in the match, else the start of the whole match. Empty
    /// matches advance at least one position, so the sequence is finite.
    pub fn apply<'t>(&'t self, text: &'t [u8]) -> impl Iterator<Item = usize> + 't {
        self.regex.captures_iter(text).map(move |caps| {
            let whole = caps.get(0).map_or(0, |m| m.start());
            match self.group.and_then(|g| caps.get(g)) {
                Some(m) => m.start(),
                None => whole,
            }
        })
    }
}

/// The two ordered rule tiers. Either tier may be empty.
pub struct RuleSet {
    pub common: Vec<PatternRule>,
    pub source_only: Vec<PatternRule>,
}

impl RuleSet {
    /// Compile the built-in tables.
    pub fn builtin() -> Result<Self, ConfigError> {
        Ok(Self {
            common: compile_table(COMMON_RULES)?,
            source_only: compile_table(SOURCE_RULES)?,
        })
    }

    /// Built-in tables plus user rules appended per tier, in config order.
    pub fn with_config(
        extra_common: &[RuleCfg],
        extra_source: &[RuleCfg],
    ) -> Result<Self, ConfigError> {
        let mut set = Self::builtin()?;
        for cfg in extra_common {
            set.common
                .push(PatternRule::new(&cfg.pattern, &cfg.label, cfg.group)?);
        }
        for cfg in extra_source {
            set.source_only
                .push(PatternRule::new(&cfg.pattern, &cfg.label, cfg.group)?);
        }
        Ok(set)
    }
}

fn compile_table(table: &[(&str, &str, Option<usize>)]) -> Result<Vec<PatternRule>, ConfigError> {
    table
        .iter()
        .map(|(pattern, label, group)| PatternRule::new(pattern, label, *group))
        .collect()
}
