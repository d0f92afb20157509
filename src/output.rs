//! Output rendering for check results.
//!
//! Supports `human` (default) and `json` outputs. Human output is one line
//! per event in deterministic order, with a trailing error tally only when
//! something failed; JSON output serializes the full `CheckResult`.

use crate::classify::Classifier;
use crate::models::{CheckResult, NoteKind};
use crate::rules::{PatternRule, RuleSet};
use owo_colors::OwoColorize;
use serde_json::{json, Value as JsonVal};

fn use_colors(output: &str) -> bool {
    output != "json" && std::env::var_os("NO_COLOR").is_none()
}

/// Print check results in the requested format.
pub fn print_check(res: &CheckResult, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_check_json(res)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            // Violations and notes are each sorted by file, and a noted file
            // never has violations; merging the two streams keeps every
            // event grouped with its file.
            let mut violations = res.violations.iter().peekable();
            let mut notes = res.notes.iter().peekable();
            loop {
                let note_first = match (violations.peek(), notes.peek()) {
                    (Some(v), Some(n)) => n.file <= v.file,
                    (None, Some(_)) => true,
                    (Some(_), None) => false,
                    (None, None) => break,
                };
                if note_first {
                    if let Some(n) = notes.next() {
                        match n.kind {
                            NoteKind::Unreadable => println!("Failed to open file {}", n.file),
                            NoteKind::Empty => println!("Empty file: {}", n.file),
                        }
                    }
                } else if let Some(v) = violations.next() {
                    if color {
                        println!("{}:{} {}", v.file.bold(), v.line, v.label.red());
                    } else {
                        println!("{}:{} {}", v.file, v.line, v.label);
                    }
                }
            }
            if res.summary.errors > 0 {
                let tally = format!("{} errors detected", res.summary.errors);
                if color {
                    println!("{}", tally.red().bold());
                } else {
                    println!("{}", tally);
                }
            }
        }
    }
}

/// Print the effective rule tables and ignore list.
pub fn print_rules(rules: &RuleSet, classifier: &Classifier, output: &str) {
    match output {
        "json" => println!(
            "{}",
            serde_json::to_string_pretty(&compose_rules_json(rules, classifier)).unwrap()
        ),
        _ => {
            let color = use_colors(output);
            let heading = |text: &str| {
                if color {
                    println!("{}", text.bold());
                } else {
                    println!("{}", text);
                }
            };
            heading("Common rules:");
            for rule in &rules.common {
                println!("  {}  {}", rule.label(), rule.pattern());
            }
            heading("Source-only rules:");
            for rule in &rules.source_only {
                println!("  {}  {}", rule.label(), rule.pattern());
            }
            heading("Ignored paths:");
            for pattern in classifier.ignore_patterns() {
                println!("  {pattern}");
            }
            heading("Source extensions:");
            println!("  {}", classifier.source_extensions().join(" "));
        }
    }
}

/// Compose check JSON (pure) for testing/snapshot purposes.
pub fn compose_check_json(res: &CheckResult) -> JsonVal {
    // Directly serialize CheckResult as JSON, keeping stable shape
    serde_json::to_value(res).unwrap()
}

/// Compose rules JSON (pure) for testing/snapshot purposes.
pub fn compose_rules_json(rules: &RuleSet, classifier: &Classifier) -> JsonVal {
    let tier = |rules: &[PatternRule]| {
        rules
            .iter()
            .map(|r| json!({"label": r.label(), "pattern": r.pattern()}))
            .collect::<Vec<_>>()
    };
    json!({
        "common": tier(&rules.common),
        "source": tier(&rules.source_only),
        "ignore": classifier
            .ignore_patterns()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>(),
        "source_extensions": classifier.source_extensions(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FileNote, Summary, Violation};

    #[test]
    fn test_compose_check_json_shape() {
        let res = CheckResult {
            violations: vec![Violation {
                file: "src/a.cpp".into(),
                line: 3,
                label: "Tab(s)".into(),
            }],
            notes: vec![FileNote {
                file: "src/empty.cpp".into(),
                kind: NoteKind::Empty,
            }],
            summary: Summary {
                errors: 1,
                files: 2,
                skipped: 0,
                unreadable: 0,
                empty: 1,
            },
        };
        let out = compose_check_json(&res);
        assert_eq!(out["summary"]["errors"], 1);
        assert_eq!(out["violations"][0]["line"], 3);
        assert_eq!(out["violations"][0]["label"], "Tab(s)");
        assert_eq!(out["notes"][0]["kind"], "empty");
    }

    #[test]
    fn test_compose_rules_json_shape() {
        let rules = RuleSet::builtin().unwrap();
        let classifier = Classifier::new(&[], None).unwrap();
        let out = compose_rules_json(&rules, &classifier);
        assert_eq!(out["common"].as_array().map(Vec::len), Some(2));
        assert_eq!(out["source"].as_array().map(Vec::len), Some(9));
        assert_eq!(out["common"][0]["label"], "Trailing whitespace");
        assert!(out["source_extensions"]
            .as_array()
            .is_some_and(|a| a.iter().any(|v| v == "cpp")));
    }
}
