//! stylecheck CLI binary entry point.
//! Resolves configuration, compiles the rule tables, runs the requested
//! command, and maps results to exit codes.

use clap::Parser;
use stylecheck::classify::Classifier;
use stylecheck::cli::{Cli, Commands};
use stylecheck::config::{self, Effective};
use stylecheck::error::ConfigError;
use stylecheck::rules::RuleSet;
use stylecheck::{lint, output, utils};

fn main() {
    let cli = Cli::parse();
    // Bare invocation scans the current working directory
    let cmd = cli.cmd.unwrap_or(Commands::Check {
        root: None,
        output: None,
    });
    match cmd {
        Commands::Version => {
            println!("{}", env!("CARGO_PKG_VERSION"));
        }
        Commands::Check { root, output } => {
            let (eff, rules, classifier) = setup(root.as_deref(), output.as_deref());
            let result = lint::run_check(&eff.root, &rules, &classifier);
            output::print_check(&result, &eff.output);
            if result.summary.errors > 0 {
                std::process::exit(1);
            }
        }
        Commands::Rules { root, output } => {
            let (eff, rules, classifier) = setup(root.as_deref(), output.as_deref());
            output::print_rules(&rules, &classifier, &eff.output);
        }
    }
}

/// Resolve configuration and compile the rule tables. Any configuration
/// error is fatal before scanning starts.
fn setup(root: Option<&str>, output: Option<&str>) -> (Effective, RuleSet, Classifier) {
    let eff = config::resolve_effective(root, output).unwrap_or_else(|e| fail(&e));
    let rules =
        RuleSet::with_config(&eff.extra_common, &eff.extra_source).unwrap_or_else(|e| fail(&e));
    let classifier = Classifier::new(&eff.extra_ignore, eff.source_extensions.as_deref())
        .unwrap_or_else(|e| fail(&e));
    (eff, rules, classifier)
}

fn fail(err: &ConfigError) -> ! {
    eprintln!("{} {}", utils::error_prefix(), err);
    std::process::exit(2);
}
