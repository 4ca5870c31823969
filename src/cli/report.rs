//! Report formatting and printing utilities.
//!
//! Separate from core logic so lingo can be used as a library without
//! dragging terminal output along.

use std::io::{self, Write};

use colored::Colorize;

use crate::catalog::TranslationKind;
use crate::loader::LoadStats;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// Print a success line to stdout.
pub fn success(message: &str) {
    println!("{} {}", SUCCESS_MARK.green(), message);
}

/// Per-language coverage row for the check report.
#[derive(Debug, Clone)]
pub struct LanguageCoverage {
    pub language: String,
    pub item_count: usize,
    pub lore_count: usize,
    pub message_count: usize,
    /// Content ids present in the default language but absent here.
    pub missing: Vec<(TranslationKind, String)>,
}

/// Everything the check command found.
#[derive(Debug, Clone)]
pub struct CheckReport {
    pub default_language: String,
    pub stats: LoadStats,
    pub coverage: Vec<LanguageCoverage>,
}

impl CheckReport {
    /// Total number of problems: skipped files plus missing keys.
    pub fn finding_count(&self) -> usize {
        self.stats.files_skipped.len() + self.coverage.iter().map(|c| c.missing.len()).sum::<usize>()
    }
}

/// Print the check report to stdout.
pub fn print_check(report: &CheckReport, verbose: bool) {
    print_check_to(report, verbose, &mut io::stdout().lock());
}

/// Print the check report to a custom writer. Useful for testing.
pub fn print_check_to<W: Write>(report: &CheckReport, verbose: bool, writer: &mut W) {
    let _ = writeln!(
        writer,
        "Loaded {} document(s) across {} language(s), default language \"{}\"",
        report.stats.files_loaded,
        report.stats.languages.len(),
        report.default_language
    );

    for cov in &report.coverage {
        let _ = writeln!(
            writer,
            "  {}: {} item(s), {} lore, {} message(s)",
            cov.language.bold(),
            cov.item_count,
            cov.lore_count,
            cov.message_count
        );
        if !cov.missing.is_empty() {
            let _ = writeln!(
                writer,
                "    {} {} key(s) missing relative to \"{}\"",
                "warning:".yellow().bold(),
                cov.missing.len(),
                report.default_language
            );
            if verbose {
                for (kind, id) in &cov.missing {
                    let _ = writeln!(writer, "      missing {kind}: {id}");
                }
            }
        }
    }

    for (path, reason) in &report.stats.files_skipped {
        let _ = writeln!(
            writer,
            "  {} skipped {}: {}",
            "warning:".yellow().bold(),
            path.display(),
            reason
        );
    }

    let findings = report.finding_count();
    if findings == 0 {
        let _ = writeln!(writer, "{} no problems found", SUCCESS_MARK.green());
    } else {
        let _ = writeln!(writer, "{} {} problem(s) found", FAILURE_MARK.red(), findings);
    }
}
