/*!
 * Run counters and end-of-run reporting
 *
 * Uses the tabled library for the final console table.
 */

use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use crate::config::SymlinkMode;

/// Counters accumulated over one walk
///
/// Each walk gets its own summary, so multiple walks in one process
/// never interfere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Regular files whose permissions were rewritten
    pub files_changed: usize,
    /// Directories whose permissions were rewritten
    pub dirs_changed: usize,
    /// Symlinks left alone under the skip policy
    pub symlinks_skipped: usize,
    /// Symlinks resolved under the follow policy
    pub symlinks_followed: usize,
    /// Symlinks reported under the error policy
    pub symlink_errors: usize,
}

/// Format of the report output
pub enum ReportFormat {
    /// Console table output
    ConsoleTable,
}

/// Report generator for walk results
pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    /// Create a new reporter
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Generate a report string for the finished walk
    pub fn generate_report(&self, summary: &RunSummary, symlinks: SymlinkMode) -> String {
        match self.format {
            ReportFormat::ConsoleTable => self.generate_console_report(summary, symlinks),
        }
    }

    /// Print the report to stdout
    pub fn print_report(&self, summary: &RunSummary, symlinks: SymlinkMode) {
        println!("{}", self.generate_report(summary, symlinks));
    }

    // Generate a console table report
    fn generate_console_report(&self, summary: &RunSummary, symlinks: SymlinkMode) -> String {
        #[derive(Tabled)]
        struct SummaryRow {
            #[tabled(rename = "Result")]
            key: String,

            #[tabled(rename = "Count")]
            value: String,
        }

        let mut rows = vec![
            SummaryRow {
                key: "Files changed".to_string(),
                value: summary.files_changed.to_string(),
            },
            SummaryRow {
                key: "Directories changed".to_string(),
                value: summary.dirs_changed.to_string(),
            },
        ];

        // Only the counter for the active policy is reported, and only
        // when a symlink was actually encountered.
        let (label, count) = match symlinks {
            SymlinkMode::Skip => ("Symlinks skipped", summary.symlinks_skipped),
            SymlinkMode::Follow => ("Symlinks followed", summary.symlinks_followed),
            SymlinkMode::Error => ("Symlink errors found", summary.symlink_errors),
        };
        if count > 0 {
            rows.push(SummaryRow {
                key: label.to_string(),
                value: count.to_string(),
            });
        }

        let mut table = Table::new(rows);
        table
            .with(Style::rounded())
            .with(Padding::new(1, 1, 0, 0))
            .with(Modify::new(Columns::new(..)).with(Alignment::left()));

        format!("Operation completed.\n{}", table)
    }
}
