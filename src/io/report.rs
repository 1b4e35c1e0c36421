//! Human-readable output of solutions and sweep tables

use std::io::Write;

use crate::io::configuration::SOLUTION_HEADER;
use crate::tour::search::{SearchStats, Solution};
use crate::tour::sweep::{SweepEntry, SweepSummary};

/// Writes reports to any byte sink, usually stdout or an output file
pub struct ReportWriter<W: Write> {
    out: W,
    show_path: bool,
}

impl<W: Write> ReportWriter<W> {
    /// Wrap a sink; `show_path` adds the placement order after each tray
    pub const fn new(out: W, show_path: bool) -> Self {
        Self { out, show_path }
    }

    /// Header line and tray rendering of one solution
    ///
    /// # Errors
    ///
    /// Returns an error if the sink rejects the write
    pub fn write_solution(&mut self, solution: &Solution) -> std::io::Result<()> {
        writeln!(self.out, "{SOLUTION_HEADER}")?;
        write!(self.out, "{}", solution.tray())?;
        if self.show_path {
            writeln!(self.out, "path: {}", solution.path().trim_end())?;
        }
        Ok(())
    }

    /// Closing line of a solve run
    ///
    /// # Errors
    ///
    /// Returns an error if the sink rejects the write
    pub fn write_solve_summary(&mut self, stats: &SearchStats) -> std::io::Result<()> {
        writeln!(self.out, "solutions: {}", stats.solutions)
    }

    /// Column header naming the piece types of a sweep
    ///
    /// # Errors
    ///
    /// Returns an error if the sink rejects the write
    pub fn write_sweep_header(&mut self, hops: &[usize]) -> std::io::Result<()> {
        writeln!(self.out, "{}  solutions", format_counts(hops))
    }

    /// One table row for a configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the sink rejects the write
    pub fn write_sweep_entry(&mut self, entry: &SweepEntry) -> std::io::Result<()> {
        writeln!(
            self.out,
            "{}  {:>9}",
            format_counts(&entry.counts()),
            entry.solutions
        )
    }

    /// Closing line of a sweep run
    ///
    /// # Errors
    ///
    /// Returns an error if the sink rejects the write
    pub fn write_sweep_summary(&mut self, summary: &SweepSummary) -> std::io::Result<()> {
        writeln!(
            self.out,
            "{} of {} configurations have tours, {} tours in all",
            summary.viable.len(),
            summary.configurations,
            summary.total_solutions
        )
    }

    /// Flush buffered output
    ///
    /// # Errors
    ///
    /// Returns an error if the sink cannot be flushed
    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }

    /// Recover the wrapped sink
    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Render counts as a tuple with fixed-width columns, e.g. `( 1,  8,  7)`
pub fn format_counts(counts: &[usize]) -> String {
    let columns: Vec<String> = counts.iter().map(|count| format!("{count:>2}")).collect();
    format!("({})", columns.join(", "))
}
