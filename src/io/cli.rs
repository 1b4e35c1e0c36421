//! Command-line interface for solving one supply or sweeping all of them

use crate::io::configuration::{DEFAULT_START, DEFAULT_TRAY_SIZE};
use crate::io::error::{Result, TourError, WithPath};
use crate::io::progress::ProgressManager;
use crate::io::report::ReportWriter;
use crate::tour::piece::Cell;
use crate::tour::search::{SearchStats, TourConfig, TourSearch};
use crate::tour::supply::Supply;
use crate::tour::sweep::{Sweep, SweepSummary};
use crate::tour::verify::verify_tour;
use clap::{Args, Parser, Subcommand};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::ops::ControlFlow;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "pyramid-tour")]
#[command(
    author,
    version,
    about = "Enumerate closed tours of hop pieces on a square tray"
)]
/// Command-line arguments for the tour enumerator
pub struct Cli {
    /// What to run; solves the standard puzzle when omitted
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Suppress progress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Write results to FILE instead of stdout
    #[arg(short, long, global = true, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Run modes
#[derive(Subcommand)]
pub enum Command {
    /// Print every tour for one piece supply
    Solve(SolveArgs),
    /// Count tours for every supply configuration of a set of piece types
    Sweep(SweepArgs),
}

/// Options of the `solve` mode
#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct SolveArgs {
    /// Tray edge length
    #[arg(short, long, default_value_t = DEFAULT_TRAY_SIZE)]
    pub size: usize,

    /// Start cell as X,Y (origin bottom left)
    #[arg(long, default_value = "0,0", value_parser = parse_cell)]
    pub start: Cell,

    /// Pieces available as hop:count pairs
    #[arg(long, default_value_t = Supply::standard())]
    pub supply: Supply,

    /// Print the placement order after each tray
    #[arg(short, long)]
    pub path: bool,

    /// Only print the number of tours
    #[arg(short, long)]
    pub count_only: bool,

    /// Re-check every tour by walking its piece pointers
    #[arg(long)]
    pub verify: bool,
}

impl Default for SolveArgs {
    fn default() -> Self {
        Self {
            size: DEFAULT_TRAY_SIZE,
            start: DEFAULT_START,
            supply: Supply::standard(),
            path: false,
            count_only: false,
            verify: false,
        }
    }
}

/// Options of the `sweep` mode
#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct SweepArgs {
    /// Tray edge length
    #[arg(short, long, default_value_t = DEFAULT_TRAY_SIZE)]
    pub size: usize,

    /// Start cell as X,Y (origin bottom left)
    #[arg(long, default_value = "0,0", value_parser = parse_cell)]
    pub start: Cell,

    /// Piece types (hop distances) to distribute
    #[arg(short, long, value_delimiter = ',', default_value = "1,2,3")]
    pub types: Vec<usize>,
}

/// Parse a cell written as `X,Y`
///
/// # Errors
///
/// Returns a message if the text is not two comma-separated integers
pub fn parse_cell(text: &str) -> std::result::Result<Cell, String> {
    let (x, y) = text
        .split_once(',')
        .ok_or_else(|| format!("'{text}' is not X,Y"))?;
    let x = x
        .trim()
        .parse::<usize>()
        .map_err(|err| format!("bad x in '{text}': {err}"))?;
    let y = y
        .trim()
        .parse::<usize>()
        .map_err(|err| format!("bad y in '{text}': {err}"))?;
    Ok([x, y])
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates a run: builds the search, streams the report, drives progress
pub struct TourRunner {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl TourRunner {
    /// Create a runner for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Progress display, absent when running quietly
    pub const fn progress_manager(&self) -> Option<&ProgressManager> {
        self.progress_manager.as_ref()
    }

    /// Run the selected mode, writing to stdout or the output file
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, the output cannot
    /// be written, or a verified tour turns out defective
    pub fn run(&mut self) -> Result<()> {
        let sink = self.sink_label();
        let out: Box<dyn Write> = match self.cli.output {
            Some(ref path) => {
                let file = File::create(path).with_path(path, "create")?;
                Box::new(BufWriter::new(file))
            }
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        };
        let mut report = ReportWriter::new(out, self.solve_args().path);

        let sweep_args = match self.cli.command {
            Some(Command::Sweep(ref args)) => Some(args.clone()),
            _ => None,
        };
        if let Some(args) = sweep_args {
            self.sweep(&args, &mut report)?;
        } else {
            let args = self.solve_args();
            self.solve(&args, &mut report)?;
        }

        report.flush().with_path(&sink, "flush")
    }

    /// Enumerate and report every tour for one supply
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, a write fails, or
    /// `--verify` finds a defective tour
    pub fn solve<W: Write>(
        &mut self,
        args: &SolveArgs,
        report: &mut ReportWriter<W>,
    ) -> Result<SearchStats> {
        let config = TourConfig::new(args.size, args.start, args.supply.clone())?;
        self.warn_if_short(&config);

        let sink = self.sink_label();
        let search = TourSearch::new(config);
        let mut failure: Option<TourError> = None;
        let mut index = 0;

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_solve();
        }

        let stats = search.run(|solution| {
            index += 1;
            if let Some(ref mut pm) = self.progress_manager {
                pm.record_solution();
            }
            let verified = if args.verify {
                verify_tour(search.config(), solution)
            } else {
                Ok(())
            };
            if let Err(defect) = verified {
                failure = Some(TourError::DefectiveTour { index, defect });
                return ControlFlow::Break(());
            }
            let written = if args.count_only {
                Ok(())
            } else {
                report.write_solution(solution)
            };
            match written.with_path(&sink, "write") {
                Ok(()) => ControlFlow::Continue(()),
                Err(err) => {
                    failure = Some(err);
                    ControlFlow::Break(())
                }
            }
        });

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }
        if let Some(err) = failure {
            return Err(err);
        }

        report.write_solve_summary(&stats).with_path(&sink, "write")?;
        Ok(stats)
    }

    /// Search every supply configuration and report the viable ones
    ///
    /// # Errors
    ///
    /// Returns an error if the sweep parameters are invalid or a write fails
    pub fn sweep<W: Write>(
        &mut self,
        args: &SweepArgs,
        report: &mut ReportWriter<W>,
    ) -> Result<SweepSummary> {
        let sweep = Sweep::new(args.size, args.start, &args.types)?;
        let sink = self.sink_label();

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_sweep(sweep.configuration_count());
        }

        report
            .write_sweep_header(&sweep.hops())
            .with_path(&sink, "write")?;

        let mut failure: Option<TourError> = None;
        let summary = sweep.run(|entry| {
            if let Some(ref mut pm) = self.progress_manager {
                pm.record_configuration(entry);
            }
            if entry.solutions == 0 {
                return ControlFlow::Continue(());
            }
            match report.write_sweep_entry(entry).with_path(&sink, "write") {
                Ok(()) => ControlFlow::Continue(()),
                Err(err) => {
                    failure = Some(err);
                    ControlFlow::Break(())
                }
            }
        });

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }
        let summary = summary?;
        if let Some(err) = failure {
            return Err(err);
        }

        report
            .write_sweep_summary(&summary)
            .with_path(&sink, "write")?;
        Ok(summary)
    }

    fn solve_args(&self) -> SolveArgs {
        match self.cli.command {
            Some(Command::Solve(ref args)) => args.clone(),
            _ => SolveArgs::default(),
        }
    }

    fn sink_label(&self) -> PathBuf {
        self.cli
            .output
            .clone()
            .unwrap_or_else(|| Path::new("<stdout>").to_path_buf())
    }

    // Allow print for user feedback about supplies that cannot fill the tray
    #[allow(clippy::print_stderr)]
    fn warn_if_short(&self, config: &TourConfig) {
        let pieces = config.supply().total();
        if pieces < config.area() && !self.cli.quiet {
            eprintln!(
                "Supply {} holds {pieces} pieces for {} cells; no tour can exist",
                config.supply(),
                config.area()
            );
        }
    }
}
