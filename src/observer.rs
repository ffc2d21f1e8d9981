//! The engine's only I/O seam.
//!
//! The engine never blocks on input. Whether per-bit tracing is wanted is
//! asked once, through [`Observer::trace_enabled`], before the first
//! generation; the best-ever candidate is handed to
//! [`Observer::report_best`] exactly once, after the last one.

use crate::fitness::GeneTrace;
use crate::ga::{Bits, Candidate};
use log::warn;
use std::io::{self, BufRead, Write};

/// Receives diagnostics and the final result from [`crate::ga::GaEngine`].
///
/// The tracing hooks are only called when [`trace_enabled`](Self::trace_enabled)
/// returned `true` at the start of the run.
pub trait Observer {
    /// Whether per-bit tracing should be emitted for this run.
    fn trace_enabled(&self) -> bool {
        false
    }

    /// A generation (1-based) is about to be evaluated.
    fn on_generation_start(&mut self, _generation: usize) {}

    /// One bit of one candidate has been inspected.
    fn on_gene(&mut self, _trace: &GeneTrace<'_>) {}

    /// A candidate has been fully evaluated.
    fn on_candidate_done(&mut self, _candidate: &Candidate) {}

    /// The run finished; `best` is the best-ever candidate.
    fn report_best(&mut self, best: &Candidate);
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl Observer for NullObserver {
    fn report_best(&mut self, _best: &Candidate) {}
}

/// Writes human-readable output to a [`Write`] sink (stdout by default).
#[derive(Debug)]
pub struct ConsoleObserver<W: Write = io::Stdout> {
    out: W,
    trace: bool,
}

impl ConsoleObserver {
    pub fn stdout(trace: bool) -> Self {
        Self::new(io::stdout(), trace)
    }
}

impl<W: Write> ConsoleObserver<W> {
    pub fn new(out: W, trace: bool) -> Self {
        Self { out, trace }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, args: std::fmt::Arguments<'_>) {
        if let Err(e) = self.out.write_fmt(args).and_then(|()| self.out.write_all(b"\n")) {
            warn!("failed to write observer output: {e}");
        }
    }
}

const RULE: &str = "__________________________________________________";

impl<W: Write> Observer for ConsoleObserver<W> {
    fn trace_enabled(&self) -> bool {
        self.trace
    }

    fn on_generation_start(&mut self, generation: usize) {
        self.emit(format_args!("{RULE}\n\nGeneration: {generation}\n"));
    }

    fn on_gene(&mut self, t: &GeneTrace<'_>) {
        self.emit(format_args!(
            "index: {}, bit: {}, weight: {}, value: {}, current fitness: {}, total weight: {}, bits: {}",
            t.index,
            u8::from(t.bit),
            t.weight,
            t.value,
            t.fitness,
            t.total_weight,
            Bits(t.bits),
        ));
    }

    fn on_candidate_done(&mut self, _candidate: &Candidate) {
        self.emit(format_args!("{RULE}"));
    }

    fn report_best(&mut self, best: &Candidate) {
        self.emit(format_args!("Best solution: {best}"));
    }
}

/// Asks the operator whether to trace, the way the interactive tool did:
/// `y` or `Y` enables tracing, anything else (including an empty line or
/// end of input) disables it.
pub fn prompt_trace<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<bool> {
    write!(output, "Would you like to run in debug mode? (y/n) ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let enabled = line.trim_end_matches(['\r', '\n']).eq_ignore_ascii_case("y");

    if enabled {
        writeln!(output, "Debug mode enabled.\n")?;
    } else {
        writeln!(output, "Debug mode disabled.\n")?;
    }
    Ok(enabled)
}
