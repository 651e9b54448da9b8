//! Observers receive a snapshot of the sequence after each sorting step.
//!
//! A sorter calls [`Observer::observe`] once before its first mutation and
//! then after every change it considers a step. Observers cannot influence
//! the sort.

use std::io::{self, Write};

use parking_lot::Mutex;

/// A sink for intermediate states of the sequence.
pub trait Observer: Sync {
    fn observe(&self, sequence: &[i64]);
}

/// Does nothing. Use for silent or benchmark runs.
#[derive(Clone, Copy, Debug, Default)]
pub struct Silent;

impl Observer for Silent {
    #[inline]
    fn observe(&self, _sequence: &[i64]) {}
}

/// Writes each snapshot on its own line, formatted as `[a, b, c]`.
pub struct Printer<W: Write + Send> {
    out: Mutex<W>,
}

impl Printer<io::Stdout> {
    /// A printer on standard output.
    pub fn stdout() -> Printer<io::Stdout> {
        return Printer::new(io::stdout());
    }
}

impl<W: Write + Send> Printer<W> {
    pub fn new(out: W) -> Printer<W> {
        return Printer { out: Mutex::new(out) };
    }

    /// Recover the underlying writer.
    pub fn into_inner(self) -> W {
        return self.out.into_inner();
    }
}

impl<W: Write + Send> Observer for Printer<W> {
    fn observe(&self, sequence: &[i64]) {
        let mut out = self.out.lock();
        if let Err(err) = writeln!(out, "{:?}", sequence) {
            tracing::warn!(%err, "failed to print sequence");
        }
    }
}

/// Keeps an owned copy of every snapshot.
#[derive(Debug, Default)]
pub struct Recorder {
    snapshots: Mutex<Vec<Vec<i64>>>,
}

impl Recorder {
    pub fn new() -> Recorder {
        return Recorder::default();
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> Vec<Vec<i64>> {
        return self.snapshots.lock().clone();
    }

    /// The most recent snapshot.
    pub fn last(&self) -> Option<Vec<i64>> {
        return self.snapshots.lock().last().cloned();
    }

    pub fn len(&self) -> usize {
        return self.snapshots.lock().len();
    }

    pub fn is_empty(&self) -> bool {
        return self.len() == 0;
    }
}

impl Observer for Recorder {
    fn observe(&self, sequence: &[i64]) {
        self.snapshots.lock().push(sequence.to_vec());
    }
}
