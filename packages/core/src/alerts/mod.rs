//! Alert delivery.
//!
//! [`AlertSink`] is the notification callback every alert passes through.
//! [`ConsoleReporter`] is the line-oriented sink used by the binary; any
//! `FnMut(&Alert)` closure is also a sink. Repeated visual alerts live in
//! [`blink`].

pub mod blink;

use std::io::{self, Stdout, Write};

use crate::vitals::{Alert, Evaluation};

/// Line printed when an evaluation raises no alert.
pub const ALL_NORMAL: &str = "All vitals normal.";

/// Receives alerts as they are dispatched.
pub trait AlertSink {
    fn notify(&mut self, alert: &Alert);
}

impl<F> AlertSink for F
where
    F: FnMut(&Alert),
{
    fn notify(&mut self, alert: &Alert) {
        self(alert)
    }
}

/// Deliver every alert of an evaluation to `sink`. Returns the number of
/// alerts delivered.
pub fn dispatch<S: AlertSink + ?Sized>(evaluation: &Evaluation, sink: &mut S) -> usize {
    for alert in evaluation.alerts() {
        sink.notify(alert);
    }
    evaluation.alerts().len()
}

/// Writes one line per alert to the wrapped writer (stdout by default).
#[derive(Debug)]
pub struct ConsoleReporter<W: Write = Stdout> {
    out: W,
}

impl ConsoleReporter<Stdout> {
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print every alert, or [`ALL_NORMAL`] when there are none.
    pub fn report(&mut self, evaluation: &Evaluation) -> usize {
        if evaluation.is_normal() {
            self.write_line(ALL_NORMAL);
            return 0;
        }
        dispatch(evaluation, self)
    }

    fn write_line(&mut self, line: &str) {
        let result = writeln!(self.out, "{}", line).and_then(|_| self.out.flush());
        if let Err(err) = result {
            tracing::error!("Failed to write alert to console: {}", err);
        }
    }
}

impl<W: Write> AlertSink for ConsoleReporter<W> {
    fn notify(&mut self, alert: &Alert) {
        self.write_line(&alert.message);
    }
}
