//! Per-form submission lifecycle.
//!
//! Each form moves `Idle → Submitting → {Success, Failed} → Idle`. A second
//! submit while one is outstanding is not cancelled: both requests are sent,
//! but only the newest submission may touch the page when it completes.

use std::cell::Cell;
use std::fmt;

/// Lifecycle state of a form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
    Success,
    Failed,
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Failed => "failed",
        };
        f.write_str(name)
    }
}

/// Hands out tickets for submissions of one form and remembers the newest.
#[derive(Debug, Default)]
pub struct SubmissionGate {
    issued: Cell<u64>,
    in_flight: Cell<usize>,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a submission. The returned ticket is the newest until the next
    /// call.
    pub fn begin(&self) -> SubmissionTicket<'_> {
        let number = self.issued.get() + 1;
        self.issued.set(number);
        self.in_flight.set(self.in_flight.get() + 1);
        SubmissionTicket { gate: self, number }
    }

    /// `Submitting` while any ticket is alive, `Idle` otherwise.
    ///
    /// The terminal states are never observable here: they last only for the
    /// side effect that ends a submission.
    pub fn state(&self) -> SubmissionState {
        if self.in_flight.get() > 0 {
            SubmissionState::Submitting
        } else {
            SubmissionState::Idle
        }
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.get()
    }
}

/// One outstanding submission. Dropping it returns the slot to the gate.
#[derive(Debug)]
pub struct SubmissionTicket<'a> {
    gate: &'a SubmissionGate,
    number: u64,
}

impl SubmissionTicket<'_> {
    pub fn number(&self) -> u64 {
        self.number
    }

    /// False once a later submission of the same form has started.
    pub fn is_current(&self) -> bool {
        self.gate.issued.get() == self.number
    }
}

impl Drop for SubmissionTicket<'_> {
    fn drop(&mut self) {
        self.gate.in_flight.set(self.gate.in_flight.get().saturating_sub(1));
    }
}
