//! Process record model.
//!
//! A process record is one schedulable unit: a fixed arrival time and CPU
//! burst, plus the run-time state the SRTF engine mutates tick by tick.
//!
//! # Lifecycle
//!
//! ```text
//! Unarrived ──(current_time >= arrival)──▶ Eligible ──(remaining == 0)──▶ Completed
//! ```
//!
//! `Completed` is terminal. Derived metrics are computed once, at completion.

use serde::{Deserialize, Serialize};

use crate::validation::{validate_specs, ValidationError};

/// Raw, unvalidated ingestion row.
///
/// Fields are signed so that out-of-range values survive parsing and can be
/// reported by validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessSpec {
    /// Process identifier (need not be unique).
    pub id: i64,
    /// Time unit at which the process becomes eligible.
    pub arrival_time: i64,
    /// Total CPU units required.
    pub burst_time: i64,
}

impl ProcessSpec {
    /// Creates a new spec row.
    pub fn new(id: i64, arrival_time: i64, burst_time: i64) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
        }
    }
}

/// Lifecycle state of a record at a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProcessState {
    /// `current_time < arrival_time`.
    Unarrived,
    /// Arrived and not yet finished.
    Eligible,
    /// Remaining time reached zero. Terminal.
    Completed,
}

/// Timing metrics derived once a record completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProcessMetrics {
    /// `completion_time - arrival_time`.
    pub turnaround_time: i64,
    /// `turnaround_time - burst_time`.
    pub waiting_time: i64,
    /// `start_time - arrival_time`.
    pub response_time: i64,
}

/// A single schedulable unit.
///
/// `arrival_time` and `burst_time` are fixed at creation. The remaining
/// fields are run-time state and are only mutated by the scheduler.
///
/// # Invariants
/// - `0 <= remaining_time <= burst_time`, monotonically non-increasing
/// - `start_time` and `completion_time` are set at most once
/// - `metrics.is_some()` iff the record is completed
///
/// Serialize-only: records are built from validated specs, never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessRecord {
    /// Opaque identifier, carried through unchanged.
    pub id: i64,
    /// Arrival time (time units from t=0).
    pub arrival_time: i64,
    /// Total CPU units required (>= 1).
    pub burst_time: i64,
    pub(crate) remaining_time: i64,
    pub(crate) start_time: Option<i64>,
    pub(crate) completion_time: Option<i64>,
    pub(crate) metrics: Option<ProcessMetrics>,
}

impl ProcessRecord {
    /// Builds a fresh record from a validated spec.
    pub(crate) fn from_spec(spec: ProcessSpec) -> Self {
        Self {
            id: spec.id,
            arrival_time: spec.arrival_time,
            burst_time: spec.burst_time,
            remaining_time: spec.burst_time,
            start_time: None,
            completion_time: None,
            metrics: None,
        }
    }

    /// CPU units still owed to this process.
    #[inline]
    pub fn remaining_time(&self) -> i64 {
        self.remaining_time
    }

    /// First dispatch time, once dispatched.
    #[inline]
    pub fn start_time(&self) -> Option<i64> {
        self.start_time
    }

    /// Completion time, once completed.
    #[inline]
    pub fn completion_time(&self) -> Option<i64> {
        self.completion_time
    }

    /// Derived metrics, once completed.
    #[inline]
    pub fn metrics(&self) -> Option<ProcessMetrics> {
        self.metrics
    }

    /// Whether the record has finished.
    #[inline]
    pub fn is_completed(&self) -> bool {
        self.metrics.is_some()
    }

    /// Whether the record may be selected at `time`.
    #[inline]
    pub fn is_eligible_at(&self, time: i64) -> bool {
        self.arrival_time <= time && !self.is_completed()
    }

    /// Lifecycle state at `time`.
    pub fn state_at(&self, time: i64) -> ProcessState {
        if self.is_completed() {
            ProcessState::Completed
        } else if time < self.arrival_time {
            ProcessState::Unarrived
        } else {
            ProcessState::Eligible
        }
    }

    /// Grants one time unit of CPU starting at `time`.
    ///
    /// Returns `true` if this tick finished the process.
    pub(crate) fn run_tick(&mut self, time: i64) -> bool {
        debug_assert!(self.is_eligible_at(time));

        if self.remaining_time == self.burst_time {
            self.start_time = Some(time);
        }
        self.remaining_time -= 1;

        if self.remaining_time == 0 {
            self.finalize(time + 1);
            true
        } else {
            false
        }
    }

    fn finalize(&mut self, completion_time: i64) {
        let start = self.start_time.unwrap_or(self.arrival_time);
        let turnaround_time = completion_time - self.arrival_time;

        self.completion_time = Some(completion_time);
        self.metrics = Some(ProcessMetrics {
            turnaround_time,
            waiting_time: turnaround_time - self.burst_time,
            response_time: start - self.arrival_time,
        });
    }
}

/// A validated, non-empty, ordered set of fresh process records.
///
/// The list order is significant: the SRTF engine breaks ties on remaining
/// time by position in this list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessSet {
    records: Vec<ProcessRecord>,
}

impl ProcessSet {
    /// Validates raw specs and builds the set.
    ///
    /// # Errors
    /// Returns every detected violation if any spec is invalid or `specs`
    /// is empty. No record is built in that case.
    pub fn from_specs(specs: &[ProcessSpec]) -> Result<Self, Vec<ValidationError>> {
        validate_specs(specs)?;
        Ok(Self {
            records: specs.iter().copied().map(ProcessRecord::from_spec).collect(),
        })
    }

    /// Returns a copy of this set stably sorted by arrival time.
    pub fn sorted_by_arrival(&self) -> Self {
        Self {
            records: crate::scheduler::sort_by_arrival(&self.records),
        }
    }

    /// Records in set order.
    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    /// Number of records (always >= 1).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the set has no records. Never true once validated.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of all burst times.
    pub fn total_burst(&self) -> i64 {
        self.records.iter().map(|r| r.burst_time).sum()
    }

    pub(crate) fn into_records(self) -> Vec<ProcessRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh(id: i64, arrival: i64, burst: i64) -> ProcessRecord {
        ProcessRecord::from_spec(ProcessSpec::new(id, arrival, burst))
    }

    #[test]
    fn test_fresh_record() {
        let r = fresh(1, 3, 5);
        assert_eq!(r.remaining_time(), 5);
        assert_eq!(r.start_time(), None);
        assert_eq!(r.completion_time(), None);
        assert!(!r.is_completed());
    }

    #[test]
    fn test_state_transitions() {
        let mut r = fresh(1, 2, 1);
        assert_eq!(r.state_at(0), ProcessState::Unarrived);
        assert_eq!(r.state_at(2), ProcessState::Eligible);
        assert!(r.run_tick(2));
        assert_eq!(r.state_at(3), ProcessState::Completed);
        assert!(!r.is_eligible_at(10));
    }

    #[test]
    fn test_start_time_set_once() {
        let mut r = fresh(7, 0, 3);
        assert!(!r.run_tick(4));
        assert!(!r.run_tick(6));
        assert_eq!(r.start_time(), Some(4));
        assert!(r.run_tick(9));
        assert_eq!(r.start_time(), Some(4));
        assert_eq!(r.completion_time(), Some(10));
    }

    #[test]
    fn test_metrics_derived_at_completion() {
        let mut r = fresh(1, 1, 2);
        r.run_tick(3);
        assert!(r.metrics().is_none());
        r.run_tick(5);

        let m = r.metrics().unwrap();
        // completion 6, arrival 1
        assert_eq!(m.turnaround_time, 5);
        assert_eq!(m.waiting_time, 3);
        assert_eq!(m.response_time, 2);
    }

    #[test]
    fn test_process_set_rejects_empty() {
        assert!(ProcessSet::from_specs(&[]).is_err());
    }

    #[test]
    fn test_process_set_keeps_order() {
        let set = ProcessSet::from_specs(&[
            ProcessSpec::new(2, 5, 1),
            ProcessSpec::new(1, 0, 4),
        ])
        .unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.records()[0].id, 2);
        assert_eq!(set.total_burst(), 5);

        let sorted = set.sorted_by_arrival();
        assert_eq!(sorted.records()[0].id, 1);
    }
}
