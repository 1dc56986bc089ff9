//! Preemptive Shortest-Remaining-Time-First engine.
//!
//! # Algorithm
//!
//! Discrete time, one unit per step, starting at t=0:
//!
//! 1. Among arrived, unfinished records, pick the minimum remaining time.
//!    Ties go to the earliest position in the input list.
//! 2. Nothing eligible → emit `Idle`, advance the clock.
//! 3. Otherwise run the pick for one unit (recording its start time on first
//!    dispatch), advance the clock, and finalize it if it reached zero.
//! 4. Repeat until every record is completed.
//!
//! Preemption is free: switching records costs no time.
//!
//! # Complexity
//! O(T * n) where T = makespan, n = record count.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

use tracing::{debug, trace};

use crate::models::{DispatchTrace, ProcessRecord, ProcessSet, Tick};

/// Result of one full simulation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    /// Finalized records, in order of completion.
    pub completion_order: Vec<ProcessRecord>,
    /// One tick per simulated time unit.
    pub trace: DispatchTrace,
}

impl Schedule {
    /// Completed record with the given id (first match in completion order).
    pub fn record(&self, id: i64) -> Option<&ProcessRecord> {
        self.completion_order.iter().find(|r| r.id == id)
    }

    /// Ids in completion order.
    pub fn completion_ids(&self) -> Vec<i64> {
        self.completion_order.iter().map(|r| r.id).collect()
    }
}

/// Shortest-Remaining-Time-First scheduler.
///
/// Stateless; each call simulates a fresh record set.
///
/// # Example
///
/// ```
/// use u_srtf::models::{ProcessSet, ProcessSpec};
/// use u_srtf::scheduler::SrtfScheduler;
///
/// let set = ProcessSet::from_specs(&[
///     ProcessSpec::new(1, 0, 8),
///     ProcessSpec::new(2, 1, 4),
/// ]).unwrap();
///
/// let schedule = SrtfScheduler::new().schedule(set);
/// assert_eq!(schedule.completion_ids(), vec![2, 1]);
/// assert_eq!(schedule.trace.makespan(), 12);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SrtfScheduler;

impl SrtfScheduler {
    /// Creates a new scheduler.
    pub fn new() -> Self {
        Self
    }

    /// Runs the simulation to completion.
    ///
    /// Ties on remaining time are broken by position in `set`.
    ///
    /// Every tick is stored, idle gaps included, so memory grows with the
    /// makespan rather than the number of processes. For sparse workloads
    /// with far-apart arrivals, drive [`SrtfScheduler::simulate`] instead
    /// and keep only the ticks you need.
    pub fn schedule(&self, set: ProcessSet) -> Schedule {
        let mut sim = self.simulate(set);
        let mut trace = DispatchTrace::new();
        let mut finished = Vec::with_capacity(sim.records.len());

        for tick in sim.by_ref() {
            if tick.completed {
                if let Some(index) = tick.index {
                    finished.push(index);
                }
            }
            trace.push(tick);
        }

        let records = sim.into_records();
        let completion_order = finished.into_iter().map(|i| records[i].clone()).collect();

        Schedule {
            completion_order,
            trace,
        }
    }

    /// Starts a lazy simulation over a validated set.
    ///
    /// Each call to `next()` simulates exactly one time unit. The iterator
    /// ends once every record is completed. Only a [`ProcessSet`] is
    /// accepted, so every record starts fresh with a positive burst;
    /// records cannot be built or deserialized outside validation.
    ///
    /// ```compile_fail
    /// use u_srtf::models::ProcessRecord;
    ///
    /// let forged: ProcessRecord = serde_json::from_str(
    ///     r#"{"id":1,"arrival_time":0,"burst_time":0,"remaining_time":0,
    ///         "start_time":null,"completion_time":null,"metrics":null}"#,
    /// ).unwrap();
    /// ```
    pub fn simulate(&self, set: ProcessSet) -> Simulation {
        let records = set.into_records();
        let pending = records.len();
        Simulation {
            records,
            current_time: 0,
            pending,
        }
    }
}

/// Lazy, tick-by-tick SRTF simulation.
///
/// Owns the records for the duration of the run.
#[derive(Debug)]
pub struct Simulation {
    records: Vec<ProcessRecord>,
    current_time: i64,
    pending: usize,
}

impl Simulation {
    /// Current simulated time (start of the next tick).
    pub fn current_time(&self) -> i64 {
        self.current_time
    }

    /// Number of records not yet completed.
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Read-only view of the records being simulated.
    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    /// Consumes the simulation, returning the records in input order.
    pub fn into_records(self) -> Vec<ProcessRecord> {
        self.records
    }

    /// Index of the eligible record with the least remaining time.
    ///
    /// Strict `<` keeps the earliest position on ties.
    fn select(&self) -> Option<usize> {
        let mut best: Option<(usize, i64)> = None;
        for (i, r) in self.records.iter().enumerate() {
            if !r.is_eligible_at(self.current_time) {
                continue;
            }
            match best {
                Some((_, min)) if r.remaining_time >= min => {}
                _ => best = Some((i, r.remaining_time)),
            }
        }
        best.map(|(i, _)| i)
    }
}

impl Iterator for Simulation {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.pending == 0 {
            return None;
        }

        let now = self.current_time;
        let tick = match self.select() {
            None => {
                trace!(time = now, "idle");
                Tick::idle(now)
            }
            Some(index) => {
                let record = &mut self.records[index];
                let completed = record.run_tick(now);
                trace!(
                    time = now,
                    id = record.id,
                    remaining = record.remaining_time,
                    "dispatch"
                );

                if completed {
                    self.pending -= 1;
                    debug!(
                        id = record.id,
                        completion_time = now + 1,
                        pending = self.pending,
                        "process completed"
                    );
                }
                Tick::dispatch(now, record.id, index, completed)
            }
        };

        self.current_time += 1;
        Some(tick)
    }
}
