//! Schedule report: gantt rows and aggregate metrics.
//!
//! Converts the engine's completion-ordered records and dispatch trace into
//! per-process rows and schedule-wide averages.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Avg waiting | mean(turnaround - burst) |
//! | Avg turnaround | mean(completion - arrival) |
//! | Avg response | mean(first dispatch - arrival) |
//! | Makespan | End of the last tick |
//! | CPU utilization | busy ticks / makespan |
//! | Throughput | processes / makespan |
//! | Context switches | Dispatches of a different record than the last one |
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

mod render;

pub use render::{render_gantt_bar, render_process_list, render_report, render_trace};

use serde::Serialize;

use crate::models::{ProcessRecord, Segment};
use crate::scheduler::Schedule;

/// One completed process's timing summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GanttRow {
    /// Process id.
    pub id: i64,
    /// Arrival time.
    pub arrival_time: i64,
    /// Burst time.
    pub burst_time: i64,
    /// Time spent eligible but not running.
    pub waiting_time: i64,
    /// Completion minus arrival.
    pub turnaround_time: i64,
    /// First dispatch minus arrival.
    pub response_time: i64,
    /// Completion time.
    pub completion_time: i64,
}

impl GanttRow {
    fn from_record(record: &ProcessRecord) -> Option<Self> {
        let metrics = record.metrics()?;
        Some(Self {
            id: record.id,
            arrival_time: record.arrival_time,
            burst_time: record.burst_time,
            waiting_time: metrics.waiting_time,
            turnaround_time: metrics.turnaround_time,
            response_time: metrics.response_time,
            completion_time: record.completion_time()?,
        })
    }
}

/// Full report for one simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    /// Rows in completion order.
    pub rows: Vec<GanttRow>,
    /// Trace collapsed into runs of identical events.
    pub segments: Vec<Segment>,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// End of the last tick.
    pub makespan: i64,
    /// Ticks in which a process ran.
    pub busy_ticks: i64,
    /// Ticks with nothing eligible.
    pub idle_ticks: i64,
    /// `busy_ticks / makespan` (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
    /// Number of switches between distinct records.
    pub context_switches: usize,
}

impl Report {
    /// Builds the report from a finished schedule.
    ///
    /// Averages are real-valued means over every completed record. A
    /// schedule with no records yields zero averages.
    pub fn generate(schedule: &Schedule) -> Self {
        let rows: Vec<GanttRow> = schedule
            .completion_order
            .iter()
            .filter_map(GanttRow::from_record)
            .collect();

        let n = rows.len();
        let mean = |f: fn(&GanttRow) -> i64| -> f64 {
            if n == 0 {
                0.0
            } else {
                rows.iter().map(f).sum::<i64>() as f64 / n as f64
            }
        };

        let avg_waiting = mean(|r| r.waiting_time);
        let avg_turnaround = mean(|r| r.turnaround_time);
        let avg_response = mean(|r| r.response_time);

        let trace = &schedule.trace;
        let makespan = trace.makespan();
        let busy_ticks = trace.busy_ticks();
        let (cpu_utilization, throughput) = if makespan == 0 {
            (0.0, 0.0)
        } else {
            (
                busy_ticks as f64 / makespan as f64,
                n as f64 / makespan as f64,
            )
        };

        Self {
            segments: trace.segments(),
            avg_waiting,
            avg_turnaround,
            avg_response,
            makespan,
            busy_ticks,
            idle_ticks: trace.idle_ticks(),
            cpu_utilization,
            throughput,
            context_switches: trace.context_switches(),
            rows,
        }
    }

    /// Row for the given id (first match in completion order).
    pub fn row(&self, id: i64) -> Option<&GanttRow> {
        self.rows.iter().find(|r| r.id == id)
    }
}
