//! Plain-text rendering of process lists, traces, and reports.
//!
//! Output is informational; no byte-exact format is promised.

use std::fmt;

use super::Report;
use crate::models::{DispatchEvent, DispatchTrace, ProcessRecord, Segment};

const TABLE_RULE: &str =
    "+--------+--------------+------------+--------------+-----------------+---------------+------------+";

/// Renders a titled `(id, arrival, burst)` listing.
pub fn render_process_list(title: &str, records: &[ProcessRecord]) -> String {
    ProcessListing { title, records }.to_string()
}

/// Renders the per-tick trace as ` -> id` steps.
///
/// Idle ticks appear as ` -> idle` only when `show_idle` is set.
pub fn render_trace(trace: &DispatchTrace, show_idle: bool) -> String {
    TraceLine { trace, show_idle }.to_string()
}

/// Renders segments as a one-line gantt bar with a time axis below it.
pub fn render_gantt_bar(segments: &[Segment]) -> String {
    GanttBar { segments }.to_string()
}

/// Renders the gantt table, averages, and KPIs.
pub fn render_report(report: &Report) -> String {
    report.to_string()
}

struct ProcessListing<'a> {
    title: &'a str,
    records: &'a [ProcessRecord],
}

impl fmt::Display for ProcessListing<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.title)?;
        writeln!(f, "+--------+--------------+------------+")?;
        writeln!(f, "| PID    | Arrival Time | Burst Time |")?;
        writeln!(f, "+--------+--------------+------------+")?;
        for r in self.records {
            writeln!(
                f,
                "| {:<6} | {:>12} | {:>10} |",
                r.id, r.arrival_time, r.burst_time
            )?;
        }
        writeln!(f, "+--------+--------------+------------+")
    }
}

struct TraceLine<'a> {
    trace: &'a DispatchTrace,
    show_idle: bool,
}

impl fmt::Display for TraceLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for event in self.trace.events() {
            match event {
                DispatchEvent::Dispatch(id) => write!(f, " -> {id} ")?,
                DispatchEvent::Idle if self.show_idle => write!(f, " -> idle ")?,
                DispatchEvent::Idle => {}
            }
        }
        Ok(())
    }
}

struct GanttBar<'a> {
    segments: &'a [Segment],
}

impl GanttBar<'_> {
    fn label(event: DispatchEvent) -> String {
        match event {
            DispatchEvent::Dispatch(id) => format!("P{id}"),
            DispatchEvent::Idle => "--".to_string(),
        }
    }
}

impl fmt::Display for GanttBar<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(first) = self.segments.first() else {
            return Ok(());
        };

        let mut bar = String::from("|");
        let mut axis = first.start.to_string();
        for seg in self.segments {
            let cell = format!(" {} ", Self::label(seg.event));
            bar.push_str(&cell);
            bar.push('|');

            // Right-align each boundary time under its `|`.
            let end = seg.end.to_string();
            let pad = (cell.len() + 1).saturating_sub(end.len());
            axis.push_str(&" ".repeat(pad));
            axis.push_str(&end);
        }
        writeln!(f, "{bar}")?;
        writeln!(f, "{axis}")
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Gantt Chart:")?;
        writeln!(f, "{TABLE_RULE}")?;
        writeln!(
            f,
            "| PID    | Arrival Time | Burst Time | Waiting Time | Turnaround Time | Response Time | Completion |"
        )?;
        writeln!(f, "{TABLE_RULE}")?;
        for r in &self.rows {
            writeln!(
                f,
                "| {:<6} | {:>12} | {:>10} | {:>12} | {:>15} | {:>13} | {:>10} |",
                r.id,
                r.arrival_time,
                r.burst_time,
                r.waiting_time,
                r.turnaround_time,
                r.response_time,
                r.completion_time
            )?;
        }
        writeln!(f, "{TABLE_RULE}")?;
        writeln!(f)?;
        writeln!(f, "Avg waiting time:    {:.2}", self.avg_waiting)?;
        writeln!(f, "Avg turnaround time: {:.2}", self.avg_turnaround)?;
        writeln!(f, "Avg response time:   {:.2}", self.avg_response)?;
        writeln!(
            f,
            "Makespan: {} ({} busy, {} idle), CPU utilization {:.1}%",
            self.makespan,
            self.busy_ticks,
            self.idle_ticks,
            self.cpu_utilization * 100.0
        )?;
        writeln!(
            f,
            "Throughput: {:.3} processes/unit, context switches: {}",
            self.throughput, self.context_switches
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProcessSet, ProcessSpec};
    use crate::scheduler::SrtfScheduler;

    fn canonical_set() -> ProcessSet {
        ProcessSet::from_specs(&[
            ProcessSpec::new(1, 0, 8),
            ProcessSpec::new(2, 1, 4),
            ProcessSpec::new(3, 2, 9),
            ProcessSpec::new(4, 3, 5),
        ])
        .unwrap()
    }

    #[test]
    fn test_process_list() {
        let text = render_process_list("All processes", canonical_set().records());
        assert!(text.starts_with("All processes:"));
        assert_eq!(text.lines().filter(|l| l.starts_with("| ")).count(), 5);
    }

    #[test]
    fn test_trace_hides_idle_by_default() {
        let set = ProcessSet::from_specs(&[ProcessSpec::new(1, 2, 1)]).unwrap();
        let schedule = SrtfScheduler::new().schedule(set);
        assert_eq!(render_trace(&schedule.trace, false), " -> 1 ");
        assert_eq!(
            render_trace(&schedule.trace, true),
            " -> idle  -> idle  -> 1 "
        );
    }

    #[test]
    fn test_gantt_bar() {
        let schedule = SrtfScheduler::new().schedule(canonical_set());
        let bar = render_gantt_bar(&schedule.trace.segments());
        let lines: Vec<&str> = bar.lines().collect();
        assert_eq!(lines[0], "| P1 | P2 | P4 | P1 | P3 |");
        assert!(lines[1].starts_with('0'));
        assert!(lines[1].ends_with("26"));
        // Boundary times line up with the bars.
        assert_eq!(lines[0].len(), lines[1].len());
    }

    #[test]
    fn test_gantt_bar_empty() {
        assert_eq!(render_gantt_bar(&[]), "");
    }

    #[test]
    fn test_report_text() {
        let schedule = SrtfScheduler::new().schedule(canonical_set());
        let text = render_report(&Report::generate(&schedule));
        assert!(text.contains("Avg waiting time:    6.50"));
        assert!(text.contains("Avg turnaround time: 13.00"));
        assert!(text.contains("context switches: 4"));
    }
}
