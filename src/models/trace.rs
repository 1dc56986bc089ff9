//! Dispatch trace model.
//!
//! The SRTF engine emits one [`Tick`] per simulated time unit. A
//! [`DispatchTrace`] stores them in time order and can collapse runs of
//! identical events into [`Segment`]s for a gantt-style bar.

use serde::{Deserialize, Serialize};

/// What happened during one simulated time unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DispatchEvent {
    /// The process with this id ran for one unit.
    Dispatch(i64),
    /// No process was eligible.
    Idle,
}

impl DispatchEvent {
    /// Dispatched process id, if any.
    pub fn process_id(&self) -> Option<i64> {
        match self {
            Self::Dispatch(id) => Some(*id),
            Self::Idle => None,
        }
    }

    /// Whether this is an idle tick.
    #[inline]
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}

/// One simulated time unit `[time, time + 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tick {
    /// Start of the time unit.
    pub time: i64,
    /// Event emitted for this unit.
    pub event: DispatchEvent,
    /// Position of the dispatched record in the engine's input list.
    pub index: Option<usize>,
    /// Whether the dispatched record finished at `time + 1`.
    pub completed: bool,
}

impl Tick {
    pub(crate) fn idle(time: i64) -> Self {
        Self {
            time,
            event: DispatchEvent::Idle,
            index: None,
            completed: false,
        }
    }

    pub(crate) fn dispatch(time: i64, id: i64, index: usize, completed: bool) -> Self {
        Self {
            time,
            event: DispatchEvent::Dispatch(id),
            index: Some(index),
            completed,
        }
    }
}

/// A maximal run of identical consecutive events, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Event repeated across the segment.
    pub event: DispatchEvent,
    /// First time unit (inclusive).
    pub start: i64,
    /// End time (exclusive).
    pub end: i64,
}

impl Segment {
    /// Length in time units.
    #[inline]
    pub fn duration(&self) -> i64 {
        self.end - self.start
    }
}

/// Time-ordered list of ticks produced by one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchTrace {
    ticks: Vec<Tick>,
}

impl DispatchTrace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tick. Ticks must arrive in time order.
    pub fn push(&mut self, tick: Tick) {
        debug_assert!(self
            .ticks
            .last()
            .is_none_or(|last| last.time + 1 == tick.time));
        self.ticks.push(tick);
    }

    /// All ticks.
    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }

    /// Events in time order.
    pub fn events(&self) -> impl Iterator<Item = DispatchEvent> + '_ {
        self.ticks.iter().map(|t| t.event)
    }

    /// Dispatched ids in time order, idle ticks skipped.
    pub fn dispatched_ids(&self) -> impl Iterator<Item = i64> + '_ {
        self.events().filter_map(|e| e.process_id())
    }

    /// Total simulated time (end of the last tick).
    pub fn makespan(&self) -> i64 {
        self.ticks.last().map(|t| t.time + 1).unwrap_or(0)
    }

    /// Number of ticks in which some process ran.
    pub fn busy_ticks(&self) -> i64 {
        self.ticks.iter().filter(|t| !t.event.is_idle()).count() as i64
    }

    /// Number of idle ticks.
    pub fn idle_ticks(&self) -> i64 {
        self.ticks.iter().filter(|t| t.event.is_idle()).count() as i64
    }

    /// Number of times the CPU switched to a different record.
    ///
    /// Idle gaps are skipped, so `A idle A` counts no switch while
    /// `A idle B` counts one. Records are told apart by list position, so
    /// duplicate ids still count as distinct processes.
    pub fn context_switches(&self) -> usize {
        let mut prev: Option<usize> = None;
        let mut switches = 0;
        for index in self.ticks.iter().filter_map(|t| t.index) {
            if prev.is_some_and(|p| p != index) {
                switches += 1;
            }
            prev = Some(index);
        }
        switches
    }

    /// Collapses consecutive identical events into segments.
    pub fn segments(&self) -> Vec<Segment> {
        let mut segments: Vec<Segment> = Vec::new();
        for tick in &self.ticks {
            match segments.last_mut() {
                Some(seg) if seg.event == tick.event && seg.end == tick.time => {
                    seg.end = tick.time + 1;
                }
                _ => segments.push(Segment {
                    event: tick.event,
                    start: tick.time,
                    end: tick.time + 1,
                }),
            }
        }
        segments
    }

    /// Number of ticks.
    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    /// Whether no tick was recorded.
    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

impl FromIterator<Tick> for DispatchTrace {
    fn from_iter<I: IntoIterator<Item = Tick>>(iter: I) -> Self {
        let mut trace = Self::new();
        for tick in iter {
            trace.push(tick);
        }
        trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_trace() -> DispatchTrace {
        // idle idle 1 1 2 idle 1
        vec![
            Tick::idle(0),
            Tick::idle(1),
            Tick::dispatch(2, 1, 0, false),
            Tick::dispatch(3, 1, 0, false),
            Tick::dispatch(4, 2, 1, true),
            Tick::idle(5),
            Tick::dispatch(6, 1, 0, true),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_trace_counts() {
        let t = sample_trace();
        assert_eq!(t.len(), 7);
        assert_eq!(t.makespan(), 7);
        assert_eq!(t.busy_ticks(), 4);
        assert_eq!(t.idle_ticks(), 3);
        assert_eq!(t.dispatched_ids().collect::<Vec<_>>(), vec![1, 1, 2, 1]);
    }

    #[test]
    fn test_segments() {
        let segs = sample_trace().segments();
        assert_eq!(segs.len(), 5);
        assert_eq!(segs[0].event, DispatchEvent::Idle);
        assert_eq!(segs[0].duration(), 2);
        assert_eq!(segs[1].event, DispatchEvent::Dispatch(1));
        assert_eq!((segs[1].start, segs[1].end), (2, 4));
        assert_eq!(segs[4].start, 6);
    }

    #[test]
    fn test_context_switches() {
        // 1→2, 2→1 across idle
        assert_eq!(sample_trace().context_switches(), 2);
        assert_eq!(DispatchTrace::new().context_switches(), 0);
    }

    #[test]
    fn test_empty_trace() {
        let t = DispatchTrace::new();
        assert!(t.is_empty());
        assert_eq!(t.makespan(), 0);
        assert!(t.segments().is_empty());
    }

    #[test]
    fn test_push_contiguous() {
        let mut t = DispatchTrace::new();
        t.push(Tick::idle(0));
        t.push(Tick::dispatch(1, 3, 0, false));
        assert_eq!(t.makespan(), 2);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_push_gap_panics() {
        let mut t = DispatchTrace::new();
        t.push(Tick::idle(0));
        t.push(Tick::idle(2));
    }

    #[test]
    fn test_event_accessors() {
        assert_eq!(DispatchEvent::Dispatch(4).process_id(), Some(4));
        assert_eq!(DispatchEvent::Idle.process_id(), None);
        assert!(DispatchEvent::Idle.is_idle());
    }
}
