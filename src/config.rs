//! Simulation configuration.

use serde::{Deserialize, Serialize};

use crate::models::ProcessSet;

/// List order fed to the engine.
///
/// The engine breaks remaining-time ties by list position, so this choice
/// is observable in the schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QueueOrder {
    /// Stable sort by arrival time, ties kept in input order.
    #[default]
    Arrival,
    /// Exactly as ingested.
    Input,
}

impl QueueOrder {
    /// Returns `set` rearranged into this order.
    pub fn apply(&self, set: ProcessSet) -> ProcessSet {
        match self {
            Self::Arrival => set.sorted_by_arrival(),
            Self::Input => set,
        }
    }

    /// Short label for report headers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Arrival => "arrival-sorted",
            Self::Input => "input order",
        }
    }
}

/// Options for one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// List order fed to the engine.
    pub order: QueueOrder,
    /// Whether idle ticks appear in the rendered dispatch trace.
    pub show_idle: bool,
}

impl SimulationConfig {
    /// Creates the default configuration (arrival order, idle hidden).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the queue order.
    pub fn with_order(mut self, order: QueueOrder) -> Self {
        self.order = order;
        self
    }

    /// Shows or hides idle ticks in the trace.
    pub fn with_show_idle(mut self, show_idle: bool) -> Self {
        self.show_idle = show_idle;
        self
    }
}
