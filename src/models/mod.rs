//! Simulation domain models.
//!
//! Provides the data types shared by ingestion, the SRTF engine, and
//! reporting.
//!
//! | Type | Role |
//! |------|------|
//! | `ProcessSpec` | Raw ingestion row, unvalidated |
//! | `ProcessRecord` | Schedulable unit with run-time state |
//! | `ProcessSet` | Validated, non-empty, ordered record list |
//! | `DispatchTrace` | Per-tick engine output |
//! | `Segment` | Run of identical ticks, for gantt bars |

mod process;
mod trace;

pub use process::{ProcessMetrics, ProcessRecord, ProcessSet, ProcessSpec, ProcessState};
pub use trace::{DispatchEvent, DispatchTrace, Segment, Tick};
