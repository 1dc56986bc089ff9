//! SRTF engine and arrival ordering.
//!
//! # Algorithm
//!
//! `SrtfScheduler` simulates preemptive Shortest-Remaining-Time-First on a
//! single CPU in unit time steps, breaking ties by list position.
//!
//! # Ordering
//!
//! `sort_by_arrival` is a stable sort used for listings and for picking the
//! list order fed to the engine.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5

mod sort;
mod srtf;

pub use sort::sort_by_arrival;
pub use srtf::{Schedule, Simulation, SrtfScheduler};
