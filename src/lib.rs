//! Preemptive Shortest-Remaining-Time-First (SRTF) CPU scheduling simulator.
//!
//! Simulates a single CPU over a finite, fully-known set of processes in
//! unit time steps and reports the dispatch trace, per-process timing
//! metrics, and aggregate averages. Offline and deterministic; it never
//! drives real execution.
//!
//! # Modules
//!
//! - **`models`**: `ProcessRecord`, `ProcessSet`, `DispatchTrace`, `Segment`
//! - **`validation`**: Ingestion checks (count, arrival, burst)
//! - **`ingest`**: Text, JSON, and interactive readers
//! - **`scheduler`**: `SrtfScheduler` engine and arrival sort
//! - **`report`**: Gantt rows, averages, KPIs, text rendering
//! - **`workload`**: Random process sets
//! - **`config`**: Run options (queue order, idle display)
//!
//! # Example
//!
//! ```
//! use u_srtf::ingest::parse_text;
//! use u_srtf::report::Report;
//! use u_srtf::scheduler::SrtfScheduler;
//!
//! let set = parse_text("4\n1 0 8\n2 1 4\n3 2 9\n4 3 5\n").unwrap();
//! let schedule = SrtfScheduler::new().schedule(set);
//! let report = Report::generate(&schedule);
//!
//! assert_eq!(schedule.completion_ids(), vec![2, 4, 1, 3]);
//! assert!((report.avg_waiting - 6.5).abs() < 1e-10);
//! assert!((report.avg_turnaround - 13.0).abs() < 1e-10);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
pub mod report;
pub mod scheduler;
pub mod validation;
pub mod workload;
