//! Synthetic workload generation.
//!
//! Produces random, always-valid process sets for demos and for exercising
//! the engine on inputs nobody wrote by hand. Seeded generation is fully
//! reproducible.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::error::IngestError;
use crate::models::{ProcessSet, ProcessSpec};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Parameters for a random workload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkloadGenerator {
    /// Number of processes (ids `1..=count`).
    pub count: usize,
    /// Arrival times are drawn from `0..=max_arrival`.
    pub max_arrival: i64,
    /// Smallest burst time.
    pub min_burst: i64,
    /// Largest burst time.
    pub max_burst: i64,
    /// RNG seed. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl WorkloadGenerator {
    /// Creates a generator for `count` processes with default ranges
    /// (arrival 0..=10, burst 1..=10).
    pub fn new(count: usize) -> Self {
        Self {
            count,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            seed: None,
        }
    }

    /// Sets the latest possible arrival time.
    pub fn with_max_arrival(mut self, max_arrival: i64) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range (inclusive).
    pub fn with_burst_range(mut self, min_burst: i64, max_burst: i64) -> Self {
        self.min_burst = min_burst;
        self.max_burst = max_burst;
        self
    }

    /// Fixes the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Draws raw specs.
    ///
    /// # Errors
    /// Rejects a zero count, a negative `max_arrival`, or an empty or
    /// non-positive burst range.
    pub fn generate_specs(&self) -> Result<Vec<ProcessSpec>, IngestError> {
        self.check()?;

        let mut rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };

        Ok((1..=self.count as i64)
            .map(|id| {
                ProcessSpec::new(
                    id,
                    rng.random_range(0..=self.max_arrival),
                    rng.random_range(self.min_burst..=self.max_burst),
                )
            })
            .collect())
    }

    /// Draws a validated process set.
    pub fn generate(&self) -> Result<ProcessSet, IngestError> {
        let specs = self.generate_specs()?;
        Ok(ProcessSet::from_specs(&specs)?)
    }

    fn check(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        if self.count == 0 {
            errors.push(ValidationError::process_count(0));
        }
        if self.max_arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrivalTime,
                format!("Invalid max arrival time {} (must be >= 0)", self.max_arrival),
            ));
        }
        if self.min_burst < 1 || self.max_burst < self.min_burst {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurstTime,
                format!(
                    "Invalid burst range {}..={} (need 1 <= min <= max)",
                    self.min_burst, self.max_burst
                ),
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}
