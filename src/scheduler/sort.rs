//! Arrival-time ordering.
//!
//! Used to make listings deterministic and to choose the list order the
//! engine breaks ties by. Scheduling itself never requires sorted input.

use crate::models::ProcessRecord;

/// Returns the records stably sorted by ascending arrival time.
///
/// Records with equal arrival keep their relative input order. The input
/// is left untouched.
pub fn sort_by_arrival(records: &[ProcessRecord]) -> Vec<ProcessRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by_key(|r| r.arrival_time);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProcessSet, ProcessSpec};

    fn records(rows: &[(i64, i64, i64)]) -> Vec<ProcessRecord> {
        let specs: Vec<ProcessSpec> = rows
            .iter()
            .map(|&(id, at, bt)| ProcessSpec::new(id, at, bt))
            .collect();
        ProcessSet::from_specs(&specs).unwrap().into_records()
    }

    #[test]
    fn test_sort_ascending() {
        let input = records(&[(1, 4, 1), (2, 0, 1), (3, 2, 1)]);
        let ids: Vec<i64> = sort_by_arrival(&input).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_is_stable() {
        let input = records(&[(5, 1, 3), (4, 0, 2), (3, 1, 1), (2, 0, 9)]);
        let ids: Vec<i64> = sort_by_arrival(&input).iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 2, 5, 3]);
    }

    #[test]
    fn test_sort_leaves_input() {
        let input = records(&[(1, 9, 1), (2, 0, 1)]);
        let before = input.clone();
        let _ = sort_by_arrival(&input);
        assert_eq!(input, before);
    }
}
