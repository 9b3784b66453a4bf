//! Re-orders results arriving from parallel workers
//!
//! Workers finish in any order, but output is printed by ascending
//! (year, day, part). Two min-heaps drive this: the keys still expected, and
//! the results received early that wait for their turn.

use crate::executor::SolverResult;
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// Key for ordering results (year, day, part) - ordered ascending
#[derive(Debug, Ord, PartialOrd, Eq, PartialEq, Clone, Copy)]
pub struct ResultKey {
    pub year: u16,
    pub day: u8,
    pub part: u8,
}

impl From<&SolverResult> for ResultKey {
    fn from(r: &SolverResult) -> Self {
        Self {
            year: r.year,
            day: r.day,
            part: r.part,
        }
    }
}

/// A buffered result ordered by its key
struct Keyed(ResultKey, SolverResult);

impl Ord for Keyed {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for Keyed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Keyed {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Keyed {}

/// Buffers results and releases them in key order
pub struct ResultAggregator {
    expected: BinaryHeap<Reverse<ResultKey>>,
    pending: BinaryHeap<Reverse<Keyed>>,
}

impl ResultAggregator {
    pub fn new(expected_keys: impl IntoIterator<Item = ResultKey>) -> Self {
        Self {
            expected: expected_keys.into_iter().map(Reverse).collect(),
            pending: BinaryHeap::new(),
        }
    }

    /// Add a result and return every result now ready for output, in order
    pub fn add(&mut self, result: SolverResult) -> Vec<SolverResult> {
        let key = ResultKey::from(&result);
        if !self.expected.iter().any(|Reverse(k)| *k == key) {
            log::warn!(
                "unexpected result for {}/{:02} part {}",
                key.year,
                key.day,
                key.part
            );
        }
        self.pending.push(Reverse(Keyed(key, result)));

        let mut ready = Vec::new();
        while let (Some(Reverse(next)), Some(Reverse(Keyed(head, _)))) =
            (self.expected.peek(), self.pending.peek())
        {
            if head != next {
                break;
            }
            self.expected.pop();
            if let Some(Reverse(Keyed(_, result))) = self.pending.pop() {
                ready.push(result);
            }
        }
        ready
    }

    /// Take whatever is still buffered, in order
    pub fn drain(&mut self) -> Vec<SolverResult> {
        let mut rest: Vec<Keyed> = self.pending.drain().map(|Reverse(k)| k).collect();
        rest.sort();
        rest.into_iter().map(|Keyed(_, result)| result).collect()
    }

    /// Check if all expected results have been received
    pub fn is_complete(&self) -> bool {
        self.expected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeDelta;
    use proptest::prelude::*;

    fn make_result(year: u16, day: u8, part: u8) -> SolverResult {
        SolverResult {
            year,
            day,
            part,
            answer: Ok(format!("{year}_{day}_{part}")),
            parse_duration: Some(TimeDelta::milliseconds(5)),
            solve_duration: TimeDelta::milliseconds(10),
        }
    }

    fn key(year: u16, day: u8, part: u8) -> ResultKey {
        ResultKey { year, day, part }
    }

    #[test]
    fn test_in_order_results() {
        let mut agg = ResultAggregator::new([key(2021, 1, 1), key(2021, 1, 2)]);

        let ready = agg.add(make_result(2021, 1, 1));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 1);

        let ready = agg.add(make_result(2021, 1, 2));
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].part, 2);

        assert!(agg.is_complete());
    }

    #[test]
    fn test_out_of_order_results() {
        let mut agg = ResultAggregator::new([key(2021, 1, 1), key(2021, 1, 2), key(2022, 1, 1)]);

        assert!(agg.add(make_result(2021, 1, 2)).is_empty());
        assert!(agg.add(make_result(2022, 1, 1)).is_empty());

        let ready = agg.add(make_result(2021, 1, 1));
        let keys: Vec<_> = ready.iter().map(ResultKey::from).collect();
        assert_eq!(keys, vec![key(2021, 1, 1), key(2021, 1, 2), key(2022, 1, 1)]);
        assert!(agg.is_complete());
    }

    #[test]
    fn test_drain_remaining() {
        let mut agg = ResultAggregator::new([key(2021, 1, 1), key(2021, 1, 2)]);
        agg.add(make_result(2021, 1, 2));

        let remaining = agg.drain();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].part, 2);
        assert!(!agg.is_complete());
    }

    proptest! {
        #[test]
        fn prop_any_arrival_order_is_emitted_sorted(
            keys in prop::collection::btree_set((2015u16..2035, 1u8..=25, 1u8..=2), 1..30),
            seed in any::<u64>(),
        ) {
            let keys: Vec<ResultKey> = keys.into_iter().map(|(y, d, p)| key(y, d, p)).collect();
            let mut arrival = keys.clone();
            // Deterministic shuffle from the seed
            let mut state = seed;
            for i in (1..arrival.len()).rev() {
                state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
                arrival.swap(i, (state >> 33) as usize % (i + 1));
            }

            let mut agg = ResultAggregator::new(keys.iter().copied());
            let mut emitted = Vec::new();
            for k in arrival {
                emitted.extend(agg.add(make_result(k.year, k.day, k.part)).iter().map(ResultKey::from));
            }
            prop_assert!(agg.is_complete());
            prop_assert!(agg.drain().is_empty());
            prop_assert_eq!(emitted, keys);
        }
    }
}
