//! Memoised dynamic programming over a dependency DAG
//!
//! A [`DpProblem`] says which sub-problems an index depends on and how to
//! combine their values. [`DpCache`] resolves dependencies lazily and computes
//! every index at most once.
//!
//! # Warning: no cycle detection
//!
//! Dependencies must form a DAG. A cycle recurses until the stack overflows.
//!
//! # Example
//!
//! ```rust
//! use advent_solutions::utils::memo::{DpCache, DpProblem, VecBackend};
//!
//! struct Fibonacci;
//!
//! impl DpProblem<usize, u64> for Fibonacci {
//!     fn deps(&self, n: &usize) -> Vec<usize> {
//!         if *n <= 1 { vec![] } else { vec![n - 1, n - 2] }
//!     }
//!     fn compute(&self, n: &usize, deps: Vec<u64>) -> u64 {
//!         if *n <= 1 { *n as u64 } else { deps[0] + deps[1] }
//!     }
//! }
//!
//! let cache = DpCache::with_problem(VecBackend::new(), Fibonacci);
//! assert_eq!(cache.get(&10), 55);
//! ```

mod backend;
mod cache;

pub use backend::{Backend, HashMapBackend, VecBackend};
pub use cache::{DpCache, DpProblem};
