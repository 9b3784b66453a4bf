//! Single-threaded DP cache implementation.

use std::cell::RefCell;
use std::marker::PhantomData;

use super::backend::Backend;

/// The dependency structure and combine step of a DP problem
///
/// - `I`: index type
/// - `K`: value type stored in the cache
pub trait DpProblem<I, K> {
    /// Indices this index depends on; empty for base cases
    fn deps(&self, index: &I) -> Vec<I>;

    /// Combine the resolved dependency values, given in `deps()` order
    fn compute(&self, index: &I, deps: Vec<K>) -> K;
}

/// Lazily evaluated memo table for a [`DpProblem`]
///
/// `RefCell` lets `get` take `&self` so dependencies can be resolved
/// recursively. No borrow is held while a dependency is being computed.
pub struct DpCache<I, K, B, P>
where
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    backend: RefCell<B>,
    problem: P,
    _phantom: PhantomData<(I, K)>,
}

impl<I, K, B, P> DpCache<I, K, B, P>
where
    I: Clone,
    K: Clone,
    B: Backend<I, K>,
    P: DpProblem<I, K>,
{
    pub fn with_problem(backend: B, problem: P) -> Self {
        Self {
            backend: RefCell::new(backend),
            problem,
            _phantom: PhantomData,
        }
    }

    /// Value for `index`, computing it and its dependencies if needed
    pub fn get(&self, index: &I) -> K {
        if let Some(value) = self.backend.borrow().get(index) {
            return value.clone();
        }

        let dep_values: Vec<K> = self
            .problem
            .deps(index)
            .into_iter()
            .map(|dep| self.get(&dep))
            .collect();

        let value = self.problem.compute(index, dep_values);
        self.backend
            .borrow_mut()
            .get_or_insert(index.clone(), || value)
            .clone()
    }

    pub fn problem(&self) -> &P {
        &self.problem
    }
}
