//! Advent of Code puzzle solutions with automatic registration
//!
//! Solutions are organised by year behind the `year-2021` and `year-2022`
//! features. Each one derives `AutoRegisterSolver`, so linking this crate is
//! enough for `SolverRegistryBuilder::register_all_plugins` to find it.
//!
//! Shared helpers (grids, memoised DP) live in [`utils`].

pub mod utils;

#[cfg(feature = "year-2021")]
pub mod year_2021;

#[cfg(feature = "year-2022")]
pub mod year_2022;
