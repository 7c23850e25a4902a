//! Advent of Code 2023 puzzle solutions, days 1 through 7
//!
//! Each solution derives `AocSolver` and `AutoRegisterSolver`, so linking
//! this crate is enough to make every day discoverable through
//! [`advent_solver::SolverRegistryBuilder::register_all_plugins`].
//!
//! Day 5 carries the interval remapper and is the most involved module;
//! the others are small single-file solvers.

pub mod year_2023;
