//! Day 5: If You Give A Seed A Fertilizer
//!
//! Seeds are pushed through seven translation stages. Part 1 follows each
//! seed value on its own; part 2 reads the seeds as `start length` ranges
//! and moves whole intervals, splitting them at rule boundaries.

mod almanac;
mod remap;

#[cfg(test)]
mod tests;

pub use almanac::{Almanac, AlmanacError, PIPELINE, Rule, RuleTable, Stage};
pub use remap::{Interval, locate, lowest_start, run};

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 5, tags = ["2023", "intervals"])]
pub struct Solver;

impl From<AlmanacError> for ParseError {
    fn from(error: AlmanacError) -> Self {
        match error {
            AlmanacError::MissingSeedData => ParseError::MissingData(error.to_string()),
            other => ParseError::InvalidFormat(other.to_string()),
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Almanac<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(Almanac::parse(input)?)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .seeds
            .iter()
            .map(|&seed| locate(seed, &PIPELINE, &shared.table))
            .min()
            .map(|lowest| lowest.to_string())
            .ok_or_else(|| SolveError::failed(AlmanacError::MissingSeedData))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let ranges = shared.seed_ranges().map_err(SolveError::failed)?;
        let locations = run(ranges, &PIPELINE, &shared.table).map_err(SolveError::failed)?;
        lowest_start(&locations)
            .map(|lowest| lowest.to_string())
            .ok_or_else(|| SolveError::failed(AlmanacError::MissingSeedData))
    }
}
