//! Day 1: Trebuchet?!

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::anyhow;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1, tags = ["2023", "strings"])]
pub struct Solver;

const SPELLED: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

impl AocParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let lines: Vec<&str> = input
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("no calibration lines".to_string()));
        }
        Ok(lines)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        calibration_sum(shared, false)
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        calibration_sum(shared, true)
    }
}

/// Digit starting at byte `at`, if any. Spelled names may overlap their
/// neighbours, so each position is checked on its own.
fn digit_at(line: &str, at: usize, spelled: bool) -> Option<u32> {
    let rest = &line.as_bytes()[at..];
    let first = *rest.first()?;
    if first.is_ascii_digit() {
        return Some(u32::from(first - b'0'));
    }
    if !spelled {
        return None;
    }
    SPELLED
        .iter()
        .position(|name| rest.starts_with(name.as_bytes()))
        .map(|index| index as u32 + 1)
}

fn calibration_value(line: &str, spelled: bool) -> Option<u32> {
    let first = (0..line.len()).find_map(|at| digit_at(line, at, spelled))?;
    let last = (0..line.len()).rev().find_map(|at| digit_at(line, at, spelled))?;
    Some(first * 10 + last)
}

fn calibration_sum(lines: &[&str], spelled: bool) -> Result<String, SolveError> {
    lines
        .iter()
        .enumerate()
        .map(|(index, line)| {
            calibration_value(line, spelled)
                .ok_or_else(|| anyhow!("(line {}) no digit in '{}'", index + 1, line))
        })
        .sum::<Result<u32, _>>()
        .map(|total| total.to_string())
        .map_err(SolveError::failed)
}
