//! Day 6: Wait For It

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{Context, anyhow, ensure};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 6, tags = ["2023", "math"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Race {
    pub time: u64,
    pub record: u64,
}

impl Race {
    fn beats_record(&self, hold: u64) -> bool {
        u128::from(hold) * u128::from(self.time - hold) > u128::from(self.record)
    }

    /// Number of hold times in `0..=time` that travel further than the record.
    ///
    /// Distance is symmetric around `time / 2` and increases up to it, so the
    /// shortest winning hold is found by bisecting `[0, time / 2]`.
    pub fn ways_to_win(&self) -> u64 {
        let peak = self.time / 2;
        if !self.beats_record(peak) {
            return 0;
        }

        let (mut lo, mut hi) = (0, peak);
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.beats_record(mid) {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        }
        self.time - 2 * lo + 1
    }
}

/// The races as printed, plus the single race read with the spaces removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceSheet {
    pub races: Vec<Race>,
    pub combined: Race,
}

fn read_line<'a>(line: Option<&'a str>, label: &str) -> anyhow::Result<Vec<&'a str>> {
    let values = line
        .and_then(|line| line.trim().strip_prefix(label))
        .and_then(|rest| rest.strip_prefix(':'))
        .ok_or_else(|| anyhow!("expected a '{label}:' line"))?;
    Ok(values.split_whitespace().collect())
}

fn numbers(tokens: &[&str]) -> anyhow::Result<Vec<u64>> {
    tokens
        .iter()
        .map(|t| t.parse().with_context(|| format!("bad number '{t}'")))
        .collect()
}

fn joined(tokens: &[&str]) -> anyhow::Result<u64> {
    let digits = tokens.concat();
    digits
        .parse()
        .with_context(|| format!("combined value '{digits}' does not fit in 64 bits"))
}

fn parse_sheet(input: &str) -> anyhow::Result<RaceSheet> {
    let mut lines = input.lines().filter(|line| !line.trim().is_empty());
    let times = read_line(lines.next(), "Time")?;
    let records = read_line(lines.next(), "Distance")?;
    ensure!(!times.is_empty(), "no races listed");
    ensure!(
        times.len() == records.len(),
        "{} times but {} distances",
        times.len(),
        records.len()
    );

    let races = numbers(&times)?
        .into_iter()
        .zip(numbers(&records)?)
        .map(|(time, record)| Race { time, record })
        .collect();
    let combined = Race {
        time: joined(&times)?,
        record: joined(&records)?,
    };
    Ok(RaceSheet { races, combined })
}

impl AocParser for Solver {
    type SharedData<'a> = RaceSheet;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        parse_sheet(input).map_err(|e| ParseError::InvalidFormat(format!("{e:#}")))
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let product: u64 = shared.races.iter().map(Race::ways_to_win).product();
        Ok(product.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.combined.ways_to_win().to_string())
    }
}
