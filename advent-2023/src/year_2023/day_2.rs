//! Day 2: Cube Conundrum

use std::sync::LazyLock;

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{Context, anyhow, bail};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 2, tags = ["2023", "parsing"])]
pub struct Solver;

static GAME_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Game\s+(\d+):(.*)$").expect("valid regex"));
static CUBE_COUNT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s+([a-z]+)$").expect("valid regex"));

/// Cubes shown in one handful.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Draw {
    pub red: u32,
    pub green: u32,
    pub blue: u32,
}

impl Draw {
    pub const BAG: Draw = Draw {
        red: 12,
        green: 13,
        blue: 14,
    };

    fn fits_in(&self, bag: &Draw) -> bool {
        self.red <= bag.red && self.green <= bag.green && self.blue <= bag.blue
    }

    fn max(self, other: Draw) -> Draw {
        Draw {
            red: self.red.max(other.red),
            green: self.green.max(other.green),
            blue: self.blue.max(other.blue),
        }
    }

    fn power(&self) -> u64 {
        u64::from(self.red) * u64::from(self.green) * u64::from(self.blue)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    pub id: u32,
    pub draws: Vec<Draw>,
}

impl Game {
    /// Smallest bag that could have produced every draw.
    pub fn minimum_bag(&self) -> Draw {
        self.draws.iter().fold(Draw::default(), |acc, draw| acc.max(*draw))
    }
}

fn parse_draw(text: &str) -> anyhow::Result<Draw> {
    let mut draw = Draw::default();
    for part in text.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let caps = CUBE_COUNT
            .captures(part)
            .ok_or_else(|| anyhow!("malformed cube count '{part}'"))?;
        let count: u32 = caps[1]
            .parse()
            .with_context(|| format!("cube count '{}' out of range", &caps[1]))?;
        let slot = match &caps[2] {
            "red" => &mut draw.red,
            "green" => &mut draw.green,
            "blue" => &mut draw.blue,
            other => bail!("unknown colour '{other}'"),
        };
        *slot = slot
            .checked_add(count)
            .ok_or_else(|| anyhow!("too many {} cubes in one draw", &caps[2]))?;
    }
    Ok(draw)
}

fn parse_game(line: &str) -> anyhow::Result<Game> {
    let caps = GAME_LINE
        .captures(line)
        .ok_or_else(|| anyhow!("expected 'Game <id>: ...'"))?;
    let id = caps[1].parse().context("game id out of range")?;
    let draws = caps[2].split(';').map(parse_draw).collect::<Result<_, _>>()?;
    Ok(Game { id, draws })
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Game>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(index, line)| {
                parse_game(line)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {:#}", index + 1, e)))
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .iter()
            .filter(|game| game.draws.iter().all(|draw| draw.fits_in(&Draw::BAG)))
            .map(|game| u64::from(game.id))
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared.iter().map(|game| game.minimum_bag().power()).sum();
        Ok(total.to_string())
    }
}
