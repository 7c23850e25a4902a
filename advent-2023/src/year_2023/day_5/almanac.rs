//! Almanac input: seed values and the named rule tables.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::remap::Interval;

/// Stage names in the order a seed travels through them.
pub const PIPELINE: [&str; 7] = [
    "seed-to-soil",
    "soil-to-fertilizer",
    "fertilizer-to-water",
    "water-to-light",
    "light-to-temperature",
    "temperature-to-humidity",
    "humidity-to-location",
];

static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));
static STAGE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\S.*?)\s+map:$").expect("valid regex"));
static RULE_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s+(\d+)\s+(\d+)$").expect("valid regex"));

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlmanacError {
    #[error("no seed values found on the first line")]
    MissingSeedData,
    #[error("seed value '{0}' does not fit in 64 bits")]
    InvalidSeed(String),
    #[error("seed range starting at {start} with length {length} overflows")]
    SeedRangeOverflow { start: u64, length: u64 },
    #[error("range mode needs start/length pairs, got {0} seed values")]
    OddSeedRangeCount(usize),
    #[error("line {line}: malformed rule '{text}'")]
    MalformedRuleLine { line: usize, text: String },
    #[error("line {line}: rule appears before any '<name> map:' header")]
    RuleWithoutStage { line: usize },
}

/// One piecewise shift: `[source_start, source_start + length)` moves to
/// `[dest_start, dest_start + length)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    dest_start: u64,
    source_start: u64,
    length: u64,
}

impl Rule {
    /// Returns `None` when either covered range would run past `u64::MAX`.
    pub fn try_new(dest_start: u64, source_start: u64, length: u64) -> Option<Self> {
        if let Some(span) = length.checked_sub(1) {
            source_start.checked_add(span)?;
            dest_start.checked_add(span)?;
        }
        Some(Self {
            dest_start,
            source_start,
            length,
        })
    }

    pub fn dest_start(&self) -> u64 {
        self.dest_start
    }

    pub fn source_start(&self) -> u64 {
        self.source_start
    }

    /// Last covered source value (inclusive). Empty rules cover nothing.
    pub fn source_end(&self) -> Option<u64> {
        self.length
            .checked_sub(1)
            .map(|span| self.source_start + span)
    }

    /// Shifted value if `value` lies within the rule's coverage.
    pub fn map_point(&self, value: u64) -> Option<u64> {
        let end = self.source_end()?;
        (self.source_start..=end)
            .contains(&value)
            .then(|| self.dest_start + (value - self.source_start))
    }
}

/// A named translation stage such as `seed-to-soil`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage<'a> {
    pub name: &'a str,
    pub rules: Vec<Rule>,
}

impl<'a> Stage<'a> {
    pub fn new(name: &'a str, rules: Vec<Rule>) -> Self {
        Self { name, rules }
    }
}

/// Stages keyed by name, kept in the order their headers first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleTable<'a> {
    stages: Vec<Stage<'a>>,
}

impl<'a> RuleTable<'a> {
    pub fn stage(&self, name: &str) -> Option<&Stage<'a>> {
        self.stages.iter().find(|stage| stage.name == name)
    }

    pub fn stages(&self) -> &[Stage<'a>] {
        &self.stages
    }

    pub fn rule_count(&self) -> usize {
        self.stages.iter().map(|stage| stage.rules.len()).sum()
    }

    /// Index of the stage called `name`, opening an empty one if needed.
    fn open(&mut self, name: &'a str) -> usize {
        match self.stages.iter().position(|stage| stage.name == name) {
            Some(index) => index,
            None => {
                self.stages.push(Stage::new(name, Vec::new()));
                self.stages.len() - 1
            }
        }
    }

    /// Builds the table from every line after the seed line.
    ///
    /// Header lines open (or reopen) a stage, three-number lines add a rule
    /// to the open stage, anything else is skipped.
    pub fn parse(lines: impl Iterator<Item = (usize, &'a str)>) -> Result<Self, AlmanacError> {
        let mut table = RuleTable::default();
        let mut active: Option<usize> = None;

        for (line_no, raw) in lines {
            let line = raw.trim();
            if let Some(header) = STAGE_HEADER.captures(line) {
                let name = header.get(1).map_or("", |m| m.as_str());
                active = Some(table.open(name));
            } else if let Some(caps) = RULE_LINE.captures(line) {
                let malformed = || AlmanacError::MalformedRuleLine {
                    line: line_no,
                    text: line.to_string(),
                };
                let number = |i: usize| caps[i].parse::<u64>().map_err(|_| malformed());
                let rule = Rule::try_new(number(1)?, number(2)?, number(3)?).ok_or_else(malformed)?;
                let index = active.ok_or(AlmanacError::RuleWithoutStage { line: line_no })?;
                table.stages[index].rules.push(rule);
            }
        }

        Ok(table)
    }
}

/// Parsed puzzle input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Almanac<'a> {
    pub seeds: Vec<u64>,
    pub table: RuleTable<'a>,
}

impl<'a> Almanac<'a> {
    /// Reads the seed values from the first line and the rule tables from the rest.
    pub fn parse(input: &'a str) -> Result<Self, AlmanacError> {
        let mut lines = input.lines().enumerate().map(|(i, line)| (i + 1, line));
        let (_, first) = lines.next().ok_or(AlmanacError::MissingSeedData)?;

        let seeds = NUMBER
            .find_iter(first)
            .map(|m| {
                m.as_str()
                    .parse::<u64>()
                    .map_err(|_| AlmanacError::InvalidSeed(m.as_str().to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if seeds.is_empty() {
            return Err(AlmanacError::MissingSeedData);
        }

        let table = RuleTable::parse(lines)?;
        tracing::debug!(
            seeds = seeds.len(),
            stages = table.stages().len(),
            rules = table.rule_count(),
            "parsed almanac"
        );

        Ok(Self { seeds, table })
    }

    /// Each seed as a one-value interval.
    pub fn seed_points(&self) -> Vec<Interval> {
        self.seeds.iter().copied().map(Interval::point).collect()
    }

    /// Seeds read as `start length` pairs. Zero-length pairs contribute nothing.
    pub fn seed_ranges(&self) -> Result<Vec<Interval>, AlmanacError> {
        if self.seeds.len() % 2 != 0 {
            return Err(AlmanacError::OddSeedRangeCount(self.seeds.len()));
        }

        self.seeds
            .chunks_exact(2)
            .filter(|pair| pair[1] > 0)
            .map(|pair| {
                let (start, length) = (pair[0], pair[1]);
                Interval::from_start_len(start, length)
                    .ok_or(AlmanacError::SeedRangeOverflow { start, length })
            })
            .collect()
    }
}
