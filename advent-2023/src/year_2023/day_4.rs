//! Day 4: Scratchcards

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{Context, anyhow};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 4, tags = ["2023", "simulation"])]
pub struct Solver;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: u32,
    pub winning: Vec<u32>,
    pub have: Vec<u32>,
}

impl Card {
    pub fn matches(&self) -> usize {
        self.have
            .iter()
            .filter(|number| self.winning.contains(number))
            .count()
    }
}

/// All cards in input order. Card `i` only ever awards copies of cards after it.
#[derive(Debug, Clone, Default)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn points(&self) -> u64 {
        self.cards
            .iter()
            .map(Card::matches)
            .filter(|&matches| matches > 0)
            .map(|matches| 1u64 << (matches - 1).min(63))
            .sum()
    }

    /// Total cards held once every won copy has been scratched.
    pub fn total_copies(&self) -> u64 {
        let mut copies = vec![1u64; self.cards.len()];
        for (index, card) in self.cards.iter().enumerate() {
            let held = copies[index];
            let last = (index + card.matches()).min(self.cards.len() - 1);
            for count in &mut copies[index + 1..=last] {
                *count += held;
            }
        }
        copies.iter().sum()
    }
}

fn parse_numbers(text: &str) -> anyhow::Result<Vec<u32>> {
    text.split_whitespace()
        .map(|n| n.parse().with_context(|| format!("bad number '{n}'")))
        .collect()
}

fn parse_card(line: &str) -> anyhow::Result<Card> {
    let (label, numbers) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("expected 'Card <n>: ...'"))?;
    let id = label
        .strip_prefix("Card")
        .map(str::trim)
        .ok_or_else(|| anyhow!("expected 'Card' label, got '{label}'"))?
        .parse()
        .context("bad card id")?;
    let (winning, have) = numbers
        .split_once('|')
        .ok_or_else(|| anyhow!("missing '|' separator"))?;

    Ok(Card {
        id,
        winning: parse_numbers(winning)?,
        have: parse_numbers(have)?,
    })
}

impl AocParser for Solver {
    type SharedData<'a> = Deck;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let cards = input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(index, line)| {
                parse_card(line)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {:#}", index + 1, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Deck { cards })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.points().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.total_copies().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;

    const SAMPLE: &str = "Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        let matches: Vec<_> = shared.cards.iter().map(Card::matches).collect();
        assert_eq!(matches, vec![4, 2, 2, 1, 0, 0]);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "13");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "30");
    }

    #[test]
    fn test_copies_stop_at_last_card() {
        let deck = Solver::parse("Card 1: 1 2 3 | 1 2 3\nCard 2: 5 | 5").unwrap();
        // Card 1 has three matches but only one card follows it.
        assert_eq!(deck.total_copies(), 3);
    }

    #[test]
    fn test_empty_deck() {
        let deck = Solver::parse("").unwrap();
        assert_eq!(deck.points(), 0);
        assert_eq!(deck.total_copies(), 0);
    }

    #[test]
    fn test_malformed_card() {
        assert!(matches!(
            Solver::parse("Card 1: 1 2 3"),
            Err(ParseError::InvalidFormat(msg)) if msg.contains("'|'")
        ));
        assert!(matches!(
            Solver::parse("Card x: 1 | 2"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
