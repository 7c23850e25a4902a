//! Day 7: Camel Cards

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};
use anyhow::{Context, anyhow};
use itertools::Itertools;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 7, tags = ["2023", "sorting"])]
pub struct Solver;

/// Card labels from weakest to strongest.
const PLAIN_ORDER: &[u8; 13] = b"23456789TJQKA";
/// Same, with `J` read as the weakest card.
const JOKER_ORDER: &[u8; 13] = b"J23456789TQKA";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandType {
    HighCard,
    OnePair,
    TwoPair,
    ThreeOfAKind,
    FullHouse,
    FourOfAKind,
    FiveOfAKind,
}

impl HandType {
    /// Classifies a hand from its label multiplicities, largest first.
    fn from_counts(counts: &[usize]) -> Self {
        match counts {
            [5, ..] => HandType::FiveOfAKind,
            [4, ..] => HandType::FourOfAKind,
            [3, 2, ..] => HandType::FullHouse,
            [3, ..] => HandType::ThreeOfAKind,
            [2, 2, ..] => HandType::TwoPair,
            [2, ..] => HandType::OnePair,
            _ => HandType::HighCard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hand {
    pub cards: [u8; 5],
    pub bid: u64,
}

impl Hand {
    /// Type of the hand. With `jokers`, every `J` joins the most common
    /// other label, which always gives the strongest reachable type.
    pub fn hand_type(&self, jokers: bool) -> HandType {
        let joker_count = if jokers {
            self.cards.iter().filter(|&&c| c == b'J').count()
        } else {
            0
        };

        let mut counts: Vec<usize> = self
            .cards
            .iter()
            .filter(|&&c| !jokers || c != b'J')
            .counts()
            .into_values()
            .sorted_unstable_by(|a, b| b.cmp(a))
            .collect();

        match counts.first_mut() {
            Some(top) => *top += joker_count,
            None => counts.push(joker_count),
        }
        HandType::from_counts(&counts)
    }

    fn strengths(&self, order: &[u8; 13]) -> [usize; 5] {
        self.cards
            .map(|card| order.iter().position(|&label| label == card).unwrap_or(0))
    }

    fn sort_key(&self, jokers: bool) -> (HandType, [usize; 5]) {
        let order = if jokers { JOKER_ORDER } else { PLAIN_ORDER };
        (self.hand_type(jokers), self.strengths(order))
    }
}

fn parse_hand(line: &str) -> anyhow::Result<Hand> {
    let (cards, bid) = line
        .split_once(char::is_whitespace)
        .ok_or_else(|| anyhow!("expected '<cards> <bid>'"))?;
    let cards: [u8; 5] = cards
        .as_bytes()
        .try_into()
        .map_err(|_| anyhow!("hand '{cards}' must have exactly five cards"))?;
    if let Some(bad) = cards.iter().find(|&&c| !PLAIN_ORDER.contains(&c)) {
        return Err(anyhow!("unknown card '{}'", char::from(*bad)));
    }
    let bid = bid.trim().parse().with_context(|| format!("bad bid '{}'", bid.trim()))?;
    Ok(Hand { cards, bid })
}

/// Sum of `rank * bid` with hands ordered weakest first.
pub fn total_winnings(hands: &[Hand], jokers: bool) -> u64 {
    hands
        .iter()
        .map(|hand| (hand.sort_key(jokers), hand.bid))
        .sorted_unstable()
        .zip(1u64..)
        .map(|((_, bid), rank)| rank * bid)
        .sum()
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Hand>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let hands = input
            .lines()
            .map(str::trim)
            .enumerate()
            .filter(|(_, line)| !line.is_empty())
            .map(|(index, line)| {
                parse_hand(line)
                    .map_err(|e| ParseError::InvalidFormat(format!("(line {}) {:#}", index + 1, e)))
            })
            .collect::<Result<Vec<_>, _>>()?;
        if hands.is_empty() {
            return Err(ParseError::MissingData("no hands dealt".to_string()));
        }
        Ok(hands)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, false).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_winnings(shared, true).to_string())
    }
}
