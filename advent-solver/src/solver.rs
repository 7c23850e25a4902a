//! The three traits a puzzle implements.
//!
//! A puzzle day parses its input once with [`AocParser::parse`], then each
//! part reads (and may update) that parsed value through [`PartSolver`].
//! [`Solver`] ties the parts together under one runtime part number and is
//! normally derived:
//!
//! ```
//! use advent_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};
//!
//! /// Race records: `time distance` per line.
//! #[derive(AocSolver)]
//! #[aoc_solver(max_parts = 2)]
//! struct Races;
//!
//! struct Sheet {
//!     races: Vec<(u64, u64)>,
//!     winners: Option<Vec<u64>>,
//! }
//!
//! impl AocParser for Races {
//!     type SharedData<'a> = Sheet;
//!
//!     fn parse(input: &str) -> Result<Sheet, ParseError> {
//!         let races = input
//!             .lines()
//!             .map(|line| {
//!                 let (time, record) = line
//!                     .split_once(' ')
//!                     .ok_or_else(|| ParseError::InvalidFormat(line.to_string()))?;
//!                 let number = |s: &str| {
//!                     s.parse::<u64>()
//!                         .map_err(|_| ParseError::InvalidFormat(s.to_string()))
//!                 };
//!                 Ok((number(time)?, number(record)?))
//!             })
//!             .collect::<Result<_, _>>()?;
//!         Ok(Sheet { races, winners: None })
//!     }
//! }
//!
//! impl PartSolver<1> for Races {
//!     fn solve(sheet: &mut Sheet) -> Result<String, SolveError> {
//!         let winners: Vec<u64> = sheet
//!             .races
//!             .iter()
//!             .map(|&(time, record)| {
//!                 (0..=time).filter(|hold| hold * (time - hold) > record).count() as u64
//!             })
//!             .collect();
//!         let product = winners.iter().product::<u64>();
//!         sheet.winners = Some(winners);
//!         Ok(product.to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Races {
//!     fn solve(sheet: &mut Sheet) -> Result<String, SolveError> {
//!         let winners = sheet
//!             .winners
//!             .as_ref()
//!             .ok_or_else(|| SolveError::failed(std::fmt::Error))?;
//!         Ok(winners.iter().sum::<u64>().to_string())
//!     }
//! }
//!
//! let mut sheet = Races::parse("7 9\n15 40\n30 200").unwrap();
//! assert_eq!(Races::solve_part(&mut sheet, 1).unwrap(), "288");
//! assert_eq!(Races::solve_part(&mut sheet, 2).unwrap(), "21");
//! ```

use crate::error::{ParseError, SolveError};

/// Turns raw puzzle text into the value every part works on.
pub trait AocParser {
    /// Parsed form of the input. The lifetime lets a parser keep slices of
    /// the input (day 5 keeps its stage names as `&'a str`) instead of copying.
    type SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Part `N` of a puzzle, counted from 1.
///
/// Parts run in order against the same shared value, so anything part 1
/// stores there is visible to part 2.
pub trait PartSolver<const N: u8>: AocParser {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Runtime dispatch from a part number to the matching [`PartSolver`].
///
/// `#[derive(AocSolver)]` writes this impl. A hand-written one must answer
/// parts `1..=PARTS` and return [`SolveError::PartNotImplemented`] otherwise.
pub trait Solver: AocParser {
    /// Highest part number this puzzle answers.
    const PARTS: u8;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Part dispatch that rejects numbers outside `1..=PARTS` before reaching
/// the solver.
pub trait SolverExt: Solver {
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if part == 0 || part > Self::PARTS {
            return Err(SolveError::PartOutOfRange(part));
        }
        Self::solve_part(shared, part)
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
