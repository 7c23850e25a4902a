//! Day 3: Gear Ratios

use advent_solver::{AocParser, ParseError, PartSolver, SolveError};
use advent_solver_macros::{AocSolver, AutoRegisterSolver};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 3, tags = ["2023", "grid"])]
pub struct Solver;

/// A maximal horizontal run of digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartNumber {
    pub value: u64,
    pub row: usize,
    pub first_col: usize,
    pub last_col: usize,
}

impl PartNumber {
    /// Whether `(row, col)` lies in the box around this number, diagonals included.
    fn touches(&self, row: usize, col: usize) -> bool {
        row + 1 >= self.row
            && row <= self.row + 1
            && col + 1 >= self.first_col
            && col <= self.last_col + 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Symbol {
    pub glyph: char,
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Default)]
pub struct Schematic {
    pub numbers: Vec<PartNumber>,
    pub symbols: Vec<Symbol>,
}

impl Schematic {
    fn neighbours(&self, symbol: &Symbol) -> impl Iterator<Item = &PartNumber> {
        self.numbers
            .iter()
            .filter(move |number| number.touches(symbol.row, symbol.col))
    }
}

/// Records the digit run in progress, if any, as ending at column `last_col`.
fn flush(
    run: &mut Option<(usize, u64)>,
    row: usize,
    last_col: usize,
    numbers: &mut Vec<PartNumber>,
) {
    if let Some((first_col, value)) = run.take() {
        numbers.push(PartNumber {
            value,
            row,
            first_col,
            last_col,
        });
    }
}

fn scan_row(row: usize, line: &str, schematic: &mut Schematic) -> Result<(), ParseError> {
    let mut run: Option<(usize, u64)> = None;

    for (col, glyph) in line.chars().enumerate() {
        if let Some(digit) = glyph.to_digit(10) {
            let (first_col, value) = run.unwrap_or((col, 0));
            let value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(u64::from(digit)))
                .ok_or_else(|| {
                    ParseError::InvalidFormat(format!(
                        "(line {}) number at column {} is too large",
                        row + 1,
                        first_col + 1
                    ))
                })?;
            run = Some((first_col, value));
            continue;
        }

        flush(&mut run, row, col.saturating_sub(1), &mut schematic.numbers);
        if glyph != '.' && !glyph.is_whitespace() {
            schematic.symbols.push(Symbol { glyph, row, col });
        }
    }

    let width = line.chars().count();
    flush(&mut run, row, width.saturating_sub(1), &mut schematic.numbers);
    Ok(())
}

impl AocParser for Solver {
    type SharedData<'a> = Schematic;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut schematic = Schematic::default();
        for (row, line) in input.lines().enumerate() {
            scan_row(row, line, &mut schematic)?;
        }
        tracing::debug!(
            numbers = schematic.numbers.len(),
            symbols = schematic.symbols.len(),
            "scanned schematic"
        );
        Ok(schematic)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .numbers
            .iter()
            .filter(|number| {
                shared
                    .symbols
                    .iter()
                    .any(|symbol| number.touches(symbol.row, symbol.col))
            })
            .map(|number| number.value)
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .symbols
            .iter()
            .filter(|symbol| symbol.glyph == '*')
            .filter_map(|gear| {
                let mut around = shared.neighbours(gear);
                match (around.next(), around.next(), around.next()) {
                    (Some(a), Some(b), None) => Some(a.value * b.value),
                    _ => None,
                }
            })
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_solver::Solver as _;

    const SAMPLE: &str = "467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..";

    #[test]
    fn test_sample() {
        let mut shared = Solver::parse(SAMPLE).unwrap();
        assert_eq!(shared.numbers.len(), 10);
        assert_eq!(shared.symbols.len(), 6);
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "4361");
        assert_eq!(Solver::solve_part(&mut shared, 2).unwrap(), "467835");
    }

    #[test]
    fn test_number_at_line_end() {
        let schematic = Solver::parse("..12\n...#").unwrap();
        assert_eq!(
            schematic.numbers,
            vec![PartNumber {
                value: 12,
                row: 0,
                first_col: 2,
                last_col: 3
            }]
        );
    }

    #[test]
    fn test_number_counted_once_with_many_symbols() {
        let mut shared = Solver::parse("#5#\n.#.").unwrap();
        assert_eq!(Solver::solve_part(&mut shared, 1).unwrap(), "5");
    }

    #[test]
    fn test_gear_needs_exactly_two_numbers() {
        let mut three = Solver::parse("1.2\n.*.\n..3").unwrap();
        assert_eq!(Solver::solve_part(&mut three, 2).unwrap(), "0");

        let mut one = Solver::parse("7*..").unwrap();
        assert_eq!(Solver::solve_part(&mut one, 2).unwrap(), "0");

        let mut two = Solver::parse("7*8").unwrap();
        assert_eq!(Solver::solve_part(&mut two, 2).unwrap(), "56");
    }

    #[test]
    fn test_diagonal_adjacency() {
        let number = PartNumber {
            value: 1,
            row: 1,
            first_col: 1,
            last_col: 2,
        };
        assert!(number.touches(0, 0));
        assert!(number.touches(2, 3));
        assert!(!number.touches(2, 4));
        assert!(!number.touches(3, 1));
    }

    #[test]
    fn test_oversized_number_is_parse_error() {
        assert!(matches!(
            Solver::parse("99999999999999999999999*"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
