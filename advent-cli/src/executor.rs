//! Sequential executor for running solvers

use crate::config::Config;
use crate::error::ExecutorError;
use crate::input::InputStore;
use advent_solver::{SolverError, SolverRegistry};
use chrono::TimeDelta;
use std::ops::RangeInclusive;

/// Result from a single solver execution
#[derive(Debug)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    /// Parse time of the day's input; `None` when parsing failed
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Runs the selected solvers one day at a time, parts in order
pub struct Executor {
    registry: SolverRegistry,
    inputs: InputStore,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Self {
        Self {
            registry,
            inputs: InputStore::new(config.input_dir.clone(), config.input_file.clone()),
            year_filter: config.year_filter,
            day_filter: config.day_filter,
            part_filter: config.part_filter,
        }
    }

    pub fn inputs(&self) -> &InputStore {
        &self.inputs
    }

    /// Collect work items by filtering from registry metadata, in
    /// `(year, day)` order
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let items: Vec<WorkItem> = self
            .registry
            .storage()
            .iter_info()
            .filter(|info| self.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| self.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect();
        tracing::debug!(count = items.len(), "collected work items");
        items
    }

    /// Filter parts based on the part filter and solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items, handing each part's result to `on_result`
    ///
    /// Parse and solve failures are reported as failed results. Inputs that
    /// cannot be read skip their day and are collected into the returned
    /// error once every other item has run.
    pub fn execute<F>(&self, mut on_result: F) -> Result<(), ExecutorError>
    where
        F: FnMut(SolverResult),
    {
        let mut collected_error: Option<ExecutorError> = None;
        for work in self.collect_work_items() {
            if let Err(e) = self.run_solver(&work, &mut on_result) {
                tracing::warn!(year = work.year, day = work.day, error = %e, "skipping day");
                collected_error = Some(ExecutorError::combine_opt(collected_error, e));
            }
        }
        collected_error.map_or(Ok(()), Err)
    }

    /// Parse one day's input once and solve its parts in order
    fn run_solver<F>(&self, work: &WorkItem, on_result: &mut F) -> Result<(), ExecutorError>
    where
        F: FnMut(SolverResult),
    {
        let (year, day) = (work.year, work.day);
        let input = self.inputs.read(year, day)?;

        let mut solver = match self.registry.create_solver(year, day, &input) {
            Ok(solver) => solver,
            Err(e) => {
                let message = e.to_string();
                for part in work.parts.clone() {
                    on_result(make_error_result(year, day, part, &message, &e));
                }
                return Ok(());
            }
        };

        let parse_duration = solver.parse_duration();
        for part in work.parts.clone() {
            let (answer, solve_duration) = match solver.solve(part) {
                Ok(solved) => {
                    let duration = solved.duration();
                    (Ok(solved.answer), duration)
                }
                Err(e) => (Err(SolverError::from(e)), TimeDelta::zero()),
            };
            on_result(SolverResult {
                year,
                day,
                part,
                answer,
                parse_duration: Some(parse_duration),
                solve_duration,
            });
        }
        Ok(())
    }
}

/// Create an error result for a day whose solver could not be built
fn make_error_result(
    year: u16,
    day: u8,
    part: u8,
    message: &str,
    error: &SolverError,
) -> SolverResult {
    let answer = match error {
        SolverError::NotFound(y, d) => Err(SolverError::NotFound(*y, *d)),
        SolverError::InvalidYearDay(y, d) => Err(SolverError::InvalidYearDay(*y, *d)),
        SolverError::ParseError(e) => Err(SolverError::ParseError(e.clone())),
        _ => Err(SolverError::ParseError(advent_solver::ParseError::Other(
            message.to_string(),
        ))),
    };
    SolverResult {
        year,
        day,
        part,
        answer,
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use advent_2023::year_2023::{day_1, day_5};
    use advent_solver::{ParseError, SolverRegistryBuilder};
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const DAY_5_SAMPLE: &str = "seeds: 79 14 55 13

seed-to-soil map:
50 98 2
52 50 48

soil-to-fertilizer map:
0 15 37
37 52 2
39 0 15

fertilizer-to-water map:
49 53 8
0 11 42
42 0 7
57 7 4

water-to-light map:
88 18 7
18 25 70

light-to-temperature map:
45 77 23
81 45 19
68 64 13

temperature-to-humidity map:
0 69 1
1 0 69

humidity-to-location map:
60 56 37
56 93 4
";

    fn registry() -> SolverRegistry {
        SolverRegistryBuilder::new()
            .register_solver::<day_1::Solver>(2023, 1)
            .unwrap()
            .register_solver::<day_5::Solver>(2023, 5)
            .unwrap()
            .build()
    }

    fn config(input_dir: PathBuf) -> Config {
        Config {
            year_filter: None,
            day_filter: None,
            part_filter: None,
            tags: Vec::new(),
            input_dir,
            input_file: None,
            quiet: true,
            verbosity: 0,
        }
    }

    fn run(executor: &Executor) -> (Vec<SolverResult>, Result<(), ExecutorError>) {
        let mut results = Vec::new();
        let outcome = executor.execute(|result| results.push(result));
        (results, outcome)
    }

    #[test]
    fn test_collect_work_items_filters() {
        let temp = TempDir::new().unwrap();
        let mut cfg = config(temp.path().to_path_buf());

        let all = Executor::new(registry(), &cfg).collect_work_items();
        assert_eq!(
            all,
            vec![
                WorkItem {
                    year: 2023,
                    day: 1,
                    parts: 1..=2,
                },
                WorkItem {
                    year: 2023,
                    day: 5,
                    parts: 1..=2,
                },
            ]
        );

        cfg.day_filter = Some(5);
        cfg.part_filter = Some(2);
        let one = Executor::new(registry(), &cfg).collect_work_items();
        assert_eq!(
            one,
            vec![WorkItem {
                year: 2023,
                day: 5,
                parts: 2..=2,
            }]
        );

        cfg.year_filter = Some(2022);
        assert!(Executor::new(registry(), &cfg).collect_work_items().is_empty());
    }

    #[test]
    fn test_execute_in_order() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2023_day01.txt"), "1abc2\ntreb7uchet\n").unwrap();
        fs::write(temp.path().join("2023_day05.txt"), DAY_5_SAMPLE).unwrap();

        let executor = Executor::new(registry(), &config(temp.path().to_path_buf()));
        let (results, outcome) = run(&executor);
        assert!(outcome.is_ok());

        let summary: Vec<_> = results
            .iter()
            .map(|r| (r.day, r.part, r.answer.as_ref().unwrap().as_str()))
            .collect();
        assert_eq!(
            summary,
            vec![(1, 1, "89"), (1, 2, "89"), (5, 1, "35"), (5, 2, "46")]
        );
        assert!(results.iter().all(|r| r.parse_duration.is_some()));

        let day_5_parse = results[2].parse_duration.unwrap();
        assert_eq!(results[3].parse_duration, Some(day_5_parse));
        assert_eq!(
            crate::output::total_parse_time(&results),
            results[0].parse_duration.unwrap() + day_5_parse
        );
    }

    #[test]
    fn test_missing_input_is_collected() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2023_day05.txt"), DAY_5_SAMPLE).unwrap();

        let executor = Executor::new(registry(), &config(temp.path().to_path_buf()));
        let (results, outcome) = run(&executor);

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.day == 5 && r.answer.is_ok()));
        assert!(matches!(
            outcome,
            Err(ExecutorError::InputRead { year: 2023, day: 1, .. })
        ));
    }

    #[test]
    fn test_parse_failure_reported_per_part() {
        let temp = TempDir::new().unwrap();
        let explicit = temp.path().join("empty.txt");
        fs::write(&explicit, "seed-to-soil map:\n1 2 3\n").unwrap();

        let mut cfg = config(temp.path().to_path_buf());
        cfg.day_filter = Some(5);
        cfg.input_file = Some(explicit);

        let executor = Executor::new(registry(), &cfg);
        let (results, outcome) = run(&executor);

        assert!(outcome.is_ok());
        assert_eq!(results.len(), 2);
        for result in &results {
            assert!(matches!(
                result.answer,
                Err(SolverError::ParseError(ParseError::MissingData(_)))
            ));
            assert!(result.parse_duration.is_none());
        }
    }

    #[test]
    fn test_solve_failure_does_not_stop_later_parts() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("2023_day05.txt"), "seeds: 7 8 9\n").unwrap();

        let mut cfg = config(temp.path().to_path_buf());
        cfg.day_filter = Some(5);
        let executor = Executor::new(registry(), &cfg);
        let (results, outcome) = run(&executor);

        assert!(outcome.is_ok());
        assert_eq!(results[0].answer.as_deref().unwrap(), "7");
        assert!(matches!(results[1].answer, Err(SolverError::SolveError(_))));
    }
}
