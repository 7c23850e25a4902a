//! CLI argument parsing using clap

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Advent of Code 2023 solver runner
#[derive(Parser, Debug)]
#[command(name = "advent", about = "Run Advent of Code 2023 solvers", version)]
pub struct Args {
    /// Year to run (runs all years if omitted)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Day to run (runs all days if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// Part to run (runs all parts if omitted)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: Option<u8>,

    /// Tags to filter solvers (comma-separated, all must match)
    #[arg(short, long, value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Directory holding `{year}_day{day:02}.txt` input files
    #[arg(long, env = "ADVENT_INPUT_DIR", default_value = "inputs")]
    pub input_dir: PathBuf,

    /// Read this file instead of the input directory (needs --day)
    #[arg(short, long, requires = "day")]
    pub input: Option<PathBuf>,

    /// Quiet mode - only output answers
    #[arg(short, long)]
    pub quiet: bool,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["advent"]).unwrap();
        assert_eq!(args.year, None);
        assert_eq!(args.day, None);
        assert!(args.tags.is_empty());
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn test_full_selection() {
        let args = Args::try_parse_from([
            "advent", "--year", "2023", "--day", "5", "--part", "2", "--tags", "2023,intervals",
            "-q", "-vv",
        ])
        .unwrap();
        assert_eq!(args.year, Some(2023));
        assert_eq!(args.day, Some(5));
        assert_eq!(args.part, Some(2));
        assert_eq!(args.tags, vec!["2023", "intervals"]);
        assert!(args.quiet);
        assert_eq!(args.verbose, 2);
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        assert!(Args::try_parse_from(["advent", "--day", "26"]).is_err());
        assert!(Args::try_parse_from(["advent", "--day", "0"]).is_err());
        assert!(Args::try_parse_from(["advent", "--part", "3"]).is_err());
    }

    #[test]
    fn test_input_requires_day() {
        assert!(Args::try_parse_from(["advent", "--input", "day5.txt"]).is_err());
        let args = Args::try_parse_from(["advent", "-d", "5", "-i", "day5.txt"]).unwrap();
        assert_eq!(args.input, Some(PathBuf::from("day5.txt")));
    }
}
