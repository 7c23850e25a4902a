//! Error types for the CLI

use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Registration error
    #[error("Registration error: {0}")]
    Registration(#[from] advent_solver::RegistrationError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Errors collected while running the selected solvers
    #[error("{0}")]
    Executor(#[from] ExecutorError),

    /// Some parts did not produce an answer
    #[error("{failed} of {total} part(s) failed")]
    Failed { failed: usize, total: usize },
}

/// Executor-specific errors
#[derive(Error, Debug)]
pub enum ExecutorError {
    /// Input file could not be read
    #[error("Input read failed for {year}/{day:02} ({}): {source}", .path.display())]
    InputRead {
        year: u16,
        day: u8,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Solver lookup, parse or solve failed
    #[error("Solver execution failed: {0}")]
    Solver(#[from] advent_solver::SolverError),

    /// Multiple errors collected during execution
    #[error("Multiple errors occurred ({} total): {}", .0.len(), join_messages(.0))]
    Multiple(Vec<ExecutorError>),
}

fn join_messages(errors: &[ExecutorError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ExecutorError {
    /// Combine two errors into one `Multiple`, flattening either side that
    /// is already a `Multiple` so nesting never grows.
    pub fn combine(first: ExecutorError, second: ExecutorError) -> ExecutorError {
        let errors = match (first, second) {
            (ExecutorError::Multiple(mut v1), ExecutorError::Multiple(v2)) => {
                v1.extend(v2);
                v1
            }
            (single, ExecutorError::Multiple(v)) => {
                let mut combined = Vec::with_capacity(v.len() + 1);
                combined.push(single);
                combined.extend(v);
                combined
            }
            (ExecutorError::Multiple(mut v), single) => {
                v.push(single);
                v
            }
            (a, b) => vec![a, b],
        };
        ExecutorError::Multiple(errors)
    }

    /// Combine an optional error with a new error
    pub fn combine_opt(existing: Option<ExecutorError>, new: ExecutorError) -> ExecutorError {
        match existing {
            Some(e) => Self::combine(e, new),
            None => new,
        }
    }
}
