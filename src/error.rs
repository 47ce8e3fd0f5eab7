use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

use crate::{model::LineParams, search::Heading};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, FitErr>;

/// Everything that can stop a fit.
///
/// Configuration errors are raised before the first iteration, evaluation errors
/// abort the iteration they happen in and the iteration cap is a driver policy.
#[derive(Debug)]
pub enum FitErr {
    EmptyDataset,
    InvalidStepSize(f64),
    NonFiniteStart {
        params: LineParams,
    },
    Config(serde_json::Error),
    Io(io::Error),
    NonFiniteError {
        heading: Heading,
        params: LineParams,
    },
    TaskFailed {
        heading: Heading,
        reason: String,
    },
    MissingCandidate {
        heading: Heading,
    },
    PoolFailed {
        reason: String,
    },
    IterationCap {
        limit: usize,
    },
}

impl FitErr {
    /// Returns the name of the stage that produced this error.
    pub fn stage(&self) -> &'static str {
        match self {
            FitErr::EmptyDataset
            | FitErr::InvalidStepSize(_)
            | FitErr::NonFiniteStart { .. }
            | FitErr::Config(_)
            | FitErr::Io(_) => "configuration",
            FitErr::NonFiniteError { .. }
            | FitErr::TaskFailed { .. }
            | FitErr::MissingCandidate { .. }
            | FitErr::PoolFailed { .. } => "evaluation",
            FitErr::IterationCap { .. } => "driver",
        }
    }
}

impl Display for FitErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FitErr::EmptyDataset => f.write_str("the dataset has no points"),
            FitErr::InvalidStepSize(step) => {
                write!(f, "the step size must be finite and positive, got {step}")
            }
            FitErr::NonFiniteStart { params } => {
                write!(f, "the initial guess {params} has a non finite error")
            }
            FitErr::Config(e) => write!(f, "invalid configuration: {e}"),
            FitErr::Io(e) => write!(f, "io error: {e}"),
            FitErr::NonFiniteError { heading, params } => write!(
                f,
                "evaluating {heading} produced a non finite error at {params}"
            ),
            FitErr::TaskFailed { heading, reason } => {
                write!(f, "the {heading} evaluation task failed: {reason}")
            }
            FitErr::MissingCandidate { heading } => {
                write!(f, "the iteration finished without a {heading} candidate")
            }
            FitErr::PoolFailed { reason } => {
                write!(f, "the evaluation pool failed: {reason}")
            }
            FitErr::IterationCap { limit } => {
                write!(f, "the search didn't converge within {limit} iterations")
            }
        }
    }
}

impl Error for FitErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            FitErr::Config(e) => Some(e),
            FitErr::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for FitErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for FitErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Config(value)
    }
}
