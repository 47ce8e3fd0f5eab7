//! Fits a line to a set of samples with a concurrent compass search.
//!
//! Every iteration evaluates the eight compass neighbours of the current best
//! `(m, c)` at the same time, waits for all of them and moves to the one with the
//! smallest RMS error, until none of them improves.

pub mod config;
pub mod dataset;
pub mod driver;
pub mod error;
pub mod model;
pub mod search;
pub mod session;

pub use config::{DatasetSpec, DispatchSpec, FitConfig};
pub use dataset::{Dataset, Point};
pub use driver::{Driver, FitReport};
pub use error::{FitErr, Result};
pub use model::{LineParams, rms_error};
pub use search::{Candidate, Heading, Phase, SearchCoordinator, SearchState};
pub use session::{Session, SessionBuilder};
