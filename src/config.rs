use std::{
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{error::Result, model::LineParams};

pub const DEFAULT_INITIAL_M: f64 = 1.3;
pub const DEFAULT_INITIAL_C: f64 = 10.;
pub const DEFAULT_STEP_SIZE: f64 = 0.01;

/// Where the samples of a fit come from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetSpec {
    /// The reference dataset compiled into the crate.
    #[default]
    Embedded,
    /// A JSON file holding an array of `[x, y]` pairs.
    Local { path: PathBuf },
    Inline { points: Vec<(f64, f64)> },
}

/// How the evaluations of an iteration are fanned out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchSpec {
    #[default]
    Tasks,
    Pool,
}

/// The configuration of a fit, every field falls back to its default when missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FitConfig {
    pub initial_m: f64,
    pub initial_c: f64,
    pub step_size: f64,
    pub max_iterations: Option<NonZeroUsize>,
    pub dispatch: DispatchSpec,
    pub dataset: DatasetSpec,
}

impl Default for FitConfig {
    fn default() -> Self {
        Self {
            initial_m: DEFAULT_INITIAL_M,
            initial_c: DEFAULT_INITIAL_C,
            step_size: DEFAULT_STEP_SIZE,
            max_iterations: None,
            dispatch: DispatchSpec::default(),
            dataset: DatasetSpec::default(),
        }
    }
}

impl FitConfig {
    /// Parses a configuration from a JSON string.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads a configuration from a JSON file.
    ///
    /// # Arguments
    /// * `path` - The path of the file.
    ///
    /// # Returns
    /// The configuration or an io or parsing error.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// The line the search starts from.
    pub fn initial_guess(&self) -> LineParams {
        LineParams::new(self.initial_m, self.initial_c)
    }
}
