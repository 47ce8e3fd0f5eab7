use log::info;

use super::Session;
use crate::{
    config::{DatasetSpec, DispatchSpec, FitConfig},
    dataset::Dataset,
    driver::Driver,
    error::Result,
    search::{
        SearchCoordinator,
        dispatch::{Dispatcher, PoolDispatch, TaskDispatch},
    },
};

/// Builds `Session`s given a configuration.
#[derive(Debug, Default)]
pub struct SessionBuilder;

impl SessionBuilder {
    /// Creates a new `SessionBuilder`.
    ///
    /// # Returns
    /// A new `SessionBuilder` instance.
    pub fn new() -> Self {
        Self
    }

    /// Builds a new `Session` following a configuration.
    ///
    /// # Arguments
    /// * `config` - The configuration of the fit.
    ///
    /// # Returns
    /// A session ready to run, or the configuration error that prevents it.
    pub fn build(&self, config: FitConfig) -> Result<Box<dyn Session>> {
        let dataset = self.resolve_dataset(&config.dataset)?;
        info!(points = dataset.len(); "dataset ready");

        match config.dispatch {
            DispatchSpec::Tasks => self.resolve_driver(&config, dataset, TaskDispatch::new()),
            DispatchSpec::Pool => self.resolve_driver(&config, dataset, PoolDispatch::new()),
        }
    }

    /// Resolves the `Dataset` for this session.
    ///
    /// # Arguments
    /// * `spec` - Where to take the samples from.
    ///
    /// # Returns
    /// The dataset or the error reading or validating it.
    fn resolve_dataset(&self, spec: &DatasetSpec) -> Result<Dataset> {
        match spec {
            DatasetSpec::Embedded => Ok(Dataset::reference()),
            DatasetSpec::Local { path } => Dataset::from_json_file(path),
            DatasetSpec::Inline { points } => Dataset::from_pairs(points.iter().copied()),
        }
    }

    /// Resolves the `Driver` once the dispatcher is known.
    fn resolve_driver<D>(
        &self,
        config: &FitConfig,
        dataset: Dataset,
        dispatcher: D,
    ) -> Result<Box<dyn Session>>
    where
        D: Dispatcher + Sync + 'static,
    {
        let coordinator =
            SearchCoordinator::new(dataset, config.initial_guess(), config.step_size, dispatcher)?;
        Ok(Box::new(Driver::new(coordinator, config.max_iterations)))
    }
}
