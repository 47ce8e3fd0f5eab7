use log::trace;
use tokio::task;

use super::Dispatcher;
use crate::{
    dataset::Dataset,
    error::{FitErr, Result},
    model::LineParams,
    search::{COMPASS_POINTS, Candidate, Heading, Slots, evaluate},
};

/// Spawns one blocking tokio task per heading and awaits all of them.
///
/// Every task owns a copy of its heading and a handle to the shared dataset, the
/// tasks are dropped with the iteration that created them.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskDispatch;

impl TaskDispatch {
    /// Creates a new `TaskDispatch` dispatcher.
    ///
    /// # Returns
    /// A new `TaskDispatch` instance.
    pub fn new() -> Self {
        Self
    }
}

impl Dispatcher for TaskDispatch {
    async fn fan_out(
        &self,
        base: LineParams,
        step: f64,
        dataset: &Dataset,
    ) -> Result<[Candidate; COMPASS_POINTS]> {
        let handles = Heading::ALL.map(|heading| {
            let dataset = dataset.clone();
            let handle = task::spawn_blocking(move || evaluate(base, heading, step, &dataset));
            (heading, handle)
        });

        let mut slots = Slots::new();

        for (heading, handle) in handles {
            let candidate = handle.await.map_err(|e| FitErr::TaskFailed {
                heading,
                reason: e.to_string(),
            })??;

            trace!(rms = candidate.error; "{heading} evaluated");
            slots.insert(candidate);
        }

        slots.seal()
    }
}
