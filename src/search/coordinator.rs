use log::{debug, info};

use super::{COMPASS_POINTS, Candidate, Phase, SearchState, dispatch::Dispatcher};
use crate::{
    dataset::Dataset,
    error::{FitErr, Result},
    model::{LineParams, rms_error},
};

/// Owns the state of a compass search and runs it one iteration at a time.
///
/// The state is only written between iterations, the dispatched evaluations get a
/// copy of the best line and the step size and never see it change.
pub struct SearchCoordinator<D: Dispatcher> {
    dataset: Dataset,
    dispatcher: D,
    state: SearchState,
}

impl<D: Dispatcher> SearchCoordinator<D> {
    /// Creates a new `SearchCoordinator`.
    ///
    /// # Arguments
    /// * `dataset` - The samples to fit.
    /// * `start` - The initial guess.
    /// * `step_size` - The fixed step of every move.
    /// * `dispatcher` - How to fan out the evaluations.
    ///
    /// # Returns
    /// A new coordinator ready to iterate, `FitErr::InvalidStepSize` if `step_size`
    /// isn't finite and positive or `FitErr::NonFiniteStart` if the initial guess
    /// can't be evaluated.
    pub fn new(dataset: Dataset, start: LineParams, step_size: f64, dispatcher: D) -> Result<Self> {
        if !step_size.is_finite() || step_size <= 0. {
            return Err(FitErr::InvalidStepSize(step_size));
        }

        let best_error = rms_error(start, &dataset);
        if !start.is_finite() || !best_error.is_finite() {
            return Err(FitErr::NonFiniteStart { params: start });
        }

        debug!(
            points = dataset.len(),
            step_size = step_size,
            rms = best_error;
            "starting search at {start}"
        );

        Ok(Self {
            dataset,
            dispatcher,
            state: SearchState::new(start, best_error, step_size),
        })
    }

    pub fn state(&self) -> &SearchState {
        &self.state
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[inline]
    pub fn is_converged(&self) -> bool {
        self.state.is_converged()
    }

    /// Runs a single iteration of the search.
    ///
    /// Evaluates all the headings, waits for every one of them and moves to the
    /// best candidate if it strictly improves on the current best. On failure the
    /// state is left as it was before the iteration.
    ///
    /// # Returns
    /// The phase after the iteration, a converged search stays converged.
    pub async fn step(&mut self) -> Result<Phase> {
        if self.state.is_converged() {
            return Ok(Phase::Converged);
        }

        let SearchState {
            best, step_size, ..
        } = self.state;

        let candidates = self
            .dispatcher
            .fan_out(best, step_size, &self.dataset)
            .await?;

        let selected = select(&candidates);
        let phase = self.state.advance(selected);

        match phase {
            Phase::Iterating => debug!(
                iteration = self.state.iterations,
                rms = self.state.best_error;
                "moved {} to {}", selected.heading, self.state.best
            ),
            Phase::Converged => info!(
                iterations = self.state.iterations,
                rms = self.state.best_error;
                "no heading improves on {}", self.state.best
            ),
        }

        Ok(phase)
    }
}

/// Picks the candidate with the smallest error.
///
/// Ties go to the heading that comes first in compass order, the comparison only
/// runs over the complete set so the outcome never depends on timing.
pub fn select(candidates: &[Candidate; COMPASS_POINTS]) -> &Candidate {
    let mut selected = &candidates[0];

    for candidate in &candidates[1..] {
        if candidate.error < selected.error {
            selected = candidate;
        }
    }

    selected
}
