use super::Candidate;
use crate::model::LineParams;

/// The two states of a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Iterating,
    Converged,
}

/// Everything a search carries from one iteration to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchState {
    pub best: LineParams,
    pub best_error: f64,
    pub step_size: f64,
    pub phase: Phase,
    pub iterations: usize,
}

impl SearchState {
    pub(super) fn new(best: LineParams, best_error: f64, step_size: f64) -> Self {
        Self {
            best,
            best_error,
            step_size,
            phase: Phase::Iterating,
            iterations: 0,
        }
    }

    /// Adopts `selected` if it strictly improves on the current best, converges otherwise.
    pub(super) fn advance(&mut self, selected: &Candidate) -> Phase {
        if selected.error < self.best_error {
            self.best = selected.params;
            self.best_error = selected.error;
            self.iterations += 1;
        } else {
            self.phase = Phase::Converged;
        }

        self.phase
    }

    #[inline]
    pub fn is_converged(&self) -> bool {
        self.phase == Phase::Converged
    }
}
