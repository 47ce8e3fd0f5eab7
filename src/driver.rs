use std::{
    fmt::{self, Display},
    num::NonZeroUsize,
    time::{Duration, Instant},
};

use log::{info, warn};

use crate::{
    error::{FitErr, Result},
    model::{LineParams, max_residual},
    search::{Phase, SearchCoordinator, dispatch::Dispatcher},
};

/// The outcome of a finished search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitReport {
    pub params: LineParams,
    pub error: f64,
    pub iterations: usize,
    pub max_residual: f64,
    pub elapsed: Duration,
}

impl FitReport {
    /// The elapsed time line printed after the result.
    pub fn elapsed_line(&self) -> String {
        format!(
            "Time elapsed was {}ns or {:.9}s",
            self.elapsed.as_nanos(),
            self.elapsed.as_secs_f64()
        )
    }
}

impl Display for FitReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "minimum m,c is {:.6},{:.6} with error {:.6}",
            self.params.m, self.params.c, self.error
        )
    }
}

/// Runs a search to completion and reports the result.
pub struct Driver<D: Dispatcher> {
    coordinator: SearchCoordinator<D>,
    max_iterations: Option<NonZeroUsize>,
}

impl<D: Dispatcher> Driver<D> {
    /// Creates a new `Driver`.
    ///
    /// # Arguments
    /// * `coordinator` - The search to run.
    /// * `max_iterations` - An optional limit of adopted moves. The iteration that
    ///   confirms convergence isn't counted, a search that needs one more move fails.
    ///
    /// # Returns
    /// A new `Driver` instance.
    pub fn new(coordinator: SearchCoordinator<D>, max_iterations: Option<NonZeroUsize>) -> Self {
        Self {
            coordinator,
            max_iterations,
        }
    }

    /// Iterates until the search converges.
    ///
    /// # Returns
    /// The final report, or the first error of the run. Nothing is reported on failure.
    pub async fn run(mut self) -> Result<FitReport> {
        let start = Instant::now();
        let mut rounds = 0;

        while self.coordinator.step().await? == Phase::Iterating {
            rounds += 1;

            if let Some(limit) = self.max_iterations.filter(|limit| rounds > limit.get()) {
                let rms = self.coordinator.state().best_error;
                warn!(rms = rms; "iteration cap of {limit} reached");
                return Err(FitErr::IterationCap { limit: limit.get() });
            }
        }

        let elapsed = start.elapsed();
        let state = self.coordinator.state();
        let report = FitReport {
            params: state.best,
            error: state.best_error,
            iterations: state.iterations,
            max_residual: max_residual(state.best, self.coordinator.dataset()),
            elapsed,
        };

        info!(
            iterations = report.iterations,
            rms = report.error,
            max_residual = report.max_residual,
            elapsed_ns = elapsed.as_nanos() as u64;
            "search finished at {}", report.params
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dataset::Dataset, search::dispatch::TaskDispatch};

    fn coordinator(start: LineParams, step: f64) -> SearchCoordinator<TaskDispatch> {
        let ds = Dataset::from_pairs([(0., 1.), (1., 2.), (2., 3.), (3., 4.)]).unwrap();
        SearchCoordinator::new(ds, start, step, TaskDispatch::new()).unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn runs_to_convergence() {
        let driver = Driver::new(coordinator(LineParams::new(0., 0.), 0.5), None);
        let report = driver.run().await.unwrap();

        assert_eq!(report.params, LineParams::new(1., 1.));
        assert_eq!(report.error, 0.);
        assert_eq!(report.max_residual, 0.);
        assert_eq!(report.iterations, 2);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn iteration_cap() {
        let cap = NonZeroUsize::new(1).unwrap();
        let driver = Driver::new(coordinator(LineParams::new(0., 0.), 0.5), Some(cap));

        let res = driver.run().await;
        assert!(matches!(res, Err(FitErr::IterationCap { limit: 1 })));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn cap_equal_to_the_moves_needed() {
        let cap = NonZeroUsize::new(2).unwrap();
        let driver = Driver::new(coordinator(LineParams::new(0., 0.), 0.5), Some(cap));

        let report = driver.run().await.unwrap();
        assert_eq!(report.iterations, 2);
        assert_eq!(report.params, LineParams::new(1., 1.));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn cap_is_not_hit_when_converging_first() {
        let cap = NonZeroUsize::new(3).unwrap();
        let driver = Driver::new(coordinator(LineParams::new(0., 0.), 0.5), Some(cap));
        assert!(driver.run().await.is_ok());
    }

    #[test]
    fn report_lines() {
        let report = FitReport {
            params: LineParams::new(1.2, 20.83),
            error: 9.863998833738789,
            iterations: 1083,
            max_residual: 0.,
            elapsed: Duration::from_millis(1500),
        };

        assert_eq!(
            report.to_string(),
            "minimum m,c is 1.200000,20.830000 with error 9.863999"
        );
        assert_eq!(
            report.elapsed_line(),
            "Time elapsed was 1500000000ns or 1.500000000s"
        );
    }
}
