use std::panic::{self, AssertUnwindSafe};

use rayon::prelude::*;
use tokio::task;

use super::Dispatcher;
use crate::{
    dataset::Dataset,
    error::{FitErr, Result},
    model::LineParams,
    search::{COMPASS_POINTS, Candidate, Heading, Slots, evaluate},
};

/// Evaluates the headings as jobs of the rayon thread pool.
///
/// The whole rayon pass runs on tokio's blocking pool, so any tokio runtime
/// flavor can drive it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PoolDispatch;

impl PoolDispatch {
    /// Creates a new `PoolDispatch` dispatcher.
    ///
    /// # Returns
    /// A new `PoolDispatch` instance.
    pub fn new() -> Self {
        Self
    }

    /// The blocking implementation of `fan_out`.
    fn evaluate_all(
        base: LineParams,
        step: f64,
        dataset: &Dataset,
    ) -> Result<[Candidate; COMPASS_POINTS]> {
        let results: Vec<_> = Heading::ALL
            .par_iter()
            .map(|&heading| guarded(heading, || evaluate(base, heading, step, dataset)))
            .collect();

        let mut slots = Slots::new();
        for candidate in results {
            slots.insert(candidate?);
        }

        slots.seal()
    }
}

/// Runs the evaluation of `heading`, turning a panic into `FitErr::TaskFailed`.
fn guarded<F>(heading: Heading, eval: F) -> Result<Candidate>
where
    F: FnOnce() -> Result<Candidate>,
{
    panic::catch_unwind(AssertUnwindSafe(eval)).unwrap_or_else(|payload| {
        let reason = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "panicked".to_string());

        Err(FitErr::TaskFailed { heading, reason })
    })
}

impl Dispatcher for PoolDispatch {
    async fn fan_out(
        &self,
        base: LineParams,
        step: f64,
        dataset: &Dataset,
    ) -> Result<[Candidate; COMPASS_POINTS]> {
        let dataset = dataset.clone();

        task::spawn_blocking(move || Self::evaluate_all(base, step, &dataset))
            .await
            .map_err(|e| FitErr::PoolFailed {
                reason: e.to_string(),
            })?
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{error::FitErr, search::dispatch::TaskDispatch};

    fn dataset() -> Dataset {
        let pairs = (0..200).map(|i| {
            let x = i as f64 * 0.37;
            (x, 1.9 * x - 4.2 + (i as f64 * 1.3).cos())
        });
        Dataset::from_pairs(pairs).unwrap()
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn both_dispatchers_agree() {
        let ds = dataset();
        let base = LineParams::new(0.3, 2.);

        let pooled = PoolDispatch::new().fan_out(base, 0.05, &ds).await.unwrap();
        let tasked = TaskDispatch::new().fan_out(base, 0.05, &ds).await.unwrap();

        assert_eq!(pooled, tasked);
        for (i, c) in pooled.iter().enumerate() {
            assert_eq!(c.heading, Heading::ALL[i]);
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn repeated_fan_out_is_bit_identical() {
        let ds = dataset();
        let base = LineParams::new(-1., 0.5);

        let first = TaskDispatch::new().fan_out(base, 0.01, &ds).await.unwrap();
        for _ in 0..50 {
            let tasked = TaskDispatch::new().fan_out(base, 0.01, &ds).await.unwrap();
            let pooled = PoolDispatch::new().fan_out(base, 0.01, &ds).await.unwrap();

            for ((a, b), c) in first.iter().zip(&tasked).zip(&pooled) {
                assert_eq!(a.error.to_bits(), b.error.to_bits());
                assert_eq!(a.error.to_bits(), c.error.to_bits());
            }
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn failure_fails_the_whole_fan_out() {
        let ds = Dataset::from_pairs([(1., 1.), (f64::NAN, 0.)]).unwrap();
        let base = LineParams::new(1., 0.);

        let res = PoolDispatch::new().fan_out(base, 0.1, &ds).await;
        assert!(matches!(res, Err(FitErr::NonFiniteError { .. })));

        let res = TaskDispatch::new().fan_out(base, 0.1, &ds).await;
        assert!(matches!(res, Err(FitErr::NonFiniteError { .. })));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn dispatchers_report_the_same_failure() {
        // Any move with a non zero slope overflows on the huge sample.
        let ds = Dataset::from_pairs([(0., 1.), (1e300, 0.)]).unwrap();
        let base = LineParams::new(0., 0.);

        let pooled = PoolDispatch::new().fan_out(base, 0.5, &ds).await;
        let tasked = TaskDispatch::new().fan_out(base, 0.5, &ds).await;

        for res in [pooled, tasked] {
            assert!(matches!(
                res,
                Err(FitErr::NonFiniteError {
                    heading: Heading::NorthEast,
                    ..
                })
            ));
        }
    }

    #[tokio::test]
    async fn runs_on_a_current_thread_runtime() {
        let ds = Dataset::from_pairs([(0., 1.), (1., 2.)]).unwrap();
        let base = LineParams::new(0.5, 0.5);

        let pooled = PoolDispatch::new().fan_out(base, 0.5, &ds).await.unwrap();
        assert_eq!(pooled[Heading::NorthEast.index()].error, 0.);
    }

    #[test]
    fn panics_become_task_failures() {
        let res = guarded(Heading::West, || panic!("slot exploded"));
        match res {
            Err(FitErr::TaskFailed { heading, reason }) => {
                assert_eq!(heading, Heading::West);
                assert_eq!(reason, "slot exploded");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
