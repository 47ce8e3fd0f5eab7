use super::Heading;
use crate::{
    dataset::Dataset,
    error::{FitErr, Result},
    model::{LineParams, rms_error},
};

/// A line produced by moving one step from the base of an iteration, together with its error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub params: LineParams,
    pub error: f64,
    pub heading: Heading,
}

/// Evaluates a single compass direction.
///
/// Only reads its arguments, so any amount of evaluations can run at the same
/// time over the same dataset.
///
/// # Arguments
/// * `base` - The best line at the start of the iteration.
/// * `heading` - Which direction to step in.
/// * `step` - The size of the step.
/// * `dataset` - The samples to measure the candidate against.
///
/// # Returns
/// The candidate or `FitErr::NonFiniteError` if its error isn't a finite number.
pub fn evaluate(
    base: LineParams,
    heading: Heading,
    step: f64,
    dataset: &Dataset,
) -> Result<Candidate> {
    let params = base.offset(heading.direction(), step);
    let error = rms_error(params, dataset);

    if !error.is_finite() {
        return Err(FitErr::NonFiniteError { heading, params });
    }

    Ok(Candidate {
        params,
        error,
        heading,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_from_the_base() {
        let ds = Dataset::from_pairs([(0., 1.), (1., 2.)]).unwrap();
        let base = LineParams::new(0.5, 0.5);

        let candidate = evaluate(base, Heading::NorthEast, 0.5, &ds).unwrap();
        assert_eq!(candidate.params, LineParams::new(1., 1.));
        assert_eq!(candidate.error, 0.);
        assert_eq!(candidate.heading, Heading::NorthEast);
    }

    #[test]
    fn error_matches_the_model() {
        let ds = Dataset::from_pairs([(0., 1.), (1., 2.), (2., 2.)]).unwrap();
        let base = LineParams::new(0., 0.);

        let candidate = evaluate(base, Heading::West, 0.1, &ds).unwrap();
        let expected = rms_error(LineParams::new(-0.1, 0.), &ds);
        assert_eq!(candidate.error, expected);
    }

    #[test]
    fn non_finite_error_fails() {
        let ds = Dataset::from_pairs([(0., 1.), (f64::INFINITY, 2.)]).unwrap();
        let base = LineParams::new(1., 0.);

        let res = evaluate(base, Heading::South, 0.1, &ds);
        assert!(matches!(
            res,
            Err(FitErr::NonFiniteError {
                heading: Heading::South,
                ..
            })
        ));
    }
}
