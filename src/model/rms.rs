use crate::{dataset::Dataset, model::LineParams};

/// Computes the root mean square of the residuals of `params` over `dataset`.
///
/// A `Dataset` is never empty, so the mean is always well defined. The result is
/// only non finite when the points or the parameters are.
///
/// # Arguments
/// * `params` - The line to evaluate.
/// * `dataset` - The samples to measure the line against.
///
/// # Returns
/// The RMS error, zero iff every point lies on the line.
pub fn rms_error(params: LineParams, dataset: &Dataset) -> f64 {
    let squared_sum: f64 = residuals(params, dataset).map(|r| r * r).sum();
    (squared_sum / dataset.len() as f64).sqrt()
}

/// Iterates over the residuals `(m * x + c) - y` of every point, in dataset order.
pub fn residuals(params: LineParams, dataset: &Dataset) -> impl Iterator<Item = f64> + '_ {
    dataset.iter().map(move |p| params.predict(p.x) - p.y)
}

/// The largest absolute residual of `params` over `dataset`.
pub fn max_residual(params: LineParams, dataset: &Dataset) -> f64 {
    residuals(params, dataset)
        .map(f64::abs)
        .fold(0., f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dataset(pairs: &[(f64, f64)]) -> Dataset {
        Dataset::from_pairs(pairs.iter().copied()).unwrap()
    }

    #[test]
    fn zero_on_the_line() {
        let ds = dataset(&[(0., 1.), (1., 2.), (2., 3.), (3., 4.)]);
        assert_eq!(rms_error(LineParams::new(1., 1.), &ds), 0.);
    }

    #[test]
    fn known_value() {
        // residuals -1, -2, -3, -4 => sqrt(30 / 4)
        let ds = dataset(&[(0., 1.), (1., 2.), (2., 3.), (3., 4.)]);
        let err = rms_error(LineParams::new(0., 0.), &ds);
        assert!((err - 7.5f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn positive_off_the_line() {
        let ds = dataset(&[(0., 1.), (1., 2.), (2., 3.5)]);
        let err = rms_error(LineParams::new(1., 1.), &ds);
        assert!(err > 0.);
    }

    #[test]
    fn invariant_to_point_order() {
        let pairs = [(0.3, 1.7), (4.1, -2.), (2.2, 9.5), (-7.4, 0.1), (1.1, 1.1)];
        let mut reversed = pairs;
        reversed.reverse();

        let params = LineParams::new(0.7, -1.3);
        let a = rms_error(params, &dataset(&pairs));
        let b = rms_error(params, &dataset(&reversed));
        assert!((a - b).abs() < 1e-12);
    }

    #[test]
    fn non_finite_samples_propagate() {
        let ds = dataset(&[(0., 1.), (f64::NAN, 2.)]);
        assert!(rms_error(LineParams::new(1., 1.), &ds).is_nan());
    }

    #[test]
    fn largest_residual() {
        let ds = dataset(&[(0., 1.), (1., 5.), (2., 0.)]);
        assert_eq!(max_residual(LineParams::new(1., 1.), &ds), 3.);
    }
}
