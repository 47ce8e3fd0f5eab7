use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::search::Direction;

/// The parameters of the line `y = m * x + c`.
///
/// A search only ever replaces a `LineParams` as a whole, it's never updated in place.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LineParams {
    pub m: f64,
    pub c: f64,
}

impl LineParams {
    /// Creates a new `LineParams`.
    ///
    /// # Arguments
    /// * `m` - The slope of the line.
    /// * `c` - The intercept of the line.
    ///
    /// # Returns
    /// A new `LineParams` instance.
    pub fn new(m: f64, c: f64) -> Self {
        Self { m, c }
    }

    /// The value the line predicts at `x`.
    #[inline]
    pub fn predict(&self, x: f64) -> f64 {
        self.m * x + self.c
    }

    /// Moves `step` units along `direction`.
    ///
    /// # Arguments
    /// * `direction` - The compass offset in `(m, c)` space.
    /// * `step` - The magnitude of the move.
    ///
    /// # Returns
    /// The displaced parameters, `self` is left untouched.
    pub fn offset(&self, direction: Direction, step: f64) -> Self {
        Self {
            m: self.m + direction.om * step,
            c: self.c + direction.oc * step,
        }
    }

    /// Whether both parameters are finite numbers.
    pub fn is_finite(&self) -> bool {
        self.m.is_finite() && self.c.is_finite()
    }
}

impl Display for LineParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.m, self.c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Heading;

    #[test]
    fn predict() {
        let line = LineParams::new(2., -1.);
        assert_eq!(line.predict(0.), -1.);
        assert_eq!(line.predict(3.), 5.);
    }

    #[test]
    fn offset_follows_the_direction() {
        let base = LineParams::new(1., 1.);

        let moved = base.offset(Heading::SouthEast.direction(), 0.5);
        assert_eq!(moved, LineParams::new(1.5, 0.5));

        let moved = base.offset(Heading::North.direction(), 0.25);
        assert_eq!(moved, LineParams::new(1., 1.25));
        assert_eq!(base, LineParams::new(1., 1.));
    }
}
