use super::{COMPASS_POINTS, Candidate, Heading};
use crate::error::{FitErr, Result};

/// One result slot per compass heading.
///
/// Evaluations may finish in any order, each one lands in the slot of its own
/// heading and nothing is compared until the slots are sealed.
#[derive(Debug, Default)]
pub struct Slots {
    inner: [Option<Candidate>; COMPASS_POINTS],
}

impl Slots {
    /// Creates a new empty `Slots`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `candidate` in the slot of its heading.
    pub fn insert(&mut self, candidate: Candidate) {
        self.inner[candidate.heading.index()] = Some(candidate);
    }

    /// How many slots have been filled so far.
    #[cfg(test)]
    fn filled(&self) -> usize {
        self.inner.iter().flatten().count()
    }

    /// Consumes the slots once every evaluation reported.
    ///
    /// # Returns
    /// The candidates in heading order, or `FitErr::MissingCandidate` naming the
    /// first empty slot.
    pub fn seal(self) -> Result<[Candidate; COMPASS_POINTS]> {
        match self.inner {
            [
                Some(n),
                Some(ne),
                Some(e),
                Some(se),
                Some(s),
                Some(sw),
                Some(w),
                Some(nw),
            ] => Ok([n, ne, e, se, s, sw, w, nw]),
            partial => {
                let missing = partial.iter().position(Option::is_none).unwrap_or_default();
                Err(FitErr::MissingCandidate {
                    heading: Heading::ALL[missing],
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LineParams;

    fn candidate(heading: Heading) -> Candidate {
        Candidate {
            params: LineParams::new(heading.index() as f64, 0.),
            error: 1.,
            heading,
        }
    }

    #[test]
    fn seals_in_heading_order() {
        let mut slots = Slots::new();
        for heading in Heading::ALL.into_iter().rev() {
            slots.insert(candidate(heading));
        }
        assert_eq!(slots.filled(), COMPASS_POINTS);

        let sealed = slots.seal().unwrap();
        for (i, c) in sealed.iter().enumerate() {
            assert_eq!(c.heading, Heading::ALL[i]);
        }
    }

    #[test]
    fn missing_slot() {
        let mut slots = Slots::new();
        for heading in Heading::ALL {
            if heading != Heading::SouthEast {
                slots.insert(candidate(heading));
            }
        }
        assert_eq!(slots.filled(), COMPASS_POINTS - 1);

        assert!(matches!(
            slots.seal(),
            Err(FitErr::MissingCandidate {
                heading: Heading::SouthEast
            })
        ));
    }
}
