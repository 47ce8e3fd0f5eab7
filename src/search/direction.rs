use std::fmt::{self, Display};

/// The amount of directions evaluated on every iteration.
pub const COMPASS_POINTS: usize = 8;

/// An offset in `(m, c)` space, `om` moves the slope and `oc` the intercept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Direction {
    pub om: f64,
    pub oc: f64,
}

/// One of the eight compass points of the search.
///
/// The declaration order is the tie-break order: when two headings produce the
/// same error the one declared first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Heading {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Heading {
    /// Every heading, in tie-break order.
    pub const ALL: [Heading; COMPASS_POINTS] = [
        Heading::North,
        Heading::NorthEast,
        Heading::East,
        Heading::SouthEast,
        Heading::South,
        Heading::SouthWest,
        Heading::West,
        Heading::NorthWest,
    ];

    /// The slot of this heading in a per iteration result array.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// The `(m, c)` offset this heading points to.
    pub fn direction(self) -> Direction {
        let (om, oc) = match self {
            Heading::North => (0., 1.),
            Heading::NorthEast => (1., 1.),
            Heading::East => (1., 0.),
            Heading::SouthEast => (1., -1.),
            Heading::South => (0., -1.),
            Heading::SouthWest => (-1., -1.),
            Heading::West => (-1., 0.),
            Heading::NorthWest => (-1., 1.),
        };

        Direction { om, oc }
    }

    pub fn label(self) -> &'static str {
        match self {
            Heading::North => "N",
            Heading::NorthEast => "NE",
            Heading::East => "E",
            Heading::SouthEast => "SE",
            Heading::South => "S",
            Heading::SouthWest => "SW",
            Heading::West => "W",
            Heading::NorthWest => "NW",
        }
    }
}

impl Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_declaration_order() {
        for (i, heading) in Heading::ALL.into_iter().enumerate() {
            assert_eq!(heading.index(), i);
        }
    }

    #[test]
    fn compass_offsets() {
        let offsets: Vec<(f64, f64)> = Heading::ALL
            .iter()
            .map(|h| h.direction())
            .map(|d| (d.om, d.oc))
            .collect();

        assert_eq!(
            offsets,
            vec![
                (0., 1.),
                (1., 1.),
                (1., 0.),
                (1., -1.),
                (0., -1.),
                (-1., -1.),
                (-1., 0.),
                (-1., 1.),
            ]
        );
    }

    #[test]
    fn opposite_headings_cancel() {
        for i in 0..COMPASS_POINTS / 2 {
            let a = Heading::ALL[i].direction();
            let b = Heading::ALL[i + COMPASS_POINTS / 2].direction();
            assert_eq!(a.om + b.om, 0.);
            assert_eq!(a.oc + b.oc, 0.);
        }
    }
}
