use std::{fs, path::Path, slice, sync::Arc};

use log::debug;

use super::{Point, reference::REFERENCE};
use crate::error::{FitErr, Result};

/// An immutable, non empty and ordered collection of samples.
///
/// Cloning is cheap, every clone shares the same points so a `Dataset` can be
/// handed to as many evaluation tasks as needed without synchronization.
#[derive(Debug, Clone)]
pub struct Dataset {
    points: Arc<[Point]>,
}

impl Dataset {
    /// Creates a new `Dataset`.
    ///
    /// # Arguments
    /// * `points` - The samples, in order.
    ///
    /// # Returns
    /// A new `Dataset` or `FitErr::EmptyDataset` if there are no points.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.is_empty() {
            return Err(FitErr::EmptyDataset);
        }

        Ok(Self {
            points: Arc::from(points),
        })
    }

    /// Creates a new `Dataset` from `(x, y)` pairs.
    ///
    /// # Returns
    /// A new `Dataset` or `FitErr::EmptyDataset` if there are no pairs.
    pub fn from_pairs<I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        Self::new(pairs.into_iter().map(Point::from).collect())
    }

    /// The dataset compiled into the binary.
    pub fn reference() -> Self {
        Self {
            points: REFERENCE.iter().copied().map(Point::from).collect(),
        }
    }

    /// Reads a dataset from a JSON file holding an array of `[x, y]` pairs.
    ///
    /// # Arguments
    /// * `path` - The path of the file.
    ///
    /// # Returns
    /// A new `Dataset`, an io or parsing error if the file can't be read, or
    /// `FitErr::EmptyDataset` if the array is empty.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let pairs: Vec<(f64, f64)> = serde_json::from_str(&raw)?;

        debug!(points = pairs.len(); "loaded dataset file {}", path.display());
        Self::from_pairs(pairs)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether there are no points, never true for a built `Dataset`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Point> {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::{env, process};

    use super::*;
    use crate::dataset::REFERENCE_LEN;

    #[test]
    fn empty_is_rejected() {
        assert!(matches!(Dataset::new(vec![]), Err(FitErr::EmptyDataset)));
        assert!(matches!(
            Dataset::from_pairs(Vec::<(f64, f64)>::new()),
            Err(FitErr::EmptyDataset)
        ));
    }

    #[test]
    fn keeps_order() {
        let ds = Dataset::from_pairs([(1., 2.), (3., 4.), (0., -1.)]).unwrap();
        assert_eq!(ds.len(), 3);
        assert!(!ds.is_empty());
        assert_eq!(ds.points()[2], Point::new(0., -1.));
    }

    #[test]
    fn clones_share_points() {
        let ds = Dataset::from_pairs([(1., 2.)]).unwrap();
        let other = ds.clone();
        assert!(Arc::ptr_eq(&ds.points, &other.points));
    }

    #[test]
    fn reference() {
        let ds = Dataset::reference();
        assert_eq!(ds.len(), REFERENCE_LEN);
        assert_eq!(ds.points()[0], Point::new(82.75, 102.99));
        assert_eq!(ds.points()[REFERENCE_LEN - 1], Point::new(61.64, 91.63));
    }

    #[test]
    fn json_file() {
        let path = env::temp_dir().join(format!("compass_fit_dataset_{}.json", process::id()));
        fs::write(&path, "[[0.0, 1.0], [1.0, 2.0], [2.5, 3.5]]").unwrap();

        let ds = Dataset::from_json_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(ds.len(), 3);
        assert_eq!(ds.points()[2], Point::new(2.5, 3.5));
    }

    #[test]
    fn json_file_missing() {
        let path = env::temp_dir().join("compass_fit_this_file_does_not_exist.json");
        assert!(matches!(Dataset::from_json_file(path), Err(FitErr::Io(_))));
    }

    #[test]
    fn json_file_empty_array() {
        let path = env::temp_dir().join(format!("compass_fit_empty_{}.json", process::id()));
        fs::write(&path, "[]").unwrap();

        let res = Dataset::from_json_file(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(res, Err(FitErr::EmptyDataset)));
    }
}
