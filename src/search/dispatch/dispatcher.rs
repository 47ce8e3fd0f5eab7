use crate::{
    dataset::Dataset,
    error::Result,
    model::LineParams,
    search::{COMPASS_POINTS, Candidate},
};

/// Fans the evaluation of every compass heading out and joins it back.
///
/// A `Dispatcher` only returns once all the headings reported, the candidates
/// are in heading order no matter the order in which they finished.
#[allow(unused)]
#[trait_variant::make(Dispatcher: Send)]
pub trait DispatcherTemplate: Clone {
    /// Should evaluate one candidate per heading from the same snapshot.
    ///
    /// # Arguments
    /// * `base` - The best line at the start of the iteration.
    /// * `step` - The step size of the search.
    /// * `dataset` - The samples every candidate is measured against.
    ///
    /// # Returns
    /// The candidates indexed by heading, or the first evaluation failure.
    async fn fan_out(
        &self,
        base: LineParams,
        step: f64,
        dataset: &Dataset,
    ) -> Result<[Candidate; COMPASS_POINTS]>;
}
