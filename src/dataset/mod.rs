mod dataset;
mod point;
mod reference;

pub use dataset::Dataset;
pub use point::Point;
pub use reference::REFERENCE_LEN;
