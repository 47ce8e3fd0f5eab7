mod candidate;
mod coordinator;
mod direction;
pub mod dispatch;
mod slots;
mod state;

pub use candidate::{Candidate, evaluate};
pub use coordinator::{SearchCoordinator, select};
pub use direction::{COMPASS_POINTS, Direction, Heading};
pub use slots::Slots;
pub use state::{Phase, SearchState};
