mod line;
mod rms;

pub use line::LineParams;
pub use rms::{max_residual, residuals, rms_error};
