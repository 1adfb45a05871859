pub mod analysis;
pub mod compute;
pub mod error;
pub mod generator;
pub mod models;
pub mod validation;

pub use compute::{DrawOutcome, compute_draw, compute_draw_with};
pub use error::{CombinationFault, DrawError};
