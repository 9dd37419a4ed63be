//! Lens positions and their platform classifications.
//!
//! A [`LensPosition`] is what callers ask for. A [`LensFacing`] is what the
//! platform reports for each camera. Which positions the platform can
//! express depends on its [`ApiLevel`].

mod facing;
mod position;

pub use facing::{facing_for_lollipop, facing_for_m, facing_table, ApiLevel, FacingTable, LensFacing};
pub use position::{LensPosition, ParseLensPositionError};
