//! Shape deformer
//!
//! Turns blob state plus the current clock into outlines. Both generators
//! are pure: the same noise field, parameters and time always give the same
//! points.

mod bands;
mod deform;

pub use bands::band_outline;
pub use deform::outline;
