//! Time integration of centroid values.

mod update;

pub use update::update;
