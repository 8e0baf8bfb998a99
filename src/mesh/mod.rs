//! Triangular mesh topology for the reconstruction kernel.
//!
//! The kernel never builds or mutates meshes during a run; it consumes an
//! immutable [`TriangleTopology`] view assembled once per mesh. A structured
//! rectangular triangulation builder is provided for tests and benchmarks.

mod topology;

pub use topology::{NodeAverageTables, TriangleTopology};
