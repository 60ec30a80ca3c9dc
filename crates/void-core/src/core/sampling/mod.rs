//! Candidate insertion point generation.
//!
//! A [`Sampler`] turns a host structure into a list of Cartesian points at which the guest
//! may be placed. All samplers here are pure: they perform no I/O and never modify the host.

use crate::core::models::structure::Structure;
use nalgebra::Point3;
use thiserror::Error;

pub mod grid;
pub mod uniform;

pub use grid::{CellGridSampler, LocalizedGridSampler};
pub use uniform::UniformSampler;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SamplingError {
    #[error("Center index {index} is out of range for a host with {len} sites")]
    CenterOutOfRange { index: usize, len: usize },
    #[error("Invalid grid extent: {0}. Extent must be a positive, finite length")]
    InvalidExtent(f64),
}

/// Produces candidate guest insertion points for a host structure.
pub trait Sampler: Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    /// Returns the candidate points, in Cartesian coordinates.
    fn get_points(&self, host: &Structure) -> Result<Vec<Point3<f64>>, SamplingError>;
}
