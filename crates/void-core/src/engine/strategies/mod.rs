//! Per-point guest placement strategies.
//!
//! The [`Docker`](super::docker::Docker) decides *where* to dock; a [`DockingStrategy`]
//! decides *how* the guest is placed at a single candidate point. Strategies are stateless
//! and receive randomness from the caller so a seeded run is reproducible.

use super::context::DockingContext;
use super::error::EngineError;
use crate::core::models::complex::Complex;
use nalgebra::Point3;
use rand::rngs::StdRng;

pub mod batch;
pub mod serial;

pub use batch::BatchStrategy;
pub use serial::SerialStrategy;

pub trait DockingStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Attempts to place the guest at `point`, returning zero or more candidate complexes.
    fn dock_at_point(
        &self,
        ctx: &DockingContext,
        point: &Point3<f64>,
        attempts: usize,
        rng: &mut StdRng,
    ) -> Result<Vec<Complex>, EngineError>;
}

/// Strategy without a placement procedure. Every call fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct BaseStrategy;

impl DockingStrategy for BaseStrategy {
    fn name(&self) -> &'static str {
        "base"
    }

    fn dock_at_point(
        &self,
        _ctx: &DockingContext,
        _point: &Point3<f64>,
        _attempts: usize,
        _rng: &mut StdRng,
    ) -> Result<Vec<Complex>, EngineError> {
        Err(EngineError::UnsupportedStrategy {
            strategy: self.name(),
        })
    }
}
