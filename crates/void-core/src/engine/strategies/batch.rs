use super::DockingStrategy;
use crate::core::models::complex::Complex;
use crate::core::utils::geometry::random_rotation;
use crate::engine::context::DockingContext;
use crate::engine::error::EngineError;
use nalgebra::Point3;
use rand::rngs::StdRng;

/// Places the guest in `attempts` random orientations and returns all of them.
///
/// Scoring and filtering are left to the docker's ranking step.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatchStrategy;

impl DockingStrategy for BatchStrategy {
    fn name(&self) -> &'static str {
        "batch"
    }

    fn dock_at_point(
        &self,
        ctx: &DockingContext,
        point: &Point3<f64>,
        attempts: usize,
        rng: &mut StdRng,
    ) -> Result<Vec<Complex>, EngineError> {
        (0..attempts)
            .map(|_| ctx.place_guest(point, &random_rotation(rng)))
            .collect()
    }
}
