use super::DockingStrategy;
use crate::core::models::complex::Complex;
use crate::core::utils::geometry::random_rotation;
use crate::engine::context::DockingContext;
use crate::engine::error::EngineError;
use nalgebra::Point3;
use rand::rngs::StdRng;
use tracing::trace;

/// Tries random orientations one at a time and keeps the first accepted one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerialStrategy;

impl DockingStrategy for SerialStrategy {
    fn name(&self) -> &'static str {
        "serial"
    }

    fn dock_at_point(
        &self,
        ctx: &DockingContext,
        point: &Point3<f64>,
        attempts: usize,
        rng: &mut StdRng,
    ) -> Result<Vec<Complex>, EngineError> {
        for attempt in 0..attempts {
            let complex = ctx.place_guest(point, &random_rotation(rng))?;
            if ctx.score(&complex) >= 0.0 {
                trace!(attempt, "Accepted orientation.");
                return Ok(vec![complex]);
            }
        }
        Ok(Vec::new())
    }
}
