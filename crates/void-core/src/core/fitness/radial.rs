use super::{Fitness, FitnessError, PENALTY};
use crate::core::models::complex::Complex;
use nalgebra::Point3;

/// Keeps the guest inside a sphere around a fixed point.
///
/// The score is `radius - max_i |guest_i - center|`, so it turns negative as soon as any
/// guest atom leaves the sphere. Distances are plain Cartesian; the center is expected to
/// lie in the same image as the sampled points.
#[derive(Debug, Clone, PartialEq)]
pub struct MaxRadialDistance {
    pub center: Point3<f64>,
    pub radius: f64,
}

impl MaxRadialDistance {
    pub fn new(center: Point3<f64>, radius: f64) -> Result<Self, FitnessError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(FitnessError::InvalidParameter {
                name: "radius",
                value: radius,
            });
        }
        Ok(Self { center, radius })
    }
}

impl Fitness for MaxRadialDistance {
    fn name(&self) -> &'static str {
        "max-radial-distance"
    }

    fn score(&self, complex: &Complex) -> f64 {
        let coords = complex.guest().cart_coords();
        if coords.is_empty() {
            return PENALTY;
        }
        let farthest = coords
            .iter()
            .map(|p| (p - self.center).norm())
            .fold(0.0, f64::max);
        self.radius - farthest
    }
}
