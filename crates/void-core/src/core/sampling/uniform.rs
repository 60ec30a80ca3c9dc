use super::{Sampler, SamplingError};
use crate::core::models::structure::Structure;
use nalgebra::Point3;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub const DEFAULT_NUM_POINTS: usize = 100;

/// Points drawn uniformly inside the unit cell.
///
/// With a seed the same host always yields the same points.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformSampler {
    pub num_points: usize,
    pub seed: Option<u64>,
}

impl Default for UniformSampler {
    fn default() -> Self {
        Self {
            num_points: DEFAULT_NUM_POINTS,
            seed: None,
        }
    }
}

impl Sampler for UniformSampler {
    fn name(&self) -> &'static str {
        "uniform"
    }

    fn get_points(&self, host: &Structure) -> Result<Vec<Point3<f64>>, SamplingError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let lattice = host.lattice();
        Ok((0..self.num_points)
            .map(|_| {
                let frac = Point3::new(
                    rng.gen_range(0.0..1.0),
                    rng.gen_range(0.0..1.0),
                    rng.gen_range(0.0..1.0),
                );
                lattice.cartesian(&frac)
            })
            .collect())
    }
}
