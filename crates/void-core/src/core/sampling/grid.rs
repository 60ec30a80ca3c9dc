use super::{Sampler, SamplingError};
use crate::core::models::structure::Structure;
use crate::core::utils::geometry::linspace;
use nalgebra::{Point3, Vector3};
use tracing::{debug, instrument, warn};

pub const DEFAULT_GRID_EXTENT: f64 = 5.0;
pub const DEFAULT_GRID_DENSITY: usize = 6;

/// A cubic grid of points replicated around selected host atoms.
///
/// The grid spans `[-extent/2, extent/2]` along each Cartesian axis with `density` values
/// per axis, so every center contributes `density³` points. With no centers the sampler
/// yields nothing.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalizedGridSampler {
    pub extent: f64,
    pub density: usize,
    pub centers: Vec<usize>,
}

impl Default for LocalizedGridSampler {
    fn default() -> Self {
        Self {
            extent: DEFAULT_GRID_EXTENT,
            density: DEFAULT_GRID_DENSITY,
            centers: Vec::new(),
        }
    }
}

impl LocalizedGridSampler {
    pub fn new(extent: f64, density: usize, centers: Vec<usize>) -> Self {
        Self {
            extent,
            density,
            centers,
        }
    }

    /// Grid offsets centered on the origin.
    ///
    /// Ordering follows an xy-indexed meshgrid flattened row-major: y varies slowest,
    /// then x, then z.
    fn local_grid(&self) -> Vec<Vector3<f64>> {
        let axis = linspace(-self.extent / 2.0, self.extent / 2.0, self.density);
        let mut grid = Vec::with_capacity(axis.len().pow(3));
        for &y in &axis {
            for &x in &axis {
                for &z in &axis {
                    grid.push(Vector3::new(x, y, z));
                }
            }
        }
        grid
    }
}

impl Sampler for LocalizedGridSampler {
    fn name(&self) -> &'static str {
        "localized-grid"
    }

    #[instrument(level = "debug", skip_all, fields(extent = self.extent, density = self.density))]
    fn get_points(&self, host: &Structure) -> Result<Vec<Point3<f64>>, SamplingError> {
        if !self.extent.is_finite() || self.extent <= 0.0 {
            return Err(SamplingError::InvalidExtent(self.extent));
        }
        if self.centers.is_empty() {
            warn!("No grid centers configured; the localized grid sampler yields no points.");
            return Ok(Vec::new());
        }

        let grid = self.local_grid();
        let mut points = Vec::with_capacity(grid.len() * self.centers.len());
        for &index in &self.centers {
            let center = host
                .site_coords(index)
                .map_err(|_| SamplingError::CenterOutOfRange {
                    index,
                    len: host.len(),
                })?;
            debug!(index, ?center, "Replicating grid around center atom.");
            points.extend(grid.iter().map(|offset| center + offset));
        }
        Ok(points)
    }
}

/// A regular grid spanning the whole unit cell in fractional coordinates.
///
/// Points sit at `(i + 0.5) / density` along each lattice vector.
#[derive(Debug, Clone, PartialEq)]
pub struct CellGridSampler {
    pub density: usize,
}

impl Default for CellGridSampler {
    fn default() -> Self {
        Self {
            density: DEFAULT_GRID_DENSITY,
        }
    }
}

impl Sampler for CellGridSampler {
    fn name(&self) -> &'static str {
        "cell-grid"
    }

    fn get_points(&self, host: &Structure) -> Result<Vec<Point3<f64>>, SamplingError> {
        let n = self.density;
        let axis: Vec<f64> = (0..n).map(|i| (i as f64 + 0.5) / n as f64).collect();
        let lattice = host.lattice();

        let mut points = Vec::with_capacity(n.pow(3));
        for &a in &axis {
            for &b in &axis {
                for &c in &axis {
                    points.push(lattice.cartesian(&Point3::new(a, b, c)));
                }
            }
        }
        Ok(points)
    }
}
