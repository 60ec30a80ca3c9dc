use crate::cli::{FitnessKindArg, SamplerKindArg, StrategyKindArg};
use void_dock::core::fitness::target::{DEFAULT_SIGMA, DEFAULT_TARGET};
use void_dock::core::fitness::threshold::DEFAULT_INVERSE_CUTOFF;
use void_dock::core::fitness::DEFAULT_THRESHOLD;
use void_dock::core::sampling::grid::{DEFAULT_GRID_DENSITY, DEFAULT_GRID_EXTENT};
use void_dock::core::sampling::uniform::DEFAULT_NUM_POINTS;
use void_dock::engine::config::ATTEMPTS;
use void_dock::engine::constraint::DEFAULT_SPHERE_RADIUS;

pub struct DefaultsConfig {
    pub strategy: StrategyKindArg,
    pub attempts: usize,
    pub sampler: SamplerKindArg,
    pub extent: f64,
    pub density: usize,
    pub num_points: usize,
    pub sphere: f64,
    pub fitness: FitnessKindArg,
    pub threshold: f64,
    pub cutoff: f64,
    pub target: f64,
    pub sigma: f64,
    pub num_outputs: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKindArg::Batch,
            attempts: ATTEMPTS,
            // A localized grid needs explicit centers; the whole cell is the safer default.
            sampler: SamplerKindArg::CellGrid,
            extent: DEFAULT_GRID_EXTENT,
            density: DEFAULT_GRID_DENSITY,
            num_points: DEFAULT_NUM_POINTS,
            sphere: DEFAULT_SPHERE_RADIUS,
            fitness: FitnessKindArg::MinDistance,
            threshold: DEFAULT_THRESHOLD,
            cutoff: DEFAULT_INVERSE_CUTOFF,
            target: DEFAULT_TARGET,
            sigma: DEFAULT_SIGMA,
            num_outputs: 1,
        }
    }
}
