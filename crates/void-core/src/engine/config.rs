use super::constraint::SiteConstraint;
use super::strategies::{BaseStrategy, BatchStrategy, DockingStrategy, SerialStrategy};
use crate::core::fitness::{
    DistanceStatistic, Fitness, FitnessError, GaussianTarget, MaxRadialDistance,
    MeanDistanceFitness, MinDistanceFitness, MultipleFitness, SumInvDistanceFitness,
    ThresholdParams,
};
use crate::core::sampling::{CellGridSampler, LocalizedGridSampler, Sampler, UniformSampler};
use nalgebra::Point3;
use std::sync::Arc;
use thiserror::Error;

/// Default number of placement attempts per candidate point.
pub const ATTEMPTS: usize = 50;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: &'static str, reason: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum SamplerConfig {
    LocalizedGrid {
        extent: f64,
        density: usize,
        centers: Vec<usize>,
    },
    CellGrid {
        density: usize,
    },
    Uniform {
        num_points: usize,
        seed: Option<u64>,
    },
}

impl SamplerConfig {
    pub fn build(&self) -> Arc<dyn Sampler> {
        match self {
            SamplerConfig::LocalizedGrid {
                extent,
                density,
                centers,
            } => Arc::new(LocalizedGridSampler::new(*extent, *density, centers.clone())),
            SamplerConfig::CellGrid { density } => Arc::new(CellGridSampler { density: *density }),
            SamplerConfig::Uniform { num_points, seed } => Arc::new(UniformSampler {
                num_points: *num_points,
                seed: *seed,
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FitnessConfig {
    MinDistance {
        params: ThresholdParams,
    },
    MeanDistance {
        params: ThresholdParams,
    },
    SumInvDistance {
        params: ThresholdParams,
        cutoff: f64,
    },
    GaussianTarget {
        statistic: DistanceStatistic,
        target: f64,
        sigma: f64,
        params: ThresholdParams,
    },
    MaxRadialDistance {
        center: Point3<f64>,
        radius: f64,
    },
    Multiple(Vec<FitnessConfig>),
}

impl FitnessConfig {
    pub fn build(&self) -> Result<Arc<dyn Fitness>, FitnessError> {
        let fitness: Arc<dyn Fitness> = match self {
            FitnessConfig::MinDistance { params } => Arc::new(MinDistanceFitness {
                params: params.validated()?,
            }),
            FitnessConfig::MeanDistance { params } => Arc::new(MeanDistanceFitness {
                params: params.validated()?,
            }),
            FitnessConfig::SumInvDistance { params, cutoff } => {
                if !cutoff.is_finite() || *cutoff <= 0.0 {
                    return Err(FitnessError::InvalidParameter {
                        name: "cutoff",
                        value: *cutoff,
                    });
                }
                Arc::new(SumInvDistanceFitness {
                    params: params.validated()?,
                    cutoff: *cutoff,
                })
            }
            FitnessConfig::GaussianTarget {
                statistic,
                target,
                sigma,
                params,
            } => Arc::new(GaussianTarget::new(*statistic, *target, *sigma, *params)?),
            FitnessConfig::MaxRadialDistance { center, radius } => {
                Arc::new(MaxRadialDistance::new(*center, *radius)?)
            }
            FitnessConfig::Multiple(members) => {
                let built = members
                    .iter()
                    .map(FitnessConfig::build)
                    .collect::<Result<Vec<_>, _>>()?;
                Arc::new(MultipleFitness::new(built)?)
            }
        };
        Ok(fitness)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrategyKind {
    Base,
    #[default]
    Batch,
    Serial,
}

impl StrategyKind {
    pub fn build(self) -> Arc<dyn DockingStrategy> {
        match self {
            StrategyKind::Base => Arc::new(BaseStrategy),
            StrategyKind::Batch => Arc::new(BatchStrategy),
            StrategyKind::Serial => Arc::new(SerialStrategy),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DockingConfig {
    pub attempts: usize,
    pub sampler: SamplerConfig,
    pub fitness: FitnessConfig,
    pub strategy: StrategyKind,
    pub constraint: SiteConstraint,
    pub seed: Option<u64>,
}

#[derive(Default)]
pub struct DockingConfigBuilder {
    attempts: Option<usize>,
    sampler: Option<SamplerConfig>,
    fitness: Option<FitnessConfig>,
    strategy: Option<StrategyKind>,
    constraint: Option<SiteConstraint>,
    seed: Option<u64>,
}

impl DockingConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attempts(mut self, attempts: usize) -> Self {
        self.attempts = Some(attempts);
        self
    }
    pub fn sampler(mut self, sampler: SamplerConfig) -> Self {
        self.sampler = Some(sampler);
        self
    }
    pub fn fitness(mut self, fitness: FitnessConfig) -> Self {
        self.fitness = Some(fitness);
        self
    }
    pub fn strategy(mut self, strategy: StrategyKind) -> Self {
        self.strategy = Some(strategy);
        self
    }
    pub fn constraint(mut self, constraint: SiteConstraint) -> Self {
        self.constraint = Some(constraint);
        self
    }
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn build(self) -> Result<DockingConfig, ConfigError> {
        let constraint = self.constraint.unwrap_or_default();
        if !constraint.radius.is_finite() || constraint.radius <= 0.0 {
            return Err(ConfigError::InvalidValue {
                name: "constraint.radius",
                reason: format!("must be positive, got {}", constraint.radius),
            });
        }
        Ok(DockingConfig {
            attempts: self.attempts.unwrap_or(ATTEMPTS),
            sampler: self
                .sampler
                .ok_or(ConfigError::MissingParameter("sampler"))?,
            fitness: self
                .fitness
                .ok_or(ConfigError::MissingParameter("fitness"))?,
            strategy: self.strategy.unwrap_or_default(),
            constraint,
            seed: self.seed,
        })
    }
}
