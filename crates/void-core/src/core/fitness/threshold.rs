use super::{Fitness, ThresholdParams, mean_of, min_of};
use crate::core::models::complex::Complex;

pub const DEFAULT_INVERSE_CUTOFF: f64 = 6.0;

/// Scores a complex by its closest guest-host contact.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MinDistanceFitness {
    pub params: ThresholdParams,
}

impl Fitness for MinDistanceFitness {
    fn name(&self) -> &'static str {
        "min-distance"
    }

    fn score(&self, complex: &Complex) -> f64 {
        let nearest = complex.nearest_host_distances();
        self.params.gate(&nearest, min_of(&nearest))
    }
}

/// Scores a complex by the mean nearest-host distance over guest atoms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeanDistanceFitness {
    pub params: ThresholdParams,
}

impl Fitness for MeanDistanceFitness {
    fn name(&self) -> &'static str {
        "mean-distance"
    }

    fn score(&self, complex: &Complex) -> f64 {
        let nearest = complex.nearest_host_distances();
        self.params.gate(&nearest, mean_of(&nearest))
    }
}

/// Sum of inverse guest-host distances within a cutoff.
///
/// Rewards guests that make many contacts with the framework without clashing.
#[derive(Debug, Clone, PartialEq)]
pub struct SumInvDistanceFitness {
    pub params: ThresholdParams,
    pub cutoff: f64,
}

impl Default for SumInvDistanceFitness {
    fn default() -> Self {
        Self {
            params: ThresholdParams::default(),
            cutoff: DEFAULT_INVERSE_CUTOFF,
        }
    }
}

impl Fitness for SumInvDistanceFitness {
    fn name(&self) -> &'static str {
        "sum-inv-distance"
    }

    fn score(&self, complex: &Complex) -> f64 {
        let nearest = complex.nearest_host_distances();
        if nearest.is_empty() {
            return self.params.gate(&nearest, 0.0);
        }
        let distances = complex.guest_host_distances();
        let sum: f64 = distances
            .iter()
            .filter(|&&d| d > 0.0 && d <= self.cutoff)
            .map(|d| 1.0 / d)
            .sum();
        self.params.gate(&nearest, sum)
    }
}
