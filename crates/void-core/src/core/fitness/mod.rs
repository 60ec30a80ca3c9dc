//! # Fitness Module
//!
//! Scoring functions that rank host-guest complexes.
//!
//! ## Overview
//!
//! A [`Fitness`] maps a [`Complex`] to a scalar where higher is better. Any negative score
//! marks the complex as rejected; functions in this module use [`PENALTY`] for that.
//! All functions are pure and depend only on guest-host distances computed with the
//! minimum-image convention.
//!
//! ## Variants
//!
//! - [`threshold`] - Raw distance statistics gated by a minimum-contact threshold
//! - [`target`] - Gaussian preference for a target distance statistic
//! - [`radial`] - Keeps the guest inside a sphere around a fixed point
//! - [`union`] - Combines several functions, rejecting if any member rejects

use crate::core::models::complex::Complex;
use thiserror::Error;

pub mod radial;
pub mod target;
pub mod threshold;
pub mod union;

pub use radial::MaxRadialDistance;
pub use target::{DistanceStatistic, GaussianTarget};
pub use threshold::{MeanDistanceFitness, MinDistanceFitness, SumInvDistanceFitness};
pub use union::MultipleFitness;

/// Score assigned to rejected complexes.
pub const PENALTY: f64 = -1.0;

pub const DEFAULT_THRESHOLD: f64 = 1.5;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum FitnessError {
    #[error("A composite fitness needs at least one member")]
    EmptyComposite,
    #[error("Invalid fitness parameter '{name}': {value}")]
    InvalidParameter { name: &'static str, value: f64 },
}

/// Scores a host-guest complex. Higher is better; negative means rejected.
pub trait Fitness: Send + Sync {
    fn name(&self) -> &'static str;

    fn score(&self, complex: &Complex) -> f64;
}

/// Minimum-contact gate shared by the distance-based functions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThresholdParams {
    /// Complexes with any guest-host distance below this value (Å) are rejected.
    pub threshold: f64,
    /// Report `1.0` for every accepted complex instead of the raw value.
    pub step: bool,
}

impl Default for ThresholdParams {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            step: false,
        }
    }
}

impl ThresholdParams {
    pub fn validated(self) -> Result<Self, FitnessError> {
        if !self.threshold.is_finite() || self.threshold < 0.0 {
            return Err(FitnessError::InvalidParameter {
                name: "threshold",
                value: self.threshold,
            });
        }
        Ok(self)
    }

    /// Applies the gate to a raw score given the nearest-host distances of the guest.
    pub(crate) fn gate(&self, nearest: &[f64], value: f64) -> f64 {
        if nearest.is_empty() || min_of(nearest) < self.threshold {
            return PENALTY;
        }
        if self.step { 1.0 } else { value }
    }
}

pub(crate) fn min_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

pub(crate) fn max_of(values: &[f64]) -> f64 {
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

pub(crate) fn mean_of(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_rejects_close_contacts() {
        let params = ThresholdParams::default();
        assert_eq!(params.gate(&[1.0, 3.0], 3.0), PENALTY);
        assert_eq!(params.gate(&[2.0, 3.0], 2.5), 2.5);
    }

    #[test]
    fn gate_step_mode_reports_unity() {
        let params = ThresholdParams {
            threshold: 1.0,
            step: true,
        };
        assert_eq!(params.gate(&[2.0], 2.0), 1.0);
    }

    #[test]
    fn gate_rejects_empty_input() {
        assert_eq!(ThresholdParams::default().gate(&[], 5.0), PENALTY);
    }

    #[test]
    fn negative_threshold_is_invalid() {
        let params = ThresholdParams {
            threshold: -1.0,
            step: false,
        };
        assert!(matches!(
            params.validated(),
            Err(FitnessError::InvalidParameter {
                name: "threshold",
                ..
            })
        ));
    }
}
