use super::{Fitness, FitnessError, ThresholdParams, max_of, mean_of, min_of};
use crate::core::models::complex::Complex;

pub const DEFAULT_TARGET: f64 = 3.0;
pub const DEFAULT_SIGMA: f64 = 0.5;

/// Which summary of the nearest-host distances is compared with the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceStatistic {
    Min,
    Mean,
    Max,
}

impl DistanceStatistic {
    fn evaluate(self, nearest: &[f64]) -> f64 {
        match self {
            DistanceStatistic::Min => min_of(nearest),
            DistanceStatistic::Mean => mean_of(nearest),
            DistanceStatistic::Max => max_of(nearest),
        }
    }
}

/// Prefers complexes whose distance statistic is close to a target value.
///
/// The score is `exp(-(v - target)² / (2σ²))`, in `(0, 1]`, after the usual
/// minimum-contact gate.
#[derive(Debug, Clone, PartialEq)]
pub struct GaussianTarget {
    pub statistic: DistanceStatistic,
    pub target: f64,
    pub sigma: f64,
    pub params: ThresholdParams,
}

impl GaussianTarget {
    pub fn new(
        statistic: DistanceStatistic,
        target: f64,
        sigma: f64,
        params: ThresholdParams,
    ) -> Result<Self, FitnessError> {
        if !sigma.is_finite() || sigma <= 0.0 {
            return Err(FitnessError::InvalidParameter {
                name: "sigma",
                value: sigma,
            });
        }
        Ok(Self {
            statistic,
            target,
            sigma,
            params: params.validated()?,
        })
    }

    pub fn min(target: f64, sigma: f64, params: ThresholdParams) -> Result<Self, FitnessError> {
        Self::new(DistanceStatistic::Min, target, sigma, params)
    }

    pub fn mean(target: f64, sigma: f64, params: ThresholdParams) -> Result<Self, FitnessError> {
        Self::new(DistanceStatistic::Mean, target, sigma, params)
    }

    pub fn max(target: f64, sigma: f64, params: ThresholdParams) -> Result<Self, FitnessError> {
        Self::new(DistanceStatistic::Max, target, sigma, params)
    }

    fn gaussian(&self, value: f64) -> f64 {
        let z = value - self.target;
        (-(z * z) / (2.0 * self.sigma * self.sigma)).exp()
    }
}

impl Fitness for GaussianTarget {
    fn name(&self) -> &'static str {
        match self.statistic {
            DistanceStatistic::Min => "min-distance-gaussian-target",
            DistanceStatistic::Mean => "mean-distance-gaussian-target",
            DistanceStatistic::Max => "max-distance-gaussian-target",
        }
    }

    fn score(&self, complex: &Complex) -> f64 {
        let nearest = complex.nearest_host_distances();
        if nearest.is_empty() {
            return self.params.gate(&nearest, 0.0);
        }
        let value = self.gaussian(self.statistic.evaluate(&nearest));
        self.params.gate(&nearest, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fitness::PENALTY;
    use crate::core::fitness::test_support::complex_with_guest_x;

    #[test]
    fn score_peaks_at_target() {
        let complex = complex_with_guest_x(&[3.0]);
        let fitness = GaussianTarget::min(3.0, 0.5, ThresholdParams::default()).unwrap();
        assert!((fitness.score(&complex) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn score_decreases_away_from_target() {
        let fitness = GaussianTarget::mean(3.0, 0.5, ThresholdParams::default()).unwrap();
        let near = fitness.score(&complex_with_guest_x(&[3.2]));
        let far = fitness.score(&complex_with_guest_x(&[4.5]));
        assert!(near > far);
        assert!(far > 0.0);
    }

    #[test]
    fn max_statistic_uses_farthest_guest_atom() {
        let fitness = GaussianTarget::max(5.0, 1.0, ThresholdParams::default()).unwrap();
        let score = fitness.score(&complex_with_guest_x(&[2.0, 5.0]));
        assert!((score - 1.0).abs() < 1e-9);
    }

    #[test]
    fn threshold_gate_still_applies() {
        let fitness = GaussianTarget::min(1.0, 0.5, ThresholdParams::default()).unwrap();
        assert_eq!(fitness.score(&complex_with_guest_x(&[1.0])), PENALTY);
    }

    #[test]
    fn named_constructors_pick_the_statistic() {
        let params = ThresholdParams::default();
        let min = GaussianTarget::min(3.0, 0.5, params).unwrap();
        let mean = GaussianTarget::mean(3.0, 0.5, params).unwrap();
        let max = GaussianTarget::max(3.0, 0.5, params).unwrap();
        assert_eq!(min.statistic, DistanceStatistic::Min);
        assert_eq!(mean.statistic, DistanceStatistic::Mean);
        assert_eq!(max.statistic, DistanceStatistic::Max);
        assert_eq!(max.name(), "max-distance-gaussian-target");
    }

    #[test]
    fn non_positive_sigma_is_rejected() {
        let result = GaussianTarget::min(3.0, 0.0, ThresholdParams::default());
        assert!(matches!(
            result,
            Err(FitnessError::InvalidParameter { name: "sigma", .. })
        ));
    }
}
