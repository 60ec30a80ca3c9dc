use super::{Fitness, FitnessError, PENALTY};
use crate::core::models::complex::Complex;
use std::sync::Arc;

/// Combines several fitness functions.
///
/// A complex rejected by any member is rejected; otherwise the member scores are summed.
#[derive(Clone)]
pub struct MultipleFitness {
    members: Vec<Arc<dyn Fitness>>,
}

impl MultipleFitness {
    pub fn new(members: Vec<Arc<dyn Fitness>>) -> Result<Self, FitnessError> {
        if members.is_empty() {
            return Err(FitnessError::EmptyComposite);
        }
        Ok(Self { members })
    }

    pub fn members(&self) -> &[Arc<dyn Fitness>] {
        &self.members
    }
}

impl std::fmt::Debug for MultipleFitness {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.members.iter().map(|m| m.name()))
            .finish()
    }
}

impl Fitness for MultipleFitness {
    fn name(&self) -> &'static str {
        "multiple"
    }

    fn score(&self, complex: &Complex) -> f64 {
        let mut total = 0.0;
        for member in &self.members {
            let score = member.score(complex);
            if score.is_nan() || score < 0.0 {
                return PENALTY;
            }
            total += score;
        }
        total
    }
}
