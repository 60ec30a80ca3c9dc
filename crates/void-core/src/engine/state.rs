use crate::core::models::complex::Complex;

/// A docked complex together with its fitness score.
#[derive(Debug, Clone)]
pub struct ScoredComplex {
    pub score: f64,
    pub complex: Complex,
}
