use super::error::ModelError;
use nalgebra::{Matrix3, Point3, Vector3};

const SINGULARITY_TOLERANCE: f64 = 1e-8;

/// A periodic lattice described by three lattice vectors.
///
/// The vectors are stored as the rows of a 3x3 matrix, in Angstroms, so that a
/// fractional coordinate row vector `f` maps to Cartesian space as `f * M`.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    matrix: Matrix3<f64>,
    inverse: Matrix3<f64>,
}

impl Lattice {
    /// Creates a lattice from a matrix whose rows are the lattice vectors.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::SingularLattice`] if the vectors are linearly dependent
    /// or contain non-finite values.
    pub fn new(matrix: Matrix3<f64>) -> Result<Self, ModelError> {
        let det = matrix.determinant();
        if !det.is_finite() || det.abs() < SINGULARITY_TOLERANCE {
            return Err(ModelError::SingularLattice { determinant: det });
        }
        let inverse = matrix
            .try_inverse()
            .ok_or(ModelError::SingularLattice { determinant: det })?;
        Ok(Self { matrix, inverse })
    }

    /// Creates a cubic lattice with edge length `a`.
    pub fn cubic(a: f64) -> Result<Self, ModelError> {
        Self::new(Matrix3::from_diagonal_element(a))
    }

    /// Creates a lattice from edge lengths and inter-axial angles (degrees).
    ///
    /// The first vector is placed along x and the second in the xy plane.
    pub fn from_parameters(
        a: f64,
        b: f64,
        c: f64,
        alpha: f64,
        beta: f64,
        gamma: f64,
    ) -> Result<Self, ModelError> {
        let (alpha, beta, gamma) = (alpha.to_radians(), beta.to_radians(), gamma.to_radians());
        let cx = c * beta.cos();
        let cy = c * (alpha.cos() - beta.cos() * gamma.cos()) / gamma.sin();
        let cz = (c * c - cx * cx - cy * cy).max(0.0).sqrt();

        Self::new(Matrix3::new(
            a,
            0.0,
            0.0,
            b * gamma.cos(),
            b * gamma.sin(),
            0.0,
            cx,
            cy,
            cz,
        ))
    }

    pub fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// Returns lattice vector `i` (0, 1 or 2).
    pub fn vector(&self, i: usize) -> Vector3<f64> {
        self.matrix.row(i).transpose()
    }

    pub fn volume(&self) -> f64 {
        self.matrix.determinant().abs()
    }

    /// Lengths of the three lattice vectors.
    pub fn abc(&self) -> [f64; 3] {
        [
            self.vector(0).norm(),
            self.vector(1).norm(),
            self.vector(2).norm(),
        ]
    }

    pub fn fractional(&self, cart: &Point3<f64>) -> Point3<f64> {
        Point3::from((cart.coords.transpose() * self.inverse).transpose())
    }

    pub fn cartesian(&self, frac: &Point3<f64>) -> Point3<f64> {
        Point3::from((frac.coords.transpose() * self.matrix).transpose())
    }

    fn fractional_vector(&self, cart: &Vector3<f64>) -> Vector3<f64> {
        (cart.transpose() * self.inverse).transpose()
    }

    fn cartesian_vector(&self, frac: &Vector3<f64>) -> Vector3<f64> {
        (frac.transpose() * self.matrix).transpose()
    }

    /// Returns the shortest periodic image of a Cartesian displacement.
    ///
    /// The fractional components are first wrapped into [-0.5, 0.5), then the 27
    /// neighbouring images are searched, which is exact for moderately skewed cells.
    pub fn minimum_image(&self, delta: &Vector3<f64>) -> Vector3<f64> {
        let frac = self.fractional_vector(delta);
        let wrapped = frac.map(|f| f - (f + 0.5).floor());
        let base = self.cartesian_vector(&wrapped);

        let mut best = base;
        let mut best_norm = base.norm_squared();
        for i in -1..=1 {
            for j in -1..=1 {
                for k in -1..=1 {
                    if i == 0 && j == 0 && k == 0 {
                        continue;
                    }
                    let shift = self.cartesian_vector(&Vector3::new(i as f64, j as f64, k as f64));
                    let candidate = base + shift;
                    let norm = candidate.norm_squared();
                    if norm < best_norm {
                        best = candidate;
                        best_norm = norm;
                    }
                }
            }
        }
        best
    }

    /// Periodic distance between two Cartesian points.
    pub fn periodic_distance(&self, a: &Point3<f64>, b: &Point3<f64>) -> f64 {
        self.minimum_image(&(b - a)).norm()
    }
}
