use super::error::ModelError;
use nalgebra::{Point3, UnitQuaternion, Vector3};

/// A non-periodic molecule: atomic species plus Cartesian coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Molecule {
    species: Vec<String>,
    coords: Vec<Point3<f64>>,
}

impl Molecule {
    pub fn new(species: Vec<String>, coords: Vec<Point3<f64>>) -> Result<Self, ModelError> {
        if species.len() != coords.len() {
            return Err(ModelError::LengthMismatch {
                species: species.len(),
                coords: coords.len(),
            });
        }
        Ok(Self { species, coords })
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn species(&self) -> &[String] {
        &self.species
    }

    pub fn cart_coords(&self) -> &[Point3<f64>] {
        &self.coords
    }

    /// Geometric center of the atoms.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyMolecule`] if the molecule has no atoms.
    pub fn centroid(&self) -> Result<Point3<f64>, ModelError> {
        if self.coords.is_empty() {
            return Err(ModelError::EmptyMolecule);
        }
        let sum: Vector3<f64> = self.coords.iter().map(|p| p.coords).sum();
        Ok(Point3::from(sum / self.coords.len() as f64))
    }

    /// Builds a new molecule with the same species but new Cartesian coordinates.
    pub fn with_coords(&self, coords: Vec<Point3<f64>>) -> Result<Self, ModelError> {
        Self::new(self.species.clone(), coords)
    }

    /// Returns a copy translated so that its centroid lies on `point`.
    pub fn translated_to(&self, point: &Point3<f64>) -> Result<Self, ModelError> {
        let shift = point - self.centroid()?;
        Ok(self.translated_by(&shift))
    }

    pub fn translated_by(&self, shift: &Vector3<f64>) -> Self {
        Self {
            species: self.species.clone(),
            coords: self.coords.iter().map(|p| p + shift).collect(),
        }
    }

    /// Returns a copy rotated about its centroid.
    pub fn rotated(&self, rotation: &UnitQuaternion<f64>) -> Result<Self, ModelError> {
        let center = self.centroid()?;
        Ok(Self {
            species: self.species.clone(),
            coords: self
                .coords
                .iter()
                .map(|p| center + rotation * (p - center))
                .collect(),
        })
    }
}
