use super::error::ModelError;
use super::lattice::Lattice;
use nalgebra::{Point3, Vector3};

/// A periodic crystal structure: a lattice plus atomic species and Cartesian coordinates.
///
/// Structures behave as values. Modifying a structure means producing a new one (see
/// [`Structure::with_coords`]) or mutating an owned clone; the original is never touched
/// through a shared reference.
#[derive(Debug, Clone, PartialEq)]
pub struct Structure {
    /// The periodic lattice of the crystal.
    lattice: Lattice,
    /// Element symbol of each site.
    species: Vec<String>,
    /// Cartesian position of each site in Angstroms.
    coords: Vec<Point3<f64>>,
}

impl Structure {
    /// Creates a new structure.
    ///
    /// # Arguments
    ///
    /// * `lattice` - The periodic lattice.
    /// * `species` - Element symbols, one per site.
    /// * `coords` - Site coordinates, one per site.
    /// * `coords_are_cartesian` - If `false`, `coords` are interpreted as fractional.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::LengthMismatch`] if the number of species and coordinates differ.
    pub fn new(
        lattice: Lattice,
        species: Vec<String>,
        coords: Vec<Point3<f64>>,
        coords_are_cartesian: bool,
    ) -> Result<Self, ModelError> {
        if species.len() != coords.len() {
            return Err(ModelError::LengthMismatch {
                species: species.len(),
                coords: coords.len(),
            });
        }
        let coords = if coords_are_cartesian {
            coords
        } else {
            coords.iter().map(|f| lattice.cartesian(f)).collect()
        };
        Ok(Self {
            lattice,
            species,
            coords,
        })
    }

    pub fn len(&self) -> usize {
        self.species.len()
    }

    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }

    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    pub fn species(&self) -> &[String] {
        &self.species
    }

    pub fn cart_coords(&self) -> &[Point3<f64>] {
        &self.coords
    }

    /// Returns the Cartesian coordinate of site `index`.
    pub fn site_coords(&self, index: usize) -> Result<&Point3<f64>, ModelError> {
        self.coords.get(index).ok_or(ModelError::SiteOutOfRange {
            index,
            len: self.len(),
        })
    }

    pub fn frac_coords(&self) -> Vec<Point3<f64>> {
        self.coords
            .iter()
            .map(|c| self.lattice.fractional(c))
            .collect()
    }

    /// Builds a new structure with the same lattice and species but new Cartesian coordinates.
    pub fn with_coords(&self, coords: Vec<Point3<f64>>) -> Result<Self, ModelError> {
        Self::new(self.lattice.clone(), self.species.clone(), coords, true)
    }

    /// Translates the given sites by a Cartesian vector.
    ///
    /// All indices are validated before any site is moved.
    pub fn translate_sites(
        &mut self,
        indices: &[usize],
        vector: &Vector3<f64>,
    ) -> Result<(), ModelError> {
        let len = self.len();
        if let Some(&index) = indices.iter().find(|&&i| i >= len) {
            return Err(ModelError::SiteOutOfRange { index, len });
        }
        for &i in indices {
            self.coords[i] += vector;
        }
        Ok(())
    }

    /// Appends sites to the structure, returning the combined structure.
    pub fn extended_with(
        &self,
        species: &[String],
        coords: &[Point3<f64>],
    ) -> Result<Self, ModelError> {
        if species.len() != coords.len() {
            return Err(ModelError::LengthMismatch {
                species: species.len(),
                coords: coords.len(),
            });
        }
        let mut merged = self.clone();
        merged.species.extend_from_slice(species);
        merged.coords.extend_from_slice(coords);
        Ok(merged)
    }
}
