use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ModelError {
    #[error("Lattice vectors are linearly dependent (determinant {determinant})")]
    SingularLattice { determinant: f64 },

    #[error("Got {species} species but {coords} coordinates")]
    LengthMismatch { species: usize, coords: usize },

    #[error("Site index {index} is out of range for a structure with {len} sites")]
    SiteOutOfRange { index: usize, len: usize },

    #[error("Molecule has no atoms")]
    EmptyMolecule,
}
