use super::error::ModelError;
use super::molecule::Molecule;
use super::structure::Structure;
use nalgebra::{DMatrix, Point3, Vector3};

/// A host-guest pair forming one docking candidate.
#[derive(Debug, Clone, PartialEq)]
pub struct Complex {
    host: Structure,
    guest: Molecule,
    /// Whether the guest was shifted by a lattice vector on construction.
    transformed: bool,
}

impl Complex {
    /// Creates a new complex.
    ///
    /// When `add_transform` is set, the guest is translated by a whole lattice vector so
    /// that its centroid falls inside the unit cell. Periodic distances are unaffected; the
    /// transform only keeps written coordinates tidy.
    pub fn new(host: Structure, guest: Molecule, add_transform: bool) -> Self {
        if !add_transform {
            return Self {
                host,
                guest,
                transformed: false,
            };
        }

        let guest = match guest.centroid() {
            Ok(center) => {
                let frac = host.lattice().fractional(&center);
                let shift = Vector3::new(-frac.x.floor(), -frac.y.floor(), -frac.z.floor());
                let cart_shift = host.lattice().cartesian(&Point3::from(shift)).coords;
                guest.translated_by(&cart_shift)
            }
            Err(_) => guest,
        };

        Self {
            host,
            guest,
            transformed: true,
        }
    }

    pub fn host(&self) -> &Structure {
        &self.host
    }

    pub fn guest(&self) -> &Molecule {
        &self.guest
    }

    pub fn is_transformed(&self) -> bool {
        self.transformed
    }

    /// Minimum-image distances between every guest atom (rows) and host atom (columns).
    pub fn guest_host_distances(&self) -> DMatrix<f64> {
        let lattice = self.host.lattice();
        let guest = self.guest.cart_coords();
        let host = self.host.cart_coords();
        DMatrix::from_fn(guest.len(), host.len(), |i, j| {
            lattice.periodic_distance(&guest[i], &host[j])
        })
    }

    /// For each guest atom, the distance to its nearest host atom.
    ///
    /// Returns an empty vector if the host has no atoms.
    pub fn nearest_host_distances(&self) -> Vec<f64> {
        if self.host.is_empty() {
            return Vec::new();
        }
        let distances = self.guest_host_distances();
        distances
            .row_iter()
            .map(|row| row.iter().copied().fold(f64::INFINITY, f64::min))
            .collect()
    }

    /// Merges host and guest into a single periodic structure, host sites first.
    pub fn to_structure(&self) -> Result<Structure, ModelError> {
        self.host
            .extended_with(self.guest.species(), self.guest.cart_coords())
    }
}
