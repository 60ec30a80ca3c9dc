use super::error::EngineError;
use crate::core::fitness::Fitness;
use crate::core::models::complex::Complex;
use crate::core::models::molecule::Molecule;
use crate::core::models::structure::Structure;
use nalgebra::{Point3, UnitQuaternion};

/// Read-only view of a docking problem handed to strategies.
#[derive(Clone, Copy)]
pub struct DockingContext<'a> {
    pub host: &'a Structure,
    pub guest: &'a Molecule,
    pub fitness: &'a dyn Fitness,
}

impl<'a> DockingContext<'a> {
    pub fn new(host: &'a Structure, guest: &'a Molecule, fitness: &'a dyn Fitness) -> Self {
        Self {
            host,
            guest,
            fitness,
        }
    }

    /// A copy of the host, optionally with new Cartesian coordinates.
    pub fn new_host(&self, coords: Option<Vec<Point3<f64>>>) -> Result<Structure, EngineError> {
        match coords {
            None => Ok(self.host.clone()),
            Some(coords) => Ok(self.host.with_coords(coords)?),
        }
    }

    /// A copy of the guest, optionally with new Cartesian coordinates.
    pub fn new_guest(&self, coords: Option<Vec<Point3<f64>>>) -> Result<Molecule, EngineError> {
        match coords {
            None => Ok(self.guest.clone()),
            Some(coords) => Ok(self.guest.with_coords(coords)?),
        }
    }

    /// Builds a complex from fresh host and guest copies without any lattice transform.
    pub fn create_new_complex(
        &self,
        host_coords: Option<Vec<Point3<f64>>>,
        guest_coords: Option<Vec<Point3<f64>>>,
    ) -> Result<Complex, EngineError> {
        Ok(Complex::new(
            self.new_host(host_coords)?,
            self.new_guest(guest_coords)?,
            false,
        ))
    }

    /// Rotates the guest about its centroid and moves the centroid onto `point`.
    pub fn place_guest(
        &self,
        point: &Point3<f64>,
        rotation: &UnitQuaternion<f64>,
    ) -> Result<Complex, EngineError> {
        let placed = self.guest.rotated(rotation)?.translated_to(point)?;
        self.create_new_complex(None, Some(placed.cart_coords().to_vec()))
    }

    pub fn score(&self, complex: &Complex) -> f64 {
        self.fitness.score(complex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fitness::MinDistanceFitness;
    use crate::core::models::lattice::Lattice;

    fn host() -> Structure {
        Structure::new(
            Lattice::cubic(10.0).unwrap(),
            vec!["Si".to_string()],
            vec![Point3::origin()],
            true,
        )
        .unwrap()
    }

    fn guest() -> Molecule {
        Molecule::new(
            vec!["C".to_string(), "O".to_string()],
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.2, 0.0, 0.0)],
        )
        .unwrap()
    }

    #[test]
    fn create_new_complex_copies_inputs() {
        let (host, guest) = (host(), guest());
        let fitness = MinDistanceFitness::default();
        let ctx = DockingContext::new(&host, &guest, &fitness);

        let complex = ctx
            .create_new_complex(None, Some(vec![Point3::new(5.0, 5.0, 5.0); 2]))
            .unwrap();
        assert!(!complex.is_transformed());
        assert_eq!(complex.host(), &host);
        assert_eq!(guest.cart_coords()[0], Point3::origin());
    }

    #[test]
    fn new_host_rejects_wrong_coordinate_count() {
        let (host, guest) = (host(), guest());
        let fitness = MinDistanceFitness::default();
        let ctx = DockingContext::new(&host, &guest, &fitness);
        assert!(matches!(
            ctx.new_host(Some(vec![])),
            Err(EngineError::Model { .. })
        ));
    }

    #[test]
    fn place_guest_centers_guest_on_point() {
        let (host, guest) = (host(), guest());
        let fitness = MinDistanceFitness::default();
        let ctx = DockingContext::new(&host, &guest, &fitness);
        let point = Point3::new(5.0, 5.0, 5.0);

        let complex = ctx.place_guest(&point, &UnitQuaternion::identity()).unwrap();
        let centroid = complex.guest().centroid().unwrap();
        assert!((centroid - point).norm() < 1e-12);
    }
}
