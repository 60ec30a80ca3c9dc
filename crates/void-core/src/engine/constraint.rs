use super::error::EngineError;
use crate::core::models::structure::Structure;
use nalgebra::Point3;
use tracing::debug;

pub const DEFAULT_SPHERE_RADIUS: f64 = 5.0;

/// Restricts candidate points to spheres around selected host atoms.
#[derive(Debug, Clone, PartialEq)]
pub struct SiteConstraint {
    /// Host site indices whose neighbourhoods are kept. Empty disables the filter.
    pub indices: Vec<usize>,
    /// Sphere radius in Angstroms.
    pub radius: f64,
    /// Upper bound on the number of retained points.
    pub max_sites: Option<usize>,
}

impl Default for SiteConstraint {
    fn default() -> Self {
        Self {
            indices: Vec::new(),
            radius: DEFAULT_SPHERE_RADIUS,
            max_sites: None,
        }
    }
}

impl SiteConstraint {
    pub fn is_active(&self) -> bool {
        !self.indices.is_empty()
    }

    /// Keeps points strictly within `radius` of at least one constraint atom.
    ///
    /// Distances are plain Cartesian, matching how the sampled points are placed around
    /// host atoms. Point order is preserved and the result is truncated to `max_sites`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidConfiguration`] if an index is outside the host or the
    /// radius is not positive.
    pub fn apply(
        &self,
        points: Vec<Point3<f64>>,
        host: &Structure,
    ) -> Result<Vec<Point3<f64>>, EngineError> {
        if !self.is_active() {
            return Ok(points);
        }
        if !self.radius.is_finite() || self.radius <= 0.0 {
            return Err(EngineError::InvalidConfiguration(format!(
                "constraint radius must be positive, got {}",
                self.radius
            )));
        }

        let anchors = self
            .indices
            .iter()
            .map(|&index| {
                host.site_coords(index).copied().map_err(|_| {
                    EngineError::InvalidConfiguration(format!(
                        "constraint index {} is out of range for a host with {} sites",
                        index,
                        host.len()
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let radius_sq = self.radius * self.radius;
        let total = points.len();
        let limit = self.max_sites.unwrap_or(usize::MAX);
        let kept: Vec<_> = points
            .into_iter()
            .filter(|p| anchors.iter().any(|a| (p - a).norm_squared() < radius_sq))
            .take(limit)
            .collect();

        debug!(
            total,
            kept = kept.len(),
            radius = self.radius,
            "Applied site constraint."
        );
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::lattice::Lattice;

    fn host() -> Structure {
        Structure::new(
            Lattice::cubic(30.0).unwrap(),
            vec!["Si".to_string(), "O".to_string()],
            vec![Point3::new(0.0, 0.0, 0.0), Point3::new(20.0, 0.0, 0.0)],
            true,
        )
        .unwrap()
    }

    fn line_of_points() -> Vec<Point3<f64>> {
        (0..=25).map(|x| Point3::new(x as f64, 0.0, 0.0)).collect()
    }

    #[test]
    fn inactive_constraint_keeps_everything() {
        let points = line_of_points();
        let kept = SiteConstraint::default()
            .apply(points.clone(), &host())
            .unwrap();
        assert_eq!(kept, points);
    }

    #[test]
    fn every_kept_point_is_inside_some_sphere() {
        let constraint = SiteConstraint {
            indices: vec![0, 1],
            radius: 3.0,
            max_sites: None,
        };
        let host = host();
        let kept = constraint.apply(line_of_points(), &host).unwrap();
        // x in {0,1,2} around the first atom and {18..=22} around the second.
        assert_eq!(kept.len(), 8);
        for p in &kept {
            assert!(
                constraint
                    .indices
                    .iter()
                    .any(|&i| (p - host.cart_coords()[i]).norm() < constraint.radius)
            );
        }
    }

    #[test]
    fn boundary_points_are_excluded() {
        let constraint = SiteConstraint {
            indices: vec![0],
            radius: 2.0,
            max_sites: None,
        };
        let kept = constraint.apply(line_of_points(), &host()).unwrap();
        assert_eq!(kept, vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 0.0, 0.0)]);
    }

    #[test]
    fn max_sites_truncates_in_order() {
        let constraint = SiteConstraint {
            indices: vec![1],
            radius: 5.0,
            max_sites: Some(3),
        };
        let kept = constraint.apply(line_of_points(), &host()).unwrap();
        assert_eq!(kept.len(), 3);
        assert_eq!(kept[0], Point3::new(16.0, 0.0, 0.0));
    }

    #[test]
    fn non_positive_radius_is_invalid_configuration() {
        for radius in [0.0, -1.0, f64::NAN] {
            let constraint = SiteConstraint {
                indices: vec![0],
                radius,
                max_sites: None,
            };
            let result = constraint.apply(line_of_points(), &host());
            assert!(matches!(result, Err(EngineError::InvalidConfiguration(_))));
        }
    }

    #[test]
    fn out_of_range_index_is_invalid_configuration() {
        let constraint = SiteConstraint {
            indices: vec![5],
            ..Default::default()
        };
        let result = constraint.apply(line_of_points(), &host());
        assert!(matches!(result, Err(EngineError::InvalidConfiguration(_))));
    }
}
