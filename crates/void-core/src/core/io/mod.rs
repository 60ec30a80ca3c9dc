//! Provides input/output functionality for chemical file formats.
//!
//! Hosts are read from extended XYZ files (lattice in the comment line), guests from plain
//! XYZ files. Docked complexes are written back as extended XYZ, and candidate points can be
//! dumped as an XYZ point cloud for visual inspection.

pub mod traits;
pub mod xyz;
