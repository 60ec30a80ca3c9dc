//! # Core Models Module
//!
//! This module contains the value types used to describe host-guest docking problems.
//!
//! ## Overview
//!
//! Hosts are periodic crystals, guests are isolated molecules, and a docking candidate pairs
//! one of each. All types follow value semantics: modifying a structure produces a new one or
//! mutates an owned clone, never a shared instance.
//!
//! ## Key Components
//!
//! - [`lattice`] - Lattice vectors, fractional/Cartesian conversion and minimum-image distances
//! - [`structure`] - Periodic host structure (species plus Cartesian coordinates)
//! - [`molecule`] - Non-periodic guest molecule with centroid, translation and rotation helpers
//! - [`complex`] - A host-guest pair with guest-host distance queries
//! - [`error`] - Construction and indexing errors
//!
//! ## Usage
//!
//! ```ignore
//! use void_dock::core::models::{lattice::Lattice, structure::Structure};
//!
//! let lattice = Lattice::cubic(10.0)?;
//! let host = Structure::new(lattice, vec!["Si".into()], vec![Point3::origin()], true)?;
//! ```

pub mod complex;
pub mod error;
pub mod lattice;
pub mod molecule;
pub mod structure;
