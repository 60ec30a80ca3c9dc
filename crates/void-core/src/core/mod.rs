//! # Core Module
//!
//! This module provides the stateless building blocks of VOID-RS: structure models,
//! candidate point samplers, fitness functions and file I/O.
//!
//! ## Architecture
//!
//! - **Structure Representation** ([`models`]) - Lattices, periodic hosts, guest molecules
//!   and host-guest complexes
//! - **Point Sampling** ([`sampling`]) - Deterministic and random insertion point generators
//! - **Scoring** ([`fitness`]) - Distance-based fitness functions where higher is better
//! - **File I/O** ([`io`]) - XYZ and extended XYZ readers and writers
//! - **Geometry** ([`utils`]) - Rotations, grids and coordinate helpers
//!
//! Everything here is pure: no global state, no I/O outside of [`io`].

pub mod fitness;
pub mod io;
pub mod models;
pub mod sampling;
pub mod utils;
