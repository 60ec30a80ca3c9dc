//! # void-dock
//!
//! Docking of guest molecules into periodic crystal hosts.
//!
//! The library samples candidate insertion points inside a host unit cell, places the guest at
//! each point, scores the resulting host–guest complexes with a fitness function and returns
//! the accepted complexes ranked best first.
//!
//! ## Layers
//!
//! - **[`core`]: The Foundation.** Stateless value types (`Lattice`, `Structure`, `Molecule`,
//!   `Complex`), XYZ I/O, point samplers and fitness functions.
//!
//! - **[`engine`]: The Logic Core.** Configuration, the site constraint, docking strategies and
//!   the `Docker` that drives sampling, placement and ranking.
//!
//! - **[`workflows`]: The Public API.** One-call entry points that turn a configuration and
//!   input structures into a ranked result.

pub mod core;
pub mod engine;
pub mod workflows;
