//! # Workflows Module
//!
//! High-level entry points that tie the [`crate::core`] building blocks and the
//! [`crate::engine`] together into complete procedures.
//!
//! - **Docking Workflow** ([`dock`]) - Builds the sampler, fitness and strategy from a
//!   [`DockingConfig`](crate::engine::config::DockingConfig), docks the guest and returns the
//!   ranked complexes.

pub mod dock;
