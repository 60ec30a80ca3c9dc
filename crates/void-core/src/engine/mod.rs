//! # Engine Module
//!
//! Stateful docking machinery that turns a host, a guest and a scoring function into a
//! ranked list of host–guest complexes.
//!
//! ## Architecture
//!
//! - **Configuration** ([`config`]) - Sampler, fitness and strategy selection plus the builder
//!   used by front ends
//! - **Constraint** ([`constraint`]) - Restricts candidate points to spheres around chosen host atoms
//! - **Context** ([`context`]) - Read-only view of the docking problem handed to strategies
//! - **Strategies** ([`strategies`]) - Per-point placement policies (batch, serial)
//! - **Docker** ([`docker`]) - Orchestrates sampling, placement and ranking
//! - **State Tracking** ([`state`]) - Scored complexes and their ordering
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress reporting
//! - **Error Handling** ([`error`]) - Engine-specific error types

pub mod config;
pub mod constraint;
pub mod context;
pub mod docker;
pub mod error;
pub mod progress;
pub mod state;
pub mod strategies;
