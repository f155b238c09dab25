//! # Architecture Abstraction Layer
//!
//! Tick source and interrupt setup for the scheduler. Only the Cortex-M4
//! port exists; another core would be a sibling module.

pub mod cortex_m4;
