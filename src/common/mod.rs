//! Configuration and scene handling shared by the driver and the simulation.

pub mod config;
pub mod scene;
