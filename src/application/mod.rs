//! Application layer: request orchestration and the warning engine.

pub mod services;
pub mod warnings;
