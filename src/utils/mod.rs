//! Stateless helpers: validation predicates and random path generation.

pub mod path_generator;
pub mod validation;
