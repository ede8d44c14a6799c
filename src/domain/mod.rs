//! Core domain: parameter model, canonical codec, warnings, storage records.

pub mod entities;
pub mod link_params;
pub mod query_codec;
pub mod repositories;
pub mod warning;
