//! Business logic services.

mod link_service;

pub use link_service::{CreatedLink, LinkService, LinkSettings};
