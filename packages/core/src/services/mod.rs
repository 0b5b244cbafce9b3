//! Business Services
//!
//! This module contains the roadmap store and its error type:
//!
//! - `RoadmapService` - CRUD and tree operations over the in-memory store
//! - `RoadmapError` - typed not-found errors surfaced to the HTTP layer

pub mod error;
pub mod roadmap_service;

pub use error::RoadmapError;
pub use roadmap_service::RoadmapService;
