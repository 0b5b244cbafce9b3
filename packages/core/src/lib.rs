//! Roadmap Core Business Logic Layer
//!
//! This crate provides the data model and in-memory store for the roadmap
//! service: a forest of nodes (title, description, color, links, position,
//! parent/children) manipulated through a small set of CRUD and tree
//! operations.
//!
//! # Architecture
//!
//! - **Single store**: All state lives in a flat id → node mapping owned by
//!   [`RoadmapService`]. There is no persistence layer; the store lives for
//!   the process lifetime.
//! - **Injectable state**: The store is a plain value, not a process-wide
//!   global. Callers (the HTTP server, tests) construct their own instance
//!   and decide how to share it.
//! - **Synchronous operations**: Every operation is a single map mutation.
//!   Concurrency control is the caller's responsibility; the HTTP layer
//!   wraps the store in one lock and takes it per logical operation.
//!
//! # Modules
//!
//! - [`models`] - Data structures (Node, Position, Roadmap, update payloads)
//! - [`services`] - The RoadmapService store and its error type

pub mod models;
pub mod services;

// Re-export commonly used types
pub use models::*;
pub use services::*;
