//! Roadmap HTTP Server
//!
//! Thin HTTP layer over [`roadmap_core`]: an axum router exposing the
//! roadmap REST API plus the static rendering UI. The binary entrypoint
//! lives in `main.rs`; the router is exported here so integration tests can
//! drive it in-process.

pub mod api;
