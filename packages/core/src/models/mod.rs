//! Data Models
//!
//! This module contains the wire-level data structures for the roadmap
//! service:
//!
//! - `Node` - a single roadmap item with position, styling, and tree links
//! - `Position` - canvas coordinates for a node
//! - `CreateNodeInput` - partial payload for node creation
//! - `NodeUpdate` - partial payload for node updates
//! - `Roadmap` - the whole forest plus reserved connection/branch metadata

pub mod node;
pub mod roadmap;

pub use node::{CreateNodeInput, Node, NodeUpdate, Position, DEFAULT_NODE_COLOR};
pub use roadmap::Roadmap;
