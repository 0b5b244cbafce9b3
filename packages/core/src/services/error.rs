//! Error types for the roadmap store
//!
//! Two error kinds exist: a referenced node id is absent, or the parent of
//! a would-be branch is absent. Both are terminal for the request that hit
//! them; there is no retry or recovery path.

use thiserror::Error;

/// Errors that can occur during roadmap operations.
#[derive(Error, Debug)]
pub enum RoadmapError {
    /// Referenced node does not exist
    #[error("Node '{node_id}' does not exist")]
    NodeNotFound { node_id: String },

    /// Referenced parent node does not exist (branch creation)
    #[error("Parent node '{node_id}' does not exist")]
    ParentNotFound { node_id: String },
}

impl RoadmapError {
    /// Create a NodeNotFound error
    pub fn node_not_found(node_id: impl Into<String>) -> Self {
        Self::NodeNotFound {
            node_id: node_id.into(),
        }
    }

    /// Create a ParentNotFound error
    pub fn parent_not_found(node_id: impl Into<String>) -> Self {
        Self::ParentNotFound {
            node_id: node_id.into(),
        }
    }
}
