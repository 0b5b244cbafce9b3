//! Roadmap Store State
//!
//! The full store state as returned verbatim by the read endpoint:
//! `{nodes, connections, branches}`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::models::Node;

/// The whole forest of nodes plus reserved connection/branch metadata.
///
/// `connections` and `branches` are reserved extension maps: no operation
/// writes them, but they are part of the wire format and appear (as `{}`)
/// in every `GET /api/roadmap` response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roadmap {
    /// All nodes, keyed by id. The map key always equals the node's own
    /// `id` field.
    pub nodes: HashMap<String, Node>,

    /// Reserved: explicit cross-tree connections.
    pub connections: HashMap<String, serde_json::Value>,

    /// Reserved: branch metadata.
    pub branches: HashMap<String, serde_json::Value>,
}
