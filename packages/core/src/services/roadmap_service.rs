//! Roadmap Service - Core CRUD and Tree Operations
//!
//! This module provides the business logic layer for the roadmap store:
//!
//! - CRUD operations (create, read-all, update, delete)
//! - Subtree deletion (delete a node and every descendant)
//! - Branch creation with auto-computed position and level
//!
//! # State Ownership
//!
//! `RoadmapService` is a plain value. The HTTP layer shares one instance
//! behind `Arc<RwLock<_>>` and takes the lock once per logical operation;
//! tests construct an isolated instance per test case.
//!
//! # Consistency Model
//!
//! `CreateBranch` and `DeleteNode` keep parent/children pointers in sync.
//! `UpdateNode` is deliberately permissive: it accepts `parent` and
//! `children` values without checking that the referenced ids exist and
//! without repairing the old or new parent's `children` list. Subtree
//! deletion tolerates a malformed (cyclic) graph: the traversal removes
//! each node from the map when it is first visited, so no id can be
//! expanded twice and the sweep always terminates.

use tracing::debug;

use crate::models::node::{generate_node_id, DEFAULT_BRANCH_TITLE};
use crate::models::{CreateNodeInput, Node, NodeUpdate, Position, Roadmap};
use crate::services::error::RoadmapError;

/// Horizontal offset between a parent and its branch children.
const BRANCH_X_OFFSET: f64 = 250.0;

/// Vertical stagger between successive siblings created by `CreateBranch`.
///
/// The n-th child (0-based) of a parent lands at `parent.y + n * 60`.
const BRANCH_Y_STEP: f64 = 60.0;

/// In-memory roadmap store plus its operations.
///
/// # Examples
///
/// ```rust
/// use roadmap_core::{CreateNodeInput, RoadmapService};
///
/// let mut service = RoadmapService::new();
/// let root = service.create_node(CreateNodeInput::default());
/// let (child, parent) = service
///     .create_branch(&root.id, CreateNodeInput::default())
///     .unwrap();
///
/// assert_eq!(child.parent.as_deref(), Some(root.id.as_str()));
/// assert_eq!(parent.children, vec![child.id.clone()]);
/// ```
#[derive(Debug, Default)]
pub struct RoadmapService {
    data: Roadmap,
}

impl RoadmapService {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The full current store state, verbatim.
    ///
    /// No filtering, no pagination; `connections` and `branches` are
    /// included even though no operation populates them.
    pub fn roadmap(&self) -> &Roadmap {
        &self.data
    }

    /// Create a node from a partial field set.
    ///
    /// Omitted fields take their documented defaults; an omitted `id` gets
    /// a generated UUID. Always succeeds. Supplying an `id` that collides
    /// with an existing node silently overwrites it.
    pub fn create_node(&mut self, input: CreateNodeInput) -> Node {
        let node = Node::from_input(input);

        if self.data.nodes.contains_key(&node.id) {
            debug!("node {} already exists, overwriting", node.id);
        }

        self.data.nodes.insert(node.id.clone(), node.clone());
        debug!("created node {}", node.id);
        node
    }

    /// Merge a partial update onto an existing node.
    ///
    /// Only the whitelisted fields present in `update` change; the id is
    /// not updatable. Referenced `parent`/`children` ids are not validated
    /// and no parent's `children` list is repaired (see module docs).
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::NodeNotFound` if `id` is absent; the store is
    /// left unmodified.
    pub fn update_node(&mut self, id: &str, update: NodeUpdate) -> Result<Node, RoadmapError> {
        let node = self
            .data
            .nodes
            .get_mut(id)
            .ok_or_else(|| RoadmapError::node_not_found(id))?;

        node.apply_update(update);
        debug!("updated node {}", id);
        Ok(node.clone())
    }

    /// Delete a node and its entire subtree.
    ///
    /// If the node has a parent and that parent exists, the id is first
    /// removed from the parent's `children`. The node and every descendant
    /// are then swept from the store.
    ///
    /// The sweep is an explicit worklist rather than native recursion, so
    /// depth is bounded by heap instead of stack, and a corrupted cyclic
    /// graph terminates: a node is expanded at most once because expansion
    /// removes it from the map.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::NodeNotFound` if `id` is absent; the store is
    /// left unmodified.
    pub fn delete_node(&mut self, id: &str) -> Result<(), RoadmapError> {
        let parent_id = match self.data.nodes.get(id) {
            Some(node) => node.parent.clone(),
            None => return Err(RoadmapError::node_not_found(id)),
        };

        // Detach from the parent's children list (first occurrence only)
        if let Some(parent) = parent_id.and_then(|pid| self.data.nodes.get_mut(&pid)) {
            if let Some(index) = parent.children.iter().position(|child| child == id) {
                parent.children.remove(index);
            }
        }

        let mut removed = 0usize;
        let mut worklist = vec![id.to_string()];
        while let Some(current) = worklist.pop() {
            if let Some(node) = self.data.nodes.remove(&current) {
                removed += 1;
                worklist.extend(node.children);
            }
        }

        debug!("deleted node {} ({} nodes removed)", id, removed);
        Ok(())
    }

    /// Create a new child node under `parent_id`.
    ///
    /// The child's `color` defaults to the parent's color, its `level` is
    /// the parent's level + 1, and its position is laid out relative to the
    /// parent: `x = parent.x + 250`, `y = parent.y + childCount * 60`,
    /// where `childCount` is the parent's child count before the append.
    /// Only `id`, `title`, `description`, `color`, and `links` are honored
    /// from the input; the layout fields are always computed.
    ///
    /// Returns the new child and the updated parent.
    ///
    /// # Errors
    ///
    /// Returns `RoadmapError::ParentNotFound` if `parent_id` is absent; the
    /// store is left unmodified.
    pub fn create_branch(
        &mut self,
        parent_id: &str,
        input: CreateNodeInput,
    ) -> Result<(Node, Node), RoadmapError> {
        let parent = self
            .data
            .nodes
            .get_mut(parent_id)
            .ok_or_else(|| RoadmapError::parent_not_found(parent_id))?;

        let child_count = parent.children.len();
        let child = Node {
            id: input.id.unwrap_or_else(generate_node_id),
            title: input
                .title
                .unwrap_or_else(|| DEFAULT_BRANCH_TITLE.to_string()),
            description: input.description.unwrap_or_default(),
            color: input.color.unwrap_or_else(|| parent.color.clone()),
            links: input.links.unwrap_or_default(),
            position: Position::new(
                parent.position.x + BRANCH_X_OFFSET,
                parent.position.y + child_count as f64 * BRANCH_Y_STEP,
            ),
            expanded: true,
            children: Vec::new(),
            parent: Some(parent_id.to_string()),
            level: parent.level + 1,
        };

        parent.children.push(child.id.clone());
        let parent = parent.clone();

        self.data.nodes.insert(child.id.clone(), child.clone());
        debug!(
            "branched node {} under {} (sibling #{})",
            child.id, parent_id, child_count
        );
        Ok((child, parent))
    }
}

#[cfg(test)]
#[path = "roadmap_service_test.rs"]
mod roadmap_service_test;
