//! Node Data Structures
//!
//! This module defines the core `Node` struct and the partial payloads used
//! for creating and updating nodes.
//!
//! # Wire Format
//!
//! Nodes serialize with exactly the lowercase keys the rendering UI expects
//! (`id`, `title`, `description`, `color`, `links`, `position`, `expanded`,
//! `children`, `parent`, `level`). `parent` is emitted as JSON `null` for
//! roots rather than being omitted, so every node object has an identical
//! key set.
//!
//! # Typing
//!
//! The wire format is typed at the serde boundary: `position` must be a
//! numeric `{x, y}` pair, `expanded` a boolean, `level` an integer.
//! `links` entries stay opaque (`serde_json::Value`) since the store never
//! interprets them.
//!
//! # Examples
//!
//! ```rust
//! use roadmap_core::models::{CreateNodeInput, Node};
//!
//! // A root node with every field defaulted
//! let node = Node::from_input(CreateNodeInput::default());
//! assert_eq!(node.title, "New Node");
//! assert_eq!(node.level, 0);
//! assert!(node.parent.is_none());
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Default fill color for nodes created without an explicit `color`.
///
/// Branch children do NOT use this constant; they inherit the parent's
/// color unless the input overrides it.
pub const DEFAULT_NODE_COLOR: &str = "#3498db";

/// Default title for nodes created via `CreateNode`.
pub const DEFAULT_NODE_TITLE: &str = "New Node";

/// Default title for nodes created via `CreateBranch`.
pub const DEFAULT_BRANCH_TITLE: &str = "New Branch";

/// Canvas coordinates for a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Default for Position {
    /// The position assigned to nodes created without one: `{100, 100}`.
    fn default() -> Self {
        Self { x: 100.0, y: 100.0 }
    }
}

/// A single roadmap item with position, styling, and tree links.
///
/// # Fields
///
/// - `id`: Unique identifier (caller-supplied or generated UUID)
/// - `title` / `description`: Display strings
/// - `color`: Hex color string used by the rendering UI
/// - `links`: Ordered opaque link values (URLs or references)
/// - `position`: Canvas coordinates
/// - `expanded`: UI-state flag (whether children are shown)
/// - `children`: Child node ids, append order = creation order
/// - `parent`: Parent node id, `None` for roots
/// - `level`: Depth in the tree (0 for roots, parent's level + 1 for
///   branch children)
///
/// # Consistency
///
/// A set `parent` is expected to appear in that parent's `children` exactly
/// once. The store maintains this for `CreateBranch` and `DeleteNode` but
/// deliberately does not repair it on `UpdateNode` (see
/// `RoadmapService::update_node`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Unique identifier
    pub id: String,

    /// Display title
    pub title: String,

    /// Free-text description
    pub description: String,

    /// Hex color string (e.g. "#3498db")
    pub color: String,

    /// Ordered opaque link values
    pub links: Vec<serde_json::Value>,

    /// Canvas coordinates
    pub position: Position,

    /// Whether the node's children are shown in the UI
    pub expanded: bool,

    /// Child node ids, in creation order
    pub children: Vec<String>,

    /// Parent node id, `None` for roots (serialized as `null`)
    pub parent: Option<String>,

    /// Depth in the tree
    pub level: i64,
}

impl Node {
    /// Build a full node from a partial create payload.
    ///
    /// Every omitted field is filled from its documented default; an omitted
    /// `id` gets a freshly generated UUID.
    pub fn from_input(input: CreateNodeInput) -> Self {
        let id = input.id.unwrap_or_else(generate_node_id);

        Self {
            id,
            title: input.title.unwrap_or_else(|| DEFAULT_NODE_TITLE.to_string()),
            description: input.description.unwrap_or_default(),
            color: input.color.unwrap_or_else(|| DEFAULT_NODE_COLOR.to_string()),
            links: input.links.unwrap_or_default(),
            position: input.position.unwrap_or_default(),
            expanded: input.expanded.unwrap_or(true),
            children: input.children.unwrap_or_default(),
            parent: input.parent,
            level: input.level.unwrap_or(0),
        }
    }

    /// Apply a partial update, merging only the fields present in `update`.
    ///
    /// The id is not updatable. `parent` uses the double-Option pattern so
    /// an explicit `null` clears the field while an omitted key leaves it
    /// untouched.
    pub fn apply_update(&mut self, update: NodeUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(color) = update.color {
            self.color = color;
        }
        if let Some(links) = update.links {
            self.links = links;
        }
        if let Some(position) = update.position {
            self.position = position;
        }
        if let Some(expanded) = update.expanded {
            self.expanded = expanded;
        }
        if let Some(children) = update.children {
            self.children = children;
        }
        if let Some(parent) = update.parent {
            self.parent = parent;
        }
        if let Some(level) = update.level {
            self.level = level;
        }
    }
}

/// Generate a fresh node id (UUID v4 string).
pub fn generate_node_id() -> String {
    Uuid::new_v4().to_string()
}

/// Partial payload for node creation.
///
/// Every field is optional; `Node::from_input` fills the gaps with the
/// documented defaults. The branch endpoint reuses this struct but only
/// honors `id`, `title`, `description`, `color`, and `links`; layout
/// fields are always computed from the parent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateNodeInput {
    /// Optional explicit id. If `None`, a UUID is generated. An id that
    /// collides with an existing node silently overwrites it.
    pub id: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub links: Option<Vec<serde_json::Value>>,
    pub position: Option<Position>,
    pub expanded: Option<bool>,
    pub children: Option<Vec<String>>,
    pub parent: Option<String>,
    pub level: Option<i64>,
}

/// Deserialize a double-Option field.
///
/// - Missing field → `None` (don't update)
/// - `null` → `Some(None)` (clear)
/// - `"value"` → `Some(Some("value"))` (set)
fn deserialize_optional_field<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    // Missing field is handled by #[serde(default)] on the struct field
    Ok(Some(Option::<T>::deserialize(deserializer)?))
}

/// Partial node update payload for PUT operations.
///
/// Only the whitelisted fields below can be updated; the id cannot. Fields
/// absent from the payload are left unchanged.
///
/// # Double-Option Pattern
///
/// `parent` distinguishes three states:
///
/// - `None`: Don't change parent
/// - `Some(None)`: Set parent to `null` (make the node a root)
/// - `Some(Some(id))`: Set parent to the given id
///
/// # Consistency
///
/// Setting `parent` or `children` here does not validate that the
/// referenced ids exist and does not repair the old or new parent's
/// `children` list. The caller owns consistency for these two fields.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NodeUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub color: Option<String>,
    pub links: Option<Vec<serde_json::Value>>,
    pub position: Option<Position>,
    pub expanded: Option<bool>,
    pub children: Option<Vec<String>>,

    /// Update parent reference
    ///
    /// Uses double-Option pattern:
    /// - `None`: Don't change parent
    /// - `Some(None)`: Set parent to NULL (node becomes a root)
    /// - `Some(Some(id))`: Set parent to the specified id
    #[serde(default, deserialize_with = "deserialize_optional_field")]
    pub parent: Option<Option<String>>,

    pub level: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_input_defaults() {
        let node = Node::from_input(CreateNodeInput::default());

        assert_eq!(node.title, "New Node");
        assert_eq!(node.description, "");
        assert_eq!(node.color, DEFAULT_NODE_COLOR);
        assert!(node.links.is_empty());
        assert_eq!(node.position, Position::new(100.0, 100.0));
        assert!(node.expanded);
        assert!(node.children.is_empty());
        assert_eq!(node.parent, None);
        assert_eq!(node.level, 0);
        // Generated id is a parseable UUID
        assert!(Uuid::parse_str(&node.id).is_ok());
    }

    #[test]
    fn test_node_serializes_null_parent() {
        let node = Node::from_input(CreateNodeInput::default());
        let value = serde_json::to_value(&node).unwrap();

        // Roots carry an explicit null, not a missing key
        assert!(value.get("parent").is_some());
        assert_eq!(value["parent"], json!(null));
    }

    #[test]
    fn test_create_input_from_empty_object() {
        let input: CreateNodeInput = serde_json::from_value(json!({})).unwrap();
        assert!(input.id.is_none());
        assert!(input.title.is_none());
    }

    #[test]
    fn test_node_update_parent_double_option() {
        // Absent key: don't touch parent
        let update: NodeUpdate = serde_json::from_value(json!({"title": "X"})).unwrap();
        assert_eq!(update.parent, None);

        // Explicit null: clear parent
        let update: NodeUpdate = serde_json::from_value(json!({"parent": null})).unwrap();
        assert_eq!(update.parent, Some(None));

        // Explicit value: set parent
        let update: NodeUpdate = serde_json::from_value(json!({"parent": "node-1"})).unwrap();
        assert_eq!(update.parent, Some(Some("node-1".to_string())));
    }

    #[test]
    fn test_apply_update_merges_only_provided_fields() {
        let mut node = Node::from_input(CreateNodeInput {
            id: Some("n1".to_string()),
            ..Default::default()
        });
        let before = node.clone();

        node.apply_update(NodeUpdate {
            title: Some("Renamed".to_string()),
            ..Default::default()
        });

        assert_eq!(node.title, "Renamed");
        assert_eq!(node.description, before.description);
        assert_eq!(node.color, before.color);
        assert_eq!(node.position, before.position);
        assert_eq!(node.parent, before.parent);
        assert_eq!(node.level, before.level);
    }
}
