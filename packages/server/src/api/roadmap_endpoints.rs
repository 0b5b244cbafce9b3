//! Roadmap REST Endpoints
//!
//! One handler per store operation, plus the static rendering UI:
//!
//! - `GET /` - rendering UI (static HTML page)
//! - `GET /api/roadmap` - full store state
//! - `POST /api/roadmap/node` - create a node
//! - `PUT /api/roadmap/node/:id` - partial update of a node
//! - `DELETE /api/roadmap/node/:id` - delete a node and its subtree
//! - `POST /api/roadmap/node/:parent_id/branch` - create a child node with
//!   auto-computed position and level

use axum::{
    extract::{Path, State},
    response::{Html, Json},
    routing::{delete, get, post, put},
    Router,
};
use serde::Serialize;

use roadmap_core::{CreateNodeInput, Node, NodeUpdate, Roadmap};

use crate::api::{ApiError, AppState};

/// Success envelope for operations returning a single node.
#[derive(Debug, Serialize)]
pub struct NodeResponse {
    pub success: bool,
    pub node: Node,
}

/// Success envelope for deletions.
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Success envelope for branch creation: the new child plus the updated
/// parent.
#[derive(Debug, Serialize)]
pub struct BranchResponse {
    pub success: bool,
    pub node: Node,
    pub parent: Node,
}

/// Serve the rendering UI.
///
/// The page is an external collaborator of the JSON API; it is bundled into
/// the binary so the server stays a single artifact.
async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Get the full roadmap.
///
/// Returns every node plus the reserved `connections`/`branches` maps,
/// verbatim. No filtering, no pagination.
///
/// # Example
///
/// ```bash
/// curl http://localhost:5000/api/roadmap
/// ```
async fn get_roadmap(State(state): State<AppState>) -> Json<Roadmap> {
    let roadmap = state.roadmap.read().unwrap().roadmap().clone();
    Json(roadmap)
}

/// Create a new node.
///
/// Accepts a partial node; omitted fields take their defaults and an
/// omitted `id` is generated. Always succeeds; a colliding `id` silently
/// overwrites the existing node.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:5000/api/roadmap/node \
///   -H "Content-Type: application/json" \
///   -d '{"title": "Learn Rust", "position": {"x": 200, "y": 80}}'
/// ```
async fn create_node(
    State(state): State<AppState>,
    Json(input): Json<CreateNodeInput>,
) -> Json<NodeResponse> {
    let node = state.roadmap.write().unwrap().create_node(input);
    tracing::debug!("✅ Created node: {}", node.id);

    Json(NodeResponse {
        success: true,
        node,
    })
}

/// Update an existing node.
///
/// Merges only the fields present in the body (partial update). Send
/// `"parent": null` to clear the parent; omit the key to keep it.
///
/// # Example
///
/// ```bash
/// curl -X PUT http://localhost:5000/api/roadmap/node/my-node \
///   -H "Content-Type: application/json" \
///   -d '{"title": "Updated title"}'
/// ```
async fn update_node(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(update): Json<NodeUpdate>,
) -> Result<Json<NodeResponse>, ApiError> {
    let node = state.roadmap.write().unwrap().update_node(&id, update)?;
    tracing::debug!("✅ Updated node: {}", id);

    Ok(Json(NodeResponse {
        success: true,
        node,
    }))
}

/// Delete a node and its entire subtree.
///
/// # Example
///
/// ```bash
/// curl -X DELETE http://localhost:5000/api/roadmap/node/my-node
/// ```
async fn delete_node(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteResponse>, ApiError> {
    state.roadmap.write().unwrap().delete_node(&id)?;
    tracing::debug!("✅ Deleted node: {}", id);

    Ok(Json(DeleteResponse { success: true }))
}

/// Create a new child node under an existing parent.
///
/// The child inherits the parent's color unless the body overrides it, sits
/// one level deeper, and is laid out 250 px right of the parent with a
/// 60 px vertical stagger per existing sibling. Returns both the child and
/// the updated parent.
///
/// # Example
///
/// ```bash
/// curl -X POST http://localhost:5000/api/roadmap/node/my-node/branch \
///   -H "Content-Type: application/json" \
///   -d '{"title": "Sub-topic"}'
/// ```
async fn create_branch(
    State(state): State<AppState>,
    Path(parent_id): Path<String>,
    Json(input): Json<CreateNodeInput>,
) -> Result<Json<BranchResponse>, ApiError> {
    let (node, parent) = state
        .roadmap
        .write()
        .unwrap()
        .create_branch(&parent_id, input)?;
    tracing::debug!("✅ Branched node {} under {}", node.id, parent_id);

    Ok(Json(BranchResponse {
        success: true,
        node,
        parent,
    }))
}

/// Create router with all roadmap endpoints.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/roadmap", get(get_roadmap))
        .route("/api/roadmap/node", post(create_node))
        .route("/api/roadmap/node/:id", put(update_node))
        .route("/api/roadmap/node/:id", delete(delete_node))
        .route("/api/roadmap/node/:parent_id/branch", post(create_branch))
        .with_state(state)
}
