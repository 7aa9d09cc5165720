//! Axum HTTP adapter for the registry service

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    application::{dto::CreateGroupRequest, services::RegistryService},
    domain::{
        DomainError,
        entities::{GroupDetail, GroupSummary, Student},
        ports::{GroupStore, StudentDirectory},
        value_objects::GroupId,
    },
};

/// Axum application state holding the registry service
pub struct AppState<R> {
    registry: Arc<RegistryService<R>>,
}

impl<R> AppState<R> {
    pub fn new(registry: RegistryService<R>) -> Self {
        Self {
            registry: Arc::new(registry),
        }
    }
}

// Hand-written so R itself does not need Clone
impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

/// Create the registry API router
///
/// Mounts the five registry routes plus `/api/health`, with permissive CORS
/// (the service fronts a browser client) and per-request tracing.
pub fn api_router<R>(state: AppState<R>) -> Router
where
    R: StudentDirectory + GroupStore + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/api/groups",
            get(list_groups::<R>).post(create_group::<R>),
        )
        .route(
            "/api/groups/{id}",
            get(group_detail::<R>).delete(delete_group::<R>),
        )
        .route("/api/students", get(list_students::<R>))
        .route("/api/health", get(health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// List all groups in insertion order
async fn list_groups<R>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<GroupSummary>>, ApiError>
where
    R: StudentDirectory + GroupStore + Send + Sync + 'static,
{
    let groups = state.registry.list_groups().await?;
    Ok(Json(groups))
}

/// List all students in seed order
async fn list_students<R>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<Student>>, ApiError>
where
    R: StudentDirectory + GroupStore + Send + Sync + 'static,
{
    let students = state.registry.list_students().await?;
    Ok(Json(students))
}

/// Create a group from member names
async fn create_group<R>(
    State(state): State<AppState<R>>,
    Json(request): Json<CreateGroupRequest>,
) -> Result<Json<GroupSummary>, ApiError>
where
    R: StudentDirectory + GroupStore + Send + Sync + 'static,
{
    let group = state.registry.create_group(request).await?;
    Ok(Json(group))
}

/// Delete a group by id, succeeding whether or not it existed
async fn delete_group<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<u64>,
) -> Result<StatusCode, ApiError>
where
    R: StudentDirectory + GroupStore + Send + Sync + 'static,
{
    state.registry.delete_group(GroupId::new(id)).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get a group with its member ids resolved to student records
async fn group_detail<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<u64>,
) -> Result<Json<GroupDetail>, ApiError>
where
    R: StudentDirectory + GroupStore + Send + Sync + 'static,
{
    let detail = state.registry.group_detail(GroupId::new(id)).await?;
    Ok(Json(detail))
}

/// Process health endpoint
async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Registry errors as they surface over HTTP
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let ApiError::Domain(domain) = self;

        // Plain-text bodies with these exact messages are part of the wire
        // contract.
        let (status, body) = match &domain {
            DomainError::UnknownMember { name } => {
                tracing::warn!(member = %name, "group creation rejected: unresolved member");
                (StatusCode::BAD_REQUEST, "Invalid member input")
            }
            DomainError::GroupNotFound { id } => {
                tracing::debug!(group = %id, "group lookup missed");
                (StatusCode::NOT_FOUND, "Group not found")
            }
        };

        (status, body).into_response()
    }
}
