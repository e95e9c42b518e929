//! Handlers for `/admin` endpoints — admin-only pass-throughs over the
//! collection reads and the user delete.

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use uuid::Uuid;

use venture_core::{
  investment::Investment,
  project::Project,
  store::PlatformStore,
  user::{Role, User},
};

use crate::{
  ApiState,
  auth::{CurrentUser, require_role},
  error::ApiError,
};

/// `GET /admin/users`
pub async fn list_users<S>(
  State(state): State<ApiState<S>>,
  CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<User>>, ApiError>
where
  S: PlatformStore + 'static,
{
  require_role(&user, &[Role::Admin])?;
  let users = state
    .store
    .list_users()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(users))
}

/// `DELETE /admin/users/{id}`
pub async fn remove_user<S>(
  State(state): State<ApiState<S>>,
  CurrentUser(user): CurrentUser,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: PlatformStore + 'static,
{
  require_role(&user, &[Role::Admin])?;
  let deleted = state
    .store
    .delete_user(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if !deleted {
    return Err(ApiError::NotFound(format!("user {id} not found")));
  }
  Ok(StatusCode::NO_CONTENT)
}

/// `GET /admin/investments`
pub async fn list_investments<S>(
  State(state): State<ApiState<S>>,
  CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<Investment>>, ApiError>
where
  S: PlatformStore + 'static,
{
  require_role(&user, &[Role::Admin])?;
  let investments = state
    .store
    .list_investments()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(investments))
}

/// `GET /admin/projects`
pub async fn list_projects<S>(
  State(state): State<ApiState<S>>,
  CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<Project>>, ApiError>
where
  S: PlatformStore + 'static,
{
  require_role(&user, &[Role::Admin])?;
  let projects = state
    .store
    .list_projects()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(projects))
}
