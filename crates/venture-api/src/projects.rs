//! Handlers for `/projects` endpoints.
//!
//! | Method   | Path                     | Notes                           |
//! |----------|--------------------------|---------------------------------|
//! | `POST`   | `/projects`              | Entrepreneurs; owner = caller   |
//! | `GET`    | `/projects`              | All projects                    |
//! | `GET`    | `/projects/recommended`  | Interest-based matcher          |
//! | `GET`    | `/projects/{id}`         | 404 if missing                  |
//! | `PATCH`  | `/projects/{id}`         | Entrepreneurs; owner only       |
//! | `DELETE` | `/projects/{id}`         | Owner or admin                  |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use venture_core::{
  project::{NewProject, Project, ProjectUpdate},
  recommend::{RecommendError, recommend_for_user},
  store::PlatformStore,
  user::Role,
};

use crate::{
  ApiState,
  auth::{CurrentUser, require_owner_or_admin, require_role},
  error::ApiError,
};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectBody {
  pub title:       String,
  pub description: String,
  pub budget:      f64,
  pub category:    String,
}

/// `POST /projects` — entrepreneurs only; the caller becomes the owner.
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  CurrentUser(user): CurrentUser,
  Json(body): Json<CreateProjectBody>,
) -> Result<(StatusCode, Json<Project>), ApiError>
where
  S: PlatformStore + 'static,
{
  require_role(&user, &[Role::Entrepreneur])?;

  let input = NewProject {
    title:       body.title,
    description: body.description,
    budget:      body.budget,
    category:    body.category,
    owner_id:    user.id,
  };
  input.validate()?;

  let project = state
    .store
    .add_project(input)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(project)))
}

/// `GET /projects`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
  CurrentUser(_user): CurrentUser,
) -> Result<Json<Vec<Project>>, ApiError>
where
  S: PlatformStore + 'static,
{
  let projects = state
    .store
    .list_projects()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(projects))
}

/// `GET /projects/recommended` — the interest-based matcher.
///
/// A caller with no declared interests gets the full, unfiltered list.
pub async fn recommended<S>(
  State(state): State<ApiState<S>>,
  CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<Project>>, ApiError>
where
  S: PlatformStore + 'static,
{
  let projects = recommend_for_user(state.store.as_ref(), user.id)
    .await
    .map_err(|e| match e {
      RecommendError::UnknownUser(id) => {
        ApiError::NotFound(format!("user {id} not found"))
      }
      RecommendError::Source(e) => ApiError::Store(Box::new(e)),
    })?;
  Ok(Json(projects))
}

/// `GET /projects/{id}`
pub async fn get_one<S>(
  State(state): State<ApiState<S>>,
  CurrentUser(_user): CurrentUser,
  Path(id): Path<Uuid>,
) -> Result<Json<Project>, ApiError>
where
  S: PlatformStore + 'static,
{
  let project = state
    .store
    .get_project(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("project {id} not found")))?;
  Ok(Json(project))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProjectBody {
  pub title:       Option<String>,
  pub description: Option<String>,
  pub budget:      Option<f64>,
  pub category:    Option<String>,
}

/// `PATCH /projects/{id}` — entrepreneurs only, and only their own.
pub async fn update<S>(
  State(state): State<ApiState<S>>,
  CurrentUser(user): CurrentUser,
  Path(id): Path<Uuid>,
  Json(body): Json<UpdateProjectBody>,
) -> Result<Json<Project>, ApiError>
where
  S: PlatformStore + 'static,
{
  require_role(&user, &[Role::Entrepreneur])?;

  let project = state
    .store
    .get_project(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("project {id} not found")))?;
  require_owner_or_admin(&user, project.owner_id)?;

  let update = ProjectUpdate {
    title:       body.title,
    description: body.description,
    budget:      body.budget,
    category:    body.category,
  };
  update.validate()?;

  let updated = state
    .store
    .update_project(id, update)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("project {id} not found")))?;
  Ok(Json(updated))
}

/// `DELETE /projects/{id}` — the owner, or an admin.
pub async fn remove<S>(
  State(state): State<ApiState<S>>,
  CurrentUser(user): CurrentUser,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: PlatformStore + 'static,
{
  require_role(&user, &[Role::Entrepreneur, Role::Admin])?;

  let project = state
    .store
    .get_project(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("project {id} not found")))?;
  require_owner_or_admin(&user, project.owner_id)?;

  state
    .store
    .delete_project(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(StatusCode::NO_CONTENT)
}
