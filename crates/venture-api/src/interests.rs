//! Handlers for `/interests` endpoints.
//!
//! Interest tags are managed by admins; anyone authenticated can list
//! them, and a single tag is readable without authentication.

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use venture_core::{
  interest::{Interest, NewInterest},
  store::PlatformStore,
  user::Role,
};

use crate::{
  ApiState,
  auth::{CurrentUser, require_role},
  error::ApiError,
};

#[derive(Debug, Deserialize)]
pub struct CreateInterestBody {
  pub name:        String,
  pub description: Option<String>,
}

/// `POST /interests` — admin only; names are unique.
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  CurrentUser(user): CurrentUser,
  Json(body): Json<CreateInterestBody>,
) -> Result<(StatusCode, Json<Interest>), ApiError>
where
  S: PlatformStore + 'static,
{
  require_role(&user, &[Role::Admin])?;

  let input = NewInterest { name: body.name, description: body.description };
  input.validate()?;

  let taken = state
    .store
    .find_interest_by_name(&input.name)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .is_some();
  if taken {
    return Err(ApiError::Conflict(format!(
      "interest {:?} already exists",
      input.name
    )));
  }

  let interest = state
    .store
    .add_interest(input)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(interest)))
}

/// `GET /interests`
pub async fn list<S>(
  State(state): State<ApiState<S>>,
  CurrentUser(_user): CurrentUser,
) -> Result<Json<Vec<Interest>>, ApiError>
where
  S: PlatformStore + 'static,
{
  let interests = state
    .store
    .list_interests()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(interests))
}

/// `GET /interests/{id}` — no authentication required.
pub async fn get_one<S>(
  State(state): State<ApiState<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<Interest>, ApiError>
where
  S: PlatformStore + 'static,
{
  let interest = state
    .store
    .get_interest(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("interest {id} not found")))?;
  Ok(Json(interest))
}

/// `DELETE /interests/{id}` — admin only.
pub async fn remove<S>(
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
    .delete_interest(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if !deleted {
    return Err(ApiError::NotFound(format!("interest {id} not found")));
  }
  Ok(StatusCode::NO_CONTENT)
}
