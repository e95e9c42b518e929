//! Handlers for `/users` endpoints.
//!
//! | Method   | Path               | Notes                                  |
//! |----------|--------------------|----------------------------------------|
//! | `GET`    | `/users`           | Admin only                             |
//! | `GET`    | `/users/profile`   | The authenticated caller               |
//! | `PATCH`  | `/users/profile`   | Partial update, may replace interests  |
//! | `DELETE` | `/users/{id}`      | Admin only                             |
//! | `GET`    | `/users/interests` | Caller's interest tags                 |
//! | `POST`   | `/users/interests` | Append interests by id                 |

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use venture_core::{
  interest::Interest,
  store::PlatformStore,
  user::{Role, User, UserUpdate, validate_password},
};

use crate::{
  ApiState,
  auth::{CurrentUser, hash_password, require_role},
  error::ApiError,
};

/// `GET /users` — admin only.
pub async fn list<S>(
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

/// `GET /users/profile`
pub async fn profile<S>(CurrentUser(user): CurrentUser) -> Json<User>
where
  S: PlatformStore + 'static,
{
  Json(user)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileBody {
  pub first_name:   Option<String>,
  pub last_name:    Option<String>,
  pub email:        Option<String>,
  pub password:     Option<String>,
  /// Replaces the whole interest set when present.
  pub interest_ids: Option<Vec<Uuid>>,
}

/// `PATCH /users/profile`
pub async fn update_profile<S>(
  State(state): State<ApiState<S>>,
  CurrentUser(user): CurrentUser,
  Json(body): Json<UpdateProfileBody>,
) -> Result<Json<User>, ApiError>
where
  S: PlatformStore + 'static,
{
  let password_hash = match body.password.as_deref() {
    Some(password) => {
      validate_password(password)?;
      Some(hash_password(password)?)
    }
    None => None,
  };

  let update = UserUpdate {
    first_name: body.first_name,
    last_name: body.last_name,
    email: body.email,
    password_hash,
    interest_ids: body.interest_ids,
  };
  update.validate()?;

  if let Some(email) = update.email.as_deref() {
    let holder = state
      .store
      .find_user_by_email(email)
      .await
      .map_err(|e| ApiError::Store(Box::new(e)))?;
    if holder.is_some_and(|existing| existing.id != user.id) {
      return Err(ApiError::Conflict(format!(
        "email {email:?} is already registered"
      )));
    }
  }

  let updated = state
    .store
    .update_user(user.id, update)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("user {} not found", user.id)))?;
  Ok(Json(updated))
}

/// `DELETE /users/{id}` — admin only.
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
    .delete_user(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if !deleted {
    return Err(ApiError::NotFound(format!("user {id} not found")));
  }
  Ok(StatusCode::NO_CONTENT)
}

/// `GET /users/interests` — the caller's interest tags.
pub async fn interests<S>(CurrentUser(user): CurrentUser) -> Json<Vec<Interest>>
where
  S: PlatformStore + 'static,
{
  Json(user.interests)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddInterestsBody {
  pub interest_ids: Vec<Uuid>,
}

/// `POST /users/interests` — append interests to the caller's set.
pub async fn add_interests<S>(
  State(state): State<ApiState<S>>,
  CurrentUser(user): CurrentUser,
  Json(body): Json<AddInterestsBody>,
) -> Result<Json<User>, ApiError>
where
  S: PlatformStore + 'static,
{
  let updated = state
    .store
    .add_user_interests(user.id, body.interest_ids)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("user {} not found", user.id)))?;
  Ok(Json(updated))
}
