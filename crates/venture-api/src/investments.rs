//! Handlers for `/investments` endpoints.
//!
//! Only investors record investments, never into their own projects.

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use serde::Deserialize;
use uuid::Uuid;

use venture_core::{
  investment::{Investment, NewInvestment},
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
pub struct CreateInvestmentBody {
  pub project_id: Uuid,
  pub amount:     f64,
}

/// `POST /investments` — investors only; the target project must exist
/// and must not belong to the caller.
pub async fn create<S>(
  State(state): State<ApiState<S>>,
  CurrentUser(user): CurrentUser,
  Json(body): Json<CreateInvestmentBody>,
) -> Result<(StatusCode, Json<Investment>), ApiError>
where
  S: PlatformStore + 'static,
{
  require_role(&user, &[Role::Investor])?;

  let input = NewInvestment {
    investor_id: user.id,
    project_id:  body.project_id,
    amount:      body.amount,
  };
  input.validate()?;

  let project = state
    .store
    .get_project(input.project_id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| {
      ApiError::NotFound(format!("project {} not found", input.project_id))
    })?;

  if project.owner_id == user.id {
    return Err(ApiError::BadRequest(
      "cannot invest in your own project".to_string(),
    ));
  }

  let investment = state
    .store
    .add_investment(input)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(investment)))
}

/// `GET /investments` — the caller's own investments.
pub async fn list_mine<S>(
  State(state): State<ApiState<S>>,
  CurrentUser(user): CurrentUser,
) -> Result<Json<Vec<Investment>>, ApiError>
where
  S: PlatformStore + 'static,
{
  require_role(&user, &[Role::Investor])?;
  let investments = state
    .store
    .investments_by_investor(user.id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(investments))
}

/// `GET /investments/project/{id}` — all investments into one project.
pub async fn by_project<S>(
  State(state): State<ApiState<S>>,
  CurrentUser(_user): CurrentUser,
  Path(id): Path<Uuid>,
) -> Result<Json<Vec<Investment>>, ApiError>
where
  S: PlatformStore + 'static,
{
  let investments = state
    .store
    .investments_by_project(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(investments))
}

/// `DELETE /investments/{id}` — the investing user (admins pass the
/// ownership rule but not the investor route guard, as on the original
/// platform).
pub async fn remove<S>(
  State(state): State<ApiState<S>>,
  CurrentUser(user): CurrentUser,
  Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError>
where
  S: PlatformStore + 'static,
{
  require_role(&user, &[Role::Investor])?;

  let investment = state
    .store
    .get_investment(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| ApiError::NotFound(format!("investment {id} not found")))?;
  require_owner_or_admin(&user, investment.investor_id)?;

  state
    .store
    .delete_investment(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(StatusCode::NO_CONTENT)
}
