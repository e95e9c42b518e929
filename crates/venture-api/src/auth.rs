//! Credential hashing, bearer tokens, and the authenticated-user
//! extractor.
//!
//! Login issues an opaque token (32 random bytes, URL-safe base64); only
//! its SHA-256 digest is persisted, so a leaked database never yields a
//! usable token. Handlers receive the caller as [`CurrentUser`], with
//! the interest set already loaded.

use argon2::{
  Argon2, PasswordHash, PasswordHasher, PasswordVerifier,
  password_hash::SaltString,
};
use axum::{
  Json,
  extract::{FromRequestParts, State},
  http::{HeaderMap, StatusCode, header, request::Parts},
};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD as B64;
use chrono::Utc;
use rand_core::{OsRng, RngCore as _};
use serde::{Deserialize, Serialize};
use sha2::{Digest as _, Sha256};
use uuid::Uuid;

use venture_core::{
  session::NewSession,
  store::PlatformStore,
  user::{NewUser, Role, User, validate_password},
};

use crate::{ApiState, error::ApiError};

// ─── Passwords ───────────────────────────────────────────────────────────────

/// Hash a plaintext password into an argon2 PHC string.
pub fn hash_password(password: &str) -> Result<String, ApiError> {
  let salt = SaltString::generate(&mut OsRng);
  Argon2::default()
    .hash_password(password.as_bytes(), &salt)
    .map(|hash| hash.to_string())
    .map_err(|e| ApiError::Internal(format!("argon2 error: {e}")))
}

/// Verify a plaintext password against a stored PHC string. Any parse
/// failure counts as a mismatch.
pub fn verify_password(password: &str, phc: &str) -> bool {
  let Ok(parsed) = PasswordHash::new(phc) else {
    return false;
  };
  Argon2::default()
    .verify_password(password.as_bytes(), &parsed)
    .is_ok()
}

// ─── Tokens ──────────────────────────────────────────────────────────────────

/// Generate a fresh opaque bearer token.
pub fn generate_token() -> String {
  let mut bytes = [0u8; 32];
  OsRng.fill_bytes(&mut bytes);
  B64.encode(bytes)
}

/// The digest under which a token is stored and looked up.
pub fn token_digest(token: &str) -> String {
  hex::encode(Sha256::digest(token.as_bytes()))
}

/// Extract the bearer token from an `Authorization` header, if present.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
  headers
    .get(header::AUTHORIZATION)
    .and_then(|v| v.to_str().ok())
    .and_then(|v| v.strip_prefix("Bearer "))
}

// ─── Guards ──────────────────────────────────────────────────────────────────

/// Reject callers whose role is not in `allowed`.
pub fn require_role(user: &User, allowed: &[Role]) -> Result<(), ApiError> {
  if allowed.contains(&user.role) {
    Ok(())
  } else {
    Err(ApiError::Forbidden)
  }
}

/// Owner-or-admin rule shared by project and investment mutation.
pub fn require_owner_or_admin(user: &User, owner_id: Uuid) -> Result<(), ApiError> {
  if user.id == owner_id || user.role == Role::Admin {
    Ok(())
  } else {
    Err(ApiError::Forbidden)
  }
}

// ─── Extractor ───────────────────────────────────────────────────────────────

/// The authenticated caller, resolved from a live session.
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<ApiState<S>> for CurrentUser
where
  S: PlatformStore + 'static,
{
  type Rejection = ApiError;

  async fn from_request_parts(
    parts: &mut Parts,
    state: &ApiState<S>,
  ) -> Result<Self, Self::Rejection> {
    let token = bearer_token(&parts.headers).ok_or(ApiError::Unauthorized)?;
    let digest = token_digest(token);

    let session = state
      .store
      .find_session(&digest)
      .await
      .map_err(|e| ApiError::Store(Box::new(e)))?
      .ok_or(ApiError::Unauthorized)?;

    if session.is_expired(Utc::now()) {
      return Err(ApiError::Unauthorized);
    }

    let user = state
      .store
      .get_user(session.user_id)
      .await
      .map_err(|e| ApiError::Store(Box::new(e)))?
      .ok_or(ApiError::Unauthorized)?;

    Ok(CurrentUser(user))
  }
}

// ─── Handlers ────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterBody {
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub password:   String,
  /// Defaults to entrepreneur, as on the platform's sign-up form.
  #[serde(default)]
  pub role:       Role,
}

/// `POST /auth/register`
pub async fn register<S>(
  State(state): State<ApiState<S>>,
  Json(body): Json<RegisterBody>,
) -> Result<(StatusCode, Json<User>), ApiError>
where
  S: PlatformStore + 'static,
{
  validate_password(&body.password)?;

  let input = NewUser {
    first_name:    body.first_name,
    last_name:     body.last_name,
    email:         body.email,
    password_hash: hash_password(&body.password)?,
    role:          body.role,
  };
  input.validate()?;

  let taken = state
    .store
    .find_user_by_email(&input.email)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .is_some();
  if taken {
    return Err(ApiError::Conflict(format!(
      "email {:?} is already registered",
      input.email
    )));
  }

  let user = state
    .store
    .add_user(input)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok((StatusCode::CREATED, Json(user)))
}

#[derive(Debug, Deserialize)]
pub struct LoginBody {
  pub email:    String,
  pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
  pub token: String,
  pub user:  User,
}

/// `POST /auth/login`
///
/// Unknown email and wrong password are indistinguishable to the caller.
pub async fn login<S>(
  State(state): State<ApiState<S>>,
  Json(body): Json<LoginBody>,
) -> Result<Json<LoginResponse>, ApiError>
where
  S: PlatformStore + 'static,
{
  let user = state
    .store
    .find_user_by_email(&body.email)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or(ApiError::Unauthorized)?;

  if !verify_password(&body.password, &user.password_hash) {
    return Err(ApiError::Unauthorized);
  }

  let token = generate_token();
  state
    .store
    .create_session(NewSession {
      user_id:      user.id,
      token_digest: token_digest(&token),
      expires_at:   Utc::now() + state.session_ttl,
    })
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  tracing::info!(user = %user.id, "login");
  Ok(Json(LoginResponse { token, user }))
}

/// `POST /auth/logout` — drop the presented session. Idempotent.
pub async fn logout<S>(
  State(state): State<ApiState<S>>,
  headers: HeaderMap,
) -> Result<StatusCode, ApiError>
where
  S: PlatformStore + 'static,
{
  let token = bearer_token(&headers).ok_or(ApiError::Unauthorized)?;
  state
    .store
    .delete_session(&token_digest(token))
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(StatusCode::NO_CONTENT)
}
