//! JSON REST API for the venture matchmaking platform.
//!
//! Exposes an axum [`Router`] backed by any
//! [`venture_core::store::PlatformStore`]. TLS and transport concerns
//! are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", venture_api::api_router(state))
//! ```

pub mod admin;
pub mod auth;
pub mod error;
pub mod interests;
pub mod investments;
pub mod projects;
pub mod seed;
pub mod users;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get, post},
};
use venture_core::store::PlatformStore;

pub use error::ApiError;

/// Shared state threaded through all handlers.
pub struct ApiState<S: PlatformStore> {
  pub store:       Arc<S>,
  /// Lifetime of a session issued at login.
  pub session_ttl: chrono::Duration,
}

impl<S: PlatformStore> Clone for ApiState<S> {
  fn clone(&self) -> Self {
    Self {
      store:       Arc::clone(&self.store),
      session_ttl: self.session_ttl,
    }
  }
}

/// Build a fully-materialised API router for `state`.
///
/// The returned `Router<()>` can be nested into any parent router
/// regardless of its own state type.
pub fn api_router<S>(state: ApiState<S>) -> Router<()>
where
  S: PlatformStore + 'static,
{
  Router::new()
    // Auth
    .route("/auth/register", post(auth::register::<S>))
    .route("/auth/login", post(auth::login::<S>))
    .route("/auth/logout", post(auth::logout::<S>))
    // Users
    .route("/users", get(users::list::<S>))
    .route(
      "/users/profile",
      get(users::profile::<S>).patch(users::update_profile::<S>),
    )
    .route(
      "/users/interests",
      get(users::interests::<S>).post(users::add_interests::<S>),
    )
    .route("/users/{id}", delete(users::remove::<S>))
    // Projects
    .route(
      "/projects",
      get(projects::list::<S>).post(projects::create::<S>),
    )
    .route("/projects/recommended", get(projects::recommended::<S>))
    .route(
      "/projects/{id}",
      get(projects::get_one::<S>)
        .patch(projects::update::<S>)
        .delete(projects::remove::<S>),
    )
    // Interests
    .route(
      "/interests",
      get(interests::list::<S>).post(interests::create::<S>),
    )
    .route(
      "/interests/{id}",
      get(interests::get_one::<S>).delete(interests::remove::<S>),
    )
    // Investments
    .route(
      "/investments",
      get(investments::list_mine::<S>).post(investments::create::<S>),
    )
    .route("/investments/project/{id}", get(investments::by_project::<S>))
    .route("/investments/{id}", delete(investments::remove::<S>))
    // Admin
    .route("/admin/users", get(admin::list_users::<S>))
    .route("/admin/users/{id}", delete(admin::remove_user::<S>))
    .route("/admin/investments", get(admin::list_investments::<S>))
    .route("/admin/projects", get(admin::list_projects::<S>))
    // Seeds
    .route("/seeds", post(seed::run::<S>))
    .with_state(state)
}

// ─── Integration tests ───────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use std::sync::Arc;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
  };
  use chrono::Duration;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;
  use uuid::Uuid;
  use venture_core::{
    project::NewProject, store::PlatformStore as _, user::Role,
  };
  use venture_store_sqlite::SqliteStore;

  use super::*;

  async fn make_state() -> ApiState<SqliteStore> {
    let store = SqliteStore::open_in_memory().await.unwrap();
    ApiState {
      store:       Arc::new(store),
      session_ttl: Duration::hours(24),
    }
  }

  async fn request(
    state: &ApiState<SqliteStore>,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
  ) -> Response {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
      builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let req = match body {
      Some(json) => builder
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap(),
      None => builder.body(Body::empty()).unwrap(),
    };
    api_router(state.clone()).oneshot(req).await.unwrap()
  }

  async fn body_json(resp: Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    serde_json::from_slice(&bytes).unwrap()
  }

  async fn register(
    state: &ApiState<SqliteStore>,
    email: &str,
    role: &str,
  ) -> Uuid {
    let resp = request(state, "POST", "/auth/register", None, Some(json!({
      "firstName": "Test",
      "lastName":  "User",
      "email":     email,
      "password":  "password123",
      "role":      role,
    })))
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = body_json(resp).await;
    Uuid::parse_str(json["id"].as_str().unwrap()).unwrap()
  }

  async fn login(state: &ApiState<SqliteStore>, email: &str) -> String {
    let resp = request(state, "POST", "/auth/login", None, Some(json!({
      "email":    email,
      "password": "password123",
    })))
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    json["token"].as_str().unwrap().to_string()
  }

  async fn register_and_login(
    state: &ApiState<SqliteStore>,
    email: &str,
    role: &str,
  ) -> (Uuid, String) {
    let id = register(state, email, role).await;
    let token = login(state, email).await;
    (id, token)
  }

  async fn create_project(
    state: &ApiState<SqliteStore>,
    token: &str,
    title: &str,
    category: &str,
    description: &str,
  ) -> Uuid {
    let resp = request(state, "POST", "/projects", Some(token), Some(json!({
      "title":       title,
      "description": description,
      "budget":      50000.0,
      "category":    category,
    })))
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = body_json(resp).await;
    Uuid::parse_str(json["id"].as_str().unwrap()).unwrap()
  }

  // ── Registration and login ──────────────────────────────────────────────

  #[tokio::test]
  async fn register_creates_user_and_hides_hash() {
    let state = make_state().await;
    let resp = request(&state, "POST", "/auth/register", None, Some(json!({
      "firstName": "Jean",
      "lastName":  "Dupont",
      "email":     "jean@example.com",
      "password":  "password123",
    })))
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let json = body_json(resp).await;
    assert_eq!(json["email"], "jean@example.com");
    // Role defaults to entrepreneur when the field is omitted.
    assert_eq!(json["role"], "entrepreneur");
    assert!(json.get("passwordHash").is_none());
    assert!(json.get("password").is_none());
  }

  #[tokio::test]
  async fn register_duplicate_email_conflicts() {
    let state = make_state().await;
    register(&state, "dup@example.com", "investor").await;

    let resp = request(&state, "POST", "/auth/register", None, Some(json!({
      "firstName": "Other",
      "lastName":  "User",
      "email":     "dup@example.com",
      "password":  "password123",
      "role":      "admin",
    })))
    .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
  }

  #[tokio::test]
  async fn register_rejects_bad_input() {
    let state = make_state().await;

    let resp = request(&state, "POST", "/auth/register", None, Some(json!({
      "firstName": "A",
      "lastName":  "B",
      "email":     "a@b.co",
      "password":  "short",
    })))
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let resp = request(&state, "POST", "/auth/register", None, Some(json!({
      "firstName": "A",
      "lastName":  "B",
      "email":     "not-an-email",
      "password":  "password123",
    })))
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  }

  #[tokio::test]
  async fn login_and_profile_roundtrip() {
    let state = make_state().await;
    let (id, token) =
      register_and_login(&state, "lea@example.com", "investor").await;

    let resp = request(&state, "GET", "/users/profile", Some(&token), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["id"], id.to_string());
    assert_eq!(json["email"], "lea@example.com");

    let resp = request(&state, "POST", "/auth/login", None, Some(json!({
      "email":    "lea@example.com",
      "password": "wrong-password",
    })))
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let resp = request(&state, "POST", "/auth/login", None, Some(json!({
      "email":    "nobody@example.com",
      "password": "password123",
    })))
    .await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  }

  #[tokio::test]
  async fn missing_or_garbage_token_is_unauthorized() {
    let state = make_state().await;

    let resp = request(&state, "GET", "/users/profile", None, None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(resp.headers().contains_key(header::WWW_AUTHENTICATE));

    let resp =
      request(&state, "GET", "/users/profile", Some("garbage"), None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  }

  #[tokio::test]
  async fn logout_invalidates_the_session() {
    let state = make_state().await;
    let (_, token) =
      register_and_login(&state, "out@example.com", "investor").await;

    let resp = request(&state, "POST", "/auth/logout", Some(&token), None).await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = request(&state, "GET", "/users/profile", Some(&token), None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
  }

  // ── Users ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn users_list_requires_admin() {
    let state = make_state().await;
    let (_, user_token) =
      register_and_login(&state, "user@example.com", "entrepreneur").await;
    let (_, admin_token) =
      register_and_login(&state, "admin@example.com", "admin").await;

    let resp = request(&state, "GET", "/users", Some(&user_token), None).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = request(&state, "GET", "/users", Some(&admin_token), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
  }

  #[tokio::test]
  async fn profile_update_changes_fields_and_interest_set() {
    let state = make_state().await;
    let (_, admin_token) =
      register_and_login(&state, "admin@example.com", "admin").await;
    let (_, token) =
      register_and_login(&state, "user@example.com", "investor").await;

    let resp =
      request(&state, "POST", "/interests", Some(&admin_token), Some(json!({
        "name": "Écologie",
        "description": "Projets écologiques",
      })))
      .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let interest = body_json(resp).await;

    let resp =
      request(&state, "PATCH", "/users/profile", Some(&token), Some(json!({
        "firstName":   "Claire",
        "interestIds": [interest["id"]],
      })))
      .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["firstName"], "Claire");
    assert_eq!(json["interests"].as_array().unwrap().len(), 1);
    assert_eq!(json["interests"][0]["name"], "Écologie");

    // Taking another account's email is a conflict.
    let resp =
      request(&state, "PATCH", "/users/profile", Some(&token), Some(json!({
        "email": "admin@example.com",
      })))
      .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);
  }

  // ── Projects ────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn project_creation_requires_entrepreneur() {
    let state = make_state().await;
    let (_, investor_token) =
      register_and_login(&state, "inv@example.com", "investor").await;

    let resp =
      request(&state, "POST", "/projects", Some(&investor_token), Some(json!({
        "title":       "Projet",
        "description": "...",
        "budget":      1000.0,
        "category":    "Fintech",
      })))
      .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);
  }

  #[tokio::test]
  async fn project_crud_flow() {
    let state = make_state().await;
    let (owner_id, owner_token) =
      register_and_login(&state, "owner@example.com", "entrepreneur").await;
    let (_, other_token) =
      register_and_login(&state, "other@example.com", "entrepreneur").await;
    let (_, admin_token) =
      register_and_login(&state, "admin@example.com", "admin").await;

    let id = create_project(
      &state,
      &owner_token,
      "Compost urbain",
      "Greentech",
      "Compostage de quartier.",
    )
    .await;

    let resp = request(
      &state,
      "GET",
      &format!("/projects/{id}"),
      Some(&owner_token),
      None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["ownerId"], owner_id.to_string());
    assert_eq!(json["category"], "Greentech");

    // Another entrepreneur cannot touch it.
    let resp = request(
      &state,
      "PATCH",
      &format!("/projects/{id}"),
      Some(&other_token),
      Some(json!({ "title": "Pris" })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // The owner can.
    let resp = request(
      &state,
      "PATCH",
      &format!("/projects/{id}"),
      Some(&owner_token),
      Some(json!({ "title": "Compost urbain 2", "budget": 75000.0 })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["title"], "Compost urbain 2");

    // A negative budget is rejected.
    let resp = request(
      &state,
      "PATCH",
      &format!("/projects/{id}"),
      Some(&owner_token),
      Some(json!({ "budget": -1.0 })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // An admin can delete any project.
    let resp = request(
      &state,
      "DELETE",
      &format!("/projects/{id}"),
      Some(&admin_token),
      None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = request(
      &state,
      "GET",
      &format!("/projects/{id}"),
      Some(&owner_token),
      None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  // ── Recommendations ─────────────────────────────────────────────────────

  #[tokio::test]
  async fn recommended_returns_all_projects_when_no_interests() {
    let state = make_state().await;
    let (_, owner_token) =
      register_and_login(&state, "owner@example.com", "entrepreneur").await;
    let (_, investor_token) =
      register_and_login(&state, "inv@example.com", "investor").await;

    let p1 = create_project(&state, &owner_token, "P1", "Fintech", "un").await;
    let p2 = create_project(&state, &owner_token, "P2", "Mode", "deux").await;
    let p3 = create_project(&state, &owner_token, "P3", "Edtech", "trois").await;

    let resp = request(
      &state,
      "GET",
      "/projects/recommended",
      Some(&investor_token),
      None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    let ids: Vec<String> = json
      .as_array()
      .unwrap()
      .iter()
      .map(|p| p["id"].as_str().unwrap().to_string())
      .collect();
    assert_eq!(ids, vec![p1.to_string(), p2.to_string(), p3.to_string()]);
  }

  #[tokio::test]
  async fn recommended_filters_on_interest_substring() {
    let state = make_state().await;
    let (_, admin_token) =
      register_and_login(&state, "admin@example.com", "admin").await;
    let (_, owner_token) =
      register_and_login(&state, "owner@example.com", "entrepreneur").await;
    let (_, investor_token) =
      register_and_login(&state, "inv@example.com", "investor").await;

    let resp =
      request(&state, "POST", "/interests", Some(&admin_token), Some(json!({
        "name": "Santé",
      })))
      .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let interest = body_json(resp).await;

    let resp = request(
      &state,
      "POST",
      "/users/interests",
      Some(&investor_token),
      Some(json!({ "interestIds": [interest["id"]] })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);

    // No substring match anywhere: excluded despite the related domain.
    create_project(&state, &owner_token, "MediApp", "Healthtech", "...").await;
    create_project(&state, &owner_token, "ShopX", "Mode", "vêtements").await;

    let resp = request(
      &state,
      "GET",
      "/projects/recommended",
      Some(&investor_token),
      None,
    )
    .await;
    let json = body_json(resp).await;
    assert_eq!(json.as_array().unwrap().len(), 0);

    // A description mentioning the interest flips the first project in.
    let included = create_project(
      &state,
      &owner_token,
      "MediApp 2",
      "Healthtech",
      "Projet de santé connectée",
    )
    .await;

    let resp = request(
      &state,
      "GET",
      "/projects/recommended",
      Some(&investor_token),
      None,
    )
    .await;
    let json = body_json(resp).await;
    let arr = json.as_array().unwrap();
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["id"], included.to_string());

    // Repeating the query with no intervening writes yields the same
    // result.
    let resp = request(
      &state,
      "GET",
      "/projects/recommended",
      Some(&investor_token),
      None,
    )
    .await;
    assert_eq!(body_json(resp).await, json);
  }

  // ── Investments ─────────────────────────────────────────────────────────

  #[tokio::test]
  async fn investment_rules() {
    let state = make_state().await;
    let (_, owner_token) =
      register_and_login(&state, "owner@example.com", "entrepreneur").await;
    let (investor_id, investor_token) =
      register_and_login(&state, "inv@example.com", "investor").await;

    let project =
      create_project(&state, &owner_token, "Projet", "Fintech", "...").await;

    // Entrepreneurs cannot invest.
    let resp =
      request(&state, "POST", "/investments", Some(&owner_token), Some(json!({
        "projectId": project,
        "amount":    1000.0,
      })))
      .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    // Unknown project.
    let resp = request(
      &state,
      "POST",
      "/investments",
      Some(&investor_token),
      Some(json!({ "projectId": Uuid::new_v4(), "amount": 1000.0 })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    // Negative amount.
    let resp = request(
      &state,
      "POST",
      "/investments",
      Some(&investor_token),
      Some(json!({ "projectId": project, "amount": -5.0 })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // One's own project — seeded directly, since the API never lets an
    // investor create one.
    let own = state
      .store
      .add_project(NewProject {
        title:       "Le mien".into(),
        description: "...".into(),
        budget:      1000.0,
        category:    "Mode".into(),
        owner_id:    investor_id,
      })
      .await
      .unwrap();
    let resp = request(
      &state,
      "POST",
      "/investments",
      Some(&investor_token),
      Some(json!({ "projectId": own.id, "amount": 100.0 })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    // A valid investment.
    let resp = request(
      &state,
      "POST",
      "/investments",
      Some(&investor_token),
      Some(json!({ "projectId": project, "amount": 2500.0 })),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let json = body_json(resp).await;
    assert_eq!(json["investorId"], investor_id.to_string());
    assert_eq!(json["amount"], 2500.0);
  }

  #[tokio::test]
  async fn investment_listing_and_deletion() {
    let state = make_state().await;
    let (_, owner_token) =
      register_and_login(&state, "owner@example.com", "entrepreneur").await;
    let (_, alice_token) =
      register_and_login(&state, "alice@example.com", "investor").await;
    let (_, bob_token) =
      register_and_login(&state, "bob@example.com", "investor").await;

    let project =
      create_project(&state, &owner_token, "Projet", "Edtech", "...").await;

    let resp =
      request(&state, "POST", "/investments", Some(&alice_token), Some(json!({
        "projectId": project,
        "amount":    1000.0,
      })))
      .await;
    let investment = body_json(resp).await;

    request(&state, "POST", "/investments", Some(&bob_token), Some(json!({
      "projectId": project,
      "amount":    2000.0,
    })))
    .await;

    // Each investor sees only their own.
    let resp = request(&state, "GET", "/investments", Some(&alice_token), None).await;
    let json = body_json(resp).await;
    assert_eq!(json.as_array().unwrap().len(), 1);

    // Everyone authenticated sees a project's investments.
    let resp = request(
      &state,
      "GET",
      &format!("/investments/project/{project}"),
      Some(&owner_token),
      None,
    )
    .await;
    let json = body_json(resp).await;
    assert_eq!(json.as_array().unwrap().len(), 2);

    // Bob cannot delete Alice's investment.
    let id = investment["id"].as_str().unwrap();
    let resp = request(
      &state,
      "DELETE",
      &format!("/investments/{id}"),
      Some(&bob_token),
      None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = request(
      &state,
      "DELETE",
      &format!("/investments/{id}"),
      Some(&alice_token),
      None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
  }

  // ── Interests ───────────────────────────────────────────────────────────

  #[tokio::test]
  async fn interest_management() {
    let state = make_state().await;
    let (_, user_token) =
      register_and_login(&state, "user@example.com", "investor").await;
    let (_, admin_token) =
      register_and_login(&state, "admin@example.com", "admin").await;

    let resp =
      request(&state, "POST", "/interests", Some(&user_token), Some(json!({
        "name": "Finance",
      })))
      .await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp =
      request(&state, "POST", "/interests", Some(&admin_token), Some(json!({
        "name": "Finance",
        "description": "Projets liés à la finance",
      })))
      .await;
    assert_eq!(resp.status(), StatusCode::CREATED);
    let interest = body_json(resp).await;

    let resp =
      request(&state, "POST", "/interests", Some(&admin_token), Some(json!({
        "name": "Finance",
      })))
      .await;
    assert_eq!(resp.status(), StatusCode::CONFLICT);

    // Single-interest read needs no authentication.
    let id = interest["id"].as_str().unwrap();
    let resp =
      request(&state, "GET", &format!("/interests/{id}"), None, None).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = request(
      &state,
      "GET",
      &format!("/interests/{}", Uuid::new_v4()),
      None,
      None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let resp = request(
      &state,
      "DELETE",
      &format!("/interests/{id}"),
      Some(&admin_token),
      None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);
  }

  // ── Admin ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn admin_passthrough_endpoints() {
    let state = make_state().await;
    let (user_id, user_token) =
      register_and_login(&state, "user@example.com", "investor").await;
    let (_, admin_token) =
      register_and_login(&state, "admin@example.com", "admin").await;

    for uri in ["/admin/users", "/admin/projects", "/admin/investments"] {
      let resp = request(&state, "GET", uri, Some(&user_token), None).await;
      assert_eq!(resp.status(), StatusCode::FORBIDDEN, "{uri}");

      let resp = request(&state, "GET", uri, Some(&admin_token), None).await;
      assert_eq!(resp.status(), StatusCode::OK, "{uri}");
    }

    let resp = request(
      &state,
      "DELETE",
      &format!("/admin/users/{user_id}"),
      Some(&admin_token),
      None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    let resp = request(
      &state,
      "DELETE",
      &format!("/admin/users/{}", Uuid::new_v4()),
      Some(&admin_token),
      None,
    )
    .await;
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
  }

  // ── Seeds ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn seeding_requires_admin_and_repopulates() {
    let state = make_state().await;
    let (_, user_token) =
      register_and_login(&state, "user@example.com", "investor").await;
    let (_, admin_token) =
      register_and_login(&state, "boot@example.com", "admin").await;

    let resp = request(&state, "POST", "/seeds", Some(&user_token), None).await;
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    let resp = request(&state, "POST", "/seeds", Some(&admin_token), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let json = body_json(resp).await;
    assert_eq!(json["interests"], 10);
    assert_eq!(json["users"], 19);
    assert!(json["projects"].as_u64().unwrap() >= 10);
    assert!(json["investments"].as_u64().unwrap() >= 1);

    let interests = state.store.list_interests().await.unwrap();
    assert_eq!(interests.len(), 10);
    let users = state.store.list_users().await.unwrap();
    assert_eq!(users.len(), 19);
    assert!(users.iter().any(|u| u.role == Role::Admin));

    // The wipe removed the bootstrap admin and its session.
    let resp = request(&state, "GET", "/users/profile", Some(&admin_token), None).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    // The reseeded admin account logs in with the sample password.
    let token = login(&state, "admin@example.com").await;
    let resp = request(&state, "GET", "/users/profile", Some(&token), None).await;
    assert_eq!(resp.status(), StatusCode::OK);
  }
}
