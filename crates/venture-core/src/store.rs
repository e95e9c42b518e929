//! The `PlatformStore` trait — the persistence abstraction.
//!
//! The trait is implemented by storage backends (e.g.
//! `venture-store-sqlite`). Higher layers (`venture-api`,
//! `venture-server`) depend on this abstraction, not on any concrete
//! backend.
//!
//! Lookups return `Ok(None)` for missing rows; deletions return
//! `Ok(false)`. Uniqueness (user email, interest name) is enforced by
//! the backend's constraints — callers that want a friendlier failure
//! pre-check with the `find_*` reads.

use std::future::Future;

use uuid::Uuid;

use crate::{
  interest::{Interest, NewInterest},
  investment::{Investment, NewInvestment},
  project::{NewProject, Project, ProjectUpdate},
  session::{NewSession, Session},
  user::{NewUser, User, UserUpdate},
};

/// Abstraction over a venture platform storage backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait PlatformStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Users ─────────────────────────────────────────────────────────────

  /// Create and persist a new user with an empty interest set.
  fn add_user(
    &self,
    input: NewUser,
  ) -> impl Future<Output = Result<User, Self::Error>> + Send + '_;

  /// Retrieve a user by id, with its interest set loaded.
  fn get_user(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  /// Look a user up by email (the login credential).
  fn find_user_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + 'a;

  /// List all users, each with its interest set.
  fn list_users(
    &self,
  ) -> impl Future<Output = Result<Vec<User>, Self::Error>> + Send + '_;

  /// Apply a partial update. `interest_ids`, when present, replaces the
  /// user's whole interest set; unknown ids are ignored. Returns the
  /// updated user, or `None` if the id does not exist.
  fn update_user(
    &self,
    id: Uuid,
    update: UserUpdate,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  /// Append interests to a user's set (existing associations are kept,
  /// unknown ids ignored). Returns `None` if the user does not exist.
  fn add_user_interests(
    &self,
    id: Uuid,
    interest_ids: Vec<Uuid>,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  /// Delete a user, clearing its interest associations and sessions
  /// first. A user still owning projects or investments cannot be
  /// deleted — the backend's referential checks reject it.
  fn delete_user(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Interests ─────────────────────────────────────────────────────────

  fn add_interest(
    &self,
    input: NewInterest,
  ) -> impl Future<Output = Result<Interest, Self::Error>> + Send + '_;

  fn get_interest(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Interest>, Self::Error>> + Send + '_;

  fn find_interest_by_name<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<Option<Interest>, Self::Error>> + Send + 'a;

  fn list_interests(
    &self,
  ) -> impl Future<Output = Result<Vec<Interest>, Self::Error>> + Send + '_;

  /// Delete an interest, clearing its user associations first.
  fn delete_interest(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Projects ──────────────────────────────────────────────────────────

  fn add_project(
    &self,
    input: NewProject,
  ) -> impl Future<Output = Result<Project, Self::Error>> + Send + '_;

  fn get_project(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Project>, Self::Error>> + Send + '_;

  /// List all projects in creation order. The recommendation matcher
  /// preserves this order in its output.
  fn list_projects(
    &self,
  ) -> impl Future<Output = Result<Vec<Project>, Self::Error>> + Send + '_;

  fn update_project(
    &self,
    id: Uuid,
    update: ProjectUpdate,
  ) -> impl Future<Output = Result<Option<Project>, Self::Error>> + Send + '_;

  /// Delete a project and its investments.
  fn delete_project(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Investments ───────────────────────────────────────────────────────

  fn add_investment(
    &self,
    input: NewInvestment,
  ) -> impl Future<Output = Result<Investment, Self::Error>> + Send + '_;

  fn get_investment(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<Investment>, Self::Error>> + Send + '_;

  fn list_investments(
    &self,
  ) -> impl Future<Output = Result<Vec<Investment>, Self::Error>> + Send + '_;

  fn investments_by_investor(
    &self,
    investor_id: Uuid,
  ) -> impl Future<Output = Result<Vec<Investment>, Self::Error>> + Send + '_;

  fn investments_by_project(
    &self,
    project_id: Uuid,
  ) -> impl Future<Output = Result<Vec<Investment>, Self::Error>> + Send + '_;

  fn delete_investment(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + '_;

  // ── Sessions ──────────────────────────────────────────────────────────

  fn create_session(
    &self,
    input: NewSession,
  ) -> impl Future<Output = Result<Session, Self::Error>> + Send + '_;

  /// Look a session up by token digest. Expiry is the caller's check.
  fn find_session<'a>(
    &'a self,
    token_digest: &'a str,
  ) -> impl Future<Output = Result<Option<Session>, Self::Error>> + Send + 'a;

  fn delete_session<'a>(
    &'a self,
    token_digest: &'a str,
  ) -> impl Future<Output = Result<bool, Self::Error>> + Send + 'a;
}
