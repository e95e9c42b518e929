//! The project recommendation matcher.
//!
//! Ranks nothing and scores nothing: a project either matches the user's
//! interest set or it does not, and the output keeps the project
//! collection's own order. Because projects carry a single free-text
//! category rather than a structured tag set, matching is a
//! case-insensitive substring test over category, title, and
//! description — a recall-favouring heuristic that accepts false
//! positives over empty results.

use std::future::Future;

use thiserror::Error;
use uuid::Uuid;

use crate::{interest::Interest, project::Project, store::PlatformStore, user::User};

// ─── Pure matcher ────────────────────────────────────────────────────────────

/// True when any of the case-folded `needles` occurs as a substring of
/// the project's category, title, or description.
pub fn project_matches(project: &Project, needles: &[String]) -> bool {
  let category    = project.category.to_lowercase();
  let title       = project.title.to_lowercase();
  let description = project.description.to_lowercase();

  needles.iter().any(|needle| {
    category.contains(needle.as_str())
      || title.contains(needle.as_str())
      || description.contains(needle.as_str())
  })
}

/// Filter `projects` against a user's interest set.
///
/// An empty interest set yields **all** projects: a user who declared
/// nothing is assumed to want an unfiltered view rather than an empty
/// one. Output order is input order.
pub fn recommend_projects(
  interests: &[Interest],
  projects: Vec<Project>,
) -> Vec<Project> {
  if interests.is_empty() {
    return projects;
  }

  let needles: Vec<String> = interests
    .iter()
    .map(|interest| interest.name.to_lowercase())
    .collect();

  projects
    .into_iter()
    .filter(|project| project_matches(project, &needles))
    .collect()
}

// ─── Store-backed composition ────────────────────────────────────────────────

/// The two narrow reads the matcher needs, split out so it can be
/// exercised with in-memory fakes independent of any storage engine.
///
/// Every [`PlatformStore`] is a `RecommendSource` via the blanket impl.
pub trait RecommendSource: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn user_with_interests(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<User>, Self::Error>> + Send + '_;

  fn all_projects(
    &self,
  ) -> impl Future<Output = Result<Vec<Project>, Self::Error>> + Send + '_;
}

impl<S: PlatformStore> RecommendSource for S {
  type Error = S::Error;

  async fn user_with_interests(&self, id: Uuid) -> Result<Option<User>, S::Error> {
    self.get_user(id).await
  }

  async fn all_projects(&self) -> Result<Vec<Project>, S::Error> {
    self.list_projects().await
  }
}

#[derive(Debug, Error)]
pub enum RecommendError<E> {
  /// The requesting user does not exist.
  #[error("user not found: {0}")]
  UnknownUser(Uuid),

  /// A storage failure, propagated verbatim.
  #[error(transparent)]
  Source(E),
}

/// `recommend(userId)` — load the user's interests, load all projects,
/// filter. Read-only; fails only on an unknown user or a storage error.
pub async fn recommend_for_user<S: RecommendSource>(
  source: &S,
  user_id: Uuid,
) -> Result<Vec<Project>, RecommendError<S::Error>> {
  let user = source
    .user_with_interests(user_id)
    .await
    .map_err(RecommendError::Source)?
    .ok_or(RecommendError::UnknownUser(user_id))?;

  let projects = source
    .all_projects()
    .await
    .map_err(RecommendError::Source)?;

  Ok(recommend_projects(&user.interests, projects))
}
