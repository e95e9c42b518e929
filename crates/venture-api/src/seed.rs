//! Database seeding — `POST /seeds`, admin only.
//!
//! Wipes every table and repopulates it with sample data: the platform's
//! ten interest tags, one admin plus ten entrepreneurs and eight
//! investors, one to three projects per entrepreneur, and a handful of
//! investments per investor. Deletion order matters: investments before
//! projects before users, since nothing cascades.

use axum::{Json, extract::State};
use rand::{Rng as _, SeedableRng as _, rngs::SmallRng, seq::SliceRandom as _};
use serde_json::json;
use uuid::Uuid;

use venture_core::{
  interest::{Interest, NewInterest},
  investment::NewInvestment,
  project::{NewProject, Project},
  store::PlatformStore,
  user::{NewUser, Role, User},
};

use crate::{
  ApiState,
  auth::{CurrentUser, hash_password, require_role},
  error::ApiError,
};

const INTERESTS: &[(&str, &str)] = &[
  ("Technologie", "Projets liés à la technologie et l'informatique"),
  ("Finance", "Projets liés à la finance et aux investissements"),
  ("Santé", "Projets dans le domaine de la santé et du bien-être"),
  ("Écologie", "Projets écologiques et développement durable"),
  ("Éducation", "Projets liés à l'éducation et la formation"),
  ("Alimentation", "Projets dans le domaine de l'alimentation"),
  ("Transport", "Projets liés aux transports et à la mobilité"),
  ("Immobilier", "Projets dans le secteur immobilier"),
  ("Tourisme", "Projets liés au tourisme et aux voyages"),
  ("Mode", "Projets dans l'univers de la mode et du textile"),
];

const CATEGORIES: &[&str] = &[
  "Application Mobile",
  "Site Web",
  "E-commerce",
  "Fintech",
  "Greentech",
  "Healthtech",
  "Edtech",
  "Foodtech",
  "Transport",
  "Immobilier",
  "Tourisme",
  "Mode",
];

const FIRST_NAMES: &[&str] = &[
  "Camille", "Julien", "Sophie", "Nicolas", "Thomas", "Claire", "Antoine",
  "Hugo", "Manon", "Lucas", "Marine", "Romain",
];

const LAST_NAMES: &[&str] = &[
  "Martin", "Bernard", "Dubois", "Moreau", "Laurent", "Simon", "Michel",
  "Leroy", "Roux", "Fournier", "Girard", "Bonnet",
];

const TITLE_HEADS: &[&str] =
  &["Atelier", "Studio", "Collectif", "Maison", "Comptoir", "Fabrique"];

const TITLE_TAILS: &[&str] =
  &["Lumière", "Horizon", "Boréal", "Méridien", "Azur", "Origine"];

const PITCHES: &[&str] = &[
  "Une plateforme qui simplifie le quotidien de ses utilisateurs.",
  "Un service de proximité pensé pour les circuits courts.",
  "Une solution connectée pour suivre sa santé au jour le jour.",
  "Un outil de gestion qui réconcilie finance et transparence.",
  "Une marketplace dédiée aux créateurs indépendants.",
  "Un réseau de mobilité douce pour les trajets urbains.",
  "Une offre de formation en ligne accessible à tous.",
  "Un projet immobilier participatif à taille humaine.",
];

/// `POST /seeds` — wipe and repopulate. The calling admin is deleted
/// along with everything else; the reseeded `admin@example.com` /
/// `password123` account takes over.
pub async fn run<S>(
  State(state): State<ApiState<S>>,
  CurrentUser(user): CurrentUser,
) -> Result<Json<serde_json::Value>, ApiError>
where
  S: PlatformStore + 'static,
{
  require_role(&user, &[Role::Admin])?;

  let store = state.store.as_ref();
  wipe(store).await?;
  let report = populate(store).await?;

  tracing::info!(
    interests = report.interests,
    users = report.users,
    projects = report.projects,
    investments = report.investments,
    "database seeded"
  );

  Ok(Json(json!({
    "message":     "database seeded",
    "interests":   report.interests,
    "users":       report.users,
    "projects":    report.projects,
    "investments": report.investments,
  })))
}

struct SeedReport {
  interests:   usize,
  users:       usize,
  projects:    usize,
  investments: usize,
}

async fn wipe<S: PlatformStore>(store: &S) -> Result<(), ApiError> {
  for investment in store
    .list_investments()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
  {
    store
      .delete_investment(investment.id)
      .await
      .map_err(|e| ApiError::Store(Box::new(e)))?;
  }
  for project in store
    .list_projects()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
  {
    store
      .delete_project(project.id)
      .await
      .map_err(|e| ApiError::Store(Box::new(e)))?;
  }
  for user in store
    .list_users()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
  {
    store
      .delete_user(user.id)
      .await
      .map_err(|e| ApiError::Store(Box::new(e)))?;
  }
  for interest in store
    .list_interests()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
  {
    store
      .delete_interest(interest.id)
      .await
      .map_err(|e| ApiError::Store(Box::new(e)))?;
  }
  Ok(())
}

async fn populate<S: PlatformStore>(store: &S) -> Result<SeedReport, ApiError> {
  let mut rng = SmallRng::from_entropy();
  let password_hash = hash_password("password123")?;

  let mut interests = Vec::with_capacity(INTERESTS.len());
  for (name, description) in INTERESTS {
    let interest = store
      .add_interest(NewInterest {
        name:        (*name).to_owned(),
        description: Some((*description).to_owned()),
      })
      .await
      .map_err(|e| ApiError::Store(Box::new(e)))?;
    interests.push(interest);
  }

  let admin = store
    .add_user(NewUser {
      first_name:    "Admin".to_owned(),
      last_name:     "Système".to_owned(),
      email:         "admin@example.com".to_owned(),
      password_hash: password_hash.clone(),
      role:          Role::Admin,
    })
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  let count = rng.gen_range(2..=5);
  attach_interests(store, &mut rng, admin.id, &interests, count).await?;

  let mut entrepreneurs = Vec::with_capacity(10);
  for index in 0..10 {
    let user =
      seed_user(store, &mut rng, index, Role::Entrepreneur, &password_hash, &interests)
        .await?;
    entrepreneurs.push(user);
  }

  let mut investors = Vec::with_capacity(8);
  for index in 10..18 {
    let user =
      seed_user(store, &mut rng, index, Role::Investor, &password_hash, &interests)
        .await?;
    investors.push(user);
  }

  let mut projects: Vec<Project> = Vec::new();
  for owner in &entrepreneurs {
    let count = rng.gen_range(1..=3);
    for _ in 0..count {
      let title = format!(
        "{} {}",
        TITLE_HEADS.choose(&mut rng).unwrap(),
        TITLE_TAILS.choose(&mut rng).unwrap()
      );
      let project = store
        .add_project(NewProject {
          title,
          description: (*PITCHES.choose(&mut rng).unwrap()).to_owned(),
          budget:      rng.gen_range(10_000.0..=1_000_000.0),
          category:    (*CATEGORIES.choose(&mut rng).unwrap()).to_owned(),
          owner_id:    owner.id,
        })
        .await
        .map_err(|e| ApiError::Store(Box::new(e)))?;
      projects.push(project);
    }
  }

  let mut investments = 0usize;
  for investor in &investors {
    let count = rng.gen_range(2..=8usize).min(projects.len());
    let picks: Vec<Project> =
      projects.choose_multiple(&mut rng, count).cloned().collect();
    for project in picks {
      // Investors own no projects here, but the rule is the platform's.
      if project.owner_id == investor.id {
        continue;
      }
      store
        .add_investment(NewInvestment {
          investor_id: investor.id,
          project_id:  project.id,
          amount:      rng.gen_range(1_000.0..=(project.budget / 2.0).max(1_000.0)),
        })
        .await
        .map_err(|e| ApiError::Store(Box::new(e)))?;
      investments += 1;
    }
  }

  Ok(SeedReport {
    interests: interests.len(),
    users: 1 + entrepreneurs.len() + investors.len(),
    projects: projects.len(),
    investments,
  })
}

async fn seed_user<S: PlatformStore>(
  store: &S,
  rng: &mut SmallRng,
  index: usize,
  role: Role,
  password_hash: &str,
  interests: &[Interest],
) -> Result<User, ApiError> {
  let first_name = FIRST_NAMES[index % FIRST_NAMES.len()];
  let last_name  = LAST_NAMES[index % LAST_NAMES.len()];
  // The index suffix keeps emails unique across repeated name pairs.
  let email = format!(
    "{}.{}{}@example.com",
    first_name.to_lowercase(),
    last_name.to_lowercase(),
    index
  );

  let user = store
    .add_user(NewUser {
      first_name: first_name.to_owned(),
      last_name: last_name.to_owned(),
      email,
      password_hash: password_hash.to_owned(),
      role,
    })
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  let count = rng.gen_range(1..=5);
  attach_interests(store, rng, user.id, interests, count).await?;
  Ok(user)
}

async fn attach_interests<S: PlatformStore>(
  store: &S,
  rng: &mut SmallRng,
  user_id: Uuid,
  interests: &[Interest],
  count: usize,
) -> Result<(), ApiError> {
  let ids: Vec<Uuid> = interests
    .choose_multiple(rng, count)
    .map(|interest| interest.id)
    .collect();
  store
    .add_user_interests(user_id, ids)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(())
}
