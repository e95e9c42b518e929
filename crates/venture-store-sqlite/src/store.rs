//! [`SqliteStore`] — the SQLite implementation of [`PlatformStore`].

use std::path::Path;

use chrono::Utc;
use rusqlite::OptionalExtension as _;
use uuid::Uuid;

use venture_core::{
  interest::{Interest, NewInterest},
  investment::{Investment, NewInvestment},
  project::{NewProject, Project, ProjectUpdate},
  session::{NewSession, Session},
  store::PlatformStore,
  user::{NewUser, User, UserUpdate},
};

use crate::{
  Result,
  encode::{
    RawInterest, RawInvestment, RawProject, RawSession, RawUser, encode_dt,
    encode_role, encode_uuid,
  },
  schema::SCHEMA,
};

const SELECT_USER_BY_ID: &str = "SELECT user_id, first_name, last_name, email, \
   password_hash, role, created_at, updated_at FROM users WHERE user_id = ?1";

const SELECT_USER_BY_EMAIL: &str = "SELECT user_id, first_name, last_name, email, \
   password_hash, role, created_at, updated_at FROM users WHERE email = ?1";

// ─── Row mappers ─────────────────────────────────────────────────────────────

fn user_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawUser> {
  Ok(RawUser {
    user_id:       row.get(0)?,
    first_name:    row.get(1)?,
    last_name:     row.get(2)?,
    email:         row.get(3)?,
    password_hash: row.get(4)?,
    role:          row.get(5)?,
    created_at:    row.get(6)?,
    updated_at:    row.get(7)?,
  })
}

fn interest_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawInterest> {
  Ok(RawInterest {
    interest_id: row.get(0)?,
    name:        row.get(1)?,
    description: row.get(2)?,
    created_at:  row.get(3)?,
  })
}

fn project_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawProject> {
  Ok(RawProject {
    project_id:  row.get(0)?,
    title:       row.get(1)?,
    description: row.get(2)?,
    budget:      row.get(3)?,
    category:    row.get(4)?,
    owner_id:    row.get(5)?,
    created_at:  row.get(6)?,
    updated_at:  row.get(7)?,
  })
}

fn investment_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawInvestment> {
  Ok(RawInvestment {
    investment_id: row.get(0)?,
    investor_id:   row.get(1)?,
    project_id:    row.get(2)?,
    amount:        row.get(3)?,
    created_at:    row.get(4)?,
  })
}

fn session_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<RawSession> {
  Ok(RawSession {
    session_id:   row.get(0)?,
    user_id:      row.get(1)?,
    token_digest: row.get(2)?,
    created_at:   row.get(3)?,
    expires_at:   row.get(4)?,
  })
}

/// Load the interest rows associated with one user, in creation order.
fn user_interests(
  conn: &rusqlite::Connection,
  user_id: &str,
) -> rusqlite::Result<Vec<RawInterest>> {
  let mut stmt = conn.prepare(
    "SELECT i.interest_id, i.name, i.description, i.created_at
     FROM interests i
     JOIN user_interests ui ON ui.interest_id = i.interest_id
     WHERE ui.user_id = ?1
     ORDER BY i.created_at",
  )?;
  stmt
    .query_map(rusqlite::params![user_id], interest_row)?
    .collect::<rusqlite::Result<Vec<_>>>()
}

fn decode_user(raw: RawUser, interests: Vec<RawInterest>) -> Result<User> {
  let interests = interests
    .into_iter()
    .map(RawInterest::into_interest)
    .collect::<Result<Vec<_>>>()?;
  raw.into_user(interests)
}

// ─── Store ───────────────────────────────────────────────────────────────────

/// A venture platform store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }

  /// Fetch one user (with interests) by a single-parameter query.
  async fn fetch_user(
    &self,
    sql: &'static str,
    param: String,
  ) -> Result<Option<User>> {
    let raw: Option<(RawUser, Vec<RawInterest>)> = self
      .conn
      .call(move |conn| {
        let user = conn
          .query_row(sql, rusqlite::params![param], user_row)
          .optional()?;
        match user {
          Some(u) => {
            let interests = user_interests(conn, &u.user_id)?;
            Ok(Some((u, interests)))
          }
          None => Ok(None),
        }
      })
      .await?;

    raw.map(|(u, interests)| decode_user(u, interests)).transpose()
  }
}

// ─── PlatformStore impl ──────────────────────────────────────────────────────

impl PlatformStore for SqliteStore {
  type Error = crate::Error;

  // ── Users ──────────────────────────────────────────────────────────────

  async fn add_user(&self, input: NewUser) -> Result<User> {
    let now = Utc::now();
    let user = User {
      id:            Uuid::new_v4(),
      first_name:    input.first_name,
      last_name:     input.last_name,
      email:         input.email,
      password_hash: input.password_hash,
      role:          input.role,
      created_at:    now,
      updated_at:    now,
      interests:     vec![],
    };

    let id_str     = encode_uuid(user.id);
    let first_name = user.first_name.clone();
    let last_name  = user.last_name.clone();
    let email      = user.email.clone();
    let hash       = user.password_hash.clone();
    let role_str   = encode_role(user.role).to_owned();
    let at_str     = encode_dt(now);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO users (user_id, first_name, last_name, email,
             password_hash, role, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
          rusqlite::params![
            id_str,
            first_name,
            last_name,
            email,
            hash,
            role_str,
            at_str.clone(),
            at_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(user)
  }

  async fn get_user(&self, id: Uuid) -> Result<Option<User>> {
    self.fetch_user(SELECT_USER_BY_ID, encode_uuid(id)).await
  }

  async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
    self.fetch_user(SELECT_USER_BY_EMAIL, email.to_owned()).await
  }

  async fn list_users(&self) -> Result<Vec<User>> {
    let raws: Vec<(RawUser, Vec<RawInterest>)> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT user_id, first_name, last_name, email, password_hash,
             role, created_at, updated_at
           FROM users ORDER BY created_at",
        )?;
        let users = stmt
          .query_map([], user_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        let mut out = Vec::with_capacity(users.len());
        for user in users {
          let interests = user_interests(conn, &user.user_id)?;
          out.push((user, interests));
        }
        Ok(out)
      })
      .await?;

    raws
      .into_iter()
      .map(|(u, interests)| decode_user(u, interests))
      .collect()
  }

  async fn update_user(
    &self,
    id: Uuid,
    update: UserUpdate,
  ) -> Result<Option<User>> {
    let UserUpdate { first_name, last_name, email, password_hash, interest_ids } =
      update;

    let id_str  = encode_uuid(id);
    let now_str = encode_dt(Utc::now());
    let interest_ids: Option<Vec<String>> =
      interest_ids.map(|ids| ids.into_iter().map(encode_uuid).collect());

    let raw: Option<(RawUser, Vec<RawInterest>)> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let existing = tx
          .query_row(SELECT_USER_BY_ID, rusqlite::params![id_str], user_row)
          .optional()?;
        if existing.is_none() {
          return Ok(None);
        }

        if let Some(v) = first_name {
          tx.execute(
            "UPDATE users SET first_name = ?2 WHERE user_id = ?1",
            rusqlite::params![id_str, v],
          )?;
        }
        if let Some(v) = last_name {
          tx.execute(
            "UPDATE users SET last_name = ?2 WHERE user_id = ?1",
            rusqlite::params![id_str, v],
          )?;
        }
        if let Some(v) = email {
          tx.execute(
            "UPDATE users SET email = ?2 WHERE user_id = ?1",
            rusqlite::params![id_str, v],
          )?;
        }
        if let Some(v) = password_hash {
          tx.execute(
            "UPDATE users SET password_hash = ?2 WHERE user_id = ?1",
            rusqlite::params![id_str, v],
          )?;
        }

        // Replace the interest set; ids that match no interest row are
        // silently skipped.
        if let Some(ids) = interest_ids {
          tx.execute(
            "DELETE FROM user_interests WHERE user_id = ?1",
            rusqlite::params![id_str],
          )?;
          let mut stmt = tx.prepare(
            "INSERT OR IGNORE INTO user_interests (user_id, interest_id)
             SELECT ?1, interest_id FROM interests WHERE interest_id = ?2",
          )?;
          for interest_id in ids {
            stmt.execute(rusqlite::params![id_str, interest_id])?;
          }
        }

        tx.execute(
          "UPDATE users SET updated_at = ?2 WHERE user_id = ?1",
          rusqlite::params![id_str, now_str],
        )?;

        let user =
          tx.query_row(SELECT_USER_BY_ID, rusqlite::params![id_str], user_row)?;
        let interests = user_interests(&tx, &user.user_id)?;
        tx.commit()?;
        Ok(Some((user, interests)))
      })
      .await?;

    raw.map(|(u, interests)| decode_user(u, interests)).transpose()
  }

  async fn add_user_interests(
    &self,
    id: Uuid,
    interest_ids: Vec<Uuid>,
  ) -> Result<Option<User>> {
    let id_str  = encode_uuid(id);
    let now_str = encode_dt(Utc::now());
    let ids: Vec<String> =
      interest_ids.into_iter().map(encode_uuid).collect();

    let raw: Option<(RawUser, Vec<RawInterest>)> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let existing = tx
          .query_row(SELECT_USER_BY_ID, rusqlite::params![id_str], user_row)
          .optional()?;
        if existing.is_none() {
          return Ok(None);
        }

        let mut stmt = tx.prepare(
          "INSERT OR IGNORE INTO user_interests (user_id, interest_id)
           SELECT ?1, interest_id FROM interests WHERE interest_id = ?2",
        )?;
        for interest_id in ids {
          stmt.execute(rusqlite::params![id_str, interest_id])?;
        }
        drop(stmt);

        tx.execute(
          "UPDATE users SET updated_at = ?2 WHERE user_id = ?1",
          rusqlite::params![id_str, now_str],
        )?;

        let user =
          tx.query_row(SELECT_USER_BY_ID, rusqlite::params![id_str], user_row)?;
        let interests = user_interests(&tx, &user.user_id)?;
        tx.commit()?;
        Ok(Some((user, interests)))
      })
      .await?;

    raw.map(|(u, interests)| decode_user(u, interests)).transpose()
  }

  async fn delete_user(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);

    let deleted: bool = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "DELETE FROM user_interests WHERE user_id = ?1",
          rusqlite::params![id_str],
        )?;
        tx.execute(
          "DELETE FROM sessions WHERE user_id = ?1",
          rusqlite::params![id_str],
        )?;
        let n = tx.execute(
          "DELETE FROM users WHERE user_id = ?1",
          rusqlite::params![id_str],
        )?;
        tx.commit()?;
        Ok(n > 0)
      })
      .await?;

    Ok(deleted)
  }

  // ── Interests ──────────────────────────────────────────────────────────

  async fn add_interest(&self, input: NewInterest) -> Result<Interest> {
    let interest = Interest {
      id:          Uuid::new_v4(),
      name:        input.name,
      description: input.description,
      created_at:  Utc::now(),
    };

    let id_str      = encode_uuid(interest.id);
    let name        = interest.name.clone();
    let description = interest.description.clone();
    let at_str      = encode_dt(interest.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO interests (interest_id, name, description, created_at)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![id_str, name, description, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(interest)
  }

  async fn get_interest(&self, id: Uuid) -> Result<Option<Interest>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawInterest> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT interest_id, name, description, created_at
               FROM interests WHERE interest_id = ?1",
              rusqlite::params![id_str],
              interest_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawInterest::into_interest).transpose()
  }

  async fn find_interest_by_name(&self, name: &str) -> Result<Option<Interest>> {
    let name = name.to_owned();

    let raw: Option<RawInterest> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT interest_id, name, description, created_at
               FROM interests WHERE name = ?1",
              rusqlite::params![name],
              interest_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawInterest::into_interest).transpose()
  }

  async fn list_interests(&self) -> Result<Vec<Interest>> {
    let raws: Vec<RawInterest> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT interest_id, name, description, created_at
           FROM interests ORDER BY created_at",
        )?;
        let rows = stmt
          .query_map([], interest_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawInterest::into_interest).collect()
  }

  async fn delete_interest(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);

    let deleted: bool = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "DELETE FROM user_interests WHERE interest_id = ?1",
          rusqlite::params![id_str],
        )?;
        let n = tx.execute(
          "DELETE FROM interests WHERE interest_id = ?1",
          rusqlite::params![id_str],
        )?;
        tx.commit()?;
        Ok(n > 0)
      })
      .await?;

    Ok(deleted)
  }

  // ── Projects ───────────────────────────────────────────────────────────

  async fn add_project(&self, input: NewProject) -> Result<Project> {
    let now = Utc::now();
    let project = Project {
      id:          Uuid::new_v4(),
      title:       input.title,
      description: input.description,
      budget:      input.budget,
      category:    input.category,
      owner_id:    input.owner_id,
      created_at:  now,
      updated_at:  now,
    };

    let id_str      = encode_uuid(project.id);
    let title       = project.title.clone();
    let description = project.description.clone();
    let budget      = project.budget;
    let category    = project.category.clone();
    let owner_str   = encode_uuid(project.owner_id);
    let at_str      = encode_dt(now);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO projects (project_id, title, description, budget,
             category, owner_id, created_at, updated_at)
           VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
          rusqlite::params![
            id_str,
            title,
            description,
            budget,
            category,
            owner_str,
            at_str.clone(),
            at_str,
          ],
        )?;
        Ok(())
      })
      .await?;

    Ok(project)
  }

  async fn get_project(&self, id: Uuid) -> Result<Option<Project>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawProject> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT project_id, title, description, budget, category,
                 owner_id, created_at, updated_at
               FROM projects WHERE project_id = ?1",
              rusqlite::params![id_str],
              project_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawProject::into_project).transpose()
  }

  async fn list_projects(&self) -> Result<Vec<Project>> {
    let raws: Vec<RawProject> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT project_id, title, description, budget, category,
             owner_id, created_at, updated_at
           FROM projects ORDER BY created_at",
        )?;
        let rows = stmt
          .query_map([], project_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawProject::into_project).collect()
  }

  async fn update_project(
    &self,
    id: Uuid,
    update: ProjectUpdate,
  ) -> Result<Option<Project>> {
    let ProjectUpdate { title, description, budget, category } = update;
    let id_str  = encode_uuid(id);
    let now_str = encode_dt(Utc::now());

    let raw: Option<RawProject> = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;

        let existing = tx
          .query_row(
            "SELECT project_id, title, description, budget, category,
               owner_id, created_at, updated_at
             FROM projects WHERE project_id = ?1",
            rusqlite::params![id_str],
            project_row,
          )
          .optional()?;
        if existing.is_none() {
          return Ok(None);
        }

        if let Some(v) = title {
          tx.execute(
            "UPDATE projects SET title = ?2 WHERE project_id = ?1",
            rusqlite::params![id_str, v],
          )?;
        }
        if let Some(v) = description {
          tx.execute(
            "UPDATE projects SET description = ?2 WHERE project_id = ?1",
            rusqlite::params![id_str, v],
          )?;
        }
        if let Some(v) = budget {
          tx.execute(
            "UPDATE projects SET budget = ?2 WHERE project_id = ?1",
            rusqlite::params![id_str, v],
          )?;
        }
        if let Some(v) = category {
          tx.execute(
            "UPDATE projects SET category = ?2 WHERE project_id = ?1",
            rusqlite::params![id_str, v],
          )?;
        }
        tx.execute(
          "UPDATE projects SET updated_at = ?2 WHERE project_id = ?1",
          rusqlite::params![id_str, now_str],
        )?;

        let project = tx.query_row(
          "SELECT project_id, title, description, budget, category,
             owner_id, created_at, updated_at
           FROM projects WHERE project_id = ?1",
          rusqlite::params![id_str],
          project_row,
        )?;
        tx.commit()?;
        Ok(Some(project))
      })
      .await?;

    raw.map(RawProject::into_project).transpose()
  }

  async fn delete_project(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);

    let deleted: bool = self
      .conn
      .call(move |conn| {
        let tx = conn.transaction()?;
        tx.execute(
          "DELETE FROM investments WHERE project_id = ?1",
          rusqlite::params![id_str],
        )?;
        let n = tx.execute(
          "DELETE FROM projects WHERE project_id = ?1",
          rusqlite::params![id_str],
        )?;
        tx.commit()?;
        Ok(n > 0)
      })
      .await?;

    Ok(deleted)
  }

  // ── Investments ────────────────────────────────────────────────────────

  async fn add_investment(&self, input: NewInvestment) -> Result<Investment> {
    let investment = Investment {
      id:          Uuid::new_v4(),
      investor_id: input.investor_id,
      project_id:  input.project_id,
      amount:      input.amount,
      created_at:  Utc::now(),
    };

    let id_str       = encode_uuid(investment.id);
    let investor_str = encode_uuid(investment.investor_id);
    let project_str  = encode_uuid(investment.project_id);
    let amount       = investment.amount;
    let at_str       = encode_dt(investment.created_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO investments (investment_id, investor_id, project_id,
             amount, created_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id_str, investor_str, project_str, amount, at_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(investment)
  }

  async fn get_investment(&self, id: Uuid) -> Result<Option<Investment>> {
    let id_str = encode_uuid(id);

    let raw: Option<RawInvestment> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT investment_id, investor_id, project_id, amount, created_at
               FROM investments WHERE investment_id = ?1",
              rusqlite::params![id_str],
              investment_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawInvestment::into_investment).transpose()
  }

  async fn list_investments(&self) -> Result<Vec<Investment>> {
    let raws: Vec<RawInvestment> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT investment_id, investor_id, project_id, amount, created_at
           FROM investments ORDER BY created_at",
        )?;
        let rows = stmt
          .query_map([], investment_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawInvestment::into_investment).collect()
  }

  async fn investments_by_investor(
    &self,
    investor_id: Uuid,
  ) -> Result<Vec<Investment>> {
    let investor_str = encode_uuid(investor_id);

    let raws: Vec<RawInvestment> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT investment_id, investor_id, project_id, amount, created_at
           FROM investments WHERE investor_id = ?1 ORDER BY created_at",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![investor_str], investment_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawInvestment::into_investment).collect()
  }

  async fn investments_by_project(
    &self,
    project_id: Uuid,
  ) -> Result<Vec<Investment>> {
    let project_str = encode_uuid(project_id);

    let raws: Vec<RawInvestment> = self
      .conn
      .call(move |conn| {
        let mut stmt = conn.prepare(
          "SELECT investment_id, investor_id, project_id, amount, created_at
           FROM investments WHERE project_id = ?1 ORDER BY created_at",
        )?;
        let rows = stmt
          .query_map(rusqlite::params![project_str], investment_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawInvestment::into_investment).collect()
  }

  async fn delete_investment(&self, id: Uuid) -> Result<bool> {
    let id_str = encode_uuid(id);

    let deleted: bool = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "DELETE FROM investments WHERE investment_id = ?1",
          rusqlite::params![id_str],
        )?;
        Ok(n > 0)
      })
      .await?;

    Ok(deleted)
  }

  // ── Sessions ───────────────────────────────────────────────────────────

  async fn create_session(&self, input: NewSession) -> Result<Session> {
    let session = Session {
      id:           Uuid::new_v4(),
      user_id:      input.user_id,
      token_digest: input.token_digest,
      created_at:   Utc::now(),
      expires_at:   input.expires_at,
    };

    let id_str      = encode_uuid(session.id);
    let user_str    = encode_uuid(session.user_id);
    let digest      = session.token_digest.clone();
    let created_str = encode_dt(session.created_at);
    let expires_str = encode_dt(session.expires_at);

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO sessions (session_id, user_id, token_digest,
             created_at, expires_at)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![id_str, user_str, digest, created_str, expires_str],
        )?;
        Ok(())
      })
      .await?;

    Ok(session)
  }

  async fn find_session(&self, token_digest: &str) -> Result<Option<Session>> {
    let digest = token_digest.to_owned();

    let raw: Option<RawSession> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT session_id, user_id, token_digest, created_at, expires_at
               FROM sessions WHERE token_digest = ?1",
              rusqlite::params![digest],
              session_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawSession::into_session).transpose()
  }

  async fn delete_session(&self, token_digest: &str) -> Result<bool> {
    let digest = token_digest.to_owned();

    let deleted: bool = self
      .conn
      .call(move |conn| {
        let n = conn.execute(
          "DELETE FROM sessions WHERE token_digest = ?1",
          rusqlite::params![digest],
        )?;
        Ok(n > 0)
      })
      .await?;

    Ok(deleted)
  }
}
