//! Encoding and decoding helpers between Rust domain types and the
//! plain-text representations stored in SQLite columns.
//!
//! All timestamps are stored as RFC 3339 strings. UUIDs are stored as
//! hyphenated lowercase strings. Roles are stored as their lowercase
//! names. Money columns are REAL.

use chrono::{DateTime, Utc};
use uuid::Uuid;
use venture_core::{
  interest::Interest, investment::Investment, project::Project,
  session::Session, user::{Role, User},
};

use crate::{Error, Result};

// ─── Uuid ────────────────────────────────────────────────────────────────────

pub fn encode_uuid(id: Uuid) -> String { id.hyphenated().to_string() }

pub fn decode_uuid(s: &str) -> Result<Uuid> { Ok(Uuid::parse_str(s)?) }

// ─── DateTime<Utc> ───────────────────────────────────────────────────────────

pub fn encode_dt(dt: DateTime<Utc>) -> String { dt.to_rfc3339() }

pub fn decode_dt(s: &str) -> Result<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(s)
    .map(|dt| dt.with_timezone(&Utc))
    .map_err(|e| Error::DateParse(e.to_string()))
}

// ─── Role ────────────────────────────────────────────────────────────────────

pub fn encode_role(role: Role) -> &'static str {
  match role {
    Role::Entrepreneur => "entrepreneur",
    Role::Investor => "investor",
    Role::Admin => "admin",
  }
}

pub fn decode_role(s: &str) -> Result<Role> {
  match s {
    "entrepreneur" => Ok(Role::Entrepreneur),
    "investor" => Ok(Role::Investor),
    "admin" => Ok(Role::Admin),
    other => Err(Error::Decode(format!("unknown role: {other:?}"))),
  }
}

// ─── Row types ───────────────────────────────────────────────────────────────

/// Raw strings read directly from a `users` row.
pub struct RawUser {
  pub user_id:       String,
  pub first_name:    String,
  pub last_name:     String,
  pub email:         String,
  pub password_hash: String,
  pub role:          String,
  pub created_at:    String,
  pub updated_at:    String,
}

impl RawUser {
  /// The interest set is loaded separately (join table) and attached
  /// here.
  pub fn into_user(self, interests: Vec<Interest>) -> Result<User> {
    Ok(User {
      id:            decode_uuid(&self.user_id)?,
      first_name:    self.first_name,
      last_name:     self.last_name,
      email:         self.email,
      password_hash: self.password_hash,
      role:          decode_role(&self.role)?,
      created_at:    decode_dt(&self.created_at)?,
      updated_at:    decode_dt(&self.updated_at)?,
      interests,
    })
  }
}

/// Raw strings read directly from an `interests` row.
pub struct RawInterest {
  pub interest_id: String,
  pub name:        String,
  pub description: Option<String>,
  pub created_at:  String,
}

impl RawInterest {
  pub fn into_interest(self) -> Result<Interest> {
    Ok(Interest {
      id:          decode_uuid(&self.interest_id)?,
      name:        self.name,
      description: self.description,
      created_at:  decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `projects` row.
pub struct RawProject {
  pub project_id:  String,
  pub title:       String,
  pub description: String,
  pub budget:      f64,
  pub category:    String,
  pub owner_id:    String,
  pub created_at:  String,
  pub updated_at:  String,
}

impl RawProject {
  pub fn into_project(self) -> Result<Project> {
    Ok(Project {
      id:          decode_uuid(&self.project_id)?,
      title:       self.title,
      description: self.description,
      budget:      self.budget,
      category:    self.category,
      owner_id:    decode_uuid(&self.owner_id)?,
      created_at:  decode_dt(&self.created_at)?,
      updated_at:  decode_dt(&self.updated_at)?,
    })
  }
}

/// Raw strings read directly from an `investments` row.
pub struct RawInvestment {
  pub investment_id: String,
  pub investor_id:   String,
  pub project_id:    String,
  pub amount:        f64,
  pub created_at:    String,
}

impl RawInvestment {
  pub fn into_investment(self) -> Result<Investment> {
    Ok(Investment {
      id:          decode_uuid(&self.investment_id)?,
      investor_id: decode_uuid(&self.investor_id)?,
      project_id:  decode_uuid(&self.project_id)?,
      amount:      self.amount,
      created_at:  decode_dt(&self.created_at)?,
    })
  }
}

/// Raw strings read directly from a `sessions` row.
pub struct RawSession {
  pub session_id:   String,
  pub user_id:      String,
  pub token_digest: String,
  pub created_at:   String,
  pub expires_at:   String,
}

impl RawSession {
  pub fn into_session(self) -> Result<Session> {
    Ok(Session {
      id:           decode_uuid(&self.session_id)?,
      user_id:      decode_uuid(&self.user_id)?,
      token_digest: self.token_digest,
      created_at:   decode_dt(&self.created_at)?,
      expires_at:   decode_dt(&self.expires_at)?,
    })
  }
}
