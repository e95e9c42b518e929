//! Session — a persisted bearer-token login.
//!
//! Only the SHA-256 digest of the opaque token is stored; the plaintext
//! token exists solely in the login response and the client's hands.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A live (or expired) login session. Never serialised to clients.
#[derive(Debug, Clone)]
pub struct Session {
  pub id:           Uuid,
  pub user_id:      Uuid,
  /// Lowercase hex SHA-256 of the bearer token.
  pub token_digest: String,
  pub created_at:   DateTime<Utc>,
  pub expires_at:   DateTime<Utc>,
}

impl Session {
  pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
    self.expires_at <= now
  }
}

#[derive(Debug, Clone)]
pub struct NewSession {
  pub user_id:      Uuid,
  pub token_digest: String,
  pub expires_at:   DateTime<Utc>,
}
