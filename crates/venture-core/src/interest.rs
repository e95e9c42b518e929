//! Interest — a named topical tag attachable to users.
//!
//! Interest names are unique. Projects carry no structured tag set, only
//! a free-text category, which is why the recommendation matcher falls
//! back to substring matching (see [`crate::recommend`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interest {
  pub id:          Uuid,
  pub name:        String,
  pub description: Option<String>,
  pub created_at:  DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewInterest {
  pub name:        String,
  pub description: Option<String>,
}

impl NewInterest {
  pub fn validate(&self) -> Result<()> {
    if self.name.trim().is_empty() {
      return Err(Error::EmptyField("name"));
    }
    Ok(())
  }
}
