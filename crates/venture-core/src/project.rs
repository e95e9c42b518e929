//! Project — a venture seeking investment, owned by an entrepreneur.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

/// A project listing. `category` is a single free-text label, not drawn
/// from a controlled vocabulary shared with interest names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
  pub id:          Uuid,
  pub title:       String,
  pub description: String,
  pub budget:      f64,
  pub category:    String,
  pub owner_id:    Uuid,
  pub created_at:  DateTime<Utc>,
  pub updated_at:  DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewProject {
  pub title:       String,
  pub description: String,
  pub budget:      f64,
  pub category:    String,
  pub owner_id:    Uuid,
}

impl NewProject {
  pub fn validate(&self) -> Result<()> {
    if self.title.trim().is_empty() {
      return Err(Error::EmptyField("title"));
    }
    if self.description.trim().is_empty() {
      return Err(Error::EmptyField("description"));
    }
    if self.category.trim().is_empty() {
      return Err(Error::EmptyField("category"));
    }
    if self.budget < 0.0 {
      return Err(Error::NegativeBudget);
    }
    Ok(())
  }
}

/// Partial project update. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct ProjectUpdate {
  pub title:       Option<String>,
  pub description: Option<String>,
  pub budget:      Option<f64>,
  pub category:    Option<String>,
}

impl ProjectUpdate {
  pub fn validate(&self) -> Result<()> {
    if let Some(title) = &self.title
      && title.trim().is_empty()
    {
      return Err(Error::EmptyField("title"));
    }
    if let Some(description) = &self.description
      && description.trim().is_empty()
    {
      return Err(Error::EmptyField("description"));
    }
    if let Some(category) = &self.category
      && category.trim().is_empty()
    {
      return Err(Error::EmptyField("category"));
    }
    if let Some(budget) = self.budget
      && budget < 0.0
    {
      return Err(Error::NegativeBudget);
    }
    Ok(())
  }
}
