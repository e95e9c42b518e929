//! Investment — money committed by an investor to a project.
//!
//! Domain invariants enforced at the API layer: the investor must hold
//! the Investor role and must not own the target project. This module
//! only validates the amount itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Investment {
  pub id:          Uuid,
  pub investor_id: Uuid,
  pub project_id:  Uuid,
  pub amount:      f64,
  pub created_at:  DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewInvestment {
  pub investor_id: Uuid,
  pub project_id:  Uuid,
  pub amount:      f64,
}

impl NewInvestment {
  pub fn validate(&self) -> Result<()> {
    if self.amount < 0.0 {
      return Err(Error::NegativeAmount);
    }
    Ok(())
  }
}
