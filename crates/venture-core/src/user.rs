//! User — a registered account on the platform.
//!
//! A user is an entrepreneur, an investor, or an administrator. The
//! credential hash is carried for verification but never serialised into
//! API responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, interest::Interest};

/// Minimum accepted password length, matching the registration rules.
pub const MIN_PASSWORD_LEN: usize = 6;

/// The role a user holds on the platform.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Role {
  #[default]
  Entrepreneur,
  Investor,
  Admin,
}

/// A registered account, with its associated interest tags.
///
/// The interest set is unordered and unique; it drives the project
/// recommendation matcher.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  pub id:         Uuid,
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  /// Argon2 PHC string. Excluded from serialised output.
  #[serde(skip_serializing, default)]
  pub password_hash: String,
  pub role:       Role,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
  pub interests:  Vec<Interest>,
}

/// Input for creating a user. The password is already hashed by the
/// caller; this crate never sees plaintext credentials.
#[derive(Debug, Clone)]
pub struct NewUser {
  pub first_name:    String,
  pub last_name:     String,
  pub email:         String,
  pub password_hash: String,
  pub role:          Role,
}

impl NewUser {
  /// Check the registration field rules: non-empty names, a plausible
  /// email shape, and a present hash.
  pub fn validate(&self) -> Result<()> {
    if self.first_name.trim().is_empty() {
      return Err(Error::EmptyField("firstName"));
    }
    if self.last_name.trim().is_empty() {
      return Err(Error::EmptyField("lastName"));
    }
    validate_email(&self.email)?;
    if self.password_hash.is_empty() {
      return Err(Error::EmptyField("password"));
    }
    Ok(())
  }
}

/// Partial profile update. `None` fields are left untouched.
///
/// `interest_ids`, when present, replaces the whole interest set;
/// unknown ids are ignored rather than rejected.
#[derive(Debug, Clone, Default)]
pub struct UserUpdate {
  pub first_name:    Option<String>,
  pub last_name:     Option<String>,
  pub email:         Option<String>,
  pub password_hash: Option<String>,
  pub interest_ids:  Option<Vec<Uuid>>,
}

impl UserUpdate {
  pub fn validate(&self) -> Result<()> {
    if let Some(first) = &self.first_name
      && first.trim().is_empty()
    {
      return Err(Error::EmptyField("firstName"));
    }
    if let Some(last) = &self.last_name
      && last.trim().is_empty()
    {
      return Err(Error::EmptyField("lastName"));
    }
    if let Some(email) = &self.email {
      validate_email(email)?;
    }
    Ok(())
  }
}

/// Minimal email shape check: one `@` with a dot somewhere after it.
/// Deliverability is the mail server's problem, not ours.
pub fn validate_email(email: &str) -> Result<()> {
  let valid = email
    .split_once('@')
    .is_some_and(|(local, domain)| {
      !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
    });
  if valid {
    Ok(())
  } else {
    Err(Error::InvalidEmail(email.to_owned()))
  }
}

/// Check a plaintext password against the length rule, before hashing.
pub fn validate_password(password: &str) -> Result<()> {
  if password.len() < MIN_PASSWORD_LEN {
    return Err(Error::PasswordTooShort(MIN_PASSWORD_LEN));
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use chrono::Utc;
  use uuid::Uuid;

  use super::*;

  #[test]
  fn password_hash_is_not_serialised() {
    let user = User {
      id:            Uuid::new_v4(),
      first_name:    "Jean".into(),
      last_name:     "Dupont".into(),
      email:         "jean.dupont@example.com".into(),
      password_hash: "$argon2id$v=19$secret".into(),
      role:          Role::Entrepreneur,
      created_at:    Utc::now(),
      updated_at:    Utc::now(),
      interests:     vec![],
    };

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("passwordHash").is_none());
    assert!(json.get("password_hash").is_none());
    assert_eq!(json["email"], "jean.dupont@example.com");
    assert_eq!(json["role"], "entrepreneur");
  }

  #[test]
  fn email_validation() {
    assert!(validate_email("a@b.co").is_ok());
    assert!(validate_email("jean.dupont@example.com").is_ok());
    assert!(validate_email("no-at-sign").is_err());
    assert!(validate_email("@example.com").is_err());
    assert!(validate_email("user@nodot").is_err());
  }

  #[test]
  fn password_length_rule() {
    assert!(validate_password("abcdef").is_ok());
    assert!(matches!(
      validate_password("abc"),
      Err(Error::PasswordTooShort(_))
    ));
  }

  #[test]
  fn new_user_requires_names() {
    let mut input = NewUser {
      first_name:    "Jean".into(),
      last_name:     "Dupont".into(),
      email:         "jean@example.com".into(),
      password_hash: "hash".into(),
      role:          Role::Investor,
    };
    assert!(input.validate().is_ok());

    input.first_name = "  ".into();
    assert!(matches!(input.validate(), Err(Error::EmptyField("firstName"))));
  }
}
