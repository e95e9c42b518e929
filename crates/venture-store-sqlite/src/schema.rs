//! SQL schema for the venture SQLite store.
//!
//! Executed once at connection startup via `PRAGMA user_version`. Future
//! migrations will be gated on that version number.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;

CREATE TABLE IF NOT EXISTS users (
    user_id       TEXT PRIMARY KEY,
    first_name    TEXT NOT NULL,
    last_name     TEXT NOT NULL,
    email         TEXT NOT NULL UNIQUE,
    password_hash TEXT NOT NULL,   -- argon2 PHC string
    role          TEXT NOT NULL DEFAULT 'entrepreneur',
    created_at    TEXT NOT NULL,   -- ISO 8601 UTC; server-assigned
    updated_at    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS interests (
    interest_id TEXT PRIMARY KEY,
    name        TEXT NOT NULL UNIQUE,
    description TEXT,
    created_at  TEXT NOT NULL
);

-- User <-> Interest association. Rows are cleared before either side is
-- deleted; there are no other cascades.
CREATE TABLE IF NOT EXISTS user_interests (
    user_id     TEXT NOT NULL REFERENCES users(user_id),
    interest_id TEXT NOT NULL REFERENCES interests(interest_id),
    PRIMARY KEY (user_id, interest_id)
);

CREATE TABLE IF NOT EXISTS projects (
    project_id  TEXT PRIMARY KEY,
    title       TEXT NOT NULL,
    description TEXT NOT NULL,
    budget      REAL NOT NULL,
    category    TEXT NOT NULL,   -- free text, not a controlled vocabulary
    owner_id    TEXT NOT NULL REFERENCES users(user_id),
    created_at  TEXT NOT NULL,
    updated_at  TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS investments (
    investment_id TEXT PRIMARY KEY,
    investor_id   TEXT NOT NULL REFERENCES users(user_id),
    project_id    TEXT NOT NULL REFERENCES projects(project_id),
    amount        REAL NOT NULL,
    created_at    TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS sessions (
    session_id   TEXT PRIMARY KEY,
    user_id      TEXT NOT NULL REFERENCES users(user_id),
    token_digest TEXT NOT NULL UNIQUE,   -- hex SHA-256 of the bearer token
    created_at   TEXT NOT NULL,
    expires_at   TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS user_interests_user_idx    ON user_interests(user_id);
CREATE INDEX IF NOT EXISTS projects_owner_idx         ON projects(owner_id);
CREATE INDEX IF NOT EXISTS investments_investor_idx   ON investments(investor_id);
CREATE INDEX IF NOT EXISTS investments_project_idx    ON investments(project_id);
CREATE INDEX IF NOT EXISTS sessions_user_idx          ON sessions(user_id);

PRAGMA user_version = 1;
";
