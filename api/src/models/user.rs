use serde::{Deserialize, Serialize};

/// A user row as the backend serializes it.
///
/// Identifiers are server-assigned; the client never mutates a user after
/// creation except by reloading the whole collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub is_active: bool,
}

/// Body for `POST /api/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub email: String,
}
