use serde::{Deserialize, Serialize};

/// A task row as the backend serializes it.
///
/// `user_id` is a foreign key into the user collection. It should reference a
/// known user, but the view degrades to showing the raw id when it does not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub completed: bool,
    pub user_id: i64,
}

/// Body for `POST /api/tasks`.
///
/// The description is sent as entered, possibly empty; the backend stores a
/// NULL when it is absent, which is why [`Task::description`] is optional on
/// the read side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub user_id: i64,
}

/// Body for `PUT /api/tasks/{id}`. Only the completed flag is ever updated
/// from this client.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaskUpdate {
    pub completed: bool,
}
