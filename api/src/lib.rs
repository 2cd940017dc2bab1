//! # API crate — remote data gateway for Taskboard
//!
//! Everything the front end knows about the backend lives here. The UI crates
//! never touch HTTP directly; they call the free async functions below
//! (`api::fetch_users()`, `api::create_task(..)`, ...) which go through a
//! shared [`Gateway`] pointed at the backend's fixed origin.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`gateway`] | `reqwest`-backed request path: fixed base origin, JSON in/out, no retry, no timeout, no status validation |
//! | [`models`] | Wire models: [`User`], [`Task`], request bodies, and the root/health probe shapes |
//!
//! ## Operations exposed here
//!
//! - **Probes**: [`fetch_root`], [`fetch_health`]
//! - **Users**: [`fetch_users`], [`create_user`]
//! - **Tasks**: [`fetch_tasks`], [`fetch_user_tasks`], [`create_task`],
//!   [`set_task_completed`], [`delete_task`]
//!
//! Write operations return `Ok(())` and ignore the response body: callers are
//! expected to re-fetch the affected collection afterwards, which is the only
//! way local state is ever brought back in sync with the server.

pub mod gateway;
pub mod models;

pub use gateway::{ApiError, Gateway, DEFAULT_BASE_URL};
pub use models::{HealthInfo, NewTask, NewUser, RootInfo, Task, TaskUpdate, User};

/// Fetch the backend's root greeting (`GET /`).
pub async fn fetch_root() -> Result<RootInfo, ApiError> {
    Gateway::shared().get("/").await
}

/// Probe the backend's health endpoint (`GET /api/health`).
pub async fn fetch_health() -> Result<HealthInfo, ApiError> {
    Gateway::shared().get("/api/health").await
}

/// Load the full user collection (`GET /api/users`).
pub async fn fetch_users() -> Result<Vec<User>, ApiError> {
    Gateway::shared().get("/api/users").await
}

/// Create a user (`POST /api/users`). The created row in the response is
/// discarded; reload the collection to see it.
pub async fn create_user(new_user: &NewUser) -> Result<(), ApiError> {
    let _: serde_json::Value = Gateway::shared().post("/api/users", new_user).await?;
    Ok(())
}

/// Load the full task collection (`GET /api/tasks`).
pub async fn fetch_tasks() -> Result<Vec<Task>, ApiError> {
    Gateway::shared().get("/api/tasks").await
}

/// Load only the tasks owned by one user (`GET /api/users/{id}/tasks`).
pub async fn fetch_user_tasks(user_id: i64) -> Result<Vec<Task>, ApiError> {
    Gateway::shared()
        .get(&format!("/api/users/{user_id}/tasks"))
        .await
}

/// Create a task (`POST /api/tasks`).
pub async fn create_task(new_task: &NewTask) -> Result<(), ApiError> {
    let _: serde_json::Value = Gateway::shared().post("/api/tasks", new_task).await?;
    Ok(())
}

/// Set a task's completed flag (`PUT /api/tasks/{id}`).
pub async fn set_task_completed(task_id: i64, completed: bool) -> Result<(), ApiError> {
    let _: serde_json::Value = Gateway::shared()
        .put(&format!("/api/tasks/{task_id}"), &TaskUpdate { completed })
        .await?;
    Ok(())
}

/// Delete a task (`DELETE /api/tasks/{id}`).
pub async fn delete_task(task_id: i64) -> Result<(), ApiError> {
    let _: serde_json::Value = Gateway::shared()
        .delete(&format!("/api/tasks/{task_id}"))
        .await?;
    Ok(())
}
