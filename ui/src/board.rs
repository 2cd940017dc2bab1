//! Board state: the one place view data lives.
//!
//! [`BoardState`] mirrors the backend's two entity collections plus the status
//! lines and the single `loading` flag. Components read it through the
//! [`use_board`] context hook and mutate it only through the transitions
//! defined here; collections are always replaced wholesale after a reload,
//! never patched in place.

use api::{HealthInfo, RootInfo, Task, User};
use dioxus::prelude::*;

/// Shown as the health line when the initial load sequence fails.
pub const CONNECTION_FAILED: &str = "connection failed";
/// Shown as the message line when the manual connectivity check fails.
pub const API_UNREACHABLE: &str = "Error connecting to API";
/// Shown as the health line when the manual connectivity check fails.
pub const UNHEALTHY: &str = "unhealthy";

/// View state for the whole page.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    /// Greeting from the backend root endpoint, set by the manual check.
    pub message: String,
    /// Human-readable health line, or a sentinel after a failed probe.
    pub health: String,
    /// True during the initial load sequence and the manual connectivity
    /// check. Row mutations (create, toggle, delete) never touch it.
    pub loading: bool,
    pub users: Vec<User>,
    pub tasks: Vec<Task>,
    /// When set, task reloads fetch only this user's tasks.
    pub task_filter: Option<i64>,
}

impl Default for BoardState {
    fn default() -> Self {
        Self {
            message: String::new(),
            health: String::new(),
            loading: true,
            users: Vec::new(),
            tasks: Vec::new(),
            task_filter: None,
        }
    }
}

impl BoardState {
    /// Replace the user collection wholesale.
    pub fn replace_users(&mut self, users: Vec<User>) {
        self.users = users;
    }

    /// Replace the task collection wholesale.
    pub fn replace_tasks(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
    }

    /// Close the initial load sequence with the health probe's outcome.
    /// `None` means the probe failed; prior collection data stays untouched.
    pub fn apply_health(&mut self, health: Option<HealthInfo>) {
        self.health = match health {
            Some(health) => health.summary(),
            None => CONNECTION_FAILED.to_string(),
        };
        self.loading = false;
    }

    /// Close the manual connectivity check. `None` means any step failed.
    pub fn apply_connectivity(&mut self, outcome: Option<(RootInfo, HealthInfo)>) {
        match outcome {
            Some((root, health)) => {
                self.message = root.message_or_empty().to_string();
                self.health = health.summary();
            }
            None => {
                self.message = API_UNREACHABLE.to_string();
                self.health = UNHEALTHY.to_string();
            }
        }
        self.loading = false;
    }

    /// Username of a task's owner, or the raw id when the owner is unknown.
    pub fn owner_label(&self, user_id: i64) -> String {
        self.users
            .iter()
            .find(|u| u.id == user_id)
            .map(|u| u.username.clone())
            .unwrap_or_else(|| format!("ID {user_id}"))
    }
}

/// Get the board state signal.
pub fn use_board() -> Signal<BoardState> {
    use_context::<Signal<BoardState>>()
}

/// Reload the user collection. Failures are logged and leave prior data
/// untouched.
pub async fn reload_users(mut board: Signal<BoardState>) {
    match api::fetch_users().await {
        Ok(users) => board.write().replace_users(users),
        Err(e) => tracing::error!("failed to load users: {e}"),
    }
}

/// Reload the task collection, honoring the current owner filter. Failures
/// are logged and leave prior data untouched.
pub async fn reload_tasks(mut board: Signal<BoardState>) {
    let filter = board.peek().task_filter;
    let fetched = match filter {
        Some(user_id) => api::fetch_user_tasks(user_id).await,
        None => api::fetch_tasks().await,
    };
    match fetched {
        Ok(tasks) => board.write().replace_tasks(tasks),
        Err(e) => tracing::error!("failed to load tasks: {e}"),
    }
}

/// Provider component that owns the board state.
/// Wrap the app with this component; on mount it runs the initial load
/// sequence: users, then tasks, then the health probe.
#[component]
pub fn BoardProvider(children: Element) -> Element {
    let mut board = use_signal(BoardState::default);

    let _ = use_resource(move || async move {
        reload_users(board).await;
        reload_tasks(board).await;

        let health = match api::fetch_health().await {
            Ok(health) => Some(health),
            Err(e) => {
                tracing::error!("health probe failed: {e}");
                None
            }
        };
        board.write().apply_health(health);
    });

    use_context_provider(|| board);

    rsx! {
        {children}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, username: &str) -> User {
        User {
            id,
            username: username.to_string(),
            email: format!("{username}@example.com"),
            is_active: true,
        }
    }

    fn task(id: i64, title: &str, user_id: i64) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: None,
            completed: false,
            user_id,
        }
    }

    #[test]
    fn starts_loading_with_empty_collections() {
        let state = BoardState::default();
        assert!(state.loading);
        assert!(state.users.is_empty());
        assert!(state.tasks.is_empty());
        assert!(state.health.is_empty());
    }

    #[test]
    fn successful_probe_formats_health_line() {
        let mut state = BoardState::default();
        state.apply_health(Some(HealthInfo {
            status: "ok".to_string(),
            database: "up".to_string(),
        }));
        assert_eq!(state.health, "ok - up");
        assert!(!state.loading);
    }

    #[test]
    fn failed_probe_sets_sentinel_and_clears_loading() {
        let mut state = BoardState::default();
        state.replace_users(vec![user(1, "alice")]);
        state.apply_health(None);
        assert_eq!(state.health, CONNECTION_FAILED);
        assert!(!state.loading);
        // Prior data survives a failed probe.
        assert_eq!(state.users.len(), 1);
    }

    #[test]
    fn failed_connectivity_check_sets_both_sentinels() {
        let mut state = BoardState::default();
        state.apply_connectivity(None);
        assert_eq!(state.message, API_UNREACHABLE);
        assert_eq!(state.health, UNHEALTHY);
        assert!(!state.loading);
    }

    #[test]
    fn successful_connectivity_check_sets_message_and_health() {
        let mut state = BoardState::default();
        state.apply_connectivity(Some((
            RootInfo {
                message: Some("Hello from the backend".to_string()),
            },
            HealthInfo {
                status: "healthy".to_string(),
                database: "connected".to_string(),
            },
        )));
        assert_eq!(state.message, "Hello from the backend");
        assert_eq!(state.health, "healthy - connected");
    }

    #[test]
    fn reload_replaces_collections_wholesale() {
        let mut state = BoardState::default();
        state.replace_tasks(vec![task(1, "old", 1), task(2, "older", 1)]);
        state.replace_tasks(vec![task(3, "new", 1)]);
        assert_eq!(state.tasks.len(), 1);
        assert_eq!(state.tasks[0].title, "new");
    }

    #[test]
    fn owner_label_falls_back_to_raw_id() {
        let mut state = BoardState::default();
        state.replace_users(vec![user(1, "alice")]);
        assert_eq!(state.owner_label(1), "alice");
        assert_eq!(state.owner_label(7), "ID 7");
    }
}
