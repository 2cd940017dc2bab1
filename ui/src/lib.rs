//! This crate contains all shared UI for the workspace.

use dioxus::prelude::*;

pub mod components;

// Re-export icon library
pub use dioxus_free_icons::Icon;
pub mod icons {
    pub use dioxus_free_icons::icons::fa_solid_icons::*;
}

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

mod board;
pub use board::{
    reload_tasks, reload_users, use_board, BoardProvider, BoardState, API_UNREACHABLE,
    CONNECTION_FAILED, UNHEALTHY,
};

mod connection_status;
pub use connection_status::ConnectionStatus;

mod user_form;
pub use user_form::NewUserForm;

mod task_form;
pub use task_form::NewTaskForm;

mod user_list;
pub use user_list::UserList;

mod task_list;
pub use task_list::TaskList;

pub mod views;
