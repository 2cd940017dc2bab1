//! The single page of the app.

use dioxus::prelude::*;

use crate::{ConnectionStatus, NewTaskForm, NewUserForm, TaskList, UserList};

/// Full board: status panel, the two create forms, and both entity lists.
/// Expects to be rendered inside a [`crate::BoardProvider`].
#[component]
pub fn Dashboard() -> Element {
    rsx! {
        div {
            class: "dashboard",

            header {
                class: "dashboard__header",
                h1 { "Taskboard" }
            }

            ConnectionStatus {}

            main {
                class: "dashboard__content",
                NewUserForm {}
                NewTaskForm {}
                UserList {}
                TaskList {}
            }

            footer {
                class: "dashboard__footer",
                p { "Frontend: Dioxus" }
                p { "Backend: REST API (port 8000)" }
            }
        }
    }
}
