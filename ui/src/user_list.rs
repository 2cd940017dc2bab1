use dioxus::prelude::*;

use crate::board::use_board;

/// Card list of every loaded user.
#[component]
pub fn UserList() -> Element {
    let board = use_board();
    let users = board().users;

    rsx! {
        section {
            class: "entity-list",
            h3 { "Users ({users.len()})" }
            for user in users {
                div {
                    key: "{user.id}",
                    class: "user-card",
                    strong { "{user.username}" }
                    " ({user.email})"
                    if !user.is_active {
                        span { class: "user-card__inactive", "inactive" }
                    }
                }
            }
        }
    }
}
