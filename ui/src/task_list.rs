use api::Task;
use dioxus::prelude::*;

use crate::board::{reload_tasks, use_board};
use crate::icons::{FaCheck, FaHourglass, FaTrashCan};
use crate::Icon;

/// Card list of tasks with an owner filter, a completion checkbox and a
/// remove control per row.
#[component]
pub fn TaskList() -> Element {
    let mut board = use_board();
    let state = board();

    let handle_filter = move |evt: FormEvent| {
        board.write().task_filter = evt.value().parse().ok();
        spawn(async move {
            reload_tasks(board).await;
        });
    };

    rsx! {
        section {
            class: "entity-list",

            div {
                class: "entity-list__header",
                h3 { "Tasks ({state.tasks.len()})" }
                select {
                    class: "select",
                    value: state.task_filter.map(|id| id.to_string()).unwrap_or_default(),
                    onchange: handle_filter,
                    option { value: "", "All users" }
                    for user in &state.users {
                        option {
                            key: "{user.id}",
                            value: "{user.id}",
                            "{user.username}"
                        }
                    }
                }
            }

            for task in state.tasks.clone() {
                TaskRow {
                    key: "{task.id}",
                    owner: state.owner_label(task.user_id),
                    task: task.clone(),
                }
            }
        }
    }
}

#[component]
fn TaskRow(task: Task, owner: String) -> Element {
    let board = use_board();
    let task_id = task.id;
    let completed = task.completed;

    let handle_toggle = move |_| {
        spawn(async move {
            match api::set_task_completed(task_id, !completed).await {
                Ok(()) => reload_tasks(board).await,
                Err(e) => tracing::error!("failed to update task: {e}"),
            }
        });
    };

    let handle_delete = move |_| {
        spawn(async move {
            match api::delete_task(task_id).await {
                Ok(()) => reload_tasks(board).await,
                Err(e) => tracing::error!("failed to delete task: {e}"),
            }
        });
    };

    rsx! {
        div {
            class: if task.completed { "task-card task-card--done" } else { "task-card" },

            input {
                r#type: "checkbox",
                checked: task.completed,
                onchange: handle_toggle,
            }

            div {
                class: "task-card__body",

                div {
                    class: "task-card__title",
                    strong { "{task.title}" }
                    if task.completed {
                        Icon { icon: FaCheck, width: 14, height: 14 }
                    } else {
                        Icon { icon: FaHourglass, width: 14, height: 14 }
                    }
                }

                if let Some(description) = task.description.as_deref().filter(|d| !d.is_empty()) {
                    div { class: "task-card__description", "{description}" }
                }

                small { class: "task-card__owner", "User: {owner}" }
            }

            button {
                class: "task-card__remove",
                title: "Delete task",
                onclick: handle_delete,
                Icon { icon: FaTrashCan, width: 14, height: 14 }
            }
        }
    }
}
