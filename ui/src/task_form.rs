use api::NewTask;
use dioxus::prelude::*;

use crate::board::{reload_tasks, use_board};
use crate::components::{Button, ButtonVariant, Input};

/// A task needs a title and an owner; the description stays optional.
fn ready(title: &str, selected_user: Option<i64>) -> bool {
    !title.is_empty() && selected_user.is_some()
}

/// Inline form for creating a new task, with an owner picker fed from the
/// loaded user collection.
#[component]
pub fn NewTaskForm() -> Element {
    let board = use_board();
    let mut title = use_signal(String::new);
    let mut description = use_signal(String::new);
    let mut selected_user = use_signal(|| Option::<i64>::None);

    let handle_create = move |_| {
        let Some(user_id) = selected_user() else {
            return;
        };
        if !ready(&title(), Some(user_id)) {
            return;
        }
        spawn(async move {
            let body = NewTask {
                title: title(),
                description: description(),
                user_id,
            };
            match api::create_task(&body).await {
                Ok(()) => {
                    title.set(String::new());
                    description.set(String::new());
                    selected_user.set(None);
                    reload_tasks(board).await;
                }
                Err(e) => tracing::error!("failed to create task: {e}"),
            }
        });
    };

    rsx! {
        section {
            class: "create-form",
            h3 { "Create New Task" }

            div {
                class: "create-form__row",

                Input {
                    placeholder: "Task title",
                    value: title(),
                    oninput: move |evt: FormEvent| title.set(evt.value()),
                }

                select {
                    class: "select",
                    value: selected_user().map(|id| id.to_string()).unwrap_or_default(),
                    onchange: move |evt| selected_user.set(evt.value().parse().ok()),
                    option { value: "", "Select User" }
                    for user in board().users {
                        option {
                            key: "{user.id}",
                            value: "{user.id}",
                            "{user.username}"
                        }
                    }
                }
            }

            div {
                class: "create-form__row",

                textarea {
                    class: "textarea",
                    placeholder: "Task description (optional)",
                    value: description(),
                    oninput: move |evt: FormEvent| description.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    disabled: !ready(&title(), selected_user()),
                    onclick: handle_create,
                    "Create Task"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ready;

    #[test]
    fn requires_title_and_owner() {
        assert!(ready("water plants", Some(1)));
        assert!(!ready("", Some(1)));
        assert!(!ready("water plants", None));
        assert!(!ready("", None));
    }
}
