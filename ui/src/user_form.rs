use api::NewUser;
use dioxus::prelude::*;

use crate::board::{reload_users, use_board};
use crate::components::{Button, ButtonVariant, Input};

/// Presence check only; no format validation on either field.
fn ready(username: &str, email: &str) -> bool {
    !username.is_empty() && !email.is_empty()
}

/// Inline form for creating a new user.
#[component]
pub fn NewUserForm() -> Element {
    let board = use_board();
    let mut username = use_signal(String::new);
    let mut email = use_signal(String::new);

    let handle_create = move |_| {
        if !ready(&username(), &email()) {
            return;
        }
        spawn(async move {
            let body = NewUser {
                username: username(),
                email: email(),
            };
            match api::create_user(&body).await {
                Ok(()) => {
                    username.set(String::new());
                    email.set(String::new());
                    reload_users(board).await;
                }
                Err(e) => tracing::error!("failed to create user: {e}"),
            }
        });
    };

    rsx! {
        section {
            class: "create-form",
            h3 { "Create New User" }
            div {
                class: "create-form__row",

                Input {
                    placeholder: "Username",
                    value: username(),
                    oninput: move |evt: FormEvent| username.set(evt.value()),
                }

                Input {
                    r#type: "email",
                    placeholder: "Email",
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                Button {
                    variant: ButtonVariant::Primary,
                    onclick: handle_create,
                    "Create User"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ready;

    #[test]
    fn requires_both_fields() {
        assert!(ready("alice", "alice@example.com"));
        assert!(!ready("", "alice@example.com"));
        assert!(!ready("alice", ""));
        assert!(!ready("", ""));
    }
}
