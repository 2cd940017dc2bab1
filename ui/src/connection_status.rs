//! Manual connectivity check and the status lines above the board.

use dioxus::prelude::*;

use crate::board::use_board;
use crate::components::{Button, ButtonVariant};

/// Button that probes the root and health endpoints on demand, plus the
/// message/health lines it (and the initial load) populate.
#[component]
pub fn ConnectionStatus() -> Element {
    let mut board = use_board();

    let handle_check = move |_| {
        spawn(async move {
            board.write().loading = true;

            let outcome = async {
                let root = api::fetch_root().await?;
                let health = api::fetch_health().await?;
                Ok::<_, api::ApiError>((root, health))
            }
            .await;

            match outcome {
                Ok(pair) => board.write().apply_connectivity(Some(pair)),
                Err(e) => {
                    tracing::error!("connectivity check failed: {e}");
                    board.write().apply_connectivity(None);
                }
            }
        });
    };

    let state = board();

    rsx! {
        div {
            class: "status-panel",

            Button {
                variant: ButtonVariant::Primary,
                disabled: state.loading,
                onclick: handle_check,
                if state.loading { "Testing..." } else { "Test Database Connection" }
            }

            if !state.message.is_empty() {
                div {
                    class: "status-panel__line",
                    strong { "API Message: " }
                    "{state.message}"
                }
            }

            if !state.health.is_empty() {
                div {
                    class: "status-panel__line",
                    strong { "Health Status: " }
                    "{state.health}"
                }
            }
        }
    }
}
