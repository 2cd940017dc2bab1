use dioxus::prelude::*;

use ui::BoardProvider;

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: ui::MAIN_CSS }

        BoardProvider {
            ui::views::Dashboard {}
        }
    }
}
