use dioxus::prelude::*;

mod config;
mod sections;

use sections::{ButtonSection, CardSection, InputSection};

/// The components are styled with Tailwind utility classes; the Play CDN
/// compiles them in the browser.
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Runs after launch has installed the logger
    use_hook(config::load_gallery_config);
    let config = config::gallery_config();
    let sections = config.sections;

    rsx! {
        document::Title { "{config.title}" }
        document::Script { src: TAILWIND_CDN }

        main { class: "mx-auto max-w-3xl space-y-12 bg-gray-50 p-8",
            h1 { class: "text-2xl font-semibold text-gray-900", "{config.title}" }
            if sections.buttons {
                ButtonSection {}
            }
            if sections.cards {
                CardSection {}
            }
            if sections.inputs {
                InputSection {}
            }
        }
    }
}
