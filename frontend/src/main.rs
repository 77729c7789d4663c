use log::{error, info};
use yew::prelude::*;

mod config;
mod content;
mod reveal {
    pub mod driver;
    pub mod easing;
    pub mod engine;
    pub mod geometry;
    pub mod hooks;
    pub mod intent;
    pub mod stagger;
}
mod progress {
    pub mod listener;
    pub mod state;
}
mod components {
    pub mod about;
    pub mod contact;
    pub mod experience;
    pub mod hero;
    pub mod projects;
    pub mod scene;
    pub mod scroll_progress;
    pub mod section_header;
    pub mod skills;
}
mod pages {
    pub mod home;
}

use components::scroll_progress::ScrollProgressBar;
use content::Portfolio;
use pages::home::Home;
use reveal::hooks::RevealHandle;

#[function_component]
fn App() -> Html {
    let content = use_memo(
        |_| match content::load() {
            Ok(portfolio) => portfolio,
            Err(e) => {
                error!("Failed to load portfolio content: {}", e);
                Portfolio::default()
            }
        },
        (),
    );
    let reveal = use_state(RevealHandle::new);

    info!("Rendering portfolio for {}", content.profile.name);
    html! {
        <ContextProvider<RevealHandle> context={(*reveal).clone()}>
            <ScrollProgressBar />
            <Home content={content} />
        </ContextProvider<RevealHandle>>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
