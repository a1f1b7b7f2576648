mod components;
mod config;
mod dom;
mod error;
mod model;
mod state;
mod storage;
mod util;

use components::app::{App, AppProps};

fn main() {
    let host = match dom::mount_host() {
        Ok(host) => host,
        Err(e) => {
            util::cwarn(&format!("page-zoom not started: {e}"));
            return;
        }
    };
    let config = dom::read_config(&host);
    if let Ok(json) = serde_json::to_string(&config) {
        util::clog(&format!("page-zoom config {json}"));
    }
    yew::Renderer::<App>::with_root_and_props(host, AppProps { config }).render();
}
