use super::zoom_controls::ZoomControls;
use crate::config::PageConfig;
use crate::dom;
use crate::model::{ZoomAction, ZoomLevel, ZoomState};
use crate::storage::{LocalStore, Loaded, load_zoom, save_zoom};
use crate::util::cwarn;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: PageConfig,
}

fn initial_level(key: &str) -> ZoomLevel {
    match LocalStore::open().and_then(|store| load_zoom(&store, key)) {
        Ok(loaded) => {
            if let Loaded::Rejected(e) = &loaded {
                cwarn(&format!("ignoring persisted zoom: {e}"));
            }
            loaded.level()
        }
        Err(e) => {
            cwarn(&format!("zoom not restored: {e}"));
            ZoomLevel::default()
        }
    }
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let zoom = use_reducer(|| ZoomState {
        level: initial_level(&props.config.storage_key),
    });

    // Persist and apply the transform whenever the level changes (and once on mount)
    {
        let key = props.config.storage_key.clone();
        let container_id = props.config.container_id.clone();
        use_effect_with(zoom.level, move |level| {
            let level = *level;
            if let Err(e) = dom::apply_zoom(&container_id, level) {
                cwarn(&format!("zoom not applied: {e}"));
            }
            if let Err(e) = LocalStore::open().and_then(|store| save_zoom(&store, &key, level)) {
                cwarn(&format!("zoom not saved: {e}"));
            }
            || ()
        });
    }

    // Keyboard/wheel shortcuts and link transitions, bound once per mount
    {
        let dispatcher = zoom.dispatcher();
        let config = props.config.clone();
        use_effect_with((), move |_| {
            let on_action = Callback::from(move |action: ZoomAction| dispatcher.dispatch(action));
            let zoom_listeners = dom::bind_zoom_input(on_action)
                .map_err(|e| cwarn(&format!("zoom shortcuts unavailable: {e}")))
                .ok();
            let transitions = dom::bind_transitions(dom::page_transition(&config))
                .map_err(|e| cwarn(&format!("page transitions unavailable: {e}")))
                .ok();
            move || {
                if let Some(l) = zoom_listeners {
                    l.unbind();
                }
                if let Some(t) = transitions {
                    t.unbind();
                }
            }
        });
    }

    let dispatch = |action: ZoomAction| {
        let zoom = zoom.clone();
        Callback::from(move |_: ()| zoom.dispatch(action))
    };

    html! {
        <ZoomControls
            level={zoom.level}
            can_increase={zoom.can_increase()}
            can_decrease={zoom.can_decrease()}
            on_increase={dispatch(ZoomAction::Increase)}
            on_decrease={dispatch(ZoomAction::Decrease)}
            on_reset={dispatch(ZoomAction::Reset)}
        />
    }
}
