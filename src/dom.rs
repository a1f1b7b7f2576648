// Browser glue: element lookup, container transform, listeners and the timer-backed transition host.
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, MouseEvent, WheelEvent, Window};
use yew::Callback;

use crate::config::{MOUNT_ID, PageConfig};
use crate::error::DomError;
use crate::model::{TRANSFORM_ORIGIN, ZoomAction, ZoomLevel};
use crate::state::{
    ClickDecision, KeyChord, PageTransition, TransitionHost, WheelInput, WheelOutcome,
    wheel_outcome, zoom_action_for_key,
};
use crate::util::{clog, cwarn};

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

fn body() -> Result<HtmlElement, DomError> {
    document()?.body().ok_or(DomError::NoBody)
}

/// `#zoomControls` if the page has one, otherwise `<body>`.
pub fn mount_host() -> Result<Element, DomError> {
    let doc = document()?;
    if let Some(el) = doc.get_element_by_id(MOUNT_ID) {
        return Ok(el);
    }
    Ok(body()?.into())
}

pub fn read_config(host: &Element) -> PageConfig {
    PageConfig::from_attributes(|name| host.get_attribute(name))
}

/// Scales the container, anchored at its top edge.
pub fn apply_zoom(container_id: &str, level: ZoomLevel) -> Result<(), DomError> {
    let container: HtmlElement = document()?
        .get_element_by_id(container_id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| DomError::MissingElement(container_id.to_string()))?;
    let style = container.style();
    style.set_property("transform", &level.transform())?;
    style.set_property("transform-origin", TRANSFORM_ORIGIN)?;
    Ok(())
}

pub struct DomTransitionHost {
    fade_class: String,
}

impl DomTransitionHost {
    pub fn new(fade_class: impl Into<String>) -> Self {
        Self {
            fade_class: fade_class.into(),
        }
    }
}

impl TransitionHost for DomTransitionHost {
    fn fade_in(&self) {
        if let Err(e) = body().and_then(|b| Ok(b.class_list().remove_1(&self.fade_class)?)) {
            cwarn(&format!("fade in failed: {e}"));
        }
    }

    fn fade_out(&self) {
        if let Err(e) = body().and_then(|b| Ok(b.class_list().add_1(&self.fade_class)?)) {
            cwarn(&format!("fade out failed: {e}"));
        }
    }

    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>) {
        let Ok(win) = window() else {
            callback();
            return;
        };
        let timeout = i32::try_from(delay_ms).unwrap_or(i32::MAX);
        // once_into_js hands ownership to the JS side, freed after the single call
        let func = Closure::once_into_js(move || callback());
        if let Err(e) =
            win.set_timeout_with_callback_and_timeout_and_arguments_0(func.unchecked_ref(), timeout)
        {
            cwarn(&format!("setTimeout failed: {:?}", e));
        }
    }

    fn navigate(&self, url: &str) {
        let result = window().and_then(|w| Ok(w.location().set_href(url)?));
        if let Err(e) = result {
            cwarn(&format!("navigation to {url} failed: {e}"));
        }
    }
}

/// Click handlers on the anchors present at startup, plus the bfcache `pageshow` hook.
pub struct TransitionBindings {
    anchors: Vec<(Element, Closure<dyn FnMut(MouseEvent)>)>,
    pageshow: Closure<dyn FnMut(web_sys::PageTransitionEvent)>,
}

pub fn bind_transitions(
    transition: PageTransition<DomTransitionHost>,
) -> Result<TransitionBindings, DomError> {
    let win = window()?;
    let doc = document()?;
    transition.start();

    let nodes = doc.query_selector_all("a")?;
    let mut anchors = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        let Some(anchor) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let click_cb = {
            let transition = transition.clone();
            let anchor = anchor.clone();
            Closure::wrap(Box::new(move |e: MouseEvent| {
                let href = anchor.get_attribute("href");
                match transition.on_link_click(href.as_deref()) {
                    ClickDecision::PassThrough => {}
                    ClickDecision::Intercept => {
                        e.prevent_default();
                        clog(&format!("page transition: {:?}", transition.phase()));
                    }
                    ClickDecision::Swallow => e.prevent_default(),
                }
            }) as Box<dyn FnMut(_)>)
        };
        anchor.add_event_listener_with_callback("click", click_cb.as_ref().unchecked_ref())?;
        anchors.push((anchor, click_cb));
    }

    let pageshow = {
        let transition = transition.clone();
        Closure::wrap(Box::new(move |e: web_sys::PageTransitionEvent| {
            if e.persisted() {
                transition.restore();
            }
        }) as Box<dyn FnMut(_)>)
    };
    win.add_event_listener_with_callback("pageshow", pageshow.as_ref().unchecked_ref())?;

    clog(&format!("page transition bound to {} links", anchors.len()));
    Ok(TransitionBindings { anchors, pageshow })
}

impl TransitionBindings {
    pub fn unbind(self) {
        for (anchor, cb) in &self.anchors {
            let _ = anchor.remove_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
        }
        if let Ok(win) = window() {
            let _ = win.remove_event_listener_with_callback(
                "pageshow",
                self.pageshow.as_ref().unchecked_ref(),
            );
        }
    }
}

/// Document-level keyboard chords and Ctrl/Cmd+wheel.
pub struct ZoomListeners {
    keydown: Closure<dyn FnMut(KeyboardEvent)>,
    wheel: Closure<dyn FnMut(WheelEvent)>,
}

pub fn bind_zoom_input(on_action: Callback<ZoomAction>) -> Result<ZoomListeners, DomError> {
    let doc = document()?;

    let keydown = {
        let on_action = on_action.clone();
        Closure::wrap(Box::new(move |e: KeyboardEvent| {
            if let Some(action) = zoom_action_for_key(&KeyChord::from(&e)) {
                e.prevent_default();
                on_action.emit(action);
            }
        }) as Box<dyn FnMut(_)>)
    };
    doc.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref())?;

    let wheel = Closure::wrap(Box::new(move |e: WheelEvent| {
        if let WheelOutcome::Zoom(action) = wheel_outcome(&WheelInput::from(&e)) {
            e.prevent_default();
            on_action.emit(action);
        }
    }) as Box<dyn FnMut(_)>);
    // must be non-passive or preventDefault is ignored
    let opts = web_sys::AddEventListenerOptions::new();
    opts.set_passive(false);
    doc.add_event_listener_with_callback_and_add_event_listener_options(
        "wheel",
        wheel.as_ref().unchecked_ref(),
        &opts,
    )?;

    Ok(ZoomListeners { keydown, wheel })
}

impl ZoomListeners {
    pub fn unbind(self) {
        if let Ok(doc) = document() {
            let _ = doc
                .remove_event_listener_with_callback("keydown", self.keydown.as_ref().unchecked_ref());
            let _ =
                doc.remove_event_listener_with_callback("wheel", self.wheel.as_ref().unchecked_ref());
        }
    }
}

pub fn page_transition(config: &PageConfig) -> PageTransition<DomTransitionHost> {
    PageTransition::new(
        Rc::new(DomTransitionHost::new(config.fade_class.clone())),
        config.fade_delay_ms,
    )
}
