//! Fade-out-then-navigate sequencing for outbound link clicks.
//!
//! Each click moves `Idle -> FadeTriggered -> Navigated`. While a fade is running,
//! further link clicks are swallowed so only the first navigation fires.
//! A back/forward cache restore puts the machine back to `Idle` and voids any
//! timer still pending.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// What the transition needs from the page. The DOM version lives in `crate::dom`.
pub trait TransitionHost {
    fn fade_in(&self);
    fn fade_out(&self);
    fn schedule(&self, delay_ms: u32, callback: Box<dyn FnOnce()>);
    fn navigate(&self, url: &str);
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FadeTriggered(String),
    Navigated(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickDecision {
    /// Browser handles the click normally.
    PassThrough,
    /// Default prevented, fade started, navigation scheduled.
    Intercept,
    /// Default prevented, nothing else; a navigation is already underway.
    Swallow,
}

pub fn is_in_page(href: Option<&str>) -> bool {
    match href {
        None => true,
        Some(url) => url.is_empty() || url.starts_with('#'),
    }
}

pub struct PageTransition<H: TransitionHost + 'static> {
    host: Rc<H>,
    delay_ms: u32,
    phase: Rc<RefCell<Phase>>,
    // bumped per intercept and per restore; a timer only fires for its own generation
    generation: Rc<Cell<u64>>,
}

impl<H: TransitionHost + 'static> Clone for PageTransition<H> {
    fn clone(&self) -> Self {
        Self {
            host: self.host.clone(),
            delay_ms: self.delay_ms,
            phase: self.phase.clone(),
            generation: self.generation.clone(),
        }
    }
}

impl<H: TransitionHost + 'static> PageTransition<H> {
    pub fn new(host: Rc<H>, delay_ms: u32) -> Self {
        Self {
            host,
            delay_ms,
            phase: Rc::new(RefCell::new(Phase::Idle)),
            generation: Rc::new(Cell::new(0)),
        }
    }

    /// Reveals the page on load.
    pub fn start(&self) {
        self.host.fade_in();
    }

    pub fn phase(&self) -> Phase {
        self.phase.borrow().clone()
    }

    /// `href` is the anchor's raw attribute value.
    pub fn on_link_click(&self, href: Option<&str>) -> ClickDecision {
        let url = match href {
            Some(url) if !is_in_page(href) => url.to_string(),
            _ => return ClickDecision::PassThrough,
        };
        if matches!(*self.phase.borrow(), Phase::FadeTriggered(_)) {
            return ClickDecision::Swallow;
        }

        *self.phase.borrow_mut() = Phase::FadeTriggered(url);
        self.host.fade_out();

        let ticket = self.generation.get().wrapping_add(1);
        self.generation.set(ticket);
        let generation = self.generation.clone();
        let phase = self.phase.clone();
        let host = self.host.clone();
        self.host.schedule(
            self.delay_ms,
            Box::new(move || {
                if generation.get() != ticket {
                    return;
                }
                let pending = match &*phase.borrow() {
                    Phase::FadeTriggered(url) => Some(url.clone()),
                    _ => None,
                };
                if let Some(url) = pending {
                    *phase.borrow_mut() = Phase::Navigated(url.clone());
                    host.navigate(&url);
                }
            }),
        );
        ClickDecision::Intercept
    }

    /// Page came back from the back/forward cache with the fade class still set.
    pub fn restore(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
        *self.phase.borrow_mut() = Phase::Idle;
        self.host.fade_in();
    }
}
