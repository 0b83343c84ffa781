use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::{REVEAL_CLASS, REVEAL_THRESHOLD};
use crate::dom::{self, DomError};
use crate::router::Route;

pub const VISIBLE_CLASS: &str = "visible";

/// Fade-in state of one element. Once visible it stays visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Reveal {
    #[default]
    Hidden,
    Visible,
}

impl Reveal {
    pub fn of(element: &Element) -> Self {
        if element.class_list().contains(VISIBLE_CLASS) {
            Reveal::Visible
        } else {
            Reveal::Hidden
        }
    }

    /// Applies one observer report. The observer also reports once right
    /// after `observe()`, whatever the overlap, so the ratio is checked here
    /// rather than trusting `intersecting` alone.
    pub fn on_entry(self, intersecting: bool, ratio: f64) -> Self {
        match self {
            Reveal::Visible => Reveal::Visible,
            Reveal::Hidden if intersecting && ratio >= REVEAL_THRESHOLD => Reveal::Visible,
            Reveal::Hidden => Reveal::Hidden,
        }
    }
}

/// An `IntersectionObserver` watching every not-yet-revealed element on the
/// current page. Dropping it disconnects the observer.
pub struct RevealObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn Fn(Array, IntersectionObserver)>,
    observed: u32,
}

impl RevealObserver {
    pub fn attach() -> Result<Self, DomError> {
        let callback = Closure::<dyn Fn(Array, IntersectionObserver)>::new(
            |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    if Reveal::of(&target).on_entry(entry.is_intersecting(), entry.intersection_ratio()) == Reveal::Visible {
                        if let Err(err) = target.class_list().add_1(VISIBLE_CLASS) {
                            warn!("Could not reveal element: {:?}", err);
                        }
                        // Revealed elements need no further reports.
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        let selector = format!(".{}:not(.{})", REVEAL_CLASS, VISIBLE_CLASS);
        let nodes = dom::document()?.query_selector_all(&selector)?;
        let mut observed = 0;
        for i in 0..nodes.length() {
            if let Some(element) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                observer.observe(&element);
                observed += 1;
            }
        }

        Ok(RevealObserver {
            observer,
            _callback: callback,
            observed,
        })
    }

    pub fn observed(&self) -> u32 {
        self.observed
    }
}

impl Drop for RevealObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Registers the current page's fade-in elements after every route change
/// and releases the previous page's observer.
#[hook]
pub fn use_reveal_on_scroll(route: &Route) {
    use_effect_with_deps(
        |route| {
            let observer = match RevealObserver::attach() {
                Ok(observer) => {
                    debug!("Observing {} reveal elements for {:?}", observer.observed(), route);
                    Some(observer)
                }
                Err(err) => {
                    warn!("Reveal animations disabled: {}", err);
                    None
                }
            };
            move || drop(observer)
        },
        route.clone(),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_until_enough_is_on_screen() {
        assert_eq!(Reveal::default(), Reveal::Hidden);
        assert_eq!(Reveal::Hidden.on_entry(false, 0.0), Reveal::Hidden);
        assert_eq!(Reveal::Hidden.on_entry(true, 0.15), Reveal::Visible);
        assert_eq!(Reveal::Hidden.on_entry(true, 0.8), Reveal::Visible);
    }

    #[test]
    fn slight_overlap_on_attach_stays_hidden() {
        // First report after observe(): intersecting, but only 2% visible.
        assert_eq!(Reveal::Hidden.on_entry(true, 0.02), Reveal::Hidden);
        assert_eq!(Reveal::Hidden.on_entry(true, 0.149), Reveal::Hidden);
    }

    #[test]
    fn never_reverts_after_reveal() {
        let reports = [(true, 0.05), (true, 0.3), (false, 0.0), (true, 0.01), (false, 0.0)];
        let mut state = Reveal::Hidden;
        let mut seen_visible = false;
        for (intersecting, ratio) in reports {
            state = state.on_entry(intersecting, ratio);
            if seen_visible {
                assert_eq!(state, Reveal::Visible);
            }
            seen_visible |= state == Reveal::Visible;
        }
        assert_eq!(state, Reveal::Visible);
    }
}
