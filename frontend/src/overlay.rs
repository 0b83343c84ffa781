use std::rc::Rc;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::dom;

/// Content shown by the shared info modal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InfoModal {
    Rebuild,
    Refine,
    Radiate,
    Program,
}

/// Every overlay the site can show. The flags are independent: opening one
/// never closes another.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayState {
    pub info_modal: Option<InfoModal>,
    pub program_open: bool,
    pub secure_open: bool,
    pub menu_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayAction {
    OpenInfo(InfoModal),
    CloseInfo,
    OpenProgram,
    CloseProgram,
    OpenSecure,
    CloseSecure,
    OpenMenu,
    CloseMenu,
    /// Escape key. Only the navigation menu listens for it.
    Escape,
}

impl OverlayState {
    /// Returns the next state, or `None` when the action changes nothing.
    pub fn apply(&self, action: OverlayAction) -> Option<OverlayState> {
        let mut next = self.clone();
        match action {
            OverlayAction::OpenInfo(kind) => next.info_modal = Some(kind),
            OverlayAction::CloseInfo => next.info_modal = None,
            OverlayAction::OpenProgram => next.program_open = true,
            OverlayAction::CloseProgram => next.program_open = false,
            OverlayAction::OpenSecure => next.secure_open = true,
            OverlayAction::CloseSecure => next.secure_open = false,
            OverlayAction::OpenMenu => next.menu_open = true,
            OverlayAction::CloseMenu | OverlayAction::Escape => next.menu_open = false,
        }
        (next != *self).then_some(next)
    }
}

/// What the hamburger button does given whether the menu is open.
pub fn menu_button_action(menu_open: bool) -> OverlayAction {
    if menu_open {
        OverlayAction::CloseMenu
    } else {
        OverlayAction::OpenMenu
    }
}

impl Reducible for OverlayState {
    type Action = OverlayAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match self.apply(action) {
            Some(next) => {
                debug!(
                    "overlay {:?} -> {}",
                    action,
                    serde_json::to_string(&next).unwrap_or_default()
                );
                Rc::new(next)
            }
            // Same Rc means no re-render.
            None => self,
        }
    }
}

/// Somewhere to read and write an `overflow` style value.
pub trait OverflowStyle {
    fn overflow(&self) -> String;
    fn set_overflow(&self, value: &str);
}

/// The document body's inline `overflow`.
pub struct BodyOverflow;

impl OverflowStyle for BodyOverflow {
    fn overflow(&self) -> String {
        dom::body()
            .and_then(|body| Ok(body.style().get_property_value("overflow")?))
            .unwrap_or_else(|err| {
                warn!("Could not read body overflow: {}", err);
                String::new()
            })
    }

    fn set_overflow(&self, value: &str) {
        let result = dom::body().and_then(|body| Ok(body.style().set_property("overflow", value)?));
        if let Err(err) = result {
            warn!("Could not set body overflow: {}", err);
        }
    }
}

/// Suspends page scrolling while held. Dropping it puts back exactly the
/// value that was there when it was engaged.
pub struct ScrollLock<T: OverflowStyle> {
    target: T,
    previous: String,
}

impl<T: OverflowStyle> ScrollLock<T> {
    pub fn engage(target: T) -> Self {
        let previous = target.overflow();
        target.set_overflow("hidden");
        ScrollLock { target, previous }
    }
}

impl<T: OverflowStyle> Drop for ScrollLock<T> {
    fn drop(&mut self) {
        self.target.set_overflow(&self.previous);
    }
}

/// Owns the overlay state for the whole app and wires the window-level
/// side effects: Escape closes the menu, and the body stops scrolling while
/// the menu is open.
#[hook]
pub fn use_overlays() -> UseReducerHandle<OverlayState> {
    let overlays = use_reducer(OverlayState::default);

    {
        let overlays = overlays.clone();
        use_event_with_window("keydown", move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                overlays.dispatch(OverlayAction::Escape);
            }
        });
    }

    use_effect_with_deps(
        move |menu_open| {
            let lock = menu_open.then(|| ScrollLock::engage(BodyOverflow));
            move || drop(lock)
        },
        overlays.menu_open,
    );

    overlays
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Clone, Default)]
    struct FakeStyle(Rc<RefCell<String>>);

    impl OverflowStyle for FakeStyle {
        fn overflow(&self) -> String {
            self.0.borrow().clone()
        }

        fn set_overflow(&self, value: &str) {
            *self.0.borrow_mut() = value.to_string();
        }
    }

    fn reduce(state: Rc<OverlayState>, action: OverlayAction) -> Rc<OverlayState> {
        state.reduce(action)
    }

    #[test]
    fn starts_with_everything_closed() {
        assert_eq!(
            OverlayState::default(),
            OverlayState {
                info_modal: None,
                program_open: false,
                secure_open: false,
                menu_open: false,
            }
        );
    }

    #[test]
    fn opening_twice_matches_opening_once() {
        let actions = [
            OverlayAction::OpenInfo(InfoModal::Refine),
            OverlayAction::OpenProgram,
            OverlayAction::OpenSecure,
            OverlayAction::OpenMenu,
        ];
        for action in actions {
            let once = reduce(Rc::new(OverlayState::default()), action);
            let twice = reduce(once.clone(), action);
            assert_eq!(*once, *twice);
            assert!(Rc::ptr_eq(&once, &twice), "{:?} re-opened", action);
        }
    }

    #[test]
    fn overlays_do_not_close_each_other() {
        let state = [
            OverlayAction::OpenSecure,
            OverlayAction::OpenProgram,
            OverlayAction::OpenInfo(InfoModal::Radiate),
            OverlayAction::OpenMenu,
        ]
        .into_iter()
        .fold(Rc::new(OverlayState::default()), reduce);

        assert!(state.secure_open);
        assert!(state.program_open);
        assert!(state.menu_open);
        assert_eq!(state.info_modal, Some(InfoModal::Radiate));

        let state = reduce(state, OverlayAction::CloseProgram);
        assert!(!state.program_open);
        assert!(state.secure_open);
    }

    #[test]
    fn info_modal_switches_content_in_place() {
        let state = reduce(Rc::new(OverlayState::default()), OverlayAction::OpenInfo(InfoModal::Rebuild));
        let state = reduce(state, OverlayAction::OpenInfo(InfoModal::Program));
        assert_eq!(state.info_modal, Some(InfoModal::Program));
        let state = reduce(state, OverlayAction::CloseInfo);
        assert_eq!(state.info_modal, None);
    }

    #[test]
    fn escape_only_closes_the_menu() {
        let state = [OverlayAction::OpenMenu, OverlayAction::OpenSecure]
            .into_iter()
            .fold(Rc::new(OverlayState::default()), reduce);
        let state = reduce(state, OverlayAction::Escape);
        assert!(!state.menu_open);
        assert!(state.secure_open);

        let closed = reduce(state.clone(), OverlayAction::Escape);
        assert!(Rc::ptr_eq(&state, &closed));
    }

    #[test]
    fn menu_button_opens_then_closes() {
        let state = Rc::new(OverlayState::default());
        assert_eq!(menu_button_action(state.menu_open), OverlayAction::OpenMenu);
        let state = reduce(state.clone(), menu_button_action(state.menu_open));
        assert!(state.menu_open);
        assert_eq!(menu_button_action(state.menu_open), OverlayAction::CloseMenu);
        let state = reduce(state.clone(), menu_button_action(state.menu_open));
        assert!(!state.menu_open);
    }

    #[test]
    fn state_serializes_with_lowercase_modal_names() {
        let state = OverlayState {
            info_modal: Some(InfoModal::Rebuild),
            menu_open: true,
            ..OverlayState::default()
        };
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(
            json,
            r#"{"info_modal":"rebuild","program_open":false,"secure_open":false,"menu_open":true}"#
        );
        let back: OverlayState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn scroll_lock_restores_prior_overflow() {
        let style = FakeStyle::default();
        style.set_overflow("auto");

        let lock = ScrollLock::engage(style.clone());
        assert_eq!(style.overflow(), "hidden");
        drop(lock);
        assert_eq!(style.overflow(), "auto");
    }

    #[test]
    fn scroll_lock_survives_repeated_toggles() {
        let style = FakeStyle::default();
        style.set_overflow("scroll");

        for _ in 0..2 {
            let lock = ScrollLock::engage(style.clone());
            assert_eq!(style.overflow(), "hidden");
            drop(lock);
            assert_eq!(style.overflow(), "scroll");
        }
    }

    #[test]
    fn nested_scroll_locks_unwind_in_order() {
        let style = FakeStyle::default();

        let outer = ScrollLock::engage(style.clone());
        let inner = ScrollLock::engage(style.clone());
        drop(inner);
        assert_eq!(style.overflow(), "hidden");
        drop(outer);
        assert_eq!(style.overflow(), "");
    }
}
