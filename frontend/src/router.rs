use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;
use yew_router::Routable;

use crate::dom;

/// Top-level pages. Paths are matched against the fragment after `#`.
#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug, Hash)]
pub enum Page {
    #[at("/")]
    Home,
    #[at("/contact")]
    Contact,
    #[at("/checkout")]
    Checkout,
    #[at("/terms")]
    Terms,
    #[at("/privacy")]
    Privacy,
}

impl Page {
    pub const ALL: [Page; 5] = [Page::Home, Page::Contact, Page::Checkout, Page::Terms, Page::Privacy];

    pub fn href(self) -> String {
        format!("#{}", self.to_path())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Route {
    /// Home, optionally with an in-page section to scroll to.
    Home { section: Option<String> },
    Contact,
    Checkout,
    Terms,
    Privacy,
}

impl Default for Route {
    fn default() -> Self {
        Route::Home { section: None }
    }
}

impl Route {
    /// Parses a location fragment (`#/contact`, `#phases`, `""`).
    ///
    /// Never fails: anything that is not a known page becomes a home
    /// route targeting the lower-cased fragment as a section id.
    pub fn parse(fragment: &str) -> Self {
        let raw = fragment.strip_prefix('#').unwrap_or(fragment);
        let raw = raw.strip_prefix('/').unwrap_or(raw);
        if raw.is_empty() || raw == "/" {
            return Route::default();
        }

        // Exact match only: `contact/` is a section, not the contact page.
        let key = raw.to_lowercase();
        let path = format!("/{}", key);
        match Page::ALL.into_iter().find(|page| page.to_path() == path) {
            Some(Page::Contact) => Route::Contact,
            Some(Page::Checkout) => Route::Checkout,
            Some(Page::Terms) => Route::Terms,
            Some(Page::Privacy) => Route::Privacy,
            Some(Page::Home) | None => Route::Home { section: Some(key) },
        }
    }

    pub fn page(&self) -> Page {
        match self {
            Route::Home { .. } => Page::Home,
            Route::Contact => Page::Contact,
            Route::Checkout => Page::Checkout,
            Route::Terms => Page::Terms,
            Route::Privacy => Page::Privacy,
        }
    }

    pub fn section(&self) -> Option<&str> {
        match self {
            Route::Home { section } => section.as_deref(),
            _ => None,
        }
    }
}

/// Links of the form `#/page` switch pages; bare `#section` links do not.
pub fn is_page_link(href: &str) -> bool {
    href.starts_with("#/")
}

pub fn current_route() -> Route {
    match dom::location_hash() {
        Ok(hash) => Route::parse(&hash),
        Err(err) => {
            warn!("Could not read location hash: {}", err);
            Route::default()
        }
    }
}

/// Tracks the route derived from `location.hash`, re-parsed on every
/// `hashchange`. The window listener is removed when the caller unmounts.
#[hook]
pub fn use_hash_route() -> Route {
    let route = use_state(current_route);

    {
        let route = route.clone();
        use_event_with_window("hashchange", move |_: Event| {
            let next = current_route();
            debug!("hashchange -> {:?}", next);
            route.set(next);
        });
    }

    (*route).clone()
}

/// Scrolls back to the top whenever a page link (`#/...`) is clicked
/// anywhere in the document.
#[hook]
pub fn use_scroll_top_on_page_links() {
    use_effect_with_deps(
        move |_| {
            let destructor: Box<dyn FnOnce()> = match dom::document() {
                Ok(document) => {
                    let callback = Closure::<dyn Fn(MouseEvent)>::new(|e: MouseEvent| {
                        let href = e
                            .target()
                            .and_then(|t| t.dyn_into::<Element>().ok())
                            .and_then(|el| el.closest("a").ok().flatten())
                            .and_then(|a| a.get_attribute("href"));
                        if href.as_deref().map_or(false, is_page_link) {
                            if let Err(err) = dom::scroll_to_top() {
                                warn!("Could not scroll to top: {}", err);
                            }
                        }
                    });
                    if let Err(err) = document
                        .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
                    {
                        warn!("Could not attach click listener: {:?}", err);
                    }
                    Box::new(move || {
                        if let Err(err) = document.remove_event_listener_with_callback(
                            "click",
                            callback.as_ref().unchecked_ref(),
                        ) {
                            warn!("Could not detach click listener: {:?}", err);
                        }
                    })
                }
                Err(err) => {
                    warn!("Page link scrolling disabled: {}", err);
                    Box::new(|| ())
                }
            };
            move || destructor()
        },
        (),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_pages_parse_case_insensitively() {
        for (fragment, expected) in [
            ("#/contact", Route::Contact),
            ("#/CONTACT", Route::Contact),
            ("#/checkout", Route::Checkout),
            ("#/Checkout", Route::Checkout),
            ("#/terms", Route::Terms),
            ("#/TeRmS", Route::Terms),
            ("#/privacy", Route::Privacy),
            ("#/PRIVACY", Route::Privacy),
        ] {
            assert_eq!(Route::parse(fragment), expected, "fragment {}", fragment);
        }
    }

    #[test]
    fn leading_slash_is_optional() {
        assert_eq!(Route::parse("#contact"), Route::Contact);
        assert_eq!(Route::parse("contact"), Route::Contact);
    }

    #[test]
    fn empty_fragment_is_plain_home() {
        assert_eq!(Route::parse(""), Route::Home { section: None });
        assert_eq!(Route::parse("#"), Route::Home { section: None });
        assert_eq!(Route::parse("#/"), Route::Home { section: None });
        assert_eq!(Route::parse("#//"), Route::Home { section: None });
    }

    #[test]
    fn unknown_fragment_targets_a_section() {
        assert_eq!(
            Route::parse("#foo"),
            Route::Home { section: Some("foo".to_string()) }
        );
        assert_eq!(
            Route::parse("#Phases"),
            Route::Home { section: Some("phases".to_string()) }
        );
        assert_eq!(
            Route::parse("#/home"),
            Route::Home { section: Some("home".to_string()) }
        );
    }

    #[test]
    fn hrefs_round_trip_through_parse() {
        for page in Page::ALL {
            assert_eq!(Route::parse(&page.href()).page(), page);
        }
        assert_eq!(Route::parse("#faq").section(), Some("faq"));
    }

    #[test]
    fn trailing_slash_is_not_a_page() {
        assert_eq!(
            Route::parse("#/contact/"),
            Route::Home { section: Some("contact/".to_string()) }
        );
        assert_eq!(
            Route::parse("#/CONTACT/"),
            Route::Home { section: Some("contact/".to_string()) }
        );
        assert_eq!(
            Route::parse("#/privacy/extra"),
            Route::Home { section: Some("privacy/extra".to_string()) }
        );
    }

    #[test]
    fn only_slash_fragments_are_page_links() {
        assert!(is_page_link("#/contact"));
        assert!(is_page_link("#/"));
        assert!(!is_page_link("#faq"));
        assert!(!is_page_link("#"));
        assert!(!is_page_link("mailto:someone@example.com"));
    }
}
