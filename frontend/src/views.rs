use log::info;
use yew::prelude::*;

use crate::overlay::OverlayAction;
use crate::pages::checkout::Checkout;
use crate::pages::contact::Contact;
use crate::pages::home::Home;
use crate::pages::legal::{PrivacyPolicy, TermsOfService};
use crate::router::{Page, Route};

/// What a page view gets from the app shell.
#[derive(Clone, PartialEq)]
pub struct ViewContext {
    pub section: Option<AttrValue>,
    pub dispatch: Callback<OverlayAction>,
}

impl ViewContext {
    pub fn new(route: &Route, dispatch: Callback<OverlayAction>) -> Self {
        Self {
            section: route.section().map(|s| AttrValue::from(s.to_string())),
            dispatch,
        }
    }
}

pub type ViewFn = fn(&ViewContext) -> Html;

fn home(ctx: &ViewContext) -> Html {
    html! { <Home section={ctx.section.clone()} dispatch={ctx.dispatch.clone()} /> }
}

fn contact(_: &ViewContext) -> Html {
    html! { <Contact /> }
}

fn checkout(_: &ViewContext) -> Html {
    html! { <Checkout /> }
}

fn terms(_: &ViewContext) -> Html {
    html! { <TermsOfService /> }
}

fn privacy(_: &ViewContext) -> Html {
    html! { <PrivacyPolicy /> }
}

/// One entry per page. Adding a page means adding a row here.
pub const VIEWS: [(Page, ViewFn); 5] = [
    (Page::Home, home),
    (Page::Contact, contact),
    (Page::Checkout, checkout),
    (Page::Terms, terms),
    (Page::Privacy, privacy),
];

pub fn view_for(page: Page) -> Option<ViewFn> {
    VIEWS.iter().find(|(p, _)| *p == page).map(|(_, view)| *view)
}

pub fn render(route: &Route, ctx: &ViewContext) -> Html {
    let page = route.page();
    info!("Rendering {:?} page", page);
    match view_for(page) {
        Some(view) => view(ctx),
        None => home(ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CHECKOUT_PLAN_ID;
    use crate::pages::home::HomeProps;
    use yew::ServerRenderer;

    #[test]
    fn every_page_has_exactly_one_view() {
        for page in Page::ALL {
            let count = VIEWS.iter().filter(|(p, _)| *p == page).count();
            assert_eq!(count, 1, "{:?}", page);
        }
        assert_eq!(VIEWS.len(), Page::ALL.len());
    }

    #[test]
    fn context_carries_the_section_target() {
        let ctx = ViewContext::new(&Route::parse("#phases"), Callback::noop());
        assert_eq!(ctx.section.as_deref(), Some("phases"));

        let ctx = ViewContext::new(&Route::parse("#/contact"), Callback::noop());
        assert_eq!(ctx.section, None);
    }

    #[tokio::test]
    async fn home_renders_every_section() {
        let html = ServerRenderer::<Home>::with_props(|| HomeProps {
            section: None,
            dispatch: Callback::noop(),
        })
        .hydratable(false)
        .render()
        .await;

        for id in ["hero", "phases", "toolkits", "faq"] {
            assert!(html.contains(&format!("id=\"{}\"", id)), "missing section {}", id);
        }
    }

    #[tokio::test]
    async fn contact_renders_both_forms() {
        let html = ServerRenderer::<Contact>::new().hydratable(false).render().await;
        assert_eq!(html.matches("<form").count(), 2);
        assert!(html.contains("Partnerships &amp; Press") || html.contains("Partnerships & Press"));
    }

    #[tokio::test]
    async fn checkout_embed_and_fallback_share_the_plan() {
        let html = ServerRenderer::<Checkout>::new().hydratable(false).render().await;
        assert!(html.contains(&format!("data-whop-checkout-plan-id=\"{}\"", CHECKOUT_PLAN_ID)));
        assert!(html.contains("data-whop-checkout-theme=\"light\""));
        assert!(html.contains(&format!("https://whop.com/checkout/{}", CHECKOUT_PLAN_ID)));
        assert!(html.contains("Use the alternate checkout"));
        assert!(!html.contains("Private portal with guided daily rituals"));
    }

    #[tokio::test]
    async fn legal_pages_render() {
        let terms = ServerRenderer::<TermsOfService>::new().hydratable(false).render().await;
        assert!(terms.contains("Terms of Service"));

        let privacy = ServerRenderer::<PrivacyPolicy>::new().hydratable(false).render().await;
        assert!(privacy.contains("Privacy Policy"));
        assert!(privacy.contains("mailto:A3sthera@proton.me"));
    }
}
