//! Payment is handled entirely by Whop. This side only says which plan to
//! sell and how the widget should look.

use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlScriptElement};
use yew::prelude::*;

use crate::config::{CHECKOUT_LOADER_SRC, CHECKOUT_PLAN_ID, HOSTED_CHECKOUT_BASE};
use crate::dom::{self, DomError};

const LOADER_ID: &str = "whop-checkout-loader";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckoutPlan {
    pub plan_id: AttrValue,
    /// Widget theme name as Whop spells it (`light`, `dark`, `system`).
    pub theme: AttrValue,
    pub hide_price: bool,
}

impl Default for CheckoutPlan {
    fn default() -> Self {
        CheckoutPlan {
            plan_id: AttrValue::Static(CHECKOUT_PLAN_ID),
            theme: AttrValue::Static("light"),
            hide_price: false,
        }
    }
}

impl CheckoutPlan {
    /// Whop's hosted page for the same plan, used when the embed fails.
    pub fn fallback_url(&self) -> String {
        format!("{}{}", HOSTED_CHECKOUT_BASE, self.plan_id)
    }
}

/// The Whop loader `<script>`. It scans the page for embed placeholders when
/// it runs, so it is added on mount and removed again on unmount.
struct LoaderScript {
    element: Option<Element>,
}

impl LoaderScript {
    fn attach() -> Result<Self, DomError> {
        let document = dom::document()?;
        if document.get_element_by_id(LOADER_ID).is_some() {
            return Ok(LoaderScript { element: None });
        }

        let script: HtmlScriptElement = document.create_element("script")?.unchecked_into();
        script.set_id(LOADER_ID);
        script.set_src(CHECKOUT_LOADER_SRC);
        script.set_async(true);
        dom::body()?.append_child(&script)?;
        debug!("Checkout loader attached");

        Ok(LoaderScript { element: Some(script.into()) })
    }
}

impl Drop for LoaderScript {
    fn drop(&mut self) {
        if let Some(element) = self.element.take() {
            element.remove();
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct CheckoutEmbedProps {
    #[prop_or_default]
    pub plan: CheckoutPlan,
}

#[function_component(CheckoutEmbed)]
pub fn checkout_embed(props: &CheckoutEmbedProps) -> Html {
    use_effect_with_deps(
        |_| {
            let loader = LoaderScript::attach()
                .map_err(|err| warn!("Checkout loader unavailable: {}", err))
                .ok();
            move || drop(loader)
        },
        (),
    );

    let plan = &props.plan;
    html! {
        <div
            class="checkout-embed"
            data-whop-checkout-plan-id={plan.plan_id.clone()}
            data-whop-checkout-theme={plan.theme.clone()}
            data-whop-checkout-hide-price={plan.hide_price.to_string()}
        >
            <p class="checkout-loading">{"Loading checkout..."}</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_plan_matches_site_config() {
        let plan = CheckoutPlan::default();
        assert_eq!(plan.plan_id.as_str(), CHECKOUT_PLAN_ID);
        assert_eq!(plan.theme.as_str(), "light");
        assert!(!plan.hide_price);
    }

    #[test]
    fn fallback_points_at_the_same_plan() {
        let plan = CheckoutPlan::default();
        assert_eq!(plan.fallback_url(), "https://whop.com/checkout/plan_JNpVughNh9qVj");

        let other = CheckoutPlan {
            plan_id: AttrValue::from("plan_other"),
            ..CheckoutPlan::default()
        };
        assert!(other.fallback_url().ends_with("/plan_other"));
    }
}
