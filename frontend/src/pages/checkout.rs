use yew::prelude::*;

use crate::checkout::{CheckoutEmbed, CheckoutPlan};

const INCLUDED: [&str; 5] = [
    "Private portal with guided daily rituals",
    "REBUILD foundation toolkit",
    "REFINE style planner and Velvet Voice scripts",
    "RADIATE progress tracker",
    "Aesthera women's circle access",
];

#[derive(Properties, PartialEq, Default)]
pub struct CheckoutProps {
    #[prop_or_default]
    pub plan: CheckoutPlan,
}

#[function_component(Checkout)]
pub fn checkout(props: &CheckoutProps) -> Html {
    let show_details = use_state(|| false);
    let toggle_details = {
        let show_details = show_details.clone();
        Callback::from(move |_| show_details.set(!*show_details))
    };

    html! {
        <main class="checkout-page">
            <h1>{"Secure checkout"}</h1>
            <p class="subhead">
                {"Instant access to the 90-Day Elegant Lifestyle. After payment, you'll be redirected to your Welcome page with step-by-step instructions."}
            </p>

            <CheckoutEmbed plan={props.plan.clone()} />

            <p class="trust-line">
                {"🔒 Encrypted payments with major cards, Apple Pay, and Google Pay. 3D Secure enabled."}
            </p>

            <button class="cta">{"Confirm access"}</button>

            <p class="micro-proof">
                {"\"By week four I dressed on autopilot and spoke without second-guessing.\" — First name, city"}
            </p>

            // Always rendered, even when the embed loads fine.
            <p class="fallback">
                {"Having trouble? "}
                <a href={props.plan.fallback_url()} target="_blank" rel="noopener noreferrer">
                    {"Use the alternate checkout"}
                </a>
            </p>

            <button class="toggle" aria-expanded={show_details.to_string()} onclick={toggle_details}>
                { if *show_details { "Hide what's included ▲" } else { "What's included ▼" } }
            </button>

            if *show_details {
                <ul class="details">
                    { for INCLUDED.iter().map(|item| html! { <li>{*item}</li> }) }
                </ul>
            }

            <style>
                {r#"
                .checkout-page {
                    background: #f8f2eb;
                    min-height: 100vh;
                    padding: 120px 24px 60px;
                    text-align: center;
                    color: #171717;
                }
                .checkout-page h1 { font-family: 'Playfair Display', serif; margin-bottom: 16px; }
                .subhead { max-width: 600px; margin: 0 auto 24px; font-size: 16px; }
                .checkout-embed { max-width: 640px; margin: 0 auto; min-height: 320px; }
                .checkout-loading { padding: 48px 0; color: rgba(11,11,11,0.55); }
                .trust-line { margin-top: 12px; font-size: 14px; color: #333; }
                .cta {
                    margin-top: 20px;
                    padding: 14px 32px;
                    border: none;
                    border-radius: 8px;
                    background: #171717;
                    color: #fff;
                    font-size: 15px;
                    cursor: pointer;
                }
                .micro-proof { font-size: 13px; margin-top: 16px; font-style: italic; }
                .fallback { font-size: 13px; margin-top: 8px; }
                .fallback a { color: #8c7040; text-decoration: underline; }
                .toggle { background: none; border: none; color: #8c7040; cursor: pointer; margin-top: 20px; }
                .details { list-style: none; padding: 0; margin-top: 16px; font-size: 14px; line-height: 1.6; }
                "#}
            </style>
        </main>
    }
}
