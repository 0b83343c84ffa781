use log::{info, warn};
use web_sys::MouseEvent;
use yew::prelude::*;

mod config;
mod dom;
mod router;
mod overlay;
mod scroll;
mod reveal;
mod mail;
mod checkout;
mod views;
mod components {
    pub mod modal;
    pub mod nav;
    pub mod program;
    pub mod faq;
}
mod pages {
    pub mod home;
    pub mod contact;
    pub mod checkout;
    pub mod legal;
}

use components::{
    modal::{Modal, Sheet},
    nav::{BuyBar, Footer, Nav},
    program::{InfoModalContent, ProgramDetails},
};
use overlay::{use_overlays, OverlayAction};
use reveal::use_reveal_on_scroll;
use router::{use_hash_route, use_scroll_top_on_page_links, Page};
use scroll::use_scroll_flags;
use views::ViewContext;

const GLOBAL_CSS: &str = r#"
@import url('https://fonts.googleapis.com/css2?family=Playfair+Display:wght@400;600;700&family=Inter:wght@300;400;500;600&display=swap');
:root {
    --obsidian: #0B0B0B;
    --ivory: #F7F3EE;
    --chalk: #FAF8F5;
    --gold: #BFA76B;
    --text-strong: rgba(11,11,11,0.85);
    --text-body: rgba(11,11,11,0.80);
    --gold-hairline: rgba(191,167,107,0.25);
    --ease: cubic-bezier(0.16, 1, 0.3, 1);
    --nav-h: 56px;
}
* { box-sizing: border-box; margin: 0; padding: 0; }
html, body { scroll-behavior: smooth; }
body {
    font-family: 'Inter', sans-serif;
    color: var(--text-body);
    background: var(--ivory);
    overflow-x: hidden;
    opacity: 0;
    animation: siteFade 0.8s ease forwards;
}
@keyframes siteFade { to { opacity: 1; } }
section { padding: 160px 80px; border-bottom: 1px solid var(--gold-hairline); }
h2.section-title {
    font-family: 'Playfair Display', serif;
    font-size: 42px;
    text-align: center;
    margin-bottom: 48px;
    color: var(--obsidian);
}
.btn {
    margin-top: 32px;
    background: transparent;
    border: 1px solid var(--gold);
    padding: 14px 32px;
    color: var(--obsidian);
    font-family: 'Inter', sans-serif;
    border-radius: 8px;
    cursor: pointer;
    transition: all .3s var(--ease);
    display: inline-block;
    text-decoration: none;
}
.btn:hover { background: var(--gold); color: var(--ivory); }
.fade-in { opacity: 0; transform: translateY(20px); transition: opacity 1s var(--ease), transform 1s var(--ease); }
.fade-in.visible { opacity: 1; transform: none; }
footer {
    background: var(--obsidian);
    color: var(--ivory);
    text-align: center;
    padding: 64px 24px;
    font-size: 14px;
    border-top: 1px solid var(--gold-hairline);
}
footer a { color: var(--ivory); text-decoration: underline; opacity: .9; }
footer a:hover { opacity: 1; }
.selection { max-width: 900px; margin: 0 auto; text-align: center; }
.selection .section-title { margin-top: 0; }
.selection .label { font-weight: 600; color: var(--obsidian); }
.selection h3 { font-family: 'Playfair Display', serif; margin: 8px 0 4px; color: var(--obsidian); }
@media (max-width: 1200px) { section { padding: 140px 60px; } }
@media (max-width: 600px) { section { padding: 96px 20px; } }
@media (prefers-reduced-motion: reduce) { .fade-in { transition: none; opacity: 1; transform: none; } }
"#;

#[function_component]
fn App() -> Html {
    let route = use_hash_route();
    let overlays = use_overlays();
    let flags = use_scroll_flags();
    use_reveal_on_scroll(&route);
    use_scroll_top_on_page_links();

    let dispatch = {
        let overlays = overlays.clone();
        Callback::from(move |action: OverlayAction| overlays.dispatch(action))
    };
    let ctx = ViewContext::new(&route, dispatch.clone());

    let close_info = dispatch.reform(|_: ()| OverlayAction::CloseInfo);
    let close_program = dispatch.reform(|_: ()| OverlayAction::CloseProgram);
    let close_secure = dispatch.reform(|_: ()| OverlayAction::CloseSecure);
    // Follows the link, so no prevent_default here.
    let enter_checkout = dispatch.reform(|_: MouseEvent| OverlayAction::CloseSecure);

    html! {
        <>
            <style>{GLOBAL_CSS}</style>
            <Nav scrolled={flags.nav_scrolled} menu_open={overlays.menu_open} dispatch={dispatch.clone()} />

            { views::render(&route, &ctx) }

            <Footer />

            <Modal open={overlays.info_modal.is_some()} on_close={close_info}>
                if let Some(kind) = overlays.info_modal {
                    <InfoModalContent {kind} />
                }
            </Modal>

            <Modal open={overlays.program_open} on_close={close_program}>
                <ProgramDetails />
            </Modal>

            <Sheet open={overlays.secure_open} on_close={close_secure}>
                <div class="selection">
                    <h2 class="section-title">{"Secure access →"}</h2>
                    <p class="label">{"Your Selection"}</p>
                    <h3>{"The 90-Day Elegant Lifestyle"}</h3>
                    <p class="summary">{"€119 · Edition of 777 · Lifetime Access"}</p>
                    <a class="btn" href={Page::Checkout.href()} onclick={enter_checkout}>
                        {"Enter The 90-Day Elegant Lifestyle →"}
                    </a>
                </div>
            </Sheet>

            <BuyBar visible={flags.buy_bar_visible} {dispatch} />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    if let Err(err) = console_log::init_with_level(config::log_level()) {
        warn!("Logger already initialized: {}", err);
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
