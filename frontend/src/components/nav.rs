use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::modal::is_backdrop_click;
use crate::overlay::{menu_button_action, OverlayAction};
use crate::router::Page;

/// Click handler that dispatches `action` instead of following the link.
pub fn dispatch_on_click(dispatch: &Callback<OverlayAction>, action: OverlayAction) -> Callback<MouseEvent> {
    dispatch.reform(move |e: MouseEvent| {
        e.prevent_default();
        action
    })
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub scrolled: bool,
    pub menu_open: bool,
    pub dispatch: Callback<OverlayAction>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { scrolled, menu_open, dispatch } = props;
    let open_secure = dispatch_on_click(dispatch, OverlayAction::OpenSecure);
    let menu_action = menu_button_action(*menu_open);
    let toggle_menu = dispatch.reform(move |_: MouseEvent| menu_action);

    html! {
        <>
            <nav class={classes!("nav", scrolled.then_some("scrolled"))}>
                <div class="nav-left">
                    <a href={Page::Home.href()}>{"Home"}</a>
                </div>
                <div class="nav-center">
                    <a class="brand" href={Page::Home.href()}>{"AESTHERA"}</a>
                </div>
                <div class="nav-right">
                    <a href={Page::Contact.href()} class="nav-contact">{"Contact us"}</a>
                    <a href="#" class="nav-secure" onclick={open_secure}>{"Secure access →"}</a>
                    <button
                        class="hamburger"
                        aria-label="Open menu"
                        aria-controls="nav-menu"
                        aria-expanded={menu_open.to_string()}
                        onclick={toggle_menu}
                    >
                        {"☰"}
                    </button>
                </div>
            </nav>
            <NavMenu open={*menu_open} dispatch={dispatch.clone()} />
            <style>
                {r#"
                .nav {
                    position: fixed;
                    top: 0;
                    left: 0;
                    width: 100%;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 16px;
                    padding: 18px 28px;
                    min-height: var(--nav-h);
                    background: rgba(247, 243, 238, 0.85);
                    backdrop-filter: blur(8px);
                    border-bottom: 1px solid var(--gold-hairline);
                    z-index: 1000;
                    transition: background 0.4s ease;
                }
                .nav.scrolled {
                    background: rgba(248, 242, 235, 0.85);
                }
                .nav-left, .nav-center, .nav-right { flex: 1; display: flex; align-items: center; }
                .nav-left { justify-content: flex-start; }
                .nav-center { justify-content: center; }
                .nav-right { justify-content: flex-end; gap: 18px; }
                .brand {
                    font-family: 'Playfair Display', serif;
                    font-size: 22px;
                    letter-spacing: 0.18em;
                    color: var(--obsidian);
                    text-decoration: none;
                    cursor: pointer;
                }
                .brand:focus-visible {
                    outline: 2px solid var(--gold);
                    outline-offset: 2px;
                }
                .nav a {
                    color: var(--obsidian);
                    text-decoration: none;
                    font-weight: 500;
                }
                .nav-secure {
                    border: 1px solid var(--gold);
                    border-radius: 12px;
                    padding: 8px 14px;
                    background: transparent;
                }
                .nav-secure:hover { background: var(--gold); color: var(--ivory); }
                .hamburger {
                    display: none;
                    border: 1px solid var(--gold);
                    background: transparent;
                    border-radius: 10px;
                    padding: 6px 10px;
                    font-size: 18px;
                    cursor: pointer;
                }
                .nav-contact { display: inline-block; }
                @media (max-width: 700px) {
                    .nav-contact { display: none; }
                    .nav { padding: 12px 14px; }
                    .nav-left { display: none; }
                    .nav-center { justify-content: flex-start; }
                    .brand { font-size: 20px; }
                    .nav-right { gap: 10px; flex-wrap: nowrap; }
                    .nav-right a { font-size: 14px; }
                    .nav-secure { padding: 6px 10px; border-radius: 10px; }
                    .hamburger { display: inline-block; }
                }
                "#}
            </style>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct NavMenuProps {
    pub open: bool,
    pub dispatch: Callback<OverlayAction>,
}

/// Full-screen navigation card for small screens.
#[function_component(NavMenu)]
pub fn nav_menu(props: &NavMenuProps) -> Html {
    let backdrop = use_node_ref();
    let on_backdrop = {
        let backdrop = backdrop.clone();
        let dispatch = props.dispatch.clone();
        Callback::from(move |e: MouseEvent| {
            if is_backdrop_click(&e, &backdrop) {
                dispatch.emit(OverlayAction::CloseMenu);
            }
        })
    };
    // Links keep their default action so the hash still changes.
    let close = props.dispatch.reform(|_: MouseEvent| OverlayAction::CloseMenu);

    html! {
        <div
            ref={backdrop}
            id="nav-menu"
            class={classes!("nav-menu", props.open.then_some("open"))}
            role="dialog"
            aria-modal="true"
            aria-label="Navigation"
            onclick={on_backdrop}
        >
            <div class="menu-card" tabindex="0">
                <div class="menu-head">
                    <span class="menu-label">{"NAVIGATION"}</span>
                    <button class="menu-close" aria-label="Close menu" onclick={close.clone()}>{"×"}</button>
                </div>
                <nav class="menu-list">
                    <a href={Page::Home.href()} onclick={close.clone()}>{"Home"}</a>
                    <a href={Page::Contact.href()} onclick={close}>{"Contact us"}</a>
                </nav>
            </div>
            <style>
                {r#"
                .nav-menu {
                    position: fixed;
                    inset: 0;
                    display: none;
                    z-index: 3000;
                    background: rgba(0, 0, 0, .45);
                    backdrop-filter: blur(2px);
                }
                .nav-menu.open { display: block; }
                .menu-card {
                    width: min(520px, 92vw);
                    margin: 18vh auto 0;
                    background: var(--ivory);
                    border: 1px solid var(--gold-hairline);
                    border-radius: 20px;
                    box-shadow: 0 24px 80px rgba(0, 0, 0, .28);
                    padding: 18px 18px 22px;
                }
                .menu-head { display: flex; align-items: center; justify-content: space-between; padding: 4px 4px 10px; }
                .menu-label { font-size: 12px; letter-spacing: .12em; text-transform: uppercase; color: var(--gold); font-weight: 600; }
                .menu-close { border: none; background: transparent; cursor: pointer; font-size: 20px; color: var(--obsidian); }
                .menu-list { display: flex; flex-direction: column; gap: 18px; align-items: center; padding: 10px 6px 6px; }
                .menu-list a { text-decoration: none; color: var(--obsidian); font-family: 'Playfair Display', serif; font-size: 20px; }
                @media (max-width: 700px) {
                    .menu-card { width: min(420px, 92vw); }
                    .menu-list a { font-size: 18px; }
                }
                "#}
            </style>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="fade-in">
            <p>
                {"© 2025 AESTHERA · "}
                <a href={Page::Privacy.href()}>{"Privacy"}</a>
                {" · "}
                <a href={Page::Terms.href()}>{"Terms"}</a>
            </p>
        </footer>
    }
}

#[derive(Properties, PartialEq)]
pub struct BuyBarProps {
    pub visible: bool,
    pub dispatch: Callback<OverlayAction>,
}

/// Sticky purchase strip along the bottom edge.
#[function_component(BuyBar)]
pub fn buy_bar(props: &BuyBarProps) -> Html {
    let open_secure = dispatch_on_click(&props.dispatch, OverlayAction::OpenSecure);

    html! {
        <div class={classes!("buy-bar", props.visible.then_some("visible"))}>
            <span class="buy-title">{"The 90-Day Elegant Lifestyle"}</span>
            <span class="buy-price">{"— $119"}</span>
            <a href="#" class="buy-btn" onclick={open_secure}>{"Secure access →"}</a>
            <style>
                {r#"
                .buy-bar {
                    position: fixed;
                    bottom: 0;
                    left: 0;
                    width: 100%;
                    background: var(--ivory);
                    border-top: 1px solid var(--gold-hairline);
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 8px;
                    font-size: 15px;
                    color: var(--obsidian);
                    padding: 10px 14px;
                    opacity: 0;
                    transform: translateY(100%);
                    transition: all 0.6s ease;
                    z-index: 2000;
                }
                .buy-bar.visible {
                    opacity: 1;
                    transform: translateY(0);
                }
                .buy-bar .buy-btn {
                    color: var(--gold);
                    font-weight: 500;
                    text-decoration: underline;
                    cursor: pointer;
                }
                .buy-bar .buy-btn:hover {
                    text-decoration: none;
                    opacity: 0.8;
                }
                @media (max-width: 700px) {
                    .buy-bar {
                        font-size: 14px;
                        padding: 8px 10px;
                        flex-wrap: wrap;
                        text-align: center;
                    }
                }
                "#}
            </style>
        </div>
    }
}
