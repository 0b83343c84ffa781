use wasm_bindgen::JsValue;
use web_sys::MouseEvent;
use yew::prelude::*;

/// True when the click landed on the dimmed backdrop itself rather than on
/// anything inside the panel.
pub fn is_backdrop_click(e: &MouseEvent, backdrop: &NodeRef) -> bool {
    let target: Option<JsValue> = e.target().map(Into::into);
    let node: Option<JsValue> = backdrop.get().map(Into::into);
    target.is_some() && target == node
}

#[derive(Properties, PartialEq)]
pub struct OverlayProps {
    pub open: bool,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

fn backdrop_close(backdrop: &NodeRef, on_close: &Callback<()>) -> Callback<MouseEvent> {
    let backdrop = backdrop.clone();
    let on_close = on_close.clone();
    Callback::from(move |e: MouseEvent| {
        if is_backdrop_click(&e, &backdrop) {
            on_close.emit(());
        }
    })
}

#[function_component(Modal)]
pub fn modal(props: &OverlayProps) -> Html {
    let backdrop = use_node_ref();
    let onclick = backdrop_close(&backdrop, &props.on_close);
    let close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div
            ref={backdrop}
            class="modal"
            role="dialog"
            aria-modal="true"
            style={if props.open { "display: flex" } else { "display: none" }}
            {onclick}
        >
            <div class="panel" tabindex="0">
                { for props.children.iter() }
                <span class="close" onclick={close}>{"Close"}</span>
            </div>
            <style>
                {r#"
                .modal {
                    position: fixed;
                    inset: 0;
                    justify-content: center;
                    align-items: center;
                    z-index: 3000;
                    background: rgba(11, 11, 11, 0.55);
                    backdrop-filter: blur(6px);
                }
                .modal .panel {
                    background: var(--chalk);
                    border-radius: 18px;
                    max-width: 720px;
                    padding: 48px 40px;
                    color: var(--text-body);
                    box-shadow: 0 8px 32px rgba(0, 0, 0, 0.25);
                    overflow-y: auto;
                    max-height: 85vh;
                    animation: fadeInModal 0.5s var(--ease);
                }
                .modal .panel::-webkit-scrollbar {
                    width: 6px;
                }
                .modal .panel::-webkit-scrollbar-thumb {
                    background-color: rgba(191, 167, 107, 0.4);
                    border-radius: 3px;
                }
                .modal .panel h3 {
                    font-family: 'Playfair Display', serif;
                    margin-bottom: 12px;
                    color: var(--obsidian);
                }
                .modal .panel ul {
                    padding-left: 16px;
                }
                .modal .panel li {
                    margin: 8px 0;
                }
                .modal .close {
                    margin-top: 16px;
                    display: inline-block;
                    cursor: pointer;
                    color: var(--gold);
                }
                @keyframes fadeInModal {
                    from { opacity: 0; transform: translateY(20px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                "#}
            </style>
        </div>
    }
}

/// Half-height panel sliding up from the bottom edge.
#[function_component(Sheet)]
pub fn sheet(props: &OverlayProps) -> Html {
    let backdrop = use_node_ref();
    let onclick = backdrop_close(&backdrop, &props.on_close);
    let close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div ref={backdrop} class={classes!("sheet", props.open.then_some("open"))} {onclick}>
            <div class="panel" tabindex="0">
                <div class="handle" />
                <span class="close" onclick={close}>{"Close"}</span>
                { for props.children.iter() }
            </div>
            <style>
                {r#"
                .sheet {
                    position: fixed;
                    inset: 0;
                    display: flex;
                    align-items: flex-end;
                    background: rgba(0, 0, 0, .45);
                    z-index: 2500;
                    opacity: 0;
                    pointer-events: none;
                    transition: opacity .25s var(--ease);
                }
                .sheet.open {
                    opacity: 1;
                    pointer-events: auto;
                }
                .sheet .panel {
                    position: relative;
                    width: 100%;
                    height: 50vh;
                    max-height: 640px;
                    background: #fff;
                    border-top-left-radius: 16px;
                    border-top-right-radius: 16px;
                    border: 1px solid var(--gold-hairline);
                    padding: 24px 24px 32px;
                    box-shadow: 0 -20px 60px rgba(0, 0, 0, .25);
                    transform: translateY(100%);
                    transition: transform .35s var(--ease);
                    overflow: auto;
                    overscroll-behavior: contain;
                }
                .sheet.open .panel {
                    transform: translateY(0);
                }
                .sheet .handle {
                    width: 48px;
                    height: 4px;
                    background: #E5E5E5;
                    border-radius: 999px;
                    margin: 8px auto 16px;
                }
                .sheet .close {
                    position: absolute;
                    right: 20px;
                    top: 14px;
                    cursor: pointer;
                    color: var(--gold);
                }
                @media (prefers-reduced-motion: reduce) {
                    .sheet { transition: none; }
                    .sheet .panel { transition: none; transform: none; }
                }
                "#}
            </style>
        </div>
    }
}
