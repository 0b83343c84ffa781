use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;

use crate::components::faq::Faq;
use crate::components::nav::dispatch_on_click;
use crate::dom;
use crate::overlay::{InfoModal, OverlayAction};

fn scroll_to_section(id: &str) {
    match dom::document().map(|d| d.get_element_by_id(id)) {
        Ok(Some(element)) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        Ok(None) => debug!("No section with id {:?}", id),
        Err(err) => warn!("Could not scroll to section {:?}: {}", id, err),
    }
}

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    #[prop_or_default]
    pub section: Option<AttrValue>,
    pub dispatch: Callback<OverlayAction>,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    // Wait a tick so the sections exist before scrolling to one.
    use_effect_with_deps(
        |section| {
            let pending = section
                .clone()
                .map(|id| Timeout::new(0, move || scroll_to_section(&id)));
            move || drop(pending)
        },
        props.section.clone(),
    );

    let dispatch = &props.dispatch;
    let open_secure = dispatch_on_click(dispatch, OverlayAction::OpenSecure);
    let open_program = dispatch_on_click(dispatch, OverlayAction::OpenProgram);
    let more_info = |kind: InfoModal| dispatch_on_click(dispatch, OverlayAction::OpenInfo(kind));

    html! {
        <>
            <section id="hero" class="hero">
                <img
                    class="hero-video"
                    src="https://images.unsplash.com/photo-1674221525704-f4b2aa13df2c?crop=entropy&cs=tinysrgb&fit=max&fm=jpg&q=80&w=1080"
                    alt="Ballerina placeholder"
                />
                <video class="hero-video" src="/ballerina.mp4" autoplay=true loop=true muted=true playsinline=true></video>
                <div class="hero-overlay"></div>
                <div class="hero-text">
                    <h1>{"Discipline Made Visible"}</h1>
                    <p>{"In 90 days, your identity, style, and voice align to create effortless magnetism."}</p>
                    <a href="#" class="hero-secure" onclick={open_secure.clone()}>
                        {"Enter The 90-Day Elegant Lifestyle →"}
                    </a>
                    <br />
                    <a href="#" class="more-info" onclick={open_program}>{"More info →"}</a>
                </div>
            </section>

            <section id="statement" class="fade-in">
                <p>{"Imagine waking up 90 days from now — calm, radiant, and composed. Your mornings begin with rhythm instead of rush. Your posture, wardrobe, and voice align effortlessly with the woman you've become."}</p>
            </section>

            <section id="phases" aria-label="Three Phases of Transformation" class="fade-in">
                <h2 class="section-title">{"Three Phases of Becoming Her"}</h2>
                <div class="phase fade-in">
                    <img src="/assets/rebuild.png" alt="Rebuild Phase" />
                    <div class="text">
                        <h3>{"1–30 Days — Rebuild"}</h3>
                        <p>{"Reset your foundation with clarity, rituals, and self-respect."}</p>
                        <a href="#" class="more-info" onclick={more_info(InfoModal::Rebuild)}>{"More Info →"}</a>
                    </div>
                </div>
                <div class="phase refine fade-in">
                    <div class="text">
                        <h3>{"31–60 Days — Refine"}</h3>
                        <p>{"Define your signature aesthetic and master visual presence."}</p>
                        <a href="#" class="more-info" onclick={more_info(InfoModal::Refine)}>{"More Info →"}</a>
                    </div>
                    <img src="/assets/refine.png" alt="Refine Phase" />
                </div>
                <div class="phase fade-in">
                    <img src="/assets/radiate.png" alt="Radiate Phase" />
                    <div class="text">
                        <h3>{"61–90 Days — Radiate"}</h3>
                        <p>{"Command attention through authentic, composed presence."}</p>
                        <a href="#" class="more-info" onclick={more_info(InfoModal::Radiate)}>{"More Info →"}</a>
                    </div>
                </div>
            </section>

            <section class="bundle-offer fade-in">
                <h3>{"90-Day Bundle — €119"}</h3>
                <p>{"Edition of 777 • Lifetime access"}</p>
                <button class="secure-access-btn" onclick={open_secure.clone()}>{"Secure access →"}</button>
                <p class="trust-note">{"Secure checkout via Whop · Instant digital access · Edition of 777 only"}</p>
            </section>

            <section id="toolkits" class="fade-in">
                <h2 class="section-title">{"Premium Toolkits"}</h2>
                <div class="toolkit-grid">
                    { for TOOLKITS.iter().map(|toolkit| html! {
                        <div class="toolkit">
                            <span class="phase-tag">{toolkit.tag}</span>
                            <h4>{toolkit.name}</h4>
                            <p>{toolkit.summary}</p>
                            <p class="format">{toolkit.format}</p>
                        </div>
                    }) }
                </div>
                <div class="toolkit-cta">
                    <a href="#" class="cta" onclick={open_secure.clone()}>{"Unlock your toolkits →"}</a>
                </div>
                <p class="proof">{"Real women, real results. \"The Signature Style Planner made getting dressed effortless by week two.\" — Amira, Rotterdam"}</p>
            </section>

            <section id="process" aria-label="Method" class="fade-in">
                <h2 class="section-title">{"The Method"}</h2>
                <div class="process-grid">
                    <div class="step"><h4>{"01 — Choose"}</h4><p>{"Select The 90-Day Elegant Lifestyle."}</p></div>
                    <div class="step"><h4>{"02 — Secure Checkout"}</h4><p>{"Safe, seamless payment processing via Whop."}</p></div>
                    <div class="step"><h4>{"03 — Portal Access"}</h4><p>{"Instant access to your transformation materials."}</p></div>
                    <div class="step"><h4>{"04 — Daily Rituals"}</h4><p>{"Begin your journey with guided daily practices."}</p></div>
                </div>
            </section>

            <section id="bundle" aria-label="Investment" class="fade-in">
                <h2>{"90-Day Bundle — €119"}</h2>
                <p class="summary">{"Edition of 777 • Lifetime access"}</p>
                <a class="btn" href="#" onclick={open_secure.clone()}>{"Secure access →"}</a>
            </section>

            <section id="maxim-elegance" class="maxim-section fade-in" aria-label="Elegance maxim">
                <div class="maxim-card">
                    <p class="maxim-quote">{"Elegance begins when confidence becomes quiet."}</p>
                </div>
            </section>

            <section id="maxim-refinement" class="maxim-section fade-in" aria-label="Refinement maxim">
                <div class="maxim-card">
                    <p class="maxim-quote">{"Refinement is the art of knowing what to remove."}</p>
                </div>
            </section>

            <section id="program-offer" aria-label="Program Offer" class="fade-in">
                <h2 class="section-title">{"The 90-day Elegant Lifestyle — $119"}</h2>
                <p class="summary">{"Edition of 777 • Lifetime access"}</p>
                <p class="offer-note">{"Includes access to our private Aesthera women's circle — connect, share progress, and grow together."}</p>
                <a class="btn" href="#" onclick={open_secure}>{"Secure access →"}</a>
                <p class="trust-note">{"Secure checkout via Whop · Instant digital access · Edition of 777 only"}</p>
            </section>

            <Faq />

            <style>
                {r#"
                .hero { position: relative; width: 100%; height: 100vh; overflow: hidden; display: flex; align-items: center; justify-content: center; padding: 0; }
                .hero-video { position: absolute; top: 0; left: 0; width: 100%; height: 100%; object-fit: cover; z-index: -1; opacity: 0.9; filter: brightness(1.1) contrast(1.05); animation: fadeInVideo 2s ease-in forwards; }
                .hero-overlay { position: absolute; inset: 0; background: linear-gradient(to bottom, rgba(0,0,0,0.05), rgba(0,0,0,0.35)); z-index: 1; }
                .hero-text { position: relative; z-index: 2; text-align: center; color: rgba(255,255,255,0.9); text-shadow: 0 2px 12px rgba(0,0,0,0.35); max-width: 700px; padding: 0 20px; }
                @keyframes fadeInVideo { from { opacity: 0; } to { opacity: 1; } }
                .hero-text h1 { font-family: 'Playfair Display', serif; font-size: 54px; line-height: 1.1; margin-bottom: 16px; }
                .hero-text p { font-size: 18px; margin-bottom: 32px; }
                .hero-secure {
                    display: inline-block;
                    font-size: 17px;
                    color: #d7c4a3;
                    text-decoration: none;
                    border-bottom: 1px solid rgba(215,196,163,0.4);
                    padding-bottom: 2px;
                    margin-right: 16px;
                    transition: color 0.3s ease, border-color 0.3s ease;
                }
                .hero-secure:hover { color: #fff; border-color: rgba(255,255,255,0.6); }
                .cta { color: var(--gold); text-decoration: none; border-bottom: 1px solid var(--gold); padding-bottom: 4px; transition: color .3s var(--ease); }
                .cta:hover { color: var(--obsidian); }

                #statement { text-align: center; background: var(--chalk); }
                #statement p { max-width: 780px; margin: 0 auto; font-size: 18px; line-height: 1.7; color: var(--text-strong); }

                #phases { background: var(--ivory); }
                .phase { display: flex; align-items: center; justify-content: space-between; gap: 48px; margin-bottom: 120px; }
                .phase img { width: 55%; border-radius: 16px; filter: grayscale(1) contrast(1.1) brightness(0.95); }
                .phase .text { width: 45%; }
                .phase h3 { font-family: 'Playfair Display', serif; font-size: 28px; margin-bottom: 12px; }
                .phase p { margin-bottom: 16px; }
                .more-info { color: var(--gold); text-decoration: none; font-weight: 500; }

                .bundle-offer { text-align: center; padding: 80px 0 60px; background: var(--chalk); }
                .bundle-offer h3 { font-family: 'Playfair Display', serif; font-size: 26px; font-weight: 600; margin-bottom: 8px; }
                .bundle-offer p { font-size: 15px; color: rgba(0,0,0,0.7); margin-bottom: 20px; }
                .secure-access-btn {
                    border: 1px solid var(--gold);
                    background: transparent;
                    color: var(--text-body);
                    padding: 10px 18px;
                    border-radius: 10px;
                    cursor: pointer;
                    transition: background 0.3s ease;
                    font-family: inherit;
                    font-size: 15px;
                }
                .secure-access-btn:hover { background: var(--gold); color: var(--chalk); }
                .trust-note { font-size: 12px; color: rgba(11,11,11,0.55); text-align: center; margin-top: 8px; }

                #toolkits { background: var(--ivory); padding: 120px 80px; }
                .toolkit-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(300px, 1fr)); gap: 32px; margin-top: 48px; }
                .toolkit { background: var(--chalk); border: 1px solid var(--gold-hairline); border-radius: 16px; padding: 28px 24px; transition: transform 0.3s var(--ease); }
                .toolkit:hover { transform: translateY(-4px); }
                .phase-tag { display: block; font-size: 12px; color: var(--gold); margin-bottom: 8px; letter-spacing: 0.5px; }
                .toolkit h4 { font-family: 'Playfair Display', serif; font-size: 20px; margin-bottom: 6px; color: var(--obsidian); }
                .toolkit p { font-size: 15px; line-height: 1.5; }
                .toolkit .format { margin-top: 4px; font-size: 13px; color: rgba(11,11,11,0.55); }
                .toolkit-cta { text-align: center; margin-top: 48px; }
                .proof { text-align: center; margin-top: 32px; font-size: 14px; color: rgba(11,11,11,0.7); font-style: italic; }

                #process { background: var(--chalk); }
                .process-grid { display: grid; grid-template-columns: repeat(4, 1fr); gap: 24px; }
                .step { padding: 24px; border: 1px solid var(--gold-hairline); border-radius: 12px; background: #fff; }
                .step h4 { font-family: 'Playfair Display', serif; margin-bottom: 8px; color: var(--obsidian); }

                #bundle { text-align: center; background: var(--chalk); padding: 120px 24px; }
                #bundle h2 { font-family: 'Playfair Display', serif; font-size: 36px; color: var(--obsidian); }
                .summary { margin-top: 12px; color: var(--text-strong); }

                .maxim-section { background: var(--ivory); padding: 80px 80px; }
                .maxim-card {
                    position: relative;
                    max-width: 900px;
                    margin: 0 auto;
                    background: radial-gradient(120% 100% at 50% 0%, rgba(0,0,0,0.04) 0%, rgba(0,0,0,0) 60%), var(--chalk);
                    border: 1px solid var(--gold-hairline);
                    border-radius: 16px;
                    padding: 48px 40px;
                    text-align: center;
                }
                .maxim-quote {
                    font-family: 'Playfair Display', serif;
                    font-style: italic;
                    font-size: 26px;
                    line-height: 1.7;
                    color: var(--obsidian);
                    max-width: 720px;
                    margin: 0 auto;
                }

                #program-offer { text-align: center; }
                .offer-note { max-width: 720px; margin: 12px auto 20px; }

                @media (max-width: 1200px) { .process-grid { grid-template-columns: repeat(2, 1fr); } }
                @media (max-width: 900px) {
                    .phase { flex-direction: column; }
                    .phase img, .phase .text { width: 100%; }
                    .maxim-section { padding: 64px 24px; }
                    .maxim-quote { font-size: 22px; }
                }
                @media (max-width: 700px) {
                    .phase.refine img { order: 1; }
                    .phase.refine .text { order: 2; }
                    #toolkits { padding: 96px 24px; }
                }
                @media (max-width: 600px) {
                    .hero-text h1 { font-size: 36px; }
                    .process-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
        </>
    }
}

struct Toolkit {
    tag: &'static str,
    name: &'static str,
    summary: &'static str,
    format: &'static str,
}

const TOOLKITS: [Toolkit; 6] = [
    Toolkit {
        tag: "REBUILD · Unlocks Day 1",
        name: "Sovereign Compass Audit",
        summary: "Clarify 3 personal standards and 2 boundaries you'll run daily. Use on Day 1 to set your rules of engagement.",
        format: "Format · 15-minute guided worksheet",
    },
    Toolkit {
        tag: "REBUILD · Instant Access",
        name: "Foundation Toolkit",
        summary: "Turn mornings into a system with a 10-minute ritual and streak tracker so you never \"start over.\"",
        format: "Format · Ritual guide + printable tracker",
    },
    Toolkit {
        tag: "REFINE · Week 2",
        name: "Signature Style Planner",
        summary: "Build a repeatable capsule wardrobe in one afternoon and map a 10-outfit grid to remove decision fatigue.",
        format: "Format · Step-by-step planner + look grid",
    },
    Toolkit {
        tag: "REFINE · Day 15",
        name: "Velvet Voice Scripts",
        summary: "Speak with composed presence using 12 everyday scripts and the 5-minute pre-room routine.",
        format: "Format · Script cards + audio walkthroughs",
    },
    Toolkit {
        tag: "REFINE · Instant Access",
        name: "Communication Toolkit",
        summary: "Master tone, cadence, and boundaries in DMs, meetings, and dates with plug-and-play prompts.",
        format: "Format · Templates + quick-reference sheet",
    },
    Toolkit {
        tag: "RADIATE · Week 8",
        name: "Reflection & Metrics Tracker",
        summary: "Track wins in 3 minutes a day with Never Miss Twice and weekly calibration cards.",
        format: "Format · Mobile-friendly tracker + weekly review",
    },
];
