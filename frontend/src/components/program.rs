use yew::prelude::*;

use crate::overlay::InfoModal;

/// Bullet points behind each phase's "More info" link.
pub fn phase_points(kind: InfoModal) -> Option<(&'static str, &'static [(&'static str, &'static str)])> {
    match kind {
        InfoModal::Rebuild => Some((
            "Rebuild — More Info",
            &[
                ("Mindset Mastery", " — Build confidence through clarity and daily rituals."),
                ("Self-Care Rituals", " — Nurture body, mind, and spirit with elegant discipline."),
                ("Value Clarity", " — Identify your authentic identity and core values."),
            ],
        )),
        InfoModal::Refine => Some((
            "Refine — More Info",
            &[
                (
                    "Master the fundamentals of aesthetic alignment —",
                    " Build a signature style that reflects your authentic identity.",
                ),
                (
                    "Visual Presence —",
                    " Curate your aesthetic across wardrobe, social presence, and environment.",
                ),
                ("Refinement Rituals —", " Daily practices that make elegance effortless."),
            ],
        )),
        InfoModal::Radiate => Some((
            "Radiate — More Info",
            &[
                ("Voice & Expression", " — Speak with authority and grace."),
                ("Energy Mastery", " — Command calm confidence and unshakeable presence."),
                (
                    "Magnetic Connection",
                    " — Build genuine connections through authentic self-expression.",
                ),
            ],
        )),
        InfoModal::Program => None,
    }
}

const INCLUDED: [&str; 7] = [
    "Three-Phase Roadmap — Rebuild · Refine · Radiate",
    "Shadow Alchemy & Emotional Regulation Toolkit",
    "Signature Style Capsule (PEARL Framework)",
    "The Velvet Voice — Scripts & Tonality Mastery",
    "High-Value Boundaries System",
    "Magnetism Without Chasing Presence Training",
    "Weekly Sovereign Scorecard & Printable Worksheets",
];

#[derive(Properties, PartialEq)]
pub struct InfoModalContentProps {
    pub kind: InfoModal,
}

#[function_component(InfoModalContent)]
pub fn info_modal_content(props: &InfoModalContentProps) -> Html {
    match phase_points(props.kind) {
        Some((title, points)) => html! {
            <>
                <h3>{title}</h3>
                <ul>
                    { for points.iter().map(|(lead, rest)| html! {
                        <li><strong>{*lead}</strong>{*rest}</li>
                    }) }
                </ul>
            </>
        },
        None => html! { <ProgramDetails /> },
    }
}

/// Long description of the 90-day program.
#[function_component(ProgramDetails)]
pub fn program_details() -> Html {
    html! {
        <>
            <h3 class="program-title">{"The 90-Day Elegant Lifestyle"}</h3>
            <p>
                {"Imagine waking up 90 days from now — calm, radiant, and composed."}<br />
                {"Your mornings begin with rhythm, not rush."}<br />
                {"Your posture, wardrobe, and voice move in quiet harmony with the woman you've become."}<br />
                {"This isn't coincidence — it's design."}
            </p>
            <p>
                {"The "}<strong>{"90-Day Elegant Lifestyle"}</strong>
                {" is a guided three-phase journey that refines how you think, move, and express yourself until elegance becomes effortless."}
            </p>

            <h4>{"Days 1–30 — Rebuild"}</h4>
            <p>{"Clear emotional noise and restore your foundation. Through Shadow Alchemy, boundary rituals, and reflective templates, you'll build self-trust and stability — the ground for graceful living."}</p>

            <h4>{"Days 31–60 — Refine"}</h4>
            <p>{"Define your aesthetic and elevate your presence. With the Signature Style Capsule and Velvet Voice frameworks, you'll align your visual, verbal, and energetic expression into one authentic whole."}</p>

            <h4>{"Days 61–90 — Radiate"}</h4>
            <p>{"Integrate everything until composure feels natural. Posture, breathwork, and magnetic connection training help you embody quiet confidence that commands respect without effort."}</p>

            <p>
                {"Each phase takes only "}<strong>{"20–40 minutes per day"}</strong>
                {", blending emotional regulation, identity design, and ritualized rhythm into visible, lasting transformation."}
            </p>
            <p><em>{"This isn't self-improvement — it's identity refinement through rhythm, beauty, and discipline."}</em></p>

            <div class="program-included">
                <h4>{"What's Included"}</h4>
                <ul>
                    { for INCLUDED.iter().map(|item| html! { <li>{*item}</li> }) }
                </ul>
            </div>

            <p class="program-result">
                <span class="lead">{"Result:"}</span>
                {" calm focus, timeless style, and magnetic confidence that doesn't chase — it attracts."}
            </p>
            <p class="program-tagline">{"Discipline made visible. Elegance made effortless."}</p>

            <style>
                {r#"
                .program-title {
                    font-family: 'Playfair Display', serif;
                    font-size: 34px;
                    line-height: 1.2;
                    color: var(--obsidian);
                    letter-spacing: .2px;
                    margin-bottom: 14px;
                    position: relative;
                }
                .program-title::after {
                    content: "";
                    display: block;
                    width: 72px;
                    height: 2px;
                    background: var(--gold);
                    margin-top: 10px;
                    opacity: .7;
                    border-radius: 1px;
                }
                .program-included h4 {
                    font-family: 'Playfair Display', serif;
                    font-size: 24px;
                    color: var(--obsidian);
                    margin: 0 0 12px 0;
                }
                .program-included ul {
                    list-style: none;
                    padding-left: 0;
                    margin: 0;
                }
                .program-included li {
                    display: flex;
                    gap: 10px;
                    align-items: flex-start;
                    margin: 8px 0;
                }
                .program-included li::before {
                    content: "•";
                    font-size: 18px;
                    line-height: 1;
                    color: var(--gold);
                    opacity: .85;
                    margin-top: 2px;
                }
                .program-result {
                    margin-top: 20px;
                    font-size: 20px;
                    color: var(--obsidian);
                }
                .program-result .lead {
                    font-weight: 600;
                    letter-spacing: .3px;
                }
                .program-tagline {
                    margin-top: 14px;
                    font-family: 'Playfair Display', serif;
                    font-style: italic;
                    color: var(--obsidian);
                    opacity: .9;
                }
                @media (max-width: 600px) {
                    .program-title { font-size: 26px; }
                    .program-included h4 { font-size: 20px; }
                    .program-result { font-size: 18px; }
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_phase_has_three_points() {
        for kind in [InfoModal::Rebuild, InfoModal::Refine, InfoModal::Radiate] {
            let (title, points) = phase_points(kind).expect("phase content");
            assert!(title.ends_with("More Info"));
            assert_eq!(points.len(), 3);
        }
    }

    #[test]
    fn program_uses_the_long_description() {
        assert!(phase_points(InfoModal::Program).is_none());
    }
}
