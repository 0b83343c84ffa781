use web_sys::MouseEvent;
use yew::prelude::*;
use yew::{Children, Properties};

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: AttrValue,
    children: Children,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", is_open.then_some("open"))}>
            <button class="faq-question" aria-expanded={is_open.to_string()} onclick={toggle}>
                <span class="question-text">{&props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            if *is_open {
                <div class="faq-answer">
                    { for props.children.iter() }
                </div>
            }
        </div>
    }
}

#[function_component(Faq)]
pub fn faq() -> Html {
    html! {
        <section id="faq" class="faq fade-in">
            <h2 class="section-title">{"Frequently Asked Questions"}</h2>

            <FaqItem question="What is Aesthera?">
                <p>{"Aesthera is more than a brand — it's a philosophy of self-evolution. It's the home of the 90-Day Elegant Lifestyle, a three-phase journey designed to help you rebuild your foundation, refine your presence, and radiate effortless confidence. Every element is crafted to bring your identity, style, and voice into harmony — so you don't just look elegant, you live it."}</p>
            </FaqItem>

            <FaqItem question="What exactly is included in this bundle?">
                <p>{"You get all three phases — Rebuild, Refine, and Radiate — structured across 90 days. Each phase includes worksheets, templates, and rituals designed to transform your identity, style, and presence."}</p>
            </FaqItem>

            <FaqItem question="Can I do the phases in a different order?">
                <p>{"We recommend following the sequence — Rebuild → Refine → Radiate — because each phase builds on the previous. However, you have lifetime access, so you can revisit phases or move at your own pace."}</p>
            </FaqItem>

            <FaqItem question="I don't have time for a full program. Will this fit my schedule?">
                <p>{"Yes. The Elegant Lifestyle uses micro habits, environmental cues, and weekly rhythm templates. You'll work in focused 15–30 minute blocks. The goal isn't to do more — it's to live with rhythm, structure, and calm momentum."}</p>
            </FaqItem>

            <FaqItem question="I've tried therapy and confidence courses. How is this different?">
                <p>{"Those focus on insight. This builds embodiment. Calm, Style, Communication, and Boundaries are trained together with scripts, trackers, and rituals. It's identity work that shows up in behavior — visible, measurable, lasting."}</p>
            </FaqItem>

            <FaqItem question="What if I struggle to stay consistent?">
                <p>{"The Sovereignty Audit, quick-win rituals, and weekly metrics keep progress visible. You'll see growth in numbers and reflection templates. Identity-based motivation replaces willpower — so the new version of you becomes automatic."}</p>
            </FaqItem>

            <style>
                {r#"
                .faq { background: var(--ivory); padding: 120px 80px; }
                .faq .section-title { font-size: 40px; margin-bottom: 60px; }
                .faq-item { border-top: 1px solid var(--gold-hairline); padding: 22px 0; }
                .faq-item:last-of-type { border-bottom: 1px solid var(--gold-hairline); }
                .faq-question {
                    width: 100%;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    background: none;
                    border: none;
                    text-align: left;
                    font-family: 'Inter', sans-serif;
                    font-size: 18px;
                    font-weight: 500;
                    color: var(--obsidian);
                    cursor: pointer;
                    transition: color .25s var(--ease);
                }
                .toggle-icon { font-size: 20px; color: var(--gold); }
                .faq-answer p {
                    margin: 14px 0 0;
                    line-height: 1.6;
                    font-size: 16px;
                    max-width: 900px;
                }
                @media (max-width: 700px) {
                    .faq { padding: 80px 24px; }
                    .faq .section-title { font-size: 32px; }
                    .faq-question { font-size: 17px; }
                    .faq-answer p { font-size: 15px; }
                }
                "#}
            </style>
        </section>
    }
}
