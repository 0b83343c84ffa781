use gloo_console::error;
use web_sys::{FormData, HtmlFormElement};
use yew::prelude::*;

use crate::config::CONTACT_EMAIL;
use crate::mail::{self, mailto_with_subject, GeneralInquiry, MailDraft, PartnershipInquiry};
use crate::router::Page;

/// Builds a submit handler that turns the form into a mail draft.
fn compose_on_submit<D, F>(build: F) -> Callback<SubmitEvent>
where
    D: MailDraft,
    F: Fn(&FormData) -> D + 'static,
{
    Callback::from(move |e: SubmitEvent| {
        e.prevent_default();
        let Some(form) = e.target_dyn_into::<HtmlFormElement>() else {
            error!("Submit event without a form target");
            return;
        };
        let fields = match FormData::new_with_form(&form) {
            Ok(fields) => fields,
            Err(err) => {
                error!("Could not read form fields:", err);
                return;
            }
        };
        if let Err(err) = mail::hand_off(&build(&fields)) {
            error!(format!("Could not open mail client: {}", err));
        }
    })
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let on_general = compose_on_submit(|fields: &FormData| GeneralInquiry::from_fields(fields));
    let on_partnership = compose_on_submit(|fields: &FormData| PartnershipInquiry::from_fields(fields));
    let privacy = Page::Privacy.href();

    html! {
        <section class="contact-page">
            <div class="contact-wrap">
                <div class="card">
                    <h2 class="section-title">{"Contact us"}</h2>
                    <p class="help">{"Most questions are answered in the FAQ and inside your portal. If you still need help, send us a message."}</p>
                    <form onsubmit={on_general}>
                        <div class="form-grid">
                            <div>
                                <label for="name">{"Your Name"}</label>
                                <input id="name" name="name" class="input" placeholder="Your name" required=true />
                            </div>
                            <div>
                                <label for="email">{"Email"}</label>
                                <input id="email" name="email" class="input" type="email" placeholder="you@email.com" required=true />
                            </div>
                        </div>
                        <div class="form-row">
                            <label for="topic">{"Topic"}</label>
                            <select id="topic" name="topic" class="select">
                                { for GeneralInquiry::TOPICS.iter().map(|topic| html! {
                                    <option selected={*topic == GeneralInquiry::DEFAULT_TOPIC}>{*topic}</option>
                                }) }
                            </select>
                        </div>
                        <div class="form-row">
                            <label for="message">{"Message"}</label>
                            <textarea id="message" name="message" class="textarea" placeholder="How can we help?" required=true />
                        </div>
                        <div class="form-row consent">
                            <input id="agree" type="checkbox" class="checkbox" required=true />
                            <label for="agree" class="help">{"I agree to the "}<a href={privacy.clone()}>{"privacy policy"}</a>{"."}</label>
                        </div>
                        <div class="actions">
                            <button type="submit" class="btn">{"Send message"}</button>
                            <a class="btn" href={mailto_with_subject(CONTACT_EMAIL, "Support Request")}>{"Email instead"}</a>
                        </div>
                    </form>
                </div>

                <div class="card">
                    <h2 class="section-title">{"Partnerships & Press"}</h2>
                    <p class="help">{"We say yes to aligned values, quality production, and audience fit."}</p>
                    <form onsubmit={on_partnership}>
                        <div class="form-grid">
                            <div>
                                <label for="pr-name">{"Your Name"}</label>
                                <input id="pr-name" name="name" class="input" placeholder="Your name" required=true />
                            </div>
                            <div>
                                <label for="pr-email">{"Email"}</label>
                                <input id="pr-email" name="email" class="input" type="email" placeholder="you@email.com" required=true />
                            </div>
                        </div>
                        <div class="form-grid">
                            <div>
                                <label for="pr-company">{"Company/Organization"}</label>
                                <input id="pr-company" name="company" class="input" placeholder="Your company or organization" />
                            </div>
                            <div>
                                <label for="pr-link">{"Link to Proposal / Media Kit"}</label>
                                <input id="pr-link" name="link" class="input" type="url" placeholder="https://…" />
                            </div>
                        </div>
                        <div class="form-row">
                            <label for="pr-eta">{"Expected Timeline"}</label>
                            <input id="pr-eta" name="timeline" class="input" placeholder="e.g., Q1 2025" />
                        </div>
                        <div class="form-row">
                            <label for="pr-message">{"Message"}</label>
                            <textarea id="pr-message" name="message" class="textarea" placeholder="Tell us about your proposal…" required=true />
                        </div>
                        <div class="form-row consent">
                            <input id="pr-agree" type="checkbox" class="checkbox" required=true />
                            <label for="pr-agree" class="help">{"I agree to the "}<a href={privacy}>{"privacy policy"}</a>{"."}</label>
                        </div>
                        <div class="actions">
                            <button type="submit" class="btn">{"Send inquiry"}</button>
                            <a class="btn" href={mailto_with_subject(CONTACT_EMAIL, "Partnership or Press")}>{"Email instead"}</a>
                        </div>
                    </form>
                </div>
            </div>
            <style>
                {r#"
                .contact-page { padding-top: 120px; }
                .contact-wrap { max-width: 900px; margin: 0 auto; }
                .card { background: var(--chalk); border: 1px solid var(--gold-hairline); border-radius: 16px; padding: 24px; margin-bottom: 28px; }
                .card .section-title { text-align: left; margin-bottom: 8px; }
                .help { font-size: 14px; opacity: .85; margin-bottom: 14px; }
                .form-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 12px; }
                .input, .textarea, .select, .checkbox {
                    width: 100%;
                    padding: 12px 14px;
                    border: 1px solid var(--gold-hairline);
                    border-radius: 10px;
                    background: #fff;
                    color: var(--obsidian);
                    font: inherit;
                }
                .textarea { min-height: 140px; resize: vertical; }
                .checkbox { width: auto; }
                .form-row { margin-top: 12px; }
                .form-row.consent { display: flex; align-items: center; gap: 8px; }
                .actions { margin-top: 16px; display: flex; gap: 12px; }
                @media (max-width: 800px) { .form-grid { grid-template-columns: 1fr; } }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_instead_links_carry_fixed_subjects() {
        assert_eq!(
            mailto_with_subject(CONTACT_EMAIL, "Partnership or Press"),
            "mailto:A3sthera@proton.me?subject=Partnership%20or%20Press"
        );
    }
}
