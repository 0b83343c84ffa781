use yew::prelude::*;

use crate::config::CONTACT_EMAIL;

fn contact_clause() -> Html {
    html! {
        <li>
            <strong>{"10. Contact"}</strong>
            <p>
                {"Aesthera"}<br />
                {"E-mail: "}<a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>
            </p>
        </li>
    }
}

#[derive(Properties, PartialEq)]
struct LegalPageProps {
    title: AttrValue,
    children: Children,
}

#[function_component(LegalPage)]
fn legal_page(props: &LegalPageProps) -> Html {
    html! {
        <section class="legal-page">
            <h2 class="section-title">{&props.title}</h2>
            <div class="legal">
                <p><em>{"Last updated: November 2, 2025"}</em></p>
                <ol>
                    { for props.children.iter() }
                    { contact_clause() }
                </ol>
            </div>
            <style>
                {r#"
                .legal-page { padding-top: 120px; }
                .legal { max-width: 900px; margin: 0 auto; line-height: 1.75; color: var(--text-strong); }
                .legal ol { padding-left: 18px; list-style: none; }
                .legal li { margin: 8px 0; }
                .legal ul { padding-left: 18px; }
                .legal a { color: var(--obsidian); }
                "#}
            </style>
        </section>
    }
}

#[function_component(TermsOfService)]
pub fn terms_of_service() -> Html {
    html! {
        <LegalPage title="Terms of Service">
            <li>
                <strong>{"1. Parties & Scope"}</strong>
                <p>{"These Terms govern the agreement between you (\"User\") and Aesthera, registered in the Netherlands, for the use of this website and any digital products offered."}</p>
            </li>
            <li>
                <strong>{"2. Services"}</strong>
                <p>{"Aesthera provides the 90-Day Elegant Lifestyle digital program, consisting of three phases: Rebuild, Refine, and Radiate."}</p>
            </li>
            <li>
                <strong>{"3. Agreement Formation"}</strong>
                <p>{"Your purchase or enrolment constitutes acceptance of these Terms. They take effect upon checkout completion."}</p>
            </li>
            <li>
                <strong>{"4. Access & Use"}</strong>
                <p>{"Lifetime access may be granted to materials subject to these Terms. Redistribution or resale is prohibited."}</p>
            </li>
            <li>
                <strong>{"5. Payment & Pricing"}</strong>
                <p>{"All prices are displayed in US dollars. Payment is processed via Whop, our secure checkout partner."}</p>
            </li>
            <li>
                <strong>{"6. Refunds & Cancellations"}</strong>
                <p>{"Dutch consumer law applies. For digital products, the 14-day right of withdrawal ends once you gain access to the digital material."}</p>
            </li>
            <li>
                <strong>{"7. Intellectual Property"}</strong>
                <p>{"All content, branding, and frameworks are the property of Aesthera. Personal use only."}</p>
            </li>
            <li>
                <strong>{"8. Liability"}</strong>
                <p>{"Aesthera's liability is limited to direct damages up to the fee paid, unless caused by wilful misconduct or gross negligence."}</p>
            </li>
            <li>
                <strong>{"9. Law & Jurisdiction"}</strong>
                <p>{"These Terms are governed by Dutch law. Disputes are submitted to the courts of the Netherlands."}</p>
            </li>
        </LegalPage>
    }
}

#[function_component(PrivacyPolicy)]
pub fn privacy_policy() -> Html {
    html! {
        <LegalPage title="Privacy Policy">
            <li>
                <strong>{"1. Controller"}</strong>
                <p>{"Aesthera, registered in the Netherlands, is responsible for processing your personal data."}</p>
            </li>
            <li>
                <strong>{"2. Data We Collect"}</strong>
                <ul>
                    <li>{"Name, e-mail, billing address (to process purchases)"}</li>
                    <li>{"Usage data (IP, device, site behavior)"}</li>
                    <li>{"Optional newsletter preferences"}</li>
                </ul>
            </li>
            <li>
                <strong>{"3. Purpose & Legal Basis"}</strong>
                <ul>
                    <li>{"To process your order (contract basis)"}</li>
                    <li>{"To send updates (with your consent)"}</li>
                    <li>{"To analyze site use (legitimate interest)"}</li>
                </ul>
            </li>
            <li>
                <strong>{"4. Retention"}</strong>
                <p>{"We keep your data as long as necessary for tax or service reasons. Billing data: 7 years (per Dutch law)."}</p>
            </li>
            <li>
                <strong>{"5. Sharing"}</strong>
                <p>{"We share data with Whop for payment processing and analytics providers under EU-compliant agreements."}</p>
            </li>
            <li>
                <strong>{"6. Rights"}</strong>
                <p>
                    {"You may request access, correction, deletion, restriction, or portability of your data at any time by contacting "}
                    <a href={format!("mailto:{}", CONTACT_EMAIL)}>{CONTACT_EMAIL}</a>{"."}
                </p>
            </li>
            <li>
                <strong>{"7. Cookies"}</strong>
                <p>{"We use essential cookies. Analytics or marketing cookies only with your consent."}</p>
            </li>
            <li>
                <strong>{"8. Security"}</strong>
                <p>{"We use encryption and access controls to protect your data."}</p>
            </li>
            <li>
                <strong>{"9. Complaints"}</strong>
                <p>{"If you believe your data rights are violated, you may contact the Autoriteit Persoonsgegevens (Dutch Data Protection Authority)."}</p>
            </li>
        </LegalPage>
    }
}
