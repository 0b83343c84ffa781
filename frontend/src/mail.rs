//! Contact forms never talk to a server. A submission becomes a `mailto:`
//! link that the browser hands to the visitor's mail client.

use urlencoding::encode;
use web_sys::FormData;

use crate::config::CONTACT_EMAIL;
use crate::dom::{self, DomError};

/// Named values of a submitted form.
pub trait FormFields {
    fn field(&self, name: &str) -> Option<String>;

    /// The raw value, or `""` when the field is missing.
    fn text(&self, name: &str) -> String {
        self.field(name).unwrap_or_default()
    }
}

impl FormFields for FormData {
    fn field(&self, name: &str) -> Option<String> {
        self.get(name).as_string()
    }
}

pub trait MailDraft {
    fn subject(&self) -> String;
    fn body(&self) -> String;

    fn mailto(&self, to: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            to,
            encode(&self.subject()),
            encode(&self.body())
        )
    }
}

/// A bare `mailto:` with only a subject, for "Email instead" links.
pub fn mailto_with_subject(to: &str, subject: &str) -> String {
    format!("mailto:{}?subject={}", to, encode(subject))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneralInquiry {
    pub name: String,
    pub email: String,
    pub topic: String,
    pub message: String,
}

impl GeneralInquiry {
    pub const DEFAULT_TOPIC: &'static str = "General question";
    pub const TOPICS: [&'static str; 5] =
        ["General question", "Access issue", "Billing", "Refund", "Other"];

    pub fn from_fields(fields: &impl FormFields) -> Self {
        let topic = fields
            .field("topic")
            .filter(|topic| !topic.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_TOPIC.to_string());
        GeneralInquiry {
            name: fields.text("name"),
            email: fields.text("email"),
            topic,
            message: fields.text("message"),
        }
    }
}

impl MailDraft for GeneralInquiry {
    fn subject(&self) -> String {
        format!("Contact form — {} — {}", self.topic, self.name)
    }

    fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nTopic: {}\n\nMessage:\n{}\n\n— Sent from AESTHERA Contact",
            self.name, self.email, self.topic, self.message
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PartnershipInquiry {
    pub name: String,
    pub email: String,
    pub company: String,
    pub link: String,
    pub timeline: String,
    pub message: String,
}

impl PartnershipInquiry {
    pub fn from_fields(fields: &impl FormFields) -> Self {
        PartnershipInquiry {
            name: fields.text("name"),
            email: fields.text("email"),
            company: fields.text("company"),
            link: fields.text("link"),
            timeline: fields.text("timeline"),
            message: fields.text("message"),
        }
    }
}

impl MailDraft for PartnershipInquiry {
    fn subject(&self) -> String {
        let company = if self.company.is_empty() { "Proposal" } else { self.company.as_str() };
        format!("Partnerships & Press — {} — {}", company, self.name)
    }

    fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nCompany/Organization: {}\nProposal / Media Kit: {}\nExpected Timeline: {}\n\nMessage:\n{}\n\n— Sent from AESTHERA Partnerships & Press",
            self.name, self.email, self.company, self.link, self.timeline, self.message
        )
    }
}

/// Points the window at the draft's `mailto:` link.
pub fn hand_off(draft: &impl MailDraft) -> Result<(), DomError> {
    dom::window()?.location().set_href(&draft.mailto(CONTACT_EMAIL))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    impl FormFields for HashMap<&str, &str> {
        fn field(&self, name: &str) -> Option<String> {
            self.get(name).map(|v| v.to_string())
        }
    }

    fn decode_param(url: &str, key: &str) -> String {
        let query = url.split_once('?').map(|(_, q)| q).unwrap_or_default();
        let raw = query
            .split('&')
            .find_map(|pair| pair.strip_prefix(&format!("{}=", key)))
            .unwrap_or_default();
        urlencoding::decode(raw).unwrap().into_owned()
    }

    fn jane() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("name", "Jane"),
            ("email", "jane@example.com"),
            ("topic", "Billing"),
            ("message", "Help"),
        ])
    }

    #[test]
    fn general_draft_embeds_every_field() {
        let inquiry = GeneralInquiry::from_fields(&jane());
        let subject = inquiry.subject();
        assert!(subject.contains("Billing"));
        assert!(subject.contains("Jane"));

        let body = inquiry.body();
        for value in ["Jane", "jane@example.com", "Billing", "Help"] {
            assert!(body.contains(value), "body is missing {}", value);
        }
    }

    #[test]
    fn mailto_percent_encodes_and_decodes_back() {
        let inquiry = GeneralInquiry::from_fields(&jane());
        let url = inquiry.mailto("team@example.com");

        assert!(url.starts_with("mailto:team@example.com?subject="));
        assert!(!url.contains(' '));
        assert!(!url.contains('\n'));
        assert_eq!(decode_param(&url, "subject"), inquiry.subject());
        assert_eq!(decode_param(&url, "body"), inquiry.body());
    }

    #[test]
    fn ampersands_in_fields_stay_inside_their_parameter() {
        let fields = HashMap::from([("name", "Ann & Co"), ("message", "a=b&c=d")]);
        let inquiry = GeneralInquiry::from_fields(&fields);
        let url = inquiry.mailto(CONTACT_EMAIL);
        assert_eq!(url.matches('&').count(), 1);
        assert!(decode_param(&url, "body").contains("a=b&c=d"));
    }

    #[test]
    fn missing_topic_falls_back_to_general_question() {
        let fields = HashMap::from([("name", "Jane"), ("topic", "")]);
        let inquiry = GeneralInquiry::from_fields(&fields);
        assert_eq!(inquiry.topic, GeneralInquiry::DEFAULT_TOPIC);
        assert_eq!(inquiry.email, "");
    }

    #[test]
    fn partnership_subject_uses_company_or_proposal() {
        let mut fields = HashMap::from([
            ("name", "Lee"),
            ("email", "lee@studio.example"),
            ("company", "Studio North"),
            ("link", "https://studio.example/kit"),
            ("timeline", "Q1 2026"),
            ("message", "Collab?"),
        ]);
        let inquiry = PartnershipInquiry::from_fields(&fields);
        assert_eq!(inquiry.subject(), "Partnerships & Press — Studio North — Lee");
        let body = inquiry.body();
        for value in ["Lee", "lee@studio.example", "Studio North", "https://studio.example/kit", "Q1 2026", "Collab?"] {
            assert!(body.contains(value), "body is missing {}", value);
        }

        fields.insert("company", "");
        let inquiry = PartnershipInquiry::from_fields(&fields);
        assert_eq!(inquiry.subject(), "Partnerships & Press — Proposal — Lee");
    }

    #[test]
    fn subject_only_links_encode_spaces() {
        assert_eq!(
            mailto_with_subject("A3sthera@proton.me", "Support Request"),
            "mailto:A3sthera@proton.me?subject=Support%20Request"
        );
    }
}
