// src/render.rs
//
// Row Renderer: turns a Candidate into display strings plus two
// independent action affordances. Nothing here fails; a bad cell only
// disables the affordance for its own row.

use crate::config::consts::{
    COUNTRY_CODE, COUNTRY_PREFIX, LOCAL_DIGITS, MISSING_LABEL, NO_RESUME_LABEL,
    NO_WHATSAPP_LABEL, WHATSAPP_BASE,
};
use crate::dispatch::Action;
use crate::model::Candidate;

/// Field labels, in display order.
pub const FIELD_LABELS: [&str; 5] = ["Name", "Role", "Location", "Mobile.No", "Experience"];

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResumeAction {
    Open { url: String },
    Unavailable,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ContactAction {
    WhatsApp { digits: String, url: String },
    Unavailable,
}

impl ResumeAction {
    pub fn for_link(link: Option<&str>) -> Self {
        match link {
            Some(url) if !url.trim().is_empty() => ResumeAction::Open { url: s!(url) },
            _ => ResumeAction::Unavailable,
        }
    }

    pub fn is_enabled(&self) -> bool { matches!(self, ResumeAction::Open { .. }) }

    pub fn action(&self) -> Option<Action> {
        match self {
            ResumeAction::Open { url } => Some(Action::OpenResume(url.clone())),
            ResumeAction::Unavailable => None,
        }
    }

    pub fn disabled_label() -> &'static str { NO_RESUME_LABEL }
}

impl ContactAction {
    pub fn for_contact(contact: Option<&str>) -> Self {
        match contact.and_then(normalize_contact) {
            Some(digits) => {
                let url = whatsapp_url(&digits);
                ContactAction::WhatsApp { digits, url }
            }
            None => ContactAction::Unavailable,
        }
    }

    pub fn is_enabled(&self) -> bool { matches!(self, ContactAction::WhatsApp { .. }) }

    pub fn action(&self) -> Option<Action> {
        match self {
            ContactAction::WhatsApp { url, .. } => Some(Action::OpenWhatsApp(url.clone())),
            ContactAction::Unavailable => None,
        }
    }

    pub fn disabled_label() -> &'static str { NO_WHATSAPP_LABEL }
}

/// Strip spaces, every "+91" and hyphens. `Some` only for exactly ten ASCII digits.
pub fn normalize_contact(raw: &str) -> Option<String> {
    let digits = raw
        .trim()
        .replace(' ', "")
        .replace(COUNTRY_PREFIX, "")
        .replace('-', "");

    let ok = digits.len() == LOCAL_DIGITS && digits.bytes().all(|b| b.is_ascii_digit());
    ok.then_some(digits)
}

/// WhatsApp web deep link for a ten-digit local number.
pub fn whatsapp_url(digits: &str) -> String {
    format!("{WHATSAPP_BASE}{COUNTRY_CODE}{digits}")
}

/// One rendered row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateCard {
    /// Row position in the source table; stable widget key
    pub source_ix: usize,
    pub name: String,
    pub role: String,
    pub location: String,
    pub mobile: String,
    pub experience: String,
    pub resume: ResumeAction,
    pub whatsapp: ContactAction,
}

impl CandidateCard {
    pub fn render(source_ix: usize, c: &Candidate) -> Self {
        let show = |v: Option<&str>| s!(v.unwrap_or(MISSING_LABEL));
        Self {
            source_ix,
            name: show(c.name()),
            role: show(c.role()),
            location: show(c.city()),
            mobile: show(c.contact()),
            experience: show(c.experience()),
            resume: ResumeAction::for_link(c.resume_link()),
            whatsapp: ContactAction::for_contact(c.contact()),
        }
    }

    /// The five display fields, aligned with `FIELD_LABELS`.
    pub fn fields(&self) -> [&str; 5] {
        [&self.name, &self.role, &self.location, &self.mobile, &self.experience]
    }
}
