// src/model.rs
//
// Candidate records as loaded from the source table.
// Every field is optional; a missing cell stays `None` all the way to the
// renderer, which decides how to show it.

/// Source column names. Matched trimmed and case-insensitively.
pub mod columns {
    pub const NAME: &str = "Name";
    pub const ROLE: &str = "Job Type";
    pub const CITY: &str = "City";
    pub const CONTACT: &str = "Contact";
    pub const EXPERIENCE: &str = "Experience";
    pub const RESUME: &str = "Resume";
    pub const RESUME_URL: &str = "resume_url";

    /// Columns that must all be present.
    pub const REQUIRED: &[&str] = &[NAME, ROLE, CITY, CONTACT, EXPERIENCE];
    /// At least one of these must be present.
    pub const RESUME_ANY: &[&str] = &[RESUME, RESUME_URL];
}

/// One row of the candidate table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Candidate {
    pub name: Option<String>,
    pub role: Option<String>,
    pub city: Option<String>,
    pub contact: Option<String>,
    pub experience: Option<String>,
    pub resume_link: Option<String>,
}

impl Candidate {
    pub fn name(&self) -> Option<&str> { self.name.as_deref() }
    pub fn role(&self) -> Option<&str> { self.role.as_deref() }
    pub fn city(&self) -> Option<&str> { self.city.as_deref() }
    pub fn contact(&self) -> Option<&str> { self.contact.as_deref() }
    pub fn experience(&self) -> Option<&str> { self.experience.as_deref() }
    pub fn resume_link(&self) -> Option<&str> { self.resume_link.as_deref() }
}

/// The immutable, session-wide candidate table. Source order is kept.
#[derive(Clone, Debug, Default)]
pub struct Dataset {
    rows: Vec<Candidate>,
}

impl Dataset {
    pub fn rows(&self) -> &[Candidate] { &self.rows }
    pub fn len(&self) -> usize { self.rows.len() }
    pub fn is_empty(&self) -> bool { self.rows.is_empty() }
    pub fn get(&self, ix: usize) -> Option<&Candidate> { self.rows.get(ix) }
}

impl FromIterator<Candidate> for Dataset {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        Self { rows: iter.into_iter().collect() }
    }
}
