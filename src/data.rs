// src/data.rs
//
// Filter Pipeline.
//
// - SearchQuery: the three substring filters (role, name, location).
// - FilteredView: zero-copy projection of the Dataset, a list of row
//                 indexes in source order, rebuilt on every pass.
//
// The filters are a conjunction of independent, case-insensitive substring
// tests. An empty role pattern keeps every row; name/location only apply
// when non-empty. A missing cell never matches a non-empty pattern.

use crate::config::state::SearchState;
use crate::model::{Candidate, Dataset};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchQuery<'a> {
    pub role: &'a str,
    pub name: &'a str,
    pub location: &'a str,
}

impl<'a> SearchQuery<'a> {
    pub fn new(role: &'a str, name: &'a str, location: &'a str) -> Self {
        Self { role, name, location }
    }

    pub fn from_state(st: &'a SearchState) -> Self {
        Self::new(st.role(), st.name(), st.location())
    }

    /// Lowercased patterns, built once per pass.
    fn compile(&self) -> Compiled {
        let opt = |s: &str| if s.is_empty() { None } else { Some(s.to_lowercase()) };
        Compiled {
            role: opt(self.role),
            name: opt(self.name),
            location: opt(self.location),
        }
    }

    /// Does this candidate pass all three filters?
    pub fn matches(&self, c: &Candidate) -> bool {
        self.compile().matches(c)
    }
}

struct Compiled {
    role: Option<String>,
    name: Option<String>,
    location: Option<String>,
}

impl Compiled {
    fn matches(&self, c: &Candidate) -> bool {
        contains(c.role(), self.role.as_deref())
            && contains(c.name(), self.name.as_deref())
            && contains(c.city(), self.location.as_deref())
    }
}

/// Case-insensitive substring test. No pattern → pass; no value → fail.
fn contains(value: Option<&str>, pattern: Option<&str>) -> bool {
    match (pattern, value) {
        (None, _) => true,
        (Some(_), None) => false,
        (Some(p), Some(v)) => v.to_lowercase().contains(p),
    }
}

/// Filtered view for display. Holds row indexes into the Dataset.
#[derive(Clone, Debug)]
pub struct FilteredView<'a> {
    /// Positions of kept rows in the dataset, ascending
    pub row_ix: Vec<usize>,
    raw: &'a Dataset,
}

impl<'a> FilteredView<'a> {
    /// Run the pipeline over the full table.
    pub fn from_raw(raw: &'a Dataset, query: SearchQuery<'_>) -> Self {
        let compiled = query.compile();
        let row_ix = raw
            .rows()
            .iter()
            .enumerate()
            .filter(|(_, c)| compiled.matches(c))
            .map(|(i, _)| i)
            .collect();
        Self { row_ix, raw }
    }

    pub fn len(&self) -> usize { self.row_ix.len() }
    pub fn is_empty(&self) -> bool { self.row_ix.is_empty() }

    /// (source index, row) pairs for a projected range.
    pub fn slice(&self, range: std::ops::Range<usize>) -> Vec<(usize, &'a Candidate)> {
        let raw = self.raw;
        self.row_ix
            .get(range)
            .unwrap_or_default()
            .iter()
            .filter_map(|&ix| raw.get(ix).map(|c| (ix, c)))
            .collect()
    }

    /// Iterate kept rows in source order.
    pub fn iter(&self) -> impl Iterator<Item = &'a Candidate> + '_ {
        let raw = self.raw;
        self.row_ix.iter().filter_map(move |&ix| raw.get(ix))
    }
}
