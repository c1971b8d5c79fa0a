// src/config/state.rs
use super::options::AppOptions;

/// Session-scoped search inputs. One per session, owned by the front-end
/// and handed to every render pass.
///
/// Changing any filter sends the operator back to page 1. The page itself
/// is stored as requested; `runner::render_pass` clamps it and writes the
/// clamped value back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState {
    role: String,
    name: String,
    location: String,
    page: usize,
}

impl Default for SearchState {
    fn default() -> Self {
        Self { role: s!(), name: s!(), location: s!(), page: 1 }
    }
}

impl SearchState {
    pub fn new(role: &str, name: &str, location: &str) -> Self {
        Self { role: s!(role), name: s!(name), location: s!(location), page: 1 }
    }

    pub fn role(&self) -> &str { &self.role }
    pub fn name(&self) -> &str { &self.name }
    pub fn location(&self) -> &str { &self.location }
    pub fn page(&self) -> usize { self.page }

    /// Returns true if the value changed (and the page was reset).
    pub fn set_role(&mut self, v: &str) -> bool { Self::replace(&mut self.role, v, &mut self.page) }
    pub fn set_name(&mut self, v: &str) -> bool { Self::replace(&mut self.name, v, &mut self.page) }
    pub fn set_location(&mut self, v: &str) -> bool { Self::replace(&mut self.location, v, &mut self.page) }

    /// Store a page request as-is (1-based). Clamping happens in the pass.
    pub fn set_page(&mut self, page: usize) { self.page = page; }

    fn replace(slot: &mut String, v: &str, page: &mut usize) -> bool {
        if slot == v { return false; }
        *slot = s!(v);
        *page = 1;
        true
    }
}

/// Everything the GUI keeps between frames.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub search: SearchState,
}
