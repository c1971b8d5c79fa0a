// src/runner.rs
//
// One render pass: Filter → Paginate → Render, recomputed from the cached
// table and the session state on every interaction.

use crate::{
    config::state::SearchState,
    data::{FilteredView, SearchQuery},
    model::Dataset,
    paginate::paginate,
    render::CandidateCard,
};

/// Everything a front-end needs to draw one screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResultsPage {
    /// Role filter as typed, for the results header
    pub role: String,
    /// Size of the filtered view
    pub total_results: usize,
    pub page: usize,
    pub total_pages: usize,
    /// The requested page was out of range and got pulled in
    pub clamped: bool,
    pub cards: Vec<CandidateCard>,
}

impl ResultsPage {
    pub fn heading(&self) -> String {
        format!("Showing {} result(s) for role: {}", self.total_results, self.role)
    }

    pub fn footer(&self) -> String {
        format!("Page {} of {}", self.page, self.total_pages)
    }
}

/// Run the pipeline. The clamped page is written back into `state`.
pub fn render_pass(ds: &Dataset, state: &mut SearchState, page_size: usize) -> ResultsPage {
    let view = FilteredView::from_raw(ds, SearchQuery::from_state(state));
    let window = paginate(view.len(), page_size, state.page());

    if window.clamped {
        logd!("Page: requested {} → {} of {}", state.page(), window.page, window.total_pages);
        state.set_page(window.page);
    }

    let cards = view
        .slice(window.range.clone())
        .into_iter()
        .map(|(ix, c)| CandidateCard::render(ix, c))
        .collect();

    ResultsPage {
        role: s!(state.role()),
        total_results: view.len(),
        page: window.page,
        total_pages: window.total_pages,
        clamped: window.clamped,
        cards,
    }
}
