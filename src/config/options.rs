// src/config/options.rs
use std::path::PathBuf;
use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    /// Where the candidate table is read from (once per session).
    pub dataset: PathBuf,
    /// Rows per page.
    pub page_size: usize,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            dataset: PathBuf::from(DEFAULT_DATASET),
            page_size: PAGE_SIZE,
        }
    }
}
