// src/error.rs
use std::{io, path::PathBuf};
use thiserror::Error;

/// Fatal for the session: the operator has to fix the source and restart.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Candidate data not found: {}", path.display())]
    Missing { path: PathBuf },

    #[error("Cannot read candidate data {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Candidate data {} has no header row", path.display())]
    Empty { path: PathBuf },

    #[error("Candidate data {} is missing column(s): {}", path.display(), columns.join(", "))]
    MissingColumns { path: PathBuf, columns: Vec<String> },

    #[error("Candidate data {} is malformed: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },
}

impl LoadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Missing { path }
            | LoadError::Unreadable { path, .. }
            | LoadError::Empty { path }
            | LoadError::MissingColumns { path, .. }
            | LoadError::Malformed { path, .. } => path,
        }
    }
}
