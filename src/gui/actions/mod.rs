// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{copy,open}.

mod copy;  // src/gui/actions/copy.rs
mod open;  // src/gui/actions/open.rs

pub use copy::copy;
pub use open::{open, EguiOpener};
