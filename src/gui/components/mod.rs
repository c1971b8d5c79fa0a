// src/gui/components/mod.rs
pub mod candidate_table;
pub mod filter_panel;
pub mod load_error;
pub mod pager;
