// src/lib.rs
//! Candidate search dashboard: load a candidate table once, filter it by
//! role/name/location, page through the matches and open resume or
//! WhatsApp links per row.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod config;
pub mod error;
pub mod model;
pub mod csv;
pub mod store;
pub mod data;
pub mod paginate;
pub mod render;
pub mod dispatch;
pub mod runner;
pub mod file;

pub mod cli;
pub mod gui;
