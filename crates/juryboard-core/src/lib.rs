//! Juryboard Core Library
//!
//! Core domain logic for the juryboard jury scoring tool: the board state,
//! ranking, the commit-reveal draw, and the JSON-file store.

pub mod board;
pub mod chart;
pub mod config;
pub mod draw;
pub mod error;
pub mod export;
pub mod labels;
pub mod logging;
pub mod ranking;
pub mod records;
pub mod store;
