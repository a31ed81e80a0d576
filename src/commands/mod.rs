//! CLI commands for juryboard

pub mod board;
pub mod dispatch;
pub mod draw;
pub mod export;
pub mod format;
pub mod init;
pub mod names;
pub mod reset;
pub mod score;
pub mod show;
