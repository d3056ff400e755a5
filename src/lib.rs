//! chanboard - board management for an imageboard
//!
//! A service layer and a repository layer for boards (named categories
//! such as forum sections), persisted in SQLite or PostgreSQL via sqlx.

pub mod board;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;

pub use board::{Board, BoardRepository, BoardService, SqlBoardRepository};
pub use config::Config;
pub use db::{Database, DbPool};
pub use error::{ChanError, Result};
