//! Board module for chanboard.
//!
//! This module provides board management:
//! - The `Board` entity, identified by slug
//! - The `BoardRepository` persistence trait and its SQL implementation
//! - `BoardService`, the use-case layer callers talk to

mod repository;
mod service;
mod types;

pub use repository::{BoardRepository, SqlBoardRepository};
pub use service::BoardService;
pub use types::Board;
