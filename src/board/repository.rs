//! Board repository for chanboard.
//!
//! [`BoardRepository`] is the persistence seam used by the service layer.
//! [`SqlBoardRepository`] implements it on top of the `boards` table.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;
use tracing::debug;

use super::types::Board;
use crate::db::DbPool;
use crate::{ChanError, Result};

/// Persistence operations for boards, keyed by slug.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// List every board. Empty when none exist.
    async fn get_all(&self) -> Result<Vec<Board>>;

    /// Get a board by slug.
    ///
    /// Fails with [`ChanError::NotFound`] when no board has that slug.
    async fn get_by_slug(&self, slug: &str) -> Result<Board>;

    /// Insert a new board.
    ///
    /// Fails with [`ChanError::Conflict`] when the slug is already taken.
    async fn create(&self, board: &Board) -> Result<()>;

    /// Replace name and description of the board with the same slug.
    ///
    /// Fails with [`ChanError::NotFound`] when the slug does not exist.
    async fn update(&self, board: &Board) -> Result<()>;

    /// Delete a board by slug.
    ///
    /// Fails with [`ChanError::NotFound`] when the slug does not exist.
    async fn delete(&self, slug: &str) -> Result<()>;
}

/// Repository for board CRUD operations against a SQL store.
#[derive(Clone)]
pub struct SqlBoardRepository {
    pool: DbPool,
}

impl SqlBoardRepository {
    /// Create a new SqlBoardRepository using the given pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BoardRepository for SqlBoardRepository {
    async fn get_all(&self) -> Result<Vec<Board>> {
        let rows: Vec<BoardRow> =
            sqlx::query_as("SELECT slug, name, description FROM boards ORDER BY slug ASC")
                .fetch_all(&self.pool)
                .await?;

        debug!(count = rows.len(), "Listed boards");
        Ok(rows.into_iter().map(BoardRow::into_board).collect())
    }

    async fn get_by_slug(&self, slug: &str) -> Result<Board> {
        let row: Option<BoardRow> =
            sqlx::query_as("SELECT slug, name, description FROM boards WHERE slug = $1")
                .bind(slug)
                .fetch_optional(&self.pool)
                .await?;

        row.map(BoardRow::into_board)
            .ok_or_else(|| ChanError::board_not_found(slug))
    }

    async fn create(&self, board: &Board) -> Result<()> {
        sqlx::query("INSERT INTO boards (slug, name, description) VALUES ($1, $2, $3)")
            .bind(board.slug())
            .bind(board.name())
            .bind(board.description())
            .execute(&self.pool)
            .await
            .map_err(|e| match ChanError::from(e) {
                ChanError::Conflict(_) => {
                    ChanError::Conflict(format!("board '{}' already exists", board.slug()))
                }
                other => other,
            })?;

        debug!(slug = board.slug(), "Created board");
        Ok(())
    }

    async fn update(&self, board: &Board) -> Result<()> {
        let result = sqlx::query("UPDATE boards SET name = $1, description = $2 WHERE slug = $3")
            .bind(board.name())
            .bind(board.description())
            .bind(board.slug())
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ChanError::board_not_found(board.slug()));
        }

        debug!(slug = board.slug(), "Updated board");
        Ok(())
    }

    async fn delete(&self, slug: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM boards WHERE slug = $1")
            .bind(slug)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ChanError::board_not_found(slug));
        }

        debug!(slug, "Deleted board");
        Ok(())
    }
}

/// Internal struct for mapping database rows to Board.
#[derive(sqlx::FromRow)]
struct BoardRow {
    slug: String,
    name: String,
    description: String,
}

impl BoardRow {
    fn into_board(self) -> Board {
        Board::new(self.slug, self.name, self.description)
    }
}
