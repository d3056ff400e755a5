//! Board service for chanboard.
//!
//! Use-case entry points for boards. Each operation builds the entity from
//! primitive inputs where needed and forwards to the repository; errors are
//! returned unchanged.

use tracing::info;

use super::repository::BoardRepository;
use super::types::Board;
use crate::Result;

/// Service for board operations.
pub struct BoardService<R> {
    repo: R,
}

impl<R: BoardRepository> BoardService<R> {
    /// Create a new BoardService backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// List all boards.
    pub async fn list_boards(&self) -> Result<Vec<Board>> {
        self.repo.get_all().await
    }

    /// Get a board by slug.
    pub async fn get_board(&self, slug: &str) -> Result<Board> {
        self.repo.get_by_slug(slug).await
    }

    /// Create a new board.
    pub async fn create_board(&self, slug: &str, name: &str, description: &str) -> Result<()> {
        let board = Board::new(slug, name, description);
        self.repo.create(&board).await?;
        info!(slug, "Board created");
        Ok(())
    }

    /// Replace the name and description of an existing board.
    pub async fn update_board(&self, slug: &str, name: &str, description: &str) -> Result<()> {
        let board = Board::new(slug, name, description);
        self.repo.update(&board).await?;
        info!(slug, "Board updated");
        Ok(())
    }

    /// Delete a board.
    pub async fn delete_board(&self, slug: &str) -> Result<()> {
        self.repo.delete(slug).await?;
        info!(slug, "Board deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::repository::MockBoardRepository;
    use crate::ChanError;

    #[tokio::test]
    async fn test_list_boards() {
        let mut repo = MockBoardRepository::new();
        repo.expect_get_all()
            .times(1)
            .returning(|| Ok(vec![Board::new("b", "Random", "Random board")]));

        let service = BoardService::new(repo);
        let boards = service.list_boards().await.unwrap();

        assert_eq!(boards, vec![Board::new("b", "Random", "Random board")]);
    }

    #[tokio::test]
    async fn test_list_boards_empty() {
        let mut repo = MockBoardRepository::new();
        repo.expect_get_all().times(1).returning(|| Ok(vec![]));

        let service = BoardService::new(repo);
        assert!(service.list_boards().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_board() {
        let mut repo = MockBoardRepository::new();
        repo.expect_get_by_slug()
            .withf(|slug: &str| slug == "tech")
            .times(1)
            .returning(|_| Ok(Board::new("tech", "Technology", "Tech board")));

        let service = BoardService::new(repo);
        let board = service.get_board("tech").await.unwrap();

        assert_eq!(board, Board::new("tech", "Technology", "Tech board"));
    }

    #[tokio::test]
    async fn test_get_board_not_found() {
        let mut repo = MockBoardRepository::new();
        repo.expect_get_by_slug()
            .times(1)
            .returning(|slug| Err(ChanError::board_not_found(slug)));

        let service = BoardService::new(repo);
        let result = service.get_board("missing").await;

        assert!(matches!(result, Err(ChanError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_create_board() {
        let mut repo = MockBoardRepository::new();
        repo.expect_create()
            .withf(|board: &Board| {
                board.slug() == "news"
                    && board.name() == "News"
                    && board.description() == "News board"
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = BoardService::new(repo);
        service
            .create_board("news", "News", "News board")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_create_board_conflict() {
        let mut repo = MockBoardRepository::new();
        repo.expect_create()
            .times(1)
            .returning(|_| Err(ChanError::Conflict("board 'news' already exists".to_string())));

        let service = BoardService::new(repo);
        let result = service.create_board("news", "News", "News board").await;

        assert!(matches!(result, Err(ChanError::Conflict(_))));
    }

    #[tokio::test]
    async fn test_update_board() {
        let mut repo = MockBoardRepository::new();
        repo.expect_update()
            .withf(|board: &Board| {
                board.slug() == "games"
                    && board.name() == "Games"
                    && board.description() == "Games board"
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = BoardService::new(repo);
        service
            .update_board("games", "Games", "Games board")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_delete_board() {
        let mut repo = MockBoardRepository::new();
        repo.expect_delete()
            .withf(|slug: &str| slug == "b")
            .times(1)
            .returning(|_| Ok(()));

        let service = BoardService::new(repo);
        service.delete_board("b").await.unwrap();
    }

    #[tokio::test]
    async fn test_unavailable_is_passed_through() {
        let mut repo = MockBoardRepository::new();
        repo.expect_delete()
            .times(1)
            .returning(|_| Err(ChanError::Unavailable("pool timed out".to_string())));

        let service = BoardService::new(repo);
        let result = service.delete_board("b").await;

        assert!(matches!(result, Err(ChanError::Unavailable(_))));
    }
}
