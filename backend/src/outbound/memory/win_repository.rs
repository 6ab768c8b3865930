//! In-memory win repository preserving insertion order.

use std::sync::{PoisonError, RwLock};

use async_trait::async_trait;

use crate::domain::ports::{WinRepository, WinRepositoryError};
use crate::domain::{Win, WinId, WinPatch};

/// Win collection held in process memory.
#[derive(Debug, Default)]
pub struct InMemoryWinRepository {
    wins: RwLock<Vec<Win>>,
}

impl InMemoryWinRepository {
    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Win>> {
        self.wins.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Win>> {
        self.wins.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl WinRepository for InMemoryWinRepository {
    async fn list_all(&self) -> Result<Vec<Win>, WinRepositoryError> {
        Ok(self.read().clone())
    }

    async fn find_by_id(&self, id: &WinId) -> Result<Option<Win>, WinRepositoryError> {
        Ok(self.read().iter().find(|win| win.id() == id).cloned())
    }

    async fn insert(&self, win: &Win) -> Result<(), WinRepositoryError> {
        let mut wins = self.write();
        if wins.iter().any(|existing| existing.id() == win.id()) {
            return Err(WinRepositoryError::query(format!(
                "win {} already exists",
                win.id()
            )));
        }
        wins.push(win.clone());
        Ok(())
    }

    async fn update(&self, win: &Win) -> Result<bool, WinRepositoryError> {
        let mut wins = self.write();
        let Some(slot) = wins.iter_mut().find(|existing| existing.id() == win.id()) else {
            return Ok(false);
        };
        // Only title and text are persisted; the stored owner wins.
        let patch = WinPatch {
            title: Some(win.title().to_owned()),
            text: Some(win.text().to_owned()),
        };
        *slot = slot.clone().merge(patch);
        Ok(true)
    }

    async fn delete(&self, id: &WinId) -> Result<bool, WinRepositoryError> {
        let mut wins = self.write();
        let before = wins.len();
        wins.retain(|win| win.id() != id);
        Ok(wins.len() != before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{UserId, WinDraft};
    use rstest::{fixture, rstest};

    fn win(owner: UserId, title: &str) -> Win {
        Win::new(WinDraft {
            id: WinId::random(),
            title: title.to_owned(),
            text: "body".to_owned(),
            owner,
        })
        .expect("valid win")
    }

    #[fixture]
    fn repo() -> InMemoryWinRepository {
        InMemoryWinRepository::default()
    }

    #[rstest]
    #[tokio::test]
    async fn lists_in_insertion_order(repo: InMemoryWinRepository) {
        let first = win(UserId::random(), "first");
        let second = win(UserId::random(), "second");
        repo.insert(&first).await.expect("insert");
        repo.insert(&second).await.expect("insert");

        assert_eq!(repo.list_all().await, Ok(vec![first, second]));
    }

    #[rstest]
    #[tokio::test]
    async fn duplicate_ids_are_rejected(repo: InMemoryWinRepository) {
        let stored = win(UserId::random(), "once");
        repo.insert(&stored).await.expect("insert");
        assert!(repo.insert(&stored).await.is_err());
    }

    #[rstest]
    #[tokio::test]
    async fn update_never_reassigns_owner(repo: InMemoryWinRepository) {
        let owner = UserId::random();
        let stored = win(owner, "before");
        repo.insert(&stored).await.expect("insert");

        let hijacked = Win::new(WinDraft {
            id: *stored.id(),
            title: "after".to_owned(),
            text: "changed".to_owned(),
            owner: UserId::random(),
        })
        .expect("valid win");
        assert_eq!(repo.update(&hijacked).await, Ok(true));

        let reloaded = repo
            .find_by_id(stored.id())
            .await
            .expect("lookup")
            .expect("present");
        assert_eq!(reloaded.title(), "after");
        assert_eq!(reloaded.text(), "changed");
        assert_eq!(reloaded.owner(), &owner);
    }

    #[rstest]
    #[tokio::test]
    async fn missing_rows_report_false(repo: InMemoryWinRepository) {
        let ghost = win(UserId::random(), "ghost");
        assert_eq!(repo.update(&ghost).await, Ok(false));
        assert_eq!(repo.delete(ghost.id()).await, Ok(false));
    }

    #[rstest]
    #[tokio::test]
    async fn delete_removes_only_the_target(repo: InMemoryWinRepository) {
        let keep = win(UserId::random(), "keep");
        let doomed = win(UserId::random(), "doomed");
        repo.insert(&keep).await.expect("insert");
        repo.insert(&doomed).await.expect("insert");

        assert_eq!(repo.delete(doomed.id()).await, Ok(true));
        assert_eq!(repo.find_by_id(doomed.id()).await, Ok(None));
        assert_eq!(repo.list_all().await, Ok(vec![keep]));
    }
}
