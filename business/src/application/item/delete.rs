use std::sync::Arc;

use async_trait::async_trait;

use super::wishlist_guard::ensure_wishlist_exists;
use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::wishlist::repository::WishlistRepository;

pub struct DeleteItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub wishlist_repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteItemUseCase for DeleteItemUseCaseImpl {
    async fn execute(&self, params: DeleteItemParams) -> Result<(), ItemError> {
        self.logger.info(&format!(
            "Request to delete item {} of wishlist {}",
            params.item_id, params.wishlist_id
        ));

        ensure_wishlist_exists(self.wishlist_repository.as_ref(), params.wishlist_id).await?;

        let item = self
            .repository
            .find_by_wishlist_id_and_item_id(params.wishlist_id, params.item_id)
            .await?
            .ok_or(ItemError::NotFound {
                wishlist_id: params.wishlist_id,
                item_id: params.item_id,
            })?;

        self.repository.delete(params.item_id).await?;

        self.logger
            .info(&format!("Item deleted: {}", item.id.unwrap_or(params.item_id)));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::item::model::Item;
    use crate::test_support::{MockItemRepo, MockWishlistRepo, mock_logger, stored_wishlist};

    fn existing_wishlist_repo() -> MockWishlistRepo {
        let mut repo = MockWishlistRepo::new();
        repo.expect_find()
            .returning(|id| Ok(Some(stored_wishlist(id, "Summer", 20))));
        repo
    }

    #[tokio::test]
    async fn should_delete_existing_item() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_find_by_wishlist_id_and_item_id()
            .returning(|wishlist_id, item_id| {
                Ok(Some(Item::from_repository(item_id, wishlist_id, 42)))
            });
        mock_repo
            .expect_delete()
            .withf(|id| *id == 8)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            wishlist_repository: Arc::new(existing_wishlist_repo()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteItemParams {
                wishlist_id: 1,
                item_id: 8,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_nonexistent() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_find_by_wishlist_id_and_item_id()
            .returning(|_, _| Ok(None));
        mock_repo.expect_delete().never();

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            wishlist_repository: Arc::new(existing_wishlist_repo()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteItemParams {
                wishlist_id: 1,
                item_id: 8,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ItemError::NotFound { .. }));
    }
}
