use std::sync::Arc;

use async_trait::async_trait;

use super::wishlist_guard::ensure_wishlist_exists;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::wishlist::repository::WishlistRepository;

pub struct UpdateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub wishlist_repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateItemUseCase for UpdateItemUseCaseImpl {
    async fn execute(&self, params: UpdateItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!(
            "Updating item {} of wishlist {}",
            params.item_id, params.wishlist_id
        ));

        ensure_wishlist_exists(self.wishlist_repository.as_ref(), params.wishlist_id).await?;

        let mut item = self
            .repository
            .find_by_wishlist_id_and_item_id(params.wishlist_id, params.item_id)
            .await?
            .ok_or(ItemError::NotFound {
                wishlist_id: params.wishlist_id,
                item_id: params.item_id,
            })?;

        item.product_id = params.product_id;
        self.repository.update(&item).await?;

        self.logger
            .info(&format!("Item updated: {}", params.item_id));
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockItemRepo, MockWishlistRepo, mock_logger, stored_wishlist};

    fn existing_wishlist_repo() -> MockWishlistRepo {
        let mut repo = MockWishlistRepo::new();
        repo.expect_find()
            .returning(|id| Ok(Some(stored_wishlist(id, "Summer", 20))));
        repo
    }

    #[tokio::test]
    async fn should_replace_product_id() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_find_by_wishlist_id_and_item_id()
            .returning(|wishlist_id, item_id| {
                Ok(Some(Item::from_repository(item_id, wishlist_id, 42)))
            });
        mock_repo
            .expect_update()
            .withf(|item| item.id == Some(8) && item.product_id == 43)
            .times(1)
            .returning(|_| Ok(()));

        let use_case = UpdateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            wishlist_repository: Arc::new(existing_wishlist_repo()),
            logger: mock_logger(),
        };

        let item = use_case
            .execute(UpdateItemParams {
                wishlist_id: 1,
                item_id: 8,
                product_id: 43,
            })
            .await
            .unwrap();

        assert_eq!(item, Item::from_repository(8, 1, 43));
    }

    #[tokio::test]
    async fn should_return_not_found_when_item_missing() {
        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_find_by_wishlist_id_and_item_id()
            .returning(|_, _| Ok(None));
        mock_repo.expect_update().never();

        let use_case = UpdateItemUseCaseImpl {
            repository: Arc::new(mock_repo),
            wishlist_repository: Arc::new(existing_wishlist_repo()),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(UpdateItemParams {
                wishlist_id: 1,
                item_id: 8,
                product_id: 43,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ItemError::NotFound { .. }));
    }

    #[tokio::test]
    async fn should_return_not_found_when_wishlist_missing() {
        let mut wishlist_repo = MockWishlistRepo::new();
        wishlist_repo.expect_find().returning(|_| Ok(None));

        let use_case = UpdateItemUseCaseImpl {
            repository: Arc::new(MockItemRepo::new()),
            wishlist_repository: Arc::new(wishlist_repo),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(UpdateItemParams {
                wishlist_id: 1,
                item_id: 8,
                product_id: 43,
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ItemError::WishlistNotFound(1)));
    }
}
