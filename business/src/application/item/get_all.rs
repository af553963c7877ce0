use std::sync::Arc;

use async_trait::async_trait;

use super::wishlist_guard::ensure_wishlist_exists;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::get_all::{GetAllItemsParams, GetAllItemsUseCase};
use crate::domain::logger::Logger;
use crate::domain::wishlist::repository::WishlistRepository;

pub struct GetAllItemsUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub wishlist_repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllItemsUseCase for GetAllItemsUseCaseImpl {
    async fn execute(&self, params: GetAllItemsParams) -> Result<Vec<Item>, ItemError> {
        self.logger.info(&format!(
            "Request for wishlist items with wishlist_id: {}",
            params.wishlist_id
        ));

        ensure_wishlist_exists(self.wishlist_repository.as_ref(), params.wishlist_id).await?;

        let items = self
            .repository
            .find_by_wishlist_id(params.wishlist_id)
            .await?;

        self.logger
            .info(&format!("Retrieved {} items", items.len()));
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockItemRepo, MockWishlistRepo, mock_logger, stored_wishlist};

    #[tokio::test]
    async fn should_return_items_of_wishlist() {
        let mut wishlist_repo = MockWishlistRepo::new();
        wishlist_repo
            .expect_find()
            .returning(|id| Ok(Some(stored_wishlist(id, "Summer", 20))));

        let mut mock_repo = MockItemRepo::new();
        mock_repo
            .expect_find_by_wishlist_id()
            .withf(|wishlist_id| *wishlist_id == 2)
            .returning(|wishlist_id| {
                Ok(vec![
                    Item::from_repository(1, wishlist_id, 10),
                    Item::from_repository(2, wishlist_id, 11),
                ])
            });

        let use_case = GetAllItemsUseCaseImpl {
            repository: Arc::new(mock_repo),
            wishlist_repository: Arc::new(wishlist_repo),
            logger: mock_logger(),
        };

        let items = use_case
            .execute(GetAllItemsParams { wishlist_id: 2 })
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
    }

    #[tokio::test]
    async fn should_fail_before_item_lookup_when_wishlist_missing() {
        let mut wishlist_repo = MockWishlistRepo::new();
        wishlist_repo.expect_find().returning(|_| Ok(None));

        let use_case = GetAllItemsUseCaseImpl {
            repository: Arc::new(MockItemRepo::new()),
            wishlist_repository: Arc::new(wishlist_repo),
            logger: mock_logger(),
        };

        let err = use_case
            .execute(GetAllItemsParams { wishlist_id: 2 })
            .await
            .unwrap_err();

        assert!(matches!(err, ItemError::WishlistNotFound(2)));
    }
}
