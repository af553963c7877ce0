use std::sync::Arc;

use async_trait::async_trait;

use super::embed_items::embed_items_all;
use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::get_by_customer::{
    GetWishlistsByCustomerParams, GetWishlistsByCustomerUseCase,
};

pub struct GetWishlistsByCustomerUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetWishlistsByCustomerUseCase for GetWishlistsByCustomerUseCaseImpl {
    async fn execute(
        &self,
        params: GetWishlistsByCustomerParams,
    ) -> Result<Vec<Wishlist>, WishlistError> {
        self.logger.info(&format!(
            "Request for wishlists with customer id: {}",
            params.customer_id
        ));

        let wishlists = self
            .repository
            .find_by_customer_id(params.customer_id)
            .await?;

        if wishlists.is_empty() {
            return Err(WishlistError::CustomerNotFound(params.customer_id));
        }

        Ok(embed_items_all(self.item_repository.as_ref(), wishlists).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockWishlistRepo, empty_item_repo, mock_logger, stored_wishlist};

    fn use_case(mock_repo: MockWishlistRepo) -> GetWishlistsByCustomerUseCaseImpl {
        GetWishlistsByCustomerUseCaseImpl {
            repository: Arc::new(mock_repo),
            item_repository: Arc::new(empty_item_repo()),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_wishlists_of_customer() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_find_by_customer_id()
            .withf(|customer_id| *customer_id == 20)
            .returning(|_| {
                Ok(vec![
                    stored_wishlist(1, "Summer", 20),
                    stored_wishlist(3, "Gifts", 20),
                ])
            });

        let wishlists = use_case(mock_repo)
            .execute(GetWishlistsByCustomerParams { customer_id: 20 })
            .await
            .unwrap();

        assert_eq!(wishlists.len(), 2);
        assert!(wishlists.iter().all(|w| w.customer_id == 20));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_customer() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_find_by_customer_id()
            .returning(|_| Ok(vec![]));

        let err = use_case(mock_repo)
            .execute(GetWishlistsByCustomerParams { customer_id: -1 })
            .await
            .unwrap_err();

        assert!(matches!(err, WishlistError::CustomerNotFound(-1)));
        assert!(err.to_string().contains("was not found"));
    }
}
