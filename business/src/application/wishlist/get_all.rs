use std::sync::Arc;

use async_trait::async_trait;

use super::embed_items::embed_items_all;
use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::get_all::{GetAllWishlistsParams, GetAllWishlistsUseCase};

pub struct GetAllWishlistsUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllWishlistsUseCase for GetAllWishlistsUseCaseImpl {
    async fn execute(
        &self,
        params: GetAllWishlistsParams,
    ) -> Result<Vec<Wishlist>, WishlistError> {
        self.logger.info(&format!(
            "Listing wishlists (name: {:?}, customer_id: {:?})",
            params.filter.name, params.filter.customer_id
        ));

        let wishlists = match (&params.filter.name, params.filter.customer_id) {
            (Some(name), Some(customer_id)) => {
                self.repository
                    .find_by_name_and_customer_id(name, customer_id)
                    .await?
            }
            (Some(name), None) => self.repository.find_by_name(name).await?,
            (None, Some(customer_id)) => self.repository.find_by_customer_id(customer_id).await?,
            (None, None) => self.repository.get_all().await?,
        };

        let wishlists = embed_items_all(self.item_repository.as_ref(), wishlists).await?;

        self.logger
            .info(&format!("Returning {} wishlists", wishlists.len()));
        Ok(wishlists)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::wishlist::model::WishlistFilter;
    use crate::test_support::{MockWishlistRepo, empty_item_repo, mock_logger, stored_wishlist};

    fn use_case(mock_repo: MockWishlistRepo) -> GetAllWishlistsUseCaseImpl {
        GetAllWishlistsUseCaseImpl {
            repository: Arc::new(mock_repo),
            item_repository: Arc::new(empty_item_repo()),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_return_all_wishlists_without_filter() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo.expect_get_all().times(1).returning(|| {
            Ok(vec![
                stored_wishlist(1, "Summer", 20),
                stored_wishlist(2, "Winter", 21),
            ])
        });

        let result = use_case(mock_repo)
            .execute(GetAllWishlistsParams {
                filter: WishlistFilter::default(),
            })
            .await;

        assert_eq!(result.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_treat_empty_name_as_no_filter() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo.expect_get_all().times(1).returning(|| Ok(vec![]));

        let result = use_case(mock_repo)
            .execute(GetAllWishlistsParams {
                filter: WishlistFilter::new(Some(String::new()), None),
            })
            .await;

        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_filter_by_name_only() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_find_by_name()
            .withf(|name| name.to_string() == "Summer")
            .times(1)
            .returning(|_| Ok(vec![stored_wishlist(1, "Summer", 20)]));

        let result = use_case(mock_repo)
            .execute(GetAllWishlistsParams {
                filter: WishlistFilter::new(Some("Summer".to_string()), None),
            })
            .await;

        assert_eq!(result.unwrap()[0].name, "Summer");
    }

    #[tokio::test]
    async fn should_filter_by_customer_only() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_find_by_customer_id()
            .withf(|customer_id| *customer_id == 20)
            .times(1)
            .returning(|_| Ok(vec![stored_wishlist(1, "Summer", 20)]));

        let result = use_case(mock_repo)
            .execute(GetAllWishlistsParams {
                filter: WishlistFilter::new(None, Some(20)),
            })
            .await;

        assert_eq!(result.unwrap()[0].customer_id, 20);
    }

    #[tokio::test]
    async fn should_require_both_fields_when_both_given() {
        let mut mock_repo = MockWishlistRepo::new();
        mock_repo
            .expect_find_by_name_and_customer_id()
            .withf(|name, customer_id| name.to_string() == "Summer" && *customer_id == 20)
            .times(1)
            .returning(|_, _| Ok(vec![]));

        let result = use_case(mock_repo)
            .execute(GetAllWishlistsParams {
                filter: WishlistFilter::new(Some("Summer".to_string()), Some(20)),
            })
            .await;

        assert!(result.unwrap().is_empty());
    }
}
