//! Mocks shared by the use case tests.

use std::sync::Arc;

use async_trait::async_trait;
use mockall::mock;

use crate::domain::errors::RepositoryError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistRepository;

mock! {
    pub WishlistRepo {}

    #[async_trait]
    impl WishlistRepository for WishlistRepo {
        async fn get_all(&self) -> Result<Vec<Wishlist>, RepositoryError>;
        async fn find(&self, id: i64) -> Result<Option<Wishlist>, RepositoryError>;
        async fn find_by_name(&self, name: &str) -> Result<Vec<Wishlist>, RepositoryError>;
        async fn find_by_customer_id(&self, customer_id: i64) -> Result<Vec<Wishlist>, RepositoryError>;
        async fn find_by_name_and_customer_id(&self, name: &str, customer_id: i64) -> Result<Vec<Wishlist>, RepositoryError>;
        async fn create(&self, wishlist: &Wishlist) -> Result<Wishlist, RepositoryError>;
        async fn update(&self, wishlist: &Wishlist) -> Result<(), RepositoryError>;
        async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    }
}

mock! {
    pub ItemRepo {}

    #[async_trait]
    impl ItemRepository for ItemRepo {
        async fn find_by_wishlist_id(&self, wishlist_id: i64) -> Result<Vec<Item>, RepositoryError>;
        async fn find_by_wishlist_id_and_product_id(&self, wishlist_id: i64, product_id: i64) -> Result<Option<Item>, RepositoryError>;
        async fn find_by_wishlist_id_and_item_id(&self, wishlist_id: i64, item_id: i64) -> Result<Option<Item>, RepositoryError>;
        async fn create(&self, item: &Item) -> Result<Item, RepositoryError>;
        async fn update(&self, item: &Item) -> Result<(), RepositoryError>;
        async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
        async fn delete_by_wishlist_id(&self, wishlist_id: i64) -> Result<u64, RepositoryError>;
    }
}

mock! {
    pub Log {}

    impl Logger for Log {
        fn info(&self, message: &str);
        fn warn(&self, message: &str);
        fn error(&self, message: &str);
        fn debug(&self, message: &str);
    }
}

pub fn mock_logger() -> Arc<dyn Logger> {
    let mut logger = MockLog::new();
    logger.expect_info().returning(|_| ());
    logger.expect_warn().returning(|_| ());
    logger.expect_error().returning(|_| ());
    logger.expect_debug().returning(|_| ());
    Arc::new(logger)
}

pub fn stored_wishlist(id: i64, name: &str, customer_id: i64) -> Wishlist {
    Wishlist::from_repository(id, name.to_string(), customer_id)
}

/// Item repository that reports every wishlist as empty.
pub fn empty_item_repo() -> MockItemRepo {
    let mut repo = MockItemRepo::new();
    repo.expect_find_by_wishlist_id().returning(|_| Ok(vec![]));
    repo
}
