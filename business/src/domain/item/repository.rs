use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Item;

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn find_by_wishlist_id(&self, wishlist_id: i64) -> Result<Vec<Item>, RepositoryError>;
    async fn find_by_wishlist_id_and_product_id(
        &self,
        wishlist_id: i64,
        product_id: i64,
    ) -> Result<Option<Item>, RepositoryError>;
    async fn find_by_wishlist_id_and_item_id(
        &self,
        wishlist_id: i64,
        item_id: i64,
    ) -> Result<Option<Item>, RepositoryError>;
    async fn create(&self, item: &Item) -> Result<Item, RepositoryError>;
    async fn update(&self, item: &Item) -> Result<(), RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
    async fn delete_by_wishlist_id(&self, wishlist_id: i64) -> Result<u64, RepositoryError>;
}
