use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Wishlist;

/// Wishlists come back without items; callers load them through
/// [`ItemRepository`](crate::domain::item::repository::ItemRepository).
#[async_trait]
pub trait WishlistRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Wishlist>, RepositoryError>;
    async fn find(&self, id: i64) -> Result<Option<Wishlist>, RepositoryError>;
    async fn find_by_name(&self, name: &str) -> Result<Vec<Wishlist>, RepositoryError>;
    async fn find_by_customer_id(&self, customer_id: i64)
    -> Result<Vec<Wishlist>, RepositoryError>;
    async fn find_by_name_and_customer_id(
        &self,
        name: &str,
        customer_id: i64,
    ) -> Result<Vec<Wishlist>, RepositoryError>;
    /// Inserts the wishlist and returns it with the id assigned by storage.
    async fn create(&self, wishlist: &Wishlist) -> Result<Wishlist, RepositoryError>;
    async fn update(&self, wishlist: &Wishlist) -> Result<(), RepositoryError>;
    /// Removes the wishlist; its items go with it.
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;

    async fn get_by_id(&self, id: i64) -> Result<Wishlist, RepositoryError> {
        self.find(id).await?.ok_or(RepositoryError::NotFound)
    }
}
