use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::clear::{ClearWishlistParams, ClearWishlistUseCase};

pub struct ClearWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearWishlistUseCase for ClearWishlistUseCaseImpl {
    async fn execute(&self, params: ClearWishlistParams) -> Result<Wishlist, WishlistError> {
        self.logger
            .info(&format!("Request to clear wishlist with id: {}", params.id));

        let wishlist = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => WishlistError::NotFound(params.id),
                other => WishlistError::Repository(other),
            })?;

        let count = self.item_repository.delete_by_wishlist_id(params.id).await?;

        self.logger.info(&format!(
            "Cleared {} items from wishlist {}",
            count, params.id
        ));
        Ok(wishlist.with_items(Vec::new()))
    }
}
