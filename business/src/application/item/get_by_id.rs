use std::sync::Arc;

use async_trait::async_trait;

use super::wishlist_guard::ensure_wishlist_exists;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use crate::domain::logger::Logger;
use crate::domain::wishlist::repository::WishlistRepository;

pub struct GetItemByIdUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub wishlist_repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetItemByIdUseCase for GetItemByIdUseCaseImpl {
    async fn execute(&self, params: GetItemByIdParams) -> Result<Item, ItemError> {
        self.logger.info(&format!(
            "Request for item {} of wishlist {}",
            params.item_id, params.wishlist_id
        ));

        ensure_wishlist_exists(self.wishlist_repository.as_ref(), params.wishlist_id).await?;

        self.repository
            .find_by_wishlist_id_and_item_id(params.wishlist_id, params.item_id)
            .await?
            .ok_or(ItemError::NotFound {
                wishlist_id: params.wishlist_id,
                item_id: params.item_id,
            })
    }
}
