use std::sync::Arc;

use async_trait::async_trait;

use super::embed_items::embed_items;
use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::update::{UpdateWishlistParams, UpdateWishlistUseCase};

pub struct UpdateWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateWishlistUseCase for UpdateWishlistUseCaseImpl {
    async fn execute(&self, params: UpdateWishlistParams) -> Result<Wishlist, WishlistError> {
        self.logger
            .info(&format!("Updating wishlist: {}", params.id));

        let requested = Wishlist::from_payload(&params.data)?;

        // Ownership is checked by looking the wishlist up among the customer's own
        let owned = self
            .repository
            .find_by_customer_id(requested.customer_id)
            .await?;

        if owned.is_empty() {
            return Err(WishlistError::CustomerNotFound(requested.customer_id));
        }

        let mut wishlist = owned
            .into_iter()
            .find(|w| w.id == Some(params.id))
            .ok_or(WishlistError::NotOwnedByCustomer {
                customer_id: requested.customer_id,
                wishlist_id: params.id,
            })?;

        wishlist.name = requested.name;
        self.repository.update(&wishlist).await?;

        self.logger
            .info(&format!("Wishlist updated: {}", params.id));
        Ok(embed_items(self.item_repository.as_ref(), wishlist).await?)
    }
}
