use std::sync::Arc;

use async_trait::async_trait;

use super::wishlist_guard::ensure_wishlist_exists;
use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::add::{AddItemOutcome, AddItemParams, AddItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::wishlist::repository::WishlistRepository;

pub struct AddItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub wishlist_repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddItemUseCase for AddItemUseCaseImpl {
    async fn execute(&self, params: AddItemParams) -> Result<AddItemOutcome, ItemError> {
        self.logger.info(&format!(
            "Adding product {} to wishlist {}",
            params.product_id, params.wishlist_id
        ));

        ensure_wishlist_exists(self.wishlist_repository.as_ref(), params.wishlist_id).await?;

        // Lookup-then-create is not atomic; concurrent adds may still duplicate
        if let Some(existing) = self
            .repository
            .find_by_wishlist_id_and_product_id(params.wishlist_id, params.product_id)
            .await?
        {
            self.logger.info(&format!(
                "Product {} already in wishlist {}, skipping",
                params.product_id, params.wishlist_id
            ));
            return Ok(AddItemOutcome::AlreadyExists(existing));
        }

        let item = Item::new(params.wishlist_id, params.product_id);
        let created = self.repository.create(&item).await?;

        let Some(id) = created.id else {
            self.logger.error("Repository returned the new item without an id");
            return Err(RepositoryError::Persistence.into());
        };

        self.logger.info(&format!("Item created: {}", id));
        Ok(AddItemOutcome::Created(created))
    }
}
