use std::sync::Arc;

use async_trait::async_trait;

use super::embed_items::embed_items;
use crate::domain::errors::RepositoryError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::get_by_id::{
    GetWishlistByIdParams, GetWishlistByIdUseCase,
};

pub struct GetWishlistByIdUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub item_repository: Arc<dyn ItemRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetWishlistByIdUseCase for GetWishlistByIdUseCaseImpl {
    async fn execute(&self, params: GetWishlistByIdParams) -> Result<Wishlist, WishlistError> {
        self.logger
            .info(&format!("Request for wishlist with id: {}", params.id));

        let wishlist = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => WishlistError::NotFound(params.id),
                other => WishlistError::Repository(other),
            })?;

        Ok(embed_items(self.item_repository.as_ref(), wishlist).await?)
    }
}
