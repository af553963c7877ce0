use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::create::{CreateWishlistParams, CreateWishlistUseCase};

pub struct CreateWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateWishlistUseCase for CreateWishlistUseCaseImpl {
    async fn execute(&self, params: CreateWishlistParams) -> Result<Wishlist, WishlistError> {
        let wishlist = Wishlist::from_payload(&params.data).inspect_err(|e| {
            self.logger
                .warn(&format!("Rejected wishlist payload: {}", e));
        })?;

        self.logger
            .info(&format!("Creating wishlist: {}", wishlist.name));

        let created = self.repository.create(&wishlist).await?;

        let Some(id) = created.id else {
            self.logger.error("Repository returned the new wishlist without an id");
            return Err(RepositoryError::Persistence.into());
        };

        self.logger
            .info(&format!("Wishlist with ID [{}] created.", id));
        Ok(created)
    }
}
