use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::repository::WishlistRepository;
use crate::domain::wishlist::use_cases::delete::{DeleteWishlistParams, DeleteWishlistUseCase};

pub struct DeleteWishlistUseCaseImpl {
    pub repository: Arc<dyn WishlistRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteWishlistUseCase for DeleteWishlistUseCaseImpl {
    async fn execute(&self, params: DeleteWishlistParams) -> Result<(), WishlistError> {
        self.logger
            .info(&format!("Request to delete wishlist with id: {}", params.id));

        // Verify it exists
        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => WishlistError::NotFound(params.id),
                other => WishlistError::Repository(other),
            })?;

        self.repository.delete(params.id).await?;

        self.logger.info(&format!(
            "Wishlist with ID [{}] delete complete.",
            params.id
        ));
        Ok(())
    }
}
