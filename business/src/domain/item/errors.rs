use crate::domain::errors::RepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ItemError {
    #[error("Wishlist with id '{0}' was not found.")]
    WishlistNotFound(i64),
    #[error("Wishlist with id '{wishlist_id}' was not found with item '{item_id}'")]
    NotFound { wishlist_id: i64, item_id: i64 },
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
