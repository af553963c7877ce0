use crate::domain::errors::RepositoryError;
use crate::domain::item::errors::ItemError;
use crate::domain::wishlist::repository::WishlistRepository;

/// Fails with [`ItemError::WishlistNotFound`] unless the parent wishlist exists.
pub async fn ensure_wishlist_exists(
    wishlists: &dyn WishlistRepository,
    wishlist_id: i64,
) -> Result<(), ItemError> {
    wishlists
        .get_by_id(wishlist_id)
        .await
        .map(|_| ())
        .map_err(|e| match e {
            RepositoryError::NotFound => ItemError::WishlistNotFound(wishlist_id),
            other => ItemError::Repository(other),
        })
}
