use crate::domain::errors::RepositoryError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::wishlist::model::Wishlist;

/// Loads the items of a persisted wishlist into it.
pub async fn embed_items(
    items: &dyn ItemRepository,
    wishlist: Wishlist,
) -> Result<Wishlist, RepositoryError> {
    match wishlist.id {
        Some(id) => {
            let loaded = items.find_by_wishlist_id(id).await?;
            Ok(wishlist.with_items(loaded))
        }
        None => Ok(wishlist),
    }
}

pub async fn embed_items_all(
    items: &dyn ItemRepository,
    wishlists: Vec<Wishlist>,
) -> Result<Vec<Wishlist>, RepositoryError> {
    let mut loaded = Vec::with_capacity(wishlists.len());
    for wishlist in wishlists {
        loaded.push(embed_items(items, wishlist).await?);
    }
    Ok(loaded)
}
