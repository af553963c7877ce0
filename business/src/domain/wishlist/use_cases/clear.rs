use async_trait::async_trait;

use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;

pub struct ClearWishlistParams {
    pub id: i64,
}

#[async_trait]
pub trait ClearWishlistUseCase: Send + Sync {
    async fn execute(&self, params: ClearWishlistParams) -> Result<Wishlist, WishlistError>;
}
