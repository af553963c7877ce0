use async_trait::async_trait;

use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::{Wishlist, WishlistFilter};

pub struct GetAllWishlistsParams {
    pub filter: WishlistFilter,
}

#[async_trait]
pub trait GetAllWishlistsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllWishlistsParams) -> Result<Vec<Wishlist>, WishlistError>;
}
