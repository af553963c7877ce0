use async_trait::async_trait;

use crate::domain::wishlist::errors::WishlistError;
use crate::domain::wishlist::model::Wishlist;

pub struct GetWishlistsByCustomerParams {
    pub customer_id: i64,
}

#[async_trait]
pub trait GetWishlistsByCustomerUseCase: Send + Sync {
    async fn execute(
        &self,
        params: GetWishlistsByCustomerParams,
    ) -> Result<Vec<Wishlist>, WishlistError>;
}
