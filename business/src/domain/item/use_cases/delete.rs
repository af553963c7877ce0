use async_trait::async_trait;

use crate::domain::item::errors::ItemError;

pub struct DeleteItemParams {
    pub wishlist_id: i64,
    pub item_id: i64,
}

#[async_trait]
pub trait DeleteItemUseCase: Send + Sync {
    async fn execute(&self, params: DeleteItemParams) -> Result<(), ItemError>;
}
