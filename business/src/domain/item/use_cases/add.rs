use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;

pub struct AddItemParams {
    pub wishlist_id: i64,
    pub product_id: i64,
}

/// Adding is idempotent per (wishlist, product).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddItemOutcome {
    Created(Item),
    AlreadyExists(Item),
}

#[async_trait]
pub trait AddItemUseCase: Send + Sync {
    async fn execute(&self, params: AddItemParams) -> Result<AddItemOutcome, ItemError>;
}
