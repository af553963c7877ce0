use poem_openapi::Object;

use business::domain::item::model::Item;

#[derive(Debug, Clone, Object)]
pub struct ItemRequest {
    /// Product identifier from the external catalog
    pub product_id: i64,
}

#[derive(Debug, Clone, Object)]
pub struct ItemResponse {
    /// The unique id assigned internally by the service
    pub id: Option<i64>,
    /// Owning wishlist
    pub wishlist_id: i64,
    /// Referenced product
    pub product_id: i64,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            wishlist_id: item.wishlist_id,
            product_id: item.product_id,
        }
    }
}
