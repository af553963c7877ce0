use poem_openapi::Object;

use business::domain::wishlist::model::Wishlist;

use crate::api::item::dto::ItemResponse;

#[derive(Debug, Clone, Object)]
pub struct WishlistResponse {
    /// The unique id assigned internally by the service
    pub id: Option<i64>,
    /// Wishlist name (at most 63 characters)
    pub name: String,
    /// Owning customer
    pub customer_id: i64,
    /// Items currently in the wishlist
    pub items: Vec<ItemResponse>,
}

impl From<Wishlist> for WishlistResponse {
    fn from(wishlist: Wishlist) -> Self {
        Self {
            id: wishlist.id,
            name: wishlist.name,
            customer_id: wishlist.customer_id,
            items: wishlist.items.into_iter().map(|i| i.into()).collect(),
        }
    }
}
