use sqlx::FromRow;

use business::domain::item::model::Item;

#[derive(Debug, FromRow)]
pub struct ItemEntity {
    pub id: i64,
    pub wishlist_id: i64,
    pub product_id: i64,
}

impl ItemEntity {
    pub fn into_domain(self) -> Item {
        Item::from_repository(self.id, self.wishlist_id, self.product_id)
    }
}
