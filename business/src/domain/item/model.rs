use serde::Serialize;

/// A single product reference inside a wishlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: Option<i64>,
    pub wishlist_id: i64,
    pub product_id: i64,
}

impl Item {
    /// Builds an item that has not been persisted yet.
    ///
    /// Both ids come from the HTTP boundary already typed as integers, and
    /// `product_id` is not checked against any catalog.
    pub fn new(wishlist_id: i64, product_id: i64) -> Self {
        Self {
            id: None,
            wishlist_id,
            product_id,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: i64, wishlist_id: i64, product_id: i64) -> Self {
        Self {
            id: Some(id),
            wishlist_id,
            product_id,
        }
    }
}
