use crate::domain::errors::RepositoryError;

/// Raised when an untyped payload cannot be turned into a [`Wishlist`].
///
/// [`Wishlist`]: super::model::Wishlist
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataValidationError {
    #[error("Invalid attribute: {0}")]
    InvalidAttribute(String),
    #[error("Invalid Wishlist: missing {0}")]
    Missing(&'static str),
    #[error("Invalid Wishlist: body of request contained bad or no data {0}")]
    BadOrNoData(String),
    #[error("Invalid type for {expected} [{field}]: {received}")]
    InvalidType {
        field: &'static str,
        expected: &'static str,
        received: String,
    },
    #[error("Invalid Wishlist: name exceeds {max} characters")]
    NameTooLong { max: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum WishlistError {
    #[error(transparent)]
    Validation(#[from] DataValidationError),
    #[error("Wishlist with id '{0}' was not found.")]
    NotFound(i64),
    #[error("Wishlist with customer id '{0}' was not found.")]
    CustomerNotFound(i64),
    #[error("Wishlist with customer id '{customer_id}' and id '{wishlist_id}' was not found.")]
    NotOwnedByCustomer { customer_id: i64, wishlist_id: i64 },
    #[error("repository.persistence")]
    Repository(#[from] RepositoryError),
}
