use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::wishlist::errors::WishlistError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for WishlistError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name) = match &self {
            WishlistError::Validation(_) => (StatusCode::BAD_REQUEST, "ValidationError"),
            WishlistError::NotFound(_)
            | WishlistError::CustomerNotFound(_)
            | WishlistError::NotOwnedByCustomer { .. } => (StatusCode::NOT_FOUND, "NotFound"),
            WishlistError::Repository(_) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError"),
        };

        (status, Json(ErrorResponse::new(name, self.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::errors::RepositoryError;
    use business::domain::wishlist::errors::DataValidationError;

    #[test]
    fn should_map_validation_to_bad_request() {
        let (status, json) =
            WishlistError::Validation(DataValidationError::Missing("name")).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "Invalid Wishlist: missing name");
    }

    #[test]
    fn should_map_every_lookup_failure_to_not_found() {
        for err in [
            WishlistError::NotFound(1),
            WishlistError::CustomerNotFound(2),
            WishlistError::NotOwnedByCustomer {
                customer_id: 2,
                wishlist_id: 1,
            },
        ] {
            let (status, json) = err.into_error_response();

            assert_eq!(status, StatusCode::NOT_FOUND);
            assert!(json.0.message.contains("was not found"));
        }
    }

    #[test]
    fn should_hide_repository_details() {
        let (status, json) =
            WishlistError::Repository(RepositoryError::DatabaseError).into_error_response();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json.0.message, "repository.persistence");
    }
}
