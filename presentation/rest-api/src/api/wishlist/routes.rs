use std::sync::Arc;

use poem_openapi::{
    ApiResponse, OpenApi,
    param::{Path, Query},
    payload::Json,
};
use serde_json::Value;

use business::domain::wishlist::model::WishlistFilter;
use business::domain::wishlist::use_cases::clear::{ClearWishlistParams, ClearWishlistUseCase};
use business::domain::wishlist::use_cases::create::{CreateWishlistParams, CreateWishlistUseCase};
use business::domain::wishlist::use_cases::delete::{DeleteWishlistParams, DeleteWishlistUseCase};
use business::domain::wishlist::use_cases::get_all::{
    GetAllWishlistsParams, GetAllWishlistsUseCase,
};
use business::domain::wishlist::use_cases::get_by_customer::{
    GetWishlistsByCustomerParams, GetWishlistsByCustomerUseCase,
};
use business::domain::wishlist::use_cases::get_by_id::{
    GetWishlistByIdParams, GetWishlistByIdUseCase,
};
use business::domain::wishlist::use_cases::update::{UpdateWishlistParams, UpdateWishlistUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;
use crate::api::wishlist::dto::WishlistResponse;

pub struct WishlistApi {
    create_use_case: Arc<dyn CreateWishlistUseCase>,
    get_all_use_case: Arc<dyn GetAllWishlistsUseCase>,
    get_by_id_use_case: Arc<dyn GetWishlistByIdUseCase>,
    get_by_customer_use_case: Arc<dyn GetWishlistsByCustomerUseCase>,
    update_use_case: Arc<dyn UpdateWishlistUseCase>,
    delete_use_case: Arc<dyn DeleteWishlistUseCase>,
    clear_use_case: Arc<dyn ClearWishlistUseCase>,
}

impl WishlistApi {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        create_use_case: Arc<dyn CreateWishlistUseCase>,
        get_all_use_case: Arc<dyn GetAllWishlistsUseCase>,
        get_by_id_use_case: Arc<dyn GetWishlistByIdUseCase>,
        get_by_customer_use_case: Arc<dyn GetWishlistsByCustomerUseCase>,
        update_use_case: Arc<dyn UpdateWishlistUseCase>,
        delete_use_case: Arc<dyn DeleteWishlistUseCase>,
        clear_use_case: Arc<dyn ClearWishlistUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            get_by_id_use_case,
            get_by_customer_use_case,
            update_use_case,
            delete_use_case,
            clear_use_case,
        }
    }
}

/// Wishlist management API
///
/// Endpoints for creating, listing, renaming, clearing and deleting wishlists.
#[OpenApi]
impl WishlistApi {
    /// List wishlists
    ///
    /// Returns every wishlist with its items. `name` and `customer_id` narrow
    /// the result; when both are given both must match.
    #[oai(path = "/wishlists", method = "get", tag = "ApiTags::Wishlists")]
    async fn get_all(
        &self,
        name: Query<Option<String>>,
        customer_id: Query<Option<i64>>,
    ) -> ListWishlistsResponse {
        let params = GetAllWishlistsParams {
            filter: WishlistFilter::new(name.0, customer_id.0),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(wishlists) => {
                ListWishlistsResponse::Ok(Json(wishlists.into_iter().map(|w| w.into()).collect()))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListWishlistsResponse::InternalError(json)
            }
        }
    }

    /// Create a wishlist
    ///
    /// Body: `{"name": string, "customer_id": integer}`. Any other field is
    /// ignored; the new wishlist starts without items.
    #[oai(path = "/wishlists", method = "post", tag = "ApiTags::Wishlists")]
    async fn create(&self, body: Json<Value>) -> CreateWishlistResponse {
        match self
            .create_use_case
            .execute(CreateWishlistParams { data: body.0 })
            .await
        {
            Ok(wishlist) => match wishlist.id {
                Some(id) => CreateWishlistResponse::Created(
                    Json(wishlist.into()),
                    format!("/wishlists/{id}"),
                ),
                None => CreateWishlistResponse::InternalError(Json(ErrorResponse::new(
                    "InternalError",
                    "Created wishlist has no id",
                ))),
            },
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateWishlistResponse::BadRequest(json),
                    _ => CreateWishlistResponse::InternalError(json),
                }
            }
        }
    }

    /// List the wishlists of a customer
    ///
    /// Responds 404 when the customer owns no wishlist.
    #[oai(
        path = "/wishlists/customer/:customer_id",
        method = "get",
        tag = "ApiTags::Wishlists"
    )]
    async fn get_by_customer(&self, customer_id: Path<i64>) -> CustomerWishlistsResponse {
        match self
            .get_by_customer_use_case
            .execute(GetWishlistsByCustomerParams {
                customer_id: customer_id.0,
            })
            .await
        {
            Ok(wishlists) => CustomerWishlistsResponse::Ok(Json(
                wishlists.into_iter().map(|w| w.into()).collect(),
            )),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => CustomerWishlistsResponse::NotFound(json),
                    _ => CustomerWishlistsResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a wishlist by ID
    #[oai(path = "/wishlists/:id", method = "get", tag = "ApiTags::Wishlists")]
    async fn get_by_id(&self, id: Path<i64>) -> WishlistResult {
        let result = self
            .get_by_id_use_case
            .execute(GetWishlistByIdParams { id: id.0 })
            .await;

        WishlistResult::from_outcome(result.map_err(|e| e.into_error_response()))
    }

    /// Rename a wishlist
    ///
    /// Body: `{"name": string, "customer_id": integer}`. The wishlist must
    /// belong to `customer_id`, otherwise it is reported as not found.
    #[oai(path = "/wishlists/:id", method = "put", tag = "ApiTags::Wishlists")]
    async fn update(&self, id: Path<i64>, body: Json<Value>) -> WishlistResult {
        let result = self
            .update_use_case
            .execute(UpdateWishlistParams {
                id: id.0,
                data: body.0,
            })
            .await;

        WishlistResult::from_outcome(result.map_err(|e| e.into_error_response()))
    }

    /// Delete a wishlist
    ///
    /// Permanently removes the wishlist together with its items.
    #[oai(path = "/wishlists/:id", method = "delete", tag = "ApiTags::Wishlists")]
    async fn delete(&self, id: Path<i64>) -> DeleteWishlistResponse {
        match self
            .delete_use_case
            .execute(DeleteWishlistParams { id: id.0 })
            .await
        {
            Ok(()) => DeleteWishlistResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteWishlistResponse::NotFound(json),
                    _ => DeleteWishlistResponse::InternalError(json),
                }
            }
        }
    }

    /// Clear a wishlist
    ///
    /// Removes every item and returns the now empty wishlist.
    #[oai(
        path = "/wishlists/:id/clear",
        method = "put",
        tag = "ApiTags::Wishlists"
    )]
    async fn clear(&self, id: Path<i64>) -> WishlistResult {
        let result = self
            .clear_use_case
            .execute(ClearWishlistParams { id: id.0 })
            .await;

        WishlistResult::from_outcome(result.map_err(|e| e.into_error_response()))
    }
}

#[derive(ApiResponse)]
pub enum ListWishlistsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<WishlistResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum CreateWishlistResponse {
    #[oai(status = 201)]
    Created(
        Json<WishlistResponse>,
        #[oai(header = "Location")] String,
    ),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum CustomerWishlistsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<WishlistResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

/// Response of every endpoint that returns a single wishlist.
#[derive(ApiResponse)]
pub enum WishlistResult {
    #[oai(status = 200)]
    Ok(Json<WishlistResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl WishlistResult {
    fn from_outcome<T: Into<WishlistResponse>>(
        outcome: Result<T, (poem::http::StatusCode, Json<ErrorResponse>)>,
    ) -> Self {
        match outcome {
            Ok(wishlist) => WishlistResult::Ok(Json(wishlist.into())),
            Err((status, json)) => match status.as_u16() {
                400 => WishlistResult::BadRequest(json),
                404 => WishlistResult::NotFound(json),
                _ => WishlistResult::InternalError(json),
            },
        }
    }
}

#[derive(ApiResponse)]
pub enum DeleteWishlistResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
