use std::sync::Arc;

use poem_openapi::{ApiResponse, OpenApi, param::Path, payload::Json};

use business::domain::item::use_cases::add::{AddItemOutcome, AddItemParams, AddItemUseCase};
use business::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use business::domain::item::use_cases::get_all::{GetAllItemsParams, GetAllItemsUseCase};
use business::domain::item::use_cases::get_by_id::{GetItemByIdParams, GetItemByIdUseCase};
use business::domain::item::use_cases::update::{UpdateItemParams, UpdateItemUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::item::dto::{ItemRequest, ItemResponse};
use crate::api::tags::ApiTags;

pub struct ItemApi {
    get_all_use_case: Arc<dyn GetAllItemsUseCase>,
    add_use_case: Arc<dyn AddItemUseCase>,
    get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
    update_use_case: Arc<dyn UpdateItemUseCase>,
    delete_use_case: Arc<dyn DeleteItemUseCase>,
}

impl ItemApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllItemsUseCase>,
        add_use_case: Arc<dyn AddItemUseCase>,
        get_by_id_use_case: Arc<dyn GetItemByIdUseCase>,
        update_use_case: Arc<dyn UpdateItemUseCase>,
        delete_use_case: Arc<dyn DeleteItemUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            add_use_case,
            get_by_id_use_case,
            update_use_case,
            delete_use_case,
        }
    }
}

/// Wishlist item API
///
/// Items are always addressed through their wishlist.
#[OpenApi]
impl ItemApi {
    /// List the items of a wishlist
    #[oai(path = "/wishlists/:id/items", method = "get", tag = "ApiTags::Items")]
    async fn get_all(&self, id: Path<i64>) -> ListItemsResponse {
        match self
            .get_all_use_case
            .execute(GetAllItemsParams { wishlist_id: id.0 })
            .await
        {
            Ok(items) => ListItemsResponse::Ok(Json(items.into_iter().map(|i| i.into()).collect())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ListItemsResponse::NotFound(json),
                    _ => ListItemsResponse::InternalError(json),
                }
            }
        }
    }

    /// Add a product to a wishlist
    ///
    /// Adding a product that is already present returns the existing item
    /// with 200 instead of creating a duplicate.
    #[oai(path = "/wishlists/:id/items", method = "post", tag = "ApiTags::Items")]
    async fn add(&self, id: Path<i64>, body: Json<ItemRequest>) -> AddItemResponse {
        let params = AddItemParams {
            wishlist_id: id.0,
            product_id: body.0.product_id,
        };

        match self.add_use_case.execute(params).await {
            Ok(AddItemOutcome::Created(item)) => AddItemResponse::Created(Json(item.into())),
            Ok(AddItemOutcome::AlreadyExists(item)) => AddItemResponse::Ok(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => AddItemResponse::NotFound(json),
                    _ => AddItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Get an item of a wishlist
    #[oai(
        path = "/wishlists/:id/items/:item_id",
        method = "get",
        tag = "ApiTags::Items"
    )]
    async fn get_by_id(&self, id: Path<i64>, item_id: Path<i64>) -> ItemResult {
        let result = self
            .get_by_id_use_case
            .execute(GetItemByIdParams {
                wishlist_id: id.0,
                item_id: item_id.0,
            })
            .await;

        match result {
            Ok(item) => ItemResult::Ok(Json(item.into())),
            Err(err) => ItemResult::from_error(err.into_error_response()),
        }
    }

    /// Replace the product of an item
    #[oai(
        path = "/wishlists/:id/items/:item_id",
        method = "put",
        tag = "ApiTags::Items"
    )]
    async fn update(
        &self,
        id: Path<i64>,
        item_id: Path<i64>,
        body: Json<ItemRequest>,
    ) -> ItemResult {
        let result = self
            .update_use_case
            .execute(UpdateItemParams {
                wishlist_id: id.0,
                item_id: item_id.0,
                product_id: body.0.product_id,
            })
            .await;

        match result {
            Ok(item) => ItemResult::Ok(Json(item.into())),
            Err(err) => ItemResult::from_error(err.into_error_response()),
        }
    }

    /// Remove an item from a wishlist
    #[oai(
        path = "/wishlists/:id/items/:item_id",
        method = "delete",
        tag = "ApiTags::Items"
    )]
    async fn delete(&self, id: Path<i64>, item_id: Path<i64>) -> DeleteItemResponse {
        match self
            .delete_use_case
            .execute(DeleteItemParams {
                wishlist_id: id.0,
                item_id: item_id.0,
            })
            .await
        {
            Ok(()) => DeleteItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteItemResponse::NotFound(json),
                    _ => DeleteItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(ApiResponse)]
pub enum ListItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<ItemResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum AddItemResponse {
    /// The product was already in the wishlist
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 201)]
    Created(Json<ItemResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(ApiResponse)]
pub enum ItemResult {
    #[oai(status = 200)]
    Ok(Json<ItemResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

impl ItemResult {
    fn from_error((status, json): (poem::http::StatusCode, Json<ErrorResponse>)) -> Self {
        match status.as_u16() {
            404 => ItemResult::NotFound(json),
            _ => ItemResult::InternalError(json),
        }
    }
}

#[derive(ApiResponse)]
pub enum DeleteItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
