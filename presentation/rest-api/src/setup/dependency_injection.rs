use std::sync::Arc;

use logger::TracingLogger;
use persistence::item::repository::ItemRepositoryPostgres;
use persistence::wishlist::repository::WishlistRepositoryPostgres;

use business::application::item::add::AddItemUseCaseImpl;
use business::application::item::delete::DeleteItemUseCaseImpl;
use business::application::item::get_all::GetAllItemsUseCaseImpl;
use business::application::item::get_by_id::GetItemByIdUseCaseImpl;
use business::application::item::update::UpdateItemUseCaseImpl;
use business::application::wishlist::clear::ClearWishlistUseCaseImpl;
use business::application::wishlist::create::CreateWishlistUseCaseImpl;
use business::application::wishlist::delete::DeleteWishlistUseCaseImpl;
use business::application::wishlist::get_all::GetAllWishlistsUseCaseImpl;
use business::application::wishlist::get_by_customer::GetWishlistsByCustomerUseCaseImpl;
use business::application::wishlist::get_by_id::GetWishlistByIdUseCaseImpl;
use business::application::wishlist::update::UpdateWishlistUseCaseImpl;

use crate::api::health::routes::Api as HealthApi;
use crate::api::item::routes::ItemApi;
use crate::api::wishlist::routes::WishlistApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub wishlist_api: WishlistApi,
    pub item_api: ItemApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool) -> Self {
        let wishlist_logger = Arc::new(TracingLogger::new("wishlists"));
        let item_logger = Arc::new(TracingLogger::new("items"));

        // Infrastructure adapters
        let wishlist_repository = Arc::new(WishlistRepositoryPostgres::new(pool.clone()));
        let item_repository = Arc::new(ItemRepositoryPostgres::new(pool));

        // Wishlist use cases
        let create_wishlist_use_case = Arc::new(CreateWishlistUseCaseImpl {
            repository: wishlist_repository.clone(),
            logger: wishlist_logger.clone(),
        });
        let get_all_wishlists_use_case = Arc::new(GetAllWishlistsUseCaseImpl {
            repository: wishlist_repository.clone(),
            item_repository: item_repository.clone(),
            logger: wishlist_logger.clone(),
        });
        let get_wishlist_by_id_use_case = Arc::new(GetWishlistByIdUseCaseImpl {
            repository: wishlist_repository.clone(),
            item_repository: item_repository.clone(),
            logger: wishlist_logger.clone(),
        });
        let get_wishlists_by_customer_use_case = Arc::new(GetWishlistsByCustomerUseCaseImpl {
            repository: wishlist_repository.clone(),
            item_repository: item_repository.clone(),
            logger: wishlist_logger.clone(),
        });
        let update_wishlist_use_case = Arc::new(UpdateWishlistUseCaseImpl {
            repository: wishlist_repository.clone(),
            item_repository: item_repository.clone(),
            logger: wishlist_logger.clone(),
        });
        let delete_wishlist_use_case = Arc::new(DeleteWishlistUseCaseImpl {
            repository: wishlist_repository.clone(),
            logger: wishlist_logger.clone(),
        });
        let clear_wishlist_use_case = Arc::new(ClearWishlistUseCaseImpl {
            repository: wishlist_repository.clone(),
            item_repository: item_repository.clone(),
            logger: wishlist_logger.clone(),
        });

        // Item use cases
        let get_all_items_use_case = Arc::new(GetAllItemsUseCaseImpl {
            repository: item_repository.clone(),
            wishlist_repository: wishlist_repository.clone(),
            logger: item_logger.clone(),
        });
        let add_item_use_case = Arc::new(AddItemUseCaseImpl {
            repository: item_repository.clone(),
            wishlist_repository: wishlist_repository.clone(),
            logger: item_logger.clone(),
        });
        let get_item_by_id_use_case = Arc::new(GetItemByIdUseCaseImpl {
            repository: item_repository.clone(),
            wishlist_repository: wishlist_repository.clone(),
            logger: item_logger.clone(),
        });
        let update_item_use_case = Arc::new(UpdateItemUseCaseImpl {
            repository: item_repository.clone(),
            wishlist_repository: wishlist_repository.clone(),
            logger: item_logger.clone(),
        });
        let delete_item_use_case = Arc::new(DeleteItemUseCaseImpl {
            repository: item_repository,
            wishlist_repository,
            logger: item_logger,
        });

        let wishlist_api = WishlistApi::new(
            create_wishlist_use_case,
            get_all_wishlists_use_case,
            get_wishlist_by_id_use_case,
            get_wishlists_by_customer_use_case,
            update_wishlist_use_case,
            delete_wishlist_use_case,
            clear_wishlist_use_case,
        );

        let item_api = ItemApi::new(
            get_all_items_use_case,
            add_item_use_case,
            get_item_by_id_use_case,
            update_item_use_case,
            delete_item_use_case,
        );

        Self {
            health_api: HealthApi::new(),
            wishlist_api,
            item_api,
        }
    }
}
