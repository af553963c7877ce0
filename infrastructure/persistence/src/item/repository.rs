use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::item::model::Item;
use business::domain::item::repository::ItemRepository;

use super::entity::ItemEntity;
use crate::db::query_failed;

pub struct ItemRepositoryPostgres {
    pool: PgPool,
}

impl ItemRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for ItemRepositoryPostgres {
    async fn find_by_wishlist_id(&self, wishlist_id: i64) -> Result<Vec<Item>, RepositoryError> {
        let entities = sqlx::query_as::<_, ItemEntity>(
            "SELECT id, wishlist_id, product_id FROM items WHERE wishlist_id = $1 ORDER BY id",
        )
        .bind(wishlist_id)
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_wishlist_id_and_product_id(
        &self,
        wishlist_id: i64,
        product_id: i64,
    ) -> Result<Option<Item>, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemEntity>(
            "SELECT id, wishlist_id, product_id FROM items WHERE wishlist_id = $1 AND product_id = $2 ORDER BY id LIMIT 1",
        )
        .bind(wishlist_id)
        .bind(product_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn find_by_wishlist_id_and_item_id(
        &self,
        wishlist_id: i64,
        item_id: i64,
    ) -> Result<Option<Item>, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemEntity>(
            "SELECT id, wishlist_id, product_id FROM items WHERE wishlist_id = $1 AND id = $2",
        )
        .bind(wishlist_id)
        .bind(item_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn create(&self, item: &Item) -> Result<Item, RepositoryError> {
        let entity = sqlx::query_as::<_, ItemEntity>(
            "INSERT INTO items (wishlist_id, product_id) VALUES ($1, $2) RETURNING id, wishlist_id, product_id",
        )
        .bind(item.wishlist_id)
        .bind(item.product_id)
        .fetch_one(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(entity.into_domain())
    }

    async fn update(&self, item: &Item) -> Result<(), RepositoryError> {
        let id = item.id.ok_or(RepositoryError::Persistence)?;

        let result = sqlx::query("UPDATE items SET product_id = $2 WHERE id = $1")
            .bind(id)
            .bind(item.product_id)
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(())
    }

    async fn delete_by_wishlist_id(&self, wishlist_id: i64) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM items WHERE wishlist_id = $1")
            .bind(wishlist_id)
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(result.rows_affected())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::wishlist::repository::WishlistRepositoryPostgres;
    use business::application::item::add::AddItemUseCaseImpl;
    use business::domain::item::use_cases::add::{AddItemOutcome, AddItemParams, AddItemUseCase};
    use business::domain::wishlist::model::Wishlist;
    use business::domain::wishlist::repository::WishlistRepository;
    use logger::TracingLogger;

    async fn wishlist(pool: &PgPool) -> i64 {
        let wishlist = Wishlist::new("Summer".to_string(), 20).unwrap();
        WishlistRepositoryPostgres::new(pool.clone())
            .create(&wishlist)
            .await
            .unwrap()
            .id
            .unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn should_keep_single_row_when_same_product_added_twice(pool: PgPool) {
        let wishlist_id = wishlist(&pool).await;
        let use_case = AddItemUseCaseImpl {
            repository: Arc::new(ItemRepositoryPostgres::new(pool.clone())),
            wishlist_repository: Arc::new(WishlistRepositoryPostgres::new(pool.clone())),
            logger: Arc::new(TracingLogger::new("items")),
        };
        let params = || AddItemParams {
            wishlist_id,
            product_id: 42,
        };

        let first = use_case.execute(params()).await.unwrap();
        let second = use_case.execute(params()).await.unwrap();

        let AddItemOutcome::Created(created) = first else {
            panic!("first add should create the item");
        };
        assert_eq!(second, AddItemOutcome::AlreadyExists(created));
        let items = ItemRepositoryPostgres::new(pool)
            .find_by_wishlist_id(wishlist_id)
            .await
            .unwrap();
        assert_eq!(items.len(), 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn should_scope_item_lookup_to_its_wishlist(pool: PgPool) {
        let repository = ItemRepositoryPostgres::new(pool.clone());
        let owner = wishlist(&pool).await;
        let other = wishlist(&pool).await;
        let item = repository.create(&Item::new(owner, 42)).await.unwrap();
        let item_id = item.id.unwrap();

        assert_eq!(
            repository
                .find_by_wishlist_id_and_item_id(owner, item_id)
                .await
                .unwrap(),
            Some(item)
        );
        assert!(
            repository
                .find_by_wishlist_id_and_item_id(other, item_id)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn should_clear_only_items_of_given_wishlist(pool: PgPool) {
        let repository = ItemRepositoryPostgres::new(pool.clone());
        let cleared = wishlist(&pool).await;
        let untouched = wishlist(&pool).await;
        for product_id in [1, 2, 3] {
            repository.create(&Item::new(cleared, product_id)).await.unwrap();
        }
        repository.create(&Item::new(untouched, 1)).await.unwrap();

        let removed = repository.delete_by_wishlist_id(cleared).await.unwrap();

        assert_eq!(removed, 3);
        assert!(repository.find_by_wishlist_id(cleared).await.unwrap().is_empty());
        assert_eq!(repository.find_by_wishlist_id(untouched).await.unwrap().len(), 1);
    }
}
