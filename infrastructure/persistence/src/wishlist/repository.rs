use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::wishlist::model::Wishlist;
use business::domain::wishlist::repository::WishlistRepository;

use super::entity::WishlistEntity;
use crate::db::query_failed;

pub struct WishlistRepositoryPostgres {
    pool: PgPool,
}

impl WishlistRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WishlistRepository for WishlistRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Wishlist>, RepositoryError> {
        let entities = sqlx::query_as::<_, WishlistEntity>(
            "SELECT id, name, customer_id FROM wishlists ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find(&self, id: i64) -> Result<Option<Wishlist>, RepositoryError> {
        let entity = sqlx::query_as::<_, WishlistEntity>(
            "SELECT id, name, customer_id FROM wishlists WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn find_by_name(&self, name: &str) -> Result<Vec<Wishlist>, RepositoryError> {
        let entities = sqlx::query_as::<_, WishlistEntity>(
            "SELECT id, name, customer_id FROM wishlists WHERE name = $1 ORDER BY id",
        )
        .bind(name)
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_customer_id(
        &self,
        customer_id: i64,
    ) -> Result<Vec<Wishlist>, RepositoryError> {
        let entities = sqlx::query_as::<_, WishlistEntity>(
            "SELECT id, name, customer_id FROM wishlists WHERE customer_id = $1 ORDER BY id",
        )
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn find_by_name_and_customer_id(
        &self,
        name: &str,
        customer_id: i64,
    ) -> Result<Vec<Wishlist>, RepositoryError> {
        let entities = sqlx::query_as::<_, WishlistEntity>(
            "SELECT id, name, customer_id FROM wishlists WHERE name = $1 AND customer_id = $2 ORDER BY id",
        )
        .bind(name)
        .bind(customer_id)
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn create(&self, wishlist: &Wishlist) -> Result<Wishlist, RepositoryError> {
        let entity = sqlx::query_as::<_, WishlistEntity>(
            "INSERT INTO wishlists (name, customer_id) VALUES ($1, $2) RETURNING id, name, customer_id",
        )
        .bind(&wishlist.name)
        .bind(wishlist.customer_id)
        .fetch_one(&self.pool)
        .await
        .map_err(query_failed)?;

        Ok(entity.into_domain())
    }

    async fn update(&self, wishlist: &Wishlist) -> Result<(), RepositoryError> {
        let id = wishlist.id.ok_or(RepositoryError::Persistence)?;

        let result = sqlx::query("UPDATE wishlists SET name = $2, customer_id = $3 WHERE id = $1")
            .bind(id)
            .bind(&wishlist.name)
            .bind(wishlist.customer_id)
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        // items go with it through ON DELETE CASCADE
        sqlx::query("DELETE FROM wishlists WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(query_failed)?;

        Ok(())
    }
}
