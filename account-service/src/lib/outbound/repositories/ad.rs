use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::ad::errors::AdError;
use crate::ad::models::Ad;
use crate::ad::models::AdId;
use crate::ad::ports::AdRepository;
use crate::domain::user::models::UserId;

pub struct PostgresAdRepository {
    pool: PgPool,
}

impl PostgresAdRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct AdRow {
    id: Uuid,
    title: String,
    image_url: String,
    description: String,
    posted_by: Uuid,
    active: bool,
    region: String,
    budget: f64,
    created_at: DateTime<Utc>,
    expires_at: Option<DateTime<Utc>>,
    view_count: i64,
    reward_per_view: f64,
    remaining_budget: f64,
}

impl From<AdRow> for Ad {
    fn from(row: AdRow) -> Self {
        Ad {
            id: AdId(row.id),
            title: row.title,
            image_url: row.image_url,
            description: row.description,
            posted_by: UserId(row.posted_by),
            active: row.active,
            region: row.region,
            budget: row.budget,
            created_at: row.created_at,
            expires_at: row.expires_at,
            view_count: row.view_count,
            reward_per_view: row.reward_per_view,
            remaining_budget: row.remaining_budget,
        }
    }
}

#[async_trait]
impl AdRepository for PostgresAdRepository {
    async fn create(&self, ad: Ad) -> Result<Ad, AdError> {
        sqlx::query(
            r#"
            INSERT INTO ads (
                id, title, image_url, description, posted_by, active, region,
                budget, created_at, expires_at, view_count, reward_per_view,
                remaining_budget
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            "#,
        )
        .bind(ad.id.0)
        .bind(&ad.title)
        .bind(&ad.image_url)
        .bind(&ad.description)
        .bind(ad.posted_by.0)
        .bind(ad.active)
        .bind(&ad.region)
        .bind(ad.budget)
        .bind(ad.created_at)
        .bind(ad.expires_at)
        .bind(ad.view_count)
        .bind(ad.reward_per_view)
        .bind(ad.remaining_budget)
        .execute(&self.pool)
        .await
        .map_err(|e| AdError::DatabaseError(e.to_string()))?;

        Ok(ad)
    }

    async fn find_by_id(&self, id: &AdId) -> Result<Option<Ad>, AdError> {
        let row = sqlx::query_as::<_, AdRow>(
            r#"
            SELECT id, title, image_url, description, posted_by, active, region,
                   budget, created_at, expires_at, view_count, reward_per_view,
                   remaining_budget
            FROM ads
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AdError::DatabaseError(e.to_string()))?;

        Ok(row.map(Ad::from))
    }

    async fn update(&self, ad: Ad) -> Result<Ad, AdError> {
        let result = sqlx::query(
            r#"
            UPDATE ads
            SET title = $2, image_url = $3, description = $4, active = $5,
                region = $6, budget = $7, view_count = $8, reward_per_view = $9,
                remaining_budget = $10
            WHERE id = $1
            "#,
        )
        .bind(ad.id.0)
        .bind(&ad.title)
        .bind(&ad.image_url)
        .bind(&ad.description)
        .bind(ad.active)
        .bind(&ad.region)
        .bind(ad.budget)
        .bind(ad.view_count)
        .bind(ad.reward_per_view)
        .bind(ad.remaining_budget)
        .execute(&self.pool)
        .await
        .map_err(|e| AdError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AdError::NotFound(ad.id.to_string()));
        }

        Ok(ad)
    }

    async fn delete(&self, id: &AdId) -> Result<(), AdError> {
        let result = sqlx::query(
            r#"
            DELETE FROM ads
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(|e| AdError::DatabaseError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AdError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
