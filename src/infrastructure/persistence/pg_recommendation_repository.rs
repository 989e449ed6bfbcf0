//! PostgreSQL implementation of recommendation repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Recommendation, RecommendationAttributes};
use crate::domain::repositories::RecommendationRepository;
use crate::error::AppError;
use serde_json::json;

// `where` is an SQL keyword and must stay quoted.
const COLUMNS: &str = r#"id, quote, who, who_url, "where", where_url, position, company, company_url, created_at, updated_at"#;

#[derive(Debug, sqlx::FromRow)]
struct RecommendationRow {
    id: i64,
    quote: String,
    who: String,
    who_url: Option<String>,
    #[sqlx(rename = "where")]
    place: String,
    where_url: String,
    position: Option<String>,
    company: Option<String>,
    company_url: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<RecommendationRow> for Recommendation {
    fn from(r: RecommendationRow) -> Self {
        Recommendation::new(
            r.id,
            RecommendationAttributes {
                quote: r.quote,
                who: r.who,
                who_url: r.who_url,
                r#where: r.place,
                where_url: r.where_url,
                position: r.position,
                company: r.company,
                company_url: r.company_url,
            },
            r.created_at,
            r.updated_at,
        )
    }
}

/// PostgreSQL repository for recommendations.
///
/// Uses runtime-checked SQLx queries with bound parameters.
pub struct PgRecommendationRepository {
    pool: Arc<PgPool>,
}

impl PgRecommendationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecommendationRepository for PgRecommendationRepository {
    async fn create(
        &self,
        attributes: RecommendationAttributes,
    ) -> Result<Recommendation, AppError> {
        let sql = format!(
            r#"
            INSERT INTO recommendations
                (quote, who, who_url, "where", where_url, position, company, company_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, RecommendationRow>(&sql)
            .bind(attributes.quote)
            .bind(attributes.who)
            .bind(attributes.who_url)
            .bind(attributes.r#where)
            .bind(attributes.where_url)
            .bind(attributes.position)
            .bind(attributes.company)
            .bind(attributes.company_url)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Recommendation>, AppError> {
        let sql = format!("SELECT {COLUMNS} FROM recommendations WHERE id = $1");

        let row = sqlx::query_as::<_, RecommendationRow>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?;

        Ok(row.map(Recommendation::from))
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Recommendation>, AppError> {
        let sql = format!(
            r#"
            SELECT {COLUMNS}
            FROM recommendations
            ORDER BY created_at DESC, id DESC
            LIMIT $1 OFFSET $2
            "#
        );

        let rows = sqlx::query_as::<_, RecommendationRow>(&sql)
            .bind(limit)
            .bind(offset)
            .fetch_all(self.pool.as_ref())
            .await?;

        Ok(rows.into_iter().map(Recommendation::from).collect())
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recommendations")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(
        &self,
        id: i64,
        attributes: RecommendationAttributes,
    ) -> Result<Recommendation, AppError> {
        let sql = format!(
            r#"
            UPDATE recommendations SET
                quote       = $2,
                who         = $3,
                who_url     = $4,
                "where"     = $5,
                where_url   = $6,
                position    = $7,
                company     = $8,
                company_url = $9,
                updated_at  = NOW()
            WHERE id = $1
            RETURNING {COLUMNS}
            "#
        );

        let row = sqlx::query_as::<_, RecommendationRow>(&sql)
            .bind(id)
            .bind(attributes.quote)
            .bind(attributes.who)
            .bind(attributes.who_url)
            .bind(attributes.r#where)
            .bind(attributes.where_url)
            .bind(attributes.position)
            .bind(attributes.company)
            .bind(attributes.company_url)
            .fetch_optional(self.pool.as_ref())
            .await?;

        row.map(Recommendation::from)
            .ok_or_else(|| AppError::not_found("Recommendation not found", json!({"id": id})))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM recommendations WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Recommendation not found",
                json!({"id": id}),
            ));
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
