use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;

/// Fuel type category (Diesel, Petrol, Electric)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct FuelType {
    pub id: i32,
    pub name: String,
}

impl FuelType {
    /// All fuel types, alphabetically
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Self>> {
        sqlx::query_as::<_, FuelType>("SELECT id, name FROM fuel_types ORDER BY name")
            .fetch_all(pool)
            .await
            .context("Failed to query fuel types")
    }

    /// Insert a fuel type, returning the existing row when the name is taken
    pub async fn find_or_create(name: &str, pool: &PgPool) -> Result<Self> {
        sqlx::query_as::<_, FuelType>(
            r#"
            INSERT INTO fuel_types (name)
            VALUES ($1)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING id, name
            "#,
        )
        .bind(name)
        .fetch_one(pool)
        .await
        .context("Failed to upsert fuel type")
    }
}
