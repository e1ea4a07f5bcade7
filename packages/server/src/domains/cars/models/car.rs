use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{PgPool, Postgres, QueryBuilder};

use super::fuel_type::FuelType;
use crate::domains::cars::listing::{FilterSpec, SortKey};

/// Car in the fleet inventory, joined with its fuel type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: i32,
    pub brand: String,
    pub license_plate: String,
    pub year: i32,
    pub driver_name: Option<String>,
    pub fuel_type: FuelType,
    pub created_at: DateTime<Utc>,
}

/// Flat row of `cars` joined with `fuel_types`
#[derive(Debug, Clone, sqlx::FromRow)]
struct CarRow {
    id: i32,
    brand: String,
    license_plate: String,
    year: i32,
    driver_name: Option<String>,
    created_at: DateTime<Utc>,
    fuel_type_id: i32,
    fuel_type_name: String,
}

impl From<CarRow> for Car {
    fn from(row: CarRow) -> Self {
        Self {
            id: row.id,
            brand: row.brand,
            license_plate: row.license_plate,
            year: row.year,
            driver_name: row.driver_name,
            fuel_type: FuelType {
                id: row.fuel_type_id,
                name: row.fuel_type_name,
            },
            created_at: row.created_at,
        }
    }
}

/// Fields for inserting a car
#[derive(Debug, Clone)]
pub struct NewCar {
    pub brand: String,
    pub license_plate: String,
    pub year: i32,
    pub driver_name: Option<String>,
    pub fuel_type_id: i32,
}

const SELECT_CARS: &str = "SELECT c.id, c.brand, c.license_plate, c.year, c.driver_name, \
     c.created_at, ft.id AS fuel_type_id, ft.name AS fuel_type_name \
     FROM cars c INNER JOIN fuel_types ft ON ft.id = c.fuel_type_id";

/// Build the listing query for a filter spec.
///
/// Column names come from the sort/text allow-lists; user text is always bound.
/// `strpos` keeps the match a plain case-sensitive substring test (no LIKE
/// wildcards), and a NULL driver name never matches.
pub fn listing_query(spec: &FilterSpec) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(SELECT_CARS);
    let mut has_where = false;

    if let Some(text) = &spec.text {
        query.push(" WHERE (");
        let mut any_field = query.separated(" OR ");
        for field in &text.fields {
            any_field.push(format!("strpos({}, ", field.column()));
            any_field.push_bind_unseparated(text.text.clone());
            any_field.push_unseparated(") > 0");
        }
        query.push(")");
        has_where = true;
    }

    if let Some(fuel_types) = &spec.fuel_types {
        query.push(if has_where { " AND " } else { " WHERE " });
        query.push("ft.name = ANY(");
        query.push_bind(fuel_types.names());
        query.push(")");
    }

    query.push(format!(
        " ORDER BY {} {}",
        spec.sort.key.column(),
        spec.sort.direction.sql()
    ));
    // Stable order for equal sort values
    if spec.sort.key != SortKey::Id {
        query.push(", c.id ASC");
    }

    query
}

impl Car {
    /// Cars matching the filter, in its sort order
    pub async fn find_filtered(spec: &FilterSpec, pool: &PgPool) -> Result<Vec<Self>> {
        let mut query = listing_query(spec);
        let rows = query
            .build_query_as::<CarRow>()
            .fetch_all(pool)
            .await
            .context("Failed to query cars")?;

        Ok(rows.into_iter().map(Car::from).collect())
    }

    pub async fn find_by_id(id: i32, pool: &PgPool) -> Result<Option<Self>> {
        let sql = format!("{} WHERE c.id = $1", SELECT_CARS);
        let row = sqlx::query_as::<_, CarRow>(&sql)
            .bind(id)
            .fetch_optional(pool)
            .await
            .context("Failed to query car by id")?;

        Ok(row.map(Car::from))
    }

    pub async fn create(car: NewCar, pool: &PgPool) -> Result<Self> {
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO cars (brand, license_plate, year, driver_name, fuel_type_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&car.brand)
        .bind(&car.license_plate)
        .bind(car.year)
        .bind(&car.driver_name)
        .bind(car.fuel_type_id)
        .fetch_one(pool)
        .await
        .context("Failed to insert car")?;

        Car::find_by_id(id, pool)
            .await?
            .context("Inserted car not found")
    }
}
