//! Test fixtures for creating test data.
//!
//! Tests share one database, so every fixture brand carries a unique marker
//! and assertions filter on it.

use std::sync::atomic::{AtomicU32, Ordering};

use anyhow::Result;
use server_core::domains::cars::models::{Car, FuelType, NewCar};
use sqlx::PgPool;

static NEXT_MARKER: AtomicU32 = AtomicU32::new(1);

/// Unique token to scope a test's fixtures (`"Mk<pid>n<counter>"`)
pub fn unique_marker() -> String {
    format!(
        "Mk{}n{}",
        std::process::id(),
        NEXT_MARKER.fetch_add(1, Ordering::Relaxed)
    )
}

/// Insert a car, creating its fuel type when it is not seeded
pub async fn create_test_car(
    pool: &PgPool,
    brand: &str,
    license_plate: &str,
    year: i32,
    driver_name: Option<&str>,
    fuel_type: &str,
) -> Result<Car> {
    let fuel_type = FuelType::find_or_create(fuel_type, pool).await?;

    Car::create(
        NewCar {
            brand: brand.to_string(),
            license_plate: license_plate.to_string(),
            year,
            driver_name: driver_name.map(str::to_string),
            fuel_type_id: fuel_type.id,
        },
        pool,
    )
    .await
}
