use chrono::{DateTime, Utc};
use juniper::GraphQLObject;
use serde::{Deserialize, Serialize};

use crate::domains::cars::models::{Car, FuelType};

/// Fuel type GraphQL / JSON data type
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[serde(rename_all = "camelCase")]
#[graphql(description = "Fuel type category of a car")]
pub struct FuelTypeData {
    pub id: i32,
    pub name: String,
}

impl From<FuelType> for FuelTypeData {
    fn from(fuel_type: FuelType) -> Self {
        Self {
            id: fuel_type.id,
            name: fuel_type.name,
        }
    }
}

/// Car GraphQL / JSON data type
#[derive(Debug, Clone, Serialize, Deserialize, GraphQLObject)]
#[serde(rename_all = "camelCase")]
#[graphql(description = "A car in the fleet inventory")]
pub struct CarData {
    pub id: i32,
    pub brand: String,
    pub license_plate: String,
    pub year: i32,
    /// Assigned driver, if any
    pub driver_name: Option<String>,
    pub fuel_type: FuelTypeData,
    pub created_at: DateTime<Utc>,
}

impl From<Car> for CarData {
    fn from(car: Car) -> Self {
        Self {
            id: car.id,
            brand: car.brand,
            license_plate: car.license_plate,
            year: car.year,
            driver_name: car.driver_name,
            fuel_type: FuelTypeData::from(car.fuel_type),
            created_at: car.created_at,
        }
    }
}
