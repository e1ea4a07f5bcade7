use std::collections::HashMap;

use axum::{
    extract::{Path, Query, State},
    Json,
};

use crate::common::ApiError;
use crate::domains::cars::actions as car_actions;
use crate::domains::cars::data::{CarData, CarListingData, CarListingOptionsData, FuelTypeData};
use crate::domains::cars::listing::ListingParams;
use crate::server::app::AppState;

/// Cars listing (`GET /app/cars?query=&sortKey=&direction=&fuelType=`)
pub async fn list_cars_handler(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<CarListingData>, ApiError> {
    let params = ListingParams::from_query_map(&query);
    let listing = car_actions::list_cars(&params, &state.db_pool).await?;
    Ok(Json(listing))
}

/// Single car (`GET /app/cars/:id`)
pub async fn get_car_handler(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<CarData>, ApiError> {
    car_actions::get_car(id, &state.db_pool)
        .await?
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("Car {} not found", id)))
}

/// Fuel types (`GET /app/fuel-types`)
pub async fn list_fuel_types_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<FuelTypeData>>, ApiError> {
    Ok(Json(car_actions::list_fuel_types(&state.db_pool).await?))
}

/// Static listing options (`GET /app/cars/options`)
pub async fn car_listing_options_handler() -> Json<CarListingOptionsData> {
    Json(CarListingOptionsData::current())
}
