use anyhow::Result;
use sqlx::PgPool;
use tracing::{debug, info};

use crate::domains::cars::data::{CarData, CarListingData, FuelTypeData, ListingViewData};
use crate::domains::cars::listing::{build_filter_spec, ListingParams, ListingView};
use crate::domains::cars::models::{Car, FuelType};

/// Run the listing page query for raw page parameters
pub async fn list_cars(params: &ListingParams, pool: &PgPool) -> Result<CarListingData> {
    let spec = build_filter_spec(params);
    debug!(?spec, "Built car listing filter");

    let cars = Car::find_filtered(&spec, pool).await?;
    info!(
        count = cars.len(),
        sort = %spec.sort.token(),
        filtered = !spec.is_unfiltered(),
        "Listed cars"
    );

    Ok(CarListingData {
        cars: cars.into_iter().map(CarData::from).collect(),
        view: ListingViewData::from(ListingView::new(params, &spec)),
    })
}

pub async fn get_car(id: i32, pool: &PgPool) -> Result<Option<CarData>> {
    Ok(Car::find_by_id(id, pool).await?.map(CarData::from))
}

pub async fn list_fuel_types(pool: &PgPool) -> Result<Vec<FuelTypeData>> {
    let fuel_types = FuelType::find_all(pool).await?;
    Ok(fuel_types.into_iter().map(FuelTypeData::from).collect())
}
