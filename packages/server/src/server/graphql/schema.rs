//! GraphQL schema definition.

use super::context::GraphQLContext;
use juniper::{EmptyMutation, EmptySubscription, FieldError, FieldResult, RootNode};
use tracing::error;

use crate::domains::cars::actions as car_actions;
use crate::domains::cars::data::{CarData, CarListingData, CarListingOptionsData, FuelTypeData};
use crate::domains::cars::listing::ListingParams;

pub struct Query;

#[juniper::graphql_object(context = GraphQLContext)]
impl Query {
    /// Cars listing with free-text search, fuel type filter and sorting.
    ///
    /// Arguments mirror the listing page's query string:
    /// - query: substring of brand, license plate or driver name
    /// - sortKey: id, brand, licensePlate, year, driverName or fuelType (default id)
    /// - direction: asc or desc (default asc)
    /// - fuelType: comma separated fuel type names
    async fn cars(
        ctx: &GraphQLContext,
        query: Option<String>,
        sort_key: Option<String>,
        direction: Option<String>,
        fuel_type: Option<String>,
    ) -> FieldResult<CarListingData> {
        let params = ListingParams {
            query,
            sort_key,
            direction,
            fuel_type,
        };

        car_actions::list_cars(&params, &ctx.db_pool)
            .await
            .map_err(|e| {
                error!("Failed to list cars: {}", e);
                FieldError::new("Failed to list cars", juniper::Value::null())
            })
    }

    /// Get a single car by ID
    async fn car(ctx: &GraphQLContext, id: i32) -> FieldResult<Option<CarData>> {
        car_actions::get_car(id, &ctx.db_pool).await.map_err(|e| {
            error!("Failed to get car {}: {}", id, e);
            FieldError::new("Failed to get car", juniper::Value::null())
        })
    }

    /// All fuel types
    async fn fuel_types(ctx: &GraphQLContext) -> FieldResult<Vec<FuelTypeData>> {
        car_actions::list_fuel_types(&ctx.db_pool).await.map_err(|e| {
            error!("Failed to list fuel types: {}", e);
            FieldError::new("Failed to list fuel types", juniper::Value::null())
        })
    }

    /// Columns, sort options and fuel filter choices of the listing page
    fn car_listing_options() -> CarListingOptionsData {
        CarListingOptionsData::current()
    }
}

pub type Schema =
    RootNode<'static, Query, EmptyMutation<GraphQLContext>, EmptySubscription<GraphQLContext>>;

pub fn create_schema() -> Schema {
    Schema::new(Query, EmptyMutation::new(), EmptySubscription::new())
}
