//! Application setup and router configuration.

use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::server::graphql::{create_schema, Schema};
use crate::server::routes::{
    car_listing_options_handler, cart_transform_handler, get_car_handler,
    graphql_handler, graphql_playground, health_handler, list_cars_handler,
    list_fuel_types_handler, long_delivery_banner_handler,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub schema: Arc<Schema>,
}

impl AppState {
    pub fn new(db_pool: PgPool) -> Self {
        Self {
            db_pool,
            // GraphQL schema is built once and shared
            schema: Arc::new(create_schema()),
        }
    }
}

/// CORS layer for the configured origins; no origins means any origin.
fn cors_layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(origin = %origin, error = %e, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}

/// Build the Axum application router
pub fn build_app(pool: PgPool, allowed_origins: &[String]) -> Router {
    let state = AppState::new(pool);

    let mut router = Router::new().route("/graphql", post(graphql_handler));

    // GraphQL playground only in debug builds (development)
    #[cfg(debug_assertions)]
    {
        router = router.route("/graphql", get(graphql_playground));
    }

    router
        // Listing page
        .route("/app/cars", get(list_cars_handler))
        .route("/app/cars/options", get(car_listing_options_handler))
        .route("/app/cars/:id", get(get_car_handler))
        .route("/app/fuel-types", get(list_fuel_types_handler))
        // Checkout extensions
        .route("/extensions/cart-transform/run", post(cart_transform_handler))
        .route(
            "/extensions/long-delivery-banner/render",
            post(long_delivery_banner_handler),
        )
        .route("/health", get(health_handler))
        .layer(cors_layer(allowed_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
