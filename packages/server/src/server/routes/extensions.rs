use axum::Json;
use checkout_extensions::cart_transform::{self, CartTransformInput, CartTransformResult};
use checkout_extensions::long_delivery::{self, Banner, LongDeliveryInput};
use tracing::info;

/// Cart transform run (`POST /extensions/cart-transform/run`)
pub async fn cart_transform_handler(
    Json(input): Json<CartTransformInput>,
) -> Json<CartTransformResult> {
    let result = cart_transform::run(&input);
    info!(
        lines = input.cart.lines.len(),
        operations = result.operations.len(),
        "Cart transform run"
    );
    Json(result)
}

/// Long delivery banner (`POST /extensions/long-delivery-banner/render`)
///
/// Responds with the banner to show, or `null`.
pub async fn long_delivery_banner_handler(
    Json(input): Json<LongDeliveryInput>,
) -> Json<Option<Banner>> {
    Json(long_delivery::render(&input))
}
