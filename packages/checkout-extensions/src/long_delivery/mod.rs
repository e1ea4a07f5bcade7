//! Long delivery warning shown at checkout.
//!
//! Products flagged with the `custom.long_delivery` metafield make the
//! checkout show a dismissible warning banner.

pub mod banner;
pub mod input;
pub mod rule;

pub use banner::{render, render_json, Banner, BannerTone, MetafieldQuery, LONG_DELIVERY_METAFIELD};
pub use input::{
    AppMetafield, AppMetafieldEntry, CartLine, CartLineMerchandise, LongDeliveryInput, MetafieldTarget,
    ProductRef,
};
pub use rule::{flagged_product_ids, is_long_delivery_value, matches_product, should_warn, MetafieldEntry};
