//! Linked free product cart transform.
//!
//! A product can carry a `freeProductId` metafield pointing at another variant.
//! Every cart line for such a product is expanded into the paid variant at its
//! current price plus the linked variant at a zero price.

pub mod input;
pub mod output;
pub mod rule;

pub use input::{
    Cart, CartLine, CartLineCost, CartTransformInput, Merchandise, MetafieldValue, MoneyV2, Product,
    ProductVariant,
};
pub use output::{
    CartTransformResult, ExpandOperation, ExpandedItem, ExpandedItemPrice, FixedPricePerUnit,
    Operation, PriceAdjustment,
};
pub use rule::{evaluate, run, run_json};
