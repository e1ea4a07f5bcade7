use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payload handed to the cart transform by the checkout host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTransformInput {
    pub cart: Cart,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    #[serde(default)]
    pub lines: Vec<CartLine>,
}

/// One line of the cart as seen by the transform.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,
    pub merchandise: Merchandise,
    pub cost: CartLineCost,
}

/// Purchasable entity referenced by a cart line.
///
/// Only product variants can be expanded. Any other kind the host sends
/// (custom products, bundles) decodes into `Other`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "__typename")]
pub enum Merchandise {
    ProductVariant(ProductVariant),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductVariant {
    pub id: String,
    pub product: Product,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// `freeProductId` metafield; null when the product has no linked gift
    #[serde(default)]
    pub free_product_id: Option<MetafieldValue>,
}

impl Product {
    /// Linked free variant id exactly as the host sent it; blank values count
    /// as no link.
    pub fn linked_free_product_id(&self) -> Option<&str> {
        self.free_product_id
            .as_ref()
            .map(|metafield| metafield.value.as_str())
            .filter(|value| !value.trim().is_empty())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetafieldValue {
    pub value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineCost {
    pub amount_per_quantity: MoneyV2,
}

/// Money amount; the host sends decimals as strings (`"19.99"`) but plain
/// JSON numbers are accepted too.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoneyV2 {
    pub amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
}
