use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Result returned to the checkout host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTransformResult {
    pub operations: Vec<Operation>,
}

impl CartTransformResult {
    /// Result that leaves the cart untouched.
    pub fn no_changes() -> Self {
        Self {
            operations: Vec::new(),
        }
    }
}

/// Cart mutation requested from the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operation {
    LineExpand(ExpandOperation),
}

/// Replaces one cart line with the listed items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandOperation {
    pub cart_line_id: String,
    pub expanded_cart_items: Vec<ExpandedItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedItem {
    pub merchandise_id: String,
    pub quantity: i32,
    pub price: ExpandedItemPrice,
}

impl ExpandedItem {
    /// Single unit of `merchandise_id` at a fixed unit price.
    pub fn fixed_price(merchandise_id: impl Into<String>, amount: Decimal) -> Self {
        Self {
            merchandise_id: merchandise_id.into(),
            quantity: 1,
            price: ExpandedItemPrice {
                adjustment: PriceAdjustment {
                    fixed_price_per_unit: FixedPricePerUnit { amount },
                },
            },
        }
    }

    pub fn unit_price(&self) -> Decimal {
        self.price.adjustment.fixed_price_per_unit.amount
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpandedItemPrice {
    pub adjustment: PriceAdjustment,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceAdjustment {
    pub fixed_price_per_unit: FixedPricePerUnit,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FixedPricePerUnit {
    pub amount: Decimal,
}
