use rust_decimal::Decimal;
use tracing::debug;

use super::input::{CartLine, CartTransformInput, Merchandise};
use super::output::{CartTransformResult, ExpandOperation, ExpandedItem, Operation};
use crate::error::{ExtensionError, Result};

/// Decide whether a single cart line should be expanded.
///
/// Returns the expansion for a product variant whose product links a free
/// variant: the original variant at its current unit price, then the free
/// variant at zero. Anything else is a no-op.
pub fn evaluate(line: &CartLine) -> Option<ExpandOperation> {
    let Merchandise::ProductVariant(variant) = &line.merchandise else {
        return None;
    };
    let free_product_id = variant.product.linked_free_product_id()?;

    Some(ExpandOperation {
        cart_line_id: line.id.clone(),
        expanded_cart_items: vec![
            ExpandedItem::fixed_price(
                variant.id.as_str(),
                line.cost.amount_per_quantity.amount,
            ),
            ExpandedItem::fixed_price(free_product_id, Decimal::ZERO),
        ],
    })
}

/// Evaluate every cart line, keeping cart order.
pub fn run(input: &CartTransformInput) -> CartTransformResult {
    let operations: Vec<Operation> = input
        .cart
        .lines
        .iter()
        .filter_map(evaluate)
        .map(Operation::LineExpand)
        .collect();

    debug!(
        lines = input.cart.lines.len(),
        operations = operations.len(),
        "Cart transform evaluated"
    );

    if operations.is_empty() {
        return CartTransformResult::no_changes();
    }

    CartTransformResult { operations }
}

/// Decode a host payload, run the transform and encode the result.
pub fn run_json(payload: &str) -> Result<String> {
    let input: CartTransformInput =
        serde_json::from_str(payload).map_err(ExtensionError::InvalidInput)?;
    serde_json::to_string(&run(&input)).map_err(ExtensionError::Encode)
}
