use serde_json::Value;
use tracing::warn;

use super::input::CartLine;

/// Metafield entry relevant to the rule: the product it is attached to and
/// its raw, still undecoded value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetafieldEntry {
    pub target_id: String,
    pub value: Option<String>,
}

impl MetafieldEntry {
    pub fn new(target_id: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            target_id: target_id.into(),
            value: Some(value.into()),
        }
    }
}

/// True only when the raw value decodes to the JSON literal `true`.
///
/// Decode failures are logged and treated as "not flagged".
pub fn is_long_delivery_value(raw: Option<&str>) -> bool {
    let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
        return false;
    };

    match serde_json::from_str::<Value>(raw) {
        Ok(value) => value == Value::Bool(true),
        Err(e) => {
            warn!(value = raw, error = %e, "Ignoring undecodable long_delivery metafield");
            false
        }
    }
}

/// Product ids whose metafield flags them as long delivery.
pub fn flagged_product_ids(metafields: &[MetafieldEntry]) -> Vec<&str> {
    metafields
        .iter()
        .filter(|entry| is_long_delivery_value(entry.value.as_deref()))
        .map(|entry| entry.target_id.as_str())
        .collect()
}

/// Suffix match between a cart line product id and a flagged target id.
///
/// The cart and the metafield subscription do not always agree on the id
/// namespace, so the cart id only has to end with the target id. A global
/// id target without a resource path (`gid://X123`) also matches a cart id
/// ending in `/X123`. Full global ids only match literally.
pub fn matches_product(product_id: &str, target_id: &str) -> bool {
    if product_id.ends_with(target_id) {
        return true;
    }

    match gid_resource_segment(target_id) {
        Some(resource) => product_id
            .strip_suffix(resource)
            .is_some_and(|prefix| prefix.ends_with('/')),
        None => false,
    }
}

fn gid_resource_segment(target_id: &str) -> Option<&str> {
    let resource = target_id.strip_prefix("gid://")?;
    (!resource.is_empty() && !resource.contains('/')).then_some(resource)
}

/// Whether any cart line belongs to a flagged product.
pub fn should_warn(cart_lines: &[CartLine], metafields: &[MetafieldEntry]) -> bool {
    let flagged = flagged_product_ids(metafields);
    if flagged.is_empty() {
        return false;
    }

    cart_lines.iter().any(|line| {
        flagged
            .iter()
            .any(|target_id| matches_product(line.product_id(), target_id))
    })
}
