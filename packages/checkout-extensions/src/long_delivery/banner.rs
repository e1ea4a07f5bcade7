use serde::{Deserialize, Serialize};
use tracing::debug;

use super::input::{AppMetafieldEntry, LongDeliveryInput};
use super::rule::{should_warn, MetafieldEntry};
use crate::error::{ExtensionError, Result};

/// Which app metafields the banner subscribes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetafieldQuery {
    pub owner_type: &'static str,
    pub namespace: &'static str,
    pub key: &'static str,
}

pub const LONG_DELIVERY_METAFIELD: MetafieldQuery = MetafieldQuery {
    owner_type: "product",
    namespace: "custom",
    key: "long_delivery",
};

impl MetafieldQuery {
    pub fn matches(&self, entry: &AppMetafieldEntry) -> bool {
        entry.target.owner_type == self.owner_type
            && entry
                .metafield
                .as_ref()
                .is_some_and(|m| m.namespace == self.namespace && m.key == self.key)
    }

    /// Narrow host entries down to the ones this query selects.
    ///
    /// Entries without a target id are dropped.
    pub fn select(&self, entries: &[AppMetafieldEntry]) -> Vec<MetafieldEntry> {
        entries
            .iter()
            .filter(|entry| !entry.target.id.is_empty() && self.matches(entry))
            .map(|entry| MetafieldEntry {
                target_id: entry.target.id.clone(),
                value: entry.metafield.as_ref().and_then(|m| m.value.clone()),
            })
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerTone {
    Info,
    Success,
    Warning,
    Critical,
}

/// Banner content the host should render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
    pub heading: String,
    pub body: String,
    pub tone: BannerTone,
    pub dismissible: bool,
}

impl Banner {
    pub fn long_delivery() -> Self {
        Self {
            heading: "Some items in your order have long delivery times.".to_string(),
            body: "Please check estimated delivery time before placing the order.".to_string(),
            tone: BannerTone::Warning,
            dismissible: true,
        }
    }
}

/// Banner to show for the given checkout state, if any.
pub fn render(input: &LongDeliveryInput) -> Option<Banner> {
    let metafields = LONG_DELIVERY_METAFIELD.select(&input.app_metafields);
    let warn = should_warn(&input.cart_lines, &metafields);

    debug!(
        cart_lines = input.cart_lines.len(),
        metafields = metafields.len(),
        warn,
        "Long delivery banner evaluated"
    );

    warn.then(Banner::long_delivery)
}

/// Decode a host payload and encode the banner (`null` when hidden).
pub fn render_json(payload: &str) -> Result<String> {
    let input: LongDeliveryInput =
        serde_json::from_str(payload).map_err(ExtensionError::InvalidInput)?;
    serde_json::to_string(&render(&input)).map_err(ExtensionError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::long_delivery::input::{AppMetafield, CartLine, MetafieldTarget};

    fn entry(owner_type: &str, namespace: &str, key: &str, id: &str, value: &str) -> AppMetafieldEntry {
        AppMetafieldEntry {
            target: MetafieldTarget {
                owner_type: owner_type.to_string(),
                id: id.to_string(),
            },
            metafield: Some(AppMetafield {
                namespace: namespace.to_string(),
                key: key.to_string(),
                value: Some(value.to_string()),
            }),
        }
    }

    #[test]
    fn test_select_ignores_other_metafields() {
        let entries = vec![
            entry("product", "custom", "long_delivery", "1", "true"),
            entry("product", "custom", "gift_wrap", "2", "true"),
            entry("variant", "custom", "long_delivery", "3", "true"),
            entry("product", "app", "long_delivery", "4", "true"),
        ];

        let selected = LONG_DELIVERY_METAFIELD.select(&entries);

        assert_eq!(selected, vec![MetafieldEntry::new("1", "true")]);
    }

    #[test]
    fn test_render_shows_warning_banner() {
        let input = LongDeliveryInput {
            cart_lines: vec![CartLine::for_product("gid://shopify/Product/77")],
            app_metafields: vec![entry("product", "custom", "long_delivery", "gid://shopify/Product/77", "true")],
        };

        let banner = render(&input).unwrap();

        assert_eq!(banner.tone, BannerTone::Warning);
        assert!(banner.dismissible);
        assert_eq!(banner.heading, "Some items in your order have long delivery times.");
    }

    #[test]
    fn test_render_hidden_for_unrelated_metafield() {
        let input = LongDeliveryInput {
            cart_lines: vec![CartLine::for_product("gid://shopify/Product/77")],
            app_metafields: vec![entry("product", "custom", "gift_wrap", "gid://shopify/Product/77", "true")],
        };

        assert!(render(&input).is_none());
    }

    #[test]
    fn test_incomplete_entries_are_skipped() {
        let payload = r#"{
            "cartLines": [{ "merchandise": { "product": { "id": "gid://shopify/Product/77" } } }],
            "appMetafields": [
                { "target": { "id": "gid://shopify/Product/77" },
                  "metafield": { "namespace": "custom", "key": "long_delivery", "value": "true" } },
                { "target": { "type": "product" },
                  "metafield": { "namespace": "custom", "key": "long_delivery", "value": "true" } },
                { "target": { "type": "product", "id": "gid://shopify/Product/77" },
                  "metafield": { "value": "true" } }
            ]
        }"#;

        assert_eq!(render_json(payload).unwrap(), "null");
    }
}
