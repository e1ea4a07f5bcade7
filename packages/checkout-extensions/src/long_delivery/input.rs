use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Payload handed to the banner by the checkout host.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LongDeliveryInput {
    #[serde(default)]
    pub cart_lines: Vec<CartLine>,
    #[serde(default)]
    pub app_metafields: Vec<AppMetafieldEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub merchandise: CartLineMerchandise,
}

impl CartLine {
    pub fn for_product(product_id: impl Into<String>) -> Self {
        Self {
            merchandise: CartLineMerchandise {
                product: ProductRef {
                    id: product_id.into(),
                },
            },
        }
    }

    pub fn product_id(&self) -> &str {
        &self.merchandise.product.id
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineMerchandise {
    pub product: ProductRef,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRef {
    pub id: String,
}

/// Metafield entry as delivered by the host's app metafield subscription.
///
/// Missing descriptor fields decode as empty strings, so an incomplete entry
/// is dropped by the metafield query instead of failing the whole payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppMetafieldEntry {
    #[serde(default)]
    pub target: MetafieldTarget,
    #[serde(default)]
    pub metafield: Option<AppMetafield>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetafieldTarget {
    #[serde(default, rename = "type")]
    pub owner_type: String,
    #[serde(default)]
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppMetafield {
    #[serde(default)]
    pub namespace: String,
    #[serde(default)]
    pub key: String,
    /// Raw metafield payload. Non-string JSON is kept as its JSON text so a
    /// host sending `true` instead of `"true"` is still understood.
    #[serde(default, deserialize_with = "raw_text")]
    pub value: Option<String>,
}

fn raw_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    })
}
