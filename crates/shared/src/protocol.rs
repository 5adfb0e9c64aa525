use serde::{Deserialize, Serialize};

use crate::domain::SortOrder;

/// Body of `POST /api/stickers/generate`. The service matches names
/// case-insensitively and interprets `sortOrder` itself; the client never
/// re-sorts what comes back.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NameRequest {
    pub name: String,
    #[serde(default)]
    pub sort_order: SortOrder,
}

/// One candidate grouping of stickers approximating the queried name.
///
/// `prices` aligns by index with `stickers` but may be shorter or missing
/// entirely; an absent price is valid data, not a malformed record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StickerCombo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_name: Option<String>,
    #[serde(default)]
    pub stickers: Vec<Sticker>,
    #[serde(default)]
    pub prices: Vec<StickerPrice>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_price: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Sticker {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extracted_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tournament: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StickerPrice {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sticker_name: Option<String>,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_request_uses_camel_case_wire_names() {
        let body = serde_json::to_value(NameRequest {
            name: "DRAGON LORE".to_string(),
            sort_order: SortOrder::Desc,
        })
        .expect("serialize");
        assert_eq!(
            body,
            serde_json::json!({ "name": "DRAGON LORE", "sortOrder": "desc" })
        );
    }

    #[test]
    fn combo_tolerates_sparse_payloads() {
        let combo: StickerCombo = serde_json::from_str("{}").expect("parse");
        assert!(combo.stickers.is_empty());
        assert!(combo.prices.is_empty());
        assert_eq!(combo.total_price, None);

        let combo: StickerCombo = serde_json::from_str(
            r#"{"stickers":[{"extractedName":"Howl"}],"totalPrice":2.5}"#,
        )
        .expect("parse");
        assert_eq!(combo.stickers.len(), 1);
        assert_eq!(combo.stickers[0].extracted_name.as_deref(), Some("Howl"));
        assert!(combo.prices.is_empty());
        assert_eq!(combo.total_price, Some(2.5));
    }
}
