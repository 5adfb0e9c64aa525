use serde::{Deserialize, Serialize};

use crate::protocol::{Sticker, StickerCombo, StickerPrice};

/// Label shown for stickers the service returned without an extracted name.
pub const UNKNOWN_STICKER_LABEL: &str = "Unknown Sticker";

/// Currency assumed when a price entry omits one.
pub const DEFAULT_CURRENCY: &str = "USD";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub const ALL: [SortOrder; 2] = [SortOrder::Asc, SortOrder::Desc];

    pub fn label(self) -> &'static str {
        match self {
            SortOrder::Asc => "Price: low to high",
            SortOrder::Desc => "Price: high to low",
        }
    }
}

/// Discrete price bucket used purely for display styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PriceTier {
    Low,
    Medium,
    High,
}

impl PriceTier {
    pub fn css_class(self) -> &'static str {
        match self {
            PriceTier::Low => "price-low",
            PriceTier::Medium => "price-medium",
            PriceTier::High => "price-high",
        }
    }
}

/// Tier boundaries. Strict comparison: a price exactly on a boundary falls
/// to the lower tier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TierThresholds {
    pub low: f64,
    pub high: f64,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            low: 1.0,
            high: 10.0,
        }
    }
}

impl TierThresholds {
    pub fn classify(&self, price: f64) -> PriceTier {
        if price > self.high {
            PriceTier::High
        } else if price > self.low {
            PriceTier::Medium
        } else {
            PriceTier::Low
        }
    }
}

/// Fully-defaulted form of a [`StickerCombo`], built immediately after
/// parsing so rendering never handles absent fields.
#[derive(Debug, Clone, PartialEq)]
pub struct ComboRecord {
    pub target_name: Option<String>,
    pub stickers: Vec<StickerRecord>,
    pub total_price: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StickerRecord {
    /// Short display name; never empty.
    pub display_name: String,
    /// Marketplace search name; falls back to `display_name`.
    pub full_name: String,
    pub rarity: Option<String>,
    pub tournament: Option<String>,
    /// Index-aligned price, when the service knew one.
    pub price: Option<PriceRecord>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    pub amount: f64,
    pub currency: String,
    pub market_url: Option<String>,
}

impl From<StickerPrice> for PriceRecord {
    fn from(price: StickerPrice) -> Self {
        Self {
            amount: price.price,
            currency: price
                .currency
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            market_url: price.market_url,
        }
    }
}

impl StickerRecord {
    fn from_parts(sticker: Sticker, price: Option<StickerPrice>) -> Self {
        let display_name = sticker
            .extracted_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| UNKNOWN_STICKER_LABEL.to_string());
        let full_name = sticker
            .full_name
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| display_name.clone());
        Self {
            display_name,
            full_name,
            rarity: sticker.rarity,
            tournament: sticker.tournament,
            price: price.map(PriceRecord::from),
        }
    }
}

impl From<StickerCombo> for ComboRecord {
    fn from(combo: StickerCombo) -> Self {
        // prices may be shorter than stickers; pad the tail with None
        // instead of trusting the two lengths to agree.
        let mut prices = combo.prices.into_iter();
        let stickers = combo
            .stickers
            .into_iter()
            .map(|sticker| StickerRecord::from_parts(sticker, prices.next()))
            .collect();
        Self {
            target_name: combo.target_name,
            stickers,
            total_price: combo.total_price.unwrap_or(0.0),
        }
    }
}
