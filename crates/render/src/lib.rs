//! Pure presentation of normalized combination records: card view models,
//! marketplace links, and HTML serialization. No I/O and no document
//! handles, so everything here is unit-testable.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use shared::domain::{ComboRecord, PriceTier, StickerRecord, TierThresholds};

pub mod markup;

use markup::{escape, Element, Node};

/// Steam catalog id for CS:GO / CS2 market listings.
pub const STEAM_APP_ID: u32 = 730;

pub const MARKET_SEARCH_BASE: &str = "https://steamcommunity.com/market/search";

// encodeURIComponent leaves A-Z a-z 0-9 - _ . ! ~ * ' ( ) unescaped;
// everything else (space, '|', ...) becomes %XX.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Market search deep link for a sticker's full name.
pub fn market_search_url(full_name: &str) -> String {
    format!(
        "{MARKET_SEARCH_BASE}?appid={STEAM_APP_ID}&q={}",
        utf8_percent_encode(full_name, QUERY_ENCODE_SET)
    )
}

/// A combination of size one means the exact queried name exists as a
/// single sticker; anything larger is an approximation built from parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardLabel {
    ExactMatch,
    Alternative,
    NoStickers,
}

impl CardLabel {
    pub fn heading(self) -> &'static str {
        match self {
            CardLabel::ExactMatch => "Exact match",
            CardLabel::Alternative => "Alternative combination",
            CardLabel::NoStickers => "No stickers",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StickerCard {
    pub display_name: String,
    pub full_name: String,
    pub rarity: Option<String>,
    pub tournament: Option<String>,
    pub market_url: String,
    pub tier: PriceTier,
    /// `Some("$1500.50 USD")` when a price is known, `None` otherwise.
    pub price_display: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ComboCard {
    /// 1-based display number; result order is preserved exactly.
    pub number: usize,
    pub label: CardLabel,
    pub stickers: Vec<StickerCard>,
    /// Always two decimals, e.g. `"1500.50"`.
    pub total_display: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum RenderedResults {
    /// Zero combinations is a success outcome, not an error.
    NoMatches { queried_name: String },
    Cards(Vec<ComboCard>),
}

fn sticker_card(record: &StickerRecord, thresholds: TierThresholds) -> StickerCard {
    let amount = record.price.as_ref().map(|price| price.amount);
    StickerCard {
        display_name: record.display_name.clone(),
        full_name: record.full_name.clone(),
        rarity: record.rarity.clone(),
        tournament: record.tournament.clone(),
        // Always link by this sticker's own name; the price row's
        // market_url can belong to a different sticker after index
        // zipping.
        market_url: market_search_url(&record.full_name),
        // Missing price classifies at the zero default.
        tier: thresholds.classify(amount.unwrap_or(0.0)),
        price_display: record
            .price
            .as_ref()
            .map(|price| format!("${:.2} {}", price.amount, price.currency)),
    }
}

/// Builds one card per received combination, in order. Pure function of its
/// inputs; the caller decides how the result reaches the screen.
pub fn render(
    combos: &[ComboRecord],
    queried_name: &str,
    thresholds: TierThresholds,
) -> RenderedResults {
    if combos.is_empty() {
        return RenderedResults::NoMatches {
            queried_name: queried_name.to_string(),
        };
    }

    let cards = combos
        .iter()
        .enumerate()
        .map(|(index, combo)| {
            let label = match combo.stickers.len() {
                0 => CardLabel::NoStickers,
                1 => CardLabel::ExactMatch,
                _ => CardLabel::Alternative,
            };
            let (stickers, total_display) = if combo.stickers.is_empty() {
                // Degraded card: no price computation, total forced to zero.
                (Vec::new(), "0.00".to_string())
            } else {
                (
                    combo
                        .stickers
                        .iter()
                        .map(|sticker| sticker_card(sticker, thresholds))
                        .collect(),
                    format!("{:.2}", combo.total_price),
                )
            };
            ComboCard {
                number: index + 1,
                label,
                stickers,
                total_display,
            }
        })
        .collect();
    RenderedResults::Cards(cards)
}

fn sticker_markup(card: &StickerCard) -> Node {
    let mut item = Element::new("div")
        .attr("class", format!("sticker-item {}", card.tier.css_class()))
        .child(Element::new("h6").text(&card.display_name))
        .child(
            Element::new("small")
                .attr("class", "full-name")
                .text(&card.full_name),
        );
    if let Some(rarity) = &card.rarity {
        item = item.child(
            Element::new("small")
                .attr("class", "rarity")
                .text(rarity),
        );
    }
    if let Some(tournament) = &card.tournament {
        item = item.child(
            Element::new("small")
                .attr("class", "tournament")
                .text(tournament),
        );
    }

    let link_text = if card.price_display.is_some() {
        "Steam Market"
    } else {
        "Search Steam Market"
    };
    let price_line = match &card.price_display {
        Some(price) => Element::new("span")
            .attr("class", "price")
            .text(price),
        None => Element::new("span")
            .attr("class", "price-unavailable")
            .text("Price unavailable"),
    };
    item.child(
        Element::new("div")
            .attr("class", "price-row")
            .child(price_line)
            .child(
                Element::new("a")
                    .attr("href", &card.market_url)
                    .attr("target", "_blank")
                    .attr("rel", "noopener noreferrer")
                    .text(link_text),
            ),
    )
    .into()
}

fn combo_markup(card: &ComboCard) -> Node {
    let header = Element::new("div")
        .attr("class", "combo-header")
        .child(Element::new("h5").text(format!("Combination {}", card.number)))
        .child(
            Element::new("span")
                .attr("class", "combo-label")
                .text(card.label.heading()),
        )
        .child(
            Element::new("span")
                .attr("class", "total-price")
                .text(format!("Total: ${}", card.total_display)),
        );

    let body: Node = if card.stickers.is_empty() {
        Element::new("div")
            .attr("class", "alert")
            .text("No stickers found for this combination.")
            .into()
    } else {
        let mut row = Element::new("div").attr("class", "sticker-row");
        for sticker in &card.stickers {
            row = row.child(sticker_markup(sticker));
        }
        row.into()
    };

    Element::new("div")
        .attr("class", "sticker-combo")
        .child(header)
        .child(body)
        .into()
}

impl RenderedResults {
    /// Markup fragment: one card element per combination, or a single
    /// alert block naming the queried input when nothing matched.
    pub fn to_markup(&self) -> Node {
        match self {
            RenderedResults::NoMatches { queried_name } => Element::new("div")
                .attr("class", "combinations")
                .child(
                    Element::new("div")
                        .attr("class", "alert no-matches")
                        .child(Element::new("h5").text("No combinations found"))
                        .child(Element::new("p").text(format!(
                            "Sorry, we couldn't generate any sticker combinations for \
                             \"{queried_name}\". Try a different name or check if the \
                             stickers database has matching entries."
                        ))),
                )
                .into(),
            RenderedResults::Cards(cards) => {
                let mut container = Element::new("div").attr("class", "combinations");
                for card in cards {
                    container = container.child(combo_markup(card));
                }
                container.into()
            }
        }
    }

    /// Standalone report page with the tier styles inlined, suitable for
    /// writing straight to disk.
    pub fn to_html_document(&self, title: &str) -> String {
        let mut body = String::new();
        self.to_markup().write_html(&mut body);
        format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
             <title>{title}</title>\n<style>\n{STYLE}</style>\n</head>\n\
             <body>\n<h1>{title}</h1>\n{body}\n</body>\n</html>\n",
            title = escape(title),
        )
    }
}

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em; }
.sticker-combo { border: 1px solid #ccc; border-radius: 8px; padding: 1em; margin-bottom: 1em; }
.combo-header { display: flex; gap: 1em; align-items: baseline; }
.total-price { margin-left: auto; font-weight: bold; }
.sticker-row { display: flex; flex-wrap: wrap; gap: 1em; }
.sticker-item { border: 1px solid #ddd; border-radius: 6px; padding: 0.75em; }
.sticker-item small { display: block; color: #666; }
.price-low { border-left: 4px solid #5cb85c; }
.price-medium { border-left: 4px solid #f0ad4e; }
.price-high { border-left: 4px solid #d9534f; }
.price-unavailable { color: #888; }
.alert { background: #fcf8e3; padding: 1em; border-radius: 6px; }
";

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
