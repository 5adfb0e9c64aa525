use super::*;
use shared::domain::{ComboRecord, PriceRecord, StickerRecord};

fn priced_sticker(display: &str, full: &str, amount: f64) -> StickerRecord {
    StickerRecord {
        display_name: display.to_string(),
        full_name: full.to_string(),
        rarity: None,
        tournament: None,
        price: Some(PriceRecord {
            amount,
            currency: "USD".to_string(),
            market_url: None,
        }),
    }
}

fn unpriced_sticker(display: &str) -> StickerRecord {
    StickerRecord {
        display_name: display.to_string(),
        full_name: display.to_string(),
        rarity: None,
        tournament: None,
        price: None,
    }
}

fn combo(stickers: Vec<StickerRecord>, total: f64) -> ComboRecord {
    ComboRecord {
        target_name: None,
        stickers,
        total_price: total,
    }
}

fn cards(results: &RenderedResults) -> &[ComboCard] {
    match results {
        RenderedResults::Cards(cards) => cards,
        RenderedResults::NoMatches { .. } => panic!("expected cards"),
    }
}

#[test]
fn market_url_encodes_like_encode_uri_component() {
    let url = market_search_url("AWP | Dragon Lore");
    assert_eq!(
        url,
        "https://steamcommunity.com/market/search?appid=730&q=AWP%20%7C%20Dragon%20Lore"
    );
    assert_eq!(
        market_search_url("Howling Dawn (Holo)"),
        "https://steamcommunity.com/market/search?appid=730&q=Howling%20Dawn%20(Holo)"
    );
}

#[test]
fn dragon_lore_scenario_renders_exact_match_card() {
    let combos = vec![combo(
        vec![priced_sticker("Dragon Lore", "AWP | Dragon Lore", 1500.5)],
        1500.5,
    )];
    let results = render(&combos, "DRAGON LORE", TierThresholds::default());

    let cards = cards(&results);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].number, 1);
    assert_eq!(cards[0].label, CardLabel::ExactMatch);
    assert_eq!(cards[0].total_display, "1500.50");

    let sticker = &cards[0].stickers[0];
    assert_eq!(sticker.price_display.as_deref(), Some("$1500.50 USD"));
    assert_eq!(sticker.tier, PriceTier::High);
    assert!(sticker.market_url.contains("AWP%20%7C%20Dragon%20Lore"));
}

#[test]
fn multi_sticker_combos_are_labelled_alternative() {
    let combos = vec![
        combo(vec![priced_sticker("Howl", "Howl", 2.0)], 2.0),
        combo(
            vec![
                priced_sticker("Dra", "Dra", 0.5),
                priced_sticker("Gon", "Gon", 0.75),
            ],
            1.25,
        ),
    ];
    let results = render(&combos, "DRAGON", TierThresholds::default());

    let cards = cards(&results);
    assert_eq!(cards.len(), 2);
    assert_eq!(cards[0].label, CardLabel::ExactMatch);
    assert_eq!(cards[1].label, CardLabel::Alternative);
    // order preserved exactly as received, numbered from 1
    assert_eq!(cards[0].number, 1);
    assert_eq!(cards[1].number, 2);
    assert_eq!(cards[1].total_display, "1.25");
}

#[test]
fn missing_price_renders_unavailable_at_lowest_tier() {
    let combos = vec![combo(
        vec![
            priced_sticker("Priced", "Priced", 3.0),
            unpriced_sticker("Unpriced"),
        ],
        3.0,
    )];
    let results = render(&combos, "X", TierThresholds::default());

    let sticker = &cards(&results)[0].stickers[1];
    assert_eq!(sticker.price_display, None);
    assert_eq!(sticker.tier, PriceTier::Low);
    assert!(sticker.market_url.contains("q=Unpriced"));

    let html = results.to_markup().to_html();
    assert!(html.contains("Price unavailable"));
    assert!(html.contains("Search Steam Market"));
}

#[test]
fn market_link_always_uses_the_stickers_own_name() {
    // The price row's market_url can point at a different sticker once
    // prices are zipped by index; it must never replace the link built
    // from this sticker's own name.
    let mut sticker = priced_sticker("Howl (Foil)", "Howl (Foil)", 2.0);
    if let Some(price) = sticker.price.as_mut() {
        price.market_url = Some(
            "https://steamcommunity.com/market/search?appid=730&q=Dragon%20Lore".to_string(),
        );
    }
    let results = render(&[combo(vec![sticker], 2.0)], "HOWL", TierThresholds::default());
    let link = &cards(&results)[0].stickers[0].market_url;
    assert_eq!(link, &market_search_url("Howl (Foil)"));
    assert!(!link.contains("Dragon%20Lore"));
}

#[test]
fn empty_sticker_list_degrades_to_zero_total_card() {
    let combos = vec![combo(Vec::new(), 12.0)];
    let results = render(&combos, "X", TierThresholds::default());

    let cards = cards(&results);
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].label, CardLabel::NoStickers);
    assert!(cards[0].stickers.is_empty());
    assert_eq!(cards[0].total_display, "0.00");

    let html = results.to_markup().to_html();
    assert!(html.contains("No stickers found for this combination."));
}

#[test]
fn no_matches_block_names_the_queried_input() {
    let results = render(&[], "DRAGON LORE", TierThresholds::default());
    assert!(matches!(results, RenderedResults::NoMatches { .. }));

    let markup = results.to_markup();
    assert!(markup.text_content().contains("\"DRAGON LORE\""));
    assert!(markup.to_html().contains("No combinations found"));
}

#[test]
fn markup_emits_one_card_element_per_combination() {
    let combos = vec![
        combo(vec![priced_sticker("A", "A", 1.0)], 1.0),
        combo(Vec::new(), 0.0),
        combo(
            vec![priced_sticker("B", "B", 2.0), unpriced_sticker("C")],
            2.0,
        ),
    ];
    let results = render(&combos, "ABC", TierThresholds::default());

    let markup = results.to_markup();
    let container = match &markup {
        markup::Node::Element(element) => element,
        markup::Node::Text(_) => panic!("expected element"),
    };
    assert_eq!(container.children.len(), combos.len());
    for child in &container.children {
        if let markup::Node::Element(card) = child {
            assert_eq!(card.attr_value("class"), Some("sticker-combo"));
        } else {
            panic!("expected card element");
        }
    }
}

#[test]
fn hostile_sticker_names_are_escaped_in_markup() {
    let combos = vec![combo(
        vec![unpriced_sticker("<script>alert('x')</script>")],
        0.0,
    )];
    let results = render(&combos, "<b>q</b>", TierThresholds::default());

    let html = results.to_markup().to_html();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));

    let empty = render(&[], "<b>q</b>", TierThresholds::default());
    let html = empty.to_markup().to_html();
    assert!(!html.contains("<b>"));
}

#[test]
fn html_document_embeds_title_and_tier_styles() {
    let combos = vec![combo(vec![priced_sticker("A", "A", 20.0)], 20.0)];
    let results = render(&combos, "A", TierThresholds::default());

    let page = results.to_html_document("Sticker combos for \"A\"");
    assert!(page.starts_with("<!DOCTYPE html>"));
    assert!(page.contains("Sticker combos for &quot;A&quot;"));
    assert!(page.contains(".price-high"));
    assert!(page.contains("price-high\""));
}
