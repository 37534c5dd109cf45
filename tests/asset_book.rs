use crypto_dash_wasm::domain::market::{
    Asset, AssetBook, AssetId, AssetUpdate, AssetValidationService, Sparkline,
};
use wasm_bindgen_test::*;

fn sample_asset(id: &str, rank: u32, price: f64) -> Asset {
    Asset {
        id: AssetId::from(id),
        rank,
        name: format!("{}-name", id),
        symbol: id.to_uppercase(),
        logo: String::new(),
        price: price.into(),
        change_1h: 0.5,
        change_24h: -1.2,
        change_7d: 3.4,
        market_cap: price * 1_000_000.0,
        volume_24h: (price * 10_000.0).into(),
        circulating_supply: 1_000.0,
        max_supply: Some(2_000.0),
        sparkline: Sparkline::new(vec![price, price, price]),
    }
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn replace_all_swaps_the_collection() {
    let mut book = AssetBook::new();
    book.replace_all(vec![sample_asset("bitcoin", 1, 68_000.0)]);
    book.replace_all(vec![sample_asset("ethereum", 2, 3_200.0)]);

    assert_eq!(book.len(), 1);
    assert!(book.get(&AssetId::from("bitcoin")).is_none());
    assert!(book.get(&AssetId::from("ethereum")).is_some());
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn merge_overwrites_only_present_fields() {
    let mut book = AssetBook::new();
    book.replace_all(vec![sample_asset("bitcoin", 1, 68_000.0)]);

    let mut update = AssetUpdate::new(AssetId::from("bitcoin"));
    update.price = Some(70_000.0.into());
    update.change_24h = Some(2.0);
    book.merge(update);

    let asset = book.get(&AssetId::from("bitcoin")).unwrap();
    assert_eq!(asset.price.value(), 70_000.0);
    assert_eq!(asset.change_24h, 2.0);
    // Untouched fields keep their values.
    assert_eq!(asset.change_1h, 0.5);
    assert_eq!(asset.change_7d, 3.4);
    assert_eq!(asset.volume_24h.value(), 680_000_000.0);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn merge_with_unknown_id_is_a_noop() {
    let mut book = AssetBook::new();
    book.replace_all(vec![sample_asset("bitcoin", 1, 68_000.0)]);
    let before = book.clone();

    let mut update = AssetUpdate::new(AssetId::from("unknown"));
    update.price = Some(1.0.into());
    book.merge(update);

    assert_eq!(book, before);
    assert_eq!(book.len(), 1);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn merge_many_applies_each_update() {
    let mut book = AssetBook::new();
    book.replace_all(vec![
        sample_asset("bitcoin", 1, 68_000.0),
        sample_asset("ethereum", 2, 3_200.0),
    ]);

    let mut a = AssetUpdate::new(AssetId::from("bitcoin"));
    a.price = Some(69_000.0.into());
    let mut b = AssetUpdate::new(AssetId::from("ethereum"));
    b.price = Some(3_300.0.into());
    let mut c = AssetUpdate::new(AssetId::from("dogecoin"));
    c.price = Some(0.1.into());
    book.merge_many(vec![a, b, c]);

    assert_eq!(book.len(), 2);
    assert_eq!(book.get(&AssetId::from("bitcoin")).unwrap().price.value(), 69_000.0);
    assert_eq!(book.get(&AssetId::from("ethereum")).unwrap().price.value(), 3_300.0);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn validation_rejects_duplicate_ids() {
    let batch = vec![
        sample_asset("bitcoin", 1, 68_000.0),
        sample_asset("bitcoin", 2, 3_200.0),
    ];
    let err = AssetValidationService::new().validate_batch(&batch).unwrap_err();
    assert!(err.contains("Duplicate asset id"));
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn validation_rejects_negative_price() {
    let mut asset = sample_asset("bitcoin", 1, 68_000.0);
    asset.price = (-1.0).into();
    assert!(AssetValidationService::new().validate_asset(&asset).is_err());
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn uniqueness_holds_across_replace_and_merge_sequences() {
    let mut book = AssetBook::new();
    book.replace_all(vec![
        sample_asset("bitcoin", 1, 68_000.0),
        sample_asset("ethereum", 2, 3_200.0),
    ]);

    // Merges never insert, so uniqueness only depends on validated
    // replace batches.
    for id in ["bitcoin", "ethereum", "tether", "ripple"] {
        let mut update = AssetUpdate::new(AssetId::from(id));
        update.price = Some(1.0.into());
        book.merge(update);
    }

    let mut ids: Vec<&str> = book.assets().iter().map(|a| a.id.value()).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), book.len());
}
