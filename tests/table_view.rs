use crypto_dash_wasm::domain::market::{Asset, AssetId, SortColumn, SortDirection, Sparkline};
use crypto_dash_wasm::view_state::{TableViewState, visible_assets};
use wasm_bindgen_test::*;

fn asset(id: &str, name: &str, symbol: &str, price: f64) -> Asset {
    Asset {
        id: AssetId::from(id),
        rank: 0,
        name: name.to_string(),
        symbol: symbol.to_string(),
        logo: String::new(),
        price: price.into(),
        change_1h: 0.0,
        change_24h: 0.0,
        change_7d: 0.0,
        market_cap: price * 100.0,
        volume_24h: price.into(),
        circulating_supply: 0.0,
        max_supply: None,
        sparkline: Sparkline::new(Vec::new()),
    }
}

fn ids<'a>(rows: &[&'a Asset]) -> Vec<&'a str> {
    rows.iter().map(|a| a.id.value()).collect()
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn search_filters_by_name_substring() {
    let assets = vec![asset("a", "Alpha", "ALP", 10.0), asset("b", "Beta", "BET", 5.0)];
    let mut state = TableViewState::new();
    state.search_term = "alp".to_string();

    assert_eq!(ids(&visible_assets(&assets, &state)), vec!["a"]);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn search_matches_symbol_case_insensitively() {
    let assets = vec![asset("a", "Alpha", "ALP", 10.0), asset("b", "Beta", "BET", 5.0)];
    let mut state = TableViewState::new();
    state.search_term = "bEt".to_string();

    assert_eq!(ids(&visible_assets(&assets, &state)), vec!["b"]);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn empty_search_keeps_everything() {
    let assets = vec![asset("a", "Alpha", "ALP", 10.0), asset("b", "Beta", "BET", 5.0)];
    let state = TableViewState::new();
    assert_eq!(visible_assets(&assets, &state).len(), 2);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn favorites_only_gates_rows() {
    let assets = vec![asset("a", "Alpha", "ALP", 10.0), asset("b", "Beta", "BET", 5.0)];
    let mut state = TableViewState::new();
    state.favorites_only = true;
    assert!(visible_assets(&assets, &state).is_empty());

    state.toggle_favorite(&AssetId::from("b"));
    assert_eq!(ids(&visible_assets(&assets, &state)), vec!["b"]);

    // Toggling again removes the favorite.
    state.toggle_favorite(&AssetId::from("b"));
    assert!(visible_assets(&assets, &state).is_empty());
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn sort_by_price_ascending() {
    let assets = vec![asset("a", "Alpha", "ALP", 10.0), asset("b", "Beta", "BET", 5.0)];
    let mut state = TableViewState::new();
    state.toggle_sort(SortColumn::Price);

    assert_eq!(ids(&visible_assets(&assets, &state)), vec!["b", "a"]);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn second_click_flips_direction() {
    let assets = vec![asset("a", "Alpha", "ALP", 10.0), asset("b", "Beta", "BET", 5.0)];
    let mut state = TableViewState::new();
    state.toggle_sort(SortColumn::Price);
    state.toggle_sort(SortColumn::Price);

    assert_eq!(state.sort.direction, SortDirection::Descending);
    assert_eq!(ids(&visible_assets(&assets, &state)), vec!["a", "b"]);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn switching_column_resets_to_ascending() {
    let mut state = TableViewState::new();
    state.toggle_sort(SortColumn::Price);
    state.toggle_sort(SortColumn::Price);
    state.toggle_sort(SortColumn::Name);

    assert_eq!(state.sort.column, SortColumn::Name);
    assert_eq!(state.sort.direction, SortDirection::Ascending);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn name_sort_ignores_case() {
    let assets = vec![
        asset("a", "zcash", "ZEC", 10.0),
        asset("b", "Aave", "AAVE", 5.0),
        asset("c", "Monero", "XMR", 7.0),
    ];
    let mut state = TableViewState::new();
    state.toggle_sort(SortColumn::Name);

    assert_eq!(ids(&visible_assets(&assets, &state)), vec!["b", "c", "a"]);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn filter_and_sort_compose() {
    let assets = vec![
        asset("a", "Alphacoin", "ALP", 10.0),
        asset("b", "Betacoin", "BET", 5.0),
        asset("c", "Alphatoken", "ALT", 2.0),
    ];
    let mut state = TableViewState::new();
    state.search_term = "alpha".to_string();
    state.toggle_sort(SortColumn::Price);

    assert_eq!(ids(&visible_assets(&assets, &state)), vec!["c", "a"]);
}
