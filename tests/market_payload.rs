use crypto_dash_wasm::domain::errors::DashboardError;
use crypto_dash_wasm::infrastructure::http::{parse_market_chart_payload, parse_markets_payload};
use serde_json::json;
use wasm_bindgen_test::*;

fn markets_fixture() -> serde_json::Value {
    json!([
        {
            "id": "bitcoin",
            "symbol": "btc",
            "name": "Bitcoin",
            "image": "https://img.test/btc.png",
            "current_price": 67234.12,
            "market_cap": 1.32e12,
            "market_cap_rank": 1,
            "price_change_percentage_1h_in_currency": 0.12,
            "price_change_percentage_24h": -1.4,
            "price_change_percentage_7d_in_currency": 3.9,
            "total_volume": 2.8e10,
            "circulating_supply": 1.97e7,
            "max_supply": 2.1e7,
            "sparkline_in_7d": { "price": [66000.0, 66500.0, 67234.12] }
        },
        {
            "id": "ethereum",
            "symbol": "eth",
            "name": "Ethereum",
            "current_price": 3200.5
        }
    ])
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn markets_payload_translates_to_domain_shape() {
    let assets = parse_markets_payload(markets_fixture()).unwrap();
    assert_eq!(assets.len(), 2);

    let btc = &assets[0];
    assert_eq!(btc.id.value(), "bitcoin");
    assert_eq!(btc.rank, 1);
    assert_eq!(btc.symbol, "BTC", "ticker symbols are uppercased");
    assert_eq!(btc.price.value(), 67234.12);
    assert_eq!(btc.change_1h, 0.12);
    assert_eq!(btc.change_24h, -1.4);
    assert_eq!(btc.change_7d, 3.9);
    assert_eq!(btc.max_supply, Some(2.1e7));
    assert_eq!(btc.sparkline.len(), 3);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn missing_optional_fields_default_sanely() {
    let assets = parse_markets_payload(markets_fixture()).unwrap();
    let eth = &assets[1];
    assert_eq!(eth.rank, 0);
    assert_eq!(eth.change_24h, 0.0);
    assert_eq!(eth.volume_24h.value(), 0.0);
    assert_eq!(eth.max_supply, None);
    assert!(eth.sparkline.is_empty());
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn duplicate_ids_are_rejected_as_validation_errors() {
    let payload = json!([
        { "id": "bitcoin", "symbol": "btc", "name": "Bitcoin" },
        { "id": "bitcoin", "symbol": "btc", "name": "Bitcoin" }
    ]);
    match parse_markets_payload(payload) {
        Err(DashboardError::Validation(msg)) => assert!(msg.contains("bitcoin")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn malformed_markets_payload_is_a_load_failure() {
    let result = parse_markets_payload(json!({ "unexpected": "object" }));
    assert!(matches!(result, Err(DashboardError::LoadFailure(_))));
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn negative_price_is_a_validation_error() {
    let payload = json!([
        { "id": "bitcoin", "symbol": "btc", "name": "Bitcoin", "current_price": -1.0 }
    ]);
    assert!(matches!(
        parse_markets_payload(payload),
        Err(DashboardError::Validation(_))
    ));
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn market_chart_payload_yields_ordered_points() {
    let payload = json!({
        "prices": [
            [1_700_000_000_000u64, 66000.0],
            [1_700_000_060_000u64, 66100.5]
        ]
    });
    let points = parse_market_chart_payload(payload).unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].timestamp_ms, 1_700_000_000_000);
    assert_eq!(points[1].price, 66100.5);
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn chart_payload_without_prices_is_a_fetch_failure() {
    let result = parse_market_chart_payload(json!({ "volumes": [] }));
    assert!(matches!(result, Err(DashboardError::ChartFetchFailure(_))));
}

#[cfg_attr(target_arch = "wasm32", wasm_bindgen_test::wasm_bindgen_test)]

#[cfg_attr(not(target_arch = "wasm32"), test)]
fn chart_payload_with_non_numeric_entry_is_rejected() {
    let payload = json!({ "prices": [[1_700_000_000_000u64, "oops"]] });
    assert!(matches!(
        parse_market_chart_payload(payload),
        Err(DashboardError::ChartFetchFailure(_))
    ));
}
