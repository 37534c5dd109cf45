use crate::domain::{
    errors::{ChartResult, DashboardError, LoadResult},
    logging::{LogComponent, get_logger},
    market::{Asset, AssetId, AssetValidationService, LookbackWindow, PricePoint, Sparkline},
};
use gloo::net::http::Request;
use serde::Deserialize;
use serde_json::Value;

/// One record of the `/coins/markets` payload, in the API's own shape.
/// The raw schema never leaves this module; assets are translated to the
/// canonical domain shape at this boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct RawMarketAsset {
    pub id: String,
    pub symbol: String,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub current_price: Option<f64>,
    #[serde(default)]
    pub market_cap: Option<f64>,
    #[serde(default)]
    pub market_cap_rank: Option<u32>,
    #[serde(default)]
    pub price_change_percentage_1h_in_currency: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_24h: Option<f64>,
    #[serde(default)]
    pub price_change_percentage_7d_in_currency: Option<f64>,
    #[serde(default)]
    pub total_volume: Option<f64>,
    #[serde(default)]
    pub circulating_supply: Option<f64>,
    #[serde(default)]
    pub max_supply: Option<f64>,
    #[serde(default)]
    pub sparkline_in_7d: Option<RawSparkline>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSparkline {
    #[serde(default)]
    pub price: Vec<f64>,
}

impl From<RawMarketAsset> for Asset {
    fn from(raw: RawMarketAsset) -> Self {
        Asset {
            id: AssetId::from(raw.id),
            rank: raw.market_cap_rank.unwrap_or(0),
            name: raw.name,
            symbol: raw.symbol.to_uppercase(),
            logo: raw.image,
            price: raw.current_price.unwrap_or(0.0).into(),
            change_1h: raw.price_change_percentage_1h_in_currency.unwrap_or(0.0),
            change_24h: raw.price_change_percentage_24h.unwrap_or(0.0),
            change_7d: raw.price_change_percentage_7d_in_currency.unwrap_or(0.0),
            market_cap: raw.market_cap.unwrap_or(0.0),
            volume_24h: raw.total_volume.unwrap_or(0.0).into(),
            circulating_supply: raw.circulating_supply.unwrap_or(0.0),
            max_supply: raw.max_supply,
            sparkline: Sparkline::new(raw.sparkline_in_7d.map(|s| s.price).unwrap_or_default()),
        }
    }
}

/// Translate and validate a `/coins/markets` payload. Split from the
/// transport so payload handling is testable without a browser.
pub fn parse_markets_payload(data: Value) -> LoadResult<Vec<Asset>> {
    let raw: Vec<RawMarketAsset> = serde_json::from_value(data)
        .map_err(|e| DashboardError::LoadFailure(format!("Malformed markets payload: {}", e)))?;

    let assets: Vec<Asset> = raw.into_iter().map(Asset::from).collect();
    AssetValidationService::new()
        .validate_batch(&assets)
        .map_err(DashboardError::Validation)?;
    Ok(assets)
}

/// Extract the `prices` pairs of a `/coins/{id}/market_chart` payload.
pub fn parse_market_chart_payload(data: Value) -> ChartResult<Vec<PricePoint>> {
    let pairs = data
        .get("prices")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            DashboardError::ChartFetchFailure("Payload has no prices array".to_string())
        })?;

    let mut points = Vec::with_capacity(pairs.len());
    for pair in pairs {
        let pair = pair.as_array().ok_or_else(|| {
            DashboardError::ChartFetchFailure("Price entry is not a pair".to_string())
        })?;
        let (Some(timestamp), Some(price)) = (
            pair.first().and_then(Value::as_f64),
            pair.get(1).and_then(Value::as_f64),
        ) else {
            return Err(DashboardError::ChartFetchFailure(
                "Price entry is not numeric".to_string(),
            ));
        };
        points.push(PricePoint { timestamp_ms: timestamp as u64, price });
    }
    Ok(points)
}

/// HTTP client for the CoinGecko market-data API
#[derive(Clone)]
pub struct CoinGeckoHttpClient {
    base_url: String,
}

impl Default for CoinGeckoHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

impl CoinGeckoHttpClient {
    pub fn new() -> Self {
        Self { base_url: "https://api.coingecko.com/api/v3".to_string() }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    /// One-shot fetch of the top `limit` assets by market cap, with 7d
    /// sparklines and 1h/24h/7d change percentages.
    pub async fn get_top_assets(&self, limit: usize) -> LoadResult<Vec<Asset>> {
        get_logger().info(
            LogComponent::Infrastructure("CoinGecko"),
            &format!("Fetching top {} assets", limit),
        );

        let url = format!(
            "{}/coins/markets?vs_currency=usd&order=market_cap_desc&per_page={}&page=1&sparkline=true&price_change_percentage=1h,24h,7d",
            self.base_url, limit
        );

        let response = Request::get(&url).send().await.map_err(|e| {
            DashboardError::LoadFailure(format!("Failed to send request: {:?}", e))
        })?;

        if !response.ok() {
            return Err(DashboardError::LoadFailure(format!(
                "HTTP error: {} - {}",
                response.status(),
                response.status_text()
            )));
        }

        let data: Value = response.json().await.map_err(|e| {
            DashboardError::LoadFailure(format!("Failed to parse JSON: {:?}", e))
        })?;

        let assets = parse_markets_payload(data)?;
        get_logger().info(
            LogComponent::Infrastructure("CoinGecko"),
            &format!("Loaded {} assets", assets.len()),
        );
        Ok(assets)
    }

    /// Historical (timestamp, price) series for one asset over the
    /// given lookback window.
    pub async fn get_market_chart(
        &self,
        id: &AssetId,
        window: LookbackWindow,
    ) -> ChartResult<Vec<PricePoint>> {
        let url = format!(
            "{}/coins/{}/market_chart?vs_currency=usd&days={}",
            self.base_url,
            id.value(),
            window.days()
        );

        let response = Request::get(&url).send().await.map_err(|e| {
            DashboardError::ChartFetchFailure(format!("Failed to send request: {:?}", e))
        })?;

        if !response.ok() {
            return Err(DashboardError::ChartFetchFailure(format!(
                "HTTP error for {}: {}",
                id.value(),
                response.status()
            )));
        }

        let data: Value = response.json().await.map_err(|e| {
            DashboardError::ChartFetchFailure(format!("Failed to parse JSON: {:?}", e))
        })?;

        parse_market_chart_payload(data)
    }
}
