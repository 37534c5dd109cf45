//! Comparison view coordination: which coins are selected (at most
//! five), and assembling their historical series into chart data.

use crate::domain::errors::ChartResult;
use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::market::{Asset, AssetId, LookbackWindow, PricePoint, PriceSeries};
use crate::infrastructure::http::CoinGeckoHttpClient;

/// The chart stays readable with at most five overlaid series.
pub const MAX_COMPARED_COINS: usize = 5;

/// Line colors assigned by selection order.
pub const SERIES_COLORS: [&'static str; 5] =
    ["#ff6384", "#36a2eb", "#ffce56", "#4bc0c0", "#9966ff"];

/// Ordered set of selected coins, capped at [`MAX_COMPARED_COINS`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComparisonSelection {
    coins: Vec<AssetId>,
}

impl ComparisonSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle a coin in or out of the selection. Selecting past the cap
    /// is ignored. Returns whether the coin is selected afterwards.
    pub fn toggle(&mut self, id: &AssetId) -> bool {
        if let Some(pos) = self.coins.iter().position(|c| c == id) {
            self.coins.remove(pos);
            false
        } else if self.coins.len() < MAX_COMPARED_COINS {
            self.coins.push(id.clone());
            true
        } else {
            false
        }
    }

    pub fn is_selected(&self, id: &AssetId) -> bool {
        self.coins.iter().any(|c| c == id)
    }

    pub fn coins(&self) -> &[AssetId] {
        &self.coins
    }

    pub fn len(&self) -> usize {
        self.coins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.coins.is_empty()
    }
}

/// Build a labeled, colored series from fetched points. Color cycles by
/// selection index; the label is the asset's display name when the coin
/// is on the loaded page, otherwise its raw id.
pub fn make_series(
    index: usize,
    id: &AssetId,
    assets: &[Asset],
    points: Vec<PricePoint>,
) -> PriceSeries {
    let label = assets
        .iter()
        .find(|a| &a.id == id)
        .map(|a| a.name.clone())
        .unwrap_or_else(|| id.value().to_string());

    PriceSeries {
        asset_id: id.clone(),
        label,
        color: SERIES_COLORS[index % SERIES_COLORS.len()],
        points,
    }
}

/// Fetch one historical series per selected coin. A failed fetch for
/// any coin surfaces as a single `ChartFetchFailure`; the caller shows
/// it and keeps the dashboard interactive.
pub async fn load_series(
    client: &CoinGeckoHttpClient,
    assets: &[Asset],
    selection: &ComparisonSelection,
    window: LookbackWindow,
) -> ChartResult<Vec<PriceSeries>> {
    let mut series = Vec::with_capacity(selection.len());
    for (index, id) in selection.coins().iter().enumerate() {
        let points = client.get_market_chart(id, window).await?;
        series.push(make_series(index, id, assets, points));
    }

    get_logger().info(
        LogComponent::Application("Comparison"),
        &format!("Loaded {} comparison series over {}", series.len(), window),
    );
    Ok(series)
}
