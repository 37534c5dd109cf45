pub use super::value_objects::{AssetId, Price, Sparkline, Volume};
use serde::{Deserialize, Serialize};

/// Domain entity - one tracked market asset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asset {
    pub id: AssetId,
    pub rank: u32,
    pub name: String,
    pub symbol: String,
    pub logo: String,
    pub price: Price,
    /// Signed percentage-point deltas, not fractions.
    pub change_1h: f64,
    pub change_24h: f64,
    pub change_7d: f64,
    pub market_cap: f64,
    pub volume_24h: Volume,
    pub circulating_supply: f64,
    /// `None` means the supply is uncapped.
    pub max_supply: Option<f64>,
    pub sparkline: Sparkline,
}

impl Asset {
    /// Fraction of max supply already circulating, when capped.
    pub fn supply_ratio(&self) -> Option<f64> {
        self.max_supply
            .filter(|max| *max > 0.0)
            .map(|max| (self.circulating_supply / max).clamp(0.0, 1.0))
    }
}

/// Partial merge update keyed by asset id. Absent fields keep their
/// current value; an unknown id makes the whole update a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetUpdate {
    pub id: AssetId,
    pub price: Option<Price>,
    pub change_1h: Option<f64>,
    pub change_24h: Option<f64>,
    pub change_7d: Option<f64>,
    pub volume_24h: Option<Volume>,
    pub sparkline: Option<Sparkline>,
}

impl AssetUpdate {
    pub fn new(id: AssetId) -> Self {
        Self {
            id,
            price: None,
            change_1h: None,
            change_24h: None,
            change_7d: None,
            volume_24h: None,
            sparkline: None,
        }
    }
}

/// Ordered collection of assets in fetch order. Display order is a
/// derived sort in the view layer, never stored here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AssetBook {
    assets: Vec<Asset>,
}

impl AssetBook {
    pub fn new() -> Self {
        Self { assets: Vec::new() }
    }

    /// Wholesale replacement from a fresh fetch. Callers validate id
    /// uniqueness before handing the batch over.
    pub fn replace_all(&mut self, assets: Vec<Asset>) {
        self.assets = assets;
    }

    /// Field-by-field overwrite onto the matching asset. Updates that
    /// reference an id outside the loaded page are silently absorbed;
    /// a merge never inserts a row.
    pub fn merge(&mut self, update: AssetUpdate) {
        let Some(asset) = self.assets.iter_mut().find(|a| a.id == update.id) else {
            return;
        };
        if let Some(price) = update.price {
            asset.price = price;
        }
        if let Some(change) = update.change_1h {
            asset.change_1h = change;
        }
        if let Some(change) = update.change_24h {
            asset.change_24h = change;
        }
        if let Some(change) = update.change_7d {
            asset.change_7d = change;
        }
        if let Some(volume) = update.volume_24h {
            asset.volume_24h = volume;
        }
        if let Some(sparkline) = update.sparkline {
            asset.sparkline = sparkline;
        }
    }

    /// Apply a batch of merges. No atomicity needed: there are no
    /// cross-asset invariants to preserve within one batch.
    pub fn merge_many(&mut self, updates: Vec<AssetUpdate>) {
        for update in updates {
            self.merge(update);
        }
    }

    pub fn get(&self, id: &AssetId) -> Option<&Asset> {
        self.assets.iter().find(|a| &a.id == id)
    }

    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// One (timestamp, price) sample of a historical series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub timestamp_ms: u64,
    pub price: f64,
}

/// A labeled historical series for the comparison chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    pub asset_id: AssetId,
    pub label: String,
    pub color: &'static str,
    pub points: Vec<PricePoint>,
}
