use crate::domain::market::Asset;
use std::collections::HashSet;

/// Domain service validating fetched asset batches before they replace
/// the book.
#[derive(Clone)]
pub struct AssetValidationService;

impl AssetValidationService {
    pub fn new() -> Self {
        Self
    }

    /// Validate a single asset with a descriptive error.
    pub fn validate_asset(&self, asset: &Asset) -> Result<(), String> {
        if asset.id.value().is_empty() {
            return Err("Asset id cannot be empty".to_string());
        }
        if asset.price.value() < 0.0 {
            return Err(format!("Price cannot be negative for {}", asset.id.value()));
        }
        if asset.volume_24h.value() < 0.0 {
            return Err(format!("Volume cannot be negative for {}", asset.id.value()));
        }
        if asset.circulating_supply < 0.0 {
            return Err(format!(
                "Circulating supply cannot be negative for {}",
                asset.id.value()
            ));
        }
        if let Some(max) = asset.max_supply {
            if max <= 0.0 {
                return Err(format!(
                    "Max supply must be positive when capped for {}",
                    asset.id.value()
                ));
            }
        }
        Ok(())
    }

    /// Validate a whole batch: per-asset sanity plus id uniqueness.
    pub fn validate_batch(&self, assets: &[Asset]) -> Result<(), String> {
        let mut seen = HashSet::with_capacity(assets.len());
        for asset in assets {
            self.validate_asset(asset)?;
            if !seen.insert(asset.id.clone()) {
                return Err(format!("Duplicate asset id: {}", asset.id.value()));
            }
        }
        Ok(())
    }
}

impl Default for AssetValidationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate figures rendered in the market header strip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarketOverview {
    pub total_market_cap: f64,
    pub total_volume_24h: f64,
    pub gainers_24h: usize,
    pub losers_24h: usize,
}

/// Domain service deriving header aggregates from the loaded book.
pub struct MarketOverviewService;

impl MarketOverviewService {
    pub fn new() -> Self {
        Self
    }

    pub fn overview(&self, assets: &[Asset]) -> MarketOverview {
        let total_market_cap = assets.iter().map(|a| a.market_cap).sum();
        let total_volume_24h = assets.iter().map(|a| a.volume_24h.value()).sum();
        let gainers_24h = assets.iter().filter(|a| a.change_24h > 0.0).count();
        let losers_24h = assets.iter().filter(|a| a.change_24h < 0.0).count();

        MarketOverview {
            total_market_cap,
            total_volume_24h,
            gainers_24h,
            losers_24h,
        }
    }
}

impl Default for MarketOverviewService {
    fn default() -> Self {
        Self::new()
    }
}
