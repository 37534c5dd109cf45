//! Derived, per-session table state: search/favorites/sort plus the
//! last-seen snapshot that drives transient cell flashes. Everything in
//! here is a pure projection over the asset book; nothing is persisted.

use crate::domain::market::{Asset, AssetId, SortColumn, SortDirection};
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

/// Active sort: column plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self { column: SortColumn::Rank, direction: SortDirection::Ascending }
    }
}

/// Ephemeral view state for the market table. Created with defaults at
/// mount, discarded at unmount.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableViewState {
    pub search_term: String,
    pub favorites: HashSet<AssetId>,
    pub favorites_only: bool,
    pub sort: SortSpec,
}

impl TableViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_favorite(&mut self, id: &AssetId) {
        if !self.favorites.remove(id) {
            self.favorites.insert(id.clone());
        }
    }

    pub fn is_favorite(&self, id: &AssetId) -> bool {
        self.favorites.contains(id)
    }

    /// Clicking the active column flips direction; a new column starts
    /// ascending.
    pub fn toggle_sort(&mut self, column: SortColumn) {
        if self.sort.column == column {
            self.sort.direction = self.sort.direction.toggled();
        } else {
            self.sort = SortSpec { column, direction: SortDirection::Ascending };
        }
    }

    fn matches_filter(&self, asset: &Asset) -> bool {
        if self.favorites_only && !self.favorites.contains(&asset.id) {
            return false;
        }
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        asset.name.to_lowercase().contains(&needle)
            || asset.symbol.to_lowercase().contains(&needle)
    }
}

fn compare_assets(a: &Asset, b: &Asset, sort: SortSpec) -> Ordering {
    let ordering = match sort.column {
        SortColumn::Rank => a.rank.cmp(&b.rank),
        SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortColumn::Price => numeric_cmp(a.price.value(), b.price.value()),
        SortColumn::Change1h => numeric_cmp(a.change_1h, b.change_1h),
        SortColumn::Change24h => numeric_cmp(a.change_24h, b.change_24h),
        SortColumn::Change7d => numeric_cmp(a.change_7d, b.change_7d),
        SortColumn::MarketCap => numeric_cmp(a.market_cap, b.market_cap),
        SortColumn::Volume => numeric_cmp(a.volume_24h.value(), b.volume_24h.value()),
    };
    match sort.direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

fn numeric_cmp(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Filter then sort the book into display order. Collections here are
/// small (<= 100 rows), so this recomputes on every relevant change
/// with no caching.
pub fn visible_assets<'a>(assets: &'a [Asset], state: &TableViewState) -> Vec<&'a Asset> {
    let mut rows: Vec<&Asset> = assets.iter().filter(|a| state.matches_filter(a)).collect();
    rows.sort_by(|a, b| compare_assets(a, b, state.sort));
    rows
}

/// The watched fields snapshotted per asset for change detection.
#[derive(Debug, Clone, Copy, PartialEq)]
struct WatchedValues {
    price: f64,
    change_1h: f64,
    change_24h: f64,
    change_7d: f64,
    volume_24h: f64,
}

impl WatchedValues {
    fn capture(asset: &Asset) -> Self {
        Self {
            price: asset.price.value(),
            change_1h: asset.change_1h,
            change_24h: asset.change_24h,
            change_7d: asset.change_7d,
            volume_24h: asset.volume_24h.value(),
        }
    }
}

/// Which cells of a row changed since the previous observation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CellFlash {
    pub price: bool,
    pub change_1h: bool,
    pub change_24h: bool,
    pub change_7d: bool,
    pub volume_24h: bool,
}

impl CellFlash {
    pub fn any(&self) -> bool {
        self.price || self.change_1h || self.change_24h || self.change_7d || self.volume_24h
    }
}

/// Last-seen value snapshot used to detect changes between renders.
/// Owned by the presentation layer; the asset book knows nothing about
/// it. The snapshot is overwritten on every observation whether or not
/// anything differed - it means "last seen", not "last different".
#[derive(Debug, Clone, Default)]
pub struct FlashTracker {
    previous: HashMap<AssetId, WatchedValues>,
}

impl FlashTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compare the asset's watched fields against the previous
    /// observation, then record the current values. The first
    /// observation of an id never flashes.
    pub fn observe(&mut self, asset: &Asset) -> CellFlash {
        let current = WatchedValues::capture(asset);
        let flash = match self.previous.get(&asset.id) {
            Some(prev) => CellFlash {
                price: prev.price != current.price,
                change_1h: prev.change_1h != current.change_1h,
                change_24h: prev.change_24h != current.change_24h,
                change_7d: prev.change_7d != current.change_7d,
                volume_24h: prev.volume_24h != current.volume_24h,
            },
            None => CellFlash::default(),
        };
        self.previous.insert(asset.id.clone(), current);
        flash
    }

    pub fn clear(&mut self) {
        self.previous.clear();
    }
}
