use derive_more::{Deref, DerefMut, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter, EnumString};

/// Value Object - stable asset identifier (primary key across the book)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deref, DerefMut, Display, Serialize, Deserialize)]
#[display(fmt = "AssetId({})", _0)]
pub struct AssetId(String);

impl AssetId {
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AssetId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for AssetId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Value Object - quoted price in USD
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Serialize, Deserialize)]
pub struct Price(f64);

impl Price {
    pub fn value(&self) -> f64 {
        self.0
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

/// Value Object - 24h traded volume in USD
#[derive(Debug, Clone, Copy, PartialEq, From, Into, Deref, DerefMut, Serialize, Deserialize)]
pub struct Volume(f64);

impl Volume {
    pub fn value(&self) -> f64 {
        self.0
    }
}

/// Fixed-length sliding window of recent price samples.
///
/// The length is set once when the window is built from fetched data and
/// stays constant for the lifetime of the asset: every simulated update
/// drops the oldest sample and appends the new price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sparkline(Vec<f64>);

impl Sparkline {
    pub fn new(samples: Vec<f64>) -> Self {
        Self(samples)
    }

    /// Drop the oldest sample and append `price`, keeping length constant.
    /// An empty window stays empty.
    pub fn shift_push(&self, price: f64) -> Self {
        if self.0.is_empty() {
            return self.clone();
        }
        let mut samples = Vec::with_capacity(self.0.len());
        samples.extend_from_slice(&self.0[1..]);
        samples.push(price);
        Self(samples)
    }

    pub fn samples(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// True when the window closes at or above where it opened.
    pub fn is_trending_up(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => last >= first,
            _ => false,
        }
    }

    pub fn min_max(&self) -> Option<(f64, f64)> {
        if self.0.is_empty() {
            return None;
        }
        let min = self.0.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.0.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }
}

/// Value Object - lookback window for the comparison chart
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, EnumString, AsRefStr,
    Serialize, Deserialize,
)]
pub enum LookbackWindow {
    #[strum(serialize = "24h")]
    #[serde(rename = "24h")]
    Day,

    #[strum(serialize = "7d")]
    #[serde(rename = "7d")]
    Week,

    #[strum(serialize = "30d")]
    #[serde(rename = "30d")]
    Month,

    #[strum(serialize = "1y")]
    #[serde(rename = "1y")]
    Year,
}

impl LookbackWindow {
    /// Query value for the market-chart endpoint.
    pub fn days(&self) -> u32 {
        match self {
            Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 365,
        }
    }
}

/// Sortable table columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, AsRefStr)]
pub enum SortColumn {
    #[strum(serialize = "rank")]
    Rank,
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "price")]
    Price,
    #[strum(serialize = "change_1h")]
    Change1h,
    #[strum(serialize = "change_24h")]
    Change24h,
    #[strum(serialize = "change_7d")]
    Change7d,
    #[strum(serialize = "market_cap")]
    MarketCap,
    #[strum(serialize = "volume")]
    Volume,
}

impl SortColumn {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Rank => "#",
            Self::Name => "Name",
            Self::Price => "Price",
            Self::Change1h => "1h %",
            Self::Change24h => "24h %",
            Self::Change7d => "7d %",
            Self::MarketCap => "Market Cap",
            Self::Volume => "Volume(24h)",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(&self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}
