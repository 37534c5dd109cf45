use crate::domain::market::{Asset, AssetUpdate};

/// Injected randomness so ticks are reproducible under test.
/// Implementations return values uniformly distributed in `[0, 1)`.
pub trait RandomSource {
    fn next_f64(&mut self) -> f64;
}

/// Browser randomness via `Math.random()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsRandom;

impl RandomSource for JsRandom {
    fn next_f64(&mut self) -> f64 {
        js_sys::Math::random()
    }
}

/// Per-tick bounds. A single tick never moves price by more than 1%,
/// volume by more than 2%, or a percentage-change field by more than
/// 0.2 absolute points - large enough to flash, small enough to look
/// like a live feed.
pub const MAX_PRICE_DELTA: f64 = 0.01;
pub const MAX_VOLUME_DELTA: f64 = 0.02;
pub const MAX_CHANGE_DELTA: f64 = 0.2;

/// Assets touched per tick, before clamping to the book size.
pub const MIN_ASSETS_PER_TICK: usize = 1;
pub const MAX_ASSETS_PER_TICK: usize = 3;

fn uniform(rng: &mut dyn RandomSource, lo: f64, hi: f64) -> f64 {
    lo + rng.next_f64() * (hi - lo)
}

/// Choose `k` distinct indices into `0..len` uniformly at random without
/// replacement, via a shuffle prefix over an explicit index array.
/// Worst-case cost is O(len) regardless of how the draws fall.
pub fn pick_indices(rng: &mut dyn RandomSource, len: usize, k: usize) -> Vec<usize> {
    let k = k.min(len);
    let mut indices: Vec<usize> = (0..len).collect();
    for i in 0..k {
        let j = i + (rng.next_f64() * (len - i) as f64) as usize;
        let j = j.min(len - 1);
        indices.swap(i, j);
    }
    indices.truncate(k);
    indices
}

/// Synthesize one bounded randomized update for `asset`.
pub fn synthesize_update(asset: &Asset, rng: &mut dyn RandomSource) -> AssetUpdate {
    let new_price = asset.price.value() * (1.0 + uniform(rng, -MAX_PRICE_DELTA, MAX_PRICE_DELTA));

    let mut update = AssetUpdate::new(asset.id.clone());
    update.price = Some(new_price.into());
    // Change fields are nudged additively, in percentage points.
    update.change_1h = Some(asset.change_1h + uniform(rng, -MAX_CHANGE_DELTA, MAX_CHANGE_DELTA));
    update.change_24h = Some(asset.change_24h + uniform(rng, -MAX_CHANGE_DELTA, MAX_CHANGE_DELTA));
    update.change_7d = Some(asset.change_7d + uniform(rng, -MAX_CHANGE_DELTA, MAX_CHANGE_DELTA));
    update.volume_24h = Some(
        (asset.volume_24h.value() * (1.0 + uniform(rng, -MAX_VOLUME_DELTA, MAX_VOLUME_DELTA)))
            .into(),
    );
    update.sparkline = Some(asset.sparkline.shift_push(new_price));
    update
}

/// One tick of the simulated feed: pick 1-3 distinct assets (clamped to
/// the book size) and synthesize a partial update for each. An empty
/// book yields an empty batch, which makes a tick that fires before the
/// initial fetch resolves a documented no-op.
pub fn synthesize_updates(assets: &[Asset], rng: &mut dyn RandomSource) -> Vec<AssetUpdate> {
    if assets.is_empty() {
        return Vec::new();
    }

    let span = (MAX_ASSETS_PER_TICK - MIN_ASSETS_PER_TICK + 1) as f64;
    let k = MIN_ASSETS_PER_TICK + (rng.next_f64() * span) as usize;
    let k = k.min(MAX_ASSETS_PER_TICK);

    pick_indices(rng, assets.len(), k)
        .into_iter()
        .map(|i| synthesize_update(&assets[i], rng))
        .collect()
}
