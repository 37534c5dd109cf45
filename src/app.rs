use leptos::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::{
    application::{
        comparison::{MAX_COMPARED_COINS, load_series},
        feed::{FeedSimulator, IntervalScheduler},
    },
    domain::{
        logging::{LogComponent, get_logger},
        market::{
            Asset, AssetBook, LookbackWindow, MarketOverviewService, PriceSeries, SortColumn,
            simulator::{JsRandom, synthesize_updates},
        },
    },
    format_utils::{format_compact_usd, format_percent, format_price, format_supply},
    global_state::{
        asset_book, chart_error, chart_series, feed_running, load_error, loading, lookback,
        route, selection, table_view,
    },
    infrastructure::http::CoinGeckoHttpClient,
    view_state::{CellFlash, FlashTracker, visible_assets},
};
use strum::IntoEnumIterator;

/// Assets requested on initial load.
const TOP_ASSETS_LIMIT: usize = 50;

/// Coins offered in the comparison picker.
const PICKER_LIMIT: usize = 20;

/// Top-level screens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Compare,
}

thread_local! {
    // Render-pass bookkeeping for cell flashes; never part of the store.
    static FLASH_TRACKER: RefCell<FlashTracker> = RefCell::new(FlashTracker::new());
}

/// Root component: nav plus the active screen.
#[component]
pub fn App() -> impl IntoView {
    view! {
        <style>
            {r#"
            .crypto-dash {
                font-family: 'SF Pro Display', -apple-system, BlinkMacSystemFont, sans-serif;
                background: #f7f8fa;
                min-height: 100vh;
                color: #1f2430;
            }

            .nav {
                display: flex;
                align-items: center;
                gap: 24px;
                padding: 14px 28px;
                background: white;
                border-bottom: 1px solid #e3e6ec;
            }

            .nav-title {
                font-size: 20px;
                font-weight: 700;
                background: linear-gradient(90deg, #2563eb, #4f46e5);
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
            }

            .nav-btn {
                border: none;
                background: none;
                padding: 8px 14px;
                border-radius: 8px;
                cursor: pointer;
                font-size: 14px;
                color: #4b5563;
            }

            .nav-btn.active {
                background: #e0e7ff;
                color: #3730a3;
                font-weight: 600;
            }

            .market-header {
                display: flex;
                flex-wrap: wrap;
                align-items: center;
                gap: 16px;
                padding: 18px 28px;
            }

            .search-input {
                padding: 8px 12px;
                border: 1px solid #d4d8e0;
                border-radius: 8px;
                font-size: 14px;
                min-width: 240px;
            }

            .stat-chip {
                font-size: 13px;
                color: #4b5563;
                background: white;
                border: 1px solid #e3e6ec;
                border-radius: 8px;
                padding: 6px 12px;
            }

            .table-wrap {
                margin: 0 28px 28px;
                background: white;
                border-radius: 12px;
                overflow-x: auto;
                border: 1px solid #e3e6ec;
            }

            table { width: 100%; border-collapse: collapse; }

            th {
                text-align: left;
                font-size: 11px;
                text-transform: uppercase;
                letter-spacing: 0.05em;
                color: #6b7280;
                padding: 10px 14px;
                cursor: pointer;
                white-space: nowrap;
            }

            th.sorted { color: #111827; }

            td {
                padding: 12px 14px;
                border-top: 1px solid #eef0f4;
                font-size: 14px;
                white-space: nowrap;
            }

            .gain { color: #16a34a; }
            .loss { color: #dc2626; }
            .muted { color: #6b7280; }

            .flash-cell { animation: cell-flash 1s ease-out; }
            @keyframes cell-flash {
                0% { background: #fde68a; }
                100% { background: transparent; }
            }

            .star-btn {
                border: none;
                background: none;
                cursor: pointer;
                font-size: 16px;
                color: #c7cbd4;
            }
            .star-btn.fav { color: #f59e0b; }

            .supply-bar {
                height: 4px;
                background: #e5e7eb;
                border-radius: 2px;
                margin-top: 4px;
                overflow: hidden;
            }
            .supply-bar > div { height: 100%; background: #3b82f6; }

            .banner {
                margin: 0 28px 16px;
                padding: 12px 16px;
                border-radius: 8px;
                font-size: 14px;
            }
            .banner.error { background: #fee2e2; color: #991b1b; }
            .banner.info { background: #e0e7ff; color: #3730a3; }

            .compare { padding: 18px 28px; }
            .picker { display: flex; flex-wrap: wrap; gap: 8px; margin: 12px 0; }
            .pick-btn {
                border: 1px solid #d4d8e0;
                background: white;
                border-radius: 8px;
                padding: 6px 12px;
                font-size: 13px;
                cursor: pointer;
            }
            .pick-btn.selected { background: #dbeafe; border-color: #93c5fd; color: #1e40af; }

            .chart-box {
                background: white;
                border: 1px solid #e3e6ec;
                border-radius: 12px;
                padding: 16px;
                margin-top: 12px;
            }

            .legend { display: flex; gap: 16px; flex-wrap: wrap; margin-bottom: 8px; font-size: 13px; }
            .legend-dot { display: inline-block; width: 10px; height: 10px; border-radius: 5px; margin-right: 6px; }

            .cards { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 12px; margin-top: 16px; }
            .card {
                background: white;
                border: 1px solid #e3e6ec;
                border-radius: 10px;
                padding: 12px 14px;
                font-size: 13px;
            }
            "#}
        </style>
        <div class="crypto-dash">
            <NavBar />
            {move || match route().get() {
                Route::Dashboard => view! { <MarketTable /> }.into_view(),
                Route::Compare => view! { <ComparisonView /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn NavBar() -> impl IntoView {
    let nav_class = move |target: Route| {
        if route().get() == target { "nav-btn active" } else { "nav-btn" }
    };

    view! {
        <nav class="nav">
            <span class="nav-title">"CryptoDash"</span>
            <button class=move || nav_class(Route::Dashboard)
                on:click=move |_| route().set(Route::Dashboard)>
                "Dashboard"
            </button>
            <button class=move || nav_class(Route::Compare)
                on:click=move |_| route().set(Route::Compare)>
                "Compare"
            </button>
            <span class="stat-chip">
                {move || if feed_running().get() { "live feed: on" } else { "live feed: off" }}
            </span>
        </nav>
    }
}

/// Search, favorites filter and aggregate market stats.
#[component]
fn MarketHeader() -> impl IntoView {
    let overview = move || {
        asset_book().with(|book| MarketOverviewService::new().overview(book.assets()))
    };

    view! {
        <div class="market-header">
            <input
                class="search-input"
                type="text"
                placeholder="Search name or symbol..."
                prop:value=move || table_view().with(|v| v.search_term.clone())
                on:input=move |ev| {
                    table_view().update(|v| v.search_term = event_target_value(&ev));
                }
            />
            <button
                class=move || {
                    if table_view().with(|v| v.favorites_only) { "pick-btn selected" } else { "pick-btn" }
                }
                on:click=move |_| table_view().update(|v| v.favorites_only = !v.favorites_only)
            >
                "★ Favorites"
            </button>
            <span class="stat-chip">
                {move || format!("Market Cap {}", format_compact_usd(overview().total_market_cap))}
            </span>
            <span class="stat-chip">
                {move || format!("24h Volume {}", format_compact_usd(overview().total_volume_24h))}
            </span>
            <span class="stat-chip">
                {move || {
                    let o = overview();
                    format!("{} gainers / {} losers", o.gainers_24h, o.losers_24h)
                }}
            </span>
        </div>
    }
}

/// The main dashboard: fetch on mount, simulated feed while mounted,
/// sortable/filterable rows with per-cell flashes.
#[component]
fn MarketTable() -> impl IntoView {
    // Initial load. The simulator below runs regardless of the outcome;
    // ticks against an empty book are no-ops.
    spawn_local(async move {
        let client = CoinGeckoHttpClient::new();
        match client.get_top_assets(TOP_ASSETS_LIMIT).await {
            Ok(assets) => {
                asset_book().update(|book| book.replace_all(assets));
                load_error().set(None);
                loading().set(false);
            }
            Err(e) => {
                get_logger().error(
                    LogComponent::Presentation("MarketTable"),
                    &format!("Initial load failed: {}", e),
                );
                load_error().set(Some(e.to_string()));
                loading().set(false);
            }
        }
    });

    // The feed simulator is owned here, by the component that owns the
    // view lifecycle. No global instance.
    let feed = Rc::new(RefCell::new(FeedSimulator::new(IntervalScheduler)));
    feed.borrow_mut().start(Box::new(|| {
        asset_book().update(|book| {
            let updates = synthesize_updates(book.assets(), &mut JsRandom);
            if !updates.is_empty() {
                book.merge_many(updates);
            }
        });
    }));
    feed_running().set(true);

    let feed_cleanup = Rc::clone(&feed);
    on_cleanup(move || {
        feed_cleanup.borrow_mut().stop();
        feed_running().set(false);
        FLASH_TRACKER.with(|t| t.borrow_mut().clear());
    });

    let rows = move || {
        let state = table_view().get();
        asset_book().with(|book| {
            visible_assets(book.assets(), &state)
                .into_iter()
                .map(|asset| {
                    let flash = FLASH_TRACKER.with(|t| t.borrow_mut().observe(asset));
                    let is_fav = state.is_favorite(&asset.id);
                    view! { <AssetRow asset=asset.clone() flash=flash is_fav=is_fav /> }
                })
                .collect_view()
        })
    };

    view! {
        <MarketHeader />
        {move || load_error().get().map(|msg| view! {
            <div class="banner error">{format!("Failed to load market data: {}", msg)}</div>
        })}
        {move || loading().get().then(|| view! {
            <div class="banner info">"Loading market data..."</div>
        })}
        <div class="table-wrap">
            <table>
                <thead>
                    <tr>
                        <th></th>
                        <SortableHeader column=SortColumn::Rank />
                        <SortableHeader column=SortColumn::Name />
                        <SortableHeader column=SortColumn::Price />
                        <SortableHeader column=SortColumn::Change1h />
                        <SortableHeader column=SortColumn::Change24h />
                        <SortableHeader column=SortColumn::Change7d />
                        <SortableHeader column=SortColumn::MarketCap />
                        <SortableHeader column=SortColumn::Volume />
                        <th>"Supply"</th>
                        <th>"Last 7 Days"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </div>
    }
}

#[component]
fn SortableHeader(column: SortColumn) -> impl IntoView {
    let class = move || {
        if table_view().with(|v| v.sort.column == column) { "sorted" } else { "" }
    };
    let arrow = move || {
        table_view().with(|v| {
            if v.sort.column != column {
                ""
            } else if v.sort.direction == crate::domain::market::SortDirection::Ascending {
                " ▲"
            } else {
                " ▼"
            }
        })
    };

    view! {
        <th class=class on:click=move |_| table_view().update(|v| v.toggle_sort(column))>
            {column.label()}{arrow}
        </th>
    }
}

fn change_class(value: f64, flashed: bool) -> String {
    let color = if value >= 0.0 { "gain" } else { "loss" };
    if flashed { format!("{} flash-cell", color) } else { color.to_string() }
}

#[component]
fn AssetRow(asset: Asset, flash: CellFlash, is_fav: bool) -> impl IntoView {
    let id = asset.id.clone();
    let supply_pct = asset.supply_ratio().map(|r| r * 100.0);

    view! {
        <tr>
            <td>
                <button
                    class=if is_fav { "star-btn fav" } else { "star-btn" }
                    on:click=move |_| table_view().update(|v| v.toggle_favorite(&id))
                >
                    {if is_fav { "★" } else { "☆" }}
                </button>
            </td>
            <td class="muted">{asset.rank}</td>
            <td>
                <div>{asset.name.clone()}</div>
                <div class="muted">{asset.symbol.clone()}</div>
            </td>
            <td class=if flash.price { "flash-cell" } else { "" }>
                {format_price(asset.price.value())}
            </td>
            <td class=change_class(asset.change_1h, flash.change_1h)>
                {format_percent(asset.change_1h)}
            </td>
            <td class=change_class(asset.change_24h, flash.change_24h)>
                {format_percent(asset.change_24h)}
            </td>
            <td class=change_class(asset.change_7d, flash.change_7d)>
                {format_percent(asset.change_7d)}
            </td>
            <td class="muted">{format_compact_usd(asset.market_cap)}</td>
            <td class=if flash.volume_24h { "muted flash-cell" } else { "muted" }>
                {format_compact_usd(asset.volume_24h.value())}
            </td>
            <td>
                <div>{format_supply(asset.circulating_supply)} " " {asset.symbol.clone()}</div>
                {match supply_pct {
                    Some(pct) => view! {
                        <div class="supply-bar">
                            <div style=format!("width: {:.0}%", pct)></div>
                        </div>
                    }.into_view(),
                    None => view! { <span class="muted">"∞"</span> }.into_view(),
                }}
            </td>
            <td><SparklineChart samples=asset.sparkline.samples().to_vec() /></td>
        </tr>
    }
}

/// Miniature 7d trend line, green when the window closes at or above
/// its open.
#[component]
fn SparklineChart(samples: Vec<f64>) -> impl IntoView {
    if samples.len() < 2 {
        return view! { <span class="muted">"-"</span> }.into_view();
    }

    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if max > min { max - min } else { 1.0 };

    let points = samples
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let x = i as f64 / (samples.len() - 1) as f64 * 100.0;
            let y = 100.0 - (value - min) / range * 100.0;
            format!("{:.2},{:.2}", x, y)
        })
        .collect::<Vec<_>>()
        .join(" ");

    let color = if samples[samples.len() - 1] >= samples[0] { "#16a34a" } else { "#dc2626" };

    view! {
        <svg width="110" height="36" viewBox="0 0 100 100" preserveAspectRatio="none">
            <polyline points=points fill="none" stroke=color stroke-width="2" />
        </svg>
    }
    .into_view()
}

/// Historical comparison of up to five selected coins.
#[component]
fn ComparisonView() -> impl IntoView {
    // Refetch whenever the selection or the lookback window changes.
    create_effect(move |_| {
        let current = selection().get();
        let window = lookback().get();
        if current.is_empty() {
            chart_series().set(Vec::new());
            chart_error().set(None);
            return;
        }
        spawn_local(async move {
            let client = CoinGeckoHttpClient::new();
            let assets = asset_book().with_untracked(|book| book.assets().to_vec());
            match load_series(&client, &assets, &current, window).await {
                Ok(series) => {
                    chart_series().set(series);
                    chart_error().set(None);
                }
                Err(e) => {
                    get_logger().error(
                        LogComponent::Presentation("ComparisonView"),
                        &format!("Series fetch failed: {}", e),
                    );
                    chart_error().set(Some(e.to_string()));
                }
            }
        });
    });

    let picker = move || {
        asset_book().with(|book| {
            book.assets()
                .iter()
                .take(PICKER_LIMIT)
                .map(|asset| {
                    let id = asset.id.clone();
                    let id_click = id.clone();
                    let symbol = asset.symbol.clone();
                    view! {
                        <button
                            class=move || {
                                if selection().with(|s| s.is_selected(&id)) {
                                    "pick-btn selected"
                                } else {
                                    "pick-btn"
                                }
                            }
                            on:click=move |_| {
                                selection().update(|s| { s.toggle(&id_click); });
                            }
                        >
                            {symbol}
                        </button>
                    }
                })
                .collect_view()
        })
    };

    let windows = move || {
        LookbackWindow::iter()
            .map(|window| {
                view! {
                    <button
                        class=move || {
                            if lookback().get() == window { "pick-btn selected" } else { "pick-btn" }
                        }
                        on:click=move |_| lookback().set(window)
                    >
                        {window.to_string()}
                    </button>
                }
            })
            .collect_view()
    };

    view! {
        <div class="compare">
            <h2>"Price Comparison"</h2>
            <div class="picker">{windows}</div>
            <div class="picker">{picker}</div>
            <p class="muted">{format!("Select up to {} coins", MAX_COMPARED_COINS)}</p>
            {move || chart_error().get().map(|msg| view! {
                <div class="banner error">{format!("Chart data unavailable: {}", msg)}</div>
            })}
            <div class="chart-box">
                {move || {
                    let series = chart_series().get();
                    if series.is_empty() {
                        view! { <p class="muted">"Select coins to compare"</p> }.into_view()
                    } else {
                        view! { <ComparisonChart series=series /> }.into_view()
                    }
                }}
            </div>
            <ComparisonCards />
        </div>
    }
}

/// Multi-series line chart, each series normalized into a shared frame.
#[component]
fn ComparisonChart(series: Vec<PriceSeries>) -> impl IntoView {
    let (mut t_min, mut t_max) = (u64::MAX, u64::MIN);
    let (mut p_min, mut p_max) = (f64::INFINITY, f64::NEG_INFINITY);
    for s in &series {
        for point in &s.points {
            t_min = t_min.min(point.timestamp_ms);
            t_max = t_max.max(point.timestamp_ms);
            p_min = p_min.min(point.price);
            p_max = p_max.max(point.price);
        }
    }
    let t_span = (t_max.saturating_sub(t_min)).max(1) as f64;
    let p_span = if p_max > p_min { p_max - p_min } else { 1.0 };

    let legend = series
        .iter()
        .map(|s| {
            view! {
                <span>
                    <span class="legend-dot" style=format!("background: {}", s.color)></span>
                    {s.label.clone()}
                </span>
            }
        })
        .collect_view();

    let lines = series
        .iter()
        .map(|s| {
            let points = s
                .points
                .iter()
                .map(|p| {
                    let x = (p.timestamp_ms - t_min) as f64 / t_span * 1000.0;
                    let y = 400.0 - (p.price - p_min) / p_span * 400.0;
                    format!("{:.1},{:.1}", x, y)
                })
                .collect::<Vec<_>>()
                .join(" ");
            view! {
                <polyline points=points fill="none" stroke=s.color stroke-width="2" />
            }
        })
        .collect_view();

    view! {
        <div class="legend">{legend}</div>
        <svg width="100%" height="420" viewBox="0 0 1000 400" preserveAspectRatio="none">
            {lines}
        </svg>
    }
}

/// Live stat cards for the selected coins, fed by the same book the
/// dashboard mutates.
#[component]
fn ComparisonCards() -> impl IntoView {
    let cards = move || {
        let current = selection().get();
        asset_book().with(|book| {
            current
                .coins()
                .iter()
                .filter_map(|id| book.get(id).cloned())
                .map(|asset| {
                    view! {
                        <div class="card">
                            <strong>{asset.name.clone()}</strong>
                            <div>"Price: " {format_price(asset.price.value())}</div>
                            <div>
                                "24h: "
                                <span class=change_class(asset.change_24h, false)>
                                    {format_percent(asset.change_24h)}
                                </span>
                            </div>
                            <div>"Market Cap: " {format_compact_usd(asset.market_cap)}</div>
                            <div>"Volume: " {format_compact_usd(asset.volume_24h.value())}</div>
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! { <div class="cards">{cards}</div> }
}
