use crate::app::Route;
use crate::application::comparison::ComparisonSelection;
use crate::domain::market::{AssetBook, LookbackWindow, PriceSeries};
use crate::view_state::TableViewState;
use leptos::*;
use once_cell::sync::OnceCell;

pub struct Globals {
    pub route: RwSignal<Route>,
    pub asset_book: RwSignal<AssetBook>,
    pub loading: RwSignal<bool>,
    pub load_error: RwSignal<Option<String>>,
    pub table_view: RwSignal<TableViewState>,
    pub feed_running: RwSignal<bool>,
    pub selection: RwSignal<ComparisonSelection>,
    pub lookback: RwSignal<LookbackWindow>,
    pub chart_series: RwSignal<Vec<PriceSeries>>,
    pub chart_error: RwSignal<Option<String>>,
}

static GLOBALS: OnceCell<Globals> = OnceCell::new();

pub fn globals() -> &'static Globals {
    GLOBALS.get_or_init(|| Globals {
        route: create_rw_signal(Route::Dashboard),
        asset_book: create_rw_signal(AssetBook::new()),
        loading: create_rw_signal(true),
        load_error: create_rw_signal(None),
        table_view: create_rw_signal(TableViewState::new()),
        feed_running: create_rw_signal(false),
        selection: create_rw_signal(ComparisonSelection::new()),
        lookback: create_rw_signal(LookbackWindow::Week),
        chart_series: create_rw_signal(Vec::new()),
        chart_error: create_rw_signal(None),
    })
}

crate::global_signals! {
    pub route => route: Route,
    pub asset_book => asset_book: AssetBook,
    pub loading => loading: bool,
    pub load_error => load_error: Option<String>,
    pub table_view => table_view: TableViewState,
    pub feed_running => feed_running: bool,
    pub selection => selection: ComparisonSelection,
    pub lookback => lookback: LookbackWindow,
    pub chart_series => chart_series: Vec<PriceSeries>,
    pub chart_error => chart_error: Option<String>,
}
