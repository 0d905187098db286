//! Application state for the interactive browser.
//!
//! `App` is the single owner of all mutable state. Every user action goes
//! through a method here that mutates state *and* recomputes the derived
//! view in the same step, so no frame can observe an inconsistent
//! intermediate (e.g. a flipped direction with a stale key). The derived
//! view is always `sort(filter(dataset))`, held as indices into the
//! dataset.

use crate::config::{AppConfig, TuiPreferences};
use crate::data::{DataEvent, DataStore, LoadState};
use crate::error::Result;
use crate::model::{Device, Rubric};
use crate::reports::ReportFormat;
use crate::tui::clipboard::copy_to_clipboard;
use crate::tui::constants::{SEARCH_DEBOUNCE, STATUS_TTL};
use crate::tui::events::Event;
use crate::tui::export::{export_structured, export_view};
use crate::tui::motion::MotionState;
use crate::tui::state::{ListNavigation, ListState};
use crate::tui::theme::{self, ThemeName};
use crate::tui::viewmodel::{OverlayKind, OverlayState, SearchInput, StatusMessage};
use crate::view::{
    derive_view, from_query, item_list, to_query, FilterState, SelectionSet, SortKey, SortState,
    Toggle,
};
use chrono::{DateTime, Utc};
use ratatui::layout::Rect;
use std::sync::mpsc::Sender;
use std::time::Instant;

/// Top-level tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Devices,
    Methodology,
}

/// Export menu entries, in display order.
pub(crate) const EXPORT_FORMATS: [ReportFormat; 3] = [
    ReportFormat::Csv,
    ReportFormat::Json,
    ReportFormat::Structured,
];

/// Main application state.
pub struct App {
    // Data
    pub(crate) store: DataStore,
    pub(crate) dataset: Vec<Device>,
    pub(crate) brands: Vec<String>,
    pub(crate) data_error: Option<String>,
    pub(crate) dataset_published: bool,
    pub(crate) loaded_from_cache: bool,
    pub(crate) rubric: LoadState<Rubric>,
    pub(crate) freshness: LoadState<Option<DateTime<Utc>>>,

    // View state
    pub(crate) filter: FilterState,
    pub(crate) sort: SortState,
    pub(crate) selection: SelectionSet,
    pub(crate) view: Vec<usize>,
    pub(crate) table: ListState,
    pub(crate) structured: serde_json::Value,

    // UI state
    pub(crate) active_tab: Tab,
    pub(crate) overlay: OverlayState,
    pub(crate) overlay_menu: ListState,
    pub(crate) rubric_versions: ListState,
    pub(crate) search: SearchInput,
    pub(crate) status: StatusMessage,
    pub(crate) motion: MotionState,
    pub(crate) should_quit: bool,

    // Geometry written back by the renderer each frame, consumed by
    // mouse hit-testing and overlay anchoring
    pub(crate) table_area: Rect,
    pub(crate) row_anchor: Option<Rect>,
    pub(crate) info_anchor: Rect,
    pub(crate) overlay_rect: Option<Rect>,

    output_dir: Option<std::path::PathBuf>,
    events_tx: Sender<Event>,
}

impl App {
    /// Build the app and start the initial load: cache first (synchronous,
    /// best-effort), then the canonical fetch in the background.
    pub fn new(config: &AppConfig, events_tx: Sender<Event>) -> Result<Self> {
        let store = DataStore::new(&config.data)?;

        // Persisted preferences (written by the theme toggle) win over the
        // config defaults
        let prefs_on_disk = TuiPreferences::config_path().is_some_and(|p| p.is_file());
        let prefs = TuiPreferences::load();
        let theme_name = if prefs_on_disk {
            prefs.theme.clone()
        } else {
            config.tui.theme.clone()
        };
        let reduced_motion = config.tui.reduced_motion || prefs.reduced_motion;

        let mut app = Self {
            store,
            dataset: Vec::new(),
            brands: Vec::new(),
            data_error: None,
            dataset_published: false,
            loaded_from_cache: false,
            rubric: LoadState::Unloaded,
            freshness: LoadState::Unloaded,

            filter: FilterState::default(),
            sort: SortState::default(),
            selection: SelectionSet::new(),
            view: Vec::new(),
            table: ListState::new(),
            structured: serde_json::Value::Null,

            active_tab: Tab::Devices,
            overlay: OverlayState::new(),
            overlay_menu: ListState::new(),
            rubric_versions: ListState::new(),
            search: SearchInput::new(SEARCH_DEBOUNCE),
            status: StatusMessage::with_auto_clear(STATUS_TTL),
            motion: MotionState::new(reduced_motion),
            should_quit: false,

            table_area: Rect::default(),
            row_anchor: None,
            info_anchor: Rect::default(),
            overlay_rect: None,

            output_dir: config.output.dir.clone(),
            events_tx,
        };

        theme::set_theme(ThemeName::parse(&theme_name));

        // Stale-while-revalidate: the cached copy renders first, the
        // network result replaces it when it lands.
        if let Some(cached) = app.store.load_cached() {
            tracing::info!(count = cached.len(), "published cached dataset");
            app.publish_dataset(cached, true);
        }
        app.request_refresh(false);
        app.probe_freshness();

        Ok(app)
    }

    // ------------------------------------------------------------------
    // Dataset lifecycle
    // ------------------------------------------------------------------

    /// Replace the in-memory dataset and rebuild everything derived.
    pub(crate) fn publish_dataset(&mut self, devices: Vec<Device>, from_cache: bool) {
        self.dataset = devices;
        self.dataset_published = true;
        self.loaded_from_cache = from_cache;
        self.brands = collect_brands(&self.dataset);
        self.refresh_view();
    }

    /// Start a background dataset fetch unless one is already pending.
    pub(crate) fn request_refresh(&mut self, user_initiated: bool) {
        let tx = self.events_tx.clone();
        let started = self
            .store
            .spawn_fetch(move |event| drop(tx.send(Event::Data(event))));
        if user_initiated {
            if started {
                self.status.set("Refreshing dataset...");
                self.probe_freshness();
            } else {
                self.status.set("Refresh already in progress");
            }
        }
    }

    fn probe_freshness(&mut self) {
        if self.freshness.is_loading() {
            return;
        }
        let tx = self.events_tx.clone();
        if self
            .store
            .spawn_freshness_probe(move |event| drop(tx.send(Event::Data(event))))
        {
            self.freshness = LoadState::Loading;
        }
    }

    /// Handle a completed background data operation.
    pub(crate) fn on_data_event(&mut self, event: DataEvent) {
        match event {
            DataEvent::Devices { generation, result } => {
                // A stale fetch must never clobber fresher data
                if self.store.is_stale(generation) {
                    tracing::debug!(generation, "dropping stale dataset result");
                    return;
                }
                match result {
                    Ok(devices) => {
                        self.data_error = None;
                        self.publish_dataset(devices, false);
                    }
                    Err(err) => {
                        // Keep any previously rendered data on screen
                        self.data_error = Some(err);
                    }
                }
            }
            DataEvent::Rubric(result) => {
                self.rubric = match result {
                    Ok(rubric) => {
                        self.rubric_versions.set_total(rubric.versions.len());
                        LoadState::Ready(rubric)
                    }
                    Err(err) => LoadState::Failed(err),
                };
            }
            DataEvent::Freshness(result) => {
                self.freshness = match result {
                    Ok(timestamp) => LoadState::Ready(timestamp),
                    Err(err) => LoadState::Failed(err),
                };
            }
        }
    }

    // ------------------------------------------------------------------
    // Derived view
    // ------------------------------------------------------------------

    /// Recompute the derived view from scratch and everything hanging off
    /// it (selection clamp, structured metadata). Called after every state
    /// mutation; never patched incrementally.
    pub(crate) fn refresh_view(&mut self) {
        self.view = derive_view(&self.dataset, &self.filter, &self.sort);
        self.table.set_total(self.view.len());
        self.table.clamp_selection();
        self.structured = item_list(&self.view_devices());
    }

    /// The derived view as device references, in order.
    pub(crate) fn view_devices(&self) -> Vec<&Device> {
        self.view.iter().map(|&i| &self.dataset[i]).collect()
    }

    /// The device under the cursor, if any.
    pub(crate) fn selected_device(&self) -> Option<&Device> {
        self.view
            .get(self.table.selected)
            .map(|&i| &self.dataset[i])
    }

    // ------------------------------------------------------------------
    // Filter / sort mutations
    // ------------------------------------------------------------------

    pub(crate) fn toggle_sort(&mut self, key: SortKey) {
        self.sort.toggle(key);
        self.refresh_view();
    }

    /// Cycle the brand filter through (any, brand1, brand2, ...).
    pub(crate) fn cycle_brand(&mut self, forward: bool) {
        if self.brands.is_empty() {
            return;
        }
        let current = self
            .filter
            .brand
            .as_deref()
            .and_then(|b| self.brands.iter().position(|x| x == b));
        let next = match (current, forward) {
            (None, true) => Some(0),
            (None, false) => Some(self.brands.len() - 1),
            (Some(i), true) if i + 1 < self.brands.len() => Some(i + 1),
            (Some(_), true) => None,
            (Some(0), false) => None,
            (Some(i), false) => Some(i - 1),
        };
        self.filter.brand = next.map(|i| self.brands[i].clone());
        self.refresh_view();
    }

    /// Step the score filter through (any, 0, 1, ..., 10).
    pub(crate) fn adjust_score_filter(&mut self, up: bool) {
        self.filter.score = match (self.filter.score, up) {
            (None, true) => Some(0),
            (Some(10), true) => None,
            (Some(s), true) => Some(s + 1),
            (None, false) => Some(10),
            (Some(0), false) => None,
            (Some(s), false) => Some(s - 1),
        };
        self.refresh_view();
    }

    pub(crate) fn toggle_unscored(&mut self) {
        self.filter.include_unscored = !self.filter.include_unscored;
        self.refresh_view();
    }

    pub(crate) fn clear_filters(&mut self) {
        self.filter = FilterState::default();
        self.sort = SortState::default();
        self.refresh_view();
    }

    /// Apply a debounced or committed search query.
    pub(crate) fn apply_search(&mut self, query: String) {
        if self.filter.search != query {
            self.filter.search = query;
            self.refresh_view();
        }
    }

    // ------------------------------------------------------------------
    // Selection / comparison
    // ------------------------------------------------------------------

    pub(crate) fn toggle_selection(&mut self) {
        let Some(device) = self.selected_device() else {
            return;
        };
        let name = device.name.clone();
        match self.selection.toggle(device.key()) {
            Toggle::Added => self.status.set(format!("Added {name} to comparison")),
            Toggle::Removed => self.status.set(format!("Removed {name} from comparison")),
            Toggle::Rejected => self
                .status
                .set("Comparison is full (5 devices max) - remove one first"),
        }
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selection.clear();
        self.status.set("Comparison cleared");
    }

    pub(crate) fn open_compare(&mut self) {
        if self.selection.can_compare(&self.dataset) {
            self.overlay.show(OverlayKind::Compare);
        } else {
            self.status.set("Select at least 2 devices to compare");
        }
    }

    // ------------------------------------------------------------------
    // Overlays
    // ------------------------------------------------------------------

    /// Toggle an overlay, resetting its menu cursor on open.
    pub(crate) fn toggle_overlay(&mut self, kind: OverlayKind) {
        let total = match kind {
            OverlayKind::Teardowns => {
                let Some(device) = self.selected_device() else {
                    return;
                };
                if device.teardown_urls.is_empty() {
                    self.status.set("No teardown guides for this device");
                    return;
                }
                device.teardown_count()
            }
            OverlayKind::ExportMenu => EXPORT_FORMATS.len(),
            _ => 0,
        };
        self.overlay.toggle(kind);
        if self.overlay.is_showing(kind) {
            self.overlay_menu = ListState::new();
            self.overlay_menu.set_total(total);
        } else {
            self.overlay_rect = None;
        }
    }

    pub(crate) fn close_overlay(&mut self) {
        self.overlay.close();
        self.overlay_rect = None;
    }

    // ------------------------------------------------------------------
    // Methodology
    // ------------------------------------------------------------------

    /// Switch tabs; the rubric loads lazily on first activation.
    pub(crate) fn set_tab(&mut self, tab: Tab) {
        self.active_tab = tab;
        self.close_overlay();
        if tab == Tab::Methodology && self.rubric.wants_load() {
            let tx = self.events_tx.clone();
            if self
                .store
                .spawn_rubric_fetch(move |event| drop(tx.send(Event::Data(event))))
            {
                self.rubric = LoadState::Loading;
            } else {
                self.rubric = LoadState::Failed("offline: rubric not fetched".to_string());
            }
        }
    }

    // ------------------------------------------------------------------
    // Share string / clipboard / export
    // ------------------------------------------------------------------

    /// The shareable state string for the current view.
    #[must_use]
    pub(crate) fn share_string(&self) -> String {
        to_query(&self.filter, &self.sort)
    }

    /// Restore filter/sort state from a share string.
    pub fn apply_state_string(&mut self, query: &str) -> Result<()> {
        let state = from_query(query)?;
        self.filter = state.filter;
        self.sort = state.sort;
        self.refresh_view();
        Ok(())
    }

    pub(crate) fn copy_share_string(&mut self) {
        let share = self.share_string();
        let shown = if share.is_empty() { "(default view)" } else { &share };
        if copy_to_clipboard(&share) {
            self.status.set(format!("Copied state: {shown}"));
        } else {
            self.status
                .set(format!("Clipboard unavailable - state: {shown}"));
        }
    }

    pub(crate) fn copy_device_link(&mut self) {
        let Some(device) = self.selected_device() else {
            return;
        };
        match &device.link {
            Some(link) => {
                let link = link.clone();
                if copy_to_clipboard(&link) {
                    self.status.set(format!("Copied {link}"));
                } else {
                    self.status.set("Clipboard unavailable");
                }
            }
            None => self.status.set("No link for this device"),
        }
    }

    /// Export the current view in the chosen format. The structured
    /// document was already computed during the last render pass, so that
    /// format writes it as-is.
    pub(crate) fn export_current(&mut self, format: ReportFormat) {
        let result = match format {
            ReportFormat::Structured => {
                export_structured(&self.structured, self.output_dir.as_ref())
            }
            _ => export_view(format, &self.view_devices(), self.output_dir.as_ref()),
        };
        self.status.set(result.message);
        self.close_overlay();
    }

    // ------------------------------------------------------------------
    // Ticks
    // ------------------------------------------------------------------

    /// One tick frame: advance animations, expire the search debounce.
    pub(crate) fn on_tick(&mut self) {
        self.motion.tick();
        if let Some(query) = self.search.take_if_due(Instant::now()) {
            self.apply_search(query);
        }
    }

    pub(crate) fn toggle_theme(&mut self) {
        let name = theme::toggle_theme();
        let mut prefs = TuiPreferences::load();
        prefs.theme = name.as_str().to_string();
        if let Err(err) = prefs.save() {
            tracing::warn!(%err, "failed to persist theme preference");
        }
        self.status.set(format!("Theme: {}", name.as_str()));
    }

    pub(crate) fn quit(&mut self) {
        self.should_quit = true;
    }
}

/// Sorted, deduplicated brand list for the brand filter cycle.
fn collect_brands(dataset: &[Device]) -> Vec<String> {
    let mut brands: Vec<String> = dataset
        .iter()
        .filter_map(|d| d.brand.clone())
        .collect();
    brands.sort();
    brands.dedup();
    brands
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use std::sync::mpsc;

    fn test_app() -> (App, mpsc::Receiver<Event>) {
        let dir = tempfile::tempdir().unwrap();
        let mut config = AppConfig::default();
        config.data.offline = true;
        config.data.cache_dir = Some(dir.into_path());
        config.tui.reduced_motion = true;
        let (tx, rx) = mpsc::channel();
        let app = App::new(&config, tx).unwrap();
        (app, rx)
    }

    fn device(name: &str, brand: Option<&str>, score: Option<f64>) -> Device {
        Device {
            name: name.to_string(),
            title: None,
            repairability_score: score,
            scorecard_version: None,
            brand: brand.map(str::to_string),
            link: None,
            teardown_urls: Vec::new(),
        }
    }

    fn dataset() -> Vec<Device> {
        vec![
            device("A", Some("X"), Some(9.0)),
            device("B", Some("Y"), Some(3.0)),
            device("C", Some("X"), None),
        ]
    }

    #[test]
    fn test_publish_rebuilds_view_and_brands() {
        let (mut app, _rx) = test_app();
        app.publish_dataset(dataset(), false);
        assert_eq!(app.view.len(), 2); // C hidden: unscored excluded by default
        assert_eq!(app.brands, vec!["X", "Y"]);
    }

    #[test]
    fn test_stale_fetch_does_not_clobber() {
        let (mut app, _rx) = test_app();
        app.publish_dataset(dataset(), false);
        app.store.set_generation_for_tests(2);

        app.on_data_event(DataEvent::Devices {
            generation: 1,
            result: Ok(vec![device("stale", None, Some(1.0))]),
        });
        // Stale result dropped: dataset unchanged
        assert_eq!(app.dataset.len(), 3);

        app.on_data_event(DataEvent::Devices {
            generation: 2,
            result: Ok(vec![device("fresh", None, Some(1.0))]),
        });
        assert_eq!(app.dataset.len(), 1);
        assert_eq!(app.dataset[0].name, "fresh");
    }

    #[test]
    fn test_fetch_failure_keeps_prior_data() {
        let (mut app, _rx) = test_app();
        app.publish_dataset(dataset(), true);
        let generation = app.store.generation();

        app.on_data_event(DataEvent::Devices {
            generation,
            result: Err("HTTP 500".to_string()),
        });
        assert!(app.data_error.as_deref().unwrap().contains("500"));
        assert_eq!(app.dataset.len(), 3);
        assert!(!app.view.is_empty());
    }

    #[test]
    fn test_selection_survives_filter_changes() {
        let (mut app, _rx) = test_app();
        app.publish_dataset(dataset(), false);

        app.toggle_selection(); // selects "A"
        assert_eq!(app.selection.len(), 1);

        app.apply_search("B".to_string());
        assert_eq!(app.view.len(), 1);
        // Selection is independent of the filtered view
        assert_eq!(app.selection.len(), 1);

        app.apply_search(String::new());
        assert_eq!(app.selection.len(), 1);
    }

    #[test]
    fn test_sort_toggle_via_app() {
        let (mut app, _rx) = test_app();
        app.publish_dataset(dataset(), false);

        app.toggle_sort(SortKey::Score);
        let names: Vec<_> = app.view_devices().iter().map(|d| d.name.clone()).collect();
        assert_eq!(names, vec!["B", "A"]);

        app.toggle_sort(SortKey::Score);
        let names: Vec<_> = app.view_devices().iter().map(|d| d.name.clone()).collect();
        assert_eq!(names, vec!["A", "B"]);
    }

    #[test]
    fn test_score_filter_cycle() {
        let (mut app, _rx) = test_app();
        app.publish_dataset(dataset(), false);

        app.adjust_score_filter(true);
        assert_eq!(app.filter.score, Some(0));
        app.adjust_score_filter(false);
        assert_eq!(app.filter.score, None);
        app.adjust_score_filter(false);
        assert_eq!(app.filter.score, Some(10));
        app.adjust_score_filter(true);
        assert_eq!(app.filter.score, None);
    }

    #[test]
    fn test_brand_cycle_round_trips() {
        let (mut app, _rx) = test_app();
        app.publish_dataset(dataset(), false);

        assert_eq!(app.filter.brand, None);
        app.cycle_brand(true);
        assert_eq!(app.filter.brand.as_deref(), Some("X"));
        app.cycle_brand(true);
        assert_eq!(app.filter.brand.as_deref(), Some("Y"));
        app.cycle_brand(true);
        assert_eq!(app.filter.brand, None);
        app.cycle_brand(false);
        assert_eq!(app.filter.brand.as_deref(), Some("Y"));
    }

    #[test]
    fn test_share_string_round_trip_via_app() {
        let (mut app, _rx) = test_app();
        app.publish_dataset(dataset(), false);

        app.apply_search("pixel".to_string());
        app.toggle_sort(SortKey::Score);
        app.toggle_sort(SortKey::Score); // desc
        app.toggle_unscored();

        let share = app.share_string();
        let mut other = test_app().0;
        other.publish_dataset(dataset(), false);
        other.apply_state_string(&share).unwrap();

        assert_eq!(other.filter, app.filter);
        assert_eq!(other.sort, app.sort);
    }

    #[test]
    fn test_structured_metadata_tracks_view() {
        let (mut app, _rx) = test_app();
        app.publish_dataset(dataset(), false);

        assert_eq!(app.structured["numberOfItems"], 2);
        app.apply_search("A".to_string());
        assert_eq!(app.structured["numberOfItems"], 1);
    }

    #[test]
    fn test_compare_requires_two_devices() {
        let (mut app, _rx) = test_app();
        app.publish_dataset(dataset(), false);

        app.toggle_selection();
        app.open_compare();
        assert!(!app.overlay.is_showing(OverlayKind::Compare));

        app.table.select_next();
        app.toggle_selection();
        app.open_compare();
        assert!(app.overlay.is_showing(OverlayKind::Compare));
    }
}
