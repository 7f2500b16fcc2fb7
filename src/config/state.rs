// src/config/state.rs
use super::binder::{self, ConfigEvent, Universe};
use super::options::{ExportOptions, MonitorConfig};
use crate::data::SortKey;

/// Sidebar sections, in display order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
    #[default]
    Dashboard,
    Configuration,
    Websites,
    History,
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active sidebar entry
    pub section: Section,

    /// History → search box text (mirrors ListingTable filter)
    pub search_text: String,
    /// History → sort dropdown (mirrors ListingTable sort)
    pub sort_key: SortKey,

    /// Export path text field; only applied to ExportOptions on export
    pub out_path_text: String,
    pub out_path_dirty: bool,
}

impl GuiState {
    pub fn new(export: &ExportOptions) -> Self {
        Self {
            section: Section::default(),
            search_text: s!(),
            sort_key: SortKey::default(),
            out_path_text: export.out_path().to_string_lossy().into_owned(),
            out_path_dirty: false,
        }
    }
}

/// Single source of truth for everything the user can change.
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: MonitorConfig,
    pub export: ExportOptions,
    pub gui: GuiState,
}

impl AppState {
    pub fn new(config: MonitorConfig) -> Self {
        let export = ExportOptions::default();
        let gui = GuiState::new(&export);
        Self { config, export, gui }
    }

    /// Run one binder transition and swap in the result.
    /// Returns true when the config actually changed.
    pub fn dispatch(&mut self, event: ConfigEvent, universe: &Universe<'_>) -> bool {
        let next = binder::transition(&self.config, &event, universe);
        if next == self.config {
            logd!("Config: {:?} (no change)", event);
            return false;
        }
        logf!("Config: {:?}", event);
        self.config = next;
        true
    }
}
