// src/gui/app.rs
use std::{error::Error, time::Instant};

use eframe::egui;

use crate::{
    charts::{self, ChartSlot},
    config::{
        binder::ConfigEvent,
        consts::APP_TITLE,
        state::{AppState, Section},
    },
    data::ListingTable,
    render::{DashboardView, Mounts},
    store::Dataset,
    toast::Toast,
};

use super::{components, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(App::new(Dataset::sample())))),
    )?;
    Ok(())
}

/// One slot per chart mount point on the History page.
pub struct Charts {
    pub price_trend: ChartSlot,
    pub activity: ChartSlot,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // static sample data; never mutated
    pub dataset: Dataset,

    // History table: order + visibility over dataset.history_listings
    pub table: ListingTable,

    pub mounts: Mounts,
    pub charts: Charts,
    pub toast: Option<Toast>,
}

impl App {
    pub fn new(dataset: Dataset) -> Self {
        let state = AppState::new(dataset.default_config());
        let table = ListingTable::new(&dataset.history_listings);

        logf!(
            "Init: listings={}, neighborhoods={}, default section={:?}",
            table.len(),
            dataset.neighborhoods.len(),
            state.gui.section
        );

        Self {
            state,
            dataset,
            table,
            mounts: Mounts::all(),
            charts: Charts {
                price_trend: ChartSlot::new("price-trend"),
                activity: ChartSlot::new("activity"),
            },
            toast: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    /// Widget → binder. Returns true if the config changed.
    #[inline]
    pub fn dispatch(&mut self, event: ConfigEvent) -> bool {
        self.state.dispatch(event, &self.dataset.universe())
    }

    #[inline]
    pub fn notify(&mut self, toast: Toast) {
        logd!("UI: Toast {:?} {:?}", toast.kind, toast.message);
        self.toast = Some(toast);
    }

    /// Switch sidebar section and run the page's enter hook.
    pub fn go_to(&mut self, section: Section, now: Instant) {
        let prev = self.state.gui.section;
        if prev == section {
            return;
        }
        logf!("UI: Section {:?} → {:?}", prev, section);
        self.state.gui.section = section;
        router::page_for(section).on_enter(self, now);
    }

    /// Mount due charts; keep frames coming while something is pending.
    fn tick_charts(&mut self, ctx: &egui::Context, now: Instant) {
        let ds = &self.dataset;
        self.charts.price_trend.poll(now, || charts::price_trend(&ds.price_trend).build());
        self.charts.activity.poll(now, || charts::activity(&ds.activity).build());

        let next = [&self.charts.price_trend, &self.charts.activity]
            .iter()
            .filter_map(|slot| slot.remaining(now))
            .min();
        if let Some(wait) = next {
            ctx.request_repaint_after(wait);
        }
    }

    /// Fire-and-forget hide.
    fn tick_toast(&mut self, ctx: &egui::Context, now: Instant) {
        if self.toast.as_ref().is_some_and(|t| t.is_expired(now)) {
            self.toast = None;
        }
        if let Some(t) = &self.toast {
            ctx.request_repaint_after(t.remaining(now));
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.tick_charts(ctx, now);
        self.tick_toast(ctx, now);

        // Full rebuild every frame; the dataset is tiny.
        let view = DashboardView::render(&self.dataset, &self.state.config, &self.mounts);

        egui::SidePanel::left("sidebar")
            .resizable(false)
            .show(ctx, |ui| {
                components::sidebar::draw(ui, self, now);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .id_salt("section_scroll")
                .show(ui, |ui| {
                    let page = router::page_for(self.state.gui.section);
                    ui.heading(page.title());
                    ui.separator();
                    page.draw(ui, self, &view, now);
                });
        });

        components::toast::draw(ctx, self.toast.as_ref());
    }
}
