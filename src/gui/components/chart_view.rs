// src/gui/components/chart_view.rs
//
// Paints a mounted chart with egui_plot. Pending slots show a spinner;
// uninitialized or failed slots draw nothing.

use eframe::egui::{self, Color32};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::charts::{Chart, ChartKind, ChartSlot, ChartState};

const PLOT_HEIGHT: f32 = 220.0;

fn colour32([r, g, b]: [u8; 3]) -> Color32 {
    Color32::from_rgb(r, g, b)
}

pub fn draw(ui: &mut egui::Ui, id: &str, slot: &ChartSlot) {
    match slot.state() {
        ChartState::Mounted(chart) => paint(ui, id, chart),
        ChartState::Pending { .. } => {
            ui.add_space(PLOT_HEIGHT / 2.0 - 8.0);
            ui.vertical_centered(|ui| ui.spinner());
        }
        ChartState::Uninitialized | ChartState::Failed(_) => {}
    }
}

fn paint(ui: &mut egui::Ui, id: &str, chart: &Chart) {
    let spec = &chart.spec;
    let labels = spec.labels.clone();

    let mut plot = Plot::new(id)
        .height(PLOT_HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .show_x(false)
        .x_axis_formatter(move |mark, _range| {
            // Only whole indices carry a label
            let v = mark.value;
            if v < 0.0 || (v - v.round()).abs() > 1e-6 {
                return String::new();
            }
            labels.get(v.round() as usize).cloned().unwrap_or_default()
        });

    if let Some(floor) = chart.y_floor() {
        plot = plot.include_y(floor);
    }
    if spec.legend {
        plot = plot.legend(Legend::default());
    }

    plot.show(ui, |plot_ui| match spec.kind {
        ChartKind::Line { fill } => {
            let points: PlotPoints = spec
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| [i as f64, *v])
                .collect();
            let mut line = Line::new(spec.series_label.as_str(), points)
                .color(colour32(chart.colour(0)))
                .width(2.0);
            if fill {
                line = line.fill(chart.y_floor().unwrap_or(0.0) as f32);
            }
            plot_ui.line(line);
        }
        ChartKind::Bar => {
            let bars: Vec<Bar> = spec
                .values
                .iter()
                .enumerate()
                .map(|(i, v)| {
                    Bar::new(i as f64, *v)
                        .width(0.6)
                        .fill(colour32(chart.colour(i)))
                        .name(spec.labels[i].as_str())
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(spec.series_label.as_str(), bars));
        }
    });
}
