use eframe::egui::{self, Stroke};
use egui_plot::{
    AxisHints, Corner, HLine, HPlacement, Legend, Line, Plot, PlotPoints, PlotUi, Polygon,
};

use crate::analysis::fibonacci::{RETRACEMENT_RATIOS, ratio_label};
use crate::config::plot::PLOT_CONFIG;
use crate::domain::{CandleType, Series, Tool};
use crate::ui::config::UI_TEXT;
use crate::ui::utils::format_price;
use crate::utils::time_utils::epoch_sec_to_utc;

/// Context passed to every layer during rendering.
/// This prevents argument explosion.
pub struct LayerContext<'a> {
    pub series: &'a Series,
    pub fib_levels: &'a [f64],
    pub tool: Tool,
    /// Width of one candle bucket on the x axis, in seconds
    pub bucket_s: f64,
}

/// A standardized layer in the plot stack.
pub trait PlotLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext);
}

// ============================================================================
// 1. BAND LAYER (drawn beneath the candles)
// ============================================================================
pub struct BandLayer;

impl PlotLayer for BandLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if ctx.tool != Tool::BollingerBands {
            return;
        }

        let banded: Vec<(f64, crate::domain::BandPoint)> = ctx
            .series
            .candles()
            .iter()
            .filter_map(|c| c.band.map(|b| (c.time_s as f64, b)))
            .collect();
        if banded.is_empty() {
            return;
        }

        // Fill between the edges: top edge forward, bottom edge back
        let mut fill: Vec<[f64; 2]> = banded.iter().map(|(x, b)| [*x, b.top]).collect();
        fill.extend(banded.iter().rev().map(|(x, b)| [*x, b.bottom]));
        plot_ui.polygon(
            Polygon::new("", PlotPoints::new(fill))
                .fill_color(
                    PLOT_CONFIG
                        .band_edge_color
                        .linear_multiply(PLOT_CONFIG.band_fill_opacity),
                )
                .stroke(Stroke::NONE),
        );

        let top: Vec<[f64; 2]> = banded.iter().map(|(x, b)| [*x, b.top]).collect();
        let middle: Vec<[f64; 2]> = banded.iter().map(|(x, b)| [*x, b.middle]).collect();
        let bottom: Vec<[f64; 2]> = banded.iter().map(|(x, b)| [*x, b.bottom]).collect();

        plot_ui.line(
            Line::new("BB Top", PlotPoints::new(top))
                .color(PLOT_CONFIG.band_edge_color)
                .width(PLOT_CONFIG.band_line_width),
        );
        plot_ui.line(
            Line::new("BB Middle", PlotPoints::new(middle))
                .color(PLOT_CONFIG.band_middle_color)
                .width(PLOT_CONFIG.band_line_width),
        );
        plot_ui.line(
            Line::new("BB Bottom", PlotPoints::new(bottom))
                .color(PLOT_CONFIG.band_edge_color)
                .width(PLOT_CONFIG.band_line_width),
        );
    }
}

// ============================================================================
// 2. CANDLE LAYER
// ============================================================================
pub struct CandleLayer;

impl PlotLayer for CandleLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let half_body = ctx.bucket_s * PLOT_CONFIG.body_width_factor / 2.0;

        for candle in ctx.series.candles() {
            let x = candle.time_s as f64;
            let color = match candle.candle_type() {
                CandleType::Bullish => PLOT_CONFIG.bull_color,
                CandleType::Bearish => PLOT_CONFIG.bear_color,
            };

            // Wick first so the body covers its middle stretch
            plot_ui.line(
                Line::new(
                    "",
                    PlotPoints::new(vec![[x, candle.low], [x, candle.high]]),
                )
                .color(color)
                .width(PLOT_CONFIG.wick_width),
            );

            let (body_low, body_high) = candle.body_range();
            plot_ui.polygon(
                Polygon::new(
                    "",
                    PlotPoints::new(vec![
                        [x - half_body, body_low],
                        [x + half_body, body_low],
                        [x + half_body, body_high],
                        [x - half_body, body_high],
                    ]),
                )
                .fill_color(color)
                .stroke(Stroke::new(1.0, color)),
            );
        }
    }
}

// ============================================================================
// 3. RETRACEMENT LAYER
// ============================================================================
pub struct RetracementLayer;

impl PlotLayer for RetracementLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        if ctx.tool != Tool::FibonacciRetracement {
            return;
        }

        for (ratio, level) in RETRACEMENT_RATIOS.iter().zip(ctx.fib_levels) {
            plot_ui.hline(
                HLine::new(ratio_label(*ratio), *level)
                    .color(PLOT_CONFIG.retracement_color)
                    .width(PLOT_CONFIG.retracement_line_width)
                    .style(egui_plot::LineStyle::dashed_loose()),
            );
        }
    }
}

// ============================================================================
// 4. VOLUME LAYER (its own sub-plot below the price plot)
// ============================================================================
pub struct VolumeLayer;

impl PlotLayer for VolumeLayer {
    fn render(&self, plot_ui: &mut PlotUi, ctx: &LayerContext) {
        let half_bar = ctx.bucket_s * PLOT_CONFIG.body_width_factor / 2.0;

        for candle in ctx.series.candles() {
            let x = candle.time_s as f64;
            let base = match candle.candle_type() {
                CandleType::Bullish => PLOT_CONFIG.bull_color,
                CandleType::Bearish => PLOT_CONFIG.bear_color,
            };

            plot_ui.polygon(
                Polygon::new(
                    "",
                    PlotPoints::new(vec![
                        [x - half_bar, 0.0],
                        [x + half_bar, 0.0],
                        [x + half_bar, candle.volume],
                        [x - half_bar, candle.volume],
                    ]),
                )
                .fill_color(base.linear_multiply(PLOT_CONFIG.volume_opacity))
                .stroke(Stroke::NONE),
            );
        }
    }
}

/// The rendering surface. Everything pixel-level (scales, axes, panning,
/// hover) belongs to egui_plot behind this boundary; the rest of the app
/// only supplies a `LayerContext`.
#[derive(Default)]
pub struct PlotView;

impl PlotView {
    pub fn show_chart(&mut self, ui: &mut egui::Ui, ctx: &LayerContext) {
        let price_height = ui.available_height() * (1.0 - PLOT_CONFIG.volume_height_fraction);

        Plot::new("price_plot")
            .height(price_height)
            .legend(Legend::default().position(Corner::RightTop))
            .custom_x_axes(vec![create_time_axis()])
            .custom_y_axes(vec![create_price_axis()])
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                // Back to front: band fill under the candles, levels on top
                let layers: Vec<Box<dyn PlotLayer>> = vec![
                    Box::new(BandLayer),
                    Box::new(CandleLayer),
                    Box::new(RetracementLayer),
                ];
                for layer in layers {
                    layer.render(plot_ui, ctx);
                }
            });

        Plot::new("volume_plot")
            .custom_x_axes(vec![create_time_axis()])
            .custom_y_axes(vec![create_volume_axis()])
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                // Keep the bar baseline pinned at zero
                if let Some(max_volume) = ctx.series.max_volume() {
                    plot_ui.set_plot_bounds_y(0.0..=max_volume * 1.05);
                }
                VolumeLayer.render(plot_ui, ctx);
            });
    }
}

fn create_time_axis() -> AxisHints<'static> {
    AxisHints::new_x().formatter(|grid_mark, _range| epoch_sec_to_utc(grid_mark.value as i64))
}

fn create_price_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.price_axis)
        .formatter(|grid_mark, _range| format_price(grid_mark.value))
        .placement(HPlacement::Right)
}

fn create_volume_axis() -> AxisHints<'static> {
    AxisHints::new_y()
        .label(UI_TEXT.volume_axis)
        .placement(HPlacement::Left)
}
