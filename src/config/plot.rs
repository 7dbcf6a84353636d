//! Plot visualization configuration

use eframe::egui::Color32;

pub struct PlotConfig {
    /// Candle color when close >= open
    pub bull_color: Color32,
    /// Candle color when close < open
    pub bear_color: Color32,
    /// Stroke width of the high-low wick line
    pub wick_width: f32,
    /// Candle body width as a fraction of the timeframe bucket
    pub body_width_factor: f64,
    // Bollinger band styling
    pub band_edge_color: Color32,
    pub band_middle_color: Color32,
    pub band_line_width: f32,
    /// Opacity of the fill between the top and bottom band edges
    pub band_fill_opacity: f32,
    // Retracement level styling
    pub retracement_color: Color32,
    pub retracement_line_width: f32,
    /// Opacity of the volume bars relative to the candle colors
    pub volume_opacity: f32,
    /// Height of the volume sub-plot as a fraction of the chart area
    pub volume_height_fraction: f32,
}

pub const PLOT_CONFIG: PlotConfig = PlotConfig {
    bull_color: Color32::from_rgb(38, 166, 154), // Teal
    bear_color: Color32::from_rgb(239, 83, 80),  // Red
    wick_width: 1.5,
    body_width_factor: 0.7,
    band_edge_color: Color32::from_rgb(32, 109, 198),
    band_middle_color: Color32::from_rgb(105, 213, 255),
    band_line_width: 1.5,
    band_fill_opacity: 0.15,
    retracement_color: Color32::from_rgb(255, 0, 0),
    retracement_line_width: 1.0,
    volume_opacity: 0.35,
    volume_height_fraction: 0.25,
};
