use eframe::egui::{Context, RichText, Visuals};

use crate::ui::config::UI_CONFIG;

/// Creates a colored heading with uppercase text and monospace font
pub fn colored_heading(text: impl Into<String>) -> RichText {
    RichText::new(text.into().to_uppercase())
        .color(UI_CONFIG.colors.heading)
        .monospace()
}

/// Sets up custom visuals for the entire application
pub fn setup_custom_visuals(ctx: &Context) {
    let mut visuals = Visuals::dark();

    visuals.window_fill = UI_CONFIG.colors.central_panel;
    visuals.panel_fill = UI_CONFIG.colors.top_panel;

    // Make the widgets stand out a bit more
    visuals.widgets.noninteractive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.inactive.fg_stroke.color = UI_CONFIG.colors.label;
    visuals.widgets.hovered.fg_stroke.color = UI_CONFIG.colors.heading;
    visuals.widgets.active.fg_stroke.color = UI_CONFIG.colors.heading;

    ctx.set_visuals(visuals);
}

/// Formats a price with enough decimals for its magnitude.
/// - Large (>=1000): 2 decimals ($95,123.50 territory)
/// - Medium (1..1000): 4 decimals
/// - Small (<1): 6 decimals
pub fn format_price(price: f64) -> String {
    let abs = price.abs();
    if abs >= 1000.0 {
        format!("${price:.2}")
    } else if abs >= 1.0 {
        format!("${price:.4}")
    } else {
        format!("${price:.6}")
    }
}
