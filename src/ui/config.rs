use eframe::egui::Color32;

/// Fixed display strings
pub struct UiText {
    pub window_title: &'static str,
    pub timeframe_heading: &'static str,
    pub tool_heading: &'static str,
    pub loading: &'static str,
    pub no_data: &'static str,
    pub price_axis: &'static str,
    pub volume_axis: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    window_title: "Kline Scope",
    timeframe_heading: "Time Frame:",
    tool_heading: "Tool:",
    loading: "Loading...",
    no_data: "No data to show",
    price_axis: "Price",
    volume_axis: "Volume",
};

/// UI Colors for consistent theming
#[derive(Clone, Copy)]
pub struct UiColors {
    pub label: Color32,
    pub heading: Color32,
    pub central_panel: Color32,
    pub top_panel: Color32,
}

/// Main UI configuration struct that holds all UI-related settings
pub struct UiConfig {
    pub colors: UiColors,
}

/// Global UI configuration instance
pub static UI_CONFIG: UiConfig = UiConfig {
    colors: UiColors {
        label: Color32::GRAY,
        heading: Color32::from_rgb(105, 213, 255),
        central_panel: Color32::from_rgb(16, 16, 20),
        top_panel: Color32::from_rgb(25, 25, 25),
    },
};
