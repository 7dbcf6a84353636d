use eframe::egui::{ComboBox, Ui};
use strum::IntoEnumIterator;

use crate::domain::{Timeframe, Tool};
use crate::ui::config::UI_TEXT;

/// Trait for UI panels that can be rendered
pub trait Panel {
    type Event;
    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event>;
}

/// A change made through the selector row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    TimeframeChanged(Timeframe),
    ToolChanged(Tool),
}

/// The timeframe and tool selectors. Rebuilt each frame from the
/// controller's selection; emits an event per clicked entry.
pub struct ControlsPanel {
    timeframe: Timeframe,
    tool: Tool,
}

impl ControlsPanel {
    pub fn new(timeframe: Timeframe, tool: Tool) -> Self {
        Self { timeframe, tool }
    }
}

impl Panel for ControlsPanel {
    type Event = ControlEvent;

    fn render(&mut self, ui: &mut Ui) -> Vec<Self::Event> {
        let mut events = Vec::new();

        ui.label(UI_TEXT.timeframe_heading);
        ComboBox::from_id_salt("Time Frame")
            .selected_text(self.timeframe.label())
            .show_ui(ui, |ui| {
                for timeframe in Timeframe::iter() {
                    if ui
                        .selectable_value(&mut self.timeframe, timeframe, timeframe.label())
                        .clicked()
                    {
                        events.push(ControlEvent::TimeframeChanged(self.timeframe));
                    }
                }
            });

        ui.add_space(20.0);

        ui.label(UI_TEXT.tool_heading);
        ComboBox::from_id_salt("Tool")
            .selected_text(self.tool.to_string())
            .show_ui(ui, |ui| {
                for tool in Tool::iter() {
                    if ui
                        .selectable_value(&mut self.tool, tool, tool.to_string())
                        .clicked()
                    {
                        events.push(ControlEvent::ToolChanged(self.tool));
                    }
                }
            });

        events
    }
}
