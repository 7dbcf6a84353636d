use eframe::{Frame, egui};
use poll_promise::Promise;

use crate::Cli;
use crate::domain::{Selection, Series};
use crate::engine::{ChartController, FetchState};
use crate::ui::config::{UI_CONFIG, UI_TEXT};
use crate::ui::panels::{ControlEvent, ControlsPanel, Panel};
use crate::ui::plot_view::{LayerContext, PlotView};
use crate::ui::utils::{colored_heading, setup_custom_visuals};

/// Fetch result travelling back from the worker thread, tagged with the
/// generation it was requested under.
pub(super) type FetchResult = (u64, Series);

pub struct ChartApp {
    pub(super) controller: ChartController,
    pub(super) fetch_promise: Option<Promise<FetchResult>>,
    plot_view: PlotView,
}

impl ChartApp {
    pub fn new(cc: &eframe::CreationContext<'_>, args: &Cli) -> Self {
        setup_custom_visuals(&cc.egui_ctx);

        let mut controller =
            ChartController::new(Selection::new(args.symbol.clone(), args.timeframe));
        // Stage the first fetch; the first update spawns it
        controller.reload();

        ChartApp {
            controller,
            fetch_promise: None,
            plot_view: PlotView::default(),
        }
    }

    fn render_top_panel(&mut self, ctx: &egui::Context) {
        let frame = egui::Frame::new()
            .fill(UI_CONFIG.colors.top_panel)
            .inner_margin(egui::Margin::symmetric(8, 6));

        egui::TopBottomPanel::top("controls")
            .frame(frame)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    let title = format!("{} Candlesticks", self.controller.selection().symbol);
                    ui.heading(colored_heading(title));
                    ui.add_space(20.0);

                    let selection = self.controller.selection();
                    let mut panel = ControlsPanel::new(selection.timeframe, selection.tool);
                    for event in panel.render(ui) {
                        match event {
                            ControlEvent::TimeframeChanged(timeframe) => {
                                self.controller.set_timeframe(timeframe);
                            }
                            ControlEvent::ToolChanged(tool) => {
                                self.controller.set_tool(tool);
                            }
                        }
                    }

                    if self.controller.is_loading() {
                        ui.add_space(20.0);
                        ui.spinner();
                        ui.label(UI_TEXT.loading);
                    }
                });
            });
    }

    fn render_central_panel(&mut self, ctx: &egui::Context) {
        let frame = egui::Frame::new().fill(UI_CONFIG.colors.central_panel);

        egui::CentralPanel::default().frame(frame).show(ctx, |ui| {
            match self.controller.state() {
                FetchState::Idle | FetchState::Loading => {
                    ui.centered_and_justified(|ui| {
                        ui.label(UI_TEXT.loading);
                    });
                }
                FetchState::Ready if self.controller.series().is_empty() => {
                    // Fetch failures land here too; they are just "no data"
                    ui.centered_and_justified(|ui| {
                        ui.label(UI_TEXT.no_data);
                    });
                }
                FetchState::Ready => {
                    let selection = self.controller.selection();
                    let layer_ctx = LayerContext {
                        series: self.controller.series(),
                        fib_levels: self.controller.fib_levels(),
                        tool: selection.tool,
                        bucket_s: selection.timeframe.interval_ms() as f64 / 1000.0,
                    };
                    self.plot_view.show_chart(ui, &layer_ctx);
                }
            }
        });
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // Poll first so a finished fetch frees the worker slot this frame
        self.poll_fetch(ctx);
        self.start_pending_fetch();

        self.render_top_panel(ctx);
        self.render_central_panel(ctx);
    }
}
