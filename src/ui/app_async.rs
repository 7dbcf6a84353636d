use eframe::egui;
use poll_promise::Promise;

use crate::data::klines::fetch_series_blocking;
use crate::ui::app::ChartApp;

impl ChartApp {
    /// Spawns the fetch the controller has staged, one worker at a time.
    /// A request staged while a fetch is still running simply waits; when
    /// the running fetch lands it carries a stale generation and gets
    /// dropped, so the order of arrivals never matters.
    pub(super) fn start_pending_fetch(&mut self) {
        if self.fetch_promise.is_some() {
            return;
        }
        let Some(request) = self.controller.take_fetch_request() else {
            return;
        };

        let promise = Promise::spawn_thread("kline_fetch", move || {
            let series = fetch_series_blocking(&request.symbol, request.interval);
            (request.generation, series)
        });
        self.fetch_promise = Some(promise);
    }

    /// Polls the in-flight fetch and keeps the UI repainting while it runs.
    pub(super) fn poll_fetch(&mut self, ctx: &egui::Context) {
        let Some(promise) = self.fetch_promise.take() else {
            return;
        };

        match promise.try_take() {
            Ok((generation, series)) => {
                self.controller.on_fetch_complete(generation, series);
            }
            Err(promise) => {
                self.fetch_promise = Some(promise);
                ctx.request_repaint();
            }
        }
    }
}
