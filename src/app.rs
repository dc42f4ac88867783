use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct BillsBoardApp {
    pub state: AppState,
}

impl Default for BillsBoardApp {
    fn default() -> Self {
        Self {
            state: AppState::default(),
        }
    }
}

impl eframe::App for BillsBoardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: customers ----
        egui::SidePanel::left("customer_panel")
            .default_width(260.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::customer_panel(ui, &mut self.state);
            });

        // ---- Right side panel: transactions ----
        egui::SidePanel::right("transaction_panel")
            .default_width(400.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::transaction_panel(ui, &mut self.state);
            });

        // ---- Central panel: chart ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::daily_totals_plot(ui, &self.state);
        });
    }
}
