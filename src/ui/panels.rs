use eframe::egui::{self, Color32, RichText, TextEdit, Ui};
use egui_extras::{Column, TableBuilder};

use crate::data::model::CustomerId;
use crate::data::seed::seed_dataset;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
            if ui.button("Load sample data").clicked() {
                state.set_dataset(seed_dataset());
                ui.close_menu();
            }
        });

        ui.separator();

        ui.label(format!(
            "{}/{} customers, {}/{} transactions",
            state.visible_customers.len(),
            state.dataset.customers().len(),
            state.visible_transactions.len(),
            state.dataset.transactions().len()
        ));

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – customer list with name search
// ---------------------------------------------------------------------------

/// Render the customer list. Clicking a name selects that customer and
/// recomputes the chart series.
pub fn customer_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Customers");
    ui.add_space(4.0);

    let response = ui.add(
        TextEdit::singleline(&mut state.name_query)
            .hint_text("Search by name")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        state.refilter_customers();
    }
    ui.separator();

    let mut clicked: Option<CustomerId> = None;

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder())
        .column(Column::auto())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Name");
            });
            header.col(|ui| {
                ui.strong("ID");
            });
        })
        .body(|body| {
            body.rows(18.0, state.visible_customers.len(), |mut row| {
                let customer =
                    &state.dataset.customers()[state.visible_customers[row.index()]];
                let is_selected = state.selected_customer == Some(customer.id);
                row.col(|ui| {
                    let text = RichText::new(&customer.name)
                        .color(state.color_map.color_for(customer.id));
                    if ui.selectable_label(is_selected, text).clicked() {
                        clicked = Some(customer.id);
                    }
                });
                row.col(|ui| {
                    ui.label(customer.id.to_string());
                });
            });
        });

    if let Some(id) = clicked {
        state.select_customer(id);
    }
}

// ---------------------------------------------------------------------------
// Right side panel – transaction list with amount search
// ---------------------------------------------------------------------------

/// Render the transaction list.
pub fn transaction_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Transactions");
    ui.add_space(4.0);

    let response = ui.add(
        TextEdit::singleline(&mut state.amount_query)
            .hint_text("Search by amount")
            .desired_width(f32::INFINITY),
    );
    if response.changed() {
        state.refilter_transactions();
    }
    ui.separator();

    TableBuilder::new(ui)
        .striped(true)
        .column(Column::remainder())
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::auto())
        .header(20.0, |mut header| {
            header.col(|ui| {
                ui.strong("Customer");
            });
            header.col(|ui| {
                ui.strong("Date");
            });
            header.col(|ui| {
                ui.strong("Amount");
            });
            header.col(|ui| {
                ui.strong("ID");
            });
        })
        .body(|body| {
            body.rows(18.0, state.visible_transactions.len(), |mut row| {
                let tx =
                    &state.dataset.transactions()[state.visible_transactions[row.index()]];
                row.col(|ui| {
                    let name = state.dataset.customer_name(tx.customer_id).unwrap_or("?");
                    ui.label(
                        RichText::new(name).color(state.color_map.color_for(tx.customer_id)),
                    );
                });
                row.col(|ui| {
                    ui.label(tx.date.to_string());
                });
                row.col(|ui| {
                    ui.label(tx.amount_text());
                });
                row.col(|ui| {
                    ui.label(tx.id.to_string());
                });
            });
        });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open transaction data")
        .add_filter("Supported files", &["json", "csv"])
        .add_filter("JSON", &["json"])
        .add_filter("CSV", &["csv"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} customers and {} transactions",
                    dataset.customers().len(),
                    dataset.transactions().len()
                );
                state.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
