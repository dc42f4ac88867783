use chrono::{Datelike, NaiveDate};
use eframe::egui::{Color32, Ui};
use egui_plot::{Line, Plot, PlotPoints};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Daily totals plot (central panel)
// ---------------------------------------------------------------------------

/// Render the per-day totals line chart for the selected customer.
pub fn daily_totals_plot(ui: &mut Ui, state: &AppState) {
    let name = match state.selected_customer_name() {
        Some(name) => name.to_string(),
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Click a customer name to chart their daily totals");
            });
            return;
        }
    };

    ui.heading(format!("Total transaction amount per day – {name}"));

    let color = state
        .selected_customer
        .map(|id| state.color_map.color_for(id))
        .unwrap_or(Color32::LIGHT_BLUE);

    let points: PlotPoints = state
        .daily_totals
        .iter()
        .map(|dt| [day_to_x(dt.date), dt.total])
        .collect();

    Plot::new("daily_totals_plot")
        .legend(egui_plot::Legend::default())
        .y_axis_label("Total Transaction Amount")
        .x_axis_formatter(|mark, _range| x_axis_label(mark.value))
        .y_axis_formatter(|mark, _range| format!("${:.0}", mark.value))
        .label_formatter(|series, value| {
            let day = x_axis_label(value.x);
            if series.is_empty() {
                format!("{day}\n${:.2}", value.y)
            } else {
                format!("{series}\n{day}\n${:.2}", value.y)
            }
        })
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let line = Line::new(points).name(&name).color(color).width(1.5);
            plot_ui.line(line);
        });
}

// ---------------------------------------------------------------------------
// Date ↔ axis mapping
// ---------------------------------------------------------------------------

/// Plot x coordinate for a calendar day.
fn day_to_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

/// Axis / hover label for an x coordinate. Whole-day positions render as
/// `YYYY-MM-DD`; fractional grid marks stay blank.
fn x_axis_label(x: f64) -> String {
    if (x - x.round()).abs() > 1e-6 {
        return String::new();
    }
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_mapping_round_trips() {
        let date: NaiveDate = "2022-05-01".parse().unwrap();
        assert_eq!(x_axis_label(day_to_x(date)), "2022-05-01");
    }

    #[test]
    fn fractional_marks_are_unlabelled() {
        let date: NaiveDate = "2022-05-01".parse().unwrap();
        assert_eq!(x_axis_label(day_to_x(date) + 0.5), "");
    }
}
