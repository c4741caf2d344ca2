//! The customer grid.

use crate::records::{COLUMNS, CustomerRecord};
use crate::theme::HIGH_RATING_COLOR;
use eframe::egui;
use egui_extras::{Column, TableBuilder};

const ROW_HEIGHT: f32 = 20.0;

/// Draws the customer table: ID, Name, Age, Mobile, Rating.
///
/// Ratings at or above `highlight_from` are drawn in green.
pub fn render_customer_table(ui: &mut egui::Ui, records: &[CustomerRecord], highlight_from: f64) {
    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::initial(110.0).at_least(80.0)) // ID
        .column(Column::initial(160.0).at_least(100.0)) // Name
        .column(Column::initial(70.0).at_least(50.0)) // Age
        .column(Column::initial(150.0).at_least(110.0)) // Mobile
        .column(Column::remainder().at_least(60.0)) // Rating
        .min_scrolled_height(0.0)
        .header(25.0, |mut header| {
            for title in COLUMNS {
                header.col(|ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(ROW_HEIGHT, records.len(), |mut row| {
                let Some(record) = records.get(row.index()) else {
                    return;
                };
                row.col(|ui| {
                    ui.label(record.customer_id.to_string());
                });
                row.col(|ui| {
                    ui.label(&record.name);
                });
                row.col(|ui| {
                    ui.label(record.age.to_string());
                });
                row.col(|ui| {
                    ui.label(record.mobile_number.to_string());
                });
                row.col(|ui| {
                    let text = egui::RichText::new(record.rating_label());
                    if record.rating >= highlight_from {
                        ui.label(text.color(HIGH_RATING_COLOR));
                    } else {
                        ui.label(text);
                    }
                });
            });
        });
}
