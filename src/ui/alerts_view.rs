use egui::{Align, Color32, Frame, Layout, Margin, RichText, Ui};

use veluxe::health::{
    HealthMetric, MaintenancePrediction, PredictionStatus, VehicleHealthSnapshot,
};

use super::{
    PALETTE_BLUE, PALETTE_GOLD, PALETTE_GREEN, PALETTE_PANEL_RAISED, PALETTE_TEXT_FAINT,
    ROW_CORNER_RADIUS, SECTION_SPACING, card_frame,
    gauge::{LARGE_GAUGE_SIZE, metric_color, radial_progress},
    view_title,
};

fn prediction_icon(status: PredictionStatus) -> RichText {
    match status {
        PredictionStatus::Scheduled => RichText::new("📅").color(PALETTE_GOLD),
        PredictionStatus::Recurring => RichText::new("🔄").color(PALETTE_BLUE),
        PredictionStatus::Healthy => RichText::new("✅").color(PALETTE_GREEN),
    }
}

pub(crate) fn alerts_view(
    ui: &mut Ui,
    health: &VehicleHealthSnapshot,
    predictions: &[MaintenancePrediction],
) {
    view_title(ui, "Car Health Dashboard");

    for row in HealthMetric::ALL.chunks(2) {
        ui.columns(2, |columns| {
            for (column, metric) in columns.iter_mut().zip(row) {
                radial_progress(
                    column,
                    health.status(*metric),
                    metric.long_label(),
                    metric_color(*metric),
                    LARGE_GAUGE_SIZE,
                );
            }
        });
        ui.add_space(SECTION_SPACING);
    }

    card_frame(false).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            RichText::new("Maintenance Predictions")
                .color(Color32::WHITE)
                .size(18.)
                .strong(),
        );
        ui.add_space(8.);
        for prediction in predictions {
            Frame::new()
                .fill(PALETTE_PANEL_RAISED)
                .corner_radius(ROW_CORNER_RADIUS)
                .inner_margin(Margin::same(10))
                .show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.horizontal(|ui| {
                        ui.vertical(|ui| {
                            ui.label(RichText::new(prediction.title).color(Color32::WHITE).strong());
                            ui.label(RichText::new(prediction.due).color(PALETTE_TEXT_FAINT).small());
                        });
                        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                            ui.label(prediction_icon(prediction.status));
                        });
                    });
                });
            ui.add_space(6.);
        }
    });
}
