use egui::{Align, Color32, Layout, RichText, Ui, Vec2};

use veluxe::{
    Tab, UiAction,
    health::{HealthMetric, VehicleHealthSnapshot, VehicleProfile},
};

use super::{
    BUTTON_HEIGHT, PALETTE_BLUE, PALETTE_GOLD, PALETTE_GREEN, PALETTE_TEXT_FAINT,
    PALETTE_TEXT_MUTED, SECTION_SPACING, card_frame,
    gauge::{SMALL_GAUGE_SIZE, metric_color, radial_progress},
    gold_button, outline_button,
};

pub(crate) fn home_view(
    ui: &mut Ui,
    vehicle: &VehicleProfile,
    health: &VehicleHealthSnapshot,
    actions: &mut Vec<UiAction>,
) {
    ui.vertical_centered(|ui| {
        ui.heading(
            RichText::new("Welcome to Veluxe")
                .color(Color32::WHITE)
                .size(26.)
                .strong(),
        );
        ui.label(RichText::new("Your premium car concierge experience").color(PALETTE_TEXT_MUTED));
    });
    ui.add_space(SECTION_SPACING);

    card_frame(false).show(ui, |ui| {
        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(
                    RichText::new(vehicle.title())
                        .color(Color32::WHITE)
                        .size(20.)
                        .strong(),
                );
                ui.label(RichText::new(vehicle.subtitle()).color(PALETTE_TEXT_MUTED));
            });
            ui.with_layout(Layout::top_down(Align::Max), |ui| {
                ui.label(RichText::new(vehicle.mileage_label()).color(PALETTE_GOLD).strong());
                ui.label(
                    RichText::new(format!("Last service: {}", vehicle.last_service))
                        .color(PALETTE_TEXT_FAINT)
                        .small(),
                );
            });
        });
        ui.add_space(SECTION_SPACING);
        ui.columns(HealthMetric::ALL.len(), |columns| {
            for (column, metric) in columns.iter_mut().zip(HealthMetric::ALL) {
                radial_progress(
                    column,
                    health.status(metric),
                    metric.short_label(),
                    metric_color(metric),
                    SMALL_GAUGE_SIZE,
                );
            }
        });
    });
    ui.add_space(SECTION_SPACING);

    ui.columns(2, |columns| {
        let width = columns[0].available_width();
        if columns[0]
            .add(gold_button("Book Service").min_size(Vec2::new(width, BUTTON_HEIGHT)))
            .clicked()
        {
            actions.push(UiAction::SelectTab(Tab::Services));
        }
        if columns[1]
            .add(outline_button("Smart Alerts").min_size(Vec2::new(width, BUTTON_HEIGHT)))
            .clicked()
        {
            actions.push(UiAction::SelectTab(Tab::Alerts));
        }
    });
    ui.add_space(SECTION_SPACING);

    card_frame(false).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(
            RichText::new("AI Insights")
                .color(Color32::WHITE)
                .size(18.)
                .strong(),
        );
        ui.add_space(8.);
        ui.horizontal(|ui| {
            ui.label(RichText::new("Overall Health").color(PALETTE_TEXT_MUTED));
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(&health.overall_health).color(PALETTE_GREEN));
            });
        });
        ui.label(
            RichText::new(format!("💡 {}", health.next_service_advice))
                .color(PALETTE_GOLD)
                .small(),
        );
        for alert in &health.alerts {
            ui.label(RichText::new(format!("⚠ {alert}")).color(PALETTE_BLUE).small());
        }
    });
}
