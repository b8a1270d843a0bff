use std::f32::consts::{FRAC_PI_2, TAU};

use egui::{Align2, Color32, FontId, Pos2, Response, RichText, Sense, Shape, Stroke, Ui, Vec2};

use veluxe::{GaugeGeometry, health::HealthMetric};

use super::PALETTE_TEXT_MUTED;

pub(crate) const SMALL_GAUGE_SIZE: f32 = 80.;
pub(crate) const LARGE_GAUGE_SIZE: f32 = 120.;

const RING_WIDTH: f32 = 8.;
const RING_TRACK: Color32 = Color32::from_rgba_premultiplied(25, 25, 25, 25);
// segments used for a full turn
const ARC_SEGMENTS: f32 = 96.;

pub(crate) fn metric_color(metric: HealthMetric) -> Color32 {
    match metric {
        HealthMetric::Oil => Color32::from_rgb(16, 185, 129),
        HealthMetric::Brake => Color32::from_rgb(59, 130, 246),
        HealthMetric::Battery => Color32::from_rgb(245, 158, 11),
        HealthMetric::Tire => Color32::from_rgb(239, 68, 68),
    }
}

/// Ring gauge with the percentage in the middle and a label underneath.
pub(crate) fn radial_progress(
    ui: &mut Ui,
    percentage: u8,
    label: &str,
    color: Color32,
    size: f32,
) -> Response {
    ui.vertical_centered(|ui| {
        let geometry = GaugeGeometry::new(percentage as f64, size as f64);
        let (rect, response) = ui.allocate_exact_size(Vec2::splat(size), Sense::hover());
        let painter = ui.painter_at(rect);
        let center = rect.center();
        let radius = geometry.radius as f32;

        painter.circle_stroke(center, radius, Stroke::new(RING_WIDTH, RING_TRACK));
        painter.add(arc(
            center,
            radius,
            geometry.sweep_angle() as f32,
            Stroke::new(RING_WIDTH, color),
        ));
        painter.text(
            center,
            Align2::CENTER_CENTER,
            format!("{percentage}%"),
            FontId::proportional(size / 6.),
            Color32::WHITE,
        );

        ui.label(RichText::new(label).color(PALETTE_TEXT_MUTED));
        response
    })
    .inner
}

/// Clockwise arc starting at 12 o'clock. Sweeps past a full turn would only
/// repaint the same ring, so they are capped at one turn.
fn arc(center: Pos2, radius: f32, sweep: f32, stroke: Stroke) -> Shape {
    let sweep = sweep.clamp(0., TAU);
    if sweep <= 0. {
        return Shape::Noop;
    }
    let segments = ((sweep / TAU) * ARC_SEGMENTS).ceil().max(1.) as usize;
    let points = (0..=segments)
        .map(|i| {
            let angle = -FRAC_PI_2 + sweep * i as f32 / segments as f32;
            center + radius * Vec2::angled(angle)
        })
        .collect();
    Shape::line(points, stroke)
}
