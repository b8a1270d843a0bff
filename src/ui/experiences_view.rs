use egui::{Color32, RichText, Ui, Vec2};

use veluxe::{
    Event, UiAction,
    events::{EventCategory, FeedView},
};

use super::{
    BUTTON_HEIGHT, PALETTE_BLUE, PALETTE_GOLD, PALETTE_RED, PALETTE_TEXT_FAINT,
    PALETTE_TEXT_MUTED, SECTION_SPACING, card_frame, gold_button, view_title,
};

fn category_badge(event: &Event) -> RichText {
    let (background, text) = match event.category() {
        EventCategory::TrackDay => (PALETTE_RED, Color32::WHITE),
        EventCategory::Exclusive => (PALETTE_GOLD, Color32::BLACK),
        EventCategory::General => (PALETTE_BLUE, Color32::WHITE),
    };
    RichText::new(format!(" {} ", event.event_type.to_uppercase()))
        .small()
        .strong()
        .color(text)
        .background_color(background)
}

fn event_card(ui: &mut Ui, event: &Event, rsvp_pending: bool, actions: &mut Vec<UiAction>) {
    card_frame(false).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(
                RichText::new(&event.title)
                    .color(Color32::WHITE)
                    .size(18.)
                    .strong(),
            );
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(category_badge(event));
            });
        });
        if !event.description.is_empty() {
            ui.label(RichText::new(&event.description).color(PALETTE_TEXT_MUTED));
        }
        ui.add_space(6.);
        ui.label(RichText::new(format!("📅 {}", event.date)).color(PALETTE_TEXT_FAINT));
        ui.label(RichText::new(format!("📍 {}", event.location)).color(PALETTE_TEXT_FAINT));
        ui.label(RichText::new(format!("👥 {}", event.attendance_label())).color(PALETTE_TEXT_FAINT));
        if !event.brands_filter.is_empty() {
            ui.label(
                RichText::new(event.brands_filter.join(" · "))
                    .color(PALETTE_TEXT_FAINT)
                    .small(),
            );
        }
        ui.add_space(8.);

        let width = ui.available_width();
        let label = if rsvp_pending { "Sending RSVP..." } else { "RSVP" };
        if ui
            .add_enabled(
                !rsvp_pending,
                gold_button(label).min_size(Vec2::new(width, BUTTON_HEIGHT - 8.)),
            )
            .clicked()
        {
            actions.push(UiAction::Rsvp(event.id.clone()));
        }
    });
}

/// One banner per kind of failure. Fetch failures mean the service is down,
/// RSVP failures come from a working backend.
fn status_lines(feed: &FeedView<'_>) -> Vec<String> {
    let fetch = feed
        .fetch_error
        .map(|error| format!("Concierge service unavailable: {error}"));
    let rsvp = feed
        .rsvp_error
        .map(|error| format!("RSVP not confirmed: {error}"));
    fetch.into_iter().chain(rsvp).collect()
}

pub(crate) fn experiences_view(ui: &mut Ui, feed: FeedView<'_>, actions: &mut Vec<UiAction>) {
    view_title(ui, "Exclusive Experiences");

    for line in status_lines(&feed) {
        ui.label(RichText::new(line).color(PALETTE_RED).small());
        ui.add_space(8.);
    }

    if feed.events.is_empty() {
        if feed.fetching {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label(RichText::new("Loading events...").color(PALETTE_TEXT_MUTED));
            });
        } else {
            ui.label(RichText::new("No upcoming events").color(PALETTE_TEXT_MUTED));
        }
        return;
    }

    for event in feed.events {
        ui.push_id(&event.id, |ui| {
            event_card(ui, event, feed.pending_rsvps.contains(&event.id), actions);
        });
        ui.add_space(SECTION_SPACING);
    }
}
