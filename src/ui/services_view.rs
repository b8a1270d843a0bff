use chrono::{Local, NaiveDate};
use egui::{Color32, ComboBox, RichText, TextEdit, Ui, Vec2};
use egui_extras::DatePickerButton;

use veluxe::{BookingSelection, ServiceKind, ServiceMode, TimeSlot, UiAction};

use super::{
    BUTTON_HEIGHT, PALETTE_GOLD, PALETTE_PANEL, PALETTE_TEXT_MUTED, SECTION_SPACING, gold_button,
    view_title,
};

const BOOKING_DATE_FORMAT: &str = "%Y-%m-%d";

fn field_label(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).color(Color32::WHITE).strong());
}

pub(crate) fn services_view(ui: &mut Ui, booking: &BookingSelection, actions: &mut Vec<UiAction>) {
    view_title(ui, "Book Service");

    // pickup or drop-off
    ui.horizontal(|ui| {
        let width = (ui.available_width() - ui.spacing().item_spacing.x) / 2.;
        for mode in ServiceMode::ALL {
            let selected = booking.service_mode == mode;
            let (fill, text_color) = if selected {
                (PALETTE_GOLD, Color32::BLACK)
            } else {
                (PALETTE_PANEL, PALETTE_TEXT_MUTED)
            };
            let button = egui::Button::new(RichText::new(mode.label()).color(text_color).strong())
                .fill(fill)
                .min_size(Vec2::new(width, BUTTON_HEIGHT));
            if ui.add(button).clicked() && !selected {
                actions.push(UiAction::SetServiceMode(mode));
            }
        }
    });
    ui.add_space(SECTION_SPACING);

    field_label(ui, "Service Type");
    let mut kind = booking.service_kind;
    ComboBox::from_id_salt("service_kind")
        .selected_text(kind.label())
        .width(ui.available_width())
        .show_ui(ui, |ui| {
            for option in ServiceKind::ALL {
                ui.selectable_value(&mut kind, option, option.label());
            }
        });
    if kind != booking.service_kind {
        actions.push(UiAction::SetServiceKind(kind));
    }
    ui.add_space(SECTION_SPACING);

    ui.columns(2, |columns| {
        field_label(&mut columns[0], "Date");
        let mut date = NaiveDate::parse_from_str(&booking.date, BOOKING_DATE_FORMAT)
            .unwrap_or_else(|_| Local::now().date_naive());
        if columns[0].add(DatePickerButton::new(&mut date)).changed() {
            actions.push(UiAction::SetDate(
                date.format(BOOKING_DATE_FORMAT).to_string(),
            ));
        }
        if booking.date.is_empty() {
            columns[0].label(RichText::new("No date selected").color(PALETTE_TEXT_MUTED).small());
        }

        field_label(&mut columns[1], "Time");
        let mut time = booking.time;
        ComboBox::from_id_salt("booking_time")
            .selected_text(time.map(|t| t.label()).unwrap_or("Select time"))
            .show_ui(&mut columns[1], |ui| {
                ui.selectable_value(&mut time, None, "Select time");
                for slot in TimeSlot::ALL {
                    ui.selectable_value(&mut time, Some(slot), slot.label());
                }
            });
        if time != booking.time {
            actions.push(UiAction::SetTime(time));
        }
    });
    ui.add_space(SECTION_SPACING);

    field_label(ui, "Special Instructions");
    let mut notes = booking.notes.clone();
    if ui
        .add(
            TextEdit::multiline(&mut notes)
                .hint_text("Any special requirements or notes...")
                .desired_rows(4)
                .desired_width(f32::INFINITY),
        )
        .changed()
    {
        actions.push(UiAction::SetNotes(notes));
    }
    ui.add_space(SECTION_SPACING);

    let width = ui.available_width();
    if ui
        .add(gold_button("Confirm Booking").min_size(Vec2::new(width, BUTTON_HEIGHT + 8.)))
        .clicked()
    {
        actions.push(UiAction::SubmitBooking);
    }
}
