use egui::{Button, Color32, RichText, Ui, Vec2};

use veluxe::{Tab, UiAction, ViewRegistry};

use super::{BUTTON_HEIGHT, PALETTE_GOLD, PALETTE_TEXT_FAINT};

pub(crate) fn tab_bar(ui: &mut Ui, active: Tab, actions: &mut Vec<UiAction>) {
    let tabs = ViewRegistry::tabs();
    ui.columns(tabs.len(), |columns| {
        for (column, descriptor) in columns.iter_mut().zip(tabs) {
            let color = if descriptor.tab == active {
                PALETTE_GOLD
            } else {
                PALETTE_TEXT_FAINT
            };
            let text = RichText::new(format!("{}\n{}", descriptor.icon, descriptor.label))
                .color(color)
                .small();
            let width = column.available_width();
            let button = Button::new(text)
                .frame(false)
                .fill(Color32::TRANSPARENT)
                .min_size(Vec2::new(width, BUTTON_HEIGHT));
            if column.add(button).clicked() && descriptor.tab != active {
                actions.push(UiAction::SelectTab(descriptor.tab));
            }
        }
    });
}
