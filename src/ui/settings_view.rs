use egui::{Align, Color32, Layout, RichText, Ui, Vec2};

use veluxe::{
    UiAction,
    membership::{MembershipTier, Preference, Preferences},
};

use super::{
    BUTTON_HEIGHT, PALETTE_GOLD, PALETTE_GREEN, PALETTE_TEXT_FAINT, PALETTE_TEXT_MUTED,
    SECTION_SPACING, card_frame, gold_button, outline_button, view_title,
};

fn card_heading(ui: &mut Ui, text: &str) {
    ui.label(RichText::new(text).color(Color32::WHITE).size(18.).strong());
    ui.add_space(8.);
}

fn tier_card(ui: &mut Ui, tier: MembershipTier, current_plan: MembershipTier, actions: &mut Vec<UiAction>) {
    card_frame(tier.is_popular()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        if tier.is_popular() {
            ui.label(
                RichText::new(" MOST POPULAR ")
                    .small()
                    .strong()
                    .color(Color32::BLACK)
                    .background_color(PALETTE_GOLD),
            );
        }
        ui.horizontal(|ui| {
            ui.label(RichText::new(tier.name()).color(Color32::WHITE).size(18.).strong());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(tier.monthly_price()).color(PALETTE_GOLD).size(18.).strong());
            });
        });
        for feature in tier.features() {
            ui.label(RichText::new(format!("✓ {feature}")).color(PALETTE_TEXT_MUTED));
        }
        ui.add_space(8.);

        let width = ui.available_width();
        let size = Vec2::new(width, BUTTON_HEIGHT - 8.);
        let button = if tier == current_plan {
            outline_button("Current Plan").min_size(size)
        } else {
            gold_button("Choose Plan").min_size(size)
        };
        if ui.add(button).clicked() {
            actions.push(UiAction::ChoosePlan(tier));
        }
    });
}

pub(crate) fn settings_view(
    ui: &mut Ui,
    current_plan: MembershipTier,
    preferences: &Preferences,
    actions: &mut Vec<UiAction>,
) {
    view_title(ui, "Membership");

    card_frame(true).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Current Plan").color(PALETTE_TEXT_FAINT).small());
        ui.horizontal(|ui| {
            ui.label(RichText::new(current_plan.name()).color(PALETTE_GOLD).size(22.).strong());
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new("Active").color(PALETTE_GREEN));
            });
        });
        ui.label(RichText::new(current_plan.monthly_price()).color(PALETTE_TEXT_MUTED));
    });
    ui.add_space(SECTION_SPACING);

    for tier in MembershipTier::ALL {
        tier_card(ui, tier, current_plan, actions);
        ui.add_space(SECTION_SPACING);
    }

    card_frame(false).show(ui, |ui| {
        ui.set_width(ui.available_width());
        card_heading(ui, "Preferences");
        for preference in Preference::ALL {
            let mut enabled = preferences.is_enabled(preference);
            ui.horizontal(|ui| {
                ui.label(RichText::new(preference.label()).color(PALETTE_TEXT_MUTED));
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.checkbox(&mut enabled, "").changed() {
                        actions.push(UiAction::TogglePreference(preference));
                    }
                });
            });
        }
    });
}
