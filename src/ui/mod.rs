mod alerts_view;
mod experiences_view;
mod gauge;
mod home_view;
mod services_view;
mod settings_view;
mod tab_bar;

use std::time::Duration;

use egui::{Button, Color32, Frame, Margin, RichText, Stroke, Ui, Visuals, style::Widgets};
use tokio::runtime::Runtime;

use veluxe::{AppShell, HttpEventsBackend, UiAction, ViewContent};

pub(crate) const PALETTE_BLACK: Color32 = Color32::from_rgb(10, 10, 12);
pub(crate) const PALETTE_BACKGROUND: Color32 = Color32::from_rgb(17, 24, 39);
pub(crate) const PALETTE_PANEL: Color32 = Color32::from_rgb(31, 41, 55);
pub(crate) const PALETTE_PANEL_RAISED: Color32 = Color32::from_rgb(55, 65, 81);
pub(crate) const PALETTE_BORDER: Color32 = Color32::from_rgb(55, 65, 81);
pub(crate) const PALETTE_GOLD: Color32 = Color32::from_rgb(250, 204, 21);
pub(crate) const PALETTE_TEXT_MUTED: Color32 = Color32::from_rgb(209, 213, 219);
pub(crate) const PALETTE_TEXT_FAINT: Color32 = Color32::from_rgb(156, 163, 175);
pub(crate) const PALETTE_GREEN: Color32 = Color32::from_rgb(74, 222, 128);
pub(crate) const PALETTE_BLUE: Color32 = Color32::from_rgb(96, 165, 250);
pub(crate) const PALETTE_RED: Color32 = Color32::from_rgb(239, 68, 68);

const CARD_CORNER_RADIUS: u8 = 12;
const BUTTON_CORNER_RADIUS: u8 = 8;
pub(crate) const ROW_CORNER_RADIUS: u8 = 8;
pub(crate) const BUTTON_HEIGHT: f32 = 44.;
pub(crate) const SECTION_SPACING: f32 = 16.;
const SYNC_REPAINT_INTERVAL: Duration = Duration::from_millis(100);

/// `VeluxeApp` paints the concierge client and feeds member input back into
/// the [`AppShell`].
///
/// Each frame it applies finished network requests, paints the header, the
/// active view and the tab bar, then applies the actions collected while
/// painting. The network runtime lives as long as the app.
pub struct VeluxeApp {
    shell: AppShell<HttpEventsBackend>,
    _runtime: Runtime,
}

impl VeluxeApp {
    pub fn new(
        mut shell: AppShell<HttpEventsBackend>,
        runtime: Runtime,
        cc: &eframe::CreationContext<'_>,
    ) -> Self {
        let default_visuals = Visuals {
            dark_mode: true,
            hyperlink_color: PALETTE_GOLD,
            faint_bg_color: PALETTE_PANEL,
            extreme_bg_color: PALETTE_BLACK,
            panel_fill: PALETTE_BACKGROUND,
            window_fill: PALETTE_BACKGROUND,
            selection: egui::style::Selection {
                bg_fill: PALETTE_GOLD,
                stroke: Stroke::new(1., PALETTE_BLACK),
            },
            widgets: Widgets::dark(),
            striped: false,
            ..Default::default()
        };
        cc.egui_ctx.set_visuals(default_visuals);

        shell.start();
        Self {
            shell,
            _runtime: runtime,
        }
    }

    fn header(ui: &mut Ui) {
        ui.horizontal(|ui| {
            ui.heading(RichText::new("VELUXE").color(PALETTE_GOLD).strong());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(RichText::new("●").color(PALETTE_GOLD).size(22.));
            });
        });
    }
}

impl eframe::App for VeluxeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.shell.poll();

        let mut actions: Vec<UiAction> = Vec::new();

        egui::TopBottomPanel::top("header")
            .frame(Frame::new().fill(PALETTE_BLACK).inner_margin(Margin::same(12)))
            .show(ctx, |ui| Self::header(ui));

        egui::TopBottomPanel::bottom("tab_bar")
            .frame(
                Frame::new()
                    .fill(PALETTE_BLACK)
                    .stroke(Stroke::new(1., PALETTE_BORDER))
                    .inner_margin(Margin::same(6)),
            )
            .show(ctx, |ui| {
                tab_bar::tab_bar(ui, self.shell.active_tab(), &mut actions);
            });

        egui::CentralPanel::default()
            .frame(
                Frame::new()
                    .fill(PALETTE_BACKGROUND)
                    .inner_margin(Margin::same(16)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| match self.shell.render() {
                        ViewContent::Home { vehicle, health } => {
                            home_view::home_view(ui, vehicle, health, &mut actions)
                        }
                        ViewContent::Services { booking } => {
                            services_view::services_view(ui, booking, &mut actions)
                        }
                        ViewContent::Alerts {
                            health,
                            predictions,
                        } => alerts_view::alerts_view(ui, health, predictions),
                        ViewContent::Experiences { feed } => {
                            experiences_view::experiences_view(ui, feed, &mut actions)
                        }
                        ViewContent::Settings {
                            current_plan,
                            preferences,
                        } => settings_view::settings_view(ui, current_plan, preferences, &mut actions),
                    });
            });

        for action in actions {
            self.shell.apply(action);
        }

        // keep polling while requests are outstanding
        if self.shell.is_syncing() {
            ctx.request_repaint_after(SYNC_REPAINT_INTERVAL);
        }
    }
}

pub(crate) fn card_frame(highlight: bool) -> Frame {
    Frame::new()
        .fill(PALETTE_PANEL)
        .stroke(Stroke::new(
            1.,
            if highlight {
                PALETTE_GOLD
            } else {
                PALETTE_BORDER
            },
        ))
        .corner_radius(CARD_CORNER_RADIUS)
        .inner_margin(Margin::same(16))
}

pub(crate) fn gold_button(text: &str) -> Button<'static> {
    Button::new(RichText::new(text).color(PALETTE_BLACK).strong())
        .fill(PALETTE_GOLD)
        .corner_radius(BUTTON_CORNER_RADIUS)
}

pub(crate) fn outline_button(text: &str) -> Button<'static> {
    Button::new(RichText::new(text).color(PALETTE_GOLD).strong())
        .fill(PALETTE_PANEL)
        .stroke(Stroke::new(1., PALETTE_GOLD))
        .corner_radius(BUTTON_CORNER_RADIUS)
}

pub(crate) fn view_title(ui: &mut Ui, title: &str) {
    ui.heading(RichText::new(title).color(Color32::WHITE).strong());
    ui.add_space(SECTION_SPACING);
}
