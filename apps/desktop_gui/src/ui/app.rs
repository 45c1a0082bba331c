use std::time::Duration;

use crossbeam_channel::{Receiver, Sender};
use eframe::egui;

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::UiEvent;
use crate::controller::orchestration::dispatch_backend_command;
use crate::controller::search::{DialogKind, SearchState, DIALOG_TITLE};
use crate::ui::theme;

pub const WINDOW_TITLE: &str = "Pokédex.moe";
pub const WINDOW_SIZE: f32 = 400.0;

const PENDING_REPAINT_INTERVAL: Duration = Duration::from_millis(50);

pub struct PokedexApp {
    cmd_tx: Sender<BackendCommand>,
    ui_rx: Receiver<UiEvent>,

    search: SearchState,
    query_input: String,
    search_hovered: bool,
    rendered_dialog: Option<u64>,

    background: egui::TextureHandle,
}

impl PokedexApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        cmd_tx: Sender<BackendCommand>,
        ui_rx: Receiver<UiEvent>,
        background: egui::ColorImage,
    ) -> Self {
        let background =
            cc.egui_ctx
                .load_texture("pokedex-background", background, egui::TextureOptions::LINEAR);
        Self {
            cmd_tx,
            ui_rx,
            search: SearchState::new(),
            query_input: String::new(),
            search_hovered: false,
            rendered_dialog: None,
            background,
        }
    }

    fn process_ui_events(&mut self) {
        while let Ok(event) = self.ui_rx.try_recv() {
            self.search.apply(event);
        }
    }

    fn trigger_search(&mut self) {
        let Some(cmd) = self.search.on_search_triggered(&self.query_input) else {
            return;
        };
        if let Err(err) = dispatch_backend_command(&self.cmd_tx, cmd) {
            self.search.dispatch_failed(err);
        }
    }

    fn paint_background(&self, ui: &egui::Ui) {
        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        ui.painter()
            .image(self.background.id(), ui.max_rect(), uv, egui::Color32::WHITE);
    }

    fn show_search_panel(&mut self, ui: &mut egui::Ui) {
        egui::Frame::NONE
            .fill(theme::PANEL_BACKGROUND)
            .stroke(egui::Stroke::new(theme::PANEL_BORDER, theme::ACCENT_BLUE))
            .outer_margin(egui::Margin::same(theme::PANEL_MARGIN))
            .inner_margin(egui::Margin::symmetric(12, 10))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        egui::RichText::new("Search Pokémon by Name or ID")
                            .size(theme::HEADING_SIZE)
                            .color(theme::ACCENT_RED),
                    );
                    ui.add_space(5.0);

                    let entry_stroke = egui::Stroke::new(theme::ENTRY_BORDER, theme::ACCENT_BLUE);
                    ui.visuals_mut().widgets.inactive.bg_stroke = entry_stroke;
                    ui.visuals_mut().widgets.hovered.bg_stroke = entry_stroke;
                    ui.visuals_mut().selection.stroke = entry_stroke;
                    ui.add(
                        egui::TextEdit::singleline(&mut self.query_input)
                            .id_salt("pokedex_query_input")
                            .font(egui::FontId::proportional(theme::ENTRY_SIZE))
                            .text_color(theme::ACCENT_RED)
                            .background_color(theme::ACCENT_YELLOW)
                            .desired_width(220.0),
                    );
                    ui.add_space(10.0);

                    let button = egui::Button::new(
                        egui::RichText::new("SEARCH")
                            .size(theme::BUTTON_SIZE)
                            .color(theme::ACCENT_RED),
                    )
                    .fill(theme::search_button_fill(self.search_hovered))
                    .stroke(egui::Stroke::NONE);
                    let response = ui.add(button);
                    self.search_hovered = response.hovered();
                    if response.clicked() {
                        self.trigger_search();
                    }
                    ui.add_space(10.0);

                    if self.search.is_awaiting_response() {
                        ui.spinner();
                    }
                    self.show_result_labels(ui);
                });
            });
    }

    fn show_result_labels(&self, ui: &mut egui::Ui) {
        let lines = match self.search.display() {
            Some(fields) => [
                format!("Name: {}", fields.name),
                format!("ID: {}", fields.id),
                format!("Types: {}", fields.types),
            ],
            None => Default::default(),
        };
        for line in lines {
            ui.label(
                egui::RichText::new(line)
                    .size(theme::RESULT_SIZE)
                    .color(theme::ACCENT_YELLOW),
            );
        }
    }

    fn show_dialog(&mut self, ctx: &egui::Context) {
        let Some(dialog) = self.search.dialog().cloned() else {
            self.rendered_dialog = None;
            return;
        };
        let serial = self.search.dialog_serial();
        let enter_dismisses = enter_may_dismiss(self.rendered_dialog, serial)
            && ctx.input(|i| i.key_pressed(egui::Key::Enter));

        let accent = match dialog.kind {
            DialogKind::Warning => theme::ACCENT_YELLOW,
            DialogKind::Error => theme::ACCENT_RED,
        };
        let mut dismissed = false;
        egui::Window::new(DIALOG_TITLE)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(egui::RichText::new(&dialog.message).strong().color(accent));
                if let Some(detail) = &dialog.detail {
                    ui.small(detail);
                }
                ui.add_space(6.0);
                ui.vertical_centered(|ui| {
                    if ui.button("OK").clicked() {
                        dismissed = true;
                    }
                });
            });

        if dismissed || enter_dismisses {
            self.search.dismiss_dialog();
            self.rendered_dialog = None;
        } else {
            self.rendered_dialog = Some(serial);
        }
    }
}

/// Enter only closes a dialog that was already on screen in an earlier frame.
fn enter_may_dismiss(rendered_dialog: Option<u64>, serial: u64) -> bool {
    rendered_dialog == Some(serial)
}

impl eframe::App for PokedexApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.process_ui_events();

        let dialog_open = self.search.dialog().is_some();
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE.fill(theme::WINDOW_BACKGROUND))
            .show(ctx, |ui| {
                self.paint_background(ui);
                ui.add_enabled_ui(!dialog_open, |ui| self.show_search_panel(ui));
            });
        self.show_dialog(ctx);

        if self.search.is_awaiting_response() {
            ctx.request_repaint_after(PENDING_REPAINT_INTERVAL);
        }
    }
}
