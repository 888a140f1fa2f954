//! Room Page
//!
//! Destination of a successful join. Streaming itself happens elsewhere; this
//! page confirms which room was entered and offers a way back.

use crate::components::{Button, Card, EmptyState};
use crate::events::UiCommand;
use crate::theme::Theme;
use egui::{Frame, RichText};

pub struct Room;

impl Room {
    pub fn show(ctx: &egui::Context, room_id: &str, theme: &Theme) -> Option<UiCommand> {
        let mut command = None;

        egui::CentralPanel::default()
            .frame(Frame::new().fill(theme.background.page))
            .show(ctx, |ui| {
                Self::render_header(ui, room_id, theme);
                ui.add_space(60.0);

                ui.vertical_centered(|ui| {
                    Card::new(theme).max_width(560.0).show(ui, |ui| {
                        EmptyState::new("📡", "Waiting for the stream", theme)
                            .description("The broadcast will appear here once it starts.")
                            .show(ui);

                        ui.vertical_centered(|ui| {
                            if Button::primary("Leave", theme).icon("⏴").show(ui).clicked() {
                                command = Some(UiCommand::GoHome);
                            }
                        });
                    });
                });
            });

        command
    }

    fn render_header(ui: &mut egui::Ui, room_id: &str, theme: &Theme) {
        ui.horizontal(|ui| {
            ui.add_space(20.0);
            ui.label(
                RichText::new(format!("Room: {}", room_id))
                    .size(32.0)
                    .color(theme.text.primary),
            );
        });
    }
}
