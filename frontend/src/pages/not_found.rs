use crate::components::{Button, EmptyState};
use crate::events::UiCommand;
use crate::theme::Theme;
use egui::Frame;

/// Shown for any path without a page
pub struct NotFound;

impl NotFound {
    pub fn show(ctx: &egui::Context, path: &str, theme: &Theme) -> Option<UiCommand> {
        let mut command = None;

        egui::CentralPanel::default()
            .frame(Frame::new().fill(theme.background.page))
            .show(ctx, |ui| {
                ui.add_space(80.0);
                EmptyState::new("🔍", "Page not found", theme)
                    .description(format!("Nothing lives at '{}'", path))
                    .show(ui);

                ui.vertical_centered(|ui| {
                    if Button::primary("Back to home", theme).show(ui).clicked() {
                        command = Some(UiCommand::GoHome);
                    }
                });
            });

        command
    }
}
