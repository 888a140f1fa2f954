//! EmptyState Component
//!
//! Centered icon, message and optional description for pages with no real
//! content (room placeholder, unknown paths).

use crate::theme::Theme;
use egui::{Color32, RichText, Ui};

pub struct EmptyState {
    icon: String,
    message: String,
    description: Option<String>,
    icon_color: Color32,
    message_color: Color32,
    description_color: Color32,
}

impl EmptyState {
    pub fn new(icon: impl Into<String>, message: impl Into<String>, theme: &Theme) -> Self {
        Self {
            icon: icon.into(),
            message: message.into(),
            description: None,
            icon_color: theme.accent.secondary,
            message_color: theme.text.primary,
            description_color: theme.text.tertiary,
        }
    }

    /// Adds an optional description text below the message
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn show(self, ui: &mut Ui) {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);

            ui.label(RichText::new(&self.icon).size(48.0).color(self.icon_color));
            ui.add_space(15.0);

            ui.label(
                RichText::new(&self.message)
                    .size(28.0)
                    .strong()
                    .color(self.message_color),
            );

            if let Some(desc) = self.description {
                ui.add_space(8.0);
                ui.label(RichText::new(desc).size(16.0).color(self.description_color));
            }

            ui.add_space(30.0);
        });
    }
}
