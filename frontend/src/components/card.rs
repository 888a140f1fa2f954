//! Card Component
//!
//! The large white surface holding the landing content.

use crate::theme::Theme;
use egui::{Color32, Frame, Stroke, epaint::Shadow};

/// Padding between the card edge and its content
pub const CARD_PADDING: f32 = 32.0;

/// A reusable card component with shadow and rounded corners
pub struct Card {
    fill: Color32,
    border: Color32,
    max_width: Option<f32>,
    min_height: Option<f32>,
}

impl Card {
    /// Card surface colored from `theme`
    pub fn new(theme: &Theme) -> Self {
        Self {
            fill: theme.background.card,
            border: theme.border.card,
            max_width: None,
            min_height: None,
        }
    }

    /// Sets the maximum width of the card
    pub fn max_width(mut self, width: f32) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = Some(height);
        self
    }

    /// Renders the card with custom content
    pub fn show<R>(
        self,
        ui: &mut egui::Ui,
        add_contents: impl FnOnce(&mut egui::Ui) -> R,
    ) -> egui::InnerResponse<R> {
        Frame::new()
            .fill(self.fill)
            .corner_radius(12.0)
            .inner_margin(CARD_PADDING)
            .stroke(Stroke::new(1.0, self.border))
            .shadow(Shadow {
                offset: [0, 25],
                blur: 50,
                spread: 0,
                color: Color32::from_black_alpha(64),
            })
            .show(ui, |ui| {
                if let Some(width) = self.max_width {
                    ui.set_max_width(width);
                    ui.set_min_width(width);
                }
                if let Some(height) = self.min_height {
                    ui.set_min_height(height);
                }
                add_contents(ui)
            })
    }
}
