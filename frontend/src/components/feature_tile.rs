//! FeatureTile Component
//!
//! A small highlight block: large symbol, title and description.

use crate::theme::Theme;
use egui::{Color32, CornerRadius, FontId, Frame, Margin, RichText, Ui};

/// Static content of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDescriptor {
    pub symbol: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// The three tiles shown under the join button
pub const FEATURES: [FeatureDescriptor; 3] = [
    FeatureDescriptor {
        symbol: "📺",
        title: "Real-Time Updates",
        description: "Stay updated with real-time notifications and alerts for your trips.",
    },
    FeatureDescriptor {
        symbol: "👥",
        title: "Group Communication",
        description: "Easily communicate with fellow travelers through Voyago's group messaging system.",
    },
    FeatureDescriptor {
        symbol: "⚡",
        title: "Instant Support",
        description: "Get instant support from our team for any travel-related queries.",
    },
];

/// A tile with all of its styling resolved against a theme
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTile {
    pub symbol: String,
    pub symbol_color: Color32,
    pub symbol_size: f32,
    pub title: String,
    pub title_color: Color32,
    pub title_size: f32,
    pub description: String,
    pub description_color: Color32,
    pub fill: Color32,
    pub padding: i8,
    pub corner_radius: u8,
}

impl FeatureTile {
    /// Resolves a descriptor against `theme`. Equal inputs always give equal tiles.
    pub fn render(descriptor: &FeatureDescriptor, theme: &Theme) -> Self {
        Self {
            symbol: descriptor.symbol.to_string(),
            symbol_color: theme.accent.secondary,
            symbol_size: 48.0,
            title: descriptor.title.to_string(),
            title_color: theme.text.primary,
            title_size: 20.0,
            description: descriptor.description.to_string(),
            description_color: theme.text.secondary,
            fill: theme.background.card_default,
            padding: 24,
            corner_radius: 8,
        }
    }

    /// Paints the tile
    pub fn show(&self, ui: &mut Ui) -> egui::Response {
        Frame::new()
            .fill(self.fill)
            .corner_radius(CornerRadius::same(self.corner_radius))
            .inner_margin(Margin::same(self.padding))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());

                ui.label(
                    RichText::new(&self.symbol)
                        .size(self.symbol_size)
                        .color(self.symbol_color),
                );
                ui.add_space(16.0);

                ui.label(
                    RichText::new(&self.title)
                        .font(FontId::proportional(self.title_size))
                        .color(self.title_color)
                        .strong(),
                );
                ui.add_space(8.0);

                ui.label(RichText::new(&self.description).color(self.description_color));
            })
            .response
    }
}
