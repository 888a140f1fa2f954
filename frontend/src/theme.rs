//! Theme
//!
//! The light teal/orange palette used by every page. A `Theme` is built once
//! at startup and handed to each screen, which clones it and never mutates it.

use egui::Color32;

/// Page and surface fills
#[derive(Debug, Clone, PartialEq)]
pub struct BackgroundColors {
    pub page: Color32,
    pub card: Color32,
    pub card_hover: Color32,
    pub card_default: Color32,
    pub color: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextColors {
    pub primary: Color32,
    pub secondary: Color32,
    pub tertiary: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AccentColors {
    pub primary: Color32,
    pub primary_hover: Color32,
    pub secondary: Color32,
    pub tertiary: Color32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BorderColors {
    pub card: Color32,
}

/// Room code input styling
#[derive(Debug, Clone, PartialEq)]
pub struct InputColors {
    pub fill: Color32,
    pub border: Color32,
    pub text: Color32,
}

/// Immutable color configuration for the application
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: BackgroundColors,
    pub text: TextColors,
    pub accent: AccentColors,
    pub border: BorderColors,
    pub input: InputColors,
    /// Right-hand end of the join button gradient (left end is `accent.primary`)
    pub button_gradient_end: Color32,
}

impl Theme {
    /// Light theme with teal and orange accents
    pub fn light() -> Self {
        Self {
            background: BackgroundColors {
                page: Color32::from_rgb(0xf9, 0xfa, 0xfb),
                card: Color32::WHITE,
                card_hover: Color32::from_rgb(0xf3, 0xf4, 0xf6),
                card_default: Color32::from_rgb(0xf9, 0xfa, 0xfb),
                color: Color32::from_rgb(0x00, 0x80, 0x80),
            },
            text: TextColors {
                primary: Color32::from_rgb(0x11, 0x18, 0x27),
                secondary: Color32::from_rgb(0x4b, 0x55, 0x63),
                tertiary: Color32::from_rgb(0x6b, 0x72, 0x80),
            },
            accent: AccentColors {
                primary: Color32::from_rgb(0x00, 0x80, 0x80),
                primary_hover: Color32::from_rgb(0x00, 0x66, 0x66),
                secondary: Color32::from_rgb(0xff, 0xa5, 0x00),
                tertiary: Color32::from_rgba_unmultiplied(0xff, 0xa5, 0x00, 51),
            },
            border: BorderColors {
                card: Color32::from_rgb(0xe5, 0xe7, 0xeb),
            },
            input: InputColors {
                fill: Color32::from_rgb(0xf3, 0xf4, 0xf6),
                border: Color32::from_rgb(0xe5, 0xe7, 0xeb),
                text: Color32::from_rgb(0x11, 0x18, 0x27),
            },
            button_gradient_end: Color32::from_rgb(0x00, 0xb8, 0xb8),
        }
    }

    /// egui visuals matching this palette, applied once to the window
    pub fn visuals(&self) -> egui::Visuals {
        let mut visuals = egui::Visuals::light();
        visuals.panel_fill = self.background.page;
        visuals.window_fill = self.background.card;
        visuals.extreme_bg_color = self.input.fill;
        visuals.override_text_color = Some(self.text.primary);
        visuals.selection.bg_fill = self.accent.tertiary;
        visuals.selection.stroke = egui::Stroke::new(1.0, self.accent.primary);
        visuals
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
