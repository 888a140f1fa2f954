//! Button Component
//!
//! The themed call-to-action button with a horizontal gradient fill.

use crate::theme::Theme;
use egui::epaint::{Mesh, Vertex, WHITE_UV};
use egui::{Color32, CursorIcon, FontId, Pos2, Rect, Sense, Ui, Vec2};

/// A gradient button with a leading icon
pub struct Button {
    icon: Option<String>,
    text: String,
    text_size: f32,
    min_size: Vec2,
    gradient: (Color32, Color32),
    hover_start: Color32,
}

impl Button {
    /// Primary (teal) call-to-action button with the given label
    pub fn primary(label: impl Into<String>, theme: &Theme) -> Self {
        Self {
            icon: None,
            text: label.into(),
            text_size: 16.0,
            min_size: Vec2::new(180.0, 52.0),
            gradient: (theme.accent.primary, theme.button_gradient_end),
            hover_start: theme.accent.primary_hover,
        }
    }

    /// Sets an icon drawn before the label
    pub fn icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Sets the minimum size of the button
    pub fn min_size(mut self, size: Vec2) -> Self {
        self.min_size = size;
        self
    }

    /// Sets the text size
    pub fn text_size(mut self, size: f32) -> Self {
        self.text_size = size;
        self
    }

    fn label(&self) -> String {
        match &self.icon {
            Some(icon) => format!("{}  {}", icon, self.text),
            None => self.text.clone(),
        }
    }

    /// Renders the button and returns the response
    pub fn show(self, ui: &mut Ui) -> egui::Response {
        let galley = ui.painter().layout_no_wrap(
            self.label(),
            FontId::proportional(self.text_size),
            Color32::WHITE,
        );
        let padding = Vec2::new(32.0, 16.0);
        let size = (galley.size() + padding * 2.0).max(self.min_size);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click());

        if ui.is_rect_visible(rect) {
            let start = if response.hovered() {
                self.hover_start
            } else {
                self.gradient.0
            };
            ui.painter().add(gradient_mesh(rect, start, self.gradient.1));

            let text_pos = rect.center() - galley.size() / 2.0;
            ui.painter().galley(text_pos, galley, Color32::WHITE);
        }

        response.on_hover_cursor(CursorIcon::PointingHand)
    }
}

/// Left-to-right gradient filling `rect`
fn gradient_mesh(rect: Rect, left: Color32, right: Color32) -> Mesh {
    let mut mesh = Mesh::default();
    let corners = [
        (rect.left_top(), left),
        (rect.right_top(), right),
        (rect.right_bottom(), right),
        (rect.left_bottom(), left),
    ];
    for (pos, color) in corners {
        mesh.vertices.push(Vertex {
            pos: Pos2::new(pos.x, pos.y),
            uv: WHITE_UV,
            color,
        });
    }
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);
    mesh
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_with_icon() {
        let theme = Theme::light();
        let button = Button::primary("Join Stream", &theme).icon("▶");
        assert_eq!(button.label(), "▶  Join Stream");
        assert_eq!(Button::primary("Go", &theme).label(), "Go");
    }

    #[test]
    fn test_gradient_runs_from_accent() {
        let theme = Theme::light();
        let button = Button::primary("Join Stream", &theme);
        assert_eq!(button.gradient, (theme.accent.primary, theme.button_gradient_end));
        assert_eq!(button.hover_start, theme.accent.primary_hover);
    }

    #[test]
    fn test_gradient_mesh_covers_rect() {
        let rect = Rect::from_min_max(Pos2::new(0.0, 0.0), Pos2::new(100.0, 40.0));
        let mesh = gradient_mesh(rect, Color32::RED, Color32::BLUE);

        assert_eq!(mesh.vertices.len(), 4);
        assert_eq!(mesh.indices.len(), 6);
        assert_eq!(mesh.vertices[0].color, Color32::RED);
        assert_eq!(mesh.vertices[1].color, Color32::BLUE);
    }
}
