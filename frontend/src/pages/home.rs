//! Home Page
//!
//! Landing screen for joining a live stream by room code.
//!
//! State lives in [`HomeScreen`]; [`HomeScreen::view`] turns it into a
//! [`HomeView`] which the `render_*` functions paint without touching state.

use crate::components::{
    Button, CARD_PADDING, Card, FEATURES, FeatureTile, Particle, ParticleField, paint_particles,
};
use crate::events::UiCommand;
use crate::navigation::{Navigator, room_path};
use crate::theme::Theme;
use egui::text::{LayoutJob, TextFormat};
use egui::{FontId, Frame, Key, Margin, RichText, ScrollArea, Stroke, TextEdit, Ui};
use logging::Logger;
use rand::Rng;

pub const TITLE: &str = "Live Stream";
pub const TITLE_ACCENT: &str = "Now";
pub const SUBTITLE: &str = "Experience the thrill of live content at your fingertips";
pub const ROOM_ID_PLACEHOLDER: &str = "Enter room ID";
pub const JOIN_LABEL: &str = "Join Stream";
const JOIN_ICON: &str = "▶";

const CARD_MAX_WIDTH: f32 = 1024.0;
const INPUT_MAX_WIDTH: f32 = 512.0;

/// Everything the landing page shows, derived from [`HomeScreen`] state
#[derive(Debug, Clone, PartialEq)]
pub struct HomeView<'a> {
    pub title: &'static str,
    pub title_accent: &'static str,
    pub subtitle: &'static str,
    pub room_id: &'a str,
    pub placeholder: &'static str,
    pub join_label: &'static str,
    pub tiles: Vec<FeatureTile>,
    pub particles: &'a [Particle],
    pub theme: &'a Theme,
}

/// Landing screen controller
pub struct HomeScreen {
    theme: Theme,
    room_id: String,
    particles: ParticleField,
    logger: Logger,
}

impl HomeScreen {
    /// Creates the screen with an empty room code and no decoration yet
    pub fn new(theme: Theme, logger: Logger) -> Self {
        Self {
            theme,
            room_id: String::new(),
            particles: ParticleField::new(),
            logger,
        }
    }

    /// Construction sequence used by the app: `new` followed by `initialize`
    pub fn mount<R: Rng + ?Sized>(theme: Theme, logger: Logger, rng: &mut R) -> Self {
        let mut screen = Self::new(theme, logger);
        screen.initialize(rng);
        screen
    }

    /// Generates the background particles. Repeated calls keep the first batch.
    pub fn initialize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if self.particles.is_initialized() {
            return;
        }
        self.particles.initialize(rng);
        self.logger.debug(&format!(
            "[HOME] Generated {} particles",
            self.particles.particles().len()
        ));
    }

    pub fn room_id(&self) -> &str {
        &self.room_id
    }

    /// Replaces the room code with whatever the input now holds
    pub fn on_identifier_changed(&mut self, new_value: impl Into<String>) {
        self.room_id = new_value.into();
    }

    /// Sends the navigator to `/room/<room code>`. Does nothing while the code is empty.
    pub fn on_join_activated(&self, navigator: &mut dyn Navigator) {
        if self.room_id.is_empty() {
            self.logger.debug("[HOME] Join ignored, room code is empty");
            return;
        }
        self.logger
            .info(&format!("[HOME] Joining room '{}'", self.room_id));
        navigator.navigate(&room_path(&self.room_id));
    }

    /// Pure render of the current state
    pub fn view(&self) -> HomeView<'_> {
        HomeView {
            title: TITLE,
            title_accent: TITLE_ACCENT,
            subtitle: SUBTITLE,
            room_id: &self.room_id,
            placeholder: ROOM_ID_PLACEHOLDER,
            join_label: JOIN_LABEL,
            tiles: FEATURES
                .iter()
                .map(|feature| FeatureTile::render(feature, &self.theme))
                .collect(),
            particles: self.particles.particles(),
            theme: &self.theme,
        }
    }

    /// Paints the landing page and applies input edits
    pub fn show(&mut self, ctx: &egui::Context) -> Option<UiCommand> {
        let mut command = None;
        let mut room_id = self.room_id.clone();
        let time = ctx.input(|i| i.time);

        let edited = {
            let view = self.view();
            let mut edited = false;

            egui::CentralPanel::default()
                .frame(Frame::new().fill(view.theme.background.page))
                .show(ctx, |ui| {
                    paint_particles(
                        ui.painter(),
                        ui.max_rect(),
                        view.particles,
                        time,
                        view.theme.accent.secondary,
                    );
                    edited = render_page(ui, &view, &mut room_id, &mut command);
                });

            edited
        };

        if edited {
            self.on_identifier_changed(room_id);
        }

        // Particles keep floating
        ctx.request_repaint();

        command
    }
}

/// Vertical placement of the card for a given panel size
#[derive(Debug, Clone, Copy, PartialEq)]
struct CardLayout {
    top_space: f32,
    width: f32,
    min_height: f32,
}

impl CardLayout {
    /// Keeps spacer, card and padding within `available` so nothing needs
    /// scrolling unless the content itself is taller than the panel.
    fn fit(available: egui::Vec2) -> Self {
        let top_space = (available.y * 0.08).clamp(16.0, 80.0);
        let room_for_card = available.y - 2.0 * top_space - 2.0 * CARD_PADDING;
        Self {
            top_space,
            width: CARD_MAX_WIDTH.min(available.x - 40.0).max(0.0),
            min_height: (available.y * 0.7).min(room_for_card).max(0.0),
        }
    }
}

/// Lays out the card; returns whether the room code was edited
fn render_page(
    ui: &mut Ui,
    view: &HomeView<'_>,
    room_id: &mut String,
    command: &mut Option<UiCommand>,
) -> bool {
    let layout = CardLayout::fit(ui.available_size());

    let mut edited = false;
    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(layout.top_space);

                Card::new(view.theme)
                    .max_width(layout.width)
                    .min_height(layout.min_height)
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            render_header(ui, view);
                            ui.add_space(16.0);

                            let input = render_room_input(ui, view, room_id, layout.width);
                            edited = input.changed();
                            ui.add_space(16.0);

                            let clicked = render_join_button(ui, view);
                            let enter_pressed =
                                input.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                            if clicked || enter_pressed {
                                *command = Some(UiCommand::JoinStream);
                            }
                            ui.add_space(24.0);

                            render_features(ui, view);
                        });
                    });

                ui.add_space(layout.top_space);
            });
        });

    edited
}

fn render_header(ui: &mut Ui, view: &HomeView<'_>) {
    let title_font = FontId::proportional(60.0);
    let mut title = LayoutJob::default();
    title.append(
        &format!("{} ", view.title),
        0.0,
        TextFormat::simple(title_font.clone(), view.theme.text.primary),
    );
    title.append(
        view.title_accent,
        0.0,
        TextFormat::simple(title_font, view.theme.accent.primary),
    );

    ui.label(title);
    ui.add_space(12.0);
    ui.label(
        RichText::new(view.subtitle)
            .size(20.0)
            .color(view.theme.text.secondary),
    );
}

fn render_room_input(
    ui: &mut Ui,
    view: &HomeView<'_>,
    room_id: &mut String,
    card_width: f32,
) -> egui::Response {
    let width = INPUT_MAX_WIDTH.min(card_width - 64.0).max(120.0);

    Frame::new()
        .fill(view.theme.input.fill)
        .stroke(Stroke::new(1.0, view.theme.input.border))
        .corner_radius(6.0)
        .inner_margin(Margin::symmetric(16, 12))
        .show(ui, |ui| {
            ui.add(
                TextEdit::singleline(room_id)
                    .hint_text(view.placeholder)
                    .frame(false)
                    .desired_width(width - 32.0)
                    .font(FontId::proportional(16.0))
                    .text_color(view.theme.input.text),
            )
        })
        .inner
}

fn render_join_button(ui: &mut Ui, view: &HomeView<'_>) -> bool {
    Button::primary(view.join_label, view.theme)
        .icon(JOIN_ICON)
        .text_size(18.0)
        .min_size(egui::vec2(200.0, 56.0))
        .show(ui)
        .clicked()
}

fn render_features(ui: &mut Ui, view: &HomeView<'_>) {
    ui.columns(view.tiles.len(), |columns| {
        for (column, tile) in columns.iter_mut().zip(&view.tiles) {
            tile.show(column);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::{LogBuffer, LogLevel};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[derive(Default)]
    struct RecordingNavigator {
        paths: Vec<String>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, path: &str) {
            self.paths.push(path.to_string());
        }
    }

    fn screen() -> (HomeScreen, LogBuffer) {
        let (logger, buffer) = Logger::in_memory(LogLevel::Debug);
        let screen = HomeScreen::mount(Theme::light(), logger, &mut StdRng::seed_from_u64(9));
        (screen, buffer)
    }

    #[test]
    fn test_starts_empty() {
        let (screen, _) = screen();
        assert_eq!(screen.room_id(), "");
        assert_eq!(screen.view().room_id, "");
    }

    #[test]
    fn test_empty_room_id_does_not_navigate() {
        let (mut screen, buffer) = screen();
        let mut navigator = RecordingNavigator::default();

        screen.on_identifier_changed("");
        screen.on_join_activated(&mut navigator);

        assert!(navigator.paths.is_empty());
        assert!(buffer.contains("[HOME] Join ignored"));
    }

    #[test]
    fn test_join_navigates_to_room_path() {
        let (mut screen, _) = screen();
        let mut navigator = RecordingNavigator::default();

        screen.on_identifier_changed("abc123");
        screen.on_join_activated(&mut navigator);

        assert_eq!(navigator.paths, ["/room/abc123"]);
    }

    #[test]
    fn test_last_write_wins() {
        let (mut screen, _) = screen();
        let mut navigator = RecordingNavigator::default();

        screen.on_identifier_changed("a");
        screen.on_identifier_changed("ab");
        screen.on_join_activated(&mut navigator);

        assert_eq!(navigator.paths, ["/room/ab"]);
    }

    #[test]
    fn test_room_id_is_not_trimmed_or_escaped() {
        let (mut screen, _) = screen();
        let mut navigator = RecordingNavigator::default();

        screen.on_identifier_changed("  my room/1?x ");
        screen.on_join_activated(&mut navigator);

        assert_eq!(navigator.paths, ["/room/  my room/1?x "]);
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        let (mut screen, _) = screen();
        let mut navigator = RecordingNavigator::default();

        screen.on_identifier_changed(" ");
        screen.on_join_activated(&mut navigator);

        assert_eq!(navigator.paths, ["/room/ "]);
    }

    #[test]
    fn test_clearing_room_id_suppresses_join_again() {
        let (mut screen, _) = screen();
        let mut navigator = RecordingNavigator::default();

        screen.on_identifier_changed("live");
        screen.on_identifier_changed("");
        screen.on_join_activated(&mut navigator);

        assert!(navigator.paths.is_empty());
    }

    #[test]
    fn test_each_activation_navigates_once() {
        let (mut screen, _) = screen();
        let mut navigator = RecordingNavigator::default();

        screen.on_identifier_changed("x");
        screen.on_join_activated(&mut navigator);
        screen.on_join_activated(&mut navigator);

        assert_eq!(navigator.paths, ["/room/x", "/room/x"]);
    }

    #[test]
    fn test_new_has_no_particles_until_initialized() {
        let (logger, _) = Logger::in_memory(LogLevel::Debug);
        let mut screen = HomeScreen::new(Theme::light(), logger);
        assert!(screen.view().particles.is_empty());

        screen.initialize(&mut StdRng::seed_from_u64(3));
        assert_eq!(screen.view().particles.len(), 50);
    }

    #[test]
    fn test_particles_survive_state_changes() {
        let (mut screen, _) = screen();
        let before = screen.view().particles.to_vec();

        screen.on_identifier_changed("abc");
        screen.initialize(&mut StdRng::seed_from_u64(100));

        assert_eq!(screen.view().particles, before.as_slice());
    }

    #[test]
    fn test_view_content() {
        let (mut screen, _) = screen();
        screen.on_identifier_changed("room-7");
        let view = screen.view();

        assert_eq!(view.title, "Live Stream");
        assert_eq!(view.title_accent, "Now");
        assert_eq!(view.placeholder, "Enter room ID");
        assert_eq!(view.join_label, "Join Stream");
        assert_eq!(view.room_id, "room-7");
        assert_eq!(view.tiles.len(), 3);
        assert_eq!(view.tiles[2].title, "Instant Support");
    }

    #[test]
    fn test_view_is_repeatable() {
        let (screen, _) = screen();
        assert_eq!(screen.view(), screen.view());
    }

    fn key_press(key: Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    /// Runs one frame of the screen in an 800x600 window with `events` as input
    fn run_frame(
        ctx: &egui::Context,
        screen: &mut HomeScreen,
        events: Vec<egui::Event>,
    ) -> Option<UiCommand> {
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(800.0, 600.0),
            )),
            events,
            ..Default::default()
        };
        let mut command = None;
        let _ = ctx.run(input, |ctx| {
            command = screen.show(ctx);
        });
        command
    }

    #[test]
    fn test_show_without_input_emits_nothing() {
        let (mut screen, _) = screen();
        let ctx = egui::Context::default();

        assert_eq!(run_frame(&ctx, &mut screen, vec![]), None);
        assert_eq!(screen.room_id(), "");
    }

    #[test]
    fn test_typing_then_enter_joins() {
        let (mut screen, _) = screen();
        let ctx = egui::Context::default();
        let mut navigator = RecordingNavigator::default();

        run_frame(&ctx, &mut screen, vec![]);
        run_frame(&ctx, &mut screen, vec![key_press(Key::Tab)]);

        let typed = run_frame(&ctx, &mut screen, vec![egui::Event::Text("abc".to_string())]);
        assert_eq!(typed, None);
        assert_eq!(screen.room_id(), "abc");

        let command = run_frame(&ctx, &mut screen, vec![key_press(Key::Enter)]);
        assert_eq!(command, Some(UiCommand::JoinStream));

        screen.on_join_activated(&mut navigator);
        assert_eq!(navigator.paths, ["/room/abc"]);
    }

    #[test]
    fn test_enter_on_empty_field_does_not_navigate() {
        let (mut screen, _) = screen();
        let ctx = egui::Context::default();
        let mut navigator = RecordingNavigator::default();

        run_frame(&ctx, &mut screen, vec![]);
        run_frame(&ctx, &mut screen, vec![key_press(Key::Tab)]);
        let command = run_frame(&ctx, &mut screen, vec![key_press(Key::Enter)]);

        if command == Some(UiCommand::JoinStream) {
            screen.on_join_activated(&mut navigator);
        }
        assert_eq!(screen.room_id(), "");
        assert!(navigator.paths.is_empty());
    }

    #[test]
    fn test_card_fits_minimum_window() {
        let layout = CardLayout::fit(egui::vec2(800.0, 600.0));

        assert_eq!(layout.width, 760.0);
        assert!(layout.top_space * 2.0 + layout.min_height + CARD_PADDING * 2.0 <= 600.0);
    }

    #[test]
    fn test_card_layout_scales_with_window() {
        let small = CardLayout::fit(egui::vec2(800.0, 600.0));
        let large = CardLayout::fit(egui::vec2(1920.0, 1080.0));

        assert_eq!(large.width, CARD_MAX_WIDTH);
        assert!(large.min_height > small.min_height);
        assert!(large.top_space * 2.0 + large.min_height + CARD_PADDING * 2.0 <= 1080.0);
    }

    #[test]
    fn test_card_layout_never_negative() {
        let layout = CardLayout::fit(egui::vec2(10.0, 10.0));
        assert_eq!(layout.width, 0.0);
        assert_eq!(layout.min_height, 0.0);
        assert_eq!(layout.top_space, 16.0);
    }
}
