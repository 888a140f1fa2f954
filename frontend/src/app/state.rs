//! Application State
//!
//! This module defines the main application state and initialization logic.
//!
//! # MVU Loop
//!
//! The `eframe::App::update()` implementation follows this flow:
//! 1. Render the page for the current route
//! 2. Handle the UI command the page returned
//! 3. Remount the landing screen if navigation came back to it

use crate::config::AppConfig;
use crate::navigation::{Route, Router};
use crate::pages::{HomeScreen, NotFound, Room};
use crate::theme::Theme;
use logging::Logger;

/// Main application state - MVU Controller
pub struct App {
    pub(super) logger: Logger,
    pub(super) theme: Theme,
    pub(super) router: Router,

    // Landing screen; replaced on every return to `/`
    pub(super) home: HomeScreen,

    // Route rendered by the previous frame
    pub(super) shown_route: Route,
}

impl App {
    /// Create a new App instance with configuration and logger
    pub fn new(config: &AppConfig, logger: Logger) -> Self {
        logger.info("[APP] Initializing application...");
        logger.info(&format!(
            "[APP] Configuration - window: {}x{}, log_level: {:?}",
            config.window_width, config.window_height, config.log_level
        ));

        let theme = Theme::light();
        let router = Router::new(logger.clone());
        let home = HomeScreen::mount(theme.clone(), logger.clone(), &mut rand::thread_rng());

        logger.info("[APP] Application initialized successfully");
        Self {
            logger,
            theme,
            router,
            home,
            shown_route: Route::Home,
        }
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    /// Replaces the landing screen with a fresh one: empty room code, new particles
    pub(super) fn remount_home(&mut self) {
        self.logger.debug(&format!(
            "[APP] Remounting landing screen, discarding room code '{}'",
            self.home.room_id()
        ));
        self.home = HomeScreen::mount(
            self.theme.clone(),
            self.logger.clone(),
            &mut rand::thread_rng(),
        );
    }

    /// Remounts the landing screen when the route changed back to it
    pub(super) fn sync_route(&mut self) {
        let current = self.router.current();
        if *current == self.shown_route {
            return;
        }

        if *current == Route::Home {
            self.remount_home();
        }
        self.shown_route = self.router.current().clone();
        self.logger.debug(&format!(
            "[APP] Showing {:?} ({} paths in history)",
            self.shown_route,
            self.router.history().len()
        ));
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let command = match self.router.current().clone() {
            Route::Home => self.home.show(ctx),
            Route::Room(room_id) => Room::show(ctx, &room_id, &self.theme),
            Route::NotFound(path) => NotFound::show(ctx, &path, &self.theme),
        };

        if let Some(command) = command {
            self.handle_ui_command(command);
        }
        self.sync_route();
    }
}
