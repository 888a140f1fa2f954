use super::{Navigator, Route};
use logging::Logger;

/// In-process router and the application's navigation collaborator.
pub struct Router {
    current: Route,
    history: Vec<String>,
    logger: Logger,
}

impl Router {
    /// Creates a router positioned at `/`
    pub fn new(logger: Logger) -> Self {
        Self {
            current: Route::Home,
            history: vec!["/".to_string()],
            logger,
        }
    }

    pub fn current(&self) -> &Route {
        &self.current
    }

    /// Every path visited, oldest first, starting with `/`
    pub fn history(&self) -> &[String] {
        &self.history
    }
}

impl Navigator for Router {
    fn navigate(&mut self, path: &str) {
        let route = Route::parse(path);
        self.logger
            .info(&format!("[NAV] {} -> {:?}", path, route));
        if let Route::NotFound(_) = route {
            self.logger
                .warn(&format!("[NAV] No page matches path '{}'", path));
        }
        self.history.push(path.to_string());
        self.current = route;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logging::LogLevel;

    #[test]
    fn test_starts_at_home() {
        let (logger, _) = Logger::in_memory(LogLevel::Debug);
        let router = Router::new(logger);
        assert_eq!(router.current(), &Route::Home);
        assert_eq!(router.history(), ["/"]);
    }

    #[test]
    fn test_navigate_updates_route_and_history() {
        let (logger, buffer) = Logger::in_memory(LogLevel::Debug);
        let mut router = Router::new(logger);

        router.navigate("/room/abc123");
        assert_eq!(router.current(), &Route::Room("abc123".to_string()));

        router.navigate("/");
        assert_eq!(router.current(), &Route::Home);
        assert_eq!(router.history(), ["/", "/room/abc123", "/"]);
        assert!(buffer.contains("[NAV] /room/abc123"));
    }

    #[test]
    fn test_unknown_path_is_logged_as_warning() {
        let (logger, buffer) = Logger::in_memory(LogLevel::Warn);
        let mut router = Router::new(logger);

        router.navigate("/room/");
        assert_eq!(router.current(), &Route::NotFound("/room/".to_string()));
        assert!(buffer.contains("WARN: [NAV] No page matches path '/room/'"));
    }
}
