/// Prefix of every room path
pub const ROOM_PATH_PREFIX: &str = "/room/";

/// Builds the path of a room. The identifier is used verbatim, without
/// trimming or escaping.
pub fn room_path(room_id: &str) -> String {
    format!("{}{}", ROOM_PATH_PREFIX, room_id)
}

/// Page a path resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Home,
    /// `/room/:id`
    Room(String),
    /// Anything else, with the path that failed to match
    NotFound(String),
}

impl Route {
    /// Matches a path against `/` and `/room/:id`.
    ///
    /// `:id` is a single non-empty segment, so `/room/` and `/room/a/b` do not match.
    pub fn parse(path: &str) -> Self {
        if path.is_empty() || path == "/" {
            return Route::Home;
        }

        match path.strip_prefix(ROOM_PATH_PREFIX) {
            Some(id) if !id.is_empty() && !id.contains('/') => Route::Room(id.to_string()),
            _ => Route::NotFound(path.to_string()),
        }
    }
}
