pub mod home;
pub mod not_found;
pub mod room;

pub use home::HomeScreen;
pub use not_found::NotFound;
pub use room::Room;
