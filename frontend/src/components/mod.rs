//! Reusable UI components

mod button;
mod card;
mod empty_state;
mod feature_tile;
mod particles;

pub use button::Button;
pub use card::{CARD_PADDING, Card};
pub use empty_state::EmptyState;
pub use feature_tile::{FEATURES, FeatureTile};
pub use particles::{Particle, ParticleField, paint_particles};
