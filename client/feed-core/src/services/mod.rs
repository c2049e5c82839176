//! Business logic layer: the feed store and its collaborating workflows.

pub mod feed;
pub mod publish;
pub mod viewport;

pub use feed::{FeedStore, LOAD_ERROR_MESSAGE};
pub use publish::{PublishConfig, PublishPhase, PublishSimulator, PLACEHOLDER_IMAGE_URL};
pub use viewport::{ActiveItemSelector, ItemBounds};
