mod error;
mod image;
mod navigation;
mod render;
mod wardrobe;

pub use error::DomainError;
pub use image::{is_hidden_entry, Category, ImageId, HIDDEN_FILE_MARKER};
pub use navigation::{step, Direction};
pub use render::{DisplaySize, RenderedImage};
pub use wardrobe::{ImageSequence, Outfit, Wardrobe};
