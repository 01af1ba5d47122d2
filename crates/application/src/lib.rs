mod error;
mod ports;
mod service;
mod use_cases;

pub use error::ApplicationError;
pub use ports::{AudioCue, CatalogSource, ImageRenderer, RandomSource};
pub use service::{ApplicationService, OutfitView, RenderedSlot};
pub use use_cases::{
    CreateOutfitCommand, LoadWardrobeCommand, PickOutfitCommand, RenderSelectionCommand,
    StepCategoryCommand,
};
