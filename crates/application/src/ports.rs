use std::path::Path;

use wardrobe_domain::{DisplaySize, ImageId, RenderedImage};

use crate::ApplicationError;

/// Lists the images of one category folder.
pub trait CatalogSource {
    /// Returns the visible entries of `folder` in enumeration order, or an
    /// `Io` error when the folder is missing or unreadable.
    fn list_images(&self, folder: &Path) -> Result<Vec<ImageId>, ApplicationError>;
}

pub trait ImageRenderer {
    /// Decodes `image` and fits it to `size`.
    fn render_image(
        &self,
        image: &ImageId,
        size: DisplaySize,
    ) -> Result<RenderedImage, ApplicationError>;
}

pub trait AudioCue {
    /// Starts playing `sound` without waiting for it to finish.
    fn play_effect(&self, sound: &Path) -> Result<(), ApplicationError>;
}

pub trait RandomSource {
    /// Uniform draw from `0..upper`; `upper` is never zero.
    fn pick_index(&mut self, upper: usize) -> usize;
}
