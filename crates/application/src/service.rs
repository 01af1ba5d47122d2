use tracing::{debug, error, info, warn};
use wardrobe_domain::{
    Category, DisplaySize, ImageId, ImageSequence, Outfit, RenderedImage, Wardrobe,
};

use crate::{
    ApplicationError, AudioCue, CatalogSource, CreateOutfitCommand, ImageRenderer,
    LoadWardrobeCommand, PickOutfitCommand, RandomSource, RenderSelectionCommand,
    StepCategoryCommand,
};

/// Image currently shown for one category, already fitted to the display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSlot {
    pub category: Category,
    pub image: ImageId,
    pub frame: RenderedImage,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutfitView {
    pub top: RenderedSlot,
    pub bottom: RenderedSlot,
}

pub struct ApplicationService {
    catalog: Box<dyn CatalogSource>,
    renderer: Box<dyn ImageRenderer>,
    audio: Box<dyn AudioCue>,
    random: Box<dyn RandomSource>,
}

impl ApplicationService {
    pub fn new(
        catalog: Box<dyn CatalogSource>,
        renderer: Box<dyn ImageRenderer>,
        audio: Box<dyn AudioCue>,
        random: Box<dyn RandomSource>,
    ) -> Self {
        Self {
            catalog,
            renderer,
            audio,
            random,
        }
    }

    pub fn load_wardrobe(
        &self,
        command: LoadWardrobeCommand,
    ) -> Result<Wardrobe, ApplicationError> {
        if command.tops_folder.as_os_str().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "tops folder must not be empty".to_string(),
            ));
        }
        if command.bottoms_folder.as_os_str().is_empty() {
            return Err(ApplicationError::InvalidInput(
                "bottoms folder must not be empty".to_string(),
            ));
        }

        let tops = ImageSequence::new(
            Category::Tops,
            self.catalog.list_images(&command.tops_folder)?,
        );
        let bottoms = ImageSequence::new(
            Category::Bottoms,
            self.catalog.list_images(&command.bottoms_folder)?,
        );

        let wardrobe = Wardrobe::new(tops, bottoms)?;
        for category in Category::ALL {
            let sequence = wardrobe.sequence(category);
            info!(
                category = category.label(),
                count = sequence.len(),
                images = ?sequence.images().iter().map(ImageId::as_str).collect::<Vec<_>>(),
                "catalog loaded"
            );
        }
        Ok(wardrobe)
    }

    pub fn render_selection(
        &self,
        wardrobe: &Wardrobe,
        command: RenderSelectionCommand,
    ) -> RenderedSlot {
        self.render_slot(command.category, wardrobe.current(command.category), command.size)
    }

    pub fn step_category(
        &self,
        wardrobe: &mut Wardrobe,
        command: StepCategoryCommand,
    ) -> Result<RenderedSlot, ApplicationError> {
        let category = command.category;
        let advanced = wardrobe
            .advance(category, command.direction)
            .map(ImageId::clone);
        let image = match advanced {
            Ok(image) => image,
            Err(error) if error.is_invariant_violation() => {
                error!(category = category.label(), %error, "selection reset to first image");
                wardrobe.reset(category).clone()
            }
            Err(error) => return Err(error.into()),
        };

        debug!(
            category = category.label(),
            direction = ?command.direction,
            image = image.as_str(),
            "stepped"
        );
        Ok(self.render_slot(category, &image, command.size))
    }

    /// Draws a fresh outfit without rendering it or playing any sound.
    pub fn pick_outfit(
        &mut self,
        wardrobe: &mut Wardrobe,
        _command: PickOutfitCommand,
    ) -> Result<Outfit, ApplicationError> {
        let top_index = self.random.pick_index(wardrobe.sequence(Category::Tops).len());
        let bottom_index = self
            .random
            .pick_index(wardrobe.sequence(Category::Bottoms).len());

        match wardrobe.select_indices(top_index, bottom_index) {
            Ok(outfit) => Ok(outfit),
            Err(error) if error.is_invariant_violation() => {
                error!(%error, "random draw out of range, outfit reset to first images");
                for category in Category::ALL {
                    wardrobe.reset(category);
                }
                Ok(wardrobe.outfit())
            }
            Err(error) => Err(error.into()),
        }
    }

    pub fn create_outfit(
        &mut self,
        wardrobe: &mut Wardrobe,
        command: CreateOutfitCommand,
    ) -> Result<OutfitView, ApplicationError> {
        let outfit = self.pick_outfit(wardrobe, PickOutfitCommand)?;
        info!(
            top = outfit.top.as_str(),
            bottom = outfit.bottom.as_str(),
            "outfit created"
        );

        let view = OutfitView {
            top: self.render_slot(Category::Tops, &outfit.top, command.size),
            bottom: self.render_slot(Category::Bottoms, &outfit.bottom, command.size),
        };

        if let Err(error) = self.audio.play_effect(&command.sound_effect) {
            warn!(
                sound = %command.sound_effect.display(),
                %error,
                "sound effect skipped"
            );
        }

        Ok(view)
    }

    fn render_slot(&self, category: Category, image: &ImageId, size: DisplaySize) -> RenderedSlot {
        let frame = match self.renderer.render_image(image, size) {
            Ok(frame) => frame,
            Err(error) => {
                warn!(image = image.as_str(), %error, "showing placeholder");
                RenderedImage::placeholder(size)
            }
        };

        RenderedSlot {
            category,
            image: image.clone(),
            frame,
        }
    }
}
